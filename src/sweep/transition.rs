//! Transition point acquisition
//!
//! The sweep engine needs, per beam, the position T at which the material
//! changes from segment 1 to segment 2, with `0 < T < L`. How T is
//! acquired — interactive prompt, configuration map, fixed policy — is an
//! acquisition concern, abstracted behind [`TransitionProvider`] so it can
//! be swapped without touching the engine.
//!
//! # Implementations
//!
//! - [`FixedTransitions`]: a beam-name → T map, validated at lookup;
//!   fails fast with a descriptive error (non-interactive acquisition)
//! - [`MidspanTransitions`]: always L/2 — the documented fallback policy
//!   when no explicit value exists for a beam
//! - [`PromptTransitions`]: reads T from an input stream, rejecting
//!   malformed or out-of-range values and re-prompting until valid
//!   (interactive acquisition)

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{BufRead, Write};

use crate::library::Beam;

/// Source of the per-beam transition point
///
/// # Contract
///
/// For every beam handed to the sweep engine, `transition_point` must
/// either return a value strictly inside `(0, beam.length())` or an error.
/// The engine calls it exactly once per beam, before any evaluation of
/// that beam begins.
pub trait TransitionProvider {
    /// Transition point T \[m\] for `beam`, validated to `0 < T < L`
    fn transition_point(&self, beam: &Beam) -> Result<f64, String>;
}

/// Validate a candidate transition point against a beam's span.
///
/// Shared by every provider so the acceptance rule cannot drift between
/// interactive and non-interactive acquisition.
pub(crate) fn validate_transition(beam: &Beam, t: f64) -> Result<f64, String> {
    if !t.is_finite() {
        return Err(format!(
            "Transition point for beam '{}' must be a finite number, got {}",
            beam.name(),
            t
        ));
    }
    if t <= 0.0 || t >= beam.length() {
        return Err(format!(
            "Transition point for beam '{}' must be between 0 and {} meters, got {}",
            beam.name(),
            beam.length(),
            t
        ));
    }
    Ok(t)
}

// =================================================================================================
// Fixed map provider (non-interactive)
// =================================================================================================

/// Transition points supplied up front as a beam-name → T map
///
/// # Example
///
/// ```rust
/// use beam_rs::library::{Beam, SectionProfile};
/// use beam_rs::sweep::{FixedTransitions, TransitionProvider};
///
/// let beam = Beam::new(
///     "Girder",
///     4.0,
///     SectionProfile::Rectangular { width: 0.1, height: 0.1 },
/// );
///
/// let transitions = FixedTransitions::from_pairs([("Girder", 1.5)]);
/// assert_eq!(transitions.transition_point(&beam), Ok(1.5));
/// ```
#[derive(Clone, Debug, Default)]
pub struct FixedTransitions {
    values: HashMap<String, f64>,
}

impl FixedTransitions {
    /// Create from an existing map
    pub fn new(values: HashMap<String, f64>) -> Self {
        Self { values }
    }

    /// Create from (beam name, T) pairs
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            values: pairs.into_iter().map(|(name, t)| (name.into(), t)).collect(),
        }
    }

    /// Insert or replace the value for one beam
    pub fn set(&mut self, beam_name: impl Into<String>, t: f64) {
        self.values.insert(beam_name.into(), t);
    }
}

impl TransitionProvider for FixedTransitions {
    fn transition_point(&self, beam: &Beam) -> Result<f64, String> {
        match self.values.get(beam.name()) {
            Some(&t) => validate_transition(beam, t),
            None => Err(format!(
                "No transition point supplied for beam '{}'",
                beam.name()
            )),
        }
    }
}

// =================================================================================================
// Midspan provider (fallback policy)
// =================================================================================================

/// Always places the transition at midspan, T = L/2
///
/// This is the documented fallback when no explicit transition point
/// exists for a beam; downstream consumers (plotting) use it rather than
/// failing.
#[derive(Clone, Copy, Debug, Default)]
pub struct MidspanTransitions;

impl TransitionProvider for MidspanTransitions {
    fn transition_point(&self, beam: &Beam) -> Result<f64, String> {
        Ok(beam.length() / 2.0)
    }
}

// =================================================================================================
// Interactive provider
// =================================================================================================

/// Reads the transition point from an input stream, re-prompting until a
/// valid value arrives
///
/// Malformed numbers and values outside `(0, L)` are rejected with a
/// message and the prompt repeats — never silently coerced. The reader is
/// generic so tests can drive it with a [`std::io::Cursor`]; production
/// code wraps stdin.
///
/// # Example
///
/// ```rust
/// use std::io::Cursor;
/// use beam_rs::library::{Beam, SectionProfile};
/// use beam_rs::sweep::{PromptTransitions, TransitionProvider};
///
/// let beam = Beam::new(
///     "Girder",
///     4.0,
///     SectionProfile::Rectangular { width: 0.1, height: 0.1 },
/// );
///
/// // First two answers are invalid; the third is accepted.
/// let input = Cursor::new("abc\n9.0\n1.5\n");
/// let prompt = PromptTransitions::new(input);
/// assert_eq!(prompt.transition_point(&beam), Ok(1.5));
/// ```
pub struct PromptTransitions<R: BufRead> {
    input: RefCell<R>,
}

impl<R: BufRead> PromptTransitions<R> {
    /// Create a provider reading from `input`
    pub fn new(input: R) -> Self {
        Self {
            input: RefCell::new(input),
        }
    }
}

impl PromptTransitions<std::io::BufReader<std::io::Stdin>> {
    /// Provider reading interactively from stdin
    pub fn stdin() -> Self {
        Self::new(std::io::BufReader::new(std::io::stdin()))
    }
}

impl<R: BufRead> TransitionProvider for PromptTransitions<R> {
    fn transition_point(&self, beam: &Beam) -> Result<f64, String> {
        let mut input = self.input.borrow_mut();
        let mut line = String::new();

        loop {
            print!(
                "Enter the transition point T [m] for beam '{}' (0 < T < {}): ",
                beam.name(),
                beam.length()
            );
            let _ = std::io::stdout().flush();

            line.clear();
            let read = input
                .read_line(&mut line)
                .map_err(|e| format!("Failed to read transition point: {}", e))?;

            if read == 0 {
                return Err(format!(
                    "Input ended before a valid transition point was given for beam '{}'",
                    beam.name()
                ));
            }

            match line.trim().parse::<f64>() {
                Ok(t) => match validate_transition(beam, t) {
                    Ok(t) => return Ok(t),
                    Err(reason) => println!("{}", reason),
                },
                Err(_) => {
                    println!("Invalid input. Please enter a numerical value for T.");
                }
            }
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
