//! An entropy-based password strength estimator, modeled after the zxcvbn
//! algorithm originally written for Javascript by Dropbox.
//!
//! ```
//! let estimate = zxcvbn::zxcvbn("correcthorsebatterystaple", &[]).unwrap();
//! assert!(estimate.score() >= 3);
//! ```

#[macro_use]
extern crate lazy_static;

use std::collections::HashMap;
use std::fmt;

use time::{Duration, Instant};

#[cfg(feature = "ser")]
use serde_derive::Serialize;

pub mod adjacency_graphs;
pub mod feedback;
pub mod frequency_lists;
pub mod matching;
pub mod scoring;
pub mod time_estimates;

pub use adjacency_graphs::load_adjacency_graphs;
pub use feedback::{set_translator, Feedback, FeedbackMsg};
pub use frequency_lists::load_dictionaries;
pub use matching::Match;
pub use time_estimates::{CrackTimesDisplay, CrackTimesSeconds};

/// A password longer than this is truncated to this many Unicode scalar
/// values before evaluation (spec.md §6).
pub const DEFAULT_MAX_LENGTH: usize = 72;

/// Errors [`zxcvbn`] can return.
///
/// `InvalidInput` exists for API completeness with non-Rust hosts that hand
/// this crate raw bytes before UTF-8 validation; a Rust `&str` is always
/// valid UTF-8, so a safe Rust caller can never actually trigger it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ZxcvbnError {
    /// The password given was blank.
    BlankPassword,
    /// The input was not well-formed (unreachable from safe Rust callers;
    /// reserved for non-UTF-8 host integrations).
    InvalidInput,
}

impl fmt::Display for ZxcvbnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZxcvbnError::BlankPassword => write!(f, "no password given"),
            ZxcvbnError::InvalidInput => write!(f, "input was not valid"),
        }
    }
}

impl std::error::Error for ZxcvbnError {}

/// The full result of estimating a password's strength (spec.md §3
/// `Result`), named `Entropy` to avoid colliding with [`std::result::Result`].
#[cfg_attr(feature = "ser", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Entropy {
    password: String,
    score: u8,
    guesses: f64,
    guesses_log10: f64,
    sequence: Vec<Match>,
    #[cfg_attr(feature = "ser", serde(skip))]
    calculation_time: Duration,
    crack_times_seconds: CrackTimesSeconds,
    crack_times_display: CrackTimesDisplay,
    feedback: Feedback,
}

impl Entropy {
    /// The (possibly truncated) password this result was computed for.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Integer strength score in `[0, 4]`.
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Estimated number of guesses needed to crack the password.
    pub fn guesses(&self) -> f64 {
        self.guesses
    }

    /// `log10(guesses())`.
    pub fn guesses_log10(&self) -> f64 {
        self.guesses_log10
    }

    /// The optimal tiling of matches the guess estimate is based on.
    pub fn sequence(&self) -> &[Match] {
        &self.sequence
    }

    /// Wall-clock time the evaluation itself took.
    pub fn calculation_time(&self) -> Duration {
        self.calculation_time
    }

    /// Crack time, in seconds, under each of the four attacker scenarios.
    pub fn crack_times_seconds(&self) -> CrackTimesSeconds {
        self.crack_times_seconds
    }

    /// Humanized crack time under each of the four attacker scenarios.
    pub fn crack_times_display(&self) -> &CrackTimesDisplay {
        &self.crack_times_display
    }

    /// Warning + suggestions, empty whenever `score() >= 3`.
    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

/// Estimates the strength of `password`, using `user_inputs` (names,
/// emails, company, etc.) as an ad-hoc extra dictionary ranked by the order
/// they're given in (earliest = rank 1, most guessable).
///
/// Truncates `password` to [`DEFAULT_MAX_LENGTH`] Unicode scalar values
/// before evaluation; see [`zxcvbn_with_max_length`] to change that.
pub fn zxcvbn(password: &str, user_inputs: &[&str]) -> Result<Entropy, ZxcvbnError> {
    zxcvbn_with_max_length(password, user_inputs, DEFAULT_MAX_LENGTH)
}

/// As [`zxcvbn`], but truncates `password` to `max_length` Unicode scalar
/// values instead of the default 72 (spec.md §6).
pub fn zxcvbn_with_max_length(
    password: &str,
    user_inputs: &[&str],
    max_length: usize,
) -> Result<Entropy, ZxcvbnError> {
    let start_time = Instant::now();

    let truncated: Vec<char> = password.chars().take(max_length).collect();
    let truncated_password: String = truncated.iter().collect();

    let user_inputs: HashMap<String, usize> = user_inputs
        .iter()
        .enumerate()
        .map(|(idx, input)| (input.to_lowercase(), idx + 1))
        .collect();

    let (sequence, total_guesses) = {
        let matches = matching::omnimatch(&truncated, &user_inputs, &|chars| {
            evaluate(chars, &user_inputs)
        });
        let result = scoring::most_guessable_match_sequence(&truncated, &matches);
        (result.sequence, result.guesses)
    };

    let (crack_times_seconds, crack_times_display, score) =
        time_estimates::estimate_crack_times(total_guesses);

    let feedback = feedback::get_feedback(score.0, &sequence);

    Ok(Entropy {
        password: truncated_password,
        score: score.0,
        guesses: total_guesses,
        guesses_log10: total_guesses.log10(),
        sequence,
        calculation_time: start_time.elapsed(),
        crack_times_seconds,
        crack_times_display,
        feedback,
    })
}

/// The full matcher + search pipeline, injected into [`matching::omnimatch`]
/// so the repeat matcher can recursively score a base token without this
/// crate's matcher modules needing to depend on `scoring`/`lib` directly.
fn evaluate(password: &[char], user_inputs: &HashMap<String, usize>) -> u64 {
    let matches = matching::omnimatch(password, user_inputs, &|chars| evaluate(chars, user_inputs));
    scoring::most_guessable_match_sequence(password, &matches)
        .guesses
        .round()
        .max(1.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_password_still_scores_rather_than_erroring() {
        // BlankPassword is reserved for hosts that want to reject an empty
        // password themselves before calling in; the evaluator treats ""
        // as a valid, trivially weak password.
        let estimate = zxcvbn("", &[]).unwrap();
        assert_eq!(estimate.score(), 0);
        assert_eq!(estimate.guesses(), 1.0);
        assert!(estimate.sequence().is_empty());
    }

    #[test]
    fn weak_password_scores_low() {
        let estimate = zxcvbn("password", &[]).unwrap();
        assert_eq!(estimate.score(), 0);
        assert!(estimate.feedback().warning.is_some());
    }

    #[test]
    fn strong_password_scores_high_and_has_no_feedback() {
        let estimate = zxcvbn("correcthorsebatterystaple-9q!7Zx", &[]).unwrap();
        assert!(estimate.score() >= 3);
        assert!(estimate.feedback().warning.is_none());
        assert!(estimate.feedback().suggestions.is_empty());
    }

    #[test]
    fn user_inputs_are_penalized() {
        let estimate = zxcvbn("acme-corp2024", &["acme-corp"]).unwrap();
        assert!(estimate
            .sequence()
            .iter()
            .any(|m| m.dictionary_name == Some("user_inputs")));
    }

    #[test]
    fn truncates_to_max_length() {
        let long_password = "a".repeat(200);
        let estimate = zxcvbn_with_max_length(&long_password, &[], 10).unwrap();
        assert_eq!(estimate.password().chars().count(), 10);
    }

    #[test]
    fn determinism_across_repeated_calls() {
        let a = zxcvbn("Tr0ub4dor&3", &[]).unwrap();
        let b = zxcvbn("Tr0ub4dor&3", &[]).unwrap();
        assert_eq!(a.score(), b.score());
        assert_eq!(a.guesses(), b.guesses());
        assert_eq!(a.sequence(), b.sequence());
    }
}
