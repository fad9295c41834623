//! Crack-time derivation (spec.md §4.4 "Supplemented features"): turns a raw
//! guess count into the four attacker-scenario timings the real zxcvbn
//! project reports, plus a human-readable display string for each.

use std::fmt;

#[cfg(feature = "ser")]
use serde_derive::Serialize;

/// Seconds-per-guess throughput for each of the four canonical attacker
/// scenarios. Lifted from the upstream project's own `time_estimates.rs`.
const ONLINE_THROTTLING_GUESSES_PER_SECOND: f64 = 100.0 / 3600.0;
const ONLINE_NO_THROTTLING_GUESSES_PER_SECOND: f64 = 10.0;
const OFFLINE_SLOW_HASHING_GUESSES_PER_SECOND: f64 = 1e4;
const OFFLINE_FAST_HASHING_GUESSES_PER_SECOND: f64 = 1e10;

/// Crack time, in seconds, under each of four attacker-resourcing scenarios.
#[cfg_attr(feature = "ser", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackTimesSeconds {
    pub online_throttling_100_per_hour: f64,
    pub online_no_throttling_10_per_second: f64,
    pub offline_slow_hashing_1e4_per_second: f64,
    pub offline_fast_hashing_1e10_per_second: f64,
}

/// Human-readable renderings of [`CrackTimesSeconds`], e.g. "3 hours",
/// "centuries".
#[cfg_attr(feature = "ser", derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct CrackTimesDisplay {
    pub online_throttling_100_per_hour: String,
    pub online_no_throttling_10_per_second: String,
    pub offline_slow_hashing_1e4_per_second: String,
    pub offline_fast_hashing_1e10_per_second: String,
}

/// 0-4 score derived directly from the raw guess count, per spec.md §4.4's
/// score thresholds.
#[cfg_attr(feature = "ser", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(pub u8);

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub(crate) fn estimate_crack_times(guesses: f64) -> (CrackTimesSeconds, CrackTimesDisplay, Score) {
    let seconds = CrackTimesSeconds {
        online_throttling_100_per_hour: guesses / ONLINE_THROTTLING_GUESSES_PER_SECOND,
        online_no_throttling_10_per_second: guesses / ONLINE_NO_THROTTLING_GUESSES_PER_SECOND,
        offline_slow_hashing_1e4_per_second: guesses / OFFLINE_SLOW_HASHING_GUESSES_PER_SECOND,
        offline_fast_hashing_1e10_per_second: guesses / OFFLINE_FAST_HASHING_GUESSES_PER_SECOND,
    };

    let display = CrackTimesDisplay {
        online_throttling_100_per_hour: display_time(seconds.online_throttling_100_per_hour),
        online_no_throttling_10_per_second: display_time(seconds.online_no_throttling_10_per_second),
        offline_slow_hashing_1e4_per_second: display_time(seconds.offline_slow_hashing_1e4_per_second),
        offline_fast_hashing_1e10_per_second: display_time(seconds.offline_fast_hashing_1e10_per_second),
    };

    let score = guesses_to_score(guesses);

    (seconds, display, score)
}

/// `+5`-epsilon thresholds: a password whose guesses sit just below a bucket
/// boundary (owing to floating-point rounding through the search) still
/// lands in the higher bucket rather than being unfairly penalized.
fn guesses_to_score(guesses: f64) -> Score {
    const DELTA: f64 = 5.0;
    if guesses < 1e3 + DELTA {
        Score(0)
    } else if guesses < 1e6 + DELTA {
        Score(1)
    } else if guesses < 1e8 + DELTA {
        Score(2)
    } else if guesses < 1e10 + DELTA {
        Score(3)
    } else {
        Score(4)
    }
}

const MINUTE: f64 = 60.0;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const MONTH: f64 = 31.0 * DAY;
const YEAR: f64 = 365.0 * DAY;
const CENTURY: f64 = 100.0 * YEAR;

fn display_time(seconds: f64) -> String {
    if seconds.is_infinite() || seconds > CENTURY {
        "centuries".to_string()
    } else if seconds < 1.0 {
        "less than a second".to_string()
    } else if seconds < MINUTE {
        pluralize(seconds.round() as i64, "second")
    } else if seconds < HOUR {
        pluralize((seconds / MINUTE).round() as i64, "minute")
    } else if seconds < DAY {
        pluralize((seconds / HOUR).round() as i64, "hour")
    } else if seconds < MONTH {
        pluralize((seconds / DAY).round() as i64, "day")
    } else if seconds < YEAR {
        pluralize((seconds / MONTH).round() as i64, "month")
    } else if seconds < CENTURY {
        pluralize((seconds / YEAR).round() as i64, "year")
    } else {
        "centuries".to_string()
    }
}

fn pluralize(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn less_than_a_second_for_tiny_guess_counts() {
        assert_eq!(display_time(0.4), "less than a second");
    }

    #[test]
    fn pluralizes_units() {
        assert_eq!(display_time(1.0), "1 second");
        assert_eq!(display_time(2.0), "2 seconds");
        assert_eq!(display_time(MINUTE), "1 minute");
        assert_eq!(display_time(2.0 * HOUR), "2 hours");
    }

    #[test]
    fn centuries_cap_for_huge_guess_counts() {
        assert_eq!(display_time(CENTURY * 2.0), "centuries");
    }

    #[test]
    fn score_buckets_follow_threshold_epsilon() {
        assert_eq!(guesses_to_score(10.0), Score(0));
        assert_eq!(guesses_to_score(1e3 + 5.0), Score(1));
        assert_eq!(guesses_to_score(1e6 + 5.0), Score(2));
        assert_eq!(guesses_to_score(1e8 + 5.0), Score(3));
        assert_eq!(guesses_to_score(1e10 + 5.0), Score(4));
    }

    #[test]
    fn crack_times_scale_inversely_with_guesses_per_second() {
        let (seconds, _, _) = estimate_crack_times(1e6);
        assert!(
            seconds.offline_fast_hashing_1e10_per_second
                < seconds.offline_slow_hashing_1e4_per_second
        );
        assert!(
            seconds.offline_slow_hashing_1e4_per_second
                < seconds.online_no_throttling_10_per_second
        );
        assert!(
            seconds.online_no_throttling_10_per_second
                < seconds.online_throttling_100_per_hour
        );
    }
}
