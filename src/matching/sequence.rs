//! Sequence matcher (spec.md §4.2): arithmetic runs in code-point space
//! ("abcdef", "87654", "...").

use super::{token_of, Match};

const MAX_DELTA: i64 = 5;

pub fn sequence_match(password: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    let n = password.len();
    if n < 3 {
        return matches;
    }

    let mut i = 0;
    while i < n - 1 {
        let mut j = i;
        let mut delta: Option<i64> = None;

        while j + 1 < n {
            let step = password[j + 1] as i64 - password[j] as i64;
            match delta {
                None => {
                    if step != 0 && step.abs() <= MAX_DELTA {
                        delta = Some(step);
                        j += 1;
                    } else {
                        break;
                    }
                }
                Some(d) if d == step => j += 1,
                _ => break,
            }
        }

        let run_len = j - i + 1;
        if run_len >= 3 {
            let d = delta.unwrap();
            let (sequence_name, sequence_space) = classify(&password[i..=j]);
            matches.push(
                Match::default()
                    .pattern("sequence")
                    .i(i)
                    .j(j)
                    .token(token_of(password, i, j))
                    .sequence_name(Some(sequence_name))
                    .sequence_space(Some(sequence_space))
                    .ascending(Some(d > 0))
                    .build(),
            );
            i = j;
        } else {
            i += 1;
        }
    }
    matches
}

fn classify(run: &[char]) -> (&'static str, usize) {
    if run.iter().all(|c| c.is_ascii_digit()) {
        ("digits", 10)
    } else if run.iter().all(|c| c.is_ascii_lowercase()) {
        ("lower", 26)
    } else if run.iter().all(|c| c.is_ascii_uppercase()) {
        ("upper", 26)
    } else {
        ("unicode", 26)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn finds_ascending_lowercase_run() {
        let matches = sequence_match(&chars("abcdefghijk"));
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.i, 0);
        assert_eq!(m.j, 10);
        assert_eq!(m.sequence_name, Some("lower"));
        assert_eq!(m.ascending, Some(true));
    }

    #[test]
    fn finds_descending_digit_run() {
        let matches = sequence_match(&chars("9876543"));
        let m = &matches[0];
        assert_eq!(m.sequence_name, Some("digits"));
        assert_eq!(m.ascending, Some(false));
    }

    #[test]
    fn no_match_below_length_three() {
        assert!(sequence_match(&chars("ab")).is_empty());
    }

    #[test]
    fn no_match_when_delta_exceeds_max() {
        // a, j, s: delta 9 each time -- out of [1,5] range
        assert!(sequence_match(&chars("ajs")).is_empty());
    }
}
