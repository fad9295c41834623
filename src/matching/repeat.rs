//! Repeat matcher (spec.md §4.2): finds maximal runs of a repeated base
//! unit (`"abcabcabc"`, `"aaaa"`, ...).
//!
//! Mirrors the upstream project's own trick for finding the *shortest*
//! repeating unit: run both a greedy (`(.+)\1+`) and a lazy (`(.+?)\1+`)
//! backreference match at each position and keep whichever actually spans
//! more of the password, falling back to the greedy match's own shortest
//! unit when the greedy span is longer.

use fancy_regex::Regex;

use super::{token_of, Match};

lazy_static! {
    static ref GREEDY: Regex = Regex::new(r"(.+)\1+").unwrap();
    static ref LAZY: Regex = Regex::new(r"(.+?)\1+").unwrap();
    static ref LAZY_ANCHORED: Regex = Regex::new(r"^(.+?)\1+$").unwrap();
}

fn byte_to_char_index(s: &str, byte_idx: usize) -> usize {
    s[..byte_idx].chars().count()
}

/// `evaluate` is the full (matcher + search) pipeline applied recursively to
/// the repeated base token, injected by the caller so this module doesn't
/// need to depend on the crate's top-level estimation entry point.
pub fn repeat_match(password: &[char], evaluate: &dyn Fn(&[char]) -> u64) -> Vec<Match> {
    let mut matches = Vec::new();
    let n = password.len();
    if n == 0 {
        return matches;
    }
    let mut last_index = 0usize;

    while last_index < n {
        let rest: String = password[last_index..].iter().collect();

        let greedy = GREEDY.find(&rest).ok().flatten();
        let Some(greedy) = greedy else { break };
        let lazy_caps = LAZY.captures(&rest).ok().flatten();

        let (whole, base_token) = match lazy_caps.as_ref().and_then(|c| c.get(0)) {
            Some(lazy) if greedy.end() - greedy.start() <= lazy.end() - lazy.start() => {
                let base = lazy_caps
                    .as_ref()
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| lazy.as_str().to_string());
                (lazy, base)
            }
            _ => {
                let whole_str = greedy.as_str();
                let caps = LAZY_ANCHORED.captures(whole_str).ok().flatten();
                let base = caps
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_else(|| whole_str.to_string());
                (greedy, base)
            }
        };

        let start_char = last_index + byte_to_char_index(&rest, whole.start());
        let end_char = last_index + byte_to_char_index(&rest, whole.end()) - 1;
        let base_token_chars: Vec<char> = base_token.chars().collect();
        let repeat_count = (end_char - start_char + 1) / base_token_chars.len().max(1);

        if repeat_count >= 2 && !base_token_chars.is_empty() {
            let base_guesses = evaluate(&base_token_chars);
            matches.push(
                Match::default()
                    .pattern("repeat")
                    .i(start_char)
                    .j(end_char)
                    .token(token_of(password, start_char, end_char))
                    .base_token(Some(base_token))
                    .base_guesses(Some(base_guesses))
                    .repeat_count(Some(repeat_count))
                    .build(),
            );
        }

        last_index = end_char + 1;
    }

    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn dummy_evaluate(base: &[char]) -> u64 {
        10u64.pow(base.len() as u32)
    }

    #[test]
    fn finds_simple_char_repeat() {
        let matches = repeat_match(&chars("aaaa"), &dummy_evaluate);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.i, 0);
        assert_eq!(m.j, 3);
        assert_eq!(m.base_token.as_deref(), Some("a"));
        assert_eq!(m.repeat_count, Some(4));
    }

    #[test]
    fn finds_multichar_base_repeat() {
        let matches = repeat_match(&chars("abcabcabc"), &dummy_evaluate);
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.base_token.as_deref(), Some("abc"));
        assert_eq!(m.repeat_count, Some(3));
    }

    #[test]
    fn no_match_without_repetition() {
        let matches = repeat_match(&chars("abcdef"), &dummy_evaluate);
        assert!(matches.is_empty());
    }
}
