//! Matchers: find every substring of a password that matches a known
//! weakness pattern, and tag it as a [`Match`].

mod date;
mod dictionary;
mod regex;
mod repeat;
mod sequence;
mod spatial;

use std::collections::HashMap;

#[cfg(feature = "builder")]
use derive_builder::Builder;
#[cfg(feature = "ser")]
use serde_derive::Serialize;

/// One weakness found in the password: a tagged, half-open-turned-inclusive
/// `[i, j]` span plus whichever pattern-specific fields its matcher filled
/// in. `guesses` starts `None` and is filled once by the estimator
/// ([`crate::scoring`]) the first time it is asked for.
#[cfg_attr(feature = "builder", derive(Builder))]
#[cfg_attr(feature = "builder", builder(default, build_fn(private, name = "fallible_build")))]
#[cfg_attr(feature = "ser", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Match {
    /// Discriminant: one of "dictionary", "spatial", "repeat", "sequence",
    /// "regex", "date", "bruteforce".
    pub pattern: &'static str,
    /// Start index, inclusive, in Unicode scalar values.
    pub i: usize,
    /// End index, inclusive, in Unicode scalar values.
    pub j: usize,
    /// `password[i..=j]`, collected from `char`s.
    pub token: String,
    /// Filled in by the estimator; `None` until then.
    pub guesses: Option<u64>,

    // -- dictionary / reverse / l33t --
    pub dictionary_name: Option<&'static str>,
    pub matched_word: Option<String>,
    pub rank: Option<usize>,
    pub reversed: bool,
    pub l33t: bool,
    pub sub: Option<HashMap<char, char>>,
    pub sub_display: Option<String>,
    pub base_guesses: Option<u64>,
    pub uppercase_variations: Option<u64>,
    pub l33t_variations: Option<u64>,

    // -- spatial --
    pub graph: Option<&'static str>,
    pub turns: Option<usize>,
    pub shifted_count: Option<usize>,

    // -- repeat --
    pub base_token: Option<String>,
    pub repeat_count: Option<usize>,

    // -- sequence --
    pub sequence_name: Option<&'static str>,
    pub sequence_space: Option<usize>,
    pub ascending: Option<bool>,

    // -- regex --
    pub regex_name: Option<&'static str>,
    pub regex_match: Option<Vec<String>>,

    // -- date --
    pub year: Option<i16>,
    pub month: Option<i8>,
    pub day: Option<i8>,
    pub separator: Option<String>,
}

#[cfg(feature = "builder")]
impl MatchBuilder {
    /// Every field carries a default, so the fallible build derive_builder
    /// generates can never actually fail; unwrap it away.
    pub fn build(&self) -> Match {
        self.fallible_build()
            .expect("Match has a default for every field")
    }
}

impl Match {
    /// Shadows the `Default::default()` impl with one that returns a
    /// builder, so callers write `Match::default().i(0).j(3).build()`.
    #[cfg(feature = "builder")]
    #[allow(clippy::should_implement_trait)]
    pub fn default() -> MatchBuilder {
        MatchBuilder::default()
    }
}

/// L33t substitution table: substitute char -> candidate original letters.
/// Reproduced byte-for-byte; callers must not add or remove entries.
pub fn l33t_table() -> &'static HashMap<char, Vec<char>> {
    &L33T_TABLE
}

lazy_static! {
    static ref L33T_TABLE: HashMap<char, Vec<char>> = {
        let mut table = HashMap::new();
        table.insert('4', vec!['a']);
        table.insert('@', vec!['a']);
        table.insert('(', vec!['c']);
        table.insert('{', vec!['c']);
        table.insert('[', vec!['c']);
        table.insert('<', vec!['c']);
        table.insert('3', vec!['e']);
        table.insert('6', vec!['g']);
        table.insert('9', vec!['g']);
        table.insert('1', vec!['i', 'l']);
        table.insert('!', vec!['i']);
        table.insert('|', vec!['i', 'l']);
        table.insert('0', vec!['o']);
        table.insert('$', vec!['s']);
        table.insert('5', vec!['s']);
        table.insert('+', vec!['t']);
        table.insert('7', vec!['t', 'l']);
        table.insert('8', vec!['b']);
        table.insert('%', vec!['x']);
        table.insert('2', vec!['z']);
        table
    };
}

/// Runs every matcher against `password`, then concatenates, dedups, and
/// sorts the result by `(i, j)`.
///
/// `user_inputs` is the ad-hoc "user_inputs" dictionary: each entry's rank
/// is its position in the slice (1-based, rank 1 = most common). `evaluate`
/// is the full matcher+search pipeline, injected so the repeat matcher can
/// recursively score its base token without this module depending on
/// `crate::scoring` or `crate::lib` directly.
pub fn omnimatch(
    password: &[char],
    user_inputs: &HashMap<String, usize>,
    evaluate: &dyn Fn(&[char]) -> u64,
) -> Vec<Match> {
    let mut matches = Vec::new();
    matches.extend(dictionary::dictionary_match(password, user_inputs));
    matches.extend(dictionary::reverse_dictionary_match(password, user_inputs));
    matches.extend(dictionary::l33t_match(password, user_inputs));
    matches.extend(spatial::spatial_match(password));
    matches.extend(repeat::repeat_match(password, evaluate));
    matches.extend(sequence::sequence_match(password));
    matches.extend(regex::regex_match(password));
    matches.extend(date::date_match(password));

    matches.sort_by_key(|m| (m.i, m.j));
    matches.dedup_by(|a, b| a.i == b.i && a.j == b.j && a.pattern == b.pattern && a.token == b.token);
    matches
}

/// Collects `password[i..=j]` (inclusive, char-indexed) into an owned `String`.
pub(crate) fn token_of(password: &[char], i: usize, j: usize) -> String {
    password[i..=j].iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l33t_table_has_spec_mandated_entries() {
        let table = l33t_table();
        assert_eq!(table[&'4'], vec!['a']);
        assert_eq!(table[&'@'], vec!['a']);
        assert_eq!(table[&'1'], vec!['i', 'l']);
        assert_eq!(table[&'0'], vec!['o']);
        assert_eq!(table[&'$'], vec!['s']);
        assert_eq!(table[&'5'], vec!['s']);
        assert_eq!(table[&'8'], vec!['b']);
    }

    #[test]
    fn builder_round_trip() {
        let m = Match::default()
            .pattern("bruteforce")
            .i(0usize)
            .j(3usize)
            .token("abcd".to_string())
            .build();
        assert_eq!(m.pattern, "bruteforce");
        assert_eq!(m.i, 0);
        assert_eq!(m.j, 3);
        assert_eq!(m.token, "abcd");
        assert_eq!(m.guesses, None);
    }

    #[test]
    fn omnimatch_is_sorted_and_deduped() {
        let password: Vec<char> = "password".chars().collect();
        let noop_evaluate = |_: &[char]| 1u64;
        let matches = omnimatch(&password, &HashMap::new(), &noop_evaluate);
        for w in matches.windows(2) {
            assert!((w[0].i, w[0].j) <= (w[1].i, w[1].j));
        }
    }
}
