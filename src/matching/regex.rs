//! Regex-catalog matcher (spec.md §4.2). The spec mandates exactly one
//! entry, `recent_year`; additional catalog entries can be added here
//! without disturbing existing match coordinates on overlap.

use regex::Regex;

use super::{token_of, Match};

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2050;

lazy_static! {
    // `[0-9]` rather than `\d`: the latter matches any Unicode decimal
    // digit (e.g. Arabic-Indic), which `str::parse::<i32>` can't read.
    static ref FOUR_DIGITS: Regex = Regex::new(r"[0-9]{4}").unwrap();
}

pub fn regex_match(password: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    let s: String = password.iter().collect();

    for found in FOUR_DIGITS.find_iter(&s) {
        let Ok(year) = found.as_str().parse::<i32>() else {
            continue;
        };
        if year < MIN_YEAR || year > MAX_YEAR {
            continue;
        }
        let start_char = s[..found.start()].chars().count();
        let end_char = start_char + 3;
        matches.push(
            Match::default()
                .pattern("regex")
                .i(start_char)
                .j(end_char)
                .token(token_of(password, start_char, end_char))
                .regex_name(Some("recent_year"))
                .regex_match(Some(vec![found.as_str().to_string()]))
                .build(),
        );
    }
    matches
}
