//! Search (optimal tiling) and per-class guess estimation (spec.md §4.3, §4.4).
//!
//! Ported from the upstream project's own `scoring.rs`, generalized from
//! byte offsets to Unicode scalar value offsets (so multi-byte passwords
//! tile correctly) and from a two-graph qwerty/keypad split to the full,
//! named-graph lookup spec.md §4.1 calls for.

use std::cmp;
use std::collections::HashMap;

use crate::adjacency_graphs;
use crate::matching::Match;

#[derive(Debug, Clone)]
#[doc(hidden)]
pub struct GuessCalculation {
    /// Estimated guesses needed to crack the password.
    pub guesses: f64,
    /// `log10(guesses)`.
    pub guesses_log10: f64,
    /// The optimal tiling the guess calculation is based on.
    pub sequence: Vec<Match>,
}

#[derive(Debug, Clone)]
struct Optimal {
    /// optimal.m[k][l] holds the final match in the best length-l match
    /// sequence covering the password prefix up to k, inclusive.
    m: Vec<HashMap<usize, Match>>,
    /// optimal.pi[k][l] holds the product term Prod(m.guesses for m in sequence).
    pi: Vec<HashMap<usize, f64>>,
    /// optimal.g[k][l] holds the overall length-penalized objective.
    g: Vec<HashMap<usize, f64>>,
}

#[doc(hidden)]
pub const REFERENCE_YEAR: i32 = 2000;
const MIN_YEAR_SPACE: i32 = 20;
const BRUTEFORCE_CARDINALITY: f64 = 10.0;
const MIN_GUESSES_BEFORE_GROWING_SEQUENCE: f64 = 10000.0;
const MIN_SUBMATCH_GUESSES_SINGLE_CHAR: f64 = 10.0;
const MIN_SUBMATCH_GUESSES_MULTI_CHAR: f64 = 50.0;

/// Finds the tiling of `password` by `matches` (plus synthetic bruteforce
/// matches over any uncovered gaps) that minimizes the length-penalized
/// guess product of spec.md §4.3.
#[doc(hidden)]
pub fn most_guessable_match_sequence(password: &[char], matches: &[Match]) -> GuessCalculation {
    let n = password.len();

    if n == 0 {
        return GuessCalculation {
            guesses: 1.0,
            guesses_log10: 0.0,
            sequence: Vec::new(),
        };
    }

    let mut matches_by_j: Vec<Vec<Match>> = (0..n).map(|_| Vec::new()).collect();
    for m in matches {
        if m.j < n {
            matches_by_j[m.j].push(m.clone());
        }
    }
    for lst in &mut matches_by_j {
        lst.sort_by_key(|m| m.i);
    }

    let mut optimal = Optimal {
        m: (0..n).map(|_| HashMap::new()).collect(),
        pi: (0..n).map(|_| HashMap::new()).collect(),
        g: (0..n).map(|_| HashMap::new()).collect(),
    };

    fn update(mut m: Match, l: usize, password: &[char], optimal: &mut Optimal) {
        let k = m.j;
        let mut pi = estimate_guesses(&mut m, password);
        if l > 1 {
            pi *= optimal.pi[m.i - 1][&(l - 1)];
        }
        let mut g = factorial(l) * pi;
        if l > 1 {
            g += MIN_GUESSES_BEFORE_GROWING_SEQUENCE.powi(l as i32 - 1);
        }
        for (&competing_l, &competing_g) in &optimal.g[k] {
            if competing_l > l {
                continue;
            }
            if competing_g <= g {
                return;
            }
        }
        optimal.g[k].insert(l, g);
        optimal.m[k].insert(l, m);
        optimal.pi[k].insert(l, pi);
    }

    fn bruteforce_update(k: usize, password: &[char], optimal: &mut Optimal) {
        let m = make_bruteforce_match(0, k, password);
        update(m, 1, password, optimal);
        for i in 1..(k + 1) {
            let m = make_bruteforce_match(i, k, password);
            for (l, last_m) in optimal.m[i - 1].clone() {
                if last_m.pattern == "bruteforce" {
                    continue;
                }
                update(m.clone(), l + 1, password, optimal);
            }
        }
    }

    fn make_bruteforce_match(i: usize, j: usize, password: &[char]) -> Match {
        Match::default()
            .pattern("bruteforce")
            .token(password[i..=j].iter().collect::<String>())
            .i(i)
            .j(j)
            .build()
    }

    fn unwind(n: usize, optimal: &mut Optimal) -> Vec<Match> {
        let mut sequence = Vec::new();
        let mut k = n - 1;
        let mut l = None;
        let mut g = None;
        for (candidate_l, candidate_g) in &optimal.g[k] {
            if g.is_none() || *candidate_g < g.unwrap() {
                l = Some(*candidate_l);
                g = Some(*candidate_g);
            }
        }

        loop {
            let m = &optimal.m[k][&l.unwrap()];
            sequence.insert(0, m.clone());
            if m.i == 0 {
                break;
            }
            k = m.i - 1;
            l = l.map(|x| x - 1);
        }
        sequence
    }

    for (k, match_by_j) in matches_by_j.iter().enumerate() {
        for m in match_by_j {
            if m.i > 0 {
                let keys: Vec<usize> = optimal.m[m.i - 1].keys().cloned().collect();
                for l in keys {
                    update(m.clone(), l + 1, password, &mut optimal);
                }
            } else {
                update(m.clone(), 1, password, &mut optimal);
            }
        }
        bruteforce_update(k, password, &mut optimal);
    }

    let sequence = unwind(n, &mut optimal);
    let optimal_l = sequence.len();
    let guesses = optimal.g[n - 1][&optimal_l];

    GuessCalculation {
        guesses,
        guesses_log10: guesses.log10(),
        sequence,
    }
}

fn factorial(n: usize) -> f64 {
    if n < 2 {
        return 1.0;
    }
    (2..=n).fold(1.0, |acc, x| acc * x as f64)
}

fn estimate_guesses(m: &mut Match, password: &[char]) -> f64 {
    if let Some(guesses) = m.guesses {
        return guesses as f64;
    }
    let token_len = m.token.chars().count();
    let min_guesses = if token_len < password.len() {
        if token_len == 1 {
            MIN_SUBMATCH_GUESSES_SINGLE_CHAR
        } else {
            MIN_SUBMATCH_GUESSES_MULTI_CHAR
        }
    } else {
        1.0
    };
    let guesses = estimate_for_pattern(m);
    let guesses = guesses.max(min_guesses);
    m.guesses = Some(guesses.round().max(1.0) as u64);
    guesses
}

fn estimate_for_pattern(m: &mut Match) -> f64 {
    match m.pattern {
        "bruteforce" => bruteforce_guesses(m),
        "dictionary" => dictionary_guesses(m),
        "spatial" => spatial_guesses(m),
        "repeat" => repeat_guesses(m),
        "sequence" => sequence_guesses(m),
        "regex" => regex_guesses(m),
        "date" => date_guesses(m),
        other => unreachable!("unknown match pattern {other}"),
    }
}

fn bruteforce_guesses(m: &Match) -> f64 {
    let token_len = m.token.chars().count() as i32;
    let guesses = BRUTEFORCE_CARDINALITY.powi(token_len);
    let min_guesses = if token_len == 1 {
        MIN_SUBMATCH_GUESSES_SINGLE_CHAR + 1.0
    } else {
        MIN_SUBMATCH_GUESSES_MULTI_CHAR + 1.0
    };
    guesses.max(min_guesses)
}

fn dictionary_guesses(m: &mut Match) -> f64 {
    let base_guesses = m.rank.unwrap_or(1) as f64;
    let uppercase = uppercase_variations(m);
    let l33t = l33t_variations(m);
    m.base_guesses = Some(base_guesses.round() as u64);
    m.uppercase_variations = Some(uppercase.round() as u64);
    m.l33t_variations = Some(l33t.round() as u64);
    base_guesses * uppercase * l33t * if m.reversed { 2.0 } else { 1.0 }
}

fn uppercase_variations(m: &Match) -> f64 {
    let word = &m.token;
    if word.chars().all(|c| !c.is_uppercase()) || word.to_lowercase() == *word {
        return 1.0;
    }
    let first_upper = word.chars().next().map(|c| c.is_uppercase()).unwrap_or(false);
    let last_upper = word.chars().last().map(|c| c.is_uppercase()).unwrap_or(false);
    let all_upper = word.chars().all(|c| !c.is_lowercase());
    if first_upper || last_upper || all_upper {
        return 2.0;
    }
    let upper = word.chars().filter(|c| c.is_uppercase()).count();
    let lower = word.chars().filter(|c| c.is_lowercase()).count();
    (1..=cmp::min(upper, lower)).map(|i| n_ck(upper + lower, i)).sum()
}

fn l33t_variations(m: &Match) -> f64 {
    if !m.l33t {
        return 1.0;
    }
    let sub = match &m.sub {
        Some(sub) if !sub.is_empty() => sub,
        _ => return 1.0,
    };
    let mut variations = 1.0;
    let token = m.token.to_lowercase();
    for (&subbed, &unsubbed) in sub {
        let subbed_count = token.chars().filter(|&c| c == subbed).count();
        let unsubbed_count = token.chars().filter(|&c| c == unsubbed).count();
        if subbed_count == 0 || unsubbed_count == 0 {
            variations *= 2.0;
        } else {
            let p = cmp::min(unsubbed_count, subbed_count);
            let possibilities: f64 =
                (1..=p).map(|i| n_ck(unsubbed_count + subbed_count, i)).sum();
            variations *= possibilities;
        }
    }
    variations.max(2.0)
}

fn n_ck(n: usize, k: usize) -> f64 {
    if k > n {
        0.0
    } else if k == 0 {
        1.0
    } else {
        let mut r = 1.0f64;
        for d in 1..=k {
            r *= (n - d + 1) as f64;
            r /= d as f64;
        }
        r
    }
}

fn spatial_guesses(m: &Match) -> f64 {
    let graph_name = m.graph.unwrap_or("qwerty");
    let named = adjacency_graphs::by_name(graph_name).expect("matcher only emits known graph names");
    let starts = named.starting_positions as f64;
    let degree = named.average_degree;
    let len = m.token.chars().count();
    let turns = m.turns.unwrap_or(1);

    let mut guesses = 0.0;
    for i in 2..=len {
        let possible_turns = cmp::min(turns, i - 1);
        for j in 1..=possible_turns {
            guesses += n_ck(i - 1, j - 1) * starts * degree.powi(j as i32);
        }
    }

    if let Some(shifted_count) = m.shifted_count {
        let unshifted_count = len.saturating_sub(shifted_count);
        if shifted_count == 0 || unshifted_count == 0 {
            guesses *= 2.0;
        } else {
            let variations: f64 = (1..=cmp::min(shifted_count, unshifted_count))
                .map(|i| n_ck(shifted_count + unshifted_count, i))
                .sum();
            guesses *= variations;
        }
    }
    guesses
}

fn repeat_guesses(m: &Match) -> f64 {
    m.base_guesses.unwrap_or(1) as f64 * m.repeat_count.unwrap_or(1) as f64
}

fn sequence_guesses(m: &Match) -> f64 {
    let first_chr = m.token.chars().next().unwrap_or('a');
    let mut base_guesses = if ['a', 'A', 'z', 'Z', '0', '1', '9'].contains(&first_chr) {
        4.0
    } else if first_chr.is_ascii_digit() {
        10.0
    } else {
        26.0
    };
    if !m.ascending.unwrap_or(false) {
        base_guesses *= 2.0;
    }
    base_guesses * m.token.chars().count() as f64
}

fn regex_guesses(m: &Match) -> f64 {
    match m.regex_name {
        Some("recent_year") => {
            let year: i32 = m
                .regex_match
                .as_ref()
                .and_then(|v| v.first())
                .and_then(|s| s.parse().ok())
                .unwrap_or(REFERENCE_YEAR);
            (year - REFERENCE_YEAR).unsigned_abs().max(MIN_YEAR_SPACE as u32) as f64
        }
        _ => unreachable!("unknown regex_name"),
    }
}

fn date_guesses(m: &Match) -> f64 {
    let year = m.year.unwrap_or(REFERENCE_YEAR as i16) as i32;
    let year_space = (year - REFERENCE_YEAR).abs().max(MIN_YEAR_SPACE) as f64;
    let mut guesses = year_space * 365.0;
    if m.separator.is_some() {
        guesses *= 4.0;
    }
    guesses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_n_ck() {
        let test_data = [
            (0, 0, 1.0),
            (1, 0, 1.0),
            (5, 0, 1.0),
            (0, 1, 0.0),
            (0, 5, 0.0),
            (2, 1, 2.0),
            (4, 2, 6.0),
        ];
        for &(n, k, result) in &test_data {
            assert!((n_ck(n, k) - result).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_password_yields_one_guess() {
        let result = most_guessable_match_sequence(&chars(""), &[]);
        assert_eq!(result.guesses, 1.0);
        assert!(result.sequence.is_empty());
    }

    #[test]
    fn returns_one_bruteforce_match_given_empty_match_sequence() {
        let password = chars("0123456789");
        let result = most_guessable_match_sequence(&password, &[]);
        assert_eq!(result.sequence.len(), 1);
        let m0 = &result.sequence[0];
        assert_eq!(m0.pattern, "bruteforce");
        assert_eq!(m0.i, 0);
        assert_eq!(m0.j, 9);
    }

    #[test]
    fn returns_match_and_bruteforce_when_match_covers_prefix() {
        let password = chars("0123456789");
        let m = Match::default()
            .i(0usize)
            .j(5usize)
            .guesses(Some(1))
            .token("012345".into())
            .build();
        let result = most_guessable_match_sequence(&password, &[m.clone()]);
        assert_eq!(result.sequence.len(), 2);
        assert_eq!(result.sequence[0].i, m.i);
        assert_eq!(result.sequence[0].j, m.j);
        let m1 = &result.sequence[1];
        assert_eq!(m1.pattern, "bruteforce");
        assert_eq!(m1.i, 6);
        assert_eq!(m1.j, 9);
    }

    #[test]
    fn chooses_lower_guesses_match_given_two_matches_of_same_span() {
        let password = chars("0123456789");
        let m0 = Match::default()
            .i(0usize)
            .j(9usize)
            .guesses(Some(1))
            .token(password.iter().collect::<String>())
            .build();
        let m1 = Match::default()
            .i(0usize)
            .j(9usize)
            .guesses(Some(2))
            .token(password.iter().collect::<String>())
            .build();
        let result = most_guessable_match_sequence(&password, &[m0.clone(), m1.clone()]);
        assert_eq!(result.sequence.len(), 1);
        assert_eq!(result.sequence[0].guesses, Some(1));
    }
}
