//! Dictionary, reverse-dictionary, and l33t matchers (spec.md §4.2).

use std::collections::HashMap;

use itertools::Itertools;

use super::{l33t_table, token_of, Match};
use crate::frequency_lists::named_dictionaries;

/// Scans every substring of `password` against every named dictionary
/// (including the ad-hoc `user_inputs` dictionary) and emits one match per
/// hit.
pub fn dictionary_match(password: &[char], user_inputs: &HashMap<String, usize>) -> Vec<Match> {
    let mut matches = Vec::new();
    // Lowercase each candidate substring independently (rather than
    // lowercasing the whole password up front) since lowercasing can
    // change a string's length (e.g. 'İ' -> "i̇"); walking by the original
    // password's char boundaries keeps i/j meaningful indices into it.
    let n = password.len();
    for i in 0..n {
        for j in i..n {
            let candidate: String = password[i..=j]
                .iter()
                .flat_map(|c| c.to_lowercase())
                .collect();
            if let Some(rank) = user_inputs.get(&candidate) {
                matches.push(make_match(password, i, j, "user_inputs", &candidate, *rank, false));
            }
            for (name, dict) in named_dictionaries() {
                if let Some(&rank) = dict.get(candidate.as_str()) {
                    matches.push(make_match(password, i, j, name, &candidate, rank, false));
                }
            }
        }
    }
    matches
}

fn make_match(
    password: &[char],
    i: usize,
    j: usize,
    dictionary_name: &'static str,
    matched_word: &str,
    rank: usize,
    reversed: bool,
) -> Match {
    Match::default()
        .pattern("dictionary")
        .i(i)
        .j(j)
        .token(token_of(password, i, j))
        .dictionary_name(Some(dictionary_name))
        .matched_word(Some(matched_word.to_string()))
        .rank(Some(rank))
        .reversed(reversed)
        .l33t(false)
        .build()
}

/// Applies the dictionary matcher to the reversed password, then maps hit
/// coordinates back onto the original password.
pub fn reverse_dictionary_match(password: &[char], user_inputs: &HashMap<String, usize>) -> Vec<Match> {
    let reversed: Vec<char> = password.iter().rev().cloned().collect();
    let n = password.len();
    dictionary_match(&reversed, user_inputs)
        .into_iter()
        .map(|m| {
            let i = n - 1 - m.j;
            let j = n - 1 - m.i;
            let mut m = m;
            m.i = i;
            m.j = j;
            m.token = token_of(password, i, j);
            m.reversed = true;
            m
        })
        .collect()
}

/// Enumerates every non-empty subset of l33t substitutions actually present
/// in the password, de-l33ts the password under each subset, and re-runs
/// the plain dictionary matcher on the result.
pub fn l33t_match(password: &[char], user_inputs: &HashMap<String, usize>) -> Vec<Match> {
    let mut matches = Vec::new();
    let table = l33t_table();

    // distinct substituted chars actually present in the password
    let present: Vec<char> = table
        .keys()
        .filter(|c| password.contains(c))
        .cloned()
        .sorted()
        .collect();
    if present.is_empty() {
        return matches;
    }

    for subset_size in 1..=present.len() {
        for subset in present.iter().combinations(subset_size) {
            // for each substituted char in the subset, choose one candidate
            // original letter; enumerate every combination of choices.
            let choices: Vec<Vec<(char, char)>> = subset
                .iter()
                .map(|&&subbed| {
                    table[&subbed]
                        .iter()
                        .map(|&orig| (subbed, orig))
                        .collect::<Vec<_>>()
                })
                .collect();
            for combo in choices.into_iter().multi_cartesian_product() {
                let sub_map: HashMap<char, char> = combo.into_iter().collect();
                let deleeted: Vec<char> = password
                    .iter()
                    .map(|c| *sub_map.get(c).unwrap_or(c))
                    .collect();
                if deleeted == password {
                    continue;
                }
                for mut m in dictionary_match(&deleeted, user_inputs) {
                    // verify at least one substitution in the map was
                    // actually used within the matched range
                    let used: HashMap<char, char> = sub_map
                        .iter()
                        .filter(|&(&subbed, _)| password[m.i..=m.j].contains(&subbed))
                        .map(|(&a, &b)| (a, b))
                        .collect();
                    if used.is_empty() {
                        continue;
                    }
                    m.token = token_of(password, m.i, m.j);
                    m.l33t = true;
                    m.sub_display = Some(
                        used.iter()
                            .sorted_by_key(|(k, _)| **k)
                            .map(|(k, v)| format!("{} -> {}", k, v))
                            .join(", "),
                    );
                    m.sub = Some(used);
                    matches.push(m);
                }
            }
        }
    }

    matches.sort_by_key(|m| (m.i, m.j));
    matches.dedup_by(|a, b| {
        a.i == b.i && a.j == b.j && a.matched_word == b.matched_word && a.sub == b.sub
    });
    matches
}
