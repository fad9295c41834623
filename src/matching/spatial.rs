//! Spatial (keyboard-adjacency-walk) matcher (spec.md §4.2).

use super::{token_of, Match};
use crate::adjacency_graphs::{self, GRAPH_NAMES};

/// Scans each named adjacency graph for runs of >= 2 consecutive
/// characters where every character is a neighbor of the previous one.
pub fn spatial_match(password: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    for &name in GRAPH_NAMES.iter() {
        matches.extend(spatial_match_graph(password, name));
    }
    matches
}

fn spatial_match_graph(password: &[char], graph_name: &'static str) -> Vec<Match> {
    let named = adjacency_graphs::by_name(graph_name).expect("known graph name");
    let mut matches = Vec::new();
    let n = password.len();
    if n < 2 {
        return matches;
    }

    let mut i = 0;
    while i < n.saturating_sub(1) {
        let mut j = i + 1;
        let mut last_direction: Option<usize> = None;
        let mut turns = 0usize;
        let mut shifted_count = if named.shifted_chars.contains(&password[i]) { 1 } else { 0 };

        loop {
            if j >= n {
                break;
            }
            let prev = password[j - 1];
            let cur = password[j];
            let cur_unshifted = named.normalize(cur);
            let neighbors = match named.graph.get(&prev) {
                Some(n) => n,
                None => break,
            };
            let found_direction = neighbors.iter().position(|slot| match slot {
                Some(s) => s.chars().next() == Some(cur_unshifted),
                None => false,
            });
            match found_direction {
                Some(direction) => {
                    if last_direction.is_none() {
                        turns = 1;
                    } else if last_direction != Some(direction) {
                        turns += 1;
                    }
                    last_direction = Some(direction);
                    if named.shifted_chars.contains(&cur) {
                        shifted_count += 1;
                    }
                    j += 1;
                }
                None => break,
            }
        }

        let run_len = j - i;
        if run_len >= 2 {
            matches.push(
                Match::default()
                    .pattern("spatial")
                    .i(i)
                    .j(j - 1)
                    .token(token_of(password, i, j - 1))
                    .graph(Some(graph_name))
                    .turns(Some(turns.max(1)))
                    .shifted_count(Some(shifted_count))
                    .build(),
            );
            i = j;
        } else {
            i += 1;
        }
    }
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn qwerty_run_has_zero_turns() {
        let matches = spatial_match(&chars("qwerty"));
        let hit = matches
            .iter()
            .find(|m| m.graph == Some("qwerty"))
            .expect("qwerty should be a qwerty spatial run");
        assert_eq!(hit.i, 0);
        assert_eq!(hit.j, 5);
        assert_eq!(hit.turns, Some(1));
    }

    #[test]
    fn no_match_below_length_two() {
        let matches = spatial_match(&chars("q"));
        assert!(matches.is_empty());
    }

    #[test]
    fn shifted_keys_are_counted() {
        // '@' is the shifted form of '2', which sits directly right of '1'.
        let matches = spatial_match(&chars("1@"));
        let hit = matches
            .iter()
            .find(|m| m.graph == Some("qwerty"))
            .expect("1@ should be a qwerty spatial run via the shifted '2' key");
        assert_eq!(hit.shifted_count, Some(1));
    }
}
