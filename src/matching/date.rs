//! Date matcher (spec.md §4.2).
//!
//! Recognizes dates with a single repeated separator
//! (`11/11/2011`, `11.11.2011`, `11_11_2011`, ...) and dates spelled as one
//! unbroken run of 4-8 digits (`11112011`). For every digit grouping that
//! could plausibly be a (day, month, year) triple, the candidate closest to
//! the reference year 2000 wins; a date match that sits strictly inside a
//! longer date match is pruned afterwards.

use super::{token_of, Match};

const SEPARATORS: [char; 6] = ['/', '\\', '_', '.', ',', '-'];
const REFERENCE_YEAR: i32 = 2000;
const MIN_YEAR: i32 = 1000;
const MAX_YEAR: i32 = 2050;

#[derive(Clone, Copy)]
struct Candidate {
    day: i8,
    month: i8,
    year: i16,
}

pub fn date_match(password: &[char]) -> Vec<Match> {
    let mut matches = Vec::new();
    matches.extend(date_match_with_separator(password));
    matches.extend(date_match_without_separator(password));
    prune_contained(matches)
}

fn date_match_with_separator(password: &[char]) -> Vec<Match> {
    let n = password.len();
    let mut matches = Vec::new();

    for i in 0..n {
        for len1 in 1..=4usize {
            let sep1_idx = i + len1;
            if sep1_idx >= n || !password[i..sep1_idx].iter().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let sep = password[sep1_idx];
            if !SEPARATORS.contains(&sep) {
                continue;
            }
            let group2_start = sep1_idx + 1;
            for len2 in 1..=4usize {
                let sep2_idx = group2_start + len2;
                if sep2_idx >= n {
                    continue;
                }
                if !password[group2_start..sep2_idx].iter().all(|c| c.is_ascii_digit()) {
                    continue;
                }
                if password[sep2_idx] != sep {
                    continue;
                }
                let group3_start = sep2_idx + 1;
                for len3 in 1..=4usize {
                    let end = group3_start + len3; // exclusive
                    if end > n {
                        continue;
                    }
                    if !password[group3_start..end].iter().all(|c| c.is_ascii_digit()) {
                        continue;
                    }
                    let g1 = parse_digits(&password[i..sep1_idx]);
                    let g2 = parse_digits(&password[group2_start..sep2_idx]);
                    let g3 = parse_digits(&password[group3_start..end]);
                    let lens = [len1, len2, len3];
                    if let Some(best) = best_candidate(&[g1, g2, g3], &lens) {
                        let j = end - 1;
                        matches.push(
                            Match::default()
                                .pattern("date")
                                .i(i)
                                .j(j)
                                .token(token_of(password, i, j))
                                .year(Some(best.year))
                                .month(Some(best.month))
                                .day(Some(best.day))
                                .separator(Some(sep.to_string()))
                                .build(),
                        );
                    }
                }
            }
        }
    }
    matches
}

fn date_match_without_separator(password: &[char]) -> Vec<Match> {
    let n = password.len();
    let mut matches = Vec::new();

    for i in 0..n {
        for total_len in 4..=8usize {
            let end = i + total_len;
            if end > n {
                continue;
            }
            if !password[i..end].iter().all(|c| c.is_ascii_digit()) {
                continue;
            }
            let digits = &password[i..end];
            let mut best: Option<Candidate> = None;
            for k1 in 1..=(total_len.saturating_sub(2)).min(4) {
                for k2 in (k1 + 1)..total_len {
                    let len2 = k2 - k1;
                    let len3 = total_len - k2;
                    if len2 == 0 || len2 > 4 || len3 == 0 || len3 > 4 {
                        continue;
                    }
                    let g1 = parse_digits(&digits[0..k1]);
                    let g2 = parse_digits(&digits[k1..k2]);
                    let g3 = parse_digits(&digits[k2..total_len]);
                    let lens = [k1, len2, len3];
                    if let Some(candidate) = best_candidate(&[g1, g2, g3], &lens) {
                        let better = match best {
                            None => true,
                            Some(b) => {
                                (candidate.year as i32 - REFERENCE_YEAR).abs()
                                    < (b.year as i32 - REFERENCE_YEAR).abs()
                            }
                        };
                        if better {
                            best = Some(candidate);
                        }
                    }
                }
            }
            if let Some(best) = best {
                let j = end - 1;
                matches.push(
                    Match::default()
                        .pattern("date")
                        .i(i)
                        .j(j)
                        .token(token_of(password, i, j))
                        .year(Some(best.year))
                        .month(Some(best.month))
                        .day(Some(best.day))
                        .separator(None)
                        .build(),
                );
            }
        }
    }
    matches
}

fn parse_digits(chars: &[char]) -> i32 {
    chars.iter().collect::<String>().parse().unwrap_or(0)
}

/// Tries every (day, month, year) assignment of the three raw groups and
/// returns the valid candidate whose year is closest to [`REFERENCE_YEAR`].
fn best_candidate(values: &[i32; 3], lens: &[usize; 3]) -> Option<Candidate> {
    let perms: [[usize; 3]; 6] = [
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ];
    let mut best: Option<Candidate> = None;
    for perm in perms {
        let (day_idx, month_idx, year_idx) = (perm[0], perm[1], perm[2]);
        let day = values[day_idx];
        let month = values[month_idx];
        let raw_year = values[year_idx];
        let year = expand_year(raw_year, lens[year_idx]);
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            continue;
        }
        if !is_valid_date(year, month, day) {
            continue;
        }
        let candidate = Candidate {
            day: day as i8,
            month: month as i8,
            year: year as i16,
        };
        best = match best {
            None => Some(candidate),
            Some(b) => {
                if (candidate.year as i32 - REFERENCE_YEAR).abs()
                    < (b.year as i32 - REFERENCE_YEAR).abs()
                {
                    Some(candidate)
                } else {
                    Some(b)
                }
            }
        };
    }
    best
}

/// A 1- or 2-digit year is ambiguous; follow the conventional cutoff:
/// 00-50 => 2000-2050, 51-99 => 1951-1999. Longer groups are taken literally.
fn expand_year(raw: i32, len: usize) -> i32 {
    if len <= 2 {
        if raw > 50 {
            raw + 1900
        } else {
            raw + 2000
        }
    } else {
        raw
    }
}

fn is_valid_date(year: i32, month: i32, day: i32) -> bool {
    if !(1..=12).contains(&month) {
        return false;
    }
    if day < 1 {
        return false;
    }
    day <= days_in_month(year, month)
}

fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Drops any date match that sits strictly inside a longer date match.
fn prune_contained(mut matches: Vec<Match>) -> Vec<Match> {
    matches.sort_by_key(|m| (m.i, std::cmp::Reverse(m.j)));
    let mut kept: Vec<Match> = Vec::new();
    for m in matches {
        let contained = kept.iter().any(|k| {
            k.i <= m.i && k.j >= m.j && (k.i, k.j) != (m.i, m.j) && (k.j - k.i) > (m.j - m.i)
        });
        if !contained {
            kept.push(m);
        }
    }
    kept.sort_by_key(|m| (m.i, m.j));
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn matches_separated_date() {
        let matches = date_match(&chars("11/11/2011"));
        let m = matches.iter().find(|m| m.year == Some(2011)).expect("should find date");
        assert_eq!(m.month, Some(11));
        assert_eq!(m.day, Some(11));
        assert_eq!(m.separator.as_deref(), Some("/"));
        assert_eq!(m.i, 0);
        assert_eq!(m.j, 9);
    }

    #[test]
    fn rejects_invalid_calendar_date() {
        // month 13 is never valid
        assert!(date_match(&chars("13/40/2011")).is_empty());
    }

    #[test]
    fn two_digit_year_expands_via_cutoff() {
        assert_eq!(expand_year(11, 2), 2011);
        assert_eq!(expand_year(99, 2), 1999);
    }

    #[test]
    fn leap_year_recognizes_feb_29() {
        assert!(is_valid_date(2000, 2, 29));
        assert!(!is_valid_date(1900, 2, 29));
    }
}
