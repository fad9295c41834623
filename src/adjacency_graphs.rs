//! Frozen keyboard/keypad adjacency graphs.
//!
//! Each graph maps a key to its ordered list of physical neighbors:
//! `[left, upper-left, upper-right, right, lower-right, lower-left]`
//! for the slanted (typewriter-stagger) keyboards, or a hand-authored
//! table for the two numeric keypads, which aren't slanted.
//!
//! Built once, at first access, from compact row layouts -- the same
//! shape of input the upstream zxcvbn project keeps in its own
//! adjacency-graph generator -- and then treated as immutable.

use std::collections::{HashMap, HashSet};

/// A named adjacency graph plus the two scalars the spatial estimator needs:
/// how many keys it has, and its average out-degree (neighbors per key).
pub struct NamedGraph {
    pub graph: HashMap<char, Vec<Option<&'static str>>>,
    pub starting_positions: usize,
    pub average_degree: f64,
    /// Keys that require the shift modifier to type (the second char of a
    /// row token). Used by the spatial matcher to compute `shifted_count`.
    pub shifted_chars: HashSet<char>,
    /// Maps a shifted char back to the unshifted char occupying the same
    /// physical key, so the spatial matcher can look up adjacency for
    /// either form through one `graph` table.
    pub unshift: HashMap<char, char>,
}

impl NamedGraph {
    /// Normalizes `c` to the unshifted char occupying its physical key.
    pub fn normalize(&self, c: char) -> char {
        *self.unshift.get(&c).unwrap_or(&c)
    }
}

fn leak(c: char) -> &'static str {
    Box::leak(c.to_string().into_boxed_str())
}

/// Builds a slanted keyboard graph from a list of rows, where each row is a
/// sequence of (unshifted, shifted) character pairs and `offset` is the
/// row's horizontal start position in half-key units.
fn build_slanted_graph(rows: &[(&[(char, char)], i32)]) -> NamedGraph {
    // key -> (row index, x coordinate in half-key units)
    let mut position_of: HashMap<char, (usize, i32)> = HashMap::new();
    let mut row_positions: Vec<HashMap<i32, char>> = Vec::with_capacity(rows.len());
    let mut shifted_chars = HashSet::new();
    let mut unshift = HashMap::new();

    for (row_idx, (tokens, offset)) in rows.iter().enumerate() {
        let mut positions = HashMap::new();
        for (k, &(unshifted, shifted)) in tokens.iter().enumerate() {
            let x = offset + 2 * k as i32;
            positions.insert(x, unshifted);
            position_of.insert(unshifted, (row_idx, x));
            if shifted != unshifted {
                shifted_chars.insert(shifted);
                unshift.insert(shifted, unshifted);
                position_of.insert(shifted, (row_idx, x));
            }
        }
        row_positions.push(positions);
    }

    let mut graph: HashMap<char, Vec<Option<&'static str>>> = HashMap::new();
    for (&key, &(row, x)) in &position_of {
        let same_row = &row_positions[row];
        let left = same_row.get(&(x - 2)).copied();
        let right = same_row.get(&(x + 2)).copied();
        let (upper_left, upper_right) = row
            .checked_sub(1)
            .and_then(|r| row_positions.get(r))
            .map(|above| (above.get(&(x - 1)).copied(), above.get(&(x + 1)).copied()))
            .unwrap_or((None, None));
        let below = row_positions.get(row + 1);
        let (lower_right, lower_left) = below
            .map(|b| (b.get(&(x + 1)).copied(), b.get(&(x - 1)).copied()))
            .unwrap_or((None, None));
        let neighbors = vec![left, upper_left, upper_right, right, lower_right, lower_left]
            .into_iter()
            .map(|n| n.map(leak))
            .collect();
        graph.insert(key, neighbors);
    }

    let starting_positions = graph.len();
    let sum: usize = graph
        .values()
        .map(|neighbors| neighbors.iter().filter(|n| n.is_some()).count())
        .sum();
    let average_degree = sum as f64 / starting_positions as f64;

    NamedGraph {
        graph,
        starting_positions,
        average_degree,
        shifted_chars,
        unshift,
    }
}

/// Builds a hand-specified graph (used for the two numeric keypads, whose
/// layout is a small regular grid rather than a slanted typewriter stagger).
fn build_fixed_graph(entries: &[(char, &[char])]) -> NamedGraph {
    let mut graph = HashMap::new();
    for &(key, neighbors) in entries {
        let neighbors = neighbors.iter().map(|&c| Some(leak(c))).collect();
        graph.insert(key, neighbors);
    }
    let starting_positions = graph.len();
    let sum: usize = graph
        .values()
        .map(|neighbors: &Vec<Option<&'static str>>| neighbors.iter().filter(|n| n.is_some()).count())
        .sum();
    let average_degree = sum as f64 / starting_positions as f64;
    NamedGraph {
        graph,
        starting_positions,
        average_degree,
        shifted_chars: HashSet::new(),
        unshift: HashMap::new(),
    }
}

macro_rules! row {
    ($unshifted:expr, $shifted:expr, $offset:expr) => {{
        static UNSHIFTED: &str = $unshifted;
        static SHIFTED: &str = $shifted;
        let tokens: Vec<(char, char)> = UNSHIFTED.chars().zip(SHIFTED.chars()).collect();
        (tokens, $offset)
    }};
}

fn qwerty_rows() -> Vec<(Vec<(char, char)>, i32)> {
    vec![
        row!("`1234567890-=", "~!@#$%^&*()_+", 0),
        row!("qwertyuiop[]\\", "QWERTYUIOP{}|", 1),
        row!("asdfghjkl;'", "ASDFGHJKL:\"", 2),
        row!("zxcvbnm,./", "ZXCVBNM<>?", 3),
    ]
}

fn dvorak_rows() -> Vec<(Vec<(char, char)>, i32)> {
    vec![
        row!("`1234567890[]", "~!@#$%^&*(){}", 0),
        row!("',.pyfgcrl/=\\", "\"<>PYFGCRL?+|", 1),
        row!("aoeuidhtns-", "AOEUIDHTNS_", 2),
        row!(";qjkxbmwvz", ":QJKXBMWVZ", 3),
    ]
}

lazy_static! {
    pub static ref QWERTY: NamedGraph = {
        let rows = qwerty_rows();
        let refs: Vec<(&[(char, char)], i32)> = rows.iter().map(|(t, o)| (t.as_slice(), *o)).collect();
        build_slanted_graph(&refs)
    };
    pub static ref DVORAK: NamedGraph = {
        let rows = dvorak_rows();
        let refs: Vec<(&[(char, char)], i32)> = rows.iter().map(|(t, o)| (t.as_slice(), *o)).collect();
        build_slanted_graph(&refs)
    };
    pub static ref KEYPAD: NamedGraph = build_fixed_graph(&[
        ('/', &['*']),
        ('*', &['/', '-']),
        ('-', &['*', '9', '8', '7']),
        ('7', &['8', '4']),
        ('8', &['9', '7', '5', '4']),
        ('9', &['-', '8', '6', '5']),
        ('4', &['7', '8', '5', '1']),
        ('5', &['8', '9', '6', '2', '1', '4']),
        ('6', &['9', '-', '5', '3', '2']),
        ('1', &['4', '5', '2']),
        ('2', &['5', '6', '3', '0', '1']),
        ('3', &['6', '-', '+', '2']),
        ('+', &['3', '6', '9', '.']),
        ('0', &['2', '1', '3', '.']),
        ('.', &['0', '2', '3', '+']),
    ]);
    pub static ref MAC_KEYPAD: NamedGraph = build_fixed_graph(&[
        ('=', &['/']),
        ('/', &['=', '*']),
        ('*', &['/', '-']),
        ('-', &['*', '9', '8', '7']),
        ('7', &['8', '4']),
        ('8', &['9', '7', '5', '4']),
        ('9', &['-', '8', '6', '5']),
        ('4', &['7', '8', '5', '1']),
        ('5', &['8', '9', '6', '2', '1', '4']),
        ('6', &['9', '-', '+', '5', '3', '2']),
        ('1', &['4', '5', '2']),
        ('2', &['5', '6', '3', '0', '1']),
        ('3', &['6', '+', '2']),
        ('+', &['6', '9', '-', '3']),
        ('0', &['2', '1', '3', '.']),
        ('.', &['0', '2', '3']),
    ]);
}

/// Looks up a graph by its spec-mandated name ("qwerty", "dvorak",
/// "keypad", "mac_keypad").
pub fn by_name(name: &str) -> Option<&'static NamedGraph> {
    match name {
        "qwerty" => Some(&QWERTY),
        "dvorak" => Some(&DVORAK),
        "keypad" => Some(&KEYPAD),
        "mac_keypad" => Some(&MAC_KEYPAD),
        _ => None,
    }
}

/// All graph names, in the order the matcher scans them.
pub const GRAPH_NAMES: [&str; 4] = ["qwerty", "dvorak", "keypad", "mac_keypad"];

/// The spec.md §6 reference-data loader contract surface: every named
/// adjacency graph, keyed by name.
pub fn load_adjacency_graphs() -> HashMap<&'static str, &'static NamedGraph> {
    GRAPH_NAMES
        .iter()
        .map(|&name| (name, by_name(name).expect("GRAPH_NAMES only names known graphs")))
        .collect()
}
