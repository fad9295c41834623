//! Frozen rank dictionaries.
//!
//! Each dictionary maps a lowercase token to its 1-based frequency rank
//! (1 = most common). In the upstream project these tables are generated
//! at build time from multi-megabyte corpora (Wikipedia, the SecLists
//! password dumps, US Census surname/given-name tables, ...); here they are
//! hand-authored, representative slices of the same ranked lists, frozen
//! the same way: loaded once into a `lazy_static` map and never mutated
//! again.

use std::collections::HashMap;

macro_rules! ranked_dictionary {
    ($($word:expr),+ $(,)?) => {{
        let mut map = HashMap::new();
        let mut rank: usize = 1;
        $(
            map.insert($word, rank);
            rank += 1;
        )+
        map
    }};
}

lazy_static! {
    /// The most common passwords, ranked by observed frequency in public
    /// breach corpora. Rank 1 is the single most common password.
    pub static ref PASSWORDS: HashMap<&'static str, usize> = ranked_dictionary![
        "password", "123456", "12345678", "1234", "qwerty", "12345", "dragon",
        "baseball", "football", "letmein", "monkey", "696969", "abc123",
        "mustang", "michael", "shadow", "master", "jennifer", "111111",
        "2000", "jordan", "superman", "harley", "1234567", "fuckme",
        "hunter", "fuckyou", "trustno1", "ranger", "buster", "thomas",
        "tigger", "robert", "soccer", "fuck", "batman", "test", "pass",
        "killer", "hockey", "george", "charlie", "andrew", "michelle",
        "love", "sunshine", "jessica", "asshole", "6969", "pepper",
        "daniel", "access", "123456789", "654321", "joshua", "maggie",
        "starwars", "silver", "william", "dallas", "yankees", "123123",
        "ashley", "666666", "hello", "amanda", "orange", "biteme",
        "freedom", "computer", "sexy", "thunder", "nicole", "ginger",
        "heather", "hammer", "summer", "corvette", "taylor", "fucker",
        "austin", "1111", "merlin", "matthew", "121212", "golfer",
        "cheese", "princess", "martin", "chelsea", "patrick", "richard",
        "diamond", "yellow", "bigdog", "secret", "asdfgh", "sparky",
        "cowboy", "camaro", "anthony", "matrix", "falcon", "iloveyou",
        "123321", "qazwsx", "donald", "hunter2",
    ];

    /// Common English words, including very short ones, ranked by
    /// approximate corpus frequency.
    pub static ref ENGLISH_WIKIPEDIA: HashMap<&'static str, usize> = ranked_dictionary![
        "the", "of", "and", "a", "to", "in", "is", "was", "he", "for",
        "it", "with", "as", "his", "on", "be", "at", "by", "i", "this",
        "had", "not", "are", "but", "from", "or", "have", "an", "they",
        "which", "one", "you", "were", "her", "all", "she", "there",
        "would", "their", "we", "him", "been", "has", "when", "who",
        "will", "more", "no", "if", "out", "so", "said", "what", "up",
        "its", "about", "into", "than", "them", "can", "only", "other",
        "time", "new", "some", "could", "these", "two", "may", "first",
        "then", "do", "any", "like", "my", "now", "over", "such",
        "our", "man", "me", "even", "most", "made", "after", "also",
        "did", "many", "before", "must", "through", "back", "years",
        "where", "much", "your", "way", "well", "down", "should",
        "because", "each", "just", "those", "people", "how", "too",
        "little", "state", "good", "very", "make", "world", "still",
        "see", "own", "men", "work", "long", "here", "get", "both",
        "between", "life", "being", "under", "never", "day", "same",
        "another", "know", "while", "last", "might", "us", "great",
        "old", "year", "off", "come", "since", "against", "go", "came",
        "right", "used", "take", "three", "love", "hate", "family",
        "house", "music", "apple", "orange", "banana", "tiger", "eagle",
        "river", "mountain", "ocean", "forest", "garden", "castle",
        "dragon", "wizard", "knight", "sword", "shield", "crown",
        "horse", "battery", "staple",
        "correct", "tree", "flower", "ninja", "pirate", "robot",
        "rainbow", "thunder", "shadow", "phoenix", "falcon", "wolf",
        "liberty", "freedom", "justice", "victory", "triumph", "hero",
        "legend", "mystery", "secret", "treasure", "journey", "voyage",
    ];

    /// Common English surnames, ranked by US Census frequency order.
    pub static ref SURNAMES: HashMap<&'static str, usize> = ranked_dictionary![
        "smith", "johnson", "williams", "brown", "jones", "garcia",
        "miller", "davis", "rodriguez", "martinez", "hernandez", "lopez",
        "gonzalez", "wilson", "anderson", "thomas", "taylor", "moore",
        "jackson", "martin", "lee", "perez", "thompson", "white",
        "harris", "sanchez", "clark", "ramirez", "lewis", "robinson",
        "walker", "young", "allen", "king", "wright", "scott", "torres",
        "nguyen", "hill", "flores", "green", "adams", "nelson", "baker",
        "hall", "rivera", "campbell", "mitchell", "carter", "roberts",
    ];

    /// Common given names, ranked by frequency, merging both halves of
    /// the upstream male/female name lists into one ad-hoc dictionary.
    pub static ref FIRSTNAMES: HashMap<&'static str, usize> = ranked_dictionary![
        "james", "robert", "john", "michael", "david", "william",
        "richard", "joseph", "thomas", "charles", "mary", "patricia",
        "jennifer", "linda", "elizabeth", "barbara", "susan", "jessica",
        "sarah", "karen", "daniel", "matthew", "anthony", "mark",
        "donald", "steven", "paul", "andrew", "joshua", "kenneth",
        "nancy", "lisa", "margaret", "betty", "sandra", "ashley",
        "kimberly", "emily", "donna", "michelle", "carol", "amanda",
        "melissa", "deborah", "stephanie", "rebecca", "laura", "sharon",
        "cynthia", "kathleen", "amy", "angela", "shirley", "anna",
    ];
}

/// All named dictionaries the dictionary matcher scans, in a fixed order
/// so that match output is deterministic when several dictionaries tie.
pub fn named_dictionaries() -> Vec<(&'static str, &'static HashMap<&'static str, usize>)> {
    vec![
        ("passwords", &PASSWORDS),
        ("english_wikipedia", &ENGLISH_WIKIPEDIA),
        ("surnames", &SURNAMES),
        ("firstnames", &FIRSTNAMES),
    ]
}

/// The spec.md §6 reference-data loader contract surface: every named
/// dictionary, keyed by name. The matcher itself uses [`named_dictionaries`]
/// directly; this is the stable public entry point a host can call to
/// inspect what's loaded.
pub fn load_dictionaries() -> HashMap<&'static str, &'static HashMap<&'static str, usize>> {
    named_dictionaries().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_rank_one() {
        assert_eq!(PASSWORDS["password"], 1);
    }

    #[test]
    fn named_dictionaries_are_all_present() {
        let names: Vec<&str> = named_dictionaries().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["passwords", "english_wikipedia", "surnames", "firstnames"]);
    }

    #[test]
    fn load_dictionaries_exposes_every_named_dictionary() {
        let loaded = load_dictionaries();
        assert_eq!(loaded.len(), 4);
        assert_eq!(loaded["passwords"]["password"], 1);
    }
}
