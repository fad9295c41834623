//! Feedback catalog (spec.md §4.5): a warning plus a list of suggestions,
//! looked up from the longest match in the optimal sequence and addressed
//! only by message ID so a host can localize every string a user sees.

use std::sync::Mutex;

#[cfg(feature = "ser")]
use serde_derive::Serialize;

use crate::matching::Match;

/// Every string this crate can hand back to a caller, named by what it
/// says rather than by where it is used. Message IDs are stable across
/// releases; their English text is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackMsg {
    UseAFewWordsAvoidCommonPhrases,
    NoNeedForSymbolsDigitsOrUppercase,
    AddAnotherWordOrTwo,
    CapitalizationDoesntHelp,
    AllUppercaseIsAlmostAsGuessable,
    ReversedWordsArentMuchHarder,
    PredictableSubstitutionsDontHelp,
    TopTenCommonPassword,
    TopHundredCommonPassword,
    VeryCommonPassword,
    SimilarToCommonPassword,
    WordByItselfIsEasy,
    NamesAndSurnamesByThemselvesAreEasy,
    CommonNamesAndSurnamesAreEasy,
    StraightRowsOfKeysAreEasy,
    ShortKeyboardPatternsAreEasy,
    RepeatsLikeAaaAreEasy,
    RepeatsLikeAbcAbcAreOnlySlightlyHarder,
    AvoidRepeatedWordsAndCharacters,
    SequencesAreEasy,
    AvoidSequences,
    RecentYearsAreEasy,
    AvoidRecentYears,
    DatesAreOftenEasy,
    AvoidDatesAndYearsAssociatedWithYou,
}

impl FeedbackMsg {
    /// The identity translator's text: the English string this message ID
    /// names.
    pub fn default_text(self) -> &'static str {
        use FeedbackMsg::*;
        match self {
            UseAFewWordsAvoidCommonPhrases => "Use a few words, avoid common phrases",
            NoNeedForSymbolsDigitsOrUppercase => {
                "No need for symbols, digits, or uppercase letters"
            }
            AddAnotherWordOrTwo => "Add another word or two. Uncommon words are better.",
            CapitalizationDoesntHelp => "Capitalization doesn't help very much",
            AllUppercaseIsAlmostAsGuessable => {
                "All-uppercase is almost as easy to guess as all-lowercase"
            }
            ReversedWordsArentMuchHarder => "Reversed words aren't much harder to guess",
            PredictableSubstitutionsDontHelp => {
                "Predictable substitutions like '@' for 'a' don't help very much"
            }
            TopTenCommonPassword => "This is a top-10 common password",
            TopHundredCommonPassword => "This is a top-100 common password",
            VeryCommonPassword => "This is a very common password",
            SimilarToCommonPassword => "This is similar to a commonly used password",
            WordByItselfIsEasy => "A word by itself is easy to guess",
            NamesAndSurnamesByThemselvesAreEasy => {
                "Names and surnames by themselves are easy to guess"
            }
            CommonNamesAndSurnamesAreEasy => "Common names and surnames are easy to guess",
            StraightRowsOfKeysAreEasy => "Straight rows of keys are easy to guess",
            ShortKeyboardPatternsAreEasy => "Short keyboard patterns are easy to guess",
            RepeatsLikeAaaAreEasy => "Repeats like \"aaa\" are easy to guess",
            RepeatsLikeAbcAbcAreOnlySlightlyHarder => {
                "Repeats like \"abcabcabc\" are only slightly harder to guess than \"abc\""
            }
            AvoidRepeatedWordsAndCharacters => "Avoid repeated words and characters",
            SequencesAreEasy => "Sequences like abc or 6543 are easy to guess",
            AvoidSequences => "Avoid sequences",
            RecentYearsAreEasy => "Recent years are easy to guess",
            AvoidRecentYears => "Avoid recent years",
            DatesAreOftenEasy => "Dates are often easy to guess",
            AvoidDatesAndYearsAssociatedWithYou => {
                "Avoid dates and years that are associated with you"
            }
        }
    }
}

impl std::fmt::Display for FeedbackMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

type Translator = dyn Fn(FeedbackMsg) -> String + Send + Sync;

lazy_static! {
    static ref TRANSLATOR: Mutex<Box<Translator>> =
        Mutex::new(Box::new(|msg: FeedbackMsg| msg.default_text().to_string()));
}

/// Installs a translator invoked for every message this crate emits.
/// Resets to the identity (English) translator by passing a function that
/// calls [`FeedbackMsg::default_text`].
pub fn set_translator<F>(translator: F)
where
    F: Fn(FeedbackMsg) -> String + Send + Sync + 'static,
{
    *TRANSLATOR.lock().unwrap_or_else(|e| e.into_inner()) = Box::new(translator);
}

fn translate(msg: FeedbackMsg) -> String {
    (TRANSLATOR.lock().unwrap_or_else(|e| e.into_inner()))(msg)
}

/// A warning plus actionable suggestions, both already run through the
/// installed translator. `None`/empty whenever `score >= 3`.
#[cfg_attr(feature = "ser", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

/// Builds [`Feedback`] for a scored password: empty once the password is
/// already strong, otherwise drawn from the catalog entry keyed by the
/// longest match's pattern and sub-properties.
pub(crate) fn get_feedback(score: u8, sequence: &[Match]) -> Feedback {
    if score >= 3 {
        return Feedback::default();
    }

    if sequence.is_empty() {
        return Feedback {
            warning: None,
            suggestions: vec![
                translate(FeedbackMsg::UseAFewWordsAvoidCommonPhrases),
                translate(FeedbackMsg::NoNeedForSymbolsDigitsOrUppercase),
            ],
        };
    }

    let longest = sequence
        .iter()
        .max_by_key(|m| m.token.chars().count())
        .expect("sequence is non-empty");

    let (warning, mut suggestions) = catalog_entry(longest);

    suggestions.insert(0, translate(FeedbackMsg::AddAnotherWordOrTwo));

    Feedback {
        warning: warning.map(translate),
        suggestions,
    }
}

fn catalog_entry(m: &Match) -> (Option<FeedbackMsg>, Vec<FeedbackMsg>) {
    match m.pattern {
        "dictionary" => dictionary_entry(m),
        "spatial" => {
            let warning = if m.turns == Some(1) {
                FeedbackMsg::StraightRowsOfKeysAreEasy
            } else {
                FeedbackMsg::ShortKeyboardPatternsAreEasy
            };
            (Some(warning), Vec::new())
        }
        "repeat" => {
            let base_len = m.base_token.as_deref().map(|s| s.chars().count()).unwrap_or(1);
            let warning = if base_len == 1 {
                FeedbackMsg::RepeatsLikeAaaAreEasy
            } else {
                FeedbackMsg::RepeatsLikeAbcAbcAreOnlySlightlyHarder
            };
            (Some(warning), vec![FeedbackMsg::AvoidRepeatedWordsAndCharacters])
        }
        "sequence" => (Some(FeedbackMsg::SequencesAreEasy), vec![FeedbackMsg::AvoidSequences]),
        "regex" if m.regex_name == Some("recent_year") => (
            Some(FeedbackMsg::RecentYearsAreEasy),
            vec![FeedbackMsg::AvoidRecentYears],
        ),
        "date" => (
            Some(FeedbackMsg::DatesAreOftenEasy),
            vec![FeedbackMsg::AvoidDatesAndYearsAssociatedWithYou],
        ),
        _ => (None, Vec::new()),
    }
}

fn dictionary_entry(m: &Match) -> (Option<FeedbackMsg>, Vec<FeedbackMsg>) {
    let mut suggestions = Vec::new();

    let warning = if m.dictionary_name == Some("passwords") {
        match m.rank {
            Some(r) if r <= 10 => Some(FeedbackMsg::TopTenCommonPassword),
            Some(r) if r <= 100 => Some(FeedbackMsg::TopHundredCommonPassword),
            Some(r) if r <= 1_000 => Some(FeedbackMsg::VeryCommonPassword),
            _ => Some(FeedbackMsg::SimilarToCommonPassword),
        }
    } else if matches!(m.dictionary_name, Some("surnames") | Some("firstnames")) {
        Some(FeedbackMsg::NamesAndSurnamesByThemselvesAreEasy)
    } else {
        Some(FeedbackMsg::WordByItselfIsEasy)
    };

    if m.reversed {
        suggestions.push(FeedbackMsg::ReversedWordsArentMuchHarder);
    }
    if m.l33t {
        suggestions.push(FeedbackMsg::PredictableSubstitutionsDontHelp);
    }
    if m.uppercase_variations.unwrap_or(1) > 1 {
        suggestions.push(FeedbackMsg::CapitalizationDoesntHelp);
    }

    let warning = if matches!(m.dictionary_name, Some("surnames") | Some("firstnames"))
        && m.rank.map(|r| r <= 100).unwrap_or(false)
    {
        Some(FeedbackMsg::CommonNamesAndSurnamesAreEasy)
    } else {
        warning
    };

    (warning, suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(pattern: &'static str) -> Match {
        Match::default().pattern(pattern).i(0usize).j(3usize).token("abcd".into()).build()
    }

    #[test]
    fn empty_feedback_for_strong_score() {
        let m = make("dictionary");
        assert_eq!(get_feedback(3, &[m]), Feedback::default());
    }

    #[test]
    fn default_suggestions_for_empty_sequence() {
        let feedback = get_feedback(0, &[]);
        assert!(feedback.warning.is_none());
        assert_eq!(feedback.suggestions.len(), 2);
    }

    #[test]
    fn top_ten_password_gets_top_ten_warning() {
        let m = Match::default()
            .pattern("dictionary")
            .i(0usize)
            .j(7usize)
            .token("password".into())
            .dictionary_name(Some("passwords"))
            .rank(Some(1))
            .build();
        let feedback = get_feedback(0, &[m]);
        assert_eq!(
            feedback.warning.as_deref(),
            Some(FeedbackMsg::TopTenCommonPassword.default_text())
        );
    }

    #[test]
    fn repeat_with_single_char_base_gets_aaa_warning() {
        let m = Match::default()
            .pattern("repeat")
            .i(0usize)
            .j(3usize)
            .token("aaaa".into())
            .base_token(Some("a".into()))
            .build();
        let feedback = get_feedback(0, &[m]);
        assert_eq!(
            feedback.warning.as_deref(),
            Some(FeedbackMsg::RepeatsLikeAaaAreEasy.default_text())
        );
    }

    #[test]
    fn translator_hook_overrides_default_text() {
        set_translator(|msg| format!("<{msg}>"));
        let m = make("sequence");
        let feedback = get_feedback(0, &[m]);
        assert_eq!(feedback.warning.as_deref(), Some("<SequencesAreEasy>"));
        // restore identity translator so other tests in this module see
        // the default English text.
        set_translator(|msg| msg.default_text().to_string());
    }
}
