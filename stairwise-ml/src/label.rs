//! Movement labels
//!
//! The classifier output is a closed set. Each label has one canonical
//! literal (used in exported results and ground-truth files) and a display
//! string per UI language.
//!
//! | Label              | Literal              | English                         | Slovenian                     |
//! |--------------------|----------------------|---------------------------------|-------------------------------|
//! | `Up`               | `"Up"`               | Walking up the stairs           | Hod po stopnicah navzgor      |
//! | `Down`             | `"Down"`             | Walking down the stairs         | Hod po stopnicah navzdol      |
//! | `Straight`         | `"Straight"`         | Walking straight                | Hod po ravnem                 |
//! | `InsufficientData` | `"InsufficientData"` | Insufficient data for analysis  | Premalo podatkov za analizo   |

use core::fmt;
use core::str::FromStr;

/// Classifier output
///
/// `Ord` follows declaration order: `Up < Down < Straight <
/// InsufficientData`. Reports and confusion matrices list labels in this
/// order, not alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Label {
    /// Walking upstairs
    Up,
    /// Walking downstairs
    Down,
    /// Level walking
    Straight,
    /// Too few samples, or a sensor missing from the session
    InsufficientData,
}

/// UI language for display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English
    #[default]
    English,
    /// Slovenian
    Slovenian,
}

/// Display strings, indexed by label then language
const DISPLAY_NAMES: [(Label, &str, &str); 4] = [
    (Label::Up, "Walking up the stairs", "Hod po stopnicah navzgor"),
    (Label::Down, "Walking down the stairs", "Hod po stopnicah navzdol"),
    (Label::Straight, "Walking straight", "Hod po ravnem"),
    (
        Label::InsufficientData,
        "Insufficient data for analysis",
        "Premalo podatkov za analizo",
    ),
];

impl Label {
    /// Every label, movement labels first
    pub const ALL: [Label; 4] = [Label::Up, Label::Down, Label::Straight, Label::InsufficientData];

    /// The three movement labels a session can be recorded as
    pub const MOVEMENTS: [Label; 3] = [Label::Up, Label::Down, Label::Straight];

    /// Canonical literal
    pub const fn as_str(&self) -> &'static str {
        match self {
            Label::Up => "Up",
            Label::Down => "Down",
            Label::Straight => "Straight",
            Label::InsufficientData => "InsufficientData",
        }
    }

    /// Human-readable name in the given language
    pub fn display_name(&self, language: Language) -> &'static str {
        let (_, english, slovenian) = DISPLAY_NAMES[self.index()];
        match language {
            Language::English => english,
            Language::Slovenian => slovenian,
        }
    }

    /// Whether this is a movement rather than the no-data sentinel
    pub const fn is_movement(&self) -> bool {
        !matches!(self, Label::InsufficientData)
    }

    /// Parse a canonical literal or any display string
    pub fn parse(text: &str) -> Option<Label> {
        let text = text.trim();
        Label::ALL.into_iter().find(|label| {
            label.as_str().eq_ignore_ascii_case(text)
                || label.display_name(Language::English).eq_ignore_ascii_case(text)
                || label.display_name(Language::Slovenian).eq_ignore_ascii_case(text)
        })
    }

    const fn index(&self) -> usize {
        match self {
            Label::Up => 0,
            Label::Down => 1,
            Label::Straight => 2,
            Label::InsufficientData => 3,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised label text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownLabel;

impl fmt::Display for UnknownLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown movement label")
    }
}

impl FromStr for Label {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Label::parse(s).ok_or(UnknownLabel)
    }
}
