//! The closed mood vocabulary offered to the classifier.
//!
//! The upstream model is asked to answer with one of these words, but nothing forces it to. The
//! classifier passes its answer through as-is and only uses [`Mood`] to tell whether the label was
//! recognised.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mood {
    Sad,
    Anxious,
    Lonely,
    Hopeful,
    Overwhelmed,
    Grateful,
    Lost,
    Angry,
    Peaceful,
    Confused,
    Excited,
    Depressed,
    Healing,
    Numb,
    Stressed,
    /// Fallback when classification yields nothing usable. Not offered to the model.
    #[default]
    Neutral,
}

const VOCABULARY: [Mood; 15] = [
    Mood::Sad,
    Mood::Anxious,
    Mood::Lonely,
    Mood::Hopeful,
    Mood::Overwhelmed,
    Mood::Grateful,
    Mood::Lost,
    Mood::Angry,
    Mood::Peaceful,
    Mood::Confused,
    Mood::Excited,
    Mood::Depressed,
    Mood::Healing,
    Mood::Numb,
    Mood::Stressed,
];

impl Mood {
    /// Moods the model may choose from, in the order they appear in the prompt.
    pub fn vocabulary() -> &'static [Mood] {
        &VOCABULARY
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
            Mood::Lonely => "Lonely",
            Mood::Hopeful => "Hopeful",
            Mood::Overwhelmed => "Overwhelmed",
            Mood::Grateful => "Grateful",
            Mood::Lost => "Lost",
            Mood::Angry => "Angry",
            Mood::Peaceful => "Peaceful",
            Mood::Confused => "Confused",
            Mood::Excited => "Excited",
            Mood::Depressed => "Depressed",
            Mood::Healing => "Healing",
            Mood::Numb => "Numb",
            Mood::Stressed => "Stressed",
            Mood::Neutral => "Neutral",
        }
    }

    /// Comma-separated vocabulary as it is spelled out to the model.
    pub fn vocabulary_list() -> String {
        VOCABULARY
            .iter()
            .map(Mood::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not part of the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown mood: {0}")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        VOCABULARY
            .iter()
            .chain(std::iter::once(&Mood::Neutral))
            .find(|m| m.as_str().eq_ignore_ascii_case(label))
            .copied()
            .ok_or_else(|| UnknownMood(label.to_string()))
    }
}
