use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of grammar topics a task can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Topic {
    #[serde(rename = "Verb Patterns")]
    VerbPatterns,
    #[serde(rename = "Phrasal Verbs")]
    PhrasalVerbs,
    #[serde(rename = "Modal Verbs")]
    ModalVerbs,
    Conditionals,
    #[serde(rename = "The Passive Voice")]
    ThePassiveVoice,
    Causatives,
    #[serde(rename = "Wish and Hope")]
    WishAndHope,
    #[serde(rename = "Reported Speech")]
    ReportedSpeech,
}

impl Topic {
    pub const ALL: [Topic; 8] = [
        Topic::VerbPatterns,
        Topic::PhrasalVerbs,
        Topic::ModalVerbs,
        Topic::Conditionals,
        Topic::ThePassiveVoice,
        Topic::Causatives,
        Topic::WishAndHope,
        Topic::ReportedSpeech,
    ];

    /// The label shown to the user and written into task records.
    pub fn label(self) -> &'static str {
        match self {
            Topic::VerbPatterns => "Verb Patterns",
            Topic::PhrasalVerbs => "Phrasal Verbs",
            Topic::ModalVerbs => "Modal Verbs",
            Topic::Conditionals => "Conditionals",
            Topic::ThePassiveVoice => "The Passive Voice",
            Topic::Causatives => "Causatives",
            Topic::WishAndHope => "Wish and Hope",
            Topic::ReportedSpeech => "Reported Speech",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTopic {
    value: String,
}

impl fmt::Display for UnknownTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown topic: {}", self.value)
    }
}

impl std::error::Error for UnknownTopic {}

impl FromStr for Topic {
    type Err = UnknownTopic;

    /// Accepts the display label or its kebab-case form, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', " ");
        Topic::ALL
            .into_iter()
            .find(|topic| topic.label().to_lowercase() == normalized)
            .ok_or_else(|| UnknownTopic {
                value: s.to_string(),
            })
    }
}
