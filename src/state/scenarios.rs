//! Conversation scenarios implementation
//!
//! A scenario is the persona the assistant plays while the user practises
//! English. Each scenario maps to a fixed role line, and the role line is
//! wrapped into the system instruction sent with every generation request.

use std::fmt;
use serde::{Deserialize, Serialize};

/// Practice scenario selected by a user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scenario {
    Dating,
    Job,
    Travel,
    #[default]
    Casual,
}

impl Scenario {
    /// All scenarios in menu order
    pub const ALL: [Scenario; 4] = [
        Scenario::Dating,
        Scenario::Job,
        Scenario::Travel,
        Scenario::Casual,
    ];

    /// Parse a scenario tag; unknown tags normalise to `Casual`
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "dating" => Scenario::Dating,
            "job" => Scenario::Job,
            "travel" => Scenario::Travel,
            _ => Scenario::Casual,
        }
    }

    /// Stable lowercase tag used in storage and callback data
    pub fn tag(self) -> &'static str {
        match self {
            Scenario::Dating => "dating",
            Scenario::Job => "job",
            Scenario::Travel => "travel",
            Scenario::Casual => "casual",
        }
    }

    /// Display name shown to users
    pub fn label(self) -> &'static str {
        match self {
            Scenario::Dating => "Dating",
            Scenario::Job => "Job",
            Scenario::Travel => "Travel",
            Scenario::Casual => "Casual",
        }
    }

    /// Menu button text
    pub fn button_text(self) -> &'static str {
        match self {
            Scenario::Dating => "❤️ Dating",
            Scenario::Job => "💼 Job",
            Scenario::Travel => "✈ Travel",
            Scenario::Casual => "💬 Casual",
        }
    }

    /// Role the assistant plays in this scenario
    pub fn role(self) -> &'static str {
        match self {
            Scenario::Dating => "Act like a romantic partner. Speak softly and simply.",
            Scenario::Job => "Act like a job interviewer. Ask simple interview questions.",
            Scenario::Travel => "Act like a friendly travel guide.",
            Scenario::Casual => "Act like a friendly English practice partner.",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Build the system instruction for a scenario
pub fn persona_instruction(scenario: Scenario) -> String {
    format!(
        "You are an English practice assistant.\n\
         Scenario role: {}\n\
         Rules:\n\
         - Use simple English\n\
         - Short sentences\n\
         - Friendly tone\n\
         - Help the user improve grammar and vocabulary",
        scenario.role()
    )
}

/// Build the system instruction for a raw scenario tag
pub fn persona_instruction_for_tag(tag: &str) -> String {
    persona_instruction(Scenario::from_tag(tag))
}
