use std::fmt;

use serde::{Deserialize, Serialize};

/// Topical category of a tool. Closed set; declaration order is the keyword tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Code Generation")]
    CodeGeneration,
    #[serde(rename = "Image Generation")]
    ImageGeneration,
    #[serde(rename = "Video Generation")]
    VideoGeneration,
    #[serde(rename = "Audio & Speech")]
    AudioSpeech,
    #[serde(rename = "Data Analysis")]
    DataAnalysis,
    #[serde(rename = "Writing & Content")]
    WritingContent,
    #[serde(rename = "Automation & Agents")]
    AutomationAgents,
    #[serde(rename = "Search & Research")]
    SearchResearch,
    #[serde(rename = "Chatbot & Assistant")]
    ChatbotAssistant,
    #[serde(rename = "Other")]
    Other,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Self; 10] = [
        Self::CodeGeneration,
        Self::ImageGeneration,
        Self::VideoGeneration,
        Self::AudioSpeech,
        Self::DataAnalysis,
        Self::WritingContent,
        Self::AutomationAgents,
        Self::SearchResearch,
        Self::ChatbotAssistant,
        Self::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CodeGeneration => "Code Generation",
            Self::ImageGeneration => "Image Generation",
            Self::VideoGeneration => "Video Generation",
            Self::AudioSpeech => "Audio & Speech",
            Self::DataAnalysis => "Data Analysis",
            Self::WritingContent => "Writing & Content",
            Self::AutomationAgents => "Automation & Agents",
            Self::SearchResearch => "Search & Research",
            Self::ChatbotAssistant => "Chatbot & Assistant",
            Self::Other => "Other",
        }
    }

    /// Case-insensitive lookup by display label.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        let needle = raw.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
    }

    /// Like [`Category::from_label`], but anything unrecognized becomes `Other`.
    #[must_use]
    pub fn from_label_or_other(raw: &str) -> Self {
        Self::from_label(raw).unwrap_or(Self::Other)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
