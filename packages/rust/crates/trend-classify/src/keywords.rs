//! Static category keyword table.
//!
//! Rows follow [`Category`] declaration order; that order is the tie-break when two
//! categories record the same number of hits. `Other` has no row.

use trend_types::Category;

/// Category to keywords, matched as lowercase substrings.
pub const KEYWORD_RULES: [(Category, &[&str]); 9] = [
    (
        Category::CodeGeneration,
        &[
            "code",
            "coding",
            "programming",
            "developer",
            "github",
            "copilot",
            "ide",
            "autocomplete",
            "refactor",
            "debugging",
            "python",
            "javascript",
        ],
    ),
    (
        Category::ImageGeneration,
        &[
            "image",
            "photo",
            "art",
            "picture",
            "illustration",
            "stable diffusion",
            "dall-e",
            "midjourney",
            "text-to-image",
            "artwork",
            "visual",
            "generate image",
        ],
    ),
    (
        Category::VideoGeneration,
        &[
            "video",
            "animation",
            "movie",
            "film",
            "cinematic",
            "text-to-video",
            "runway",
            "sora",
            "clip",
            "render",
        ],
    ),
    (
        Category::AudioSpeech,
        &[
            "audio",
            "voice",
            "speech",
            "tts",
            "transcription",
            "podcast",
            "music",
            "sound",
            "whisper",
            "elevenlabs",
            "clone voice",
        ],
    ),
    (
        Category::DataAnalysis,
        &[
            "data",
            "analytics",
            "dashboard",
            "chart",
            "sql",
            "csv",
            "excel",
            "visualization",
            "bi",
            "insights",
            "statistics",
            "tableau",
        ],
    ),
    (
        Category::WritingContent,
        &[
            "write",
            "writing",
            "blog",
            "seo",
            "copywriting",
            "content",
            "essay",
            "article",
            "marketing copy",
            "social media",
            "jasper",
        ],
    ),
    (
        Category::AutomationAgents,
        &[
            "automate",
            "automation",
            "workflow",
            "agent",
            "pipeline",
            "zapier",
            "n8n",
            "task",
            "autonomous",
            "schedule",
            "bot",
        ],
    ),
    (
        Category::SearchResearch,
        &[
            "search",
            "research",
            "browse",
            "web",
            "real-time",
            "citation",
            "knowledge",
            "perplexity",
            "question answering",
            "fact",
        ],
    ),
    (
        Category::ChatbotAssistant,
        &[
            "chat",
            "chatbot",
            "assistant",
            "conversation",
            "customer service",
            "support",
            "dialogue",
            "gpt",
            "claude",
            "gemini",
        ],
    ),
];

/// Keywords for `category`; empty for `Other`.
#[must_use]
pub fn keywords_for(category: Category) -> &'static [&'static str] {
    for (candidate, keywords) in KEYWORD_RULES {
        if candidate == category {
            return keywords;
        }
    }
    &[]
}
