//! Baseline dataset: well-known tools appended when live yield is too low,
//! and used directly for sample/offline runs.

use trend_types::RawTool;

use crate::source::StaticSource;

pub const BASELINE_SOURCE: &str = "Sample";

const BASELINE: [(&str, &str); 30] = [
    (
        "GitHub Copilot",
        "AI-powered code completion and suggestion tool for developers. Supports multiple programming languages and major IDEs like VS Code.",
    ),
    (
        "Midjourney",
        "AI image generation tool that creates stunning artwork from text prompts using diffusion models.",
    ),
    (
        "Jasper AI",
        "AI writing assistant for marketing copy, blog posts, SEO content, and social media captions.",
    ),
    (
        "Tableau AI",
        "Business intelligence platform with AI-powered analytics, data visualization, and dashboard creation.",
    ),
    (
        "Zapier AI",
        "Workflow automation platform that connects 6000+ apps and automates repetitive tasks without coding.",
    ),
    (
        "Perplexity AI",
        "AI-powered search engine that provides real-time answers with cited sources from the web.",
    ),
    (
        "ElevenLabs",
        "AI voice synthesis and cloning tool for hyper-realistic speech in 29 languages.",
    ),
    (
        "Runway ML",
        "AI video generation and editing platform for creating cinematic content from text or images.",
    ),
    (
        "Notion AI",
        "AI assistant inside Notion for summarizing, drafting, translating, and improving documents.",
    ),
    (
        "AutoGPT",
        "Autonomous AI agent that browses the web, writes code, and completes multi-step tasks automatically.",
    ),
    (
        "Hugging Face",
        "Open-source ML platform for sharing, discovering, and deploying NLP, vision, and audio models.",
    ),
    (
        "Whisper",
        "OpenAI open-source speech-to-text transcription model with multilingual support and high accuracy.",
    ),
    (
        "Stable Diffusion",
        "Open-source text-to-image AI model that generates detailed images from text descriptions locally.",
    ),
    (
        "LangChain",
        "Framework for building LLM-powered applications, agents, and pipelines with memory and tool integration.",
    ),
    (
        "Cursor",
        "AI-first code editor built on VS Code with built-in chat, code generation, and codebase understanding.",
    ),
    (
        "Otter.ai",
        "AI meeting assistant that records, transcribes, and summarizes meetings in real time.",
    ),
    (
        "Copy.ai",
        "AI content generation platform for product descriptions, ad copy, blog posts, and sales emails.",
    ),
    (
        "Synthesia",
        "AI video generation platform that creates professional videos with AI avatars from plain text.",
    ),
    (
        "Descript",
        "AI-powered audio and video editor that lets you edit media by editing text transcripts.",
    ),
    (
        "Tome",
        "AI-powered presentation tool that generates complete slide decks from a text prompt.",
    ),
    (
        "Codeium",
        "Free AI code completion and chat assistant supporting 70+ languages and 40+ editors.",
    ),
    (
        "Pika Labs",
        "AI video generation platform that transforms images and text into animated video clips.",
    ),
    (
        "Character.ai",
        "Platform for creating and chatting with AI characters with distinct personalities.",
    ),
    (
        "Murf AI",
        "AI voice generator for creating studio-quality voiceovers for videos, podcasts, and presentations.",
    ),
    (
        "Phind",
        "AI search engine and coding assistant specialized for developers and technical questions.",
    ),
    (
        "Consensus",
        "AI search engine for scientific research that summarizes findings from peer-reviewed papers.",
    ),
    (
        "Gamma",
        "AI-powered tool for creating beautiful presentations, documents, and webpages from a prompt.",
    ),
    (
        "Replit Ghostwriter",
        "AI coding assistant embedded in Replit IDE for code completion, explanation, and transformation.",
    ),
    (
        "Beautiful.ai",
        "AI presentation software with smart slide templates that auto-adjust design and layout.",
    ),
    (
        "Mem.ai",
        "AI-powered knowledge base that automatically organizes notes and surfaces relevant information.",
    ),
];

#[must_use]
pub fn baseline_tools() -> Vec<RawTool> {
    BASELINE
        .iter()
        .map(|(name, description)| RawTool::new(*name, *description, BASELINE_SOURCE))
        .collect()
}

/// The baseline as a regular source, for sample runs.
#[must_use]
pub fn baseline_source() -> StaticSource {
    StaticSource::new(BASELINE_SOURCE, baseline_tools())
}
