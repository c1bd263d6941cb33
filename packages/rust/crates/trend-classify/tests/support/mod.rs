//! Shared fakes for trend-classify integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use trend_llm::{LlmReply, LlmService, UnavailableReason};
use trend_types::{Category, ClassificationResult, EnrichedTool, RawTool};

/// Returns queued replies in order, then `Unavailable`; records every prompt.
pub struct ScriptedLlm {
    replies: Mutex<VecDeque<LlmReply>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedLlm {
    pub fn new(replies: Vec<LlmReply>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn answering(text: &str) -> Arc<Self> {
        Self::new(vec![LlmReply::Success(text.to_string())])
    }

    pub fn unavailable() -> Arc<Self> {
        Self::new(vec![LlmReply::Unavailable(
            UnavailableReason::RateLimitExhausted { attempts: 3 },
        )])
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmService for ScriptedLlm {
    async fn complete(&self, prompt: &str, _max_output_tokens: u32) -> LlmReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(LlmReply::Unavailable(UnavailableReason::NotConfigured))
    }
}

pub fn catalog_tool(name: &str, category: Category, description: &str) -> EnrichedTool {
    EnrichedTool::from_parts(
        RawTool::new(name, description, "Sample"),
        ClassificationResult::keyword_only(category, 0.5, description),
    )
}

pub fn names(tools: &[EnrichedTool]) -> Vec<&str> {
    tools.iter().map(|tool| tool.name.as_str()).collect()
}
