//! The immutable built-in provider table.

use std::sync::LazyLock;

use regex::Regex;
use trio_common::ProviderId;

use super::types::{Capabilities, Provider};

static CHATGPT_CONVERSATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/(?:g/[^/]+/)?c/[0-9a-fA-F-]{8,}").unwrap());

static CLAUDE_CONVERSATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/chat/[0-9a-fA-F-]{8,}").unwrap());

static GEMINI_CONVERSATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/app/[0-9a-fA-F]{8,}").unwrap());

static PERPLEXITY_THREAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/search/[\w.-]{6,}").unwrap());

static COPILOT_CONVERSATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/chats/[\w-]{8,}").unwrap());

static BUILTINS: LazyLock<Vec<Provider>> = LazyLock::new(|| {
    vec![
        entry(
            "chatgpt",
            "ChatGPT",
            "https://chatgpt.com",
            "https://chatgpt.com/",
            &CHATGPT_CONVERSATION,
            false,
        ),
        entry(
            "claude",
            "Claude",
            "https://claude.ai",
            "https://claude.ai/new",
            &CLAUDE_CONVERSATION,
            false,
        ),
        entry(
            "gemini",
            "Gemini",
            "https://gemini.google.com",
            "https://gemini.google.com/app",
            &GEMINI_CONVERSATION,
            false,
        ),
        entry(
            "perplexity",
            "Perplexity",
            "https://www.perplexity.ai",
            "https://www.perplexity.ai/",
            &PERPLEXITY_THREAD,
            true,
        ),
        entry(
            "copilot",
            "Copilot",
            "https://copilot.microsoft.com",
            "https://copilot.microsoft.com/",
            &COPILOT_CONVERSATION,
            false,
        ),
    ]
});

fn entry(
    id: &str,
    label: &str,
    base_url: &str,
    home_url: &str,
    deep_link: &Regex,
    gated: bool,
) -> Provider {
    Provider {
        id: ProviderId::from(id),
        label: label.to_string(),
        icon_ref: Some(format!("icons/{id}.svg")),
        base_url: base_url.to_string(),
        home_url: home_url.to_string(),
        capabilities: Capabilities {
            gated,
            deep_link: Some(deep_link.clone()),
            title_suffixes: vec![format!(" - {label}"), format!(" | {label}")],
        },
    }
}

/// Built-in providers in their default display order.
pub fn builtin_providers() -> &'static [Provider] {
    &BUILTINS
}
