//! Provider entries.

use regex::Regex;
use trio_common::ProviderId;
use trio_config::store::{CustomProvider, ProviderOverride};

use super::url::{host_of, path_of};

/// What the coordinator needs to know about a provider beyond its URLs.
#[derive(Debug, Clone, Default)]
pub struct Capabilities {
    /// Surfaces are attached only after the auth gate authorizes.
    pub gated: bool,
    /// Matches the URL path of a specific conversation.
    pub deep_link: Option<Regex>,
    /// Trailing site names stripped from page titles.
    pub title_suffixes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Provider {
    pub id: ProviderId,
    pub label: String,
    pub icon_ref: Option<String>,
    pub base_url: String,
    /// Loaded when a surface is first created.
    pub home_url: String,
    pub capabilities: Capabilities,
}

impl Provider {
    /// Entry for a provider the user added by URL. Custom providers are
    /// never gated and have no deep-link rule.
    pub fn from_custom(custom: &CustomProvider) -> Self {
        Self {
            id: custom.id.clone(),
            label: custom.label.clone(),
            icon_ref: custom.icon_ref.clone(),
            base_url: custom.base_url.clone(),
            home_url: custom
                .home_url
                .clone()
                .unwrap_or_else(|| custom.base_url.clone()),
            capabilities: Capabilities {
                title_suffixes: vec![format!(" - {}", custom.label), format!(" | {}", custom.label)],
                ..Default::default()
            },
        }
    }

    /// Copy with the user's label / home URL applied.
    pub fn with_override(&self, overlay: &ProviderOverride) -> Self {
        let mut merged = self.clone();
        if let Some(label) = &overlay.label {
            merged.label = label.clone();
        }
        if let Some(home) = &overlay.home_url {
            merged.home_url = home.clone();
        }
        merged
    }

    pub fn is_gated(&self) -> bool {
        self.capabilities.gated
    }

    /// Whether `url` is on this provider's host or one of its subdomains.
    pub fn matches_host(&self, url: &str) -> bool {
        let (Some(own), Some(other)) = (host_of(&self.base_url), host_of(url)) else {
            return false;
        };
        other == own || other.ends_with(&format!(".{own}"))
    }

    /// Whether `url` points at a specific conversation.
    pub fn is_deep_link(&self, url: &str) -> bool {
        match &self.capabilities.deep_link {
            Some(rule) => self.matches_host(url) && rule.is_match(&path_of(url)),
            None => false,
        }
    }

    /// Title with any known site-name suffix removed. Falls back to the
    /// provider label when nothing is left.
    pub fn normalize_title(&self, raw: &str) -> String {
        let mut title = raw.trim_end();
        for suffix in &self.capabilities.title_suffixes {
            if let Some(stripped) = title.strip_suffix(suffix.as_str()) {
                title = stripped;
                break;
            }
        }
        let title = title.trim();
        if title.is_empty() {
            self.label.clone()
        } else {
            title.to_string()
        }
    }
}
