//! Built-in table plus the user's overlay, merged at lookup.

use std::collections::HashMap;

use tracing::warn;
use trio_common::ProviderId;
use trio_config::store::{CustomProvider, ProviderOverride, Storage};

use super::builtin::builtin_providers;
use super::types::Provider;

#[derive(Debug, Clone)]
pub struct ProviderRegistry {
    builtins: &'static [Provider],
    overrides: HashMap<ProviderId, ProviderOverride>,
    custom: Vec<Provider>,
    /// Persisted display order. May name unknown ids.
    order: Vec<ProviderId>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ProviderRegistry {
    /// Built-in providers only, in default order.
    pub fn builtin() -> Self {
        Self {
            builtins: builtin_providers(),
            overrides: HashMap::new(),
            custom: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Registry with the store's overrides, custom providers and order.
    /// Each unreadable section is logged and left empty.
    pub fn from_store(store: &dyn Storage) -> Self {
        let mut registry = Self::builtin();

        match store.overrides() {
            Ok(overrides) => {
                for overlay in overrides {
                    registry.set_override(overlay);
                }
            }
            Err(e) => warn!(error = %e, "provider overrides unavailable"),
        }
        match store.custom_providers() {
            Ok(custom) => {
                for entry in &custom {
                    registry.add_custom(entry);
                }
            }
            Err(e) => warn!(error = %e, "custom providers unavailable"),
        }
        match store.ordered_provider_list() {
            Ok(order) => registry.order = order,
            Err(e) => warn!(error = %e, "provider order unavailable"),
        }
        registry
    }

    pub fn set_override(&mut self, overlay: ProviderOverride) {
        self.overrides.insert(overlay.id.clone(), overlay);
    }

    /// Append a custom provider. Returns `false` if the id is taken.
    pub fn add_custom(&mut self, custom: &CustomProvider) -> bool {
        if self.find(&custom.id).is_some() {
            warn!(provider = %custom.id, "custom provider id already registered");
            return false;
        }
        self.custom.push(Provider::from_custom(custom));
        true
    }

    pub fn set_order(&mut self, order: Vec<ProviderId>) {
        self.order = order;
    }

    fn find(&self, id: &ProviderId) -> Option<&Provider> {
        self.builtins
            .iter()
            .chain(self.custom.iter())
            .find(|p| &p.id == id)
    }

    /// The provider `id` with any user override applied.
    pub fn resolve(&self, id: &ProviderId) -> Option<Provider> {
        let base = self.find(id)?;
        Some(match self.overrides.get(id) {
            Some(overlay) => base.with_override(overlay),
            None => base.clone(),
        })
    }

    pub fn contains(&self, id: &ProviderId) -> bool {
        self.find(id).is_some()
    }

    /// Display order: the persisted order with unknown and repeated ids
    /// dropped, then every known provider it missed, built-ins first.
    pub fn ordered(&self) -> Vec<ProviderId> {
        let mut ids: Vec<ProviderId> = Vec::new();
        for id in &self.order {
            if self.contains(id) && !ids.contains(id) {
                ids.push(id.clone());
            }
        }
        for provider in self.builtins.iter().chain(self.custom.iter()) {
            if !ids.contains(&provider.id) {
                ids.push(provider.id.clone());
            }
        }
        ids
    }

    /// First provider in display order whose host matches `url`.
    pub fn guess_from_url(&self, url: &str) -> Option<ProviderId> {
        self.ordered()
            .into_iter()
            .find(|id| self.find(id).is_some_and(|p| p.matches_host(url)))
    }

    /// `preferred` when registered, else the head of the display order.
    pub fn resolve_or_first(&self, preferred: &str) -> Option<ProviderId> {
        let id = ProviderId::from(preferred);
        if self.contains(&id) {
            return Some(id);
        }
        warn!(provider = preferred, "unknown default provider, using first registered");
        self.ordered().into_iter().next()
    }
}
