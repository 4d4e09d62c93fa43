//! Next / previous provider for a pane.

use trio_common::{CycleDirection, PaneSide, ProviderId};

use crate::providers::ProviderRegistry;

/// Where a pane currently sits in the display order.
///
/// `Left` always has a selection. A secondary pane without one is placed
/// by matching its last URL's host; no match puts it at the head.
pub fn current_index(
    registry: &ProviderRegistry,
    order: &[ProviderId],
    side: PaneSide,
    current: Option<&ProviderId>,
    last_url: Option<&str>,
) -> usize {
    if let Some(index) = current.and_then(|c| order.iter().position(|id| id == c)) {
        return index;
    }
    if !side.is_secondary() {
        return 0;
    }
    last_url
        .and_then(|url| {
            order.iter().position(|id| {
                registry
                    .resolve(id)
                    .is_some_and(|provider| provider.matches_host(url))
            })
        })
        .unwrap_or(0)
}

/// `(index + step) mod len`, wrapping both ways.
pub fn step(index: usize, len: usize, direction: CycleDirection) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + direction.step()).rem_euclid(len as isize) as usize
}

/// Provider `direction` steps away from the pane's current one, or `None`
/// when the registry is empty.
pub fn next(
    registry: &ProviderRegistry,
    side: PaneSide,
    current: Option<&ProviderId>,
    last_url: Option<&str>,
    direction: CycleDirection,
) -> Option<ProviderId> {
    let order = registry.ordered();
    if order.is_empty() {
        return None;
    }
    let index = current_index(registry, &order, side, current, last_url);
    order.get(step(index, order.len(), direction)).cloned()
}
