//! Persisted pane settings and history validation.

use crate::schema::TrioConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_panes(errors: &mut Vec<String>, config: &TrioConfig) {
    let panes = &config.panes;
    validate_range_f64(errors, "panes.split_ratio", panes.split_ratio, 0.2, 0.8);
    validate_range_f64(errors, "panes.three_split_r1", panes.three_split_r1, 0.0, 1.0);
    validate_range_f64(errors, "panes.three_split_r2", panes.three_split_r2, 0.0, 1.0);

    if panes.three_split_r1 + panes.three_split_r2 > 1.0 {
        errors.push(format!(
            "panes.three_split_r1 + panes.three_split_r2 = {} exceeds 1.0",
            panes.three_split_r1 + panes.three_split_r2
        ));
    }

    if let Some(side) = &panes.tab_lock_side {
        if panes.tab_lock().is_none() {
            errors.push(format!(
                "panes.tab_lock_side = '{side}' must be 'right' or 'third'"
            ));
        }
    }
}

pub(crate) fn validate_history(errors: &mut Vec<String>, config: &TrioConfig) {
    validate_range(
        errors,
        "history.max_entries",
        config.history.max_entries,
        10,
        10_000,
    );
}
