//! Layout configuration validation (pane minimum, gutter, sidebar, address row).

use crate::schema::TrioConfig;

use super::helpers::validate_range_f64;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &TrioConfig) {
    let layout = &config.layout;
    validate_range_f64(errors, "layout.min_pane_width", layout.min_pane_width, 120.0, 800.0);
    validate_range_f64(errors, "layout.gutter", layout.gutter, 0.0, 64.0);
    validate_range_f64(errors, "layout.sidebar_width", layout.sidebar_width, 0.0, 400.0);
    validate_range_f64(errors, "layout.address_inset", layout.address_inset, 0.0, 64.0);
    validate_range_f64(
        errors,
        "layout.address_bar_height",
        layout.address_bar_height,
        0.0,
        120.0,
    );
}
