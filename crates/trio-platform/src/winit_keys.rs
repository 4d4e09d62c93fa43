//! Winit key name normalization.
//!
//! Converts the names winit reports for logical keys into the names
//! produced by [`parse_keybind`](crate::keymap::parse_keybind).

pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        " " => "Space".into(),
        _ if key.chars().count() == 1 => key.to_uppercase(),
        // Tab, Escape, Enter, F-keys pass through.
        _ => key.to_string(),
    }
}
