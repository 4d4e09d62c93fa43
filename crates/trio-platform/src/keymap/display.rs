use super::types::{KeyBind, Modifier};

/// Render a [`KeyBind`] for menu labels and tooltips.
///
/// macOS uses the modifier glyphs with no separator; other platforms spell
/// the modifiers out and join with `+`.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mac = cfg!(target_os = "macos");
    let mut parts: Vec<String> = kb
        .modifiers
        .iter()
        .map(|m| modifier_label(*m, mac).to_string())
        .collect();
    parts.push(key_label(&kb.key, mac));

    if mac {
        parts.concat()
    } else {
        parts.join("+")
    }
}

fn modifier_label(modifier: Modifier, mac: bool) -> &'static str {
    match (modifier, mac) {
        (Modifier::Ctrl, true) => "\u{2303}",
        (Modifier::Alt, true) => "\u{2325}",
        (Modifier::Shift, true) => "\u{21E7}",
        (Modifier::Super, true) => "\u{2318}",
        (Modifier::Ctrl, false) => "Ctrl",
        (Modifier::Alt, false) => "Alt",
        (Modifier::Shift, false) => "Shift",
        (Modifier::Super, false) if cfg!(target_os = "windows") => "Win",
        (Modifier::Super, false) => "Super",
    }
}

fn key_label(key: &str, mac: bool) -> String {
    if !mac {
        return key.to_string();
    }
    match key {
        "Tab" => "\u{21E5}".into(),
        "Escape" => "\u{238B}".into(),
        "Enter" => "\u{21A9}".into(),
        other => other.to_string(),
    }
}
