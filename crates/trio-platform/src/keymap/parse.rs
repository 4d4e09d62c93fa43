use trio_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parse a config string such as `"Cmd+Shift+R"`, `"Shift+Tab"` or
/// `"Cmd+Option+2"` into a [`KeyBind`].
///
/// `Cmd` resolves to `Super` on macOS and `Ctrl` elsewhere, so the default
/// bindings stay usable on every platform. `Option` is an alias of `Alt`.
/// The final token is always the key, even if it names a modifier.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();

    let Some((last, modifier_tokens)) = tokens.split_last() else {
        return Err(PlatformError::NotSupported("empty keybind string".into()));
    };
    if last.is_empty() {
        return Err(PlatformError::NotSupported(format!(
            "keybind '{s}' has no key component"
        )));
    }

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::NotSupported(format!("unrecognized modifier: {token}"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(last),
    })
}

fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmd" | "command" => {
            if cfg!(target_os = "macos") {
                Some(Modifier::Super)
            } else {
                Some(Modifier::Ctrl)
            }
        }
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            // F-keys and other named keys: capitalize the first letter.
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => c.to_uppercase().chain(chars).collect(),
                None => lower,
            }
        }
    }
}
