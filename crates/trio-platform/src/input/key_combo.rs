use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// Hashable key representation used for registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    pub key: String,
}

fn modifier_bit(m: Modifier) -> u8 {
    match m {
        Modifier::Ctrl => MOD_CTRL,
        Modifier::Alt => MOD_ALT,
        Modifier::Shift => MOD_SHIFT,
        Modifier::Super => MOD_SUPER,
    }
}

impl KeyCombo {
    pub fn from_keybind(kb: &KeyBind) -> Self {
        Self {
            mods: kb.modifiers.iter().fold(0, |acc, m| acc | modifier_bit(*m)),
            key: kb.key.clone(),
        }
    }

    /// Build from winit modifier state and a key already passed through
    /// [`normalize_winit_key`](crate::normalize_winit_key).
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mods = [
            (ctrl, MOD_CTRL),
            (alt, MOD_ALT),
            (shift, MOD_SHIFT),
            (super_key, MOD_SUPER),
        ]
        .into_iter()
        .filter(|(pressed, _)| *pressed)
        .fold(0, |acc, (_, bit)| acc | bit);
        Self { mods, key }
    }

    pub(super) fn to_keybind(&self) -> KeyBind {
        let modifiers = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift, Modifier::Super]
            .into_iter()
            .filter(|m| self.mods & modifier_bit(*m) != 0)
            .collect();
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}
