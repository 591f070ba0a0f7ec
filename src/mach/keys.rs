use crate::error;
use crate::lang::Error;
use serde::Deserialize;
use std::collections::HashMap;

/// Platform key code. The standard table uses Windows virtual-key codes.
pub type KeyCode = u16;

/// ## Symbolic key names
///
/// Scripts name keys by upper-case names. The table is handed to the
/// runtime and never changes while a macro runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyTable {
    map: HashMap<String, KeyCode>,
}

#[derive(Deserialize)]
struct KeyFile {
    #[serde(default)]
    keys: HashMap<String, KeyCode>,
}

const STANDARD: &[(&str, KeyCode)] = &[
    ("F1", 0x70),
    ("F2", 0x71),
    ("F3", 0x72),
    ("F4", 0x73),
    ("F5", 0x74),
    ("F6", 0x75),
    ("F7", 0x76),
    ("F8", 0x77),
    ("F9", 0x78),
    ("F10", 0x79),
    ("F11", 0x7A),
    ("F12", 0x7B),
    ("SPACE", 0x20),
    ("ENTER", 0x0D),
    ("RETURN", 0x0D),
    ("TAB", 0x09),
    ("ESCAPE", 0x1B),
    ("ESC", 0x1B),
    ("BACKSPACE", 0x08),
    ("DELETE", 0x2E),
    ("DEL", 0x2E),
    ("INSERT", 0x2D),
    ("INS", 0x2D),
    ("HOME", 0x24),
    ("END", 0x23),
    ("PAGEUP", 0x21),
    ("PGUP", 0x21),
    ("PAGEDOWN", 0x22),
    ("PGDN", 0x22),
    ("UP", 0x26),
    ("DOWN", 0x28),
    ("LEFT", 0x25),
    ("RIGHT", 0x27),
    ("SHIFT", 0x10),
    ("LSHIFT", 0xA0),
    ("RSHIFT", 0xA1),
    ("CTRL", 0x11),
    ("CONTROL", 0x11),
    ("LCTRL", 0xA2),
    ("RCTRL", 0xA3),
    ("ALT", 0x12),
    ("LALT", 0xA4),
    ("RALT", 0xA5),
    ("WIN", 0x5B),
    ("WINDOWS", 0x5B),
    ("LWIN", 0x5B),
    ("RWIN", 0x5C),
    ("MULTIPLY", 0x6A),
    ("ADD", 0x6B),
    ("SUBTRACT", 0x6D),
    ("DECIMAL", 0x6E),
    ("DIVIDE", 0x6F),
    ("COMMA", 0xBC),
    ("PERIOD", 0xBE),
    ("DOT", 0xBE),
    ("SEMICOLON", 0xBA),
    ("QUOTE", 0xDE),
    ("APOSTROPHE", 0xDE),
    ("SLASH", 0xBF),
    ("BACKSLASH", 0xDC),
    ("LEFTBRACKET", 0xDB),
    ("RIGHTBRACKET", 0xDD),
    ("MINUS", 0xBD),
    ("EQUALS", 0xBB),
    ("EQUAL", 0xBB),
    ("GRAVE", 0xC0),
    ("TILDE", 0xC0),
];

impl KeyTable {
    pub fn new() -> KeyTable {
        KeyTable::default()
    }

    /// Letters, digits, function keys, editing keys, arrows, modifiers,
    /// numeric keypad and punctuation.
    pub fn standard() -> KeyTable {
        let mut table = KeyTable::new();
        for ch in b'A'..=b'Z' {
            table.insert(&char::from(ch).to_string(), KeyCode::from(ch));
        }
        for ch in b'0'..=b'9' {
            table.insert(&char::from(ch).to_string(), KeyCode::from(ch));
            let numpad = 0x60 + KeyCode::from(ch - b'0');
            table.insert(&format!("NUMPAD{}", char::from(ch)), numpad);
        }
        for (name, code) in STANDARD {
            table.insert(name, *code);
        }
        table
    }

    /// Names in a `[keys]` table, e.g. `JUMP = 0x20`.
    pub fn from_toml_str(s: &str) -> Result<KeyTable, Error> {
        let file: KeyFile = match toml::from_str(s) {
            Ok(file) => file,
            Err(e) => return Err(error!(BadKeyTable; e.message())),
        };
        let mut table = KeyTable::new();
        for (name, code) in file.keys {
            table.insert(&name, code);
        }
        Ok(table)
    }

    pub fn insert(&mut self, name: &str, code: KeyCode) -> Option<KeyCode> {
        self.map.insert(name.to_ascii_uppercase(), code)
    }

    /// Entries in `other` replace entries with the same name.
    pub fn merge(&mut self, other: KeyTable) {
        self.map.extend(other.map);
    }

    pub fn resolve(&self, name: &str) -> Option<KeyCode> {
        self.map.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_standard_names() {
        let keys = KeyTable::standard();
        assert_eq!(keys.resolve("A"), Some(0x41));
        assert_eq!(keys.resolve("Z"), Some(0x5A));
        assert_eq!(keys.resolve("7"), Some(0x37));
        assert_eq!(keys.resolve("NUMPAD7"), Some(0x67));
        assert_eq!(keys.resolve("ENTER"), keys.resolve("RETURN"));
        assert_eq!(keys.resolve("F12"), Some(0x7B));
        assert_eq!(keys.resolve("FOO"), None);
    }

    #[test]
    fn test_toml_merge() {
        let mut keys = KeyTable::standard();
        let extra = KeyTable::from_toml_str("[keys]\njump = 0x20\nA = 66\n").unwrap();
        assert_eq!(extra.len(), 2);
        keys.merge(extra);
        assert_eq!(keys.resolve("JUMP"), Some(0x20));
        assert_eq!(keys.resolve("A"), Some(66));
    }

    #[test]
    fn test_toml_empty() {
        let keys = KeyTable::from_toml_str("").unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn test_toml_bad_code() {
        let err = KeyTable::from_toml_str("[keys]\nJUMP = \"space\"\n").unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadKeyTable);
        assert!(err.is_fatal());
    }
}
