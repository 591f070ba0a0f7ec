use super::{hold, print_error};
use crate::error;
use crate::lang::Error;
use crate::mach::{Effects, KeyCode};
use enigo::{Direction, Enigo, Key, Keyboard, Settings};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// ## Effects that press real keys
///
/// A key is always released, even when the hold is cut short by an abort.
pub struct Injector {
    enigo: Enigo,
    interrupted: Arc<AtomicBool>,
}

impl Injector {
    pub fn new(interrupted: Arc<AtomicBool>) -> Result<Injector, Error> {
        match Enigo::new(&Settings::default()) {
            Ok(enigo) => Ok(Injector { enigo, interrupted }),
            Err(e) => Err(error!(InputUnavailable; &e.to_string())),
        }
    }
}

impl Effects for Injector {
    fn pause(&mut self, ms: u64) {
        debug!("pause {} ms", ms);
        hold(ms, &self.interrupted);
    }

    fn press(&mut self, name: &str, code: KeyCode, ms: u64) {
        let key = match key_for(code) {
            Some(key) => key,
            None => {
                warn!("no way to send {} (0x{:02X}) on this platform", name, code);
                return;
            }
        };
        debug!("press {} for {} ms", name, ms);
        if let Err(e) = self.enigo.key(key, Direction::Press) {
            warn!("key down {} failed: {}", name, e);
            return;
        }
        hold(ms, &self.interrupted);
        if let Err(e) = self.enigo.key(key, Direction::Release) {
            warn!("key up {} failed: {}", name, e);
        }
    }

    fn aborted(&mut self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    fn report(&mut self, error: &Error) {
        print_error(error);
    }
}

/// Virtual-key codes go straight through.
#[cfg(target_os = "windows")]
fn key_for(code: KeyCode) -> Option<Key> {
    Some(Key::Other(u32::from(code)))
}

/// Translate a virtual-key code to a portable key.
#[cfg(not(target_os = "windows"))]
fn key_for(code: KeyCode) -> Option<Key> {
    const F_KEYS: [Key; 12] = [
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
    ];
    let key = match code {
        0x30..=0x39 | 0x41..=0x5A => {
            Key::Unicode(char::from(code as u8).to_ascii_lowercase())
        }
        0x60..=0x69 => Key::Unicode(char::from(b'0' + (code - 0x60) as u8)),
        0x70..=0x7B => F_KEYS[usize::from(code - 0x70)],
        0x08 => Key::Backspace,
        0x09 => Key::Tab,
        0x0D => Key::Return,
        0x1B => Key::Escape,
        0x20 => Key::Space,
        0x21 => Key::PageUp,
        0x22 => Key::PageDown,
        0x23 => Key::End,
        0x24 => Key::Home,
        0x25 => Key::LeftArrow,
        0x26 => Key::UpArrow,
        0x27 => Key::RightArrow,
        0x28 => Key::DownArrow,
        0x2E => Key::Delete,
        0x10 | 0xA0 | 0xA1 => Key::Shift,
        0x11 | 0xA2 | 0xA3 => Key::Control,
        0x12 | 0xA4 | 0xA5 => Key::Alt,
        0x5B | 0x5C => Key::Meta,
        0x6A => Key::Unicode('*'),
        0x6B => Key::Unicode('+'),
        0x6D | 0xBD => Key::Unicode('-'),
        0x6E | 0xBE => Key::Unicode('.'),
        0x6F | 0xBF => Key::Unicode('/'),
        0xBA => Key::Unicode(';'),
        0xBB => Key::Unicode('='),
        0xBC => Key::Unicode(','),
        0xC0 => Key::Unicode('`'),
        0xDB => Key::Unicode('['),
        0xDC => Key::Unicode('\\'),
        0xDD => Key::Unicode(']'),
        0xDE => Key::Unicode('\''),
        _ => return None,
    };
    Some(key)
}
