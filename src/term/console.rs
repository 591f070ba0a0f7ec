use super::{hold, print_error};
use crate::lang::Error;
use crate::mach::{Effects, KeyCode};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

/// ## Effects that only log
///
/// Waits out every pause and key hold so a dry run takes as long as the
/// real thing.
pub struct Console {
    interrupted: Arc<AtomicBool>,
}

impl Console {
    pub fn new(interrupted: Arc<AtomicBool>) -> Console {
        Console { interrupted }
    }
}

impl Effects for Console {
    fn pause(&mut self, ms: u64) {
        info!("pause {} ms", ms);
        hold(ms, &self.interrupted);
    }

    fn press(&mut self, key: &str, code: KeyCode, ms: u64) {
        info!("press {} (0x{:02X}) for {} ms", key, code, ms);
        hold(ms, &self.interrupted);
    }

    fn aborted(&mut self) -> bool {
        self.interrupted.load(Ordering::SeqCst)
    }

    fn report(&mut self, error: &Error) {
        print_error(error);
    }
}
