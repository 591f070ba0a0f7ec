use super::Address;
use crate::lang::Error;

/// ## Loop pairing
///
/// Each `LOOP` waits here until the next unclaimed `ENDLOOP` closes it.
/// Whatever is still open when compiling finishes never loops.
/// Nesting depth is not limited.

#[derive(Debug, Default)]
pub struct Link {
    open: Vec<(Address, Error)>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    /// `unclosed` is what gets reported if the loop never ends.
    pub fn open_loop(&mut self, addr: Address, unclosed: Error) {
        self.open.push((addr, unclosed));
    }

    /// Address of the innermost open loop, if there is one.
    pub fn close_loop(&mut self) -> Option<Address> {
        self.open.pop().map(|(addr, _)| addr)
    }

    /// Errors for every loop left open, outermost first.
    pub fn link(&mut self) -> Vec<Error> {
        self.open.drain(..).map(|(_, error)| error).collect()
    }
}
