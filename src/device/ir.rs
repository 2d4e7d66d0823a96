//! In-process infrared link between two devices.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{debug, trace};

use crate::device::Transport;

/// Receive register of one endpoint. Holds at most one unread byte.
type Register = Arc<Mutex<Option<i8>>>;

fn lock(register: &Register) -> MutexGuard<'_, Option<i8>> {
    register.lock().unwrap_or_else(PoisonError::into_inner)
}

/// One end of a cross-connected pair. Writing fills the peer's register,
/// replacing a byte the peer has not read yet.
#[derive(Debug, Clone)]
pub struct IrLink {
    inbox: Register,
    outbox: Register,
}

impl IrLink {
    /// Creates two endpoints facing each other.
    pub fn pair() -> (IrLink, IrLink) {
        let a: Register = Arc::default();
        let b: Register = Arc::default();
        (
            IrLink { inbox: a.clone(), outbox: b.clone() },
            IrLink { inbox: b, outbox: a },
        )
    }

    /// Peeks at the unread byte without consuming it.
    pub fn peek(&self) -> Option<i8> {
        *lock(&self.inbox)
    }
}

impl Transport for IrLink {
    fn byte_ready(&mut self) -> bool {
        lock(&self.inbox).is_some()
    }

    /// Reads the pending byte. An empty register reads as 0.
    fn read_byte(&mut self) -> i8 {
        let byte = lock(&self.inbox).take();
        trace!("[IrLink] read {:?}", byte);
        byte.unwrap_or_default()
    }

    fn write_byte(&mut self, byte: i8) {
        if let Some(lost) = lock(&self.outbox).replace(byte) {
            debug!("[IrLink] overrun: unread byte {} replaced by {}", lost, byte);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_cross_between_endpoints() {
        let (mut blue, mut red) = IrLink::pair();
        assert!(!red.byte_ready());
        blue.write_byte(64);
        assert!(red.byte_ready());
        assert!(!blue.byte_ready());
        assert_eq!(red.read_byte(), 64);
        assert!(!red.byte_ready());
    }

    #[test]
    fn test_unread_byte_is_overwritten() {
        let (mut blue, mut red) = IrLink::pair();
        blue.write_byte(60);
        blue.write_byte(1);
        assert_eq!(red.peek(), Some(1));
        assert_eq!(red.read_byte(), 1);
    }
}
