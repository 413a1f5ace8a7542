use crate::types::Overlay;
use ahash::AHashSet;

/// Page scroll suppression shared by all overlays.
///
/// Each overlay holds at most one reference; the page stays locked until
/// every holder has released.
#[derive(Debug, Default)]
pub struct ScrollLock {
    holders: AHashSet<Overlay>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if the overlay already held the lock
    pub fn acquire(&mut self, overlay: Overlay) -> bool {
        self.holders.insert(overlay)
    }

    /// Returns false if the overlay was not holding the lock
    pub fn release(&mut self, overlay: Overlay) -> bool {
        self.holders.remove(&overlay)
    }

    pub fn is_locked(&self) -> bool {
        !self.holders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_release() {
        let mut lock = ScrollLock::new();
        assert!(!lock.is_locked());

        assert!(lock.acquire(Overlay::Player));
        assert!(lock.is_locked());

        assert!(lock.release(Overlay::Player));
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_overlapping_overlays() {
        let mut lock = ScrollLock::new();
        lock.acquire(Overlay::Actions);
        lock.acquire(Overlay::Player);

        lock.release(Overlay::Actions);
        assert!(lock.is_locked(), "player is still open");

        lock.release(Overlay::Player);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_reacquire_is_idempotent() {
        let mut lock = ScrollLock::new();
        assert!(lock.acquire(Overlay::Delete));
        assert!(!lock.acquire(Overlay::Delete));

        assert!(lock.release(Overlay::Delete));
        assert!(!lock.is_locked());
        assert!(!lock.release(Overlay::Delete));
    }
}
