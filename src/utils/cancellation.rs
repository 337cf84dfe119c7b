use std::cell::Cell;
use std::rc::Rc;

/// Issues tickets for in-flight requests. Issuing a new ticket or calling
/// `invalidate` makes every older ticket stale; a stale ticket's response
/// must be dropped instead of applied.
#[derive(Debug, Clone, Default)]
pub struct FetchGuard {
    epoch: Rc<Cell<u64>>,
}

#[derive(Debug, Clone)]
pub struct Ticket {
    epoch: Rc<Cell<u64>>,
    issued: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Ticket {
        let issued = self.epoch.get().wrapping_add(1);
        self.epoch.set(issued);
        Ticket {
            epoch: self.epoch.clone(),
            issued,
        }
    }

    /// Invalidates all outstanding tickets (unmount, dependency change)
    pub fn invalidate(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
    }
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.epoch.get() == self.issued
    }

    /// Runs `apply` only if the ticket is still current. Returns whether it ran.
    pub fn apply<F: FnOnce()>(&self, apply: F) -> bool {
        if self.is_current() {
            apply();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_ticket_supersedes_older() {
        let guard = FetchGuard::new();
        let first = guard.issue();
        assert!(first.is_current());

        let second = guard.issue();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn invalidate_discards_late_response() {
        let guard = FetchGuard::new();
        let ticket = guard.issue();
        guard.invalidate();

        let mut applied = false;
        assert!(!ticket.apply(|| applied = true));
        assert!(!applied);
    }

    #[test]
    fn clones_share_the_same_epoch() {
        let guard = FetchGuard::new();
        let ticket = guard.issue();
        guard.clone().invalidate();
        assert!(!ticket.is_current());
    }
}
