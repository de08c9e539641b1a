//! Last-write-wins debounce discipline
//!
//! Browser timers deliver the callbacks; this state machine decides whether
//! a delivered callback is still the latest one armed. Every input event
//! arms a fresh ticket, superseding whatever was pending, so a burst of
//! events within the quiet period collapses to a single fire carrying the
//! state at the last event.

/// Handle for one armed callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Per-widget debounce state, owned by whatever schedules the callbacks
/// (one per autosave form, one per search box).
#[derive(Debug, Default)]
pub struct Debouncer {
    armed: u64,
    fired: u64,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm a new callback, superseding any still pending.
    pub fn arm(&mut self) -> Ticket {
        self.armed += 1;
        Ticket(self.armed)
    }

    /// True if this ticket is still the latest armed and has not fired yet.
    /// Callers run their effect only on `true`.
    pub fn try_fire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 == self.armed && ticket.0 > self.fired {
            self.fired = ticket.0;
            true
        } else {
            false
        }
    }

    /// Whether a callback is armed and has not fired.
    pub fn pending(&self) -> bool {
        self.armed > self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_arm_fires_once() {
        let mut debounce = Debouncer::new();
        let ticket = debounce.arm();
        assert!(debounce.pending());

        assert!(debounce.try_fire(ticket));
        // The timer can only deliver once, but a replay must still be inert
        assert!(!debounce.try_fire(ticket));
        assert!(!debounce.pending());
    }

    #[test]
    fn test_rearm_supersedes_pending() {
        let mut debounce = Debouncer::new();
        let first = debounce.arm();
        let second = debounce.arm();

        // The superseded callback is not allowed to run
        assert!(!debounce.try_fire(first));
        assert!(debounce.try_fire(second));
    }

    #[test]
    fn test_stale_ticket_after_fire() {
        let mut debounce = Debouncer::new();
        let first = debounce.arm();
        assert!(debounce.try_fire(first));

        let second = debounce.arm();
        // The old ticket stays dead across later generations
        assert!(!debounce.try_fire(first));
        assert!(debounce.try_fire(second));
    }

    proptest! {
        // Any burst of arms within one quiet period yields exactly one fire,
        // and it is the last ticket in the burst.
        #[test]
        fn test_burst_coalesces_to_last(burst in 1usize..64) {
            let mut debounce = Debouncer::new();
            let tickets: Vec<Ticket> = (0..burst).map(|_| debounce.arm()).collect();

            let mut fires = 0;
            for (i, &ticket) in tickets.iter().enumerate() {
                if debounce.try_fire(ticket) {
                    fires += 1;
                    prop_assert_eq!(i, burst - 1);
                }
            }
            prop_assert_eq!(fires, 1);
            prop_assert!(!debounce.pending());
        }
    }
}
