//! Trailing-edge debounce gate.
//!
//! The gate does not own a timer. Callers record each invocation with
//! [`DebounceGate::call`], arm a platform timer for [`DebounceGate::wait`]
//! and hand the returned [`Ticket`] back through [`DebounceGate::fire`].
//! Only the last invocation of a burst comes out, carrying its own arguments.

use std::time::Duration;

/// Identifies one scheduled invocation. Only the latest ticket can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug)]
struct Pending<T> {
    ticket: Ticket,
    args: T,
}

#[derive(Debug)]
pub struct DebounceGate<T> {
    wait: Duration,
    issued: u64,
    pending: Option<Pending<T>>,
}

impl<T> DebounceGate<T> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            issued: 0,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    /// Records an invocation, replacing whatever was scheduled.
    pub fn call(&mut self, args: T) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some(Pending { ticket, args });
        ticket
    }

    /// Timer callback path: yields the arguments iff `ticket` is still the
    /// scheduled one.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => self.pending.take().map(|p| p.args),
            _ => None,
        }
    }

    /// Drops the scheduled invocation, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|p| p.args)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAIT: Duration = Duration::from_millis(300);

    #[test]
    fn burst_runs_once_with_last_arguments() {
        let mut gate = DebounceGate::new(WAIT);
        let tickets: Vec<_> = ["j", "ja", "jan", "jane"]
            .iter()
            .map(|text| gate.call(text.to_string()))
            .collect();

        let fired: Vec<_> = tickets.into_iter().filter_map(|t| gate.fire(t)).collect();
        assert_eq!(fired, vec!["jane".to_string()]);
        assert!(!gate.is_pending());
    }

    #[test]
    fn only_latest_ticket_fires() {
        let mut gate = DebounceGate::new(WAIT);
        let first = gate.call(1);
        let second = gate.call(2);
        let third = gate.call(3);

        assert_eq!(gate.fire(first), None);
        assert_eq!(gate.fire(second), None);
        assert_eq!(gate.fire(third), Some(3));
        assert_eq!(gate.fire(third), None);
        assert!(!gate.is_pending());
    }

    #[test]
    fn separated_calls_each_run() {
        let mut gate = DebounceGate::new(WAIT);
        let a = gate.call("a");
        assert_eq!(gate.fire(a), Some("a"));
        let b = gate.call("b");
        assert_eq!(gate.fire(b), Some("b"));
        assert_eq!(gate.wait(), WAIT);
    }

    #[test]
    fn cancel_discards_pending_call() {
        let mut gate = DebounceGate::new(WAIT);
        let ticket = gate.call("a");
        assert_eq!(gate.cancel(), Some("a"));
        assert_eq!(gate.fire(ticket), None);
    }
}
