//! Change and notice events. A screen pushes events into the channels of
//! everyone subscribed; sends are synchronous and never block, and closed
//! receivers are dropped from the observer list on the next emit.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// A transient, dismissible user-visible message (the snack bar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Notice(Notice),
    /// Canonical state changed; derived views must be recomputed.
    Changed,
}

#[derive(Debug, Default)]
pub(crate) struct Observers {
    senders: Vec<UnboundedSender<ScreenEvent>>,
}

impl Observers {
    pub fn subscribe(&mut self) -> UnboundedReceiver<ScreenEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.push(tx);
        rx
    }

    pub fn emit(&mut self, event: ScreenEvent) {
        self.senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub fn changed(&mut self) {
        self.emit(ScreenEvent::Changed);
    }

    pub fn notice(&mut self, severity: Severity, message: String) {
        log::debug!("notice ({:?}): {}", severity, message);
        self.emit(ScreenEvent::Notice(Notice { severity, message }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_reach_every_subscriber() {
        let mut observers = Observers::default();
        let mut first = observers.subscribe();
        let mut second = observers.subscribe();
        observers.changed();
        assert_eq!(first.try_recv(), Ok(ScreenEvent::Changed));
        assert_eq!(second.try_recv(), Ok(ScreenEvent::Changed));
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let mut observers = Observers::default();
        let rx = observers.subscribe();
        drop(rx);
        observers.changed();
        assert!(observers.senders.is_empty());
    }
}
