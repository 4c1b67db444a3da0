//! Deferred emission.
//!
//! [`EventQueue`] decouples the decision to emit from the moment receivers
//! run: [`enqueue`](EventQueue::enqueue) records a pending emission and
//! [`execute`](EventQueue::execute) dispatches pending emissions later,
//! oldest first, in the calling thread.
//!
//! The receiver list is snapshotted at enqueue time: receivers connected
//! after an emission was queued do not see it, and disconnecting before
//! execution does not un-deliver it.

use std::collections::VecDeque;

use log::debug;

use crate::error::EmitError;
use crate::event::{self, Event, Receiver};
use crate::typed::TypedEvent;
use crate::value::Value;

/// A queued emission: the arguments plus the receivers that were connected
/// when it was enqueued.
struct Pending {
    receivers: Vec<Receiver>,
    args: Vec<Value>,
}

/// A FIFO queue of pending emissions across any number of events.
///
/// # Example
///
/// ```rust,ignore
/// let mut queue = EventQueue::new();
/// queue.enqueue(&mut event, vec![Value::from(1)]);
/// queue.enqueue(&mut event, vec![Value::from(2)]);
///
/// // Nothing has run yet.
/// queue.execute_all()?;
/// ```
#[derive(Default)]
pub struct EventQueue {
    queue: VecDeque<Pending>,
}

impl EventQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Queues an emission of `args` to the receivers currently connected to
    /// `event`. Dead weak slots are pruned as part of taking the snapshot.
    pub fn enqueue(&mut self, event: &mut Event, args: Vec<Value>) {
        let receivers = event.snapshot();
        self.queue.push_back(Pending { receivers, args });
    }

    /// Queues an emission on a typed event, validating `args` against its
    /// signature first. Validation failures surface here and leave the
    /// queue untouched.
    pub fn enqueue_typed(&mut self, event: &mut TypedEvent, args: Vec<Value>) -> Result<(), EmitError> {
        event.check(&args)?;
        let receivers = event.inner_mut().snapshot();
        self.queue.push_back(Pending { receivers, args });
        Ok(())
    }

    /// Dispatches up to `count` pending emissions, oldest first, stopping
    /// early if the queue drains.
    ///
    /// A receiver failure aborts the current emission and this call; the
    /// failed emission is consumed, emissions queued after it stay pending.
    pub fn execute(&mut self, count: usize) -> Result<(), EmitError> {
        for _ in 0..count {
            let Some(pending) = self.queue.pop_front() else {
                return Ok(());
            };
            debug!(
                "executing queued emission ({} receiver(s), {} left)",
                pending.receivers.len(),
                self.queue.len(),
            );
            event::dispatch(&pending.receivers, &pending.args)?;
        }
        Ok(())
    }

    /// Dispatches everything currently pending.
    pub fn execute_all(&mut self) -> Result<(), EmitError> {
        let count = self.queue.len();
        self.execute(count)
    }

    /// Number of pending emissions.
    #[inline]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if nothing is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::value::Kind;

    fn recording() -> (Receiver, Arc<Mutex<Vec<Vec<Value>>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&log);
        let receiver = Event::receiver(move |args| {
            sink.lock().unwrap().push(args.to_vec());
            Ok(())
        });
        (receiver, log)
    }

    // ==================== Queuing ====================

    #[test]
    fn enqueue_defers_delivery() {
        let mut event = Event::new();
        let mut queue = EventQueue::new();
        let (receiver, log) = recording();
        event.connect(&receiver);

        queue.enqueue(&mut event, vec![Value::Int(1)]);

        assert!(log.lock().unwrap().is_empty());
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn execute_all_dispatches_fifo() {
        let mut event = Event::new();
        let mut queue = EventQueue::new();
        let (receiver, log) = recording();
        event.connect(&receiver);

        queue.enqueue(&mut event, vec![Value::Int(1)]);
        queue.enqueue(&mut event, vec![Value::Int(2)]);
        queue.enqueue(&mut event, vec![Value::Int(3)]);
        queue.execute_all().unwrap();

        assert_eq!(
            log.lock().unwrap().as_slice(),
            &[vec![Value::Int(1)], vec![Value::Int(2)], vec![Value::Int(3)]],
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn execute_dispatches_at_most_count() {
        let mut event = Event::new();
        let mut queue = EventQueue::new();
        let (receiver, log) = recording();
        event.connect(&receiver);

        queue.enqueue(&mut event, vec![Value::Int(1)]);
        queue.enqueue(&mut event, vec![Value::Int(2)]);
        queue.execute(1).unwrap();

        assert_eq!(log.lock().unwrap().len(), 1);
        assert_eq!(queue.pending(), 1);
    }

    #[test]
    fn execute_beyond_pending_stops_early() {
        let mut event = Event::new();
        let mut queue = EventQueue::new();
        let (receiver, log) = recording();
        event.connect(&receiver);

        queue.enqueue(&mut event, vec![Value::Int(1)]);
        queue.execute(10).unwrap();

        assert_eq!(log.lock().unwrap().len(), 1);
        assert!(queue.is_empty());
    }

    // ==================== Snapshot Semantics ====================

    #[test]
    fn late_connect_misses_queued_emission() {
        let mut event = Event::new();
        let mut queue = EventQueue::new();
        let (late, late_log) = recording();

        queue.enqueue(&mut event, vec![Value::Int(1)]);
        event.connect(&late);
        queue.execute_all().unwrap();

        assert!(late_log.lock().unwrap().is_empty());
    }

    #[test]
    fn disconnect_after_enqueue_still_delivers() {
        let mut event = Event::new();
        let mut queue = EventQueue::new();
        let (receiver, log) = recording();
        event.connect(&receiver);

        queue.enqueue(&mut event, vec![Value::Int(1)]);
        event.disconnect(&receiver);
        queue.execute_all().unwrap();

        assert_eq!(log.lock().unwrap().len(), 1);
    }

    // ==================== Typed Queuing ====================

    #[test]
    fn enqueue_typed_validates_before_queuing() {
        let mut event = TypedEvent::new([Kind::Str, Kind::Float]);
        let mut queue = EventQueue::new();

        let err = queue
            .enqueue_typed(&mut event, vec![Value::from("Bye")])
            .unwrap_err();

        assert!(matches!(err, EmitError::Arity { expected: 2, actual: 1 }));
        assert!(queue.is_empty());
    }

    #[test]
    fn enqueue_typed_delivers_on_execute() {
        let mut event = TypedEvent::new([Kind::Str, Kind::Float]);
        let mut queue = EventQueue::new();
        let (receiver, log) = recording();
        event.connect(&receiver);

        queue
            .enqueue_typed(&mut event, vec![Value::from("Bye"), Value::from(9.0)])
            .unwrap();
        queue.execute_all().unwrap();

        assert_eq!(
            log.lock().unwrap().as_slice(),
            &[vec![Value::Str("Bye".into()), Value::Float(9.0)]],
        );
    }

    // ==================== Failure ====================

    #[test]
    fn receiver_failure_keeps_later_emissions_pending() {
        let mut event = Event::new();
        let mut queue = EventQueue::new();
        let (receiver, log) = recording();
        let bad = Event::receiver(|_| Err("boom".into()));
        event.connect(&bad);

        queue.enqueue(&mut event, vec![Value::Int(1)]);
        event.disconnect(&bad);
        event.connect(&receiver);
        queue.enqueue(&mut event, vec![Value::Int(2)]);

        let err = queue.execute_all().unwrap_err();
        assert!(matches!(err, EmitError::Receiver { index: 0, .. }));

        // The failed emission is consumed, the healthy one remains.
        assert_eq!(queue.pending(), 1);
        queue.execute_all().unwrap();
        assert_eq!(log.lock().unwrap().as_slice(), &[vec![Value::Int(2)]]);
    }

    #[test]
    fn execute_on_empty_queue_is_noop() {
        let mut queue = EventQueue::new();
        assert!(queue.execute(5).is_ok());
        assert!(queue.execute_all().is_ok());
    }
}
