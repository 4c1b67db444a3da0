//! Ordered receiver registry with synchronous fan-out.
//!
//! This module provides [`Event`], the untyped core of the library. An event
//! owns an ordered registry of [`Receiver`] handles; [`emit`](Event::emit)
//! invokes every connected receiver in registration order, in the calling
//! thread, passing the arguments through unchanged.
//!
//! # Receiver Identity
//!
//! A receiver is an `Arc`'d callable. Identity is pointer identity
//! ([`Arc::ptr_eq`]): the handle returned by [`Event::receiver`] is both the
//! thing you connect and the thing you later pass to
//! [`disconnect`](Event::disconnect). Connecting the same handle twice has
//! no additional effect.
//!
//! # Failure
//!
//! The first receiver to fail aborts the pass: its error propagates to the
//! emit caller as [`EmitError::Receiver`] and receivers after it (in
//! registration order) are not invoked. A later emit attempts all connected
//! receivers again, including the one that failed.
//!
//! # Thread Safety
//!
//! `Event` itself is not thread-safe. All operations take `&mut self`, which
//! also statically rules out a receiver mutating the registry of the event
//! that is currently emitting. Callers sharing an event across threads wrap
//! it in their own lock.
//!
//! # Example
//!
//! ```rust
//! use signals::{Event, Value};
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut event = Event::new();
//! let receiver = Event::receiver(move |args: &[Value]| {
//!     sink.lock().unwrap().extend_from_slice(args);
//!     Ok(())
//! });
//!
//! event.connect(&receiver);
//! event.emit(&[Value::from("Bye"), Value::from(9.0)]).unwrap();
//!
//! assert_eq!(
//!     seen.lock().unwrap().as_slice(),
//!     &[Value::Str("Bye".into()), Value::Float(9.0)],
//! );
//! ```

use std::sync::{Arc, Weak};

use log::trace;

use crate::error::{BoxError, EmitError};
use crate::value::Value;

/// The uniform calling convention all receivers share.
pub type ReceiverFn = dyn Fn(&[Value]) -> Result<(), BoxError> + Send + Sync;

/// A connectable callback handle. Clones share identity.
pub type Receiver = Arc<ReceiverFn>;

/// A registry entry. Strong slots keep their receiver alive; weak slots are
/// pruned once the caller drops the last strong handle.
enum Slot {
    Strong(Receiver),
    Weak(Weak<ReceiverFn>),
}

impl Slot {
    /// Returns a callable handle, or `None` for a dead weak slot.
    fn upgrade(&self) -> Option<Receiver> {
        match self {
            Slot::Strong(receiver) => Some(Arc::clone(receiver)),
            Slot::Weak(weak) => weak.upgrade(),
        }
    }

    fn is_live(&self) -> bool {
        match self {
            Slot::Strong(_) => true,
            Slot::Weak(weak) => weak.strong_count() > 0,
        }
    }

    /// Pointer-identity match against a handle. Dead weak slots match
    /// nothing.
    fn refers_to(&self, receiver: &Receiver) -> bool {
        match self.upgrade() {
            Some(held) => Arc::ptr_eq(&held, receiver),
            None => false,
        }
    }
}

/// An ordered registry of receivers with synchronous, in-order fan-out.
///
/// Created empty; mutated only by [`connect`](Self::connect) /
/// [`connect_weak`](Self::connect_weak) / [`disconnect`](Self::disconnect) /
/// [`clear`](Self::clear). Each instance is independent, locally owned
/// state; there is no global registry.
#[derive(Default)]
pub struct Event {
    /// Registration order is invocation order.
    slots: Vec<Slot>,
}

impl Event {
    /// Creates an empty event.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Wraps a closure into a connectable [`Receiver`] handle.
    ///
    /// Keep the handle if you intend to [`disconnect`](Self::disconnect)
    /// later; it is the receiver's identity.
    ///
    /// ```rust,ignore
    /// let receiver = Event::receiver(|args| {
    ///     println!("{args:?}");
    ///     Ok(())
    /// });
    /// ```
    pub fn receiver<F>(f: F) -> Receiver
    where
        F: Fn(&[Value]) -> Result<(), BoxError> + Send + Sync + 'static,
    {
        Arc::new(f)
    }

    /// Connects a receiver, appending it to the registry.
    ///
    /// Idempotent: if the handle is already registered (strongly or
    /// weakly), nothing changes and its position is kept.
    pub fn connect(&mut self, receiver: &Receiver) {
        if self.position(receiver).is_some() {
            return;
        }
        self.slots.push(Slot::Strong(Arc::clone(receiver)));
        trace!("connected receiver ({} registered)", self.slots.len());
    }

    /// Connects a receiver without keeping it alive.
    ///
    /// The registration lapses once the caller drops the last strong handle;
    /// the dead slot is pruned on the next [`emit`](Self::emit). Same
    /// idempotence rule as [`connect`](Self::connect).
    pub fn connect_weak(&mut self, receiver: &Receiver) {
        if self.position(receiver).is_some() {
            return;
        }
        self.slots.push(Slot::Weak(Arc::downgrade(receiver)));
        trace!("connected weak receiver ({} registered)", self.slots.len());
    }

    /// Removes a receiver if present. A no-op, not an error, if the handle
    /// was never connected or already removed.
    pub fn disconnect(&mut self, receiver: &Receiver) {
        let before = self.slots.len();
        self.slots.retain(|slot| !slot.refers_to(receiver));
        if self.slots.len() != before {
            trace!("disconnected receiver ({} registered)", self.slots.len());
        }
    }

    /// Removes every registration.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_live()).count()
    }

    /// Returns `true` if no live receiver is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invokes every connected receiver, in registration order, with `args`.
    ///
    /// Dead weak slots are pruned first. The first receiver error aborts the
    /// pass and is returned as [`EmitError::Receiver`]; with zero receivers
    /// this is a successful no-op.
    pub fn emit(&mut self, args: &[Value]) -> Result<(), EmitError> {
        let pass = self.snapshot();
        trace!("emitting {} arg(s) to {} receiver(s)", args.len(), pass.len());
        dispatch(&pass, args)
    }

    /// Prunes dead weak slots and returns the live receivers in order.
    pub(crate) fn snapshot(&mut self) -> Vec<Receiver> {
        self.slots.retain(Slot::is_live);
        self.slots.iter().filter_map(Slot::upgrade).collect()
    }

    fn position(&self, receiver: &Receiver) -> Option<usize> {
        self.slots.iter().position(|slot| slot.refers_to(receiver))
    }
}

/// Fan-out over an already-snapshotted receiver list. Shared with the
/// deferred queue, which dispatches snapshots taken at enqueue time.
pub(crate) fn dispatch(receivers: &[Receiver], args: &[Value]) -> Result<(), EmitError> {
    for (index, receiver) in receivers.iter().enumerate() {
        receiver.as_ref()(args).map_err(|source| EmitError::Receiver { index, source })?;
    }
    Ok(())
}
