//! Minimal in-process publish/subscribe.
//!
//! Callers register callbacks ("receivers") against an [`Event`] and later
//! emit it; emission synchronously invokes every connected receiver, in
//! registration order, with the supplied arguments. [`TypedEvent`] adds a
//! positional argument-type contract, declared once at construction and
//! checked on every emit. [`EventQueue`] defers emissions for later,
//! explicit dispatch.
//!
//! # Overview
//!
//! - **No global state**: every event is independent, locally owned state.
//! - **No internal locking**: all operations take `&mut self`; callers
//!   sharing an event across threads wrap it in their own lock.
//! - **No recovery**: the first receiver failure in a pass aborts it and
//!   propagates to the emit caller; failure policy belongs to the caller.
//!
//! # Example
//!
//! ```rust
//! use signals::{Event, Kind, TypedEvent, Value};
//! use std::sync::{Arc, Mutex};
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut farewell = TypedEvent::new([Kind::Str, Kind::Float]);
//! let receiver = Event::receiver(move |args: &[Value]| {
//!     sink.lock().unwrap().push(args.to_vec());
//!     Ok(())
//! });
//! farewell.connect(&receiver);
//!
//! farewell.emit(&[Value::from("Bye"), Value::from(9.0)]).unwrap();
//! assert_eq!(seen.lock().unwrap().len(), 1);
//!
//! // Wrong kind at position 1: rejected before any receiver runs.
//! assert!(farewell.emit(&[Value::from("Bye"), Value::from("nine")]).is_err());
//! ```

pub mod error;
pub mod event;
pub mod queue;
pub mod typed;
pub mod value;

pub use error::{BoxError, EmitError};
pub use event::{Event, Receiver, ReceiverFn};
pub use queue::EventQueue;
pub use typed::TypedEvent;
pub use value::{Kind, Value};
