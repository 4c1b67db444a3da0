//! Emission failures.
//!
//! Every failure is surfaced directly to the caller of the operation that
//! triggered it. The library performs no recovery, no retry, and no
//! aggregation of multiple receiver failures into one report.

use thiserror::Error;

use crate::value::Kind;

/// Boxed error returned by a failing receiver.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error raised while emitting an event.
///
/// [`Event::emit`](crate::Event::emit) can only produce the
/// [`Receiver`](EmitError::Receiver) variant; the contract checks belong to
/// [`TypedEvent::emit`](crate::TypedEvent::emit).
#[derive(Debug, Error)]
pub enum EmitError {
    /// The emitted argument count does not match the declared arity.
    #[error("expected {expected} argument(s), got {actual}")]
    Arity { expected: usize, actual: usize },

    /// An emitted argument does not satisfy the declared kind at its
    /// position. Reports the first offending position.
    #[error("argument {position}: expected {expected}, got {actual}")]
    TypeMismatch {
        position: usize,
        expected: Kind,
        actual: Kind,
    },

    /// A receiver failed during fan-out. Receivers after it in the dispatch
    /// order of that pass were not invoked.
    #[error("receiver {index} failed during emit")]
    Receiver {
        index: usize,
        #[source]
        source: BoxError,
    },
}
