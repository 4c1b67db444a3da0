//! Events with a declared argument-type contract.
//!
//! [`TypedEvent`] wraps an [`Event`] with an ordered [`Kind`] signature fixed
//! at construction. Every emit is validated against it before fan-out: first
//! the argument count against the arity, then each argument's kind against
//! its position. Validation failures never reach any receiver.
//!
//! Kind matching is exact identity; see [`crate::value`].
//!
//! # Example
//!
//! ```rust
//! use signals::{Event, Kind, TypedEvent, Value};
//!
//! let mut greeting = TypedEvent::new([Kind::Str, Kind::Float]);
//! greeting.connect(&Event::receiver(|_| Ok(())));
//!
//! assert!(greeting.emit(&[Value::from("Bye"), Value::from(9.0)]).is_ok());
//! assert!(greeting.emit(&[Value::from("Bye")]).is_err());
//! ```

use crate::error::EmitError;
use crate::event::{Event, Receiver};
use crate::value::{Kind, Value};

/// An [`Event`] that enforces a fixed positional argument-type contract on
/// every emission.
///
/// The signature length defines the arity; both are immutable for the
/// lifetime of the instance. Registry operations behave exactly as on the
/// inner [`Event`].
pub struct TypedEvent {
    event: Event,
    signature: Box<[Kind]>,
}

impl TypedEvent {
    /// Creates an event whose emit accepts exactly the given kinds, in
    /// order.
    pub fn new<I>(signature: I) -> Self
    where
        I: IntoIterator<Item = Kind>,
    {
        Self {
            event: Event::new(),
            signature: signature.into_iter().collect(),
        }
    }

    /// The declared kinds, in positional order.
    #[inline]
    pub fn signature(&self) -> &[Kind] {
        &self.signature
    }

    /// Number of positional arguments every emit must supply.
    #[inline]
    pub fn arity(&self) -> usize {
        self.signature.len()
    }

    /// See [`Event::connect`].
    pub fn connect(&mut self, receiver: &Receiver) {
        self.event.connect(receiver);
    }

    /// See [`Event::connect_weak`].
    pub fn connect_weak(&mut self, receiver: &Receiver) {
        self.event.connect_weak(receiver);
    }

    /// See [`Event::disconnect`].
    pub fn disconnect(&mut self, receiver: &Receiver) {
        self.event.disconnect(receiver);
    }

    /// See [`Event::clear`].
    pub fn clear(&mut self) {
        self.event.clear();
    }

    /// Number of live registrations.
    #[inline]
    pub fn len(&self) -> usize {
        self.event.len()
    }

    /// Returns `true` if no live receiver is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.event.is_empty()
    }

    /// Validates `args` against the signature, then fans out exactly like
    /// [`Event::emit`].
    ///
    /// Fails with [`EmitError::Arity`] on a count mismatch and
    /// [`EmitError::TypeMismatch`] on the first offending position.
    pub fn emit(&mut self, args: &[Value]) -> Result<(), EmitError> {
        self.check(args)?;
        self.event.emit(args)
    }

    /// The emit-time contract check, without fan-out.
    pub(crate) fn check(&self, args: &[Value]) -> Result<(), EmitError> {
        if args.len() != self.signature.len() {
            return Err(EmitError::Arity {
                expected: self.signature.len(),
                actual: args.len(),
            });
        }
        for (position, (value, expected)) in args.iter().zip(self.signature.iter()).enumerate() {
            if value.kind() != *expected {
                return Err(EmitError::TypeMismatch {
                    position,
                    expected: *expected,
                    actual: value.kind(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn inner_mut(&mut self) -> &mut Event {
        &mut self.event
    }
}
