//! The two native artifacts: a free function and a stateless type.

use crate::constants::messages;

/// Returns the fixed greeting `"hello, world"`.
pub fn greet() -> &'static str {
    tracing::trace!("greet called");
    messages::GREETING
}

/// A type with no state and a single method.
///
/// Instances are interchangeable; creating or dropping one has no
/// observable effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Hello;

impl Hello {
    pub fn new() -> Self {
        Self
    }

    /// Returns the fixed reply `"hi there"`.
    pub fn hi(&self) -> &'static str {
        tracing::trace!("Hello::hi called");
        messages::HI
    }
}
