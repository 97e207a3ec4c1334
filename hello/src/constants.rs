//! Constants for hello-ext
//!
//! Centralized location for all compiled-in strings and defaults.

/// Fixed strings returned by the native artifacts.
pub mod messages {
    /// Returned by [`crate::greet`].
    pub const GREETING: &str = "hello, world";

    /// Returned by [`crate::Hello::hi`].
    pub const HI: &str = "hi there";
}

pub mod envs {
    /// Logging filter used when none is passed explicitly.
    pub const HELLO_EXT_LOG: &str = "HELLO_EXT_LOG";
}

pub mod logging {
    /// Filter applied when neither an explicit filter nor the env var is set.
    pub const DEFAULT_FILTER: &str = "warn";
}
