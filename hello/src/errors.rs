//! Error types for hello-ext.
//!
//! [`crate::greet`] and [`crate::Hello::hi`] cannot fail; errors only come
//! from setting up the logging layer.

use thiserror::Error;

pub type HelloResult<T> = Result<T, HelloError>;

#[derive(Debug, Error)]
pub enum HelloError {
    /// Invalid user-supplied configuration (e.g. a bad filter directive).
    #[error("config: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            HelloError::Config("bad directive".into()).to_string(),
            "config: bad directive"
        );
    }
}
