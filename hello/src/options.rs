//! Configuration for hello-ext.

use crate::constants::logging;
use serde::{Deserialize, Serialize};

/// Options for installing the process-wide tracing subscriber.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingOptions {
    /// `EnvFilter` directive, e.g. `"hello_ext=trace"`.
    ///
    /// None falls back to `HELLO_EXT_LOG`, then to `"warn"`.
    #[serde(default)]
    pub filter: Option<String>,
}

impl LoggingOptions {
    pub fn new(filter: Option<String>) -> Self {
        Self { filter }
    }

    /// Resolve the directive to apply: explicit filter, then env value, then default.
    ///
    /// Blank values at either level count as unset.
    pub fn resolve_filter(&self, env_value: Option<&str>) -> String {
        non_blank(self.filter.as_deref())
            .or_else(|| non_blank(env_value))
            .unwrap_or(logging::DEFAULT_FILTER)
            .to_string()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
