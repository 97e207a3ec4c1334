use hello_ext::LoggingOptions;
use pyo3::prelude::*;

use crate::util::map_err;

/// Install the tracing subscriber for the extension.
///
/// Without `filter`, `HELLO_EXT_LOG` is consulted, then "warn".
/// Returns False if a subscriber was already installed.
#[pyfunction]
#[pyo3(signature = (filter=None))]
pub(crate) fn init_logging(filter: Option<String>) -> PyResult<bool> {
    let options = LoggingOptions::new(filter);
    hello_ext::util::init_logging(&options).map_err(map_err)
}
