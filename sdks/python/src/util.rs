use hello_ext::HelloError;
use pyo3::{exceptions::PyValueError, prelude::*};

pub(crate) fn map_err(err: HelloError) -> PyErr {
    match err {
        HelloError::Config(_) => PyValueError::new_err(err.to_string()),
    }
}
