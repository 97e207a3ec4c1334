#![allow(unsafe_op_in_unsafe_fn, non_local_definitions)]

mod greeting;
mod logging;
mod util;

use crate::greeting::{PyHello, greet};
use crate::logging::init_logging;
use pyo3::prelude::*;

#[pymodule(name = "hello_ext")]
fn hello_ext_python(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(greet, m)?)?;
    m.add_class::<PyHello>()?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
