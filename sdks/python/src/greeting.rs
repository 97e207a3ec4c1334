use hello_ext::Hello;
use pyo3::prelude::*;

/// Return the fixed greeting "hello, world".
#[pyfunction]
pub(crate) fn greet() -> &'static str {
    hello_ext::greet()
}

#[pyclass(name = "Hello", frozen, eq, hash)]
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub(crate) struct PyHello {
    inner: Hello,
}

#[pymethods]
impl PyHello {
    #[new]
    fn new() -> Self {
        Self {
            inner: Hello::new(),
        }
    }

    /// Return the fixed reply "hi there".
    fn hi(&self) -> &'static str {
        self.inner.hi()
    }

    fn __repr__(&self) -> String {
        "Hello()".to_string()
    }
}
