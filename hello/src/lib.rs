//! hello-ext core
//!
//! Native artifacts exposed to Python by the `hello_ext` extension module:
//! the [`greet`] function and the [`Hello`] type. The language bindings live
//! in `sdks/`; this crate stays free of any interpreter dependency.

pub mod constants;
pub mod errors;
pub mod greeting;
pub mod options;
pub mod util;

pub use errors::{HelloError, HelloResult};
pub use greeting::{Hello, greet};
pub use options::LoggingOptions;
