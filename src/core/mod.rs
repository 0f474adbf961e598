//! Core invoice types, calculation, validation, and numbering.
//!
//! Everything here is synchronous and free of I/O.

mod builder;
pub mod defaults;
mod error;
mod form;
mod numbering;
mod totals;
mod types;
mod validation;
pub mod wire;

pub use builder::*;
pub use defaults::*;
pub use error::*;
pub use form::*;
pub use numbering::*;
pub use totals::*;
pub use types::*;
pub use validation::*;
