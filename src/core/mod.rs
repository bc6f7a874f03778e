//! Invoice model, totals calculation, validation, and lifecycle.
//!
//! The validator and calculator are pure functions over an [`Invoice`]
//! value; the form's working copy is owned by the caller and passed in.

mod builder;
mod calculation;
mod config;
mod error;
mod numbering;
mod record;
mod stats;
mod types;
mod validation;

pub use builder::*;
pub use calculation::*;
pub use config::*;
pub use error::*;
pub use numbering::*;
pub use record::*;
pub use stats::*;
pub use types::*;
pub use validation::*;
