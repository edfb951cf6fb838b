//! Menu module.
//!
//! Contains the pizza catalog and the size/crust options a row can take.

mod options;
mod pizza;

pub use options::{Crust, Selection, Size};
pub use pizza::{Catalog, Pizza};
