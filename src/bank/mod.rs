//! Banking module: account rules, validation, the registry, and the menu console.
mod account;
mod menu;
mod registry;
mod types;
mod validate;

pub use account::*;
pub use menu::*;
pub use registry::*;
pub use types::*;
pub use validate::*;
