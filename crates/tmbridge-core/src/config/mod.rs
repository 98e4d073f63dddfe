//! Configuration handling

mod defaults;
mod env;
mod loader;
mod types;
mod validation;

pub use defaults::*;
pub use env::*;
pub use loader::*;
pub use types::*;
pub use validation::*;
