//! Provider registry.
//!
//! Built-in entries are compiled in and never mutated. User overrides and
//! custom providers live in an overlay merged at [`ProviderRegistry::resolve`].

mod builtin;
mod registry;
mod types;
pub mod url;

pub use builtin::builtin_providers;
pub use registry::ProviderRegistry;
pub use types::{Capabilities, Provider};
