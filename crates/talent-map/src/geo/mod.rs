//! Location resolution: free-text locations to approximate coordinates.

pub mod resolver;

pub use resolver::{known_aliases, resolve_location, ResolvedLocation};
