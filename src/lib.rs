//! Norn - a Creatures-style biochemistry and genetics engine.
//!
//! Facade crate re-exporting the engine workspace members for the headless
//! driver binary and the integration test suites.

pub use norn_core::{chemistry, config, genetics, metrics};
pub use norn_data as data;
