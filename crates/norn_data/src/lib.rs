//! Core data structures for the Norn biochemistry and genetics engine.

pub mod data;

pub use data::genome::{Gender, Gene, GeneHeader, GeneKind, Genome, LifeStage};
