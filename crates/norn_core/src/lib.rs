//! # Norn Core
//!
//! The biochemistry and genetics engine for Norn - a Creatures-style
//! artificial-life simulation core.
//!
//! This crate contains the deterministic engine logic, including:
//! - Chemical species with exponential decay
//! - Stoichiometric reactions with bounded per-tick throughput
//! - The per-tick biochemistry registry and its update ordering
//! - Emitters bridging external signals into chemical doses
//! - Genome construction, mutation and crossover
//! - Metrics collection and structured logging
//!
//! ## Architecture
//!
//! The engine is single-threaded and tick-driven: the external driver calls
//! [`chemistry::Biochemistry::update`] exactly once per simulation tick,
//! which runs every reaction in registration order and then decays every
//! chemical in registration order. Genomes are built at organism birth and
//! mutated only between generations, never mid-tick. All randomness flows
//! through caller-supplied RNGs for reproducible runs.
//!
//! ## Example
//!
//! ```
//! use norn_core::chemistry::Biochemistry;
//! use norn_core::genetics::{GenePool, GenomeLogic};
//! use norn_data::Genome;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // Drive the default chemistry for a tick.
//! let mut biochem = Biochemistry::new_default();
//! biochem.inject_chem("Hunger", 4.0);
//! biochem.update();
//! assert!(biochem.get_chem_by_name("hunger").unwrap().amount > 0.0);
//!
//! // Hatch a genome from the default pool.
//! let pool = GenePool::creatures_default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let genome = Genome::new_random_with_rng(&pool, &mut rng);
//! assert!(genome.get_gene("AnimalType").is_some());
//! ```

/// Chemical species, reactions, emitters and the per-tick registry
pub mod chemistry;
/// Configuration management for engine parameters
pub mod config;
/// Genome construction, mutation and crossover
pub mod genetics;
/// Run metrics collection and logging
pub mod metrics;

pub use chemistry::{Biochemistry, Chemical, Emitter, Reaction, Stoich};
pub use config::AppConfig;
pub use genetics::{GenePool, GeneTemplate, GenomeError, GenomeLogic, MutationOutcome};
pub use metrics::{init_logging, Metrics};
pub use norn_data::{Gender, Gene, GeneHeader, GeneKind, Genome, LifeStage};
