//! Genome construction, mutation and crossover.

pub mod crossover;
pub mod mutation;

pub use norn_data::{Gender, Gene, GeneHeader, GeneKind, Genome, LifeStage};

use crate::config::MutationConfig;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors from the explicit single-gene mutation API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenomeError {
    /// No gene registered under the key.
    #[error("no gene named `{0}` in genome")]
    UnknownGene(String),

    /// Point mutation attempted on a gene whose header forbids it.
    #[error("gene `{0}` is not mutable")]
    NotMutable(String),

    /// Duplication attempted on a gene whose header forbids it.
    #[error("gene `{0}` is not duplicatable")]
    NotDuplicatable(String),

    /// Cut attempted on a gene whose header forbids it.
    #[error("gene `{0}` is not cuttable")]
    NotCuttable(String),
}

/// One candidate gene slot in a pool: the fixed header plus the allele
/// domain the engine draws from at construction and point mutation.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneTemplate {
    /// Genome key the gene is registered under.
    pub name: String,
    /// Header stamped onto every gene built from this template.
    pub header: GeneHeader,
    /// Candidate allele values.
    pub alleles: Vec<String>,
}

/// Caller-supplied candidate domains for genome construction.
///
/// The engine never hardcodes allele values: point mutation re-draws from
/// the template that originally produced the gene.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct GenePool {
    pub templates: Vec<GeneTemplate>,
}

impl GenePool {
    /// Template for a genome key.
    ///
    /// Duplicated genes carry a `-<n>` suffix; lookups fall back to the
    /// base name so duplicates keep their original allele domain.
    #[must_use]
    pub fn template_for(&self, key: &str) -> Option<&GeneTemplate> {
        if let Some(template) = self.templates.iter().find(|t| t.name == key) {
            return Some(template);
        }
        let (base, suffix) = key.rsplit_once('-')?;
        if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        self.template_for(base)
    }

    /// The default Creatures-style gene pool.
    ///
    /// Covers every gene kind, with mutation flags spread so random genomes
    /// exercise each mutation class. `AnimalType` is deliberately locked
    /// down: the body-builder keys its phenotype templates off it.
    #[must_use]
    pub fn creatures_default() -> Self {
        fn template(
            name: &str,
            kind: GeneKind,
            stage: LifeStage,
            gender: Gender,
            (duplicatable, mutable, cuttable): (bool, bool, bool),
            desc: Option<&str>,
            alleles: &[&str],
        ) -> GeneTemplate {
            GeneTemplate {
                name: name.to_string(),
                header: GeneHeader {
                    duplicatable,
                    mutable,
                    cuttable,
                    gender,
                    kind,
                    stage,
                    desc: desc.map(str::to_string),
                },
                alleles: alleles.iter().map(|a| (*a).to_string()).collect(),
            }
        }

        Self {
            templates: vec![
                template(
                    "AnimalType",
                    GeneKind::Genus,
                    LifeStage::Embryo,
                    Gender::Both,
                    (false, false, false),
                    Some("Species body-plan template"),
                    &["cow", "mouse", "pig", "bird"],
                ),
                template(
                    "BodyPattern",
                    GeneKind::Appearance,
                    LifeStage::Embryo,
                    Gender::Both,
                    (false, true, false),
                    None,
                    &["plain", "spotted", "striped", "banded"],
                ),
                template(
                    "CoatPigment",
                    GeneKind::Pigment,
                    LifeStage::Child,
                    Gender::Both,
                    (true, true, false),
                    None,
                    &["brown", "grey", "white", "ginger", "black"],
                ),
                template(
                    "FightOrFlight",
                    GeneKind::Instinct,
                    LifeStage::Child,
                    Gender::Both,
                    (false, true, false),
                    None,
                    &["fight", "flight", "freeze"],
                ),
                template(
                    "StartleStimulus",
                    GeneKind::Stimulus,
                    LifeStage::Child,
                    Gender::Both,
                    (false, true, true),
                    Some("Loud-noise event dosing"),
                    &["fear:1.0", "fear:2.5", "adrenaline:1.5"],
                ),
                template(
                    "PainReceptor",
                    GeneKind::Receptor,
                    LifeStage::Embryo,
                    Gender::Both,
                    (false, true, false),
                    None,
                    &["low", "medium", "high"],
                ),
                template(
                    "EndorphinEmitter",
                    GeneKind::Emitter,
                    LifeStage::Adolescent,
                    Gender::Both,
                    (false, true, true),
                    None,
                    &["weak", "strong"],
                ),
                template(
                    "PainReliefReaction",
                    GeneKind::Reaction,
                    LifeStage::Child,
                    Gender::Both,
                    (true, false, true),
                    None,
                    &["slow", "fast"],
                ),
                template(
                    "EndorphinHalfLife",
                    GeneKind::HalfLife,
                    LifeStage::Embryo,
                    Gender::Both,
                    (false, true, false),
                    None,
                    &["2.0", "3.0", "5.0"],
                ),
                template(
                    "MatingDisplay",
                    GeneKind::Instinct,
                    LifeStage::Adult,
                    Gender::Male,
                    (true, true, true),
                    None,
                    &["dance", "call", "strut"],
                ),
            ],
        }
    }
}

/// Tallies of what one `mutate_check` pass did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MutationOutcome {
    pub points: usize,
    pub duplications: usize,
    pub cuts: usize,
}

impl MutationOutcome {
    /// Total mutations applied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.points + self.duplications + self.cuts
    }
}

/// Trait defining the genetic interface for organism genomes.
pub trait GenomeLogic {
    fn new_random(pool: &GenePool) -> Self;
    fn new_random_with_rng<R: Rng>(pool: &GenePool, rng: &mut R) -> Self;

    /// One mutation sweep: per gene, at most one of point / duplicate / cut
    /// in strict precedence order.
    fn mutate_check<R: Rng>(
        &mut self,
        pool: &GenePool,
        config: &MutationConfig,
        rng: &mut R,
    ) -> MutationOutcome;

    /// Re-draws a single gene's allele from its pool template.
    fn point_mutate<R: Rng>(
        &mut self,
        key: &str,
        pool: &GenePool,
        rng: &mut R,
    ) -> Result<bool, GenomeError>;

    /// Inserts a deep copy of a gene under a suffixed key; returns the key.
    fn dup_mutate(&mut self, key: &str) -> Result<String, GenomeError>;

    /// Removes a gene; only legal for cuttable genes.
    fn cut_mutate(&mut self, key: &str) -> Result<Gene, GenomeError>;

    fn cross_with_rng<R: Rng>(
        &self,
        other: &Genome,
        pool: &GenePool,
        config: &MutationConfig,
        rng: &mut R,
    ) -> Genome;

    fn cross(&self, other: &Genome, pool: &GenePool, config: &MutationConfig) -> Genome;
}

impl GenomeLogic for Genome {
    fn new_random(pool: &GenePool) -> Self {
        let mut rng = rand::thread_rng();
        Self::new_random_with_rng(pool, &mut rng)
    }

    fn new_random_with_rng<R: Rng>(pool: &GenePool, rng: &mut R) -> Self {
        let mut genome = Genome::new(Uuid::from_u128(rng.gen()));
        for template in &pool.templates {
            if template.alleles.is_empty() {
                continue;
            }
            let allele = template.alleles[rng.gen_range(0..template.alleles.len())].clone();
            genome.genes.insert(
                template.name.clone(),
                Gene {
                    header: template.header.clone(),
                    allele,
                },
            );
        }
        genome
    }

    fn mutate_check<R: Rng>(
        &mut self,
        pool: &GenePool,
        config: &MutationConfig,
        rng: &mut R,
    ) -> MutationOutcome {
        mutation::mutate_check_with_config(self, pool, config, rng)
    }

    fn point_mutate<R: Rng>(
        &mut self,
        key: &str,
        pool: &GenePool,
        rng: &mut R,
    ) -> Result<bool, GenomeError> {
        mutation::point_mutate_gene(self, key, pool, rng)
    }

    fn dup_mutate(&mut self, key: &str) -> Result<String, GenomeError> {
        mutation::dup_mutate_gene(self, key)
    }

    fn cut_mutate(&mut self, key: &str) -> Result<Gene, GenomeError> {
        mutation::cut_mutate_gene(self, key)
    }

    fn cross_with_rng<R: Rng>(
        &self,
        other: &Genome,
        pool: &GenePool,
        config: &MutationConfig,
        rng: &mut R,
    ) -> Genome {
        crossover::cross_genomes_with_rng(self, other, pool, config, rng)
    }

    fn cross(&self, other: &Genome, pool: &GenePool, config: &MutationConfig) -> Genome {
        let mut rng = rand::thread_rng();
        self.cross_with_rng(other, pool, config, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_genome_covers_pool() {
        let pool = GenePool::creatures_default();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let genome = Genome::new_random_with_rng(&pool, &mut rng);

        assert_eq!(genome.len(), pool.templates.len());
        let animal = genome.get_gene("AnimalType").expect("missing AnimalType");
        assert!(["cow", "mouse", "pig", "bird"].contains(&animal.allele.as_str()));
    }

    #[test]
    fn test_template_for_falls_back_to_base_name() {
        let pool = GenePool::creatures_default();
        assert!(pool.template_for("CoatPigment").is_some());
        assert!(pool.template_for("CoatPigment-3").is_some());
        assert!(pool.template_for("CoatPigment-3-1").is_some());
        assert!(pool.template_for("NoSuchGene").is_none());
        assert!(pool.template_for("CoatPigment-x").is_none());
    }

    #[test]
    fn test_same_seed_builds_identical_genomes() {
        let pool = GenePool::creatures_default();
        let mut rng1 = ChaCha8Rng::seed_from_u64(7);
        let mut rng2 = ChaCha8Rng::seed_from_u64(7);
        let g1 = Genome::new_random_with_rng(&pool, &mut rng1);
        let g2 = Genome::new_random_with_rng(&pool, &mut rng2);
        assert_eq!(g1, g2);
    }
}
