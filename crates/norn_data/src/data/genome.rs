use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Which sex a gene is expressed in.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Expressed regardless of the organism's sex.
    Both,
    /// Expressed in males only.
    Male,
    /// Expressed in females only.
    Female,
}

/// Class of trait a gene encodes.
///
/// The engine never interprets these beyond carrying them; the body- and
/// brain-construction layers select genes by kind when building a phenotype.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GeneKind {
    /// Species body-plan template.
    Genus,
    /// Body appearance variant.
    Appearance,
    /// Coloration.
    Pigment,
    /// Inborn behavioral disposition.
    Instinct,
    /// Event-to-chemical stimulus mapping.
    Stimulus,
    /// Chemical-to-lobe receptor wiring.
    Receptor,
    /// Lobe-to-chemical emitter wiring.
    Emitter,
    /// Chemical reaction rule.
    Reaction,
    /// Chemical half-life override.
    HalfLife,
}

/// Earliest life stage at which a gene switches on.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LifeStage {
    Embryo,
    Child,
    Adolescent,
    Adult,
    Elder,
}

/// Immutable header of a gene record.
///
/// The header is fixed at gene creation; only the allele ever changes after
/// that. The three flags gate which mutation kinds may touch the gene.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GeneHeader {
    /// Whether duplication mutation may copy this gene.
    pub duplicatable: bool,
    /// Whether point mutation may rewrite the allele.
    pub mutable: bool,
    /// Whether cut mutation may remove this gene.
    pub cuttable: bool,
    /// Sex the gene is expressed in.
    pub gender: Gender,
    /// Trait class.
    pub kind: GeneKind,
    /// Stage at which the gene switches on.
    pub stage: LifeStage,
    /// Optional human-readable note.
    pub desc: Option<String>,
}

/// A single typed gene: immutable header plus a mutable allele string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Gene {
    /// Fixed header.
    pub header: GeneHeader,
    /// Current allele value, drawn from the gene's candidate domain.
    pub allele: String,
}

/// The full keyed gene collection of one organism.
///
/// Keys are unique gene names; iteration order is the deterministic key
/// order, which mutation and crossover rely on for reproducible runs.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Genome {
    /// Lineage identifier, inherited through crossover.
    pub lineage_id: Uuid,
    /// Gene records keyed by unique name.
    pub genes: BTreeMap<String, Gene>,
}

impl Genome {
    /// Creates an empty genome with the given lineage.
    #[must_use]
    pub fn new(lineage_id: Uuid) -> Self {
        Self {
            lineage_id,
            genes: BTreeMap::new(),
        }
    }

    /// Looks up a gene by name. Absence is a normal outcome, not an error.
    #[must_use]
    pub fn get_gene(&self, key: &str) -> Option<&Gene> {
        self.genes.get(key)
    }

    /// Number of genes carried.
    #[must_use]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the genome carries no genes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Serialize the genome to a hex DNA string.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        hex::encode(bytes)
    }

    /// Deserialize a genome from a hex DNA string.
    pub fn from_hex(hex_str: &str) -> anyhow::Result<Self> {
        let bytes = hex::decode(hex_str)?;
        let genome = serde_json::from_slice(&bytes)?;
        Ok(genome)
    }
}
