use super::{GenePool, GenomeError, MutationOutcome};
use crate::config::MutationConfig;
use norn_data::{Gene, Genome};
use rand::Rng;

/// Runs one mutation sweep over every gene in deterministic key order.
///
/// Per gene a single uniform draw `r` is taken and the FIRST matching rule
/// applies, so at most one mutation kind fires per gene per sweep:
///
/// 1. mutable && r < mutation_chance       -> point mutation
/// 2. duplicatable && r < duplication_chance -> duplication
/// 3. cuttable && r < cut_chance            -> cut
///
/// Genes inserted by duplication during the sweep are not themselves
/// checked until the next sweep.
pub fn mutate_check_with_config<R: Rng>(
    genome: &mut Genome,
    pool: &GenePool,
    config: &MutationConfig,
    rng: &mut R,
) -> MutationOutcome {
    let keys: Vec<String> = genome.genes.keys().cloned().collect();
    let mut outcome = MutationOutcome::default();
    let mut to_duplicate = Vec::new();
    let mut to_cut = Vec::new();

    for key in keys {
        let Some(gene) = genome.genes.get_mut(&key) else {
            continue;
        };
        let r: f64 = rng.gen();

        if gene.header.mutable && r < config.mutation_chance {
            if let Some(template) = pool.template_for(&key) {
                if !template.alleles.is_empty() {
                    gene.allele = template.alleles[rng.gen_range(0..template.alleles.len())].clone();
                }
            }
            outcome.points += 1;
        } else if gene.header.duplicatable && r < config.duplication_chance {
            to_duplicate.push(key);
        } else if gene.header.cuttable && r < config.cut_chance {
            to_cut.push(key);
        }
    }

    // Structural edits are deferred so the sweep sees a stable key set.
    for key in to_duplicate {
        if dup_mutate_gene(genome, &key).is_ok() {
            outcome.duplications += 1;
        }
    }
    for key in to_cut {
        if cut_mutate_gene(genome, &key).is_ok() {
            outcome.cuts += 1;
        }
    }

    if outcome.total() > 0 {
        tracing::debug!(
            points = outcome.points,
            duplications = outcome.duplications,
            cuts = outcome.cuts,
            "Genome mutated"
        );
    }
    outcome
}

/// Re-draws a gene's allele from its pool template.
///
/// Returns `Ok(true)` when a re-draw happened, `Ok(false)` when the gene has
/// no template in the pool (domain-less genes keep their allele).
pub fn point_mutate_gene<R: Rng>(
    genome: &mut Genome,
    key: &str,
    pool: &GenePool,
    rng: &mut R,
) -> Result<bool, GenomeError> {
    let gene = genome
        .genes
        .get_mut(key)
        .ok_or_else(|| GenomeError::UnknownGene(key.to_string()))?;
    if !gene.header.mutable {
        return Err(GenomeError::NotMutable(key.to_string()));
    }
    let Some(template) = pool.template_for(key) else {
        return Ok(false);
    };
    if template.alleles.is_empty() {
        return Ok(false);
    }
    gene.allele = template.alleles[rng.gen_range(0..template.alleles.len())].clone();
    Ok(true)
}

/// Inserts a deep copy of a gene under the first free `-<n>` suffixed key.
///
/// Returns the new key.
pub fn dup_mutate_gene(genome: &mut Genome, key: &str) -> Result<String, GenomeError> {
    let gene = genome
        .genes
        .get(key)
        .ok_or_else(|| GenomeError::UnknownGene(key.to_string()))?;
    if !gene.header.duplicatable {
        return Err(GenomeError::NotDuplicatable(key.to_string()));
    }
    let copy = gene.clone();
    let new_key = next_free_key(genome, key);
    genome.genes.insert(new_key.clone(), copy);
    Ok(new_key)
}

/// Removes a gene; only legal for cuttable genes. Returns the cut gene.
pub fn cut_mutate_gene(genome: &mut Genome, key: &str) -> Result<Gene, GenomeError> {
    let gene = genome
        .genes
        .remove(key)
        .ok_or_else(|| GenomeError::UnknownGene(key.to_string()))?;
    if !gene.header.cuttable {
        genome.genes.insert(key.to_string(), gene);
        return Err(GenomeError::NotCuttable(key.to_string()));
    }
    Ok(gene)
}

fn next_free_key(genome: &Genome, base: &str) -> String {
    let mut n = 1;
    loop {
        let candidate = format!("{base}-{n}");
        if !genome.genes.contains_key(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
