use super::{mutation, GenePool};
use crate::config::MutationConfig;
use norn_data::Genome;
use rand::Rng;
use std::collections::BTreeSet;

/// Assembles a child genome from two parents.
///
/// Every key present in either parent appears exactly once in the child.
/// Keys carried by both parents pick one parent's gene whole — alleles are
/// never blended — with `crossover_bias` as the probability of taking the
/// first parent's copy. Keys carried by one parent copy unconditionally.
/// The child is mutation-checked after assembly; that ordering is part of
/// the contract.
pub fn cross_genomes_with_rng<R: Rng>(
    first: &Genome,
    second: &Genome,
    pool: &GenePool,
    config: &MutationConfig,
    rng: &mut R,
) -> Genome {
    let lineage_id = if rng.gen_bool(0.5) {
        first.lineage_id
    } else {
        second.lineage_id
    };
    let mut child = Genome::new(lineage_id);

    let keys: BTreeSet<&str> = first
        .genes
        .keys()
        .chain(second.genes.keys())
        .map(String::as_str)
        .collect();
    for key in keys {
        let gene = match (first.genes.get(key), second.genes.get(key)) {
            (Some(a), Some(b)) => {
                if rng.gen_bool(config.crossover_bias) {
                    a
                } else {
                    b
                }
            }
            (Some(a), None) => a,
            (None, Some(b)) => b,
            (None, None) => continue,
        };
        child.genes.insert(key.to_string(), gene.clone());
    }

    let outcome = mutation::mutate_check_with_config(&mut child, pool, config, rng);
    tracing::trace!(
        genes = child.len(),
        mutations = outcome.total(),
        "Crossover complete"
    );
    child
}
