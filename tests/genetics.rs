use norn_lib::config::MutationConfig;
use norn_lib::genetics::{GenePool, GeneTemplate, GenomeError, GenomeLogic};
use norn_data::{Gender, Gene, GeneHeader, GeneKind, Genome, LifeStage};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

fn header(duplicatable: bool, mutable: bool, cuttable: bool) -> GeneHeader {
    GeneHeader {
        duplicatable,
        mutable,
        cuttable,
        gender: Gender::Both,
        kind: GeneKind::Pigment,
        stage: LifeStage::Child,
        desc: None,
    }
}

fn single_gene_genome(name: &str, hdr: GeneHeader, allele: &str) -> Genome {
    let mut genome = Genome::new(Uuid::from_u128(1));
    genome.genes.insert(
        name.to_string(),
        Gene {
            header: hdr,
            allele: allele.to_string(),
        },
    );
    genome
}

fn pool_for(name: &str, hdr: GeneHeader, alleles: &[&str]) -> GenePool {
    GenePool {
        templates: vec![GeneTemplate {
            name: name.to_string(),
            header: hdr,
            alleles: alleles.iter().map(|a| (*a).to_string()).collect(),
        }],
    }
}

fn spec_chances() -> MutationConfig {
    MutationConfig {
        mutation_chance: 0.1,
        duplication_chance: 0.05,
        cut_chance: 0.01,
        crossover_bias: 0.5,
    }
}

/// A fully-flagged gene point-mutates on ~10% of checks, and point mutation
/// strictly shadows duplication and cut whenever both thresholds are met.
#[test]
fn test_mutate_check_rates_and_precedence() {
    let hdr = header(true, true, true);
    let pool = pool_for("CoatPigment", hdr.clone(), &["brown", "grey", "white"]);
    let config = spec_chances();
    let base = single_gene_genome("CoatPigment", hdr, "brown");

    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut points = 0usize;
    let mut duplications = 0usize;
    let mut cuts = 0usize;
    const TRIALS: usize = 10_000;

    for _ in 0..TRIALS {
        let mut genome = base.clone();
        let outcome = genome.mutate_check(&pool, &config, &mut rng);
        points += outcome.points;
        duplications += outcome.duplications;
        cuts += outcome.cuts;
    }

    let rate = points as f64 / TRIALS as f64;
    assert!(
        (rate - 0.1).abs() <= 0.015,
        "point mutation rate {rate} outside 10% +- 1.5%"
    );
    // With duplication and cut thresholds below the mutation threshold, the
    // point rule always wins the single draw.
    assert_eq!(duplications, 0);
    assert_eq!(cuts, 0);
}

#[test]
fn test_mutate_check_duplication_rate_without_point() {
    let hdr = header(true, false, false);
    let pool = pool_for("CoatPigment", hdr.clone(), &["brown", "grey"]);
    let config = spec_chances();
    let base = single_gene_genome("CoatPigment", hdr, "brown");

    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut duplications = 0usize;
    const TRIALS: usize = 10_000;
    for _ in 0..TRIALS {
        let mut genome = base.clone();
        duplications += genome.mutate_check(&pool, &config, &mut rng).duplications;
    }

    let rate = duplications as f64 / TRIALS as f64;
    assert!(
        (rate - 0.05).abs() <= 0.01,
        "duplication rate {rate} outside 5% +- 1%"
    );
}

#[test]
fn test_mutate_check_cut_rate_without_point_or_dup() {
    let hdr = header(false, false, true);
    let pool = pool_for("StartleStimulus", hdr.clone(), &["fear:1.0"]);
    let config = spec_chances();
    let base = single_gene_genome("StartleStimulus", hdr, "fear:1.0");

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut cuts = 0usize;
    const TRIALS: usize = 10_000;
    for _ in 0..TRIALS {
        let mut genome = base.clone();
        cuts += genome.mutate_check(&pool, &config, &mut rng).cuts;
    }

    let rate = cuts as f64 / TRIALS as f64;
    assert!((rate - 0.01).abs() <= 0.005, "cut rate {rate} outside 1% +- 0.5%");
}

/// Crossover of two single-gene genomes under the same key yields one gene
/// whose allele comes whole from one parent - never a blend.
#[test]
fn test_cross_single_shared_key() {
    let hdr = header(false, false, false);
    let g1 = single_gene_genome("AnimalType", hdr.clone(), "cow");
    let g2 = single_gene_genome("AnimalType", hdr, "mouse");
    let pool = GenePool::default();
    let config = MutationConfig {
        mutation_chance: 0.0,
        duplication_chance: 0.0,
        cut_chance: 0.0,
        crossover_bias: 0.5,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..50 {
        let child = g1.cross_with_rng(&g2, &pool, &config, &mut rng);
        assert_eq!(child.len(), 1);
        let allele = &child.get_gene("AnimalType").expect("missing gene").allele;
        assert!(allele == "cow" || allele == "mouse", "blended allele {allele}");
    }
}

#[test]
fn test_cross_unions_disjoint_keys() {
    let hdr = header(false, false, false);
    let g1 = single_gene_genome("AnimalType", hdr.clone(), "cow");
    let g2 = single_gene_genome("CoatPigment", hdr, "grey");
    let pool = GenePool::default();
    let config = MutationConfig {
        mutation_chance: 0.0,
        duplication_chance: 0.0,
        cut_chance: 0.0,
        crossover_bias: 0.5,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let child = g1.cross_with_rng(&g2, &pool, &config, &mut rng);
    assert_eq!(child.len(), 2);
    assert_eq!(child.get_gene("AnimalType").unwrap().allele, "cow");
    assert_eq!(child.get_gene("CoatPigment").unwrap().allele, "grey");
}

#[test]
fn test_cross_bias_selects_first_parent() {
    let hdr = header(false, false, false);
    let g1 = single_gene_genome("AnimalType", hdr.clone(), "cow");
    let g2 = single_gene_genome("AnimalType", hdr, "mouse");
    let pool = GenePool::default();
    let config = MutationConfig {
        mutation_chance: 0.0,
        duplication_chance: 0.0,
        cut_chance: 0.0,
        crossover_bias: 1.0,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..20 {
        let child = g1.cross_with_rng(&g2, &pool, &config, &mut rng);
        assert_eq!(child.get_gene("AnimalType").unwrap().allele, "cow");
    }
}

/// The child is mutation-checked after assembly: with a certain cut chance
/// every cuttable gene is gone from the returned genome.
#[test]
fn test_cross_mutates_after_assembly() {
    let hdr = header(false, false, true);
    let g1 = single_gene_genome("StartleStimulus", hdr.clone(), "fear:1.0");
    let g2 = single_gene_genome("StartleStimulus", hdr, "fear:2.5");
    let pool = GenePool::default();
    let config = MutationConfig {
        mutation_chance: 0.0,
        duplication_chance: 0.0,
        cut_chance: 1.0,
        crossover_bias: 0.5,
    };

    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let child = g1.cross_with_rng(&g2, &pool, &config, &mut rng);
    assert!(child.is_empty());
}

#[test]
fn test_dup_mutate_suffixes_colliding_keys() {
    let hdr = header(true, false, false);
    let mut genome = single_gene_genome("CoatPigment", hdr, "brown");

    let first = genome.dup_mutate("CoatPigment").expect("dup failed");
    let second = genome.dup_mutate("CoatPigment").expect("dup failed");

    assert_eq!(first, "CoatPigment-1");
    assert_eq!(second, "CoatPigment-2");
    assert_eq!(genome.len(), 3);
    assert_eq!(genome.get_gene("CoatPigment-2").unwrap().allele, "brown");
}

#[test]
fn test_explicit_mutations_respect_header_flags() {
    let hdr = header(false, false, false);
    let mut genome = single_gene_genome("AnimalType", hdr.clone(), "cow");
    let pool = pool_for("AnimalType", hdr, &["cow", "mouse"]);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    assert_eq!(
        genome.point_mutate("AnimalType", &pool, &mut rng),
        Err(GenomeError::NotMutable("AnimalType".into()))
    );
    assert_eq!(
        genome.dup_mutate("AnimalType"),
        Err(GenomeError::NotDuplicatable("AnimalType".into()))
    );
    assert_eq!(
        genome.cut_mutate("AnimalType"),
        Err(GenomeError::NotCuttable("AnimalType".into()))
    );
    // The failed cut left the gene in place.
    assert!(genome.get_gene("AnimalType").is_some());

    assert_eq!(
        genome.cut_mutate("NoSuchGene"),
        Err(GenomeError::UnknownGene("NoSuchGene".into()))
    );
}

#[test]
fn test_point_mutate_redraws_from_template_domain() {
    let hdr = header(false, true, false);
    let mut genome = single_gene_genome("CoatPigment", hdr.clone(), "brown");
    let pool = pool_for("CoatPigment", hdr, &["ginger"]);
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    let changed = genome
        .point_mutate("CoatPigment", &pool, &mut rng)
        .expect("point mutation failed");
    assert!(changed);
    assert_eq!(genome.get_gene("CoatPigment").unwrap().allele, "ginger");
}

#[test]
fn test_child_hex_roundtrip() {
    let pool = GenePool::creatures_default();
    let config = MutationConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    let p1 = Genome::new_random_with_rng(&pool, &mut rng);
    let p2 = Genome::new_random_with_rng(&pool, &mut rng);
    let child = p1.cross_with_rng(&p2, &pool, &config, &mut rng);

    let hex = child.to_hex();
    let recovered = Genome::from_hex(&hex).expect("failed to recover child from hex");
    assert_eq!(recovered, child);
}
