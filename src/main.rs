use anyhow::{Context, Result};
use clap::Parser;
use norn_core::chemistry::{Biochemistry, Emitter};
use norn_core::config::AppConfig;
use norn_core::genetics::{GenePool, GenomeLogic};
use norn_core::metrics::{init_logging, Metrics};
use norn_data::Genome;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of simulation ticks to run
    #[arg(short, long, default_value_t = 200)]
    ticks: u64,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Chemical injections applied before the first tick, as NAME=DOSE
    #[arg(short, long)]
    inject: Vec<String>,

    /// Log chemical levels every N ticks (0 disables)
    #[arg(long, default_value_t = 50)]
    log_interval: u64,
}

fn parse_injection(entry: &str) -> Result<(String, f64)> {
    let (name, dose) = entry
        .split_once('=')
        .with_context(|| format!("injection `{entry}` is not NAME=DOSE"))?;
    let dose: f64 = dose
        .parse()
        .with_context(|| format!("injection dose `{dose}` is not a number"))?;
    Ok((name.to_string(), dose))
}

fn log_levels(biochem: &Biochemistry) {
    let level = |name: &str| biochem.get_chem_by_name(name).map_or(0.0, |c| c.amount);
    tracing::info!(
        tick = biochem.tick(),
        pain = level("Pain"),
        hunger = level("Hunger"),
        endorphin = level("Endorphin"),
        reward = level("Reward"),
        "Chemical levels"
    );
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let config = match std::fs::read_to_string(&args.config) {
        Ok(content) => AppConfig::from_toml(&content)
            .with_context(|| format!("invalid config file `{}`", args.config))?,
        Err(_) => {
            tracing::warn!(path = %args.config, "Config file not found, using defaults");
            AppConfig::default()
        }
    };

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    tracing::info!(seed, ticks = args.ticks, "Starting headless run");

    // Hatch a creature: cross two random parents from the default pool.
    let pool = GenePool::creatures_default();
    let parent_a = Genome::new_random_with_rng(&pool, &mut rng);
    let parent_b = Genome::new_random_with_rng(&pool, &mut rng);
    let child = parent_a.cross_with_rng(&parent_b, &pool, &config.mutation, &mut rng);
    let animal = child
        .get_gene("AnimalType")
        .map_or("unknown", |g| g.allele.as_str());
    tracing::info!(animal, genes = child.len(), lineage = %child.lineage_id, "Hatched genome");

    let mut biochem = Biochemistry::default_with_config(&config.chemistry);
    let metrics = Metrics::new();

    for entry in &args.inject {
        let (name, dose) = parse_injection(entry)?;
        biochem.inject_chem(&name, dose);
        metrics.increment_counter("injection");
    }

    // An analog emitter standing in for a hunger drive lobe.
    let hunger = biochem
        .chem_index_by_name("Hunger")
        .context("default roster is missing Hunger")?;
    let mut hunger_emitter = Emitter::analog("Hunger Lobe", hunger, 64.0, 8.0);

    for tick in 0..args.ticks {
        // Slow sawtooth standing in for a hunger drive signal.
        let signal = (tick % 96) as f64 * 2.0;

        let started = Instant::now();
        hunger_emitter.step(tick, signal, biochem.chemicals_mut());
        biochem.update();
        metrics.record_tick(started.elapsed(), biochem.len(), biochem.reaction_count());

        if args.log_interval > 0 && tick % args.log_interval == 0 {
            log_levels(&biochem);
        }
    }

    log_levels(&biochem);
    tracing::info!(
        ticks = metrics.tick_count(),
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "Run complete"
    );
    Ok(())
}
