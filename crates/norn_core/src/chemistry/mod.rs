//! Chemical species, reaction kinetics and the per-tick biochemistry registry.

pub mod chemical;
pub mod emitter;
pub mod reaction;

pub use chemical::Chemical;
pub use emitter::{Emitter, ANALOG_CEILING};
pub use reaction::{Reaction, Stoich};

use crate::config::ChemistryConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Name of the chemical every injection additionally doses ("needles hurt").
pub const PAIN_CHEMICAL: &str = "Pain";

/// Ordered registry of chemicals and reactions; drives the per-tick update.
///
/// Chemicals live in an owned arena; reactions and emitters reference them by
/// stable ordinal (the insertion index). Name and id hash indexes keep the
/// first registration under each key, preserving first-match lookup
/// semantics for duplicates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Biochemistry {
    chems: Vec<Chemical>,
    reactions: Vec<Reaction>,
    by_name: HashMap<String, usize>,
    by_id: HashMap<String, usize>,
    tick: u64,
    pain_reflex_dose: f64,
}

impl Default for Biochemistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Biochemistry {
    /// Empty registry with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&ChemistryConfig::default())
    }

    /// Empty registry with the given configuration.
    #[must_use]
    pub fn with_config(config: &ChemistryConfig) -> Self {
        Self {
            chems: Vec::new(),
            reactions: Vec::new(),
            by_name: HashMap::new(),
            by_id: HashMap::new(),
            tick: 0,
            pain_reflex_dose: config.pain_reflex_dose,
        }
    }

    /// Registry pre-loaded with the default roster and reactions.
    #[must_use]
    pub fn new_default() -> Self {
        Self::default_with_config(&ChemistryConfig::default())
    }

    /// Registry pre-loaded with the default roster and reactions.
    ///
    /// Ordinal 0 is the inert `NONE` sentinel; ordinals 1..=12 are the drive
    /// chemicals the coupling layer wires to drive lobes, in lobe order.
    #[must_use]
    pub fn default_with_config(config: &ChemistryConfig) -> Self {
        let mut biochem = Self::with_config(config);

        biochem.create_new_chem("NONE", "000", 0.0, 0.0);
        let pain = biochem.create_new_chem("Pain", "001", 0.0, 2.2);
        biochem.create_new_chem("Comfort", "002", 0.0, 5.0);
        biochem.create_new_chem("Hunger", "003", 0.0, 8.0);
        biochem.create_new_chem("Temperature", "004", 0.0, 4.0);
        biochem.create_new_chem("Fatigue", "005", 0.0, 6.0);
        biochem.create_new_chem("Drowsiness", "006", 0.0, 6.0);
        biochem.create_new_chem("Loneliness", "007", 0.0, 5.0);
        biochem.create_new_chem("Crowdedness", "008", 0.0, 5.0);
        biochem.create_new_chem("Fear", "009", 0.0, 3.0);
        biochem.create_new_chem("Boredom", "010", 0.0, 9.0);
        biochem.create_new_chem("Anger", "011", 0.0, 3.0);
        biochem.create_new_chem("Arousal", "012", 0.0, 4.0);
        let endorphin = biochem.create_new_chem("Endorphin", "013", 0.0, 3.0);
        let reward = biochem.create_new_chem("Reward", "014", 0.0, 10.0);

        // Pain relief is rewarding.
        biochem.create_new_reaction(
            [Stoich::new(1.0, endorphin), Stoich::new(1.0, pain)],
            [Stoich::new(1.0, reward), Stoich::NONE],
            0.3,
        );

        biochem
    }

    /// Appends a chemical and returns its stable ordinal.
    pub fn create_new_chem(&mut self, name: &str, id: &str, amount: f64, half_life: f64) -> usize {
        let ordinal = self.chems.len();
        self.chems.push(Chemical::new(name, id, amount, half_life));
        self.by_name.entry(name.to_lowercase()).or_insert(ordinal);
        self.by_id.entry(id.to_lowercase()).or_insert(ordinal);
        ordinal
    }

    /// Appends a reaction.
    ///
    /// Participant slots referencing the `NONE` sentinel chemical are
    /// normalized to the inert slot, so "0 * NONE" participants are truly
    /// untouched by kinetics.
    pub fn create_new_reaction(
        &mut self,
        reactants: [Stoich; 2],
        products: [Stoich; 2],
        rate: f64,
    ) {
        let chems = &self.chems;
        let normalize = |slot: Stoich| -> Stoich {
            match slot.chem {
                Some(idx) if chems[idx].name.eq_ignore_ascii_case("none") => Stoich::NONE,
                _ => slot,
            }
        };
        let reaction = Reaction {
            reactants: [normalize(reactants[0]), normalize(reactants[1])],
            products: [normalize(products[0]), normalize(products[1])],
            rate,
        };
        self.reactions.push(reaction);
    }

    /// Runs one tick: every reaction in registration order, then decay of
    /// every chemical in registration order. This ordering is a hard
    /// invariant; the driver calls it exactly once per simulation tick.
    pub fn update(&mut self) {
        for reaction in &self.reactions {
            reaction.update(&mut self.chems);
        }
        for chem in &mut self.chems {
            chem.decay();
        }
        self.tick += 1;
        tracing::trace!(tick = self.tick, "Biochemistry tick");
    }

    /// Case-insensitive exact-name lookup, first match in registration order.
    #[must_use]
    pub fn get_chem_by_name(&self, name: &str) -> Option<&Chemical> {
        self.chem_index_by_name(name).map(|i| &self.chems[i])
    }

    /// Case-insensitive id lookup, first match in registration order.
    #[must_use]
    pub fn get_chem_by_id(&self, id: &str) -> Option<&Chemical> {
        self.by_id.get(&id.to_lowercase()).map(|&i| &self.chems[i])
    }

    /// Positional access by stable ordinal.
    ///
    /// Out-of-range ordinals are a programmer error: callers must only use
    /// ordinals obtained from registration. Panics on violation.
    #[must_use]
    pub fn get_chem_by_index(&self, index: usize) -> &Chemical {
        &self.chems[index]
    }

    /// Ordinal of the first chemical registered under a name, if any.
    #[must_use]
    pub fn chem_index_by_name(&self, name: &str) -> Option<usize> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Doses the named chemical; unknown names are a logged no-op.
    ///
    /// Every injection additionally doses the pain chemical by the
    /// configured reflex amount. Needles hurt.
    pub fn inject_chem(&mut self, name: &str, dose: f64) {
        match self.chem_index_by_name(name) {
            Some(idx) => {
                self.chems[idx].increment_amount(dose);
                tracing::debug!(chem = name, dose, "Injection");
            }
            None => {
                tracing::warn!(chem = name, "Injection target not registered");
            }
        }
        if let Some(pain) = self.chem_index_by_name(PAIN_CHEMICAL) {
            self.chems[pain].increment_amount(self.pain_reflex_dose);
        }
    }

    /// Mutable view of the chemical arena, for emitters and couplings.
    pub fn chemicals_mut(&mut self) -> &mut [Chemical] {
        &mut self.chems
    }

    /// Read-only view of the chemical arena.
    #[must_use]
    pub fn chemicals(&self) -> &[Chemical] {
        &self.chems
    }

    /// Number of registered chemicals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chems.len()
    }

    /// Whether no chemicals are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chems.is_empty()
    }

    /// Number of registered reactions.
    #[must_use]
    pub fn reaction_count(&self) -> usize {
        self.reactions.len()
    }

    /// Ticks elapsed since construction.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }
}
