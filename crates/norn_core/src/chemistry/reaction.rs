use super::chemical::Chemical;
use serde::{Deserialize, Serialize};

/// One stoichiometric participant slot of a reaction.
///
/// `chem` is the ordinal of the chemical in the registry arena. `None` is the
/// inert slot: it never constrains extent and is never consumed or produced.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct Stoich {
    /// Units consumed or produced per unit of reaction extent.
    pub ratio: f64,
    /// Chemical ordinal, or `None` for the inert slot.
    pub chem: Option<usize>,
}

impl Stoich {
    /// The inert participant slot.
    pub const NONE: Stoich = Stoich {
        ratio: 0.0,
        chem: None,
    };

    #[must_use]
    pub fn new(ratio: f64, chem: usize) -> Self {
        Self {
            ratio,
            chem: Some(chem),
        }
    }
}

/// A stoichiometric rule consuming up to two reactants into up to two
/// products, throttled by a fractional rate.
///
/// Structurally immutable after registration; read every tick.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Reaction {
    pub reactants: [Stoich; 2],
    pub products: [Stoich; 2],
    /// Fraction of the limiting availability converted per tick, in [0, 1].
    pub rate: f64,
}

impl Reaction {
    /// Realized extent for the current arena state.
    ///
    /// `rate * min(amount_i / ratio_i)` over non-inert reactants: the rate
    /// caps throughput to a fraction of the limiting scaled availability, so
    /// a reaction never exhausts a reactant in a single tick. Degenerate
    /// configurations (non-positive rate, a reactant ratio of zero) yield
    /// zero extent rather than an error. A reaction with no reactants is a
    /// pure source with extent equal to its rate.
    #[must_use]
    pub fn extent(&self, chems: &[Chemical]) -> f64 {
        if !(self.rate > 0.0) {
            return 0.0;
        }
        let rate = self.rate.min(1.0);

        let mut limit = f64::INFINITY;
        let mut has_reactant = false;
        for slot in &self.reactants {
            let Some(idx) = slot.chem else { continue };
            has_reactant = true;
            if !(slot.ratio > 0.0) {
                return 0.0;
            }
            let available = chems[idx].amount / slot.ratio;
            if !available.is_finite() {
                return 0.0;
            }
            limit = limit.min(available);
        }

        if !has_reactant {
            return rate;
        }
        (rate * limit).max(0.0)
    }

    /// Computes this tick's extent and applies it to the arena.
    ///
    /// Consumption is bounded so no reactant goes negative; products only
    /// ever increase. Inert slots are untouched.
    pub fn update(&self, chems: &mut [Chemical]) {
        let extent = self.extent(chems);
        if extent <= 0.0 {
            return;
        }
        for slot in &self.reactants {
            if let Some(idx) = slot.chem {
                chems[idx].increment_amount(-extent * slot.ratio);
            }
        }
        for slot in &self.products {
            if let Some(idx) = slot.chem {
                if slot.ratio > 0.0 {
                    chems[idx].increment_amount(extent * slot.ratio);
                }
            }
        }
    }
}
