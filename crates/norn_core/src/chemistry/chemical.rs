use serde::{Deserialize, Serialize};

/// A single named chemical concentration with exponential decay.
///
/// Amounts are never negative. A half-life of `0.0` is the "never decays"
/// sentinel used by the inert `NONE` chemical.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Chemical {
    /// Display name, the external join key for couplings and injections.
    pub name: String,
    /// Stable identifier string.
    pub id: String,
    /// Current concentration, >= 0.
    pub amount: f64,
    /// Ticks for the amount to halve absent production. 0 = never decays.
    pub half_life: f64,
}

impl Chemical {
    #[must_use]
    pub fn new(name: &str, id: &str, amount: f64, half_life: f64) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            amount: amount.max(0.0),
            half_life: half_life.max(0.0),
        }
    }

    /// Applies one tick of exponential decay.
    pub fn decay(&mut self) {
        if self.half_life == 0.0 {
            return;
        }
        let next = self.amount * 0.5f64.powf(1.0 / self.half_life);
        self.amount = if next.is_finite() { next.max(0.0) } else { 0.0 };
    }

    /// Adds a dose (possibly negative), clamping the result at zero.
    ///
    /// The single write path shared by reactions, emitters and external
    /// dosing. Non-finite doses are ignored rather than propagated.
    pub fn increment_amount(&mut self, dose: f64) {
        let next = self.amount + dose;
        if next.is_finite() {
            self.amount = next.max(0.0);
        }
    }
}
