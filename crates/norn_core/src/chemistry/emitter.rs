use super::chemical::Chemical;
use serde::{Deserialize, Serialize};

/// Analog ceiling of the signal domain emitters read from.
pub const ANALOG_CEILING: f64 = 255.0;

/// Converts an external signal (brain-lobe activation, creature or
/// environment state) into a chemical dose, in analog or digital mode.
///
/// Stateless between reads except for the accumulator, which only matters
/// when `clear_after_reading` is set (event-count semantics).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Emitter {
    /// Whether the source organ is a brain lobe (vs. creature/world state).
    pub organ_is_brain: bool,
    /// Label of the source lobe or locus. Informational; the driver supplies
    /// the actual signal value each tick.
    pub tissue: String,
    /// Ordinal of the target chemical in the registry arena.
    pub chemical: usize,
    /// Digital mode doses a fixed gain on threshold crossing; analog mode
    /// doses proportionally to the excess over the threshold.
    pub is_digital: bool,
    /// Samples per tick; the emitter fires every `round(1/sample_rate)`
    /// ticks. Non-positive rates never fire.
    pub sample_rate: f64,
    pub gain: f64,
    pub threshold: f64,
    /// Event-count semantics: accumulate the source between samples and
    /// reset after each reading.
    pub clear_after_reading: bool,
    /// Substitute `255 - value` for the value before applying.
    pub invert_input: bool,
    /// Source reading carried between ticks.
    #[serde(skip)]
    pub accumulator: f64,
}

impl Emitter {
    /// Proportional emitter sampled every tick.
    #[must_use]
    pub fn analog(tissue: &str, chemical: usize, gain: f64, threshold: f64) -> Self {
        Self {
            organ_is_brain: true,
            tissue: tissue.to_string(),
            chemical,
            is_digital: false,
            sample_rate: 1.0,
            gain,
            threshold,
            clear_after_reading: false,
            invert_input: false,
            accumulator: 0.0,
        }
    }

    /// Fixed-dose emitter sampled every tick.
    #[must_use]
    pub fn digital(tissue: &str, chemical: usize, gain: f64, threshold: f64) -> Self {
        Self {
            is_digital: true,
            ..Self::analog(tissue, chemical, gain, threshold)
        }
    }

    /// Ticks between samples, or `None` when the emitter never fires.
    #[must_use]
    pub fn sample_period(&self) -> Option<u64> {
        if self.sample_rate <= 0.0 {
            return None;
        }
        Some(((1.0 / self.sample_rate).round() as u64).max(1))
    }

    /// Feeds one tick's source reading and, on sampled ticks, applies the
    /// resulting dose to the target chemical.
    pub fn step(&mut self, tick: u64, source: f64, chems: &mut [Chemical]) {
        if self.clear_after_reading {
            self.accumulator += source;
        } else {
            self.accumulator = source;
        }

        let Some(period) = self.sample_period() else {
            return;
        };
        if tick % period != 0 {
            return;
        }

        let mut value = self.accumulator;
        if self.invert_input {
            value = ANALOG_CEILING - value;
        }

        if self.is_digital {
            if value >= self.threshold {
                chems[self.chemical].increment_amount(self.gain);
            }
        } else {
            let dose = (value - self.threshold) * (self.gain / ANALOG_CEILING);
            chems[self.chemical].increment_amount(dose);
        }

        if self.clear_after_reading {
            self.accumulator = 0.0;
        }
    }
}
