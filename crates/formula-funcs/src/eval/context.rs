use std::sync::{Arc, Mutex, MutexGuard};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::date::ExcelDateSystem;
use crate::eval::CellAddr;
use crate::locale::ValueLocaleConfig;

/// Workbook-level settings that influence coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationSettings {
    pub value_locale: ValueLocaleConfig,
    pub date_system: ExcelDateSystem,
}

/// The generator behind `RAND` / `RANDBETWEEN`.
///
/// Cloning shares the underlying stream. Every draw holds the lock for the duration of a single
/// `u64`, so cells evaluated on different worker threads never observe the same draw.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Arc<Mutex<StdRng>>,
}

impl RandomSource {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Restart the shared stream from `seed`. Hosts call this at the start of a full
    /// recalculation to make a pass reproducible.
    pub fn reseed(&self, seed: u64) {
        log::trace!("reseeding worksheet random source (seed={seed})");
        *self.lock() = StdRng::seed_from_u64(seed);
    }

    /// Restart the shared stream from OS entropy.
    pub fn reset(&self) {
        log::trace!("resetting worksheet random source from entropy");
        *self.lock() = StdRng::from_entropy();
    }

    pub fn next_u64(&self) -> u64 {
        self.lock().gen()
    }

    /// Uniform draw in `[0, 1)` built from the top 53 bits of one `u64`.
    pub fn next_f64(&self) -> f64 {
        let bits = self.next_u64() >> 11;
        (bits as f64) / ((1u64 << 53) as f64)
    }

    /// Unbiased uniform integer in `[0, span)`.
    ///
    /// A plain `% span` is biased whenever `span` is not a power of two, so draws above the
    /// largest multiple of `span` are rejected.
    pub fn next_below(&self, span: u64) -> u64 {
        if span <= 1 {
            return 0;
        }
        let zone = (u64::MAX / span) * span;
        loop {
            let v = self.next_u64();
            if v < zone {
                return v % span;
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, StdRng> {
        // A panic while holding the lock cannot leave a `StdRng` half-updated.
        self.rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

/// Everything a function call may consult besides its arguments.
#[derive(Debug, Clone, Default)]
pub struct EvaluationContext {
    sheet: String,
    current_cell: CellAddr,
    settings: EvaluationSettings,
    random: RandomSource,
}

impl EvaluationContext {
    #[must_use]
    pub fn new(random: RandomSource) -> Self {
        Self {
            sheet: "Sheet1".to_string(),
            current_cell: CellAddr::default(),
            settings: EvaluationSettings::default(),
            random,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: EvaluationSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Scope the context to the cell whose formula is being evaluated. The random source stays
    /// shared with `self`.
    #[must_use]
    pub fn for_cell(&self, sheet: &str, cell: CellAddr) -> Self {
        Self {
            sheet: sheet.to_string(),
            current_cell: cell,
            settings: self.settings,
            random: self.random.clone(),
        }
    }

    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    pub fn current_cell(&self) -> CellAddr {
        self.current_cell
    }

    pub fn settings(&self) -> &EvaluationSettings {
        &self.settings
    }

    pub fn value_locale(&self) -> ValueLocaleConfig {
        self.settings.value_locale
    }

    pub fn date_system(&self) -> ExcelDateSystem {
        self.settings.date_system
    }

    pub fn random(&self) -> &RandomSource {
        &self.random
    }
}
