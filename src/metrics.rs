//! Simulated host metrics
//!
//! Five independent values evolve as a bounded random walk. Percentages are
//! pinned to their bounds when a step would leave them; transfer rates only
//! have a floor.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Lower/upper bounds for CPU usage
pub const CPU_BOUNDS: (f64, f64) = (5.0, 98.0);
/// Lower/upper bounds for memory usage
pub const MEM_BOUNDS: (f64, f64) = (10.0, 99.0);
/// Lower/upper bounds for disk usage
pub const DISK_BOUNDS: (f64, f64) = (5.0, 99.0);
/// Minimum download rate (KB/s)
pub const DOWNLOAD_FLOOR: f64 = 0.1;
/// Minimum upload rate (KB/s)
pub const UPLOAD_FLOOR: f64 = 0.05;

/// Half-widths of the per-tick perturbation
pub const CPU_SPREAD: f64 = 0.9;
pub const MEM_SPREAD: f64 = 0.6;
pub const DISK_SPREAD: f64 = 0.5;
pub const DOWNLOAD_SPREAD: f64 = 0.1;
pub const UPLOAD_SPREAD: f64 = 0.06;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn next_unit(&mut self) -> f64 {
        self()
    }
}

/// [`RandomSource`] backed by a `rand` generator
#[derive(Clone, Debug)]
pub struct RngSource<R = StdRng>(R);

impl RngSource<StdRng> {
    /// Seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, entropy otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Symmetric perturbation of half-width `spread` around `value`
pub fn jitter(value: f64, spread: f64, unit: f64) -> f64 {
    value + (unit - 0.5) * spread * 2.0
}

/// Pin `value` into `[min, max]`
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    max.min(min.max(value))
}

/// Current simulated readings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricsState {
    /// CPU usage percentage
    pub cpu: f64,
    /// Memory usage percentage
    pub mem: f64,
    /// Disk usage percentage
    pub disk: f64,
    /// Download rate in KB/s
    pub download_rate: f64,
    /// Upload rate in KB/s
    pub upload_rate: f64,
}

impl MetricsState {
    pub const SEED: MetricsState = MetricsState {
        cpu: 47.1,
        mem: 91.8,
        disk: 90.4,
        download_rate: 2.25,
        upload_rate: 1.28,
    };

    /// Next state, drawing one value per field in field order
    pub fn step<S: RandomSource + ?Sized>(&self, source: &mut S) -> MetricsState {
        MetricsState {
            cpu: clamp(
                jitter(self.cpu, CPU_SPREAD, source.next_unit()),
                CPU_BOUNDS.0,
                CPU_BOUNDS.1,
            ),
            mem: clamp(
                jitter(self.mem, MEM_SPREAD, source.next_unit()),
                MEM_BOUNDS.0,
                MEM_BOUNDS.1,
            ),
            disk: clamp(
                jitter(self.disk, DISK_SPREAD, source.next_unit()),
                DISK_BOUNDS.0,
                DISK_BOUNDS.1,
            ),
            download_rate: DOWNLOAD_FLOOR.max(jitter(
                self.download_rate,
                DOWNLOAD_SPREAD,
                source.next_unit(),
            )),
            upload_rate: UPLOAD_FLOOR.max(jitter(
                self.upload_rate,
                UPLOAD_SPREAD,
                source.next_unit(),
            )),
        }
    }
}

impl Default for MetricsState {
    fn default() -> Self {
        Self::SEED
    }
}

/// Owns the metrics state and the randomness that drives it
pub struct MetricsSimulator<S: RandomSource = RngSource> {
    state: MetricsState,
    source: S,
    ticks: u64,
}

impl<S: RandomSource> MetricsSimulator<S> {
    /// Start from [`MetricsState::SEED`]
    pub fn new(source: S) -> Self {
        Self::with_state(MetricsState::SEED, source)
    }

    pub fn with_state(state: MetricsState, source: S) -> Self {
        Self {
            state,
            source,
            ticks: 0,
        }
    }

    /// Apply one jitter step to every field
    pub fn tick(&mut self) -> MetricsState {
        self.state = self.state.step(&mut self.source);
        self.ticks += 1;
        log::trace!("metrics tick {}: {:?}", self.ticks, self.state);
        self.state
    }

    pub fn state(&self) -> &MetricsState {
        &self.state
    }

    /// Number of ticks applied so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}
