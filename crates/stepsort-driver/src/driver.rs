//! Tick-paced driver.
//!
//! [`Driver`] is the user-facing API. It owns the configuration, the
//! seeded generator, and the current [`Run`]. Each
//! [`tick()`](Driver::tick) resumes the engine up to `steps_per_tick`
//! times and hands exactly one [`Frame`] to the renderer, so the
//! animation rate is set by the caller's tick rate and the step budget,
//! never by the algorithm.
//!
//! # Ownership model
//!
//! `Driver` is [`Send`] but meant to be used from one thread. All
//! mutating methods take `&mut self`, and [`frame()`](Driver::frame)
//! borrows from `self`, so a renderer can never observe the sequence
//! while an engine is mutating it.

use std::error::Error;
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stepsort_core::{
    Algorithm, EngineError, Frame, Metrics, Renderer, RunState, Sequence, StepEvent,
};

use crate::config::{
    validate_sequence_length, validate_steps_per_tick, ConfigError, DriverConfig, ValueRange,
};
use crate::generate::random_sequence;
use crate::run::Run;

// Compile-time assertion: Driver is Send.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Driver>();
    }
};

// ── DriverError ─────────────────────────────────────────────────

/// Errors from starting or ticking a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverError {
    /// [`Driver::start()`] was called while a run is still `Running`.
    RunActive,
    /// The engine could not be created for the current sequence.
    Engine(EngineError),
    /// The engine failed mid-run; the run is now `Aborted`.
    Aborted(EngineError),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RunActive => write!(f, "a run is already active"),
            Self::Engine(e) => write!(f, "engine: {e}"),
            Self::Aborted(e) => write!(f, "run aborted: {e}"),
        }
    }
}

impl Error for DriverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Engine(e) | Self::Aborted(e) => Some(e),
            Self::RunActive => None,
        }
    }
}

impl From<EngineError> for DriverError {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

// ── TickReport / RunSummary ─────────────────────────────────────

/// Outcome of one [`Driver::tick()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TickReport {
    /// Engine resumptions performed this tick.
    pub resumed: usize,
    /// Most recent event, this tick or earlier in the run.
    pub last_event: Option<StepEvent>,
    /// Run state after the tick.
    pub state: RunState,
    /// Counters after the tick.
    pub metrics: Metrics,
    /// Whether the renderer was called.
    pub rendered: bool,
}

/// Final accounting from [`Driver::run_to_completion()`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Algorithm that ran.
    pub algorithm: Algorithm,
    /// State when the loop stopped: `Finished`, or `Running` if the tick
    /// limit was hit first.
    pub state: RunState,
    /// Counters at the end.
    pub metrics: Metrics,
    /// Ticks spent.
    pub ticks: usize,
}

// ── Driver ──────────────────────────────────────────────────────

/// Paces one engine at a time and reports frames to a renderer.
///
/// # Example
///
/// ```
/// use stepsort_core::{Algorithm, NullRenderer, RunState};
/// use stepsort_driver::{Driver, DriverConfig};
///
/// let config = DriverConfig {
///     sequence_length: 16,
///     steps_per_tick: 8,
///     algorithm: Algorithm::Heap,
///     seed: 42,
///     ..DriverConfig::default()
/// };
/// let mut driver = Driver::new(config)?;
/// let summary = driver.run_to_completion(&mut NullRenderer, 10_000)?;
/// assert_eq!(summary.state, RunState::Finished);
/// assert!(driver.sequence().is_sorted());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Driver {
    config: DriverConfig,
    rng: ChaCha8Rng,
    run: Run,
}

impl Driver {
    /// Validate `config` and generate the first sequence.
    pub fn new(config: DriverConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let sequence = random_sequence(&mut rng, config.sequence_length, config.values);
        Ok(Self {
            config,
            rng,
            run: Run::new(sequence),
        })
    }

    /// Validate `config` and use `sequence` instead of a generated one.
    ///
    /// `config.sequence_length` is overwritten with the sequence length.
    /// Later resets generate fresh sequences as usual.
    pub fn with_sequence(mut config: DriverConfig, sequence: Sequence) -> Result<Self, ConfigError> {
        config.sequence_length = sequence.len();
        config.validate()?;
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            rng,
            run: Run::new(sequence),
        })
    }

    /// Start the configured algorithm over the current sequence.
    ///
    /// A run that finished or aborted may be restarted; the new run
    /// sorts whatever the sequence holds now.
    ///
    /// # Errors
    ///
    /// [`DriverError::RunActive`] if a run is still `Running`;
    /// [`DriverError::Engine`] if the algorithm rejects the sequence.
    pub fn start(&mut self) -> Result<(), DriverError> {
        if self.run.state() == RunState::Running {
            log::warn!(
                "start of {} rejected: {} run still active",
                self.config.algorithm,
                self.run.algorithm().map_or("unknown", Algorithm::name)
            );
            return Err(DriverError::RunActive);
        }
        let algorithm = self.config.algorithm;
        if let Err(e) = self.run.start(algorithm) {
            log::warn!("cannot start {algorithm}: {e}");
            return Err(e.into());
        }
        log::info!(
            "started {algorithm} over {} values",
            self.run.sequence().len()
        );
        Ok(())
    }

    /// Advance the active run by up to `steps_per_tick` resumptions and
    /// render one frame.
    ///
    /// With no run `Running`, returns a report with `rendered == false`
    /// and does not touch the renderer.
    ///
    /// # Errors
    ///
    /// [`DriverError::Aborted`] if the engine failed. The run is
    /// `Aborted` and the frame has already been rendered.
    pub fn tick(&mut self, renderer: &mut dyn Renderer) -> Result<TickReport, DriverError> {
        if self.run.state() != RunState::Running {
            return Ok(self.report(0, false));
        }

        let mut resumed = 0;
        let mut failure = None;
        for _ in 0..self.config.steps_per_tick {
            match self.run.pull() {
                Ok(Some(event)) => {
                    resumed += 1;
                    if event.is_done() {
                        break;
                    }
                }
                Ok(None) => {
                    // `Run` drops its engine only when it leaves `Running`.
                    debug_assert_ne!(self.run.state(), RunState::Running);
                    break;
                }
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        renderer.render(&self.run.frame());

        if let Some(e) = failure {
            log::error!("{} run aborted: {e}", self.run_algorithm());
            return Err(DriverError::Aborted(e));
        }
        if self.run.state() == RunState::Finished {
            let m = self.run.metrics();
            log::info!(
                "{} finished: {} comparisons, {} swaps, {} steps",
                self.run_algorithm(),
                m.comparisons,
                m.swaps,
                m.total_steps()
            );
        }
        Ok(self.report(resumed, true))
    }

    /// Tick until the run finishes or `max_ticks` ticks have passed.
    ///
    /// Starts a run first unless one is already `Running`.
    pub fn run_to_completion(
        &mut self,
        renderer: &mut dyn Renderer,
        max_ticks: usize,
    ) -> Result<RunSummary, DriverError> {
        if self.run.state() != RunState::Running {
            self.start()?;
        }
        let algorithm = self.run_algorithm();
        let mut ticks = 0;
        while ticks < max_ticks && self.run.state() == RunState::Running {
            self.tick(renderer)?;
            ticks += 1;
        }
        if self.run.state() == RunState::Running {
            log::debug!("{algorithm} still running after {ticks} ticks");
        }
        Ok(RunSummary {
            algorithm,
            state: self.run.state(),
            metrics: self.run.metrics(),
            ticks,
        })
    }

    /// Discard any run and draw a fresh sequence from the generator.
    pub fn reset(&mut self) {
        if self.run.cancel() {
            log::info!("reset cancelled active {} run", self.run_algorithm());
        }
        let sequence = random_sequence(
            &mut self.rng,
            self.config.sequence_length,
            self.config.values,
        );
        self.run = Run::new(sequence);
        log::debug!("reset: {} fresh values", self.config.sequence_length);
    }

    /// Reseed the generator, then [`reset()`](Driver::reset).
    pub fn reset_with_seed(&mut self, seed: u64) {
        self.config.seed = seed;
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.reset();
    }

    /// Discard the active run, keeping the sequence as it is.
    ///
    /// Returns whether a run was active.
    pub fn cancel(&mut self) -> bool {
        let active = self.run.cancel();
        if active {
            log::info!("{} run cancelled", self.run_algorithm());
        }
        active
    }

    /// Resumptions per tick, from the next tick on.
    pub fn set_steps_per_tick(&mut self, steps: usize) -> Result<(), ConfigError> {
        validate_steps_per_tick(steps)?;
        self.config.steps_per_tick = steps;
        Ok(())
    }

    /// Algorithm for the next [`start()`](Driver::start).
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.config.algorithm = algorithm;
    }

    /// [`set_algorithm`](Driver::set_algorithm) by display name or short
    /// identifier.
    pub fn select_algorithm(&mut self, name: &str) -> Result<Algorithm, ConfigError> {
        let algorithm = name.parse()?;
        self.config.algorithm = algorithm;
        Ok(algorithm)
    }

    /// Length of sequences generated from the next reset on.
    pub fn set_sequence_length(&mut self, len: usize) -> Result<(), ConfigError> {
        validate_sequence_length(len)?;
        self.config.sequence_length = len;
        Ok(())
    }

    /// Distribution of sequences generated from the next reset on.
    pub fn set_value_range(&mut self, values: ValueRange) -> Result<(), ConfigError> {
        values.validate()?;
        self.config.values = values;
        Ok(())
    }

    /// Snapshot of the current run for an out-of-band redraw.
    pub fn frame(&self) -> Frame<'_> {
        self.run.frame()
    }

    /// Current configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Values under sort.
    pub fn sequence(&self) -> &Sequence {
        self.run.sequence()
    }

    /// Counters of the current or most recent run.
    pub fn metrics(&self) -> Metrics {
        self.run.metrics()
    }

    /// Lifecycle state of the current run.
    pub fn state(&self) -> RunState {
        self.run.state()
    }

    /// Event from the most recent resumption.
    pub fn last_event(&self) -> Option<StepEvent> {
        self.run.last_event()
    }

    /// Seed the generator was last seeded with.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Algorithm bound at the last start, which may differ from the
    /// configured one after `set_algorithm`.
    fn run_algorithm(&self) -> Algorithm {
        self.run.algorithm().unwrap_or(self.config.algorithm)
    }

    fn report(&self, resumed: usize, rendered: bool) -> TickReport {
        TickReport {
            resumed,
            last_event: self.run.last_event(),
            state: self.run.state(),
            metrics: self.run.metrics(),
            rendered,
        }
    }

    #[cfg(test)]
    pub(crate) fn run_mut(&mut self) -> &mut Run {
        &mut self.run
    }
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("algorithm", &self.config.algorithm)
            .field("sequence_length", &self.run.sequence().len())
            .field("steps_per_tick", &self.config.steps_per_tick)
            .field("state", &self.run.state())
            .field("seed", &self.config.seed)
            .finish()
    }
}
