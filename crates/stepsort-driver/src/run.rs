//! The `Run` aggregate: one sequence, its engine, and its counters.

use stepsort_core::{Algorithm, EngineError, Frame, Metrics, RunState, Sequence, StepEvent};
use stepsort_engines::{create_engine, Engine};

/// Everything that changes while one algorithm sorts one sequence.
///
/// A `Run` is created `Idle` over a sequence. [`start()`](Run::start)
/// binds a fresh engine and zeroes the metrics; [`pull()`](Run::pull)
/// resumes that engine once. The engine is dropped as soon as the run
/// reaches a terminal state, so a finished run cannot be resumed by
/// accident.
#[derive(Debug)]
pub struct Run {
    sequence: Sequence,
    engine: Option<Engine>,
    /// Set by `start`; outlives the engine so finished and aborted runs
    /// still name what ran.
    algorithm: Option<Algorithm>,
    metrics: Metrics,
    state: RunState,
    last_event: Option<StepEvent>,
}

impl Run {
    /// An idle run over `sequence`.
    pub fn new(sequence: Sequence) -> Self {
        Self {
            sequence,
            engine: None,
            algorithm: None,
            metrics: Metrics::default(),
            state: RunState::Idle,
            last_event: None,
        }
    }

    /// Bind a new `algorithm` engine to the current sequence.
    ///
    /// Metrics and the last event are cleared. On error the run is left
    /// unchanged.
    pub fn start(&mut self, algorithm: Algorithm) -> Result<(), EngineError> {
        let engine = create_engine(algorithm, &self.sequence)?;
        self.engine = Some(engine);
        self.algorithm = Some(algorithm);
        self.metrics.reset();
        self.state = RunState::Running;
        self.last_event = None;
        Ok(())
    }

    /// Resume the engine once and count the step.
    ///
    /// Returns `Ok(None)` when there is no running engine. `Done` moves
    /// the run to `Finished`; an engine error moves it to `Aborted`.
    pub fn pull(&mut self) -> Result<Option<StepEvent>, EngineError> {
        let Some(engine) = self.engine.as_mut() else {
            return Ok(None);
        };
        match engine.resume(&mut self.sequence, &mut self.metrics) {
            Ok(event) => {
                self.metrics.steps += 1;
                self.last_event = Some(event);
                if event.is_done() {
                    self.engine = None;
                    self.state = RunState::Finished;
                }
                Ok(Some(event))
            }
            Err(e) => {
                self.engine = None;
                self.state = RunState::Aborted;
                Err(e)
            }
        }
    }

    /// Drop the engine and return to `Idle`, keeping sequence and
    /// metrics. Returns whether a run was active.
    pub fn cancel(&mut self) -> bool {
        let active = self.engine.take().is_some();
        if active {
            self.state = RunState::Idle;
        }
        active
    }

    /// Snapshot for a renderer.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            sequence: &self.sequence,
            metrics: self.metrics,
            last_event: self.last_event,
            state: self.state,
        }
    }

    /// Values under sort.
    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    /// Counters of the current or most recent run.
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Event from the most recent successful resumption.
    pub fn last_event(&self) -> Option<StepEvent> {
        self.last_event
    }

    /// Algorithm of the current or most recent run; `None` before the
    /// first start.
    pub fn algorithm(&self) -> Option<Algorithm> {
        self.algorithm
    }

    /// Consume the run, returning its sequence.
    pub fn into_sequence(self) -> Sequence {
        self.sequence
    }

    #[cfg(test)]
    pub(crate) fn replace_sequence_unchecked(&mut self, sequence: Sequence) {
        self.sequence = sequence;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pull_all(run: &mut Run) -> Vec<StepEvent> {
        let mut events = Vec::new();
        while let Some(event) = run.pull().unwrap() {
            events.push(event);
        }
        events
    }

    #[test]
    fn new_run_is_idle_and_pulls_nothing() {
        let mut run = Run::new(Sequence::from(vec![2.0, 1.0]));
        assert_eq!(run.state(), RunState::Idle);
        assert_eq!(run.algorithm(), None);
        assert_eq!(run.pull(), Ok(None));
        assert_eq!(run.metrics(), Metrics::default());
    }

    #[test]
    fn run_finishes_and_counts_every_pull() {
        let mut run = Run::new(Sequence::from(vec![5.0, 1.0, 4.0, 2.0, 8.0]));
        run.start(Algorithm::Bubble).unwrap();
        assert_eq!(run.state(), RunState::Running);
        assert_eq!(run.algorithm(), Some(Algorithm::Bubble));

        let events = pull_all(&mut run);
        assert_eq!(run.state(), RunState::Finished);
        assert_eq!(run.metrics().steps, events.len() as u64);
        assert_eq!(run.last_event(), Some(StepEvent::Done));
        assert_eq!(run.algorithm(), Some(Algorithm::Bubble));
        assert_eq!(run.sequence().as_slice(), &[1.0, 2.0, 4.0, 5.0, 8.0]);
    }

    #[test]
    fn restart_zeroes_metrics() {
        let mut run = Run::new(Sequence::from(vec![3.0, 2.0, 1.0]));
        run.start(Algorithm::Selection).unwrap();
        pull_all(&mut run);
        assert!(run.metrics().steps > 0);

        run.start(Algorithm::Selection).unwrap();
        assert_eq!(run.metrics(), Metrics::default());
        assert_eq!(run.last_event(), None);
        assert_eq!(run.state(), RunState::Running);
    }

    #[test]
    fn failed_start_leaves_run_untouched() {
        let mut run = Run::new(Sequence::from(vec![1.0, f64::NAN]));
        let err = run.start(Algorithm::Counting).unwrap_err();
        assert!(matches!(err, EngineError::PreconditionViolation { .. }));
        assert_eq!(run.state(), RunState::Idle);
    }

    #[test]
    fn engine_error_aborts_run() {
        let mut run = Run::new(Sequence::from(vec![3.0, 2.0, 1.0]));
        run.start(Algorithm::Insertion).unwrap();
        run.replace_sequence_unchecked(Sequence::from(vec![1.0]));
        let err = run.pull().unwrap_err();
        assert_eq!(
            err,
            EngineError::SequenceLengthChanged {
                expected: 3,
                actual: 1
            }
        );
        assert_eq!(run.state(), RunState::Aborted);
        assert_eq!(run.algorithm(), Some(Algorithm::Insertion));
        assert_eq!(run.pull(), Ok(None));
    }

    #[test]
    fn cancel_drops_engine_keeps_values() {
        let mut run = Run::new(Sequence::from(vec![3.0, 2.0, 1.0]));
        assert!(!run.cancel());
        run.start(Algorithm::Bubble).unwrap();
        run.pull().unwrap();
        run.pull().unwrap();
        assert!(run.cancel());
        assert_eq!(run.state(), RunState::Idle);
        assert_eq!(run.pull(), Ok(None));
        assert_eq!(run.into_sequence().as_slice(), &[2.0, 3.0, 1.0]);
    }

    #[test]
    fn frame_mirrors_run() {
        let mut run = Run::new(Sequence::from(vec![2.0, 1.0]));
        run.start(Algorithm::Bubble).unwrap();
        run.pull().unwrap();
        let frame = run.frame();
        assert_eq!(frame.state, RunState::Running);
        assert_eq!(frame.last_event, Some(StepEvent::compare(0, 1)));
        assert_eq!(frame.metrics.comparisons, 1);
        assert_eq!(frame.sequence.as_slice(), &[2.0, 1.0]);
    }
}
