//! Parameter sweeps over a Twine model.
//!
//! A sweep evaluates a [`Model`] once per input, in order, and collects each
//! input/output pair as a [`Snapshot`]. It is how the cycle models are
//! driven across a range of compression ratios or boiler pressures for
//! reporting and plotting.
//!
//! # Observer Events
//!
//! The sweep emits one [`Event`] per input:
//!
//! - [`Event::Evaluated`]: the model call succeeded
//! - [`Event::ModelFailed`]: the model returned an error
//!
//! Observers can return [`Action::StopEarly`] to end the sweep with the
//! points collected so far, or [`Action::Skip`] to drop the current point.
//! Skipping a failed point lets the sweep continue past it; without an
//! action, a failed point ends the sweep with a [`SweepError`].
//!
//! # Example
//!
//! ```
//! use twine_cycles::models::cycles::otto::{OttoCycle, OttoInput};
//! use twine_cycles::support::sweep;
//!
//! let inputs = sweep::linspace(3.0, 12.0, 10)
//!     .map(|r| OttoInput::default().with_compression_ratio(r));
//!
//! let sweep = sweep::run_unobserved(&OttoCycle::air(), inputs).unwrap();
//! assert_eq!(sweep.points.len(), 10);
//! ```

mod action;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use error::SweepError;
pub use event::Event;
pub use solution::{Status, Sweep};

use twine_core::{Model, Observer, Snapshot};

/// Evaluates `model` at each input, reporting every evaluation to `observer`.
///
/// See the [module docs](self) for event timing and observer actions.
///
/// # Errors
///
/// Returns a [`SweepError`] for the first failed evaluation the observer
/// does not skip.
pub fn run<M, I, Obs>(
    model: &M,
    inputs: I,
    mut observer: Obs,
) -> Result<Sweep<M::Input, M::Output>, SweepError<M::Error>>
where
    M: Model,
    I: IntoIterator<Item = M::Input>,
    Obs: for<'a> Observer<Event<'a, M>, Action>,
{
    let mut points = Vec::new();
    let mut skipped = Vec::new();

    for (index, input) in inputs.into_iter().enumerate() {
        match model.call(&input) {
            Ok(output) => {
                let snapshot = Snapshot::new(input, output);
                let event = Event::Evaluated {
                    index,
                    input: &snapshot.input,
                    output: &snapshot.output,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        points.push(snapshot);
                        return Ok(Sweep::stopped(points, skipped));
                    }
                    Some(Action::Skip) => skipped.push(index),
                    None => points.push(snapshot),
                }
            }
            Err(error) => {
                let event = Event::ModelFailed {
                    index,
                    input: &input,
                    error: &error,
                };
                match observer.observe(&event) {
                    Some(Action::StopEarly) => {
                        skipped.push(index);
                        return Ok(Sweep::stopped(points, skipped));
                    }
                    Some(Action::Skip) => skipped.push(index),
                    None => return Err(SweepError::new(index, error)),
                }
            }
        }
    }

    Ok(Sweep::completed(points, skipped))
}

/// Evaluates `model` at each input without observer support.
///
/// This is a convenience wrapper around [`run`] that uses a no-op observer.
///
/// # Errors
///
/// Returns a [`SweepError`] for the first failed evaluation.
pub fn run_unobserved<M, I>(
    model: &M,
    inputs: I,
) -> Result<Sweep<M::Input, M::Output>, SweepError<M::Error>>
where
    M: Model,
    I: IntoIterator<Item = M::Input>,
{
    run(model, inputs, ())
}

/// Returns `n` evenly spaced values from `start` to `end`, inclusive.
///
/// Yields nothing for `n == 0` and only `start` for `n == 1`.
///
/// ```
/// use twine_cycles::support::sweep::linspace;
///
/// let r: Vec<f64> = linspace(3.0, 12.0, 4).collect();
/// assert_eq!(r, vec![3.0, 6.0, 9.0, 12.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> impl Iterator<Item = f64> {
    let step = if n > 1 {
        (end - start) / (n - 1) as f64
    } else {
        0.0
    };
    (0..n).map(move |i| {
        if i + 1 == n && n > 1 {
            end
        } else {
            start + step * i as f64
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use thiserror::Error;

    /// Squares its input, refusing negative values.
    struct Square;

    #[derive(Debug, Error)]
    #[error("negative input: {0}")]
    struct NegativeInput(f64);

    impl Model for Square {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn call(&self, input: &f64) -> Result<f64, NegativeInput> {
            if *input < 0.0 {
                return Err(NegativeInput(*input));
            }
            Ok(input * input)
        }
    }

    struct Identity;

    impl Model for Identity {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(*input)
        }
    }

    #[test]
    fn collects_every_point_in_order() {
        let sweep = run_unobserved(&Square, [1.0, 2.0, 3.0]).unwrap();

        assert_eq!(sweep.status, Status::Completed);
        assert!(sweep.skipped.is_empty());
        let outputs: Vec<f64> = sweep.points.iter().map(|s| s.output).collect();
        assert_eq!(outputs, vec![1.0, 4.0, 9.0]);
        let inputs: Vec<f64> = sweep.points.iter().map(|s| s.input).collect();
        assert_eq!(inputs, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn empty_inputs_complete_immediately() {
        let sweep = run_unobserved(&Identity, Vec::new()).unwrap();
        assert_eq!(sweep.status, Status::Completed);
        assert!(sweep.points.is_empty());
    }

    #[test]
    fn failure_without_action_is_an_error() {
        let err = run_unobserved(&Square, [1.0, -2.0, 3.0]).unwrap_err();
        assert_eq!(err.index, 1);
        assert_eq!(err.source.0, -2.0);
    }

    #[test]
    fn skip_recovers_from_failures() {
        let sweep = run(&Square, [1.0, -2.0, 3.0], |event: &Event<'_, Square>| {
            matches!(event, Event::ModelFailed { .. }).then_some(Action::Skip)
        })
        .unwrap();

        assert_eq!(sweep.status, Status::Completed);
        assert_eq!(sweep.skipped, vec![1]);
        let outputs: Vec<f64> = sweep.points.iter().map(|s| s.output).collect();
        assert_eq!(outputs, vec![1.0, 9.0]);
    }

    #[test]
    fn skip_drops_successful_points() {
        let sweep = run(&Square, [1.0, 2.0, 3.0], |event: &Event<'_, Square>| {
            (event.index() == 0).then_some(Action::Skip)
        })
        .unwrap();

        assert_eq!(sweep.skipped, vec![0]);
        assert_eq!(sweep.points.len(), 2);
    }

    #[test]
    fn stop_early_keeps_points_so_far() {
        let sweep = run(&Square, [1.0, 2.0, 3.0, 4.0], |event: &Event<'_, Square>| {
            match event {
                Event::Evaluated { output, .. } if **output > 3.0 => Some(Action::StopEarly),
                _ => None,
            }
        })
        .unwrap();

        assert_eq!(sweep.status, Status::StoppedByObserver);
        let outputs: Vec<f64> = sweep.points.iter().map(|s| s.output).collect();
        assert_eq!(outputs, vec![1.0, 4.0]);
    }

    #[test]
    fn stop_early_on_failure_skips_failed_point() {
        let sweep = run(&Square, [1.0, 2.0, -3.0, 4.0], |event: &Event<'_, Square>| {
            matches!(event, Event::ModelFailed { .. }).then_some(Action::StopEarly)
        })
        .unwrap();

        assert_eq!(sweep.status, Status::StoppedByObserver);
        assert_eq!(sweep.skipped, vec![2]);
        let outputs: Vec<f64> = sweep.points.iter().map(|s| s.output).collect();
        assert_eq!(outputs, vec![1.0, 4.0]);
    }

    #[test]
    fn observer_sees_every_event() {
        let mut seen = Vec::new();
        let _ = run(&Square, [2.0, -1.0, 5.0], |event: &Event<'_, Square>| {
            seen.push((event.index(), *event.input()));
            Some(Action::Skip)
        })
        .unwrap();

        assert_eq!(seen, vec![(0, 2.0), (1, -1.0), (2, 5.0)]);
    }

    #[test]
    fn linspace_endpoints() {
        let values: Vec<f64> = linspace(3.0, 12.0, 100).collect();
        assert_eq!(values.len(), 100);
        assert_eq!(values[0], 3.0);
        assert_eq!(values[99], 12.0);
        assert!(values.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert_eq!(linspace(1.0, 2.0, 0).count(), 0);
        assert_eq!(linspace(1.0, 2.0, 1).collect::<Vec<_>>(), vec![1.0]);
    }

    #[test]
    fn otto_sweep_skips_invalid_ratios() {
        use uom::si::ratio::ratio;

        use crate::models::cycles::otto::{OttoCycle, OttoError, OttoInput};

        let inputs =
            linspace(0.5, 3.0, 6).map(|r| OttoInput::default().with_compression_ratio(r));
        let sweep = run(&OttoCycle::air(), inputs, |event: &Event<'_, OttoCycle>| {
            match event {
                Event::ModelFailed { error, .. } => {
                    assert!(matches!(error, OttoError::CompressionRatio { .. }));
                    Some(Action::Skip)
                }
                Event::Evaluated { .. } => None,
            }
        })
        .unwrap();

        // r = 0.5 and r = 1.0 fail.
        assert_eq!(sweep.skipped, vec![0, 1]);
        assert_eq!(sweep.points.len(), 4);
        for results in sweep.outputs() {
            let gap = results.eta.get::<ratio>() - results.eta_theory.get::<ratio>();
            assert!(gap.abs() < 1e-12);
        }
    }

    #[test]
    fn rankine_sweep_reports_failing_pressure() {
        use uom::si::{f64::Pressure, pressure::kilopascal};

        use crate::models::cycles::rankine::{RankineCycle, RankineError};

        let pressures = [3000.0, 20_000.0, 5000.0].map(Pressure::new::<kilopascal>);
        let err = run_unobserved(&RankineCycle::default(), pressures).unwrap_err();

        assert_eq!(err.index, 1);
        assert!(matches!(
            err.source,
            RankineError::BoilerPressureOutOfRange { .. }
        ));
    }
}
