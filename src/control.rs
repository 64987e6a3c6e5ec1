//! Shared run control: the pause flag and time factor exchanged between the
//! step loop and the presentation side.
//!
//! These two values are the only state shared across threads of control; the
//! maze is immutable and the agent's table and position are owned by the step
//! loop. Both values live in atomics so neither side can observe a torn read.

use std::sync::{
    Arc,
    atomic::{AtomicBool, AtomicU32, Ordering},
};

use crate::{Result, error::Error};

/// Smallest accepted time factor.
pub const MIN_TIME_FACTOR: u32 = 1;

/// Largest accepted time factor.
pub const MAX_TIME_FACTOR: u32 = 3;

#[derive(Debug)]
struct ControlState {
    paused: AtomicBool,
    time_factor: AtomicU32,
}

/// Cloneable handle over the shared run-control state.
///
/// The step loop polls [`SimulationControl::is_paused`] before every step, so
/// pausing takes effect within one step's latency; it never preempts an
/// in-flight update. Pausing is suspension, not teardown.
#[derive(Debug, Clone)]
pub struct SimulationControl {
    state: Arc<ControlState>,
}

impl SimulationControl {
    /// Create a running control handle with the given initial time factor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeFactor`] when `time_factor` lies outside
    /// `1..=3`.
    pub fn new(time_factor: u32) -> Result<Self> {
        validate_time_factor(time_factor)?;
        Ok(SimulationControl {
            state: Arc::new(ControlState {
                paused: AtomicBool::new(false),
                time_factor: AtomicU32::new(time_factor),
            }),
        })
    }

    /// Suspend the step loop at its next pause checkpoint.
    pub fn pause(&self) {
        self.state.paused.store(true, Ordering::Release);
    }

    /// Resume a suspended step loop.
    pub fn resume(&self) {
        self.state.paused.store(false, Ordering::Release);
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused.load(Ordering::Acquire)
    }

    pub fn time_factor(&self) -> u32 {
        self.state.time_factor.load(Ordering::Acquire)
    }

    /// Set the pacing multiplier.
    ///
    /// Out-of-range values are rejected and the prior factor remains in
    /// effect; an invalid value never reaches the step loop's timing logic.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTimeFactor`] when `value` lies outside `1..=3`.
    pub fn set_time_factor(&self, value: u32) -> Result<()> {
        validate_time_factor(value)?;
        self.state.time_factor.store(value, Ordering::Release);
        Ok(())
    }
}

fn validate_time_factor(value: u32) -> Result<()> {
    if (MIN_TIME_FACTOR..=MAX_TIME_FACTOR).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidTimeFactor {
            value,
            min: MIN_TIME_FACTOR,
            max: MAX_TIME_FACTOR,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running() {
        let control = SimulationControl::new(1).unwrap();
        assert!(!control.is_paused());
        assert_eq!(control.time_factor(), 1);
    }

    #[test]
    fn pause_and_resume_toggle_the_flag() {
        let control = SimulationControl::new(1).unwrap();
        control.pause();
        assert!(control.is_paused());
        control.resume();
        assert!(!control.is_paused());
    }

    #[test]
    fn clones_share_state() {
        let control = SimulationControl::new(1).unwrap();
        let handle = control.clone();
        handle.pause();
        assert!(control.is_paused());
        handle.set_time_factor(3).unwrap();
        assert_eq!(control.time_factor(), 3);
    }

    #[test]
    fn out_of_range_factors_are_rejected_and_prior_value_kept() {
        let control = SimulationControl::new(2).unwrap();

        assert!(matches!(
            control.set_time_factor(0),
            Err(Error::InvalidTimeFactor { value: 0, .. })
        ));
        assert!(control.set_time_factor(10).is_err());
        assert_eq!(control.time_factor(), 2);
    }

    #[test]
    fn invalid_initial_factor_is_rejected() {
        assert!(SimulationControl::new(0).is_err());
        assert!(SimulationControl::new(4).is_err());
    }
}
