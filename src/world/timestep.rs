use tracing::warn;

use crate::error::{PhysicsError, PhysicsResult};

/// Fixed-step accumulator for driving `World::update` from a render loop.
///
/// Each frame adds its elapsed time; whole steps are drained from the
/// accumulator. Frame times above `max_frame_time` are clamped so a slow
/// frame cannot snowball into ever more steps.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTimestep {
    step: f64,
    max_frame_time: f64,
    accumulator: f64,
}

impl FixedTimestep {
    pub fn new(step: f64, max_frame_time: f64) -> PhysicsResult<Self> {
        if !(step > 0.0 && step.is_finite()) {
            return Err(PhysicsError::invalid_argument(format!(
                "timestep must be positive, got {step}"
            )));
        }
        if max_frame_time.is_nan() || max_frame_time < step {
            return Err(PhysicsError::invalid_argument(format!(
                "max frame time {max_frame_time} is shorter than one step of {step}"
            )));
        }
        Ok(Self {
            step,
            max_frame_time,
            accumulator: 0.0,
        })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Adds `frame_time` seconds and calls `tick` with the fixed step as
    /// many times as fit. Returns how many steps ran.
    pub fn advance<F>(&mut self, frame_time: f64, mut tick: F) -> usize
    where
        F: FnMut(f64),
    {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > self.max_frame_time {
            warn!(frame_time, max = self.max_frame_time, "frame time clamped");
            frame_time = self.max_frame_time;
        }
        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= self.step {
            tick(self.step);
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step left in the accumulator, for render interpolation.
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.step
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut timestep = FixedTimestep::new(0.25, 1.0).unwrap();
        let mut simulated = 0.0;
        assert_eq!(timestep.advance(0.125, |dt| simulated += dt), 0);
        assert_relative_eq!(timestep.alpha(), 0.5);
        assert_eq!(timestep.advance(0.5, |dt| simulated += dt), 2);
        assert_relative_eq!(simulated, 0.5);
        assert_relative_eq!(timestep.alpha(), 0.5);
    }

    #[test]
    fn test_long_frames_are_clamped() {
        let mut timestep = FixedTimestep::new(0.25, 1.0).unwrap();
        assert_eq!(timestep.advance(10.0, |_| {}), 4);
        assert_relative_eq!(timestep.alpha(), 0.0);
    }

    #[test]
    fn test_invalid_steps() {
        assert!(FixedTimestep::new(0.0, 1.0).is_err());
        assert!(FixedTimestep::new(0.5, 0.25).is_err());
    }
}
