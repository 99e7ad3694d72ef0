//! Throttle control for the pan/pitch camera gimbal.
//!
//! Continuous-rotation servos drift, so "stopped" is not throttle zero; each
//! axis carries a calibrated stop offset that is added to every command
//! before the write. The PWM driver itself sits behind [`ServoBank`] so the
//! controller owns an explicit handle instead of process-global state.

use serde::Deserialize;
use std::io;
use std::thread;
use std::time::Duration;

/// The two controllable gimbal axes. Matched exhaustively; adding an axis
/// means wiring a channel and an offset here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Pan,
    Pitch,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::Pan, Axis::Pitch];

    /// Driver board channel the axis's servo is wired to.
    pub fn channel(self) -> u8 {
        match self {
            Axis::Pan => 0,
            Axis::Pitch => 1,
        }
    }
}

/// Per-axis stop offsets measured on the actual servos.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GimbalCalibration {
    pub pan_stop_offset: f32,
    pub pitch_stop_offset: f32,
}

impl Default for GimbalCalibration {
    fn default() -> Self {
        Self {
            pan_stop_offset: 0.07,
            pitch_stop_offset: -0.08,
        }
    }
}

impl GimbalCalibration {
    pub fn offset(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Pan => self.pan_stop_offset,
            Axis::Pitch => self.pitch_stop_offset,
        }
    }
}

/// Seam over the PWM driver board: one throttle write per channel, in
/// [-1, 1]. Implementors are the hardware boundary.
pub trait ServoBank {
    fn set_throttle(&mut self, channel: u8, throttle: f32) -> io::Result<()>;
}

/// Pan/pitch controller owning the driver handle and the calibration.
pub struct Gimbal {
    bank: Box<dyn ServoBank>,
    calibration: GimbalCalibration,
}

impl Gimbal {
    pub fn new(bank: Box<dyn ServoBank>, calibration: GimbalCalibration) -> Self {
        Self { bank, calibration }
    }

    pub fn calibration(&self) -> GimbalCalibration {
        self.calibration
    }

    /// Command an axis. The calibration offset is applied first, then the
    /// result is clamped to [-1, 1] before the single hardware write.
    pub fn set(&mut self, axis: Axis, throttle: f32) -> io::Result<()> {
        let value = (throttle + self.calibration.offset(axis)).clamp(-1.0, 1.0);
        self.bank.set_throttle(axis.channel(), value)
    }

    /// Bring every axis to its calibrated stop.
    pub fn stop_all(&mut self) -> io::Result<()> {
        for axis in Axis::ALL {
            self.set(axis, 0.0)?;
        }
        Ok(())
    }

    /// Exercise routine: both axes full forward, pause, full reverse,
    /// pause, stop. Blocks for the duration of both pauses.
    pub fn sweep(&mut self, pause: Duration) -> io::Result<()> {
        for axis in Axis::ALL {
            self.set(axis, 1.0)?;
        }
        thread::sleep(pause);
        for axis in Axis::ALL {
            self.set(axis, -1.0)?;
        }
        thread::sleep(pause);
        self.stop_all()
    }
}
