//! Gimbal command behavior observed through a recording driver.

use gimbal_control::{Axis, Gimbal, GimbalCalibration, ServoBank};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Fake driver board that records every write.
#[derive(Clone, Default)]
struct RecordingBank {
    writes: Arc<Mutex<Vec<(u8, f32)>>>,
}

impl RecordingBank {
    fn writes(&self) -> Vec<(u8, f32)> {
        self.writes.lock().expect("writes mutex poisoned").clone()
    }
}

impl ServoBank for RecordingBank {
    fn set_throttle(&mut self, channel: u8, throttle: f32) -> io::Result<()> {
        self.writes
            .lock()
            .expect("writes mutex poisoned")
            .push((channel, throttle));
        Ok(())
    }
}

fn gimbal(bank: &RecordingBank) -> Gimbal {
    Gimbal::new(Box::new(bank.clone()), GimbalCalibration::default())
}

#[test]
fn offsets_are_applied_before_the_write() {
    let bank = RecordingBank::default();
    let mut gimbal = gimbal(&bank);

    gimbal.set(Axis::Pan, 0.5).expect("set pan");
    gimbal.set(Axis::Pitch, 0.5).expect("set pitch");

    let writes = bank.writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0].0, 0);
    assert!((writes[0].1 - 0.57).abs() < 1e-6);
    assert_eq!(writes[1].0, 1);
    assert!((writes[1].1 - 0.42).abs() < 1e-6);
}

#[test]
fn commands_are_clamped_to_unit_range() {
    let bank = RecordingBank::default();
    let mut gimbal = gimbal(&bank);

    gimbal.set(Axis::Pan, 1.0).expect("set pan");
    gimbal.set(Axis::Pitch, -1.0).expect("set pitch");

    let writes = bank.writes();
    // Pan: 1.0 + 0.07 clamps to 1.0; pitch: -1.0 - 0.08 clamps to -1.0.
    assert_eq!(writes[0], (0, 1.0));
    assert_eq!(writes[1], (1, -1.0));
    for (_, throttle) in writes {
        assert!((-1.0..=1.0).contains(&throttle));
    }
}

#[test]
fn stop_lands_on_the_calibrated_offset() {
    let bank = RecordingBank::default();
    let mut gimbal = gimbal(&bank);

    gimbal.stop_all().expect("stop");

    let writes = bank.writes();
    assert!((writes[0].1 - 0.07).abs() < 1e-6, "pan stop is its offset");
    assert!((writes[1].1 + 0.08).abs() < 1e-6, "pitch stop is its offset");
}

#[test]
fn sweep_drives_forward_reverse_stop() {
    let bank = RecordingBank::default();
    let mut gimbal = gimbal(&bank);

    gimbal.sweep(Duration::ZERO).expect("sweep");

    let writes = bank.writes();
    assert_eq!(writes.len(), 6, "two axes, three phases");
    // Forward phase clamps both axes to their positive limit.
    assert_eq!(writes[0], (0, 1.0));
    assert!((writes[1].1 - 0.92).abs() < 1e-6);
    // Reverse phase.
    assert!((writes[2].1 + 0.93).abs() < 1e-6);
    assert_eq!(writes[3], (1, -1.0));
    // Stop phase returns to the offsets.
    assert!((writes[4].1 - 0.07).abs() < 1e-6);
    assert!((writes[5].1 + 0.08).abs() < 1e-6);
}

#[test]
fn custom_calibration_is_honored() {
    let bank = RecordingBank::default();
    let calibration = GimbalCalibration {
        pan_stop_offset: -0.02,
        pitch_stop_offset: 0.04,
    };
    let mut gimbal = Gimbal::new(Box::new(bank.clone()), calibration);

    gimbal.stop_all().expect("stop");

    let writes = bank.writes();
    assert!((writes[0].1 + 0.02).abs() < 1e-6);
    assert!((writes[1].1 - 0.04).abs() < 1e-6);
}
