//! Door controller toggling.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use rovertel_core::{Actuator, DoorController};

/// Servo stub that exposes its angle to the test.
struct Probe(Arc<AtomicU8>);

impl Actuator for Probe {
    fn set_angle(&mut self, angle: u8) {
        self.0.store(angle, Ordering::SeqCst);
    }
    fn angle(&self) -> u8 {
        self.0.load(Ordering::SeqCst)
    }
}

fn door() -> (DoorController, Arc<AtomicU8>) {
    let angle = Arc::new(AtomicU8::new(0));
    let door = DoorController::new(Box::new(Probe(Arc::clone(&angle))), 20, 180);
    (door, angle)
}

#[test]
fn parks_closed_on_start() {
    let (door, servo) = door();
    assert_eq!(door.angle(), 20);
    assert_eq!(servo.load(Ordering::SeqCst), 20);
}

#[test]
fn toggle_returns_previous_angle() {
    let (door, servo) = door();

    assert_eq!(door.toggle(), 20);
    assert_eq!(servo.load(Ordering::SeqCst), 180);

    assert_eq!(door.toggle(), 180);
    assert_eq!(servo.load(Ordering::SeqCst), 20);
}

#[test]
fn unknown_angle_closes() {
    let (door, servo) = door();
    servo.store(90, Ordering::SeqCst);

    assert_eq!(door.toggle(), 90);
    assert_eq!(door.angle(), 20);
}
