use rovertel_core::Actuator;

#[derive(Debug, Default)]
pub struct SimulatedServo {
    angle: u8,
}

impl SimulatedServo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Actuator for SimulatedServo {
    fn set_angle(&mut self, angle: u8) {
        tracing::trace!(angle, "servo write");
        self.angle = angle;
    }

    fn angle(&self) -> u8 {
        self.angle
    }
}
