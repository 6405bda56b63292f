//! Player input intents consumed by the simulation.
//!
//! The input-polling collaborator translates device state into an
//! [`InputFrame`] once per tick. Turn, thrust and fire are held signals;
//! `confirm` is an edge and should be set for a single tick per press.

use serde::{Deserialize, Serialize};

/// A single abstract intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerIntent {
    TurnLeft,
    TurnRight,
    Thrust,
    Fire,
    Confirm,
}

/// The intents active during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputFrame {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    pub fire: bool,
    pub confirm: bool,
}

impl InputFrame {
    /// Frame with only `confirm` set.
    pub fn confirm() -> Self {
        Self {
            confirm: true,
            ..Self::default()
        }
    }

    /// Build a frame from a list of intents.
    pub fn from_intents(intents: &[PlayerIntent]) -> Self {
        intents.iter().fold(Self::default(), |frame, &intent| frame.with(intent))
    }

    /// Copy of this frame with `intent` set.
    pub fn with(mut self, intent: PlayerIntent) -> Self {
        match intent {
            PlayerIntent::TurnLeft => self.turn_left = true,
            PlayerIntent::TurnRight => self.turn_right = true,
            PlayerIntent::Thrust => self.thrust = true,
            PlayerIntent::Fire => self.fire = true,
            PlayerIntent::Confirm => self.confirm = true,
        }
        self
    }

    /// Net turn direction: +1 left, -1 right, 0 when neither or both.
    pub fn turn_axis(&self) -> f64 {
        match (self.turn_left, self.turn_right) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}
