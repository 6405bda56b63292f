//! Scripted pilot that drives the player without a human at the keys.
//!
//! Confirms through the title and game-over screens, turns toward the
//! nearest enemy, holds fire, and thrusts to keep its distance band.

use survival_ai::homing::angle_delta;
use survival_core::commands::{InputFrame, PlayerIntent};
use survival_core::enums::GamePhase;
use survival_core::state::ArenaSnapshot;

/// Distance inside which the pilot stops closing on its target.
const STANDOFF_DISTANCE: f64 = 250.0;

/// Heading error (degrees) under which the pilot stops turning.
const AIM_TOLERANCE_DEG: f64 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Keep restarting rounds after a game over.
    pub replay: bool,
}

impl Autopilot {
    pub fn new(replay: bool) -> Self {
        Self { replay }
    }

    /// Choose the input for the next tick from the last snapshot seen.
    pub fn next_input(&self, snapshot: Option<&ArenaSnapshot>) -> InputFrame {
        let Some(snapshot) = snapshot else {
            return InputFrame::confirm();
        };

        match snapshot.phase {
            GamePhase::Title => InputFrame::confirm(),
            GamePhase::GameOver if self.replay => InputFrame::confirm(),
            GamePhase::GameOver => InputFrame::default(),
            GamePhase::Playing => self.fly(snapshot),
        }
    }

    fn fly(&self, snapshot: &ArenaSnapshot) -> InputFrame {
        let mut input = InputFrame::default().with(PlayerIntent::Fire);
        let Some(player) = snapshot.player.as_ref() else {
            return input;
        };

        let nearest = snapshot.enemies.iter().min_by(|a, b| {
            player
                .position
                .distance_to(&a.position)
                .total_cmp(&player.position.distance_to(&b.position))
        });
        let Some(target) = nearest else {
            return input;
        };

        let error = angle_delta(player.heading, player.position.bearing_to(&target.position));
        if error > AIM_TOLERANCE_DEG {
            input = input.with(PlayerIntent::TurnLeft);
        } else if error < -AIM_TOLERANCE_DEG {
            input = input.with(PlayerIntent::TurnRight);
        }
        if player.position.distance_to(&target.position) > STANDOFF_DISTANCE {
            input = input.with(PlayerIntent::Thrust);
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use survival_core::enums::{EnemyClass, Faction};
    use survival_core::state::EntityView;
    use survival_core::types::Position;

    fn body(faction: Faction, x: f64, y: f64) -> EntityView {
        EntityView {
            id: 1,
            faction,
            class: (faction == Faction::Enemy).then_some(EnemyClass::Rammer),
            position: Position::new(x, y),
            heading: 0.0,
            health: 100,
            max_health: 100,
            weapon: None,
        }
    }

    #[test]
    fn test_confirms_on_title() {
        let pilot = Autopilot::new(false);
        assert!(pilot.next_input(None).confirm);
        let snap = ArenaSnapshot::default();
        assert!(pilot.next_input(Some(&snap)).confirm);
    }

    #[test]
    fn test_replay_controls_game_over() {
        let snap = ArenaSnapshot {
            phase: GamePhase::GameOver,
            ..ArenaSnapshot::default()
        };
        assert!(!Autopilot::new(false).next_input(Some(&snap)).confirm);
        assert!(Autopilot::new(true).next_input(Some(&snap)).confirm);
    }

    #[test]
    fn test_turns_toward_nearest_enemy_and_fires() {
        let snap = ArenaSnapshot {
            phase: GamePhase::Playing,
            player: Some(body(Faction::Player, 800.0, 600.0)),
            // Nearest enemy is to the left (bearing 90).
            enemies: vec![
                body(Faction::Enemy, 100.0, 600.0),
                body(Faction::Enemy, 1500.0, 100.0),
            ],
            ..ArenaSnapshot::default()
        };
        let input = Autopilot::default().next_input(Some(&snap));
        assert!(input.fire);
        assert!(input.turn_left && !input.turn_right);
        assert!(input.thrust, "target is beyond standoff distance");
        assert!(!input.confirm);
    }

    #[test]
    fn test_holds_position_inside_standoff() {
        let snap = ArenaSnapshot {
            phase: GamePhase::Playing,
            player: Some(body(Faction::Player, 800.0, 600.0)),
            // Straight ahead, close.
            enemies: vec![body(Faction::Enemy, 800.0, 500.0)],
            ..ArenaSnapshot::default()
        };
        let input = Autopilot::default().next_input(Some(&snap));
        assert!(!input.turn_left && !input.turn_right);
        assert!(!input.thrust);
        assert!(input.fire);
    }
}
