#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use survival_core::enums::Faction;
    use survival_core::types::{Position, Velocity, WorldBounds};

    use crate::homing::*;
    use crate::pursuit::*;

    fn arena() -> WorldBounds {
        WorldBounds::new(1600.0, 1200.0)
    }

    // ---- Pursuit ----

    #[test]
    fn test_pursuit_prefers_wrap_across_edge() {
        let enemy = Position::new(10.0, 600.0);
        let player = Position::new(1590.0, 600.0);
        let dir = pursuit_direction(&enemy, &player, &arena()).unwrap();
        assert!((dir.x + 1.0).abs() < 1e-12, "expected -x, got {dir:?}");
        assert!(dir.y.abs() < 1e-12);
    }

    #[test]
    fn test_pursuit_direct_when_shorter() {
        let enemy = Position::new(100.0, 100.0);
        let player = Position::new(400.0, 500.0);
        let delta = toroidal_delta(&enemy, &player, &arena());
        assert_eq!((delta.x, delta.y), (300.0, 400.0));
        let dir = pursuit_direction(&enemy, &player, &arena()).unwrap();
        assert!((dir.x - 0.6).abs() < 1e-12);
        assert!((dir.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_pursuit_wraps_each_axis_independently() {
        let enemy = Position::new(800.0, 1190.0);
        let player = Position::new(810.0, 5.0);
        let delta = toroidal_delta(&enemy, &player, &arena());
        assert_eq!(delta.x, 10.0);
        assert_eq!(delta.y, 15.0);
    }

    #[test]
    fn test_pursuit_coincident_positions() {
        let p = Position::new(42.0, 42.0);
        assert!(pursuit_direction(&p, &p, &arena()).is_none());
    }

    // ---- Homing ----

    #[test]
    fn test_angle_delta_takes_short_arc() {
        assert_eq!(angle_delta(10.0, 350.0), -20.0);
        assert_eq!(angle_delta(350.0, 10.0), 20.0);
        assert_eq!(angle_delta(0.0, 90.0), 90.0);
        assert_eq!(angle_delta(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_turn_toward_is_bounded() {
        assert_eq!(turn_toward(0.0, 90.0, 5.0), 5.0);
        assert_eq!(turn_toward(0.0, 270.0, 5.0), 355.0);
        // Within one step: snap to the bearing.
        assert_eq!(turn_toward(88.0, 90.0, 5.0), 90.0);
    }

    #[test]
    fn test_enemy_missile_targets_player() {
        let enemies = [Position::new(0.0, 0.0)];
        let ctx = HomingContext {
            owner: Faction::Enemy,
            position: Position::new(100.0, 100.0),
            heading_deg: 0.0,
            turn_rate_deg: 1.0,
            player: Some(Position::new(200.0, 100.0)),
            enemies: &enemies,
        };
        let update = steer(&ctx);
        assert_eq!(update.target, Some(Position::new(200.0, 100.0)));
        // Player is to the right (bearing 270), so the short way is clockwise.
        assert_eq!(update.heading_deg, 359.0);
    }

    #[test]
    fn test_player_missile_targets_nearest_enemy() {
        let enemies = [
            Position::new(500.0, 100.0),
            Position::new(100.0, 40.0),
            Position::new(100.0, 300.0),
        ];
        let ctx = HomingContext {
            owner: Faction::Player,
            position: Position::new(100.0, 100.0),
            heading_deg: 0.0,
            turn_rate_deg: 1.0,
            player: None,
            enemies: &enemies,
        };
        assert_eq!(select_target(&ctx), Some(Position::new(100.0, 40.0)));
        // Already pointing at it.
        assert_eq!(steer(&ctx).heading_deg, 0.0);
    }

    #[test]
    fn test_no_target_holds_heading() {
        let ctx = HomingContext {
            owner: Faction::Player,
            position: Position::new(100.0, 100.0),
            heading_deg: 123.0,
            turn_rate_deg: 5.0,
            player: Some(Position::new(0.0, 0.0)),
            enemies: &[],
        };
        let update = steer(&ctx);
        assert_eq!(update.heading_deg, 123.0);
        assert!(update.target.is_none());

        let ctx = HomingContext {
            owner: Faction::Enemy,
            player: None,
            ..ctx
        };
        assert_eq!(steer(&ctx).heading_deg, 123.0);
    }

    #[test]
    fn test_homing_converges_on_stationary_target() {
        let target = Position::new(400.0, 0.0);
        let mut position = Position::new(0.0, 0.0);
        // Pointing up; the target lies a quarter turn clockwise.
        let mut heading = 0.0;
        let enemies = [target];
        let mut last_error = f64::INFINITY;

        for _ in 0..120 {
            let ctx = HomingContext {
                owner: Faction::Player,
                position,
                heading_deg: heading,
                turn_rate_deg: 5.0,
                player: None,
                enemies: &enemies,
            };
            heading = steer(&ctx).heading_deg;
            let v = Velocity::from_heading(heading, 1.0);
            position = Position::new(position.x + v.x, position.y + v.y);

            let error = angle_delta(heading, position.bearing_to(&target)).abs();
            assert!(
                error <= last_error + 1e-9,
                "angular error grew from {last_error} to {error}"
            );
            last_error = error;
        }
        assert!(last_error < 1e-6, "did not lock on, error {last_error}");
        assert!(position.distance_to(&target) < 400.0);
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        let a = Position::new(10.0, 0.0);
        let b = Position::new(-10.0, 0.0);
        assert_eq!(nearest(&Position::new(0.0, 0.0), &[a, b]), Some(a));
        assert_eq!(nearest(&Position::new(0.0, 0.0), &[]), None);
    }

    // ---- Properties ----

    proptest! {
        #[test]
        fn prop_toroidal_delta_is_shortest(
            fx in 0.0f64..1600.0, fy in 0.0f64..1200.0,
            tx in 0.0f64..1600.0, ty in 0.0f64..1200.0,
        ) {
            let bounds = arena();
            let from = Position::new(fx, fy);
            let to = Position::new(tx, ty);
            let delta = toroidal_delta(&from, &to, &bounds);
            prop_assert!(delta.x.abs() <= bounds.width / 2.0 + 1e-9);
            prop_assert!(delta.y.abs() <= bounds.height / 2.0 + 1e-9);

            // Following the delta lands on the target modulo the torus.
            let landed = bounds.wrap(Position::new(fx + delta.x, fy + delta.y));
            let dx = (landed.x - tx).abs();
            let dy = (landed.y - ty).abs();
            prop_assert!(dx < 1e-6 || (bounds.width - dx) < 1e-6);
            prop_assert!(dy < 1e-6 || (bounds.height - dy) < 1e-6);
        }

        #[test]
        fn prop_turn_never_exceeds_rate(
            current in 0.0f64..360.0,
            bearing in 0.0f64..360.0,
            rate in 0.01f64..30.0,
        ) {
            let next = turn_toward(current, bearing, rate);
            prop_assert!((0.0..360.0).contains(&next));
            prop_assert!(angle_delta(current, next).abs() <= rate + 1e-9);
        }
    }
}
