//! Running round statistics.
//!
//! Stored on `SimulationEngine`, not as ECS entities.

use survival_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct RoundStats {
    pub enemies_killed: u32,
    pub enemies_total: u32,
    /// Shots fired by the player.
    pub shots_fired: u32,
    pub pickups_collected: u32,
}

impl RoundStats {
    pub fn view(&self) -> ScoreView {
        ScoreView {
            enemies_killed: self.enemies_killed,
            enemies_total: self.enemies_total,
            shots_fired: self.shots_fired,
            pickups_collected: self.pickups_collected,
        }
    }
}
