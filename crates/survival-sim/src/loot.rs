//! Loot policy: what a dead enemy leaves behind.

use rand::Rng;

use survival_core::components::PowerUp;
use survival_core::config::{LootTable, WeaponArchetype};

/// Roll the loot table once for an enemy that died holding `weapon`.
///
/// The roll is uniform over `1..=roll_max`. Low rolls drop health, rolls in
/// the weapon band drop a frozen copy of the enemy's weapon with its
/// cooldown shortened. Unarmed enemies never drop a weapon.
pub fn roll<R: Rng>(rng: &mut R, table: &LootTable, weapon: Option<&WeaponArchetype>) -> Option<PowerUp> {
    let roll = rng.gen_range(1..=table.roll_max.max(1));
    if roll <= table.health_band {
        Some(PowerUp::Health {
            amount: table.heal_amount,
        })
    } else if roll <= table.weapon_band {
        weapon.map(|w| PowerUp::Weapon(w.with_cooldown_factor(table.weapon_cooldown_factor)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use survival_core::config::WeaponTable;
    use survival_core::enums::WeaponKind;

    fn table(health_band: u32, weapon_band: u32) -> LootTable {
        LootTable {
            health_band,
            weapon_band,
            ..LootTable::default()
        }
    }

    #[test]
    fn test_health_band_always_heals() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..50 {
            assert_eq!(
                roll(&mut rng, &table(10, 10), None),
                Some(PowerUp::Health { amount: 20 })
            );
        }
    }

    #[test]
    fn test_weapon_band_freezes_enemy_weapon() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let blue = WeaponTable::default().get(WeaponKind::BlueLaser);
        for _ in 0..50 {
            match roll(&mut rng, &table(0, 10), Some(&blue)) {
                Some(PowerUp::Weapon(frozen)) => {
                    assert_eq!(frozen.kind, WeaponKind::BlueLaser);
                    assert!((frozen.cooldown_secs - 0.4).abs() < 1e-12);
                    assert_eq!(frozen.damage, blue.damage);
                }
                other => panic!("expected weapon pickup, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_unarmed_enemy_drops_no_weapon() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(roll(&mut rng, &table(0, 10), None), None);
        }
    }

    #[test]
    fn test_empty_bands_drop_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let green = WeaponTable::default().get(WeaponKind::GreenLaser);
        for _ in 0..50 {
            assert_eq!(roll(&mut rng, &table(0, 0), Some(&green)), None);
        }
    }

    #[test]
    fn test_default_bands_hit_both_outcomes() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let green = WeaponTable::default().get(WeaponKind::GreenLaser);
        let drops: Vec<_> = (0..200)
            .map(|_| roll(&mut rng, &LootTable::default(), Some(&green)))
            .collect();
        let heals = drops
            .iter()
            .filter(|d| matches!(d, Some(PowerUp::Health { .. })))
            .count();
        let weapons = drops
            .iter()
            .filter(|d| matches!(d, Some(PowerUp::Weapon(_))))
            .count();
        // Default table: 3 in 10 heal, the rest rearm.
        assert_eq!(heals + weapons, 200);
        assert!(heals > 20 && heals < 100, "heals = {heals}");
    }
}
