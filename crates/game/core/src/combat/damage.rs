//! Damage application.

/// Apply damage to current health.
///
/// Health is allowed to drop below zero (a defeated combatant hit again stays
/// defeated). The subtraction saturates at `i32::MIN` instead of wrapping.
///
/// # Arguments
///
/// * `current_health` - Current health value
/// * `damage` - Damage to apply
///
/// # Returns
///
/// New health value
pub fn apply_damage(current_health: i32, damage: i32) -> i32 {
    current_health.saturating_sub(damage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtracts_exact_damage() {
        assert_eq!(apply_damage(80, 20), 60);
        assert_eq!(apply_damage(15, 20), -5);
    }

    #[test]
    fn saturates_instead_of_wrapping() {
        assert_eq!(apply_damage(i32::MIN + 1, 10), i32::MIN);
    }
}
