//! Die-roll sources.
//!
//! The game does not roll dice itself; it is handed a [`DieSource`] at
//! construction. Production play uses [`FairDie`]; tests and scripted
//! games substitute [`RiggedDie`] without touching the game or board.

use rand::Rng;

/// Number of faces on the die.
pub const DIE_SIDES: u32 = 6;

/// Capability to produce the next die roll.
///
/// Implementations must return a value in `[1, DIE_SIDES]`.
pub trait DieSource {
    /// Produce the next roll.
    fn roll(&mut self) -> u32;
}

/// Uniform random die over `[1, DIE_SIDES]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FairDie;

impl DieSource for FairDie {
    fn roll(&mut self) -> u32 {
        rand::thread_rng().gen_range(1..=DIE_SIDES)
    }
}

/// Deterministic die that always returns its configured value.
///
/// Useful for scripted games and tests; set `value` between turns to
/// steer play.
#[derive(Debug, Clone, Copy)]
pub struct RiggedDie {
    /// The value every roll returns.
    pub value: u32,
}

impl RiggedDie {
    /// Create a die fixed at `value`.
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl DieSource for RiggedDie {
    fn roll(&mut self) -> u32 {
        self.value
    }
}

/// Die that replays a fixed sequence of rolls, repeating from the
/// start once exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedDie {
    rolls: Vec<u32>,
    next: usize,
}

impl ScriptedDie {
    /// Create a die that cycles through `rolls`.
    ///
    /// The sequence must be non-empty.
    pub fn new(rolls: Vec<u32>) -> Self {
        assert!(!rolls.is_empty(), "scripted die needs at least one roll");
        Self { rolls, next: 0 }
    }
}

impl DieSource for ScriptedDie {
    fn roll(&mut self) -> u32 {
        let roll = self.rolls[self.next];
        self.next = (self.next + 1) % self.rolls.len();
        roll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fair_die_stays_in_range() {
        let mut die = FairDie;
        for _ in 0..1000 {
            let roll = die.roll();
            assert!((1..=DIE_SIDES).contains(&roll), "roll {} out of range", roll);
        }
    }

    #[test]
    fn test_rigged_die_is_fixed() {
        let mut die = RiggedDie::new(4);
        assert_eq!(die.roll(), 4);
        assert_eq!(die.roll(), 4);

        die.value = 2;
        assert_eq!(die.roll(), 2);
    }

    #[test]
    fn test_scripted_die_cycles() {
        let mut die = ScriptedDie::new(vec![1, 2, 2]);
        assert_eq!(die.roll(), 1);
        assert_eq!(die.roll(), 2);
        assert_eq!(die.roll(), 2);
        assert_eq!(die.roll(), 1);
    }
}
