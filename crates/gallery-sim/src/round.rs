//! Round state: score, ammo and countdown.
//!
//! Stored directly on the `RoundController`, NOT as ECS entities. Every
//! mutation goes through a method here so the controller can follow it
//! with a HUD sync.

/// Mutable state of the current round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Can go negative through friendly hits.
    pub score: i32,
    pub ammo: u32,
    pub time_remaining: u32,
    capacity: u32,
}

impl RoundState {
    pub fn new(round_secs: u32, capacity: u32) -> Self {
        Self {
            score: 0,
            ammo: capacity,
            time_remaining: round_secs,
            capacity,
        }
    }

    /// The round accepts gameplay taps while time remains.
    pub fn is_active(&self) -> bool {
        self.time_remaining > 0
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Refill to exactly the magazine capacity.
    pub fn reload(&mut self) {
        self.ammo = self.capacity;
    }

    /// Spend one round. Returns false (and changes nothing) when empty.
    pub fn try_fire(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    pub fn add_score(&mut self, delta: i32) {
        self.score += delta;
    }

    /// Decrement the countdown. Returns true when the round just ended.
    pub fn count_down(&mut self) -> bool {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.time_remaining == 0
    }
}
