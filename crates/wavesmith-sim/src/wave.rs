//! Wave/grace state machine.
//!
//! Grace counts down, then a wave spawns; the wave ends when every monster
//! is dead and a new grace window opens for the next wave number.

use wavesmith_core::constants::{
    BOSS_WAVE_INTERVAL, GRACE_DURATION_TICKS, MONSTERS_PER_WAVE,
};
use wavesmith_core::enums::WavePhase;

/// What a given wave number spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveDefinition {
    pub regulars: u32,
    pub boss: bool,
}

impl WaveDefinition {
    pub fn for_wave(wave_number: u32) -> Self {
        Self {
            regulars: wave_number.saturating_mul(MONSTERS_PER_WAVE),
            boss: wave_number % BOSS_WAVE_INTERVAL == 0,
        }
    }

    pub fn total(&self) -> u32 {
        self.regulars.saturating_add(u32::from(self.boss))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveState {
    /// Current wave number, starting at 1.
    pub wave: u32,
    pub phase: WavePhase,
    /// Ticks left in the grace window.
    pub grace_timer: u32,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            wave: 1,
            phase: WavePhase::Grace,
            grace_timer: GRACE_DURATION_TICKS,
        }
    }
}

impl WaveState {
    pub fn is_grace(&self) -> bool {
        self.phase == WavePhase::Grace
    }

    /// Count one grace tick. Returns true when the timer has run out and the
    /// wave should start. Does nothing outside grace.
    pub fn tick_grace(&mut self) -> bool {
        if !self.is_grace() {
            return false;
        }
        self.grace_timer = self.grace_timer.saturating_sub(1);
        self.grace_timer == 0
    }

    /// Grace → Fighting. Returns the wave to spawn, or None if already
    /// fighting.
    pub fn begin_fighting(&mut self) -> Option<WaveDefinition> {
        if !self.is_grace() {
            return None;
        }
        self.phase = WavePhase::Fighting;
        self.grace_timer = 0;
        Some(WaveDefinition::for_wave(self.wave))
    }

    /// Fighting → Grace once the field is clear. Returns the number of the
    /// wave just cleared.
    pub fn complete_wave(&mut self, monsters_remaining: usize) -> Option<u32> {
        if self.is_grace() || monsters_remaining > 0 {
            return None;
        }
        let cleared = self.wave;
        self.wave = self.wave.saturating_add(1);
        self.phase = WavePhase::Grace;
        self.grace_timer = GRACE_DURATION_TICKS;
        Some(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_in_grace_at_wave_one() {
        let state = WaveState::default();
        assert_eq!(state.wave, 1);
        assert_eq!(state.phase, WavePhase::Grace);
        assert_eq!(state.grace_timer, 18_000);
    }

    #[test]
    fn grace_expires_after_full_duration() {
        let mut state = WaveState::default();
        for _ in 0..17_999 {
            assert!(!state.tick_grace());
        }
        assert!(state.tick_grace());
    }

    #[test]
    fn wave_definitions_scale() {
        assert_eq!(
            WaveDefinition::for_wave(1),
            WaveDefinition {
                regulars: 3,
                boss: false
            }
        );
        assert_eq!(
            WaveDefinition::for_wave(5),
            WaveDefinition {
                regulars: 15,
                boss: true
            }
        );
        assert_eq!(WaveDefinition::for_wave(10).total(), 31);
        assert!(!WaveDefinition::for_wave(6).boss);
    }

    #[test]
    fn huge_wave_numbers_saturate() {
        assert_eq!(WaveDefinition::for_wave(u32::MAX).regulars, u32::MAX);
        assert_eq!(WaveDefinition::for_wave(u32::MAX).total(), u32::MAX);

        let mut state = WaveState {
            wave: u32::MAX,
            phase: WavePhase::Fighting,
            grace_timer: 0,
        };
        assert_eq!(state.complete_wave(0), Some(u32::MAX));
        assert_eq!(state.wave, u32::MAX);
    }

    #[test]
    fn begin_fighting_only_from_grace() {
        let mut state = WaveState::default();
        assert!(state.begin_fighting().is_some());
        assert_eq!(state.phase, WavePhase::Fighting);
        assert!(state.begin_fighting().is_none());
        assert!(!state.tick_grace());
    }

    #[test]
    fn complete_wave_requires_empty_field() {
        let mut state = WaveState::default();
        assert_eq!(state.complete_wave(0), None, "not fighting yet");
        state.begin_fighting();
        assert_eq!(state.complete_wave(2), None);
        assert_eq!(state.complete_wave(0), Some(1));
        assert_eq!(state.wave, 2);
        assert_eq!(state.phase, WavePhase::Grace);
        assert_eq!(state.grace_timer, GRACE_DURATION_TICKS);
    }
}
