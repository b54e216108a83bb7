use bevy::prelude::Resource;
use std::time::Duration;

#[derive(Resource)]
pub struct ExpireSweepTimer {
    pub interval: Duration,
    pub next_sweep: Duration,
}

impl ExpireSweepTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_sweep: interval,
        }
    }

    /// Returns true when a sweep is due at `now` and schedules the following one.
    pub fn tick(&mut self, now: Duration) -> bool {
        if now < self.next_sweep {
            return false;
        }

        if self.interval.is_zero() {
            return true;
        }

        while self.next_sweep <= now {
            self.next_sweep += self.interval;
        }
        true
    }
}
