use std::ops::RangeInclusive;

use rand::Rng;

/// Frame countdown between obstacle spawns.
///
/// Random draws happen in a fixed order: the countdown on creation and reset,
/// then on every spawn the lane followed by the next countdown. A seeded
/// generator therefore yields a reproducible spawn schedule.
#[derive(Debug, Clone)]
pub struct Spawner {
    cooldown: RangeInclusive<u32>,
    timer: u32,
}

impl Spawner {
    pub fn new<R: Rng>(cooldown: RangeInclusive<u32>, rng: &mut R) -> Self {
        let timer = rng.gen_range(cooldown.clone());
        Self { cooldown, timer }
    }

    /// Counts down one frame. Returns the lane for a new obstacle when the countdown hits zero.
    pub fn tick<R: Rng>(&mut self, lane_count: usize, rng: &mut R) -> Option<usize> {
        self.timer = self.timer.saturating_sub(1);
        if self.timer > 0 {
            return None;
        }

        let lane = rng.gen_range(0..lane_count);
        self.reset(rng);
        Some(lane)
    }

    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.timer = rng.gen_range(self.cooldown.clone());
    }

    #[cfg(test)]
    pub fn remaining(&self) -> u32 {
        self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Frame indices (1-based) and lanes of the first `count` spawns.
    fn schedule(seed: u64, count: usize) -> Vec<(u64, usize)> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut spawner = Spawner::new(60..=120, &mut rng);
        let mut spawns = Vec::new();
        let mut frame = 0;
        while spawns.len() < count {
            frame += 1;
            if let Some(lane) = spawner.tick(3, &mut rng) {
                spawns.push((frame, lane));
            }
        }
        spawns
    }

    #[test]
    fn spawn_frames_follow_the_seeded_draws() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut expected = Vec::new();
        let mut frame = 0u64;
        let mut delay: u32 = rng.gen_range(60..=120);
        for _ in 0..10 {
            frame += u64::from(delay);
            let lane = rng.gen_range(0..3usize);
            expected.push((frame, lane));
            delay = rng.gen_range(60..=120);
        }

        assert_eq!(schedule(7, 10), expected);
    }

    #[test]
    fn same_seed_same_schedule() {
        assert_eq!(schedule(42, 25), schedule(42, 25));
    }

    #[test]
    fn gaps_stay_within_cooldown() {
        let spawns = schedule(3, 50);
        assert!((60..=120).contains(&spawns[0].0));
        for pair in spawns.windows(2) {
            let gap = pair[1].0 - pair[0].0;
            assert!((60..=120).contains(&gap), "gap {gap} out of range");
        }
        assert!(spawns.iter().all(|(_, lane)| *lane < 3));
    }

    #[test]
    fn reset_redraws_countdown() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut spawner = Spawner::new(60..=120, &mut rng);
        for _ in 0..30 {
            spawner.tick(3, &mut rng);
        }
        spawner.reset(&mut rng);
        assert!((60..=120).contains(&spawner.remaining()));
    }
}
