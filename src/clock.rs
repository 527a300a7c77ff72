use std::thread;
use std::time::{Duration, Instant};

/// Sleeps away whatever is left of each frame so the loop runs at a fixed rate.
pub struct FramePacer {
    target: Duration,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            target: Duration::from_secs(1) / fps.max(1),
            frame_start: Instant::now(),
        }
    }

    #[cfg(test)]
    pub const fn target(&self) -> Duration {
        self.target
    }

    pub fn wait(&mut self) {
        let elapsed = self.frame_start.elapsed();
        match self.target.checked_sub(elapsed) {
            Some(rest) if !rest.is_zero() => thread::sleep(rest),
            _ => log::debug!("frame overran by {:?}", elapsed - self.target),
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_matches_rate() {
        assert_eq!(FramePacer::new(60).target(), Duration::from_secs(1) / 60);
        assert_eq!(FramePacer::new(0).target(), Duration::from_secs(1));
    }

    #[test]
    fn wait_fills_the_frame() {
        let mut pacer = FramePacer::new(100);
        let start = Instant::now();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(9));
    }
}
