//! Frame-rate limiting for hosts that drive the loop themselves.

use std::time::{Duration, Instant};

/// Blocks until the next frame is due.
pub trait FrameThrottle {
    fn wait(&mut self);
}

/// Caps the loop at a fixed number of frames per second by sleeping off the
/// remainder of each frame period.
#[derive(Debug)]
pub struct FixedRateThrottle {
    period: Duration,
    last_tick: Option<Instant>,
}

impl FixedRateThrottle {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / frames_per_second.max(1),
            last_tick: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl FrameThrottle for FixedRateThrottle {
    fn wait(&mut self) {
        if let Some(last) = self.last_tick {
            let elapsed = last.elapsed();
            if elapsed < self.period {
                std::thread::sleep(self.period - elapsed);
            }
        }
        self.last_tick = Some(Instant::now());
    }
}

/// Never waits. For tests and benchmarks.
#[derive(Debug, Default, Clone, Copy)]
pub struct Unthrottled;

impl FrameThrottle for Unthrottled {
    fn wait(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn period_at_six_fps() {
        let throttle = FixedRateThrottle::new(6);
        assert_eq!(throttle.period(), Duration::from_nanos(166_666_666));
    }

    #[test]
    fn zero_fps_is_treated_as_one() {
        assert_eq!(FixedRateThrottle::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn first_wait_returns_immediately() {
        let mut throttle = FixedRateThrottle::new(1);
        let start = Instant::now();
        throttle.wait();
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn second_wait_blocks_for_the_period() {
        let mut throttle = FixedRateThrottle::new(50);
        throttle.wait();
        let start = Instant::now();
        throttle.wait();
        assert!(start.elapsed() >= Duration::from_millis(15));
    }
}
