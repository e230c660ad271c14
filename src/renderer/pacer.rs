//! Fixed-rate frame pacing

use std::time::{Duration, Instant};

use super::{Render, Scene};

/// Sleeps so successive frames are at least `1 / fps` apart
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            next_deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block until the next frame slot; the first call returns immediately
    pub fn wait(&mut self) {
        let now = Instant::now();
        let deadline = match self.next_deadline {
            Some(deadline) if deadline > now => {
                std::thread::sleep(deadline - now);
                deadline
            }
            // Running late: restart the schedule instead of bursting to catch up
            _ => now,
        };
        self.next_deadline = Some(deadline + self.interval);
    }
}

/// Wraps a renderer and paces its output
#[derive(Debug, Clone)]
pub struct Paced<R> {
    pub inner: R,
    pacer: FramePacer,
}

impl<R> Paced<R> {
    pub fn new(inner: R, fps: u32) -> Self {
        Self {
            inner,
            pacer: FramePacer::new(fps),
        }
    }
}

impl<R: Render> Render for Paced<R> {
    type Output = R::Output;

    fn render(&mut self, scene: &Scene) -> R::Output {
        let out = self.inner.render(scene);
        self.pacer.wait();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval() {
        assert_eq!(FramePacer::new(30).interval(), Duration::from_secs_f64(1.0 / 30.0));
        // Zero fps is treated as one frame per second
        assert_eq!(FramePacer::new(0).interval(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_spaces_frames() {
        let mut pacer = FramePacer::new(100);
        let start = Instant::now();
        pacer.wait();
        pacer.wait();
        pacer.wait();
        // Two full intervals after the first slot
        assert!(start.elapsed() >= Duration::from_millis(19));
    }
}
