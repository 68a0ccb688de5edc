use std::time::{Duration, Instant};

/// Monotonic span timer.
#[derive(Debug, Copy, Clone)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    #[inline]
    pub fn start() -> Self {
        Self { started: Instant::now() }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let w = Stopwatch::start();
        let a = w.elapsed();
        let b = w.elapsed();
        assert!(b >= a);
    }
}
