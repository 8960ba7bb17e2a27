use std::time::Duration;

/// How the host should schedule the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameRequest {
    /// Deliver a frame on the next turn of the event loop
    NextFrame,
    /// Deliver a frame once the delay has elapsed, without blocking the caller
    After(Duration),
}

/// Running flag gating the animation tick.
///
/// Never sleeps itself; each call hands back a [`FrameRequest`] for the
/// scheduler to honor.
#[derive(Debug, Clone)]
pub struct Driver {
    running: bool,
    delay: Duration,
}

impl Driver {
    pub fn new(delay: Duration) -> Self {
        Self {
            running: false,
            delay,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stopped -> running. Only the first call asks for a frame.
    pub fn start(&mut self) -> Option<FrameRequest> {
        if self.running {
            return None;
        }
        self.running = true;
        Some(FrameRequest::NextFrame)
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Run one tick if running, then ask for the next frame after the delay.
    ///
    /// `tick` returns `true` to stop the driver; the delayed frame is still
    /// requested so the settled state gets drawn.
    pub fn animate(&mut self, tick: impl FnOnce() -> bool) -> Option<FrameRequest> {
        if !self.running {
            return None;
        }
        if tick() {
            self.stop();
        }
        Some(FrameRequest::After(self.delay))
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(super::DEFAULT_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_is_idempotent() {
        let mut driver = Driver::default();
        assert_eq!(driver.start(), Some(FrameRequest::NextFrame));
        assert_eq!(driver.start(), None);
        assert!(driver.is_running());
    }

    #[test]
    fn stop_when_stopped_is_noop() {
        let mut driver = Driver::default();
        driver.stop();
        assert!(!driver.is_running());
        driver.start();
        driver.stop();
        driver.stop();
        assert!(!driver.is_running());
    }

    #[test]
    fn animate_skips_tick_when_stopped() {
        let mut driver = Driver::default();
        let mut ticked = false;
        assert_eq!(driver.animate(|| {
            ticked = true;
            false
        }), None);
        assert!(!ticked);
    }

    #[test]
    fn animate_requests_delayed_frame() {
        let mut driver = Driver::new(Duration::from_millis(35));
        driver.start();
        assert_eq!(
            driver.animate(|| false),
            Some(FrameRequest::After(Duration::from_millis(35)))
        );
        assert!(driver.is_running());

        assert_eq!(
            driver.animate(|| true),
            Some(FrameRequest::After(Duration::from_millis(35)))
        );
        assert!(!driver.is_running());
        assert_eq!(driver.animate(|| false), None);
    }
}
