use super::STEP;

/// Outcome of a single animation tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Still travelling toward the next endpoint
    Continuing,
    /// Reached an endpoint; carries the value it snapped to
    Settled(f32),
}

/// Per-node animation progress.
///
/// `scale` travels from `prev_scale` toward `prev_scale + dir` in fixed
/// increments and snaps once it overshoots by a full unit.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct State {
    pub scale: f32,
    pub prev_scale: f32,
    pub dir: f32,
}

impl State {
    /// Advance by one tick
    pub fn update(&mut self) -> Step {
        self.scale += STEP * self.dir;
        if (self.scale - self.prev_scale).abs() > 1.0 {
            self.scale = self.prev_scale + self.dir;
            self.dir = 0.0;
            self.prev_scale = self.scale;
            return Step::Settled(self.prev_scale);
        }
        Step::Continuing
    }

    /// Begin travelling toward the opposite endpoint.
    ///
    /// Returns `false` without touching anything if already animating.
    pub fn start_updating(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        self.dir = 1.0 - 2.0 * self.prev_scale;
        true
    }

    pub fn is_animating(&self) -> bool {
        self.dir != 0.0
    }
}
