use ratatui::style::Color;

/// Axis-aligned rectangle in surface units, relative to the current origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[cfg(test)]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[cfg(test)]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Something the view can paint into.
///
/// Translations accumulate until `restore` pops back to the matching `save`.
pub trait Surface {
    fn size(&self) -> (f32, f32);
    fn fill_background(&mut self, color: Color);
    fn save(&mut self);
    fn translate(&mut self, dx: f32, dy: f32);
    fn restore(&mut self);
    fn fill_rect(&mut self, rect: RectF, color: Color);
}

/// Run `draw` with the origin shifted by `(dx, dy)`, then put it back
pub fn translated<S, F>(surface: &mut S, dx: f32, dy: f32, draw: F)
where
    S: Surface + ?Sized,
    F: FnOnce(&mut S),
{
    surface.save();
    surface.translate(dx, dy);
    draw(surface);
    surface.restore();
}

/// Stack of translation offsets shared by surface implementations
#[derive(Debug, Clone, Default)]
pub struct Transform {
    origin: (f32, f32),
    saved: Vec<(f32, f32)>,
}

impl Transform {
    pub fn save(&mut self) {
        self.saved.push(self.origin);
    }

    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.origin.0 += dx;
        self.origin.1 += dy;
    }

    /// Unbalanced restores leave the origin untouched
    pub fn restore(&mut self) {
        if let Some(origin) = self.saved.pop() {
            self.origin = origin;
        }
    }

    pub fn apply(&self, rect: RectF) -> RectF {
        let (dx, dy) = self.origin;
        RectF::new(rect.left + dx, rect.top + dy, rect.right + dx, rect.bottom + dy)
    }
}

#[cfg(test)]
pub mod recording {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Background(Color),
        Rect(RectF, Color),
    }

    /// Test double that keeps every draw call in absolute coordinates
    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub width: f32,
        pub height: f32,
        pub ops: Vec<Op>,
        transform: Transform,
    }

    impl RecordingSurface {
        pub fn new(width: f32, height: f32) -> Self {
            Self {
                width,
                height,
                ..Default::default()
            }
        }

        pub fn rects(&self) -> Vec<RectF> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Rect(r, _) => Some(*r),
                    Op::Background(_) => None,
                })
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (self.width, self.height)
        }

        fn fill_background(&mut self, color: Color) {
            self.ops.push(Op::Background(color));
        }

        fn save(&mut self) {
            self.transform.save();
        }

        fn translate(&mut self, dx: f32, dy: f32) {
            self.transform.translate(dx, dy);
        }

        fn restore(&mut self) {
            self.transform.restore();
        }

        fn fill_rect(&mut self, rect: RectF, color: Color) {
            self.ops.push(Op::Rect(self.transform.apply(rect), color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::recording::RecordingSurface;
    use super::*;

    #[test]
    fn translation_does_not_leak_past_restore() {
        let mut surface = RecordingSurface::new(10.0, 10.0);
        translated(&mut surface, 2.0, 3.0, |s| {
            s.fill_rect(RectF::new(0.0, 0.0, 1.0, 1.0), Color::Red);
        });
        surface.fill_rect(RectF::new(0.0, 0.0, 1.0, 1.0), Color::Red);

        let rects = surface.rects();
        assert_eq!(rects[0], RectF::new(2.0, 3.0, 3.0, 4.0));
        assert_eq!(rects[1], RectF::new(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn nested_translations_accumulate() {
        let mut t = Transform::default();
        t.save();
        t.translate(1.0, 1.0);
        t.save();
        t.translate(0.0, 5.0);
        assert_eq!(t.apply(RectF::new(0.0, 0.0, 1.0, 1.0)).top, 6.0);
        t.restore();
        assert_eq!(t.apply(RectF::new(0.0, 0.0, 1.0, 1.0)).top, 1.0);
        t.restore();
        t.restore();
        assert_eq!(t.apply(RectF::new(0.0, 0.0, 1.0, 1.0)).top, 0.0);
    }
}
