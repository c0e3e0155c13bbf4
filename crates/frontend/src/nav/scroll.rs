//! Hamburger collapse while scrolling on narrow portrait screens.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    /// Returns whether the hamburger should carry `scrolled`, or `None` when
    /// the viewport is not a mobile portrait one. The position is recorded
    /// either way.
    pub fn observe(&mut self, sample: ScrollSample, threshold: f64, max_width: f64) -> Option<bool> {
        let portrait = sample.viewport_width <= max_width && sample.viewport_height > sample.viewport_width;
        let collapsed = sample.offset > self.last_offset && sample.offset > threshold;
        self.last_offset = sample.offset.max(0.0);
        portrait.then_some(collapsed)
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }
}
