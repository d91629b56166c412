//! Event-fed state: scroll progress and viewport size.
//!
//! The browser listeners are the only writers. Once [`InputState::detach`]
//! has been called every further event is dropped, so nothing downstream
//! can observe a mutation after teardown.

/// Raw scroll measurements of the scrolling element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Percentage of the scrollable extent covered so far.
    ///
    /// Not clamped: overscroll can push this below 0 or above 100. A page
    /// that cannot scroll (`scroll_height <= client_height`) or any
    /// non-finite input yields `0.0` rather than NaN/infinity.
    pub fn progress(&self) -> f32 {
        let extent = self.scroll_height - self.client_height;
        if !extent.is_finite() || extent <= 0.0 || !self.scroll_top.is_finite() {
            log::debug!("[input] degenerate scroll metrics {:?}, progress=0", self);
            return 0.0;
        }
        ((self.scroll_top / extent) * 100.0) as f32
    }
}

/// Drawing-buffer size in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputState {
    progress: f32,
    viewport: Viewport,
    detached: bool,
}

impl InputState {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            progress: 0.0,
            viewport,
            detached: false,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Recompute progress from fresh scroll metrics. Returns whether the
    /// event was accepted.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if self.detached {
            return false;
        }
        self.progress = metrics.progress();
        true
    }

    /// Record a new drawing-buffer size; zero dimensions are bumped to 1.
    pub fn on_resize(&mut self, width: u32, height: u32) -> bool {
        if self.detached {
            return false;
        }
        self.viewport = Viewport {
            width: width.max(1),
            height: height.max(1),
        };
        true
    }

    /// Stop accepting events. Idempotent.
    pub fn detach(&mut self) {
        self.detached = true;
    }
}
