/// Bounded integer zoom, in percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    zoom: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: Self::DEFAULT_ZOOM,
        }
    }
}

impl Viewport {
    pub const MIN_ZOOM: u32 = 50;
    pub const MAX_ZOOM: u32 = 150;
    pub const ZOOM_STEP: u32 = 10;
    pub const DEFAULT_ZOOM: u32 = 100;

    pub fn zoom(self) -> u32 {
        self.zoom
    }

    pub fn scale(self) -> f32 {
        self.zoom as f32 / 100.0
    }

    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom + Self::ZOOM_STEP).min(Self::MAX_ZOOM);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self
            .zoom
            .saturating_sub(Self::ZOOM_STEP)
            .max(Self::MIN_ZOOM);
    }

    pub fn reset(&mut self) {
        self.zoom = Self::DEFAULT_ZOOM;
    }

    /// Clamps into range and snaps to the nearest step.
    pub fn set_zoom(&mut self, zoom: u32) {
        let clamped = zoom.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
        let snapped = (clamped + Self::ZOOM_STEP / 2) / Self::ZOOM_STEP * Self::ZOOM_STEP;
        self.zoom = snapped.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
    }

    pub fn can_zoom_in(self) -> bool {
        self.zoom < Self::MAX_ZOOM
    }

    pub fn can_zoom_out(self) -> bool {
        self.zoom > Self::MIN_ZOOM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_at_bounds() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(150);
        viewport.zoom_in();
        assert_eq!(viewport.zoom(), 150);
        assert!(!viewport.can_zoom_in());

        viewport.set_zoom(50);
        viewport.zoom_out();
        assert_eq!(viewport.zoom(), 50);
        assert!(!viewport.can_zoom_out());
    }

    #[test]
    fn reset_after_any_sequence_is_default() {
        let mut viewport = Viewport::default();
        viewport.zoom_in();
        viewport.zoom_in();
        viewport.zoom_out();
        viewport.set_zoom(60);
        viewport.reset();
        assert_eq!(viewport.zoom(), 100);
        assert!((viewport.scale() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn set_zoom_then_step_up_to_ceiling() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(70);
        viewport.zoom_in();
        assert_eq!(viewport.zoom(), 80);

        for _ in 0..5 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.zoom(), 130);

        viewport.zoom_in();
        viewport.zoom_in();
        assert_eq!(viewport.zoom(), 150);
        viewport.zoom_in();
        assert_eq!(viewport.zoom(), 150);
    }

    #[test]
    fn set_zoom_snaps_and_clamps() {
        let mut viewport = Viewport::default();
        viewport.set_zoom(0);
        assert_eq!(viewport.zoom(), 50);
        viewport.set_zoom(1_000);
        assert_eq!(viewport.zoom(), 150);
        viewport.set_zoom(84);
        assert_eq!(viewport.zoom(), 80);
        viewport.set_zoom(85);
        assert_eq!(viewport.zoom(), 90);
    }
}
