/// Number of narrative zones; the story container is sized to
/// `ZONE_COUNT * 100vh` so each zone owns one viewport-height of scroll.
pub const ZONE_COUNT: usize = 5;

/// Geometry of the story container at one scroll tick, as reported by the
/// browser: `container_top` is the bounding-rect top relative to the
/// viewport and goes negative once the user has scrolled past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub container_top: f64,
    pub container_height: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    /// How far through the container's scrollable range we are, in [0, 1].
    /// Returns `None` while the layout is degenerate (container not taller
    /// than the viewport), e.g. mid-mount.
    pub fn progress(&self) -> Option<f64> {
        let total = self.container_height - self.viewport_height;
        if total <= 0.0 {
            return None;
        }
        let scrolled = (-self.container_top).max(0.0);
        Some((scrolled / total).clamp(0.0, 1.0))
    }

    /// Maps progress to a discrete zone index in `[0, ZONE_COUNT - 1]`.
    /// Full progress (1.0) stays in the last bucket: 5 buckets, not 6.
    pub fn active_index(&self) -> Option<usize> {
        self.progress()
            .map(|p| ((p * ZONE_COUNT as f64).floor() as usize).min(ZONE_COUNT - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(scrolled: f64, container_height: f64, viewport_height: f64) -> ScrollSample {
        ScrollSample {
            container_top: -scrolled,
            container_height,
            viewport_height,
        }
    }

    #[test]
    fn test_boundary_indices() {
        // total = 3200
        assert_eq!(sample(0.0, 4000.0, 800.0).active_index(), Some(0));
        assert_eq!(sample(1600.0, 4000.0, 800.0).active_index(), Some(2));
        // progress hits exactly 1.0: floor(5.0) clamps into the last bucket
        assert_eq!(sample(3200.0, 4000.0, 800.0).active_index(), Some(4));
    }

    #[test]
    fn test_overscroll_clamps() {
        assert_eq!(sample(9999.0, 4000.0, 800.0).active_index(), Some(4));
        // negative scroll (container still below the fold)
        assert_eq!(sample(-500.0, 4000.0, 800.0).active_index(), Some(0));
    }

    #[test]
    fn test_monotonic_in_scroll() {
        let mut last = 0;
        for step in 0..=320 {
            let scrolled = step as f64 * 10.0;
            let index = sample(scrolled, 4000.0, 800.0).active_index().unwrap();
            assert!(index >= last, "index decreased at scrolled={scrolled}");
            last = index;
        }
        assert_eq!(last, 4);
    }

    #[test]
    fn test_idempotent() {
        let s = sample(1234.5, 4000.0, 800.0);
        assert_eq!(s.active_index(), s.active_index());
        assert_eq!(s.progress(), s.progress());
    }

    #[test]
    fn test_degenerate_geometry() {
        // container exactly viewport-sized
        assert_eq!(sample(100.0, 800.0, 800.0).active_index(), None);
        // container shorter than viewport
        assert_eq!(sample(100.0, 500.0, 800.0).active_index(), None);
        // zero-height container must not produce NaN
        assert_eq!(sample(0.0, 0.0, 0.0).active_index(), None);
    }

    #[test]
    fn test_each_zone_owns_a_fifth() {
        // total = 3200, so each bucket spans 640px of scroll
        assert_eq!(sample(639.0, 4000.0, 800.0).active_index(), Some(0));
        assert_eq!(sample(640.0, 4000.0, 800.0).active_index(), Some(1));
        assert_eq!(sample(1279.0, 4000.0, 800.0).active_index(), Some(1));
        assert_eq!(sample(2560.0, 4000.0, 800.0).active_index(), Some(4));
    }
}
