/// Default intersection threshold for the collapsing header's trigger region.
pub const DEFAULT_INTERSECTION_THRESHOLD: f32 = 0.25;

/// Configuration for wiring a primary + collapsing header pair.
///
/// The scale/opacity model itself is fixed; these options only describe how signals are fed
/// into it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CollapseOptions {
    /// When disabled, scroll and intersection signals are ignored.
    pub enabled: bool,

    /// Scroll distance that must pass before the primary toolbar border starts fading in.
    pub remaining_height: f32,

    /// Fraction of the trigger region that must be visible to count as intersecting.
    pub intersection_threshold: f32,
}

impl Default for CollapseOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            remaining_height: 0.0,
            intersection_threshold: DEFAULT_INTERSECTION_THRESHOLD,
        }
    }
}

impl CollapseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_remaining_height(mut self, remaining_height: f32) -> Self {
        self.remaining_height = remaining_height;
        self
    }

    /// Sets the intersection threshold, clamped to `[0, 1]`.
    pub fn with_intersection_threshold(mut self, threshold: f32) -> Self {
        self.intersection_threshold = if threshold.is_nan() {
            DEFAULT_INTERSECTION_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }
}
