use alloc::string::String;
use core::fmt;

/// Size variant of a toolbar title. Only [`TitleSize::Large`] titles are scaled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TitleSize {
    #[default]
    Default,
    Small,
    Large,
}

/// Coarse visibility mode of a header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaderMode {
    /// Interactive, full-opacity title, collapsible buttons visible.
    Active,
    /// Faded title, collapsible buttons hidden, translucency suppressed.
    Inactive,
}

/// A CSS color in `rgba(r, g, b, a)` form.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Black with the given alpha (the toolbar border/shadow color).
    pub const fn black(a: f32) -> Self {
        Self::new(0, 0, 0, a)
    }

    pub const TRANSPARENT: Self = Self::black(0.0);
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Normalize -0 so it never reaches a style string.
        let a = if self.a == 0.0 { 0.0 } else { self.a };
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    EaseInOut,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::EaseInOut => "ease-in-out",
        }
    }
}

/// A transition over all animatable properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transition {
    pub duration_ms: u32,
    pub easing: Easing,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.duration_ms as f32 / 1000.0;
        write!(f, "all {}s {}", secs, self.easing.as_css())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransformOrigin {
    LeftCenter,
}

impl TransformOrigin {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::LeftCenter => "left center",
        }
    }
}

/// `scale3d(x, y, z)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale3d {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Scale3d {
    /// Uniform scale in the plane, `z` fixed at 1.
    pub const fn planar(scale: f32) -> Self {
        Self {
            x: scale,
            y: scale,
            z: 1.0,
        }
    }
}

impl fmt::Display for Scale3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scale3d({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A single style mutation handed to [`crate::HeaderHost::apply`].
///
/// Every variant is a full overwrite of one property, so applying the same write twice leaves
/// the element unchanged.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum StyleWrite {
    /// `None` clears the transition so the next change is instantaneous.
    Transition(Option<Transition>),
    Opacity(f32),
    TransformOrigin(TransformOrigin),
    Transform(Scale3d),
    /// A custom property (e.g. `--border-color`).
    Property { name: &'static str, value: String },
    /// Adds (`present = true`) or removes a class flag on the element.
    ClassFlag { name: &'static str, present: bool },
}
