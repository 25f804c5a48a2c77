//! A headless engine for iOS-style collapsing large-title headers.
//!
//! For adapter-level utilities (frame queue, in-memory element tree, controller), see the
//! `header-collapse-adapter` crate.
//!
//! Two headers take part: a condensed, always-visible *primary* header and a scrollable
//! *collapsing* header carrying the large title. The engine:
//! - indexes each header's toolbars, titles and button groups ([`build_index`]),
//! - turns scroll samples into a continuous title scale and toolbar border alpha
//!   ([`on_scroll`]),
//! - turns intersection facts into discrete active/inactive header modes
//!   ([`on_toolbar_intersection`]).
//!
//! It is UI-agnostic. A TUI/GUI/DOM layer is expected to provide:
//! - a [`HeaderHost`] implementation (structure queries, geometry reads, style writes)
//! - a [`Scheduler`] that runs reads before writes
//! - scroll and intersection signals
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod host;
mod index;
mod intersection;
mod options;
mod scheduler;
pub mod style;
mod transform;
mod types;


pub use host::HeaderHost;
pub use index::{HeaderIndex, ToolbarEntry, build_index};
pub use intersection::{
    IntersectionFact, IntersectionPlan, NO_TRANSLUCENT_CLASS, apply_intersection,
    make_header_active, make_header_inactive, on_toolbar_intersection, set_header_mode,
};
pub use options::{CollapseOptions, DEFAULT_INTERSECTION_THRESHOLD};
pub use scheduler::{ElementOf, Immediate, ReadTask, Scheduler, WriteTask};
pub use style::{
    BORDER_COLOR_PROPERTY, TRANSITION, set_border_color, set_collapsible_buttons_opacity,
    set_opacity, set_title_scale,
};
pub use transform::{
    MAX_BORDER_ALPHA, MAX_TITLE_SCALE, MIN_TITLE_SCALE, SCALE_DISTANCE, ScrollFrame,
    ScrollSample, apply_scroll_frame, on_scroll, sample_scroll,
};
pub use types::{
    Easing, HeaderMode, Rgba, Scale3d, StyleWrite, TitleSize, TransformOrigin, Transition,
};
