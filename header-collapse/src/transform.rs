use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::style::{scale_large_titles, set_border_color};
use crate::{ElementOf, HeaderHost, HeaderIndex, ReadTask, Rgba, Scheduler, WriteTask};

/// Scroll distance over which the large title grows by 100%.
pub const SCALE_DISTANCE: f32 = 500.0;
/// Largest title scale reached while pulling past the top.
pub const MAX_TITLE_SCALE: f32 = 1.1;
/// Natural title scale; scrolling down never shrinks below it.
pub const MIN_TITLE_SCALE: f32 = 1.0;
/// Alpha of the primary toolbar border at full intensity.
pub const MAX_BORDER_ALPHA: f32 = 0.2;

/// Geometry captured in the read phase of a scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSample {
    pub scroll_top: f32,
    /// Height of the primary header's last toolbar (0 when it has none).
    pub last_toolbar_height: f32,
}

/// Styles derived from one [`ScrollSample`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollFrame {
    /// Large-title scale in `[MIN_TITLE_SCALE, MAX_TITLE_SCALE]`.
    pub scale: f32,
    /// Border intensity in `[0, 1]`, before scaling by [`MAX_BORDER_ALPHA`].
    pub border_opacity: f32,
}

impl ScrollFrame {
    pub fn compute(sample: ScrollSample, remaining_height: f32) -> Self {
        let scroll_top = finite_or_zero(sample.scroll_top);
        let height = finite_or_zero(sample.last_toolbar_height);
        let remaining_height = finite_or_zero(remaining_height);

        let scale =
            (1.0 + (-scroll_top / SCALE_DISTANCE)).clamp(MIN_TITLE_SCALE, MAX_TITLE_SCALE);

        let past = scroll_top - remaining_height;
        let border_opacity = if height > 0.0 {
            (past / height).clamp(0.0, 1.0)
        } else if past > 0.0 {
            1.0
        } else {
            0.0
        };

        Self {
            scale,
            border_opacity,
        }
    }

    /// The border alpha actually written: `border_opacity * MAX_BORDER_ALPHA`.
    pub fn scaled_border_opacity(&self) -> f32 {
        self.border_opacity * MAX_BORDER_ALPHA
    }

    pub fn border_color(&self) -> Rgba {
        Rgba::black(self.scaled_border_opacity())
    }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() {
        v
    } else {
        hcwarn!(value = v, "non-finite geometry treated as 0");
        0.0
    }
}

/// Read phase: samples the scroll offset and the primary header's last toolbar height.
pub fn sample_scroll<H: HeaderHost>(
    host: &H,
    scroll: &H::Element,
    primary: &HeaderIndex<H::Element>,
) -> ScrollSample {
    let last_toolbar_height = primary
        .last_toolbar()
        .map(|t| host.client_height(&t.toolbar))
        .unwrap_or(0.0);
    ScrollSample {
        scroll_top: host.scroll_top(scroll),
        last_toolbar_height,
    }
}

/// Write phase: scales the collapsing header's large titles (instantly) and sets the primary
/// header's last toolbar border.
pub fn apply_scroll_frame<H: HeaderHost>(
    host: &mut H,
    frame: ScrollFrame,
    primary: &HeaderIndex<H::Element>,
    collapsing: &HeaderIndex<H::Element>,
) {
    let _scaled = scale_large_titles(host, &collapsing.toolbars, frame.scale, false);
    set_border_color(host, primary.last_toolbar(), frame.border_color());
    hctrace!(
        scale = frame.scale,
        border_opacity = frame.border_opacity,
        scaled = _scaled,
        "apply_scroll_frame"
    );
}

/// Handles one scroll sample: schedules a read of the current geometry followed by the writes
/// derived from it.
///
/// Every write is a full recomputation from that read, so a stale in-flight frame is simply
/// overwritten by the next one.
pub fn on_scroll<S>(
    scheduler: &mut S,
    scroll: ElementOf<S>,
    primary: &Arc<HeaderIndex<ElementOf<S>>>,
    collapsing: &Arc<HeaderIndex<ElementOf<S>>>,
    remaining_height: f32,
) where
    S: Scheduler + ?Sized,
    S::Host: 'static,
{
    scheduler.read_task(scroll_task::<S::Host>(
        scroll,
        Arc::clone(primary),
        Arc::clone(collapsing),
        remaining_height,
    ));
}

fn scroll_task<H: HeaderHost + 'static>(
    scroll: H::Element,
    primary: Arc<HeaderIndex<H::Element>>,
    collapsing: Arc<HeaderIndex<H::Element>>,
    remaining_height: f32,
) -> ReadTask<H> {
    Box::new(move |host: &H| {
        let sample = sample_scroll(host, &scroll, &primary);
        let frame = ScrollFrame::compute(sample, remaining_height);
        hctrace!(
            scroll_top = sample.scroll_top,
            last_toolbar_height = sample.last_toolbar_height,
            "on_scroll: read"
        );
        let write: WriteTask<H> = Box::new(move |host: &mut H| {
            apply_scroll_frame(host, frame, &primary, &collapsing);
        });
        Some(write)
    })
}
