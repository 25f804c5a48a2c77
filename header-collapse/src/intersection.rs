use alloc::boxed::Box;
use alloc::sync::Arc;

use crate::style::{set_border_color, set_collapsible_buttons_opacity, set_opacity};
use crate::transform::MAX_BORDER_ALPHA;
use crate::{
    ElementOf, HeaderHost, HeaderIndex, HeaderMode, Rgba, Scheduler, StyleWrite, WriteTask,
};

/// Class flag that suppresses background translucency on an inactive header.
pub const NO_TRANSLUCENT_CLASS: &str = "no-translucent";

/// Whether the collapsing header's trigger region currently intersects its threshold boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionFact {
    pub is_intersecting: bool,
}

impl IntersectionFact {
    pub const fn new(is_intersecting: bool) -> Self {
        Self { is_intersecting }
    }
}

/// The discrete outcome of one intersection event.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntersectionPlan {
    pub primary: HeaderMode,
    pub primary_animated: bool,
    pub collapsing: HeaderMode,
    pub collapsing_animated: bool,
    /// Border color of the primary header's last toolbar.
    pub border: Rgba,
}

impl IntersectionPlan {
    /// The transition table. Depends only on `fact`, never on the previous state.
    pub fn for_fact(fact: IntersectionFact) -> Self {
        if fact.is_intersecting {
            Self {
                primary: HeaderMode::Inactive,
                primary_animated: true,
                collapsing: HeaderMode::Active,
                collapsing_animated: false,
                border: Rgba::TRANSPARENT,
            }
        } else {
            Self {
                primary: HeaderMode::Active,
                primary_animated: true,
                collapsing: HeaderMode::Inactive,
                collapsing_animated: true,
                border: Rgba::black(MAX_BORDER_ALPHA),
            }
        }
    }
}

/// Deactivates a header: suppresses translucency, then fades out the first toolbar's title and
/// hides its collapsible buttons.
///
/// The class flag is always set. Returns `false` when there was no first-toolbar title to fade.
pub fn make_header_inactive<H: HeaderHost>(
    host: &mut H,
    index: &HeaderIndex<H::Element>,
    animated: bool,
) -> bool {
    host.apply(
        &index.container,
        StyleWrite::ClassFlag {
            name: NO_TRANSLUCENT_CLASS,
            present: true,
        },
    );

    let Some(first) = index.first_toolbar() else {
        hctrace!(container = ?index.container, "make_header_inactive: no toolbar");
        return false;
    };
    let Some(title) = &first.title else {
        hctrace!(toolbar = ?first.toolbar, "make_header_inactive: no title");
        return false;
    };

    hctrace!(container = ?index.container, animated, "make_header_inactive");
    set_opacity(host, title, 0.0, animated);
    set_collapsible_buttons_opacity(host, &first.action_groups, 0.0, animated);
    true
}

/// Activates a header: shows the first toolbar's title and collapsible buttons, then lifts the
/// translucency suppression.
///
/// Returns `false` (writing nothing) when the header has no first-toolbar title.
pub fn make_header_active<H: HeaderHost>(
    host: &mut H,
    index: &HeaderIndex<H::Element>,
    animated: bool,
) -> bool {
    let Some(first) = index.first_toolbar() else {
        hctrace!(container = ?index.container, "make_header_active: no toolbar");
        return false;
    };
    let Some(title) = &first.title else {
        hctrace!(toolbar = ?first.toolbar, "make_header_active: no title");
        return false;
    };

    hctrace!(container = ?index.container, animated, "make_header_active");
    set_opacity(host, title, 1.0, animated);
    set_collapsible_buttons_opacity(host, &first.action_groups, 1.0, animated);
    host.apply(
        &index.container,
        StyleWrite::ClassFlag {
            name: NO_TRANSLUCENT_CLASS,
            present: false,
        },
    );
    true
}

pub fn set_header_mode<H: HeaderHost>(
    host: &mut H,
    index: &HeaderIndex<H::Element>,
    mode: HeaderMode,
    animated: bool,
) -> bool {
    match mode {
        HeaderMode::Active => make_header_active(host, index, animated),
        HeaderMode::Inactive => make_header_inactive(host, index, animated),
    }
}

/// Applies a plan to both headers, primary first, then the border.
pub fn apply_intersection<H: HeaderHost>(
    host: &mut H,
    plan: IntersectionPlan,
    primary: &HeaderIndex<H::Element>,
    collapsing: &HeaderIndex<H::Element>,
) {
    set_header_mode(host, primary, plan.primary, plan.primary_animated);
    set_header_mode(host, collapsing, plan.collapsing, plan.collapsing_animated);
    set_border_color(host, primary.last_toolbar(), plan.border);
}

/// Handles one intersection event by scheduling a single write that updates both headers.
pub fn on_toolbar_intersection<S>(
    scheduler: &mut S,
    fact: IntersectionFact,
    primary: &Arc<HeaderIndex<ElementOf<S>>>,
    collapsing: &Arc<HeaderIndex<ElementOf<S>>>,
) where
    S: Scheduler + ?Sized,
    S::Host: 'static,
{
    let plan = IntersectionPlan::for_fact(fact);
    hcdebug!(
        is_intersecting = fact.is_intersecting,
        primary = ?plan.primary,
        collapsing = ?plan.collapsing,
        "on_toolbar_intersection"
    );
    scheduler.write_task(intersection_task::<S::Host>(
        plan,
        Arc::clone(primary),
        Arc::clone(collapsing),
    ));
}

fn intersection_task<H: HeaderHost + 'static>(
    plan: IntersectionPlan,
    primary: Arc<HeaderIndex<H::Element>>,
    collapsing: Arc<HeaderIndex<H::Element>>,
) -> WriteTask<H> {
    Box::new(move |host: &mut H| {
        apply_intersection(host, plan, &primary, &collapsing);
    })
}
