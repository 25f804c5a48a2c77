//! Style primitives. These are the only functions that write styles.
use alloc::string::ToString;

use crate::{
    Easing, HeaderHost, Rgba, Scale3d, StyleWrite, TitleSize, ToolbarEntry, Transition,
    TransformOrigin,
};

/// The transition attached to animated writes: `all 0.2s ease-in-out`.
pub const TRANSITION: Transition = Transition {
    duration_ms: 200,
    easing: Easing::EaseInOut,
};

/// Custom property holding a toolbar's border color.
pub const BORDER_COLOR_PROPERTY: &str = "--border-color";

fn transition_for(animated: bool) -> StyleWrite {
    StyleWrite::Transition(animated.then_some(TRANSITION))
}

/// Sets `el`'s opacity. `animated` attaches [`TRANSITION`], otherwise the transition is cleared.
pub fn set_opacity<H: HeaderHost>(host: &mut H, el: &H::Element, value: f32, animated: bool) {
    hctrace!(el = ?el, value, animated, "set_opacity");
    host.apply(el, transition_for(animated));
    host.apply(el, StyleWrite::Opacity(value));
}

/// Sets the toolbar's border color. No-op when `toolbar` is `None`.
pub fn set_border_color<H: HeaderHost>(
    host: &mut H,
    toolbar: Option<&ToolbarEntry<H::Element>>,
    color: Rgba,
) {
    let Some(toolbar) = toolbar else {
        return;
    };
    hctrace!(toolbar = ?toolbar.toolbar, color = %color, "set_border_color");
    host.apply(
        &toolbar.toolbar,
        StyleWrite::Property {
            name: BORDER_COLOR_PROPERTY,
            value: color.to_string(),
        },
    );
}

/// Scales a toolbar's large title around its left-center point.
///
/// Returns `false` (and writes nothing) when the toolbar has no title, the title isn't the
/// large variant, or the inner scalable node is missing. The flag is what lets
/// [`scale_large_titles`] report how many titles a frame actually scaled.
pub fn set_title_scale<H: HeaderHost>(
    host: &mut H,
    toolbar: &ToolbarEntry<H::Element>,
    scale: f32,
    animated: bool,
) -> bool {
    let Some(title) = &toolbar.title else {
        return false;
    };
    if host.title_size(title) != TitleSize::Large {
        return false;
    }
    let Some(inner) = &toolbar.title_inner else {
        hcwarn!(toolbar = ?toolbar.toolbar, "large title without an inner node");
        return false;
    };

    host.apply(inner, StyleWrite::TransformOrigin(TransformOrigin::LeftCenter));
    host.apply(inner, transition_for(animated));
    host.apply(inner, StyleWrite::Transform(Scale3d::planar(scale)));
    true
}

/// Sets the opacity of every collapsible button in `groups`. Other buttons are untouched.
pub fn set_collapsible_buttons_opacity<H: HeaderHost>(
    host: &mut H,
    groups: &[H::Element],
    value: f32,
    animated: bool,
) {
    for group in groups {
        for button in host.buttons(group) {
            if !host.is_collapsible(&button) {
                continue;
            }
            set_opacity(host, &button, value, animated);
        }
    }
}

/// Scales every large title among `toolbars`. Returns how many titles were scaled.
pub fn scale_large_titles<H: HeaderHost>(
    host: &mut H,
    toolbars: &[ToolbarEntry<H::Element>],
    scale: f32,
    animated: bool,
) -> usize {
    toolbars
        .iter()
        .filter(|toolbar| set_title_scale(host, toolbar, scale, animated))
        .count()
}
