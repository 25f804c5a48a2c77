use alloc::vec::Vec;
use core::fmt;

use crate::{StyleWrite, TitleSize};

/// The capabilities the engine needs from a rendering target.
///
/// The engine never holds UI objects directly: it only sees opaque `Element` handles (node ids,
/// refs, ...) and talks to the target through this trait. A DOM binding, a retained-mode GUI
/// tree, or a test fake can all implement it.
///
/// Structure queries and geometry reads take `&self`; the only write is [`HeaderHost::apply`].
pub trait HeaderHost {
    /// A non-owning handle to one element.
    type Element: Clone + PartialEq + fmt::Debug + 'static;

    /// Toolbars inside `header`, in document order.
    fn toolbars(&self, header: &Self::Element) -> Vec<Self::Element>;

    /// The first title inside `toolbar`, if any.
    fn title(&self, toolbar: &Self::Element) -> Option<Self::Element>;

    /// The scalable text node inside the title's encapsulated structure.
    fn title_inner(&self, title: &Self::Element) -> Option<Self::Element>;

    /// Button groups inside `toolbar`, in document order.
    fn button_groups(&self, toolbar: &Self::Element) -> Vec<Self::Element>;

    /// Buttons inside a button group, in document order.
    fn buttons(&self, group: &Self::Element) -> Vec<Self::Element>;

    /// The externally set "collapsible" flag of a button.
    fn is_collapsible(&self, button: &Self::Element) -> bool;

    fn title_size(&self, title: &Self::Element) -> TitleSize;

    /// Current vertical scroll offset of a scroll container.
    fn scroll_top(&self, scroll: &Self::Element) -> f32;

    /// Rendered height of an element.
    fn client_height(&self, el: &Self::Element) -> f32;

    /// Applies one style mutation. Implementations must treat it as a full overwrite.
    fn apply(&mut self, el: &Self::Element, write: StyleWrite);
}
