use alloc::vec::Vec;

use crate::HeaderHost;

/// One toolbar of an indexed header.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarEntry<E> {
    pub toolbar: E,
    /// The toolbar's first title, if any.
    pub title: Option<E>,
    /// The scalable node inside `title`. Always `None` when `title` is `None`.
    pub title_inner: Option<E>,
    pub action_groups: Vec<E>,
}

/// An immutable snapshot of a header's structure.
///
/// Rebuild it with [`build_index`] whenever the header's toolbar/title composition changes; it
/// is never patched in place. It only holds handles, never the elements themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderIndex<E> {
    pub container: E,
    /// Toolbars in document order. May be empty.
    pub toolbars: Vec<ToolbarEntry<E>>,
}

impl<E> HeaderIndex<E> {
    pub fn first_toolbar(&self) -> Option<&ToolbarEntry<E>> {
        self.toolbars.first()
    }

    pub fn last_toolbar(&self) -> Option<&ToolbarEntry<E>> {
        self.toolbars.last()
    }

    pub fn is_empty(&self) -> bool {
        self.toolbars.is_empty()
    }
}

/// Indexes a header container.
///
/// Returns `None` when `header` is `None`. This is a pure read: it performs no writes and should
/// run in a read phase.
pub fn build_index<H: HeaderHost>(
    host: &H,
    header: Option<&H::Element>,
) -> Option<HeaderIndex<H::Element>> {
    let header = header?;

    let toolbars: Vec<_> = host
        .toolbars(header)
        .into_iter()
        .map(|toolbar| {
            let title = host.title(&toolbar);
            let title_inner = title.as_ref().and_then(|t| host.title_inner(t));
            let action_groups = host.button_groups(&toolbar);
            ToolbarEntry {
                toolbar,
                title,
                title_inner,
                action_groups,
            }
        })
        .collect();

    hctrace!(toolbars = toolbars.len(), "build_index");
    Some(HeaderIndex {
        container: header.clone(),
        toolbars,
    })
}
