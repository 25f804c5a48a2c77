use alloc::boxed::Box;
use alloc::sync::Arc;

use header_collapse::{
    CollapseOptions, HeaderHost, HeaderIndex, IntersectionFact, Scheduler, StyleWrite,
    build_index, make_header_inactive, on_scroll, on_toolbar_intersection,
};

use crate::{FlushStats, FrameQueue};

/// Class flag set on the primary header while a collapsing header is attached to it.
pub const COLLAPSE_MAIN_CLASS: &str = "header-collapse-main";

/// How the host should observe the collapsing header's trigger region.
///
/// The root is the scroll viewport shrunk from the top by the primary header's height, so the
/// trigger "intersects" exactly while it is visible below the primary header.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObserverConfig<E> {
    /// The collapsing header's first toolbar.
    pub target: E,
    pub threshold: f32,
    /// Negative top root margin (`-primary_header_height`).
    pub root_margin_top: f32,
}

/// A framework-neutral controller that wires a primary + collapsing header pair.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `attach` / `refresh` / `detach` around the header lifecycle
/// - `on_scroll` / `on_intersection` when the host reports those signals
/// - `flush(host)` once per frame to run the queued reads and writes
pub struct Controller<H: HeaderHost> {
    options: CollapseOptions,
    queue: FrameQueue<H>,
    containers: Option<(H::Element, H::Element)>,
    primary: Option<Arc<HeaderIndex<H::Element>>>,
    collapsing: Option<Arc<HeaderIndex<H::Element>>>,
    observer: Option<ObserverConfig<H::Element>>,
}

impl<H: HeaderHost> core::fmt::Debug for Controller<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Controller")
            .field("options", &self.options)
            .field("queue", &self.queue)
            .field("primary", &self.primary)
            .field("collapsing", &self.collapsing)
            .field("observer", &self.observer)
            .finish_non_exhaustive()
    }
}

impl<H: HeaderHost + 'static> Controller<H> {
    pub fn new(options: CollapseOptions) -> Self {
        Self {
            options,
            queue: FrameQueue::new(),
            containers: None,
            primary: None,
            collapsing: None,
            observer: None,
        }
    }

    pub fn options(&self) -> &CollapseOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: CollapseOptions) {
        self.options = options;
    }

    pub fn is_attached(&self) -> bool {
        self.primary.is_some() && self.collapsing.is_some()
    }

    pub fn primary_index(&self) -> Option<&HeaderIndex<H::Element>> {
        self.primary.as_deref()
    }

    pub fn collapsing_index(&self) -> Option<&HeaderIndex<H::Element>> {
        self.collapsing.as_deref()
    }

    pub fn observer_config(&self) -> Option<&ObserverConfig<H::Element>> {
        self.observer.as_ref()
    }

    pub fn queue(&self) -> &FrameQueue<H> {
        &self.queue
    }

    /// Indexes both headers and queues their initial state.
    ///
    /// Returns `false` (leaving the controller detached) when either header is absent.
    pub fn attach(
        &mut self,
        host: &H,
        primary: Option<&H::Element>,
        collapsing: Option<&H::Element>,
    ) -> bool {
        let (Some(primary_el), Some(collapsing_el)) = (primary, collapsing) else {
            acdebug!("Controller::attach: missing header");
            return false;
        };
        if self.containers.is_some() {
            self.detach();
        }
        self.containers = Some((primary_el.clone(), collapsing_el.clone()));
        if !self.reindex(host) {
            self.containers = None;
            return false;
        }

        let Some(primary) = self.primary.clone() else {
            return false;
        };
        self.queue.write_task(Box::new(move |host: &mut H| {
            make_header_inactive(host, &primary, false);
            host.apply(
                &primary.container,
                StyleWrite::ClassFlag {
                    name: COLLAPSE_MAIN_CLASS,
                    present: true,
                },
            );
        }));
        acdebug!(observer = self.observer.is_some(), "Controller::attach");
        true
    }

    /// Rebuilds both indexes after the headers' toolbar/title composition changed.
    pub fn refresh(&mut self, host: &H) -> bool {
        let refreshed = self.reindex(host);
        acdebug!(refreshed, observer = self.observer.is_some(), "Controller::refresh");
        refreshed
    }

    fn reindex(&mut self, host: &H) -> bool {
        let Some((primary_el, collapsing_el)) = &self.containers else {
            return false;
        };
        let (Some(primary), Some(collapsing)) = (
            build_index(host, Some(primary_el)),
            build_index(host, Some(collapsing_el)),
        ) else {
            return false;
        };

        self.observer = collapsing.first_toolbar().map(|t| ObserverConfig {
            target: t.toolbar.clone(),
            threshold: self.options.intersection_threshold,
            root_margin_top: -host.client_height(&primary.container),
        });
        self.primary = Some(Arc::new(primary));
        self.collapsing = Some(Arc::new(collapsing));
        true
    }

    /// Drops both indexes and queues removal of the primary header's class flag.
    pub fn detach(&mut self) {
        if let Some((primary_el, _)) = self.containers.take() {
            self.queue.write_task(Box::new(move |host: &mut H| {
                host.apply(
                    &primary_el,
                    StyleWrite::ClassFlag {
                        name: COLLAPSE_MAIN_CLASS,
                        present: false,
                    },
                );
            }));
        }
        self.primary = None;
        self.collapsing = None;
        self.observer = None;
        acdebug!("Controller::detach");
    }

    /// Queues the scroll handler. Returns `false` when detached or disabled.
    pub fn on_scroll(&mut self, scroll: H::Element) -> bool {
        if !self.options.enabled {
            return false;
        }
        let (Some(primary), Some(collapsing)) = (&self.primary, &self.collapsing) else {
            return false;
        };
        actrace!(scroll = ?scroll, "Controller::on_scroll");
        on_scroll(
            &mut self.queue,
            scroll,
            primary,
            collapsing,
            self.options.remaining_height,
        );
        true
    }

    /// Queues the intersection handler for the first entry. Returns `false` when detached,
    /// disabled, or `entries` is empty.
    pub fn on_intersection(&mut self, entries: &[IntersectionFact]) -> bool {
        if !self.options.enabled {
            return false;
        }
        let Some(&fact) = entries.first() else {
            return false;
        };
        let (Some(primary), Some(collapsing)) = (&self.primary, &self.collapsing) else {
            return false;
        };
        actrace!(
            entries = entries.len(),
            is_intersecting = fact.is_intersecting,
            "Controller::on_intersection"
        );
        on_toolbar_intersection(&mut self.queue, fact, primary, collapsing);
        true
    }

    /// Runs one frame of queued reads, then writes.
    pub fn flush(&mut self, host: &mut H) -> FlushStats {
        self.queue.flush(host)
    }
}
