use crate::*;

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use header_collapse::{
    CollapseOptions, HeaderHost, IntersectionFact, NO_TRANSLUCENT_CLASS, Scale3d, Scheduler,
    StyleWrite, TRANSITION, TitleSize, WriteTask, build_index,
};

struct Page {
    tree: ElementTree,
    main: NodeId,
    main_toolbar: NodeId,
    main_title: NodeId,
    collapsible: NodeId,
    fixed: NodeId,
    condense: NodeId,
    large_toolbar: NodeId,
    large_title: NodeId,
    large_text: NodeId,
    scroll: NodeId,
}

fn page() -> Page {
    let mut tree = ElementTree::new();

    let main = tree.header();
    tree.set_height(main, 44.0);
    let main_toolbar = tree.toolbar(main);
    tree.set_height(main_toolbar, 44.0);
    let (main_title, _) = tree.add_title(main_toolbar, TitleSize::Default);
    let group = tree.button_group(main_toolbar);
    let collapsible = tree.button(group, true);
    let fixed = tree.button(group, false);

    let condense = tree.header();
    let large_toolbar = tree.toolbar(condense);
    tree.set_height(large_toolbar, 52.0);
    let (large_title, large_text) = tree.add_title(large_toolbar, TitleSize::Large);

    let scroll = tree.scroll_container();

    Page {
        tree,
        main,
        main_toolbar,
        main_title,
        collapsible,
        fixed,
        condense,
        large_toolbar,
        large_title,
        large_text,
        scroll,
    }
}

fn attached(p: &mut Page) -> Controller<ElementTree> {
    let mut c = Controller::new(CollapseOptions::default());
    assert!(c.attach(&p.tree, Some(&p.main), Some(&p.condense)));
    c.flush(&mut p.tree);
    c
}

fn border(p: &Page) -> Option<&str> {
    p.tree
        .style(p.main_toolbar)?
        .property(header_collapse::BORDER_COLOR_PROPERTY)
}

#[test]
fn element_tree_queries_follow_document_order() {
    let mut tree = ElementTree::new();
    let header = tree.header();
    let a = tree.toolbar(header);
    let wrap = tree.insert(Some(header), NodeKind::Other);
    let b = tree.toolbar(wrap);
    let c = tree.toolbar(header);
    assert_eq!(tree.toolbars(&header), vec![a, b, c]);

    tree.detach(wrap);
    assert_eq!(tree.toolbars(&header), vec![a, c]);

    assert!(tree.append_child(header, wrap));
    assert_eq!(tree.toolbars(&header), vec![a, c, b]);
}

#[test]
fn element_tree_rejects_cyclic_appends() {
    let mut tree = ElementTree::new();
    let header = tree.header();
    let toolbar = tree.toolbar(header);
    let group = tree.button_group(toolbar);
    let button = tree.button(group, true);

    assert!(!tree.append_child(header, header));
    assert!(!tree.append_child(toolbar, header));
    assert!(!tree.append_child(button, toolbar));

    assert_eq!(tree.toolbars(&header), vec![toolbar]);
    assert_eq!(tree.button_groups(&toolbar), vec![group]);
    assert_eq!(tree.buttons(&group), vec![button]);

    // Moving a node under a sibling subtree is still allowed.
    let other = tree.toolbar(header);
    assert!(tree.append_child(other, group));
    assert!(tree.button_groups(&toolbar).is_empty());
    assert_eq!(tree.button_groups(&other), vec![group]);
}

#[test]
fn element_tree_tolerates_unknown_handles() {
    let mut tree = ElementTree::new();
    let header = tree.header();
    let mut other = ElementTree::new();
    for _ in 0..5 {
        other.header();
    }
    let foreign = other.header();

    assert!(tree.toolbars(&foreign).is_empty());
    assert_eq!(tree.title(&foreign), None);
    assert_eq!(tree.client_height(&foreign), 0.0);
    tree.apply(&foreign, StyleWrite::Opacity(0.0));
    assert_eq!(tree.total_writes(), 0);
    assert!(tree.style(header).is_some());
}

#[test]
fn element_tree_tracks_latest_style() {
    let mut tree = ElementTree::new();
    let el = tree.header();
    tree.apply(
        &el,
        StyleWrite::ClassFlag {
            name: NO_TRANSLUCENT_CLASS,
            present: true,
        },
    );
    tree.apply(&el, StyleWrite::Transition(Some(TRANSITION)));
    tree.apply(&el, StyleWrite::Opacity(0.0));
    tree.apply(&el, StyleWrite::Transition(None));
    tree.apply(&el, StyleWrite::Opacity(1.0));

    let style = tree.style(el).unwrap();
    assert!(style.has_class(NO_TRANSLUCENT_CLASS));
    assert_eq!(style.opacity, Some(1.0));
    assert_eq!(style.transition, None);
    assert_eq!(style.writes, 5);
}

#[test]
fn frame_queue_runs_every_read_before_any_write() {
    let mut p = page();
    let title = p.main_title;
    let target = p.fixed;
    let mut q = FrameQueue::<ElementTree>::new();

    q.write_task(Box::new(move |t: &mut ElementTree| {
        t.apply(&title, StyleWrite::Opacity(0.3));
    }));
    q.read_task(Box::new(move |t: &ElementTree| {
        // Must observe the tree before the write above lands.
        let seen = t.style(title).and_then(|s| s.opacity).unwrap_or(-1.0);
        let write: WriteTask<ElementTree> = Box::new(move |t: &mut ElementTree| {
            t.apply(&target, StyleWrite::Opacity(seen));
        });
        Some(write)
    }));
    q.read_task(Box::new(|_t: &ElementTree| None));
    assert_eq!(q.pending_reads(), 2);
    assert_eq!(q.pending_writes(), 1);

    let stats = q.flush(&mut p.tree);
    assert_eq!(stats, FlushStats { reads: 2, writes: 2 });
    assert!(q.is_idle());
    assert_eq!(p.tree.style(title).unwrap().opacity, Some(0.3));
    assert_eq!(p.tree.style(target).unwrap().opacity, Some(-1.0));

    assert!(q.flush(&mut p.tree).is_empty());
}

#[test]
fn frame_queue_clear_drops_pending_tasks() {
    let mut p = page();
    let title = p.main_title;
    let mut q = FrameQueue::<ElementTree>::new();
    q.write_task(Box::new(move |t: &mut ElementTree| {
        t.apply(&title, StyleWrite::Opacity(0.0));
    }));
    q.clear();
    assert!(q.flush(&mut p.tree).is_empty());
    assert_eq!(p.tree.total_writes(), 0);
}

#[test]
fn attach_requires_both_headers() {
    let p = page();
    let mut c = Controller::<ElementTree>::new(CollapseOptions::default());
    assert!(!c.attach(&p.tree, Some(&p.main), None));
    assert!(!c.attach(&p.tree, None, Some(&p.condense)));
    assert!(!c.is_attached());
    assert!(c.queue().is_idle());
    assert!(!c.on_scroll(p.scroll));
    assert!(!c.on_intersection(&[IntersectionFact::new(true)]));
}

#[test]
fn attach_deactivates_primary_and_configures_observer() {
    let mut p = page();
    let c = attached(&mut p);

    let main = p.tree.style(p.main).unwrap();
    assert!(main.has_class(NO_TRANSLUCENT_CLASS));
    assert!(main.has_class(COLLAPSE_MAIN_CLASS));
    let title = p.tree.style(p.main_title).unwrap();
    assert_eq!(title.opacity, Some(0.0));
    assert_eq!(title.transition, None);
    assert_eq!(p.tree.style(p.collapsible).unwrap().opacity, Some(0.0));
    assert_eq!(p.tree.style(p.fixed).unwrap().opacity, None);

    let observer = c.observer_config().unwrap();
    assert_eq!(observer.target, p.large_toolbar);
    assert_eq!(observer.threshold, 0.25);
    assert_eq!(observer.root_margin_top, -44.0);
}

#[test]
fn observer_is_absent_for_collapsing_header_without_toolbars() {
    let mut p = page();
    let empty = p.tree.header();
    let mut c = Controller::new(CollapseOptions::default());
    assert!(c.attach(&p.tree, Some(&p.main), Some(&empty)));
    assert!(c.observer_config().is_none());
    c.flush(&mut p.tree);
    assert!(c.is_attached());
}

#[test]
fn scroll_is_read_at_flush_time() {
    let mut p = page();
    let mut c = attached(&mut p);

    p.tree.set_scroll_top(p.scroll, 10.0);
    assert!(c.on_scroll(p.scroll));
    assert!(c.on_scroll(p.scroll));
    // Geometry changes before the frame runs; both reads see the latest value.
    p.tree.set_scroll_top(p.scroll, -25.0);
    let stats = c.flush(&mut p.tree);
    assert_eq!(stats, FlushStats { reads: 2, writes: 2 });

    let text = p.tree.style(p.large_text).unwrap();
    let scale = text.transform.unwrap();
    assert!((scale.x - 1.05).abs() < 1e-6);
    assert_eq!(text.transition, None);
    assert_eq!(border(&p), Some("rgba(0, 0, 0, 0)"));
}

#[test]
fn remaining_height_delays_the_border() {
    let mut p = page();
    let mut c = attached(&mut p);
    c.set_options(CollapseOptions::default().with_remaining_height(20.0));

    p.tree.set_scroll_top(p.scroll, 42.0);
    c.on_scroll(p.scroll);
    c.flush(&mut p.tree);
    // (42 - 20) / 44 = 0.5 -> 0.1
    assert_eq!(border(&p), Some("rgba(0, 0, 0, 0.1)"));
}

#[test]
fn intersection_uses_first_entry_only() {
    let mut p = page();
    let mut c = attached(&mut p);

    assert!(!c.on_intersection(&[]));
    assert!(c.on_intersection(&[
        IntersectionFact::new(false),
        IntersectionFact::new(true)
    ]));
    c.flush(&mut p.tree);

    assert_eq!(p.tree.style(p.main_title).unwrap().opacity, Some(1.0));
    assert_eq!(p.tree.style(p.large_title).unwrap().opacity, Some(0.0));
    assert!(!p.tree.style(p.main).unwrap().has_class(NO_TRANSLUCENT_CLASS));
    assert!(
        p.tree
            .style(p.condense)
            .unwrap()
            .has_class(NO_TRANSLUCENT_CLASS)
    );
    assert_eq!(border(&p), Some("rgba(0, 0, 0, 0.2)"));

    c.on_intersection(&[IntersectionFact::new(true)]);
    c.flush(&mut p.tree);
    assert_eq!(p.tree.style(p.main_title).unwrap().opacity, Some(0.0));
    assert_eq!(p.tree.style(p.large_title).unwrap().opacity, Some(1.0));
    assert_eq!(border(&p), Some("rgba(0, 0, 0, 0)"));
}

#[test]
fn disabled_controller_ignores_signals() {
    let mut p = page();
    let mut c = attached(&mut p);
    c.set_options(CollapseOptions::default().with_enabled(false));
    let before = p.tree.total_writes();

    assert!(!c.on_scroll(p.scroll));
    assert!(!c.on_intersection(&[IntersectionFact::new(false)]));
    assert!(c.flush(&mut p.tree).is_empty());
    assert_eq!(p.tree.total_writes(), before);
}

#[test]
fn refresh_rebuilds_indexes() {
    let mut p = page();
    let mut c = attached(&mut p);
    assert_eq!(c.collapsing_index().unwrap().toolbars.len(), 1);

    let extra = p.tree.toolbar(p.condense);
    let (_, extra_text) = p.tree.add_title(extra, TitleSize::Large);
    assert!(c.refresh(&p.tree));
    let index = c.collapsing_index().unwrap();
    assert_eq!(index.toolbars.len(), 2);
    assert_eq!(index, &build_index(&p.tree, Some(&p.condense)).unwrap());

    p.tree.set_scroll_top(p.scroll, -50.0);
    c.on_scroll(p.scroll);
    c.flush(&mut p.tree);
    assert_eq!(
        p.tree.style(extra_text).unwrap().transform,
        Some(Scale3d::planar(1.1))
    );
}

#[test]
fn title_changes_take_effect_without_reindexing() {
    let mut p = page();
    let mut c = attached(&mut p);

    p.tree.set_title_size(p.large_title, TitleSize::Small);
    p.tree.set_scroll_top(p.scroll, -50.0);
    c.on_scroll(p.scroll);
    c.flush(&mut p.tree);
    assert_eq!(p.tree.style(p.large_text).unwrap().transform, None);

    p.tree.set_collapsible(p.fixed, true);
    c.on_intersection(&[IntersectionFact::new(false)]);
    c.flush(&mut p.tree);
    assert_eq!(p.tree.style(p.fixed).unwrap().opacity, Some(1.0));
}

#[test]
fn missing_title_text_skips_scaling() {
    let mut p = page();
    p.tree.clear_shadow(p.large_title);
    let mut c = attached(&mut p);
    assert_eq!(
        c.collapsing_index().unwrap().first_toolbar().unwrap().title_inner,
        None
    );

    p.tree.set_scroll_top(p.scroll, -50.0);
    c.on_scroll(p.scroll);
    c.flush(&mut p.tree);
    assert_eq!(p.tree.style(p.large_text).unwrap().transform, None);
    assert_eq!(border(&p), Some("rgba(0, 0, 0, 0)"));
}

#[test]
fn detach_clears_state_and_class() {
    let mut p = page();
    let mut c = attached(&mut p);
    c.detach();
    assert!(!c.is_attached());
    assert!(c.observer_config().is_none());
    assert!(!c.on_scroll(p.scroll));
    assert!(!c.refresh(&p.tree));

    c.flush(&mut p.tree);
    assert!(!p.tree.style(p.main).unwrap().has_class(COLLAPSE_MAIN_CLASS));
}

#[test]
fn reattach_moves_the_main_class() {
    let mut p = page();
    let mut c = attached(&mut p);

    let other = p.tree.header();
    let toolbar = p.tree.toolbar(other);
    p.tree.add_title(toolbar, TitleSize::Default);
    assert!(c.attach(&p.tree, Some(&other), Some(&p.condense)));
    c.flush(&mut p.tree);

    assert!(!p.tree.style(p.main).unwrap().has_class(COLLAPSE_MAIN_CLASS));
    assert!(p.tree.style(other).unwrap().has_class(COLLAPSE_MAIN_CLASS));
}

#[test]
fn scroll_then_intersection_scenario() {
    let mut p = page();
    p.tree.set_height(p.main_toolbar, 50.0);
    let mut c = attached(&mut p);

    p.tree.set_scroll_top(p.scroll, 250.0);
    c.on_scroll(p.scroll);
    c.flush(&mut p.tree);
    assert_eq!(
        p.tree.style(p.large_text).unwrap().transform,
        Some(Scale3d::planar(1.0))
    );
    assert_eq!(border(&p), Some("rgba(0, 0, 0, 0.2)"));

    c.on_intersection(&[IntersectionFact::new(false)]);
    c.flush(&mut p.tree);
    let seen: Vec<_> = [p.main_title, p.collapsible, p.large_title]
        .iter()
        .map(|&id| p.tree.style(id).unwrap().opacity)
        .collect();
    assert_eq!(seen, vec![Some(1.0), Some(1.0), Some(0.0)]);
    assert_eq!(p.tree.style(p.fixed).unwrap().opacity, None);
    assert_eq!(border(&p), Some("rgba(0, 0, 0, 0.2)"));
}
