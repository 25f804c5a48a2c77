use header_collapse::{CollapseOptions, IntersectionFact, TitleSize};
use header_collapse_adapter::{Controller, ElementTree};

fn main() {
    // Simulate a page with a condensed primary header and a collapsing large-title header.
    let mut tree = ElementTree::new();

    let main = tree.header();
    tree.set_height(main, 44.0);
    let main_toolbar = tree.toolbar(main);
    tree.set_height(main_toolbar, 44.0);
    let (main_title, _) = tree.add_title(main_toolbar, TitleSize::Default);
    let buttons = tree.button_group(main_toolbar);
    let search = tree.button(buttons, true);

    let condense = tree.header();
    let large_toolbar = tree.toolbar(condense);
    tree.set_height(large_toolbar, 52.0);
    let (large_title, large_text) = tree.add_title(large_toolbar, TitleSize::Large);

    let scroll = tree.scroll_container();

    let mut c = Controller::new(CollapseOptions::default());
    if !c.attach(&tree, Some(&main), Some(&condense)) {
        return;
    }
    c.flush(&mut tree);
    println!("observer={:?}", c.observer_config());

    // A real adapter would call these from its scroll / intersection callbacks and flush once
    // per animation frame.
    for (scroll_top, intersecting) in [(-40.0, true), (0.0, true), (30.0, true), (90.0, false)] {
        tree.set_scroll_top(scroll, scroll_top);
        c.on_scroll(scroll);
        c.on_intersection(&[IntersectionFact::new(intersecting)]);
        let stats = c.flush(&mut tree);

        let opacity = |id| tree.style(id).and_then(|s| s.opacity);
        println!(
            "scroll_top={scroll_top:>5} stats={stats:?} main_title={:?} search={:?} large_title={:?} scale={:?} border={:?}",
            opacity(main_title),
            opacity(search),
            opacity(large_title),
            tree.style(large_text).and_then(|s| s.transform),
            tree.style(main_toolbar)
                .and_then(|s| s.property(header_collapse::BORDER_COLOR_PROPERTY)),
        );
    }

    c.detach();
    c.flush(&mut tree);
}
