// Example: how the large-title scale and the toolbar border react to scroll.
use header_collapse::{ScrollFrame, ScrollSample};

fn main() {
    let toolbar_height = 44.0;
    let remaining_height = 20.0;

    for scroll_top in [-80.0, -50.0, -25.0, 0.0, 10.0, 20.0, 42.0, 64.0, 200.0, 1000.0] {
        let frame = ScrollFrame::compute(
            ScrollSample {
                scroll_top,
                last_toolbar_height: toolbar_height,
            },
            remaining_height,
        );
        println!(
            "scroll_top={scroll_top:>7} scale={:.3} border={}",
            frame.scale,
            frame.border_color()
        );
    }
}
