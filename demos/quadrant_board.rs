//! Quadrant-board walkthrough: watch columns absorb their empty neighbours.
//!
//! Run with `cargo run --example quadrant_board`.

use slotgrid::{Pane, QuadFrame};

fn print_areas(label: &str, frame: &QuadFrame<Pane>) {
    println!("== {label} ==");
    for line in frame
        .layout()
        .grid_template_areas
        .as_deref()
        .unwrap_or("(unset)")
        .lines()
    {
        println!("  {line}");
    }
    println!();
}

fn main() {
    let mut frame = QuadFrame::new();

    frame.set_top_left(Some(Pane::new("chart")));
    print_areas("one pane: full bleed", &frame);

    frame.set_bottom_right(Some(Pane::new("table")));
    print_areas("diagonal panes: columns merge vertically", &frame);

    frame.set_top_right(Some(Pane::new("legend")));
    print_areas("legend arrives: only the bottom-left gap remains", &frame);

    frame.set_bottom_left(Some(Pane::new("filters")));
    print_areas("all four quadrants filled", &frame);

    frame.set_top_right(None);
    frame.set_bottom_right(None);
    print_areas("right column empties: absorbed row by row", &frame);
}
