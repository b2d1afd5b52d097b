//! Application-shell walkthrough: assign slots one by one and print the CSS
//! the rendering layer would receive after each step.
//!
//! Run with `cargo run --example app_dashboard`.

use slotgrid::{AppFrame, JustifyContent, Pane, StyleProps};

fn print_layout(label: &str, frame: &AppFrame<Pane>) {
    let layout = frame.layout();
    println!("== {label} ==");
    println!(
        "grid-template-rows:    {}",
        layout.grid_template_rows.as_deref().unwrap_or("(unset)")
    );
    println!(
        "grid-template-columns: {}",
        layout.grid_template_columns.as_deref().unwrap_or("(unset)")
    );
    println!("grid-template-areas:");
    for line in layout
        .grid_template_areas
        .as_deref()
        .unwrap_or("(unset)")
        .lines()
    {
        println!("  {line}");
    }
    let children: Vec<_> = frame
        .children()
        .map(|pane| {
            format!(
                "{} -> {}",
                pane.content,
                pane.grid_area.unwrap_or("(untagged)")
            )
        })
        .collect();
    println!("children: [{}]", children.join(", "));
    println!();
}

fn main() {
    let style = StyleProps::new()
        .with_grid_gap("8px")
        .with_justify_content(JustifyContent::Center)
        .with_height("100vh");
    let mut frame = AppFrame::with_style(style);

    frame.set_center(Some(Pane::new("editor")));
    print_layout("center only: full bleed", &frame);

    frame.set_header(Some(Pane::new("toolbar")));
    frame.set_footer(Some(Pane::new("status")));
    print_layout("toolbar and status join: middle band merges", &frame);

    frame.set_left_sidebar(Some(Pane::new("files")));
    print_layout("file tree docks left", &frame);

    frame.set_right_sidebar(Some(Pane::new("outline")));
    print_layout("all five slots filled: base geometry", &frame);

    frame.set_center(None);
    print_layout("editor closes: sidebars expand inward", &frame);

    let snapshot = frame.metrics().snapshot();
    println!(
        "{} recomputes, {} area-tag writes",
        snapshot.recomputes, snapshot.child_writes
    );
}
