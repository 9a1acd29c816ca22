// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A simulated photo grid: fixed-size tiles in five columns.
//!
//! Grids pad the space above the window with one empty cell per hidden photo,
//! so the printed layout below keeps every tile in its column.
//!
//! Run:
//! - `cargo run -p understory_demos --example recycled_grid`

use understory_recycler::{
    Axis, Child, Diagnostic, Filler, GridStrategy, LayoutDescriptor, Poolable, RecyclerConfig,
    RecyclingList, VisualItem,
};

const COLUMNS: usize = 5;

#[derive(Debug, Default)]
struct Tile {
    caption: String,
}

impl Poolable for Tile {
    fn set_active(&mut self, active: bool) {
        if !active {
            self.caption.clear();
        }
    }
}

impl VisualItem<u32> for Tile {
    fn bind(&mut self, _index: usize, photo: &u32) {
        self.caption = format!("IMG{photo:04}");
    }
}

#[derive(Debug, Default)]
struct EmptyCell;

impl Poolable for EmptyCell {
    fn set_active(&mut self, _active: bool) {}
}

impl Filler for EmptyCell {
    fn set_ignore_layout(&mut self, _ignore: bool) {}
    fn set_main_extent(&mut self, _axis: Axis, _extent: f64) {}
}

fn main() {
    let photos: Vec<u32> = (1..=97).collect();

    let mut grid = RecyclingList::new(
        RecyclerConfig::new(Axis::Vertical, 64.0).with_prewarm_fillers(COLUMNS * 4),
        GridStrategy::new(|| EmptyCell),
        Tile::default,
    )
    .with_diagnostics(|d: &Diagnostic| eprintln!("warning: {d}"));

    // A real host reads this from its grid layout component. Leaving the
    // column count out makes the grid warn and fall back to one column.
    let descriptor = LayoutDescriptor::new().with_columns(COLUMNS);
    if let Err(err) = grid.setup(Some(&descriptor)) {
        eprintln!("setup failed: {err}");
        return;
    }

    for scroll in [0.0, 0.1, 0.5, 1.0] {
        let changes = grid.update(&photos, 200.0, scroll);
        println!("\nscroll {scroll:.1}, changes {changes:?}");
        draw(&grid);
    }
}

fn draw(grid: &RecyclingList<Tile, GridStrategy<EmptyCell>>) {
    let mut cells = Vec::new();
    for child in grid.children().iter() {
        match child {
            Child::Filler(_) => cells.push(String::from("   .   ")),
            Child::Item(id) => {
                if let Some(tile) = grid.item(id) {
                    cells.push(format!("{:^7}", tile.caption));
                }
            }
        }
    }
    let hidden_rows = grid.children().filler_count() / COLUMNS;
    // Print the spacer rows compactly, then the visible tiles row by row.
    if hidden_rows > 0 {
        println!("  ({hidden_rows} rows above)");
    }
    let skip = hidden_rows * COLUMNS;
    for row in cells[skip..].chunks(COLUMNS) {
        println!("  {}", row.join(" "));
    }
}
