//! Grid layout: dot rest positions derived from the container size.

use glam::Vec2;

/// One visual dot.
///
/// `rest` is fixed at (re)build time; `offset` is a temporary displacement
/// written only by the tween that owns it. `animating` guards against a
/// second trigger while a displacement/return pair is in flight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridPoint {
    pub rest: Vec2,
    pub offset: Vec2,
    pub animating: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub cols: usize,
    pub rows: usize,
}

/// Lay out `rows * cols` dots centered within a `width` x `height` container.
///
/// `cell = dot_size + gap`; a container allows one extra gap-width of margin
/// tolerance, so `cols = floor((width + gap) / cell)`. Containers smaller
/// than one cell produce an empty grid rather than an error.
pub fn build_grid(width: f32, height: f32, dot_size: f32, gap: f32) -> (Vec<GridPoint>, GridLayout) {
    let cell = dot_size + gap;
    if cell <= 0.0 || width <= 0.0 || height <= 0.0 {
        return (Vec::new(), GridLayout::default());
    }

    let cols = ((width + gap) / cell).floor().max(0.0) as usize;
    let rows = ((height + gap) / cell).floor().max(0.0) as usize;
    let layout = GridLayout { cols, rows };
    if cols == 0 || rows == 0 {
        return (Vec::new(), layout);
    }

    let grid_w = cell * cols as f32 - gap;
    let grid_h = cell * rows as f32 - gap;
    let start_x = (width - grid_w) / 2.0 + dot_size / 2.0;
    let start_y = (height - grid_h) / 2.0 + dot_size / 2.0;

    let mut points = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            points.push(GridPoint {
                rest: Vec2::new(start_x + col as f32 * cell, start_y + row as f32 * cell),
                offset: Vec2::ZERO,
                animating: false,
            });
        }
    }
    (points, layout)
}
