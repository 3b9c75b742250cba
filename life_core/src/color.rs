// color.rs - Freshness fade and HSV colouring of live cells

use crate::grid::Cell;

/// Upper bound of the fade; the fade floor is `1.0 - MAX_AGE`.
pub const MAX_AGE: f64 = 0.8;
/// Frames per second of the retrace the fade is tuned for.
pub const FADE_FRAMES: f64 = 60.0;

const HUE_SATURATION: f32 = 0.7;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Saturation 0, brightness inverted from freshness, on white.
    #[default]
    Grayscale,
    /// Rotating hue, brightness follows freshness, on black.
    Hue,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Grayscale => ColorMode::Hue,
            ColorMode::Hue => ColorMode::Grayscale,
        }
    }
}

impl From<bool> for ColorMode {
    fn from(hue: bool) -> Self {
        if hue { ColorMode::Hue } else { ColorMode::Grayscale }
    }
}

/// Freshness of a cell: 1.0 on the frame it flipped, falling linearly to
/// 0.2 after 48 frames and holding there.
pub fn age(frame: u32, last_changed: u32) -> f32 {
    let elapsed = f64::from(frame.wrapping_sub(last_changed)) / FADE_FRAMES;
    (MAX_AGE - MAX_AGE.min(elapsed) + (1.0 - MAX_AGE)) as f32
}

/// Hue in degrees for the cell at `(row, col)` of a `rows` x `cols` board.
pub fn hue(row: usize, col: usize, rows: usize, cols: usize, frame: u32) -> f32 {
    let y_norm = (row + 1) as f32 / rows as f32;
    let x_norm = (col + 1) as f32 / cols as f32;
    // frame mod 360 first so large counters keep full float precision
    (x_norm * 0.01 * y_norm * 360.0 + (frame % 360) as f32) % 360.0
}

/// Standard chroma / hue-sector conversion. `h` in degrees `[0, 360]`,
/// `s` and `v` in `[0, 1]`. Channels are truncated, not rounded.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Rgb {
    let chroma = v * s;
    let hprime = h / 60.0;
    let x = chroma * (1.0 - ((hprime % 2.0) - 1.0).abs());

    let (r, g, b) = if hprime <= 1.0 {
        (chroma, x, 0.0)
    } else if hprime <= 2.0 {
        (x, chroma, 0.0)
    } else if hprime <= 3.0 {
        (0.0, chroma, x)
    } else if hprime <= 4.0 {
        (0.0, x, chroma)
    } else if hprime <= 5.0 {
        (x, 0.0, chroma)
    } else if hprime <= 6.0 {
        (chroma, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    let m = v - chroma;
    Rgb::new(channel(r + m), channel(g + m), channel(b + m))
}

fn channel(value: f32) -> u8 {
    // `as` saturates and truncates toward zero
    (value * 255.0) as u8
}

/// Colour of a live cell for the given frame and mode.
pub fn color_for<const ROWS: usize, const COLS: usize>(
    cell: Cell,
    row: usize,
    col: usize,
    frame: u32,
    mode: ColorMode,
) -> Rgb {
    let age = age(frame, cell.last_changed);
    let hue = hue(row, col, ROWS, COLS, frame);
    match mode {
        ColorMode::Hue => hsv_to_rgb(hue, HUE_SATURATION, age),
        ColorMode::Grayscale => hsv_to_rgb(hue, 0.0, 1.0 - age),
    }
}

/// Clear colour drawn under the cells.
pub fn background(mode: ColorMode) -> Rgb {
    match mode {
        ColorMode::Hue => Rgb::BLACK,
        ColorMode::Grayscale => Rgb::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{CELLS_X, CELLS_Y, CellState};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn age_starts_at_one_and_floors() {
        assert!(close(age(100, 100), 1.0));
        assert!(close(age(106, 100), 0.9));
        assert!(close(age(148, 100), 0.2));
        assert!(close(age(10_000, 100), 0.2));
    }

    #[test]
    fn age_is_non_increasing() {
        let mut prev = age(0, 0);
        for frame in 1..200 {
            let next = age(frame, 0);
            assert!(next <= prev, "age rose at frame {frame}");
            prev = next;
        }
    }

    #[test]
    fn hsv_reference_points() {
        assert_eq!(hsv_to_rgb(0.0, 0.0, 1.0), Rgb::WHITE);
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
        assert_eq!(hsv_to_rgb(200.0, 0.5, 0.0), Rgb::BLACK);
    }

    #[test]
    fn hue_rotates_with_frame() {
        let a = hue(0, 0, CELLS_Y, CELLS_X, 0);
        let b = hue(0, 0, CELLS_Y, CELLS_X, 10);
        assert!(close(b - a, 10.0));
        assert!(hue(CELLS_Y - 1, CELLS_X - 1, CELLS_Y, CELLS_X, 359) < 360.0);
    }

    #[test]
    fn hue_position_term() {
        // Positions are 1-based fractions of the board, scaled by 0.01 * 360
        assert!(close(hue(CELLS_Y - 1, CELLS_X - 1, CELLS_Y, CELLS_X, 0), 3.6));
        assert!(close(hue(0, 0, CELLS_Y, CELLS_X, 0), 0.0018));
        assert!(close(hue(19, 24, CELLS_Y, CELLS_X, 0), 0.9));
        assert!(close(hue(CELLS_Y - 1, CELLS_X - 1, CELLS_Y, CELLS_X, 720), 3.6));
    }

    #[test]
    fn exact_cell_colors() {
        let cell = Cell::new(CellState::Alive, 0);
        let fresh_corner =
            color_for::<CELLS_Y, CELLS_X>(cell, CELLS_Y - 1, CELLS_X - 1, 0, ColorMode::Hue);
        assert_eq!(fresh_corner, Rgb::new(255, 87, 76));

        for frame in [48, 60, 1_000] {
            let old = color_for::<CELLS_Y, CELLS_X>(cell, 5, 7, frame, ColorMode::Grayscale);
            assert_eq!(old, Rgb::new(204, 204, 204), "frame {frame}");
        }
    }

    #[test]
    fn grayscale_fresh_cell_is_black() {
        let cell = Cell::new(CellState::Alive, 50);
        let rgb = color_for::<CELLS_Y, CELLS_X>(cell, 3, 4, 50, ColorMode::Grayscale);
        assert_eq!(rgb, Rgb::BLACK);
    }

    #[test]
    fn grayscale_channels_match() {
        let cell = Cell::new(CellState::Alive, 0);
        let rgb = color_for::<CELLS_Y, CELLS_X>(cell, 10, 20, 30, ColorMode::Grayscale);
        assert_eq!(rgb.r, rgb.g);
        assert_eq!(rgb.g, rgb.b);
        assert!(rgb.r > 0);
    }

    #[test]
    fn hue_mode_dims_with_age() {
        let cell = Cell::new(CellState::Alive, 0);
        let fresh = color_for::<CELLS_Y, CELLS_X>(cell, 0, 0, 0, ColorMode::Hue);
        let old = color_for::<CELLS_Y, CELLS_X>(cell, 0, 0, 120, ColorMode::Hue);
        let peak = |c: Rgb| c.r.max(c.g).max(c.b);
        assert!(peak(fresh) > peak(old));
    }

    #[test]
    fn mode_toggles_and_backgrounds() {
        assert_eq!(ColorMode::Grayscale.toggled(), ColorMode::Hue);
        assert_eq!(ColorMode::from(true), ColorMode::Hue);
        assert_eq!(background(ColorMode::Hue), Rgb::BLACK);
        assert_eq!(background(ColorMode::Grayscale), Rgb::WHITE);
    }
}
