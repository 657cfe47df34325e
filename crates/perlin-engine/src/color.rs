//! Terrain coloring of normalized value fields
//!
//! Values at or below the midpoint are water, shaded blue with intensity
//! `value * 2`; values above it are land, shaded green with intensity
//! `value`.

use perlin_core::{Error, Result};

/// Midpoint separating water from land
pub const SEA_LEVEL: f64 = 0.5;

/// An RGB color with channels in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    /// Create a color from its channels
    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Channels quantized to bytes
    pub fn to_bytes(self) -> [u8; 3] {
        let quantize = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [quantize(self.red), quantize(self.green), quantize(self.blue)]
    }
}

/// Color of a single normalized value
///
/// Out-of-range input is clamped into `[0, 1]` first.
pub fn terrain(value: f64) -> Rgb {
    let value = value.clamp(0.0, 1.0);
    if value <= SEA_LEVEL {
        Rgb::new(0.0, 0.0, value * 2.0)
    } else {
        Rgb::new(0.0, value, 0.0)
    }
}

/// Color an `[x][y]` value field into a row-major image buffer
///
/// # Errors
///
/// `InvalidConfiguration` if the columns have different lengths.
pub fn render(field: &[Vec<f64>]) -> Result<Vec<Rgb>> {
    let height = field.first().map_or(0, Vec::len);
    if let Some(x) = field.iter().position(|column| column.len() != height) {
        return Err(Error::InvalidConfiguration(format!(
            "Column {x} has {} values, expected {height}",
            field[x].len()
        )));
    }

    let mut pixels = Vec::with_capacity(field.len() * height);
    for y in 0..height {
        pixels.extend(field.iter().map(|column| terrain(column[y])));
    }
    Ok(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_and_land() {
        assert_eq!(terrain(0.0), Rgb::new(0.0, 0.0, 0.0));
        assert_eq!(terrain(0.25), Rgb::new(0.0, 0.0, 0.5));
        assert_eq!(terrain(0.5), Rgb::new(0.0, 0.0, 1.0));
        assert_eq!(terrain(0.75), Rgb::new(0.0, 0.75, 0.0));
        assert_eq!(terrain(1.0), Rgb::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_clamps_input() {
        assert_eq!(terrain(-3.0), terrain(0.0));
        assert_eq!(terrain(7.0), terrain(1.0));
    }

    #[test]
    fn test_render_is_row_major() {
        // Two columns, three rows
        let field = vec![vec![0.0, 0.25, 0.5], vec![0.75, 1.0, 0.1]];
        let pixels = render(&field).unwrap();
        assert_eq!(pixels.len(), 6);
        assert_eq!(pixels[0], terrain(0.0));
        assert_eq!(pixels[1], terrain(0.75));
        assert_eq!(pixels[2], terrain(0.25));
        assert_eq!(pixels[5], terrain(0.1));
    }

    #[test]
    fn test_render_rejects_ragged_field() {
        let field = vec![vec![0.1, 0.2], vec![0.3]];
        assert!(matches!(render(&field), Err(Error::InvalidConfiguration(_))));
        assert!(render(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(Rgb::new(0.0, 1.0, 0.5).to_bytes(), [0, 255, 128]);
    }
}
