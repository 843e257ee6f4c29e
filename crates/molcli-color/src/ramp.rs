//! Colormap presets
//!
//! Colormaps are offered by name when completing colormap arguments. Each
//! preset can be sampled to draw a small gradient swatch next to its name.

use serde::{Deserialize, Serialize};

use crate::error::{ColorError, ColorResult};
use crate::Color;

/// Names of the built-in colormaps, in display order
pub static COLORMAP_NAMES: [&str; 7] = [
    "rainbow",
    "grayscale",
    "red-white-blue",
    "blue-white-red",
    "cyan-maroon",
    "hot",
    "lipophilicity",
];

/// A color ramp for mapping values in [0, 1] to colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorRamp {
    /// Name of the ramp
    pub name: String,
    /// Control points: (value, color) pairs, sorted by value
    points: Vec<(f32, Color)>,
}

impl ColorRamp {
    /// Create a new color ramp
    pub fn new(name: impl Into<String>) -> Self {
        ColorRamp {
            name: name.into(),
            points: Vec::new(),
        }
    }

    /// Add a control point
    pub fn add_point(&mut self, value: f32, color: Color) -> &mut Self {
        self.points.push((value, color));
        self.points.sort_by(|a, b| a.0.total_cmp(&b.0));
        self
    }

    /// Look up a built-in colormap by name
    pub fn preset(name: &str) -> ColorResult<Self> {
        let stops: &[(f32, Color)] = match name {
            "rainbow" => &[
                (0.0, Color::BLUE),
                (0.25, Color::CYAN),
                (0.5, Color::GREEN),
                (0.75, Color::YELLOW),
                (1.0, Color::RED),
            ],
            "grayscale" => &[(0.0, Color::BLACK), (1.0, Color::WHITE)],
            "red-white-blue" => &[(0.0, Color::RED), (0.5, Color::WHITE), (1.0, Color::BLUE)],
            "blue-white-red" => &[(0.0, Color::BLUE), (0.5, Color::WHITE), (1.0, Color::RED)],
            "cyan-maroon" => &[
                (0.0, Color::new(0.059, 0.78, 0.81)),
                (0.5, Color::WHITE),
                (1.0, Color::new(0.47, 0.0, 0.18)),
            ],
            "hot" => &[
                (0.0, Color::BLACK),
                (0.33, Color::RED),
                (0.66, Color::YELLOW),
                (1.0, Color::WHITE),
            ],
            "lipophilicity" => &[
                (0.0, Color::new(0.0, 0.545, 0.545)),
                (0.5, Color::WHITE),
                (1.0, Color::new(0.72, 0.525, 0.043)),
            ],
            _ => return Err(ColorError::UnknownColormap(name.to_string())),
        };
        let mut ramp = ColorRamp::new(name);
        for &(value, color) in stops {
            ramp.add_point(value, color);
        }
        Ok(ramp)
    }

    /// Get the color for a value
    pub fn get_color(&self, value: f32) -> Color {
        let (first, last) = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Color::WHITE,
        };
        if value <= first.0 {
            return first.1;
        }
        if value >= last.0 {
            return last.1;
        }
        for pair in self.points.windows(2) {
            let (v0, c0) = pair[0];
            let (v1, c1) = pair[1];
            if value <= v1 {
                let t = if (v1 - v0).abs() < f32::EPSILON {
                    0.5
                } else {
                    (value - v0) / (v1 - v0)
                };
                return c0.lerp(&c1, t);
            }
        }
        last.1
    }

    /// Sample `n` evenly spaced colors from start to end
    pub fn sample(&self, n: usize) -> Vec<Color> {
        match n {
            0 => Vec::new(),
            1 => vec![self.get_color(0.0)],
            _ => (0..n)
                .map(|i| self.get_color(i as f32 / (n - 1) as f32))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_ramp() {
        let ramp = ColorRamp::preset("blue-white-red").unwrap();

        assert_eq!(ramp.get_color(0.0), Color::BLUE);
        assert_eq!(ramp.get_color(1.0), Color::RED);
        assert_eq!(ramp.get_color(0.5), Color::WHITE);
        assert_eq!(ramp.get_color(-3.0), Color::BLUE);
    }

    #[test]
    fn test_every_name_has_preset() {
        for name in COLORMAP_NAMES.iter() {
            assert!(ColorRamp::preset(name).is_ok(), "no preset for {}", name);
        }
        assert_eq!(
            ColorRamp::preset("jet").unwrap_err(),
            ColorError::UnknownColormap("jet".to_string())
        );
    }

    #[test]
    fn test_sample() {
        let ramp = ColorRamp::preset("grayscale").unwrap();
        let samples = ramp.sample(3);
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], Color::BLACK);
        assert_eq!(samples[2], Color::WHITE);
        assert_eq!(samples[1].to_hex(), "#808080");
    }
}
