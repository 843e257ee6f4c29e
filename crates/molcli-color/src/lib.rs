//! Color system for command-line completion
//!
//! This crate provides the color vocabulary offered while typing color
//! arguments:
//! - Hex color parsing and formatting (`#F80`, `#FF8800`, `#FF8800CC`)
//! - Named colors with their hex values
//! - Colormap presets, rendered as small swatches

mod color;
mod error;
mod named;
mod ramp;

pub use color::{is_hex_color, Color};
pub use error::{ColorError, ColorResult};
pub use named::NamedColors;
pub use ramp::{ColorRamp, COLORMAP_NAMES};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{Color, ColorRamp, NamedColors};
}
