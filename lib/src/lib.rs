//! Luma Text - image to text converter
//!
//! Splits an image into fixed-size pixel blocks and replaces each block with a
//! glyph from a density palette, picked by the block's average luma.
//!
//! # Example
//! ```
//! use image::{Rgba, RgbaImage};
//! use luma_text::image_to_text;
//!
//! let mut img = RgbaImage::new(2, 1);
//! img.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
//! img.put_pixel(1, 0, Rgba([255, 255, 255, 255]));
//!
//! let text: String = image_to_text(&img, 1, 1, false).into_iter().collect();
//! assert_eq!(text, " Ñ\n");
//! ```

pub mod config;
pub mod convert;
pub mod converter;
pub mod luma;
pub mod palette;
pub mod source;

// Re-export main types for convenience
pub use config::ConversionConfig;
pub use convert::{convert, convert_to_string, image_to_text};
pub use converter::Converter;
pub use palette::{DENSITY, Palette, PaletteError};
pub use source::PixelSource;
