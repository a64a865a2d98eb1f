//! Chained builder over [`convert`](crate::convert::convert)
//!
//! Settings are staged on the builder and only validated (block sizes
//! defaulted) when a conversion runs. The bound image is never modified.

use crate::config::ConversionConfig;
use crate::convert::{convert, convert_to_string};
use crate::palette::Palette;
use crate::source::PixelSource;

/// Stages conversion settings for one image
#[derive(Debug)]
pub struct Converter<'a, S: ?Sized> {
    image: &'a S,
    config: ConversionConfig,
}

impl<'a, S> Converter<'a, S>
where
    S: PixelSource + Sync + ?Sized,
{
    /// Builder with default settings: 1x1 blocks, no inversion
    pub fn new(image: &'a S) -> Self {
        Self::with_config(image, ConversionConfig::default())
    }

    pub fn with_config(image: &'a S, config: ConversionConfig) -> Self {
        Self { image, config }
    }

    /// Pixels covered by each character across
    pub fn block_width(&mut self, x: i32) -> &mut Self {
        self.config.block_width = x;
        self
    }

    /// Pixels covered by each character from top to bottom
    pub fn block_height(&mut self, y: i32) -> &mut Self {
        self.config.block_height = y;
        self
    }

    /// Flip the brightness mapping; a second call restores it
    pub fn invert(&mut self) -> &mut Self {
        self.config.invert = !self.config.invert;
        self
    }

    pub fn palette(&mut self, palette: Palette) -> &mut Self {
        self.config.palette = palette;
        self
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn convert(&self) -> Vec<char> {
        convert(self.image, &self.config)
    }

    pub fn convert_to_string(&self) -> String {
        convert_to_string(self.image, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::image_to_text;
    use image::{DynamicImage, GrayImage, Luma};

    fn gradient() -> GrayImage {
        GrayImage::from_fn(9, 6, |x, y| Luma([(x * 25 + y * 3) as u8]))
    }

    #[test]
    fn test_builder_matches_direct_call() {
        let img = gradient();
        let chained = Converter::new(&img)
            .block_height(1)
            .block_width(1)
            .invert()
            .convert();
        assert_eq!(chained, image_to_text(&img, 1, 1, true));
    }

    #[test]
    fn test_block_setters_store_raw_values() {
        let img = gradient();
        let mut converter = Converter::new(&img);
        converter.block_width(-2).block_height(3);

        assert_eq!(converter.config().block_width, -2);
        assert_eq!(converter.config().block_height, 3);
        assert_eq!(converter.convert(), image_to_text(&img, 1, 3, false));
    }

    #[test]
    fn test_double_invert_is_noop() {
        let img = gradient();
        let mut converter = Converter::new(&img);
        converter.block_width(2).block_height(2);
        let before = converter.convert();

        converter.invert().invert();
        assert_eq!(converter.convert(), before);
    }

    #[test]
    fn test_single_invert_is_not_noop() {
        let img = gradient();
        let mut converter = Converter::new(&img);
        let before = converter.convert();

        converter.invert();
        assert_ne!(converter.convert(), before);
    }

    #[test]
    fn test_palette_setter() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 1, Luma([255])));
        let text = Converter::new(&img)
            .palette("ab".parse().unwrap())
            .convert_to_string();
        assert_eq!(text, "bb\n");
    }
}
