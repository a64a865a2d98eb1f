use crate::palette::Palette;

/// Configuration for image-to-text conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Block geometry, in source pixels per output character
    pub block_width: i32,        // <= 0 is treated as 1, default 1
    pub block_height: i32,       // <= 0 is treated as 1, default 1

    /// Mapping
    pub invert: bool,            // default false
    pub palette: Palette,        // default: reference density ramp
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            // Block geometry
            block_width: 1,
            block_height: 1,

            // Mapping
            invert: false,
            palette: Palette::default(),
        }
    }
}

impl ConversionConfig {
    /// Block size actually used, with non-positive dimensions defaulted to 1
    pub fn effective_block_size(&self) -> (u32, u32) {
        (effective_dimension(self.block_width), effective_dimension(self.block_height))
    }

    /// Output grid as `(columns, rows)` for an image of the given size
    ///
    /// Floor division: pixels past the last whole block are not rendered.
    pub fn grid_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        let (block_width, block_height) = self.effective_block_size();
        (width / block_width, height / block_height)
    }
}

fn effective_dimension(value: i32) -> u32 {
    if value < 1 {
        log::trace!("block dimension {} defaulted to 1", value);
        1
    } else {
        value as u32
    }
}
