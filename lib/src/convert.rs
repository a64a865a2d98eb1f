use crate::config::ConversionConfig;
use crate::luma::average_luma;
use crate::palette::Palette;
use crate::source::PixelSource;
use rayon::prelude::*;

/// Character written at the end of every output row
pub const LINE_BREAK: char = '\n';

/// Read one block of pixels, row-major
///
/// # Arguments
/// * `image` - Source image
/// * `block_x` - Block column
/// * `block_y` - Block row
/// * `width` - Block width in pixels
/// * `height` - Block height in pixels
/// * `pixels` - Buffer to fill; cleared first
pub fn color_block<S: PixelSource + ?Sized>(
    image: &S,
    block_x: u32,
    block_y: u32,
    width: u32,
    height: u32,
    pixels: &mut Vec<[u16; 4]>,
) {
    let x = block_x * width;
    let y = block_y * height;

    pixels.clear();
    for i in 0..height {
        for j in 0..width {
            pixels.push(image.rgba16(x + j, y + i));
        }
    }
}

/// Fill one output row: a glyph per block followed by a line break
fn render_row<S: PixelSource + ?Sized>(
    image: &S,
    row: u32,
    block_size: (u32, u32),
    palette: &Palette,
    invert: bool,
    line: &mut [char],
) {
    let (block_width, block_height) = block_size;
    let Some((last, glyphs)) = line.split_last_mut() else {
        return;
    };
    let mut pixels = Vec::new();

    for (column, slot) in glyphs.iter_mut().enumerate() {
        color_block(image, column as u32, row, block_width, block_height, &mut pixels);
        *slot = palette.glyph_for(average_luma(&pixels), invert);
    }
    *last = LINE_BREAK;
}

/// Converts an image to text using the given configuration
///
/// The image is split into `block_width × block_height` blocks; each block
/// becomes one glyph chosen by its average luma. Every row, the last one
/// included, ends with a line break, so the result holds
/// `rows * (columns + 1)` characters.
///
/// # Arguments
/// * `image` - Source image
/// * `config` - Block size, inversion and palette
///
/// # Returns
/// The characters of the text rendering, row-major
pub fn convert<S>(image: &S, config: &ConversionConfig) -> Vec<char>
where
    S: PixelSource + Sync + ?Sized,
{
    let block_size = config.effective_block_size();
    let (width, height) = image.size();
    let (columns, rows) = config.grid_dimensions(width, height);
    let line_len = columns as usize + 1;

    log::debug!(
        "converting {}x{} image with {}x{} blocks into {} rows of {} glyphs",
        width,
        height,
        block_size.0,
        block_size.1,
        rows,
        columns
    );

    let mut text = vec![LINE_BREAK; rows as usize * line_len];

    // Rows are independent; each task owns a disjoint slice of the output
    text.par_chunks_mut(line_len)
        .enumerate()
        .for_each(|(row, line)| {
            render_row(
                image,
                row as u32,
                block_size,
                &config.palette,
                config.invert,
                line,
            );
        });

    text
}

/// Converts an image to text with the reference density palette
///
/// Block dimensions of zero or less are treated as 1.
pub fn image_to_text<S>(
    image: &S,
    block_width: i32,
    block_height: i32,
    invert: bool,
) -> Vec<char>
where
    S: PixelSource + Sync + ?Sized,
{
    let config = ConversionConfig {
        block_width,
        block_height,
        invert,
        ..Default::default()
    };
    convert(image, &config)
}

/// Same as [`convert`], collected into a `String`
pub fn convert_to_string<S>(image: &S, config: &ConversionConfig) -> String
where
    S: PixelSource + Sync + ?Sized,
{
    convert(image, config).into_iter().collect()
}
