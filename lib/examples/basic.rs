/// Basic example: Convert a simple test image to text
///
/// This draws a few shapes in memory and prints them as text, once plain and
/// once inverted for light-on-dark terminals
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut};
use luma_text::Converter;

fn main() {
    env_logger::init();

    println!("Luma Text - Basic Example");
    println!("=========================\n");

    // 160x96 image, rendered with 4x8 blocks -> 40x12 characters
    let width = 160;
    let height = 96;
    let mut img = RgbaImage::from_pixel(width, height, Rgba([100, 100, 100, 255]));

    // White disc with a black rim
    draw_filled_circle_mut(&mut img, (80, 48), 40, Rgba([0, 0, 0, 255]));
    draw_filled_circle_mut(&mut img, (80, 48), 34, Rgba([255, 255, 255, 255]));

    // Red diagonal
    draw_line_segment_mut(
        &mut img,
        (0.0, 0.0),
        (width as f32, height as f32),
        Rgba([255, 0, 0, 255]),
    );

    println!("Created test image: {}x{}\n", width, height);

    let mut converter = Converter::new(&img);
    converter.block_width(4).block_height(8);

    println!("Plain:");
    print!("{}", converter.convert_to_string());

    println!("\nInverted:");
    print!("{}", converter.invert().convert_to_string());
}
