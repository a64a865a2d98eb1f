/// Block size demo: how block dimensions map to the output grid
///
/// Pixels past the last whole block are dropped, and non-positive block
/// dimensions fall back to 1
use image::{GrayImage, Luma};
use luma_text::{ConversionConfig, convert_to_string};

fn main() {
    env_logger::init();

    println!("Luma Text - Block Size Demo");
    println!("===========================\n");

    let test_cases = vec![
        (48, 16, 4, 4, "48x16 with 4x4 blocks (even)"),
        (50, 18, 4, 4, "50x18 with 4x4 blocks (remainder dropped)"),
        (24, 8, 0, -1, "24x8 with 0x-1 blocks (defaulted to 1x1)"),
    ];

    for (width, height, block_width, block_height, description) in test_cases {
        println!("Testing: {}", description);

        // Horizontal gradient, dark to bright
        let img = GrayImage::from_fn(width, height, |x, _| {
            Luma([(x * 255 / (width - 1)) as u8])
        });

        let config = ConversionConfig {
            block_width,
            block_height,
            ..Default::default()
        };
        let (columns, rows) = config.grid_dimensions(width, height);
        let text = convert_to_string(&img, &config);

        println!("  Input: {}x{}", width, height);
        println!("  Grid:  {} columns x {} rows", columns, rows);
        print!("{}", text);
        println!();
    }
}
