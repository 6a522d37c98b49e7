use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageBuffer, ImageEncoder, RgbaImage};

use crate::errors::IconError;
use crate::grid::Grid;
use crate::models::{ImageFormat, Rgb};

pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Position and edge length of the blocks on a square canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    pub length: u32,
    /// Uniform border left when `pixels` is not a multiple of the grid size.
    pub offset: u32,
}

impl BlockLayout {
    pub fn new(pixels: u32, size: u32) -> Self {
        Self {
            length: pixels / size,
            offset: (pixels % size) / 2,
        }
    }

    /// Top-left corner of the block in the given cell.
    pub fn origin(&self, row: u32, column: u32) -> (u32, u32) {
        (column * self.length + self.offset, row * self.length + self.offset)
    }
}

/// Paints the grid onto a `pixels` x `pixels` canvas.
/// Painted cells get a solid foreground square, everything else stays background.
pub fn draw_pattern(grid: &Grid, pixels: u32, foreground: Rgb, background: Rgb) -> RgbaImage {
    let mut image = ImageBuffer::from_pixel(pixels, pixels, background.to_rgba());
    let size = grid.size() as u32;
    let layout = BlockLayout::new(pixels, size);
    let fill = foreground.to_rgba();

    for (index, _) in grid.cells().iter().enumerate().filter(|(_, painted)| **painted) {
        let (row, column) = (index as u32 / size, index as u32 % size);
        let (x1, y1) = layout.origin(row, column);
        for y in y1..y1 + layout.length {
            for x in x1..x1 + layout.length {
                image.put_pixel(x, y, fill);
            };
        };
    };
    image
}

/// Turns a rendered raster into container bytes.
pub trait Encoder {
    fn encode(&self, image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, IconError>;
}

/// Encoder backed by the `image` crate codecs.
#[derive(Debug, Clone, Copy)]
pub struct ImageCodec {
    pub jpeg_quality: u8,
}

impl Default for ImageCodec {
    fn default() -> Self {
        Self { jpeg_quality: DEFAULT_JPEG_QUALITY }
    }
}

impl Encoder for ImageCodec {
    fn encode(&self, image: &RgbaImage, format: ImageFormat) -> Result<Vec<u8>, IconError> {
        let mut bytes = Vec::new();
        match format {
            ImageFormat::Png => {
                PngEncoder::new(&mut bytes).write_image(
                    image.as_raw(),
                    image.width(),
                    image.height(),
                    ExtendedColorType::Rgba8,
                )?;
            }
            ImageFormat::Jpeg => {
                // JPEG has no alpha channel
                let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
                JpegEncoder::new_with_quality(&mut bytes, self.jpeg_quality)
                    .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)?;
            }
        };
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::compute_checksum;
    use crate::models::ChecksumKind;

    fn full_grid(size: usize) -> Grid {
        // every byte even
        Grid::from_checksum(&[0; 16], size)
    }

    #[test]
    fn test_block_layout() {
        assert_eq!(BlockLayout::new(250, 5), BlockLayout { length: 50, offset: 0 });
        assert_eq!(BlockLayout::new(300, 7), BlockLayout { length: 42, offset: 3 });
        assert_eq!(BlockLayout::new(300, 7).origin(1, 2), (87, 45));
    }

    #[test]
    fn test_draw_pattern_simple_name() {
        let checksum = compute_checksum(&["Simple"], ChecksumKind::Md5);
        let grid = Grid::from_checksum(&checksum, 5);
        let foreground = Rgb::from_checksum(&checksum);
        let image = draw_pattern(&grid, 250, foreground, Rgb::WHITE);
        assert_eq!(image.dimensions(), (250, 250));
        for row in 0..5 {
            for column in 0..5 {
                let expected = if grid.get(row, column) == Some(true) {
                    foreground
                } else {
                    Rgb::WHITE
                };
                let (x, y) = (column as u32 * 50, row as u32 * 50);
                // first and last pixel of each 50x50 block
                assert_eq!(*image.get_pixel(x, y), expected.to_rgba());
                assert_eq!(*image.get_pixel(x + 49, y + 49), expected.to_rgba());
            };
        };
    }

    #[test]
    fn test_draw_pattern_with_offset() {
        let foreground = Rgb::new(122, 16, 21);
        let background = Rgb::new(16, 122, 117);
        let image = draw_pattern(&full_grid(7), 300, foreground, background);
        // 42 * 7 = 294, three pixels of border on each side
        assert_eq!(*image.get_pixel(2, 2), background.to_rgba());
        assert_eq!(*image.get_pixel(3, 3), foreground.to_rgba());
        assert_eq!(*image.get_pixel(296, 296), foreground.to_rgba());
        assert_eq!(*image.get_pixel(297, 297), background.to_rgba());
        assert_eq!(*image.get_pixel(299, 150), background.to_rgba());
    }

    #[test]
    fn test_draw_pattern_is_opaque() {
        let image = draw_pattern(&full_grid(6), 100, Rgb::BLACK, Rgb::WHITE);
        assert!(image.pixels().all(|pixel| pixel.0[3] == 255));
    }

    #[test]
    fn test_image_codec_png() {
        let image = draw_pattern(&full_grid(5), 100, Rgb::BLACK, Rgb::WHITE);
        let bytes = ImageCodec::default().encode(&image, ImageFormat::Png).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
        let decoded = image::load_from_memory(&bytes).unwrap().into_rgba8();
        assert_eq!(decoded, image);
    }

    #[test]
    fn test_image_codec_jpeg() {
        let image = draw_pattern(&full_grid(5), 100, Rgb::BLACK, Rgb::WHITE);
        let bytes = ImageCodec::default().encode(&image, ImageFormat::Jpeg).unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (100, 100));
    }
}
