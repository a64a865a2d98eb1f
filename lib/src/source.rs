//! Pixel access boundary
//!
//! The transform only needs the image size and random access to pixel colors,
//! with every channel normalized to the 16-bit range `0..=65535` whatever the
//! native depth of the source. Decoding is left to the `image` crate.

use std::ops::Deref;

use image::{DynamicImage, GenericImageView, ImageBuffer, Pixel, SubImage};

/// Largest value a normalized channel can take
pub const CHANNEL_MAX: u16 = u16::MAX;

/// A readable 2D grid of pixels
pub trait PixelSource {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;

    /// Color at `(x, y)` as 16-bit `[r, g, b, a]`
    ///
    /// Color channels are premultiplied by alpha, so a fully transparent
    /// pixel reads as black. Callers stay within `width() x height()`;
    /// implementations may panic otherwise.
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4];

    /// `(width, height)`
    fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }
}

/// A native channel type that can be widened to 16 bits
pub trait Channel16: Copy {
    fn to_u16(self) -> u16;
}

impl Channel16 for u8 {
    #[inline]
    fn to_u16(self) -> u16 {
        // 0xff -> 0xffff
        u16::from(self) * 257
    }
}

impl Channel16 for u16 {
    #[inline]
    fn to_u16(self) -> u16 {
        self
    }
}

impl Channel16 for f32 {
    #[inline]
    fn to_u16(self) -> u16 {
        (self.clamp(0.0, 1.0) * f32::from(CHANNEL_MAX)) as u16
    }
}

/// Scale a straight color channel by a 16-bit alpha
#[inline]
fn premultiply(channel: u16, alpha: u16) -> u16 {
    (u32::from(channel) * u32::from(alpha) / u32::from(CHANNEL_MAX)) as u16
}

/// Read a pixel from any view whose channels widen to 16 bits
fn view_rgba16<V>(view: &V, x: u32, y: u32) -> [u16; 4]
where
    V: GenericImageView + ?Sized,
    <V::Pixel as Pixel>::Subpixel: Channel16,
{
    let [r, g, b, a] = view.get_pixel(x, y).to_rgba().0.map(Channel16::to_u16);
    [premultiply(r, a), premultiply(g, a), premultiply(b, a), a]
}

impl<P, C> PixelSource for ImageBuffer<P, C>
where
    P: Pixel,
    P::Subpixel: Channel16,
    C: Deref<Target = [P::Subpixel]>,
{
    #[inline]
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    #[inline]
    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    #[inline]
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        view_rgba16(self, x, y)
    }
}

impl<I> PixelSource for SubImage<I>
where
    I: Deref,
    I::Target: GenericImageView,
    <<I::Target as GenericImageView>::Pixel as Pixel>::Subpixel: Channel16,
{
    #[inline]
    fn width(&self) -> u32 {
        GenericImageView::width(&**self)
    }

    #[inline]
    fn height(&self) -> u32 {
        GenericImageView::height(&**self)
    }

    #[inline]
    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        view_rgba16(&**self, x, y)
    }
}

/// Reads each variant at its native depth; 16-bit and float images are not
/// squeezed through the 8-bit `GenericImageView` of `DynamicImage`.
impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgba16(&self, x: u32, y: u32) -> [u16; 4] {
        match self {
            DynamicImage::ImageLuma8(buf) => buf.rgba16(x, y),
            DynamicImage::ImageLumaA8(buf) => buf.rgba16(x, y),
            DynamicImage::ImageRgb8(buf) => buf.rgba16(x, y),
            DynamicImage::ImageRgba8(buf) => buf.rgba16(x, y),
            DynamicImage::ImageLuma16(buf) => buf.rgba16(x, y),
            DynamicImage::ImageLumaA16(buf) => buf.rgba16(x, y),
            DynamicImage::ImageRgb16(buf) => buf.rgba16(x, y),
            DynamicImage::ImageRgba16(buf) => buf.rgba16(x, y),
            DynamicImage::ImageRgb32F(buf) => buf.rgba16(x, y),
            DynamicImage::ImageRgba32F(buf) => buf.rgba16(x, y),
            other => view_rgba16(other, x, y),
        }
    }
}
