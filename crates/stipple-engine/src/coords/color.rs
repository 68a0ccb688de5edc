/// Straight-alpha RGBA color, each channel in `[0, 1]`.
///
/// This is the color shapes carry. Renderers convert to premultiplied
/// `paint::Color` at upload time.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// A single RGBA channel, addressed by the per-channel sliders.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    #[inline]
    pub const fn red() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn green() -> Self {
        Self::new(0.0, 1.0, 0.0, 1.0)
    }

    #[inline]
    pub fn channel(self, channel: ColorChannel) -> f32 {
        match channel {
            ColorChannel::Red => self.r,
            ColorChannel::Green => self.g,
            ColorChannel::Blue => self.b,
            ColorChannel::Alpha => self.a,
        }
    }

    /// Returns a copy with `channel` replaced by `value` clamped to `[0, 1]`.
    #[inline]
    pub fn with_channel(mut self, channel: ColorChannel, value: f32) -> Self {
        let value = value.clamp(0.0, 1.0);
        match channel {
            ColorChannel::Red => self.r = value,
            ColorChannel::Green => self.g = value,
            ColorChannel::Blue => self.b = value,
            ColorChannel::Alpha => self.a = value,
        }
        self
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
