// Copyright 2026 the Text Spans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Packed ARGB colors and conversions to the wide-gamut color types.

use core::fmt;

use peniko::Color;
use peniko::color::{DynamicColor, Srgb};

/// A packed 32-bit color in `0xAARRGGBB` channel order.
///
/// This is the serializable shape of a span color: whatever a span was
/// constructed from, the value carried by the transport encoding is an
/// `Argb`. Wide-gamut colors keep their full precision in a separate field
/// on the span itself (see [`ForegroundColorSpan`]).
///
/// [`ForegroundColorSpan`]: crate::ForegroundColorSpan
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Argb(u32);

impl Argb {
    /// Creates a packed color from a `0xAARRGGBB` value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates a packed color from individual 8-bit channels.
    #[must_use]
    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | (blue as u32))
    }

    /// Creates a packed color from `[red, green, blue, alpha]` channels in `[0, 1]`.
    ///
    /// Channels are scaled to 8 bits with round-to-nearest. Out-of-range and
    /// non-finite values saturate.
    #[must_use]
    pub fn from_components(components: [f32; 4]) -> Self {
        let [red, green, blue, alpha] = components;
        Self::from_channels(
            quantize(alpha),
            quantize(red),
            quantize(green),
            quantize(blue),
        )
    }

    /// The packed `0xAARRGGBB` value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The alpha channel.
    #[must_use]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The red channel.
    #[must_use]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The green channel.
    #[must_use]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The blue channel.
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// The `[red, green, blue, alpha]` channels as floats in `[0, 1]`.
    #[must_use]
    pub fn components(self) -> [f32; 4] {
        [
            f32::from(self.red()) / 255.0,
            f32::from(self.green()) / 255.0,
            f32::from(self.blue()) / 255.0,
            f32::from(self.alpha()) / 255.0,
        ]
    }

    /// The ARGB approximation of a wide-gamut color.
    ///
    /// The color is converted to sRGB and quantized to 8 bits per channel.
    /// Components outside the sRGB gamut saturate.
    #[must_use]
    pub fn from_color(color: DynamicColor) -> Self {
        let rgba8 = color.to_alpha_color::<Srgb>().to_rgba8();
        Self::from_channels(rgba8.a, rgba8.r, rgba8.g, rgba8.b)
    }

    /// This color as an sRGB [`Color`].
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_rgba8(self.red(), self.green(), self.blue(), self.alpha())
    }

    /// This color as a wide-gamut value tagged as sRGB.
    #[must_use]
    pub fn to_dynamic(self) -> DynamicColor {
        DynamicColor::from_alpha_color(self.to_color())
    }
}

impl fmt::Debug for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Argb(0x{:08X})", self.0)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

// Float-to-int casts saturate, which also maps NaN to zero.
fn quantize(channel: f32) -> u8 {
    (channel * 255.0 + 0.5) as u8
}

#[cfg(test)]
mod tests {
    use super::Argb;
    use alloc::format;
    use peniko::color::{AlphaColor, DisplayP3, DynamicColor, palette};

    #[test]
    fn channels_round_trip() {
        let color = Argb::new(0x80FF7F01);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0xFF);
        assert_eq!(color.green(), 0x7F);
        assert_eq!(color.blue(), 0x01);
        assert_eq!(
            Argb::from_channels(0x80, 0xFF, 0x7F, 0x01),
            color,
            "channel packing should invert the accessors"
        );
    }

    #[test]
    fn component_quantization() {
        assert_eq!(
            Argb::from_components([1.0, 0.0, 0.0, 1.0]),
            Argb::new(0xFFFF0000)
        );
        // 0.5 * 255 = 127.5 rounds up.
        assert_eq!(
            Argb::from_components([0.5, 0.5, 0.5, 1.0]),
            Argb::new(0xFF808080)
        );
        // Out-of-range and non-finite channels saturate.
        assert_eq!(
            Argb::from_components([2.0, -1.0, f32::NAN, 1.0]),
            Argb::new(0xFFFF0000)
        );
    }

    #[test]
    fn components_inverse() {
        let color = Argb::new(0xFF336699);
        let components = color.components();
        assert_eq!(Argb::from_components(components), color);
    }

    #[test]
    fn truncates_srgb_exactly() {
        let red = DynamicColor::from_alpha_color(palette::css::RED);
        assert_eq!(Argb::from_color(red), Argb::new(0xFFFF0000));
    }

    #[test]
    fn saturates_out_of_gamut() {
        // Display P3 red sits outside the sRGB gamut; conversion clamps to
        // the nearest representable 8-bit sRGB value.
        let p3_red = DynamicColor::from_alpha_color(AlphaColor::<DisplayP3>::new([
            1.0, 0.0, 0.0, 1.0,
        ]));
        assert_eq!(Argb::from_color(p3_red), Argb::new(0xFFFF0000));
    }

    #[test]
    fn srgb_round_trip_through_color() {
        let color = Argb::new(0xFF123456);
        assert_eq!(Argb::from_color(color.to_dynamic()), color);
    }

    #[test]
    fn debug_is_hex() {
        assert_eq!(format!("{:?}", Argb::new(0xFFFF0000)), "Argb(0xFFFF0000)");
    }
}
