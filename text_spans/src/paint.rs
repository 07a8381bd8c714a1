// Copyright 2026 the Text Spans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw state read by glyph renderers.

use peniko::Color;
use peniko::color::DynamicColor;

use crate::Argb;

/// The paint applied to glyphs at draw time.
///
/// Spans install their colors through
/// [`update_draw_state`](crate::ForegroundColorSpan::update_draw_state); the
/// renderer reads the resulting color when filling glyph outlines. The color
/// is kept at full precision, so a wide-gamut span paints with more fidelity
/// than its serializable ARGB value can express.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct TextPaint {
    color: DynamicColor,
}

impl TextPaint {
    /// Creates a paint with the given color.
    #[must_use]
    pub fn new(color: DynamicColor) -> Self {
        Self { color }
    }

    /// The current paint color.
    #[must_use]
    pub fn color(&self) -> DynamicColor {
        self.color
    }

    /// Sets the paint color.
    pub fn set_color(&mut self, color: DynamicColor) {
        self.color = color;
    }

    /// Sets the paint color from a packed ARGB value.
    pub fn set_color_argb(&mut self, color: Argb) {
        self.color = color.to_dynamic();
    }
}

impl Default for TextPaint {
    fn default() -> Self {
        Self {
            color: DynamicColor::from_alpha_color(Color::BLACK),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TextPaint;
    use crate::Argb;
    use peniko::color::{DynamicColor, palette};

    #[test]
    fn default_is_opaque_black() {
        let paint = TextPaint::default();
        assert_eq!(Argb::from_color(paint.color()), Argb::new(0xFF000000));
    }

    #[test]
    fn set_color() {
        let mut paint = TextPaint::default();
        let green = DynamicColor::from_alpha_color(palette::css::LIME);
        paint.set_color(green);
        assert_eq!(paint.color(), green);

        paint.set_color_argb(Argb::new(0xFFFF0000));
        assert_eq!(Argb::from_color(paint.color()), Argb::new(0xFFFF0000));
    }
}
