// Copyright 2026 the Text Spans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The foreground color span.

use peniko::color::DynamicColor;

use crate::{
    Argb, DecodeError, ManagedSpan, SpanKind, TextPaint, TransportBuffer, TransportCursor,
};

/// Colors the glyphs of the text range it is applied to.
///
/// A span carries two colors, fixed at construction:
///
/// - the *declared* color, a packed [`Argb`] value. This is what the
///   transport encoding carries and what any ARGB-shaped consumer reads.
/// - the *painted* color, the full-precision value installed into the draw
///   state at render time.
///
/// For spans built with [`new`](Self::new) or decoded from a transport
/// buffer the two denote the same color. For spans built with
/// [`from_extended`](Self::from_extended) they may differ: the declared
/// color is the sRGB approximation of the wide-gamut input, while the
/// painted color keeps the input exactly.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ForegroundColorSpan {
    declared: Argb,
    painted: DynamicColor,
}

impl ForegroundColorSpan {
    /// Creates a span from a packed ARGB color.
    #[must_use]
    pub fn new(color: Argb) -> Self {
        Self {
            declared: color,
            painted: color.to_dynamic(),
        }
    }

    /// Creates a span from a wide-gamut color.
    ///
    /// The input becomes the painted color unchanged; the declared color is
    /// its ARGB approximation (see [`Argb::from_color`]).
    #[must_use]
    pub fn from_extended(color: DynamicColor) -> Self {
        Self {
            declared: Argb::from_color(color),
            painted: color,
        }
    }

    /// Reads a span from a transport cursor.
    ///
    /// Expects the encoding produced by [`encode`](Self::encode): the
    /// [`SpanKind::ForegroundColor`] tag followed by the packed color. The
    /// cursor advances past the bytes that were read. A buffer holding a
    /// different tag, or too few bytes, is rejected.
    pub fn decode(cursor: &mut TransportCursor<'_>) -> Result<Self, DecodeError> {
        let tag_offset = cursor.offset();
        let tag = cursor.read_u8()?;
        if SpanKind::from_u8(tag) != Some(SpanKind::ForegroundColor) {
            return Err(DecodeError::unknown_span_kind(tag_offset, tag));
        }
        let color = Argb::new(cursor.read_u32()?);
        Ok(Self::new(color))
    }

    /// Writes this span to a transport buffer.
    ///
    /// Only the declared color crosses the transport boundary; a span
    /// decoded from the result paints with the sRGB rendition of that value.
    pub fn encode(&self, buffer: &mut TransportBuffer) {
        buffer.write_u8(SpanKind::ForegroundColor.to_u8());
        buffer.write_u32(self.declared.value());
    }

    /// The serializable ARGB color.
    #[must_use]
    pub fn declared_color(&self) -> Argb {
        self.declared
    }

    /// The color applied at draw time.
    #[must_use]
    pub fn painted_color(&self) -> DynamicColor {
        self.painted
    }

    /// Installs this span's painted color into the draw state.
    pub fn update_draw_state(&self, paint: &mut TextPaint) {
        paint.set_color(self.painted);
    }
}

impl ManagedSpan for ForegroundColorSpan {}
