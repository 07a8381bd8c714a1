// Copyright 2026 the Text Spans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toolkit-managed styling spans for rich text pipelines.
//!
//! A *span* is a styling directive attached to a byte range of a text
//! buffer. A text pipeline typically juggles spans from several origins;
//! the ones it created itself are the only ones it reconciles and ships
//! across process boundaries. This crate provides those spans and the seams
//! around them:
//!
//! - [`ForegroundColorSpan`] colors the glyphs of its range, keeping the
//!   serializable ARGB value and the full-precision draw-time color as
//!   separate fields.
//! - [`ManagedSpan`] is the capability bound that admits a span type to the
//!   pipeline's own set.
//! - [`SpanSet`] applies spans to validated byte ranges of a text buffer.
//! - [`TransportBuffer`] and [`TransportCursor`] carry spans across process
//!   and view-recycling boundaries as a compact binary encoding.
//! - [`TextPaint`] is the draw state a glyph renderer reads.
//!
//! ## Example
//!
//! ```
//! use text_spans::{Argb, ForegroundColorSpan, SpanSet, TextPaint};
//!
//! let mut spans = SpanSet::new();
//! let red = ForegroundColorSpan::new(Argb::new(0xFFFF0000));
//! spans.apply("Hello world!", 0..5, red).unwrap();
//!
//! let mut paint = TextPaint::default();
//! for span in spans.spans_at(2) {
//!     span.update_draw_state(&mut paint);
//! }
//! assert_eq!(paint.color(), red.painted_color());
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the Rust standard library.
//! - `libm`: Use floating point implementations from [libm][].
//! - `bytemuck`: Implement the [bytemuck][] marker traits for the pod types.
//!
//! At least one of `std` and `libm` is required.
//!
//! [libm]: https://crates.io/crates/libm
//! [bytemuck]: https://crates.io/crates/bytemuck
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("text_spans requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod color;
mod error;
mod foreground;
mod managed;
mod paint;
mod span_set;
mod transport;

#[cfg(feature = "bytemuck")]
mod impl_bytemuck;

pub use crate::color::Argb;
pub use crate::error::{DecodeError, DecodeErrorKind, RangeError, RangeErrorKind};
pub use crate::foreground::ForegroundColorSpan;
pub use crate::managed::ManagedSpan;
pub use crate::paint::TextPaint;
pub use crate::span_set::SpanSet;
pub use crate::transport::{SpanKind, TransportBuffer, TransportCursor};
