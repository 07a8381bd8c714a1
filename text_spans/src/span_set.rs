// Copyright 2026 the Text Spans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranged span storage.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{ManagedSpan, RangeError};

/// Spans applied to byte ranges of a text buffer.
///
/// The set stores only the spans; the text itself stays with the layout
/// engine. [`apply`](Self::apply) validates each range against the current
/// text, so queries can assume every stored range was valid for the buffer
/// it was applied to. Callers that edit the text are responsible for
/// clearing or re-applying spans afterwards.
///
/// Only [`ManagedSpan`] types can be stored, which keeps arbitrary values
/// out of the pipeline's own span bookkeeping.
#[derive(Clone, Debug)]
pub struct SpanSet<S: ManagedSpan> {
    spans: Vec<(Range<usize>, S)>,
}

impl<S: ManagedSpan> SpanSet<S> {
    /// Creates an empty span set.
    #[must_use]
    pub fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Applies `span` to `range` within `text`.
    ///
    /// The range must be non-reversed, in bounds for `text`, and aligned to
    /// UTF-8 character boundaries.
    pub fn apply(&mut self, text: &str, range: Range<usize>, span: S) -> Result<(), RangeError> {
        let len = text.len();
        if range.start > range.end {
            return Err(RangeError::start_after_end(range.start, range.end, len));
        }
        if range.end > len {
            return Err(RangeError::out_of_bounds(range.start, range.end, len));
        }
        if !text.is_char_boundary(range.start) || !text.is_char_boundary(range.end) {
            return Err(RangeError::not_char_aligned(range.start, range.end, len));
        }
        self.spans.push((range, span));
        Ok(())
    }

    /// Iterates over all spans and their ranges, in application order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Range<usize>, &S)> {
        self.spans.iter().map(|(range, span)| (range, span))
    }

    /// The spans whose range contains the byte at `index`.
    pub fn spans_at(&self, index: usize) -> impl Iterator<Item = &S> {
        self.spans
            .iter()
            .filter_map(move |(range, span)| range.contains(&index).then_some(span))
    }

    /// The spans whose range intersects `range`.
    pub fn spans_intersecting(&self, range: Range<usize>) -> impl Iterator<Item = &S> {
        self.spans.iter().filter_map(move |(applied, span)| {
            (applied.start < range.end && applied.end > range.start).then_some(span)
        })
    }

    /// The number of spans in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns `true` if no spans have been applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Keeps only the spans for which `predicate` returns `true`.
    pub fn retain(&mut self, mut predicate: impl FnMut(&Range<usize>, &S) -> bool) {
        self.spans.retain(|(range, span)| predicate(range, span));
    }

    /// Removes all spans.
    pub fn clear(&mut self) {
        self.spans.clear();
    }
}

impl<S: ManagedSpan> Default for SpanSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
