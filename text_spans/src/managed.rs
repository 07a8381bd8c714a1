// Copyright 2026 the Text Spans Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Marker for span types owned by the toolkit's text pipeline.
///
/// A text buffer accumulates spans from several origins, and the pipeline
/// only reconciles and re-serializes the ones it created itself. This
/// trait is how it tells those apart: generic span storage such as
/// [`SpanSet`] is bounded on `ManagedSpan`, so only opted-in types are
/// admitted. There is no blanket impl; a span type becomes managed by
/// implementing the trait.
///
/// [`SpanSet`]: crate::SpanSet
pub trait ManagedSpan: Clone + PartialEq + core::fmt::Debug {}
