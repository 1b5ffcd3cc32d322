//! Transformer trait and lazy stream adapter
//!
//! Provides the [`Transformer`] trait for per-envelope rewrites and
//! [`TransformStream`], which drives a transformer over an envelope
//! iterator one element at a time.

use crate::envelope::RecordEnvelope;
use crate::error::PipelineResult;
use std::fmt;
use std::iter::FusedIterator;

/// Pipeline transformer
///
/// Implementations take ownership of an envelope, rewrite it in place and
/// return the same envelope. They must not drop or duplicate envelopes; a
/// record they cannot handle is an error, not a skip.
pub trait Transformer: Send + Sync + fmt::Debug {
    /// Registered name (for logs and registry lookup)
    fn name(&self) -> &str;

    /// Rewrite one envelope
    ///
    /// # Errors
    /// Returns [`PipelineError::UnsupportedRecordKind`] for record kinds
    /// outside the contract.
    ///
    /// [`PipelineError::UnsupportedRecordKind`]: crate::PipelineError::UnsupportedRecordKind
    fn transform_envelope(&self, envelope: RecordEnvelope) -> PipelineResult<RecordEnvelope>;
}

/// Stream-level operations available on every [`Transformer`]
pub trait TransformerExt: Transformer {
    /// Lazily apply this transformer to a sequence of envelopes
    ///
    /// Nothing is pulled from `envelopes` until the returned stream is
    /// iterated.
    fn transform<I>(&self, envelopes: I) -> TransformStream<'_, Self, I::IntoIter>
    where
        I: IntoIterator<Item = RecordEnvelope>;
}

impl<T: Transformer + ?Sized> TransformerExt for T {
    fn transform<I>(&self, envelopes: I) -> TransformStream<'_, Self, I::IntoIter>
    where
        I: IntoIterator<Item = RecordEnvelope>,
    {
        TransformStream::new(self, envelopes.into_iter())
    }
}

/// Lazy, fail-fast transformed envelope stream
///
/// Pulls one input per call to `next`, yields one output per input in
/// input order. The first error is yielded once; after that the stream is
/// exhausted and the remaining input is never pulled.
pub struct TransformStream<'a, T: ?Sized, I> {
    transformer: &'a T,
    inner: I,
    emitted: usize,
    failed: bool,
}

impl<'a, T, I> TransformStream<'a, T, I>
where
    T: Transformer + ?Sized,
    I: Iterator<Item = RecordEnvelope>,
{
    /// Create stream over an envelope iterator
    #[inline]
    #[must_use]
    pub fn new(transformer: &'a T, inner: I) -> Self {
        Self {
            transformer,
            inner,
            emitted: 0,
            failed: false,
        }
    }

    /// Number of envelopes emitted successfully so far
    #[inline]
    #[must_use]
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Whether the stream stopped on an error
    #[inline]
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failed
    }

    /// Drain the stream, stopping at the first error
    ///
    /// # Errors
    /// Returns the first error produced by the transformer.
    pub fn try_collect(self) -> PipelineResult<Vec<RecordEnvelope>> {
        self.collect()
    }
}

impl<T, I> Iterator for TransformStream<'_, T, I>
where
    T: Transformer + ?Sized,
    I: Iterator<Item = RecordEnvelope>,
{
    type Item = PipelineResult<RecordEnvelope>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let envelope = self.inner.next()?;
        match self.transformer.transform_envelope(envelope) {
            Ok(envelope) => {
                self.emitted += 1;
                Some(Ok(envelope))
            }
            Err(e) => {
                tracing::error!(
                    transformer = self.transformer.name(),
                    emitted = self.emitted,
                    error = %e,
                    "Transform stream aborted"
                );
                self.failed = true;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.inner.size_hint().1)
        }
    }
}

impl<T, I> FusedIterator for TransformStream<'_, T, I>
where
    T: Transformer + ?Sized,
    I: FusedIterator<Item = RecordEnvelope>,
{
}

impl<T, I> fmt::Debug for TransformStream<'_, T, I>
where
    T: Transformer + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformStream")
            .field("transformer", &self.transformer.name())
            .field("emitted", &self.emitted)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}
