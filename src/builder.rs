use crate::engine::LcsEngine;
use crate::error::{LcsError, LcsResult};

/// Configures an [`LcsEngine`].
///
/// ```
/// use lcs_all::LcsEngineBuilder;
///
/// let engine = LcsEngineBuilder::new(b"AB", b"BA")
///     .max_alignments(16)
///     .build()
///     .unwrap();
/// assert_eq!(engine.max_alignments(), Some(16));
/// ```
pub struct LcsEngineBuilder<'a, T> {
    source: &'a [T],
    target: &'a [T],
    max_alignments: Option<usize>,
}

impl<'a, T> LcsEngineBuilder<'a, T> {
    pub fn new(source: &'a [T], target: &'a [T]) -> Self {
        Self {
            source,
            target,
            max_alignments: None,
        }
    }

    /// Refuse to flatten trees with more than `limit` root-to-leaf walks.
    pub fn max_alignments(mut self, limit: usize) -> Self {
        self.max_alignments = Some(limit);
        self
    }

    /// Validate the configuration and create the engine.
    pub fn build(self) -> LcsResult<LcsEngine<'a, T>> {
        if self.max_alignments == Some(0) {
            return Err(LcsError::invalid_config("max_alignments must be positive"));
        }
        Ok(LcsEngine::with_max_alignments(
            self.source,
            self.target,
            self.max_alignments,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_cap() {
        let engine = LcsEngineBuilder::new(b"AB", b"BA").build().unwrap();
        assert_eq!(engine.max_alignments(), None);
        assert_eq!(engine.source(), b"AB");
    }

    #[test]
    fn zero_cap_is_rejected() {
        let err = LcsEngineBuilder::new(b"AB", b"BA")
            .max_alignments(0)
            .build()
            .unwrap_err();
        assert!(matches!(err, LcsError::InvalidConfig(_)));
    }
}
