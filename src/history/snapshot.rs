//! Recorded model states

/// A deep copy of the tracked model taken at one point in time.
///
/// An empty tag means the snapshot is untagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<M> {
    value: M,
    tag: String,
}

impl<M> Snapshot<M> {
    pub(crate) fn new(value: M, tag: impl Into<String>) -> Self {
        Self {
            value,
            tag: tag.into(),
        }
    }

    /// The recorded model state
    pub fn value(&self) -> &M {
        &self.value
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn is_tagged(&self) -> bool {
        !self.tag.is_empty()
    }

    /// Check whether this snapshot carries any of `tags`
    pub fn has_any_tag<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter().any(|t| t.as_ref() == self.tag)
    }
}
