//! Tunable limits applied by the board service.

/// Configuration for [`super::TaskBoardService`].
///
/// The default configuration accepts any non-blank text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardConfig {
    /// Maximum task text length in characters, if any.
    pub max_text_length: Option<usize>,
}

impl BoardConfig {
    /// Creates a strict configuration with card-sized text.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_text_length: Some(140),
        }
    }

    /// Limits task text to `max_text_length` characters.
    #[must_use]
    pub const fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = Some(max_text_length);
        self
    }
}
