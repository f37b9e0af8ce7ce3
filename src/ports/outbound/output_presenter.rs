use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Abstracts where rendered reports and listings end up (stdout, file).
pub trait OutputPresenter {
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}
