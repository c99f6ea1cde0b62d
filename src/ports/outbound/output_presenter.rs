use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where a rendered dependency file is written.
pub trait OutputPresenter {
    /// Presents the content to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    fn present(&self, content: &str) -> Result<()>;

    /// Human-readable destination, e.g. a file path or "stdout"
    fn destination(&self) -> String;
}

impl<T: OutputPresenter + ?Sized> OutputPresenter for Box<T> {
    fn present(&self, content: &str) -> Result<()> {
        (**self).present(content)
    }

    fn destination(&self) -> String {
        (**self).destination()
    }
}
