use crate::shared::Result;

/// DescriptionPrompt port for interactive free-text input
///
/// This is the tool's only suspension point: `add` blocks on a single line
/// of operator input. Implementations acquire whatever console resources
/// they need inside `ask` and release them before returning, regardless of
/// the exit path.
pub trait DescriptionPrompt {
    /// Asks the operator a question and returns one line of input
    ///
    /// # Arguments
    /// * `question` - The question to display, including trailing spacing
    ///
    /// # Returns
    /// The operator's answer with the line terminator stripped; an empty
    /// string if the input stream is already closed
    ///
    /// # Errors
    /// Returns an error if reading from the input stream fails
    fn ask(&self, question: &str) -> Result<String>;
}
