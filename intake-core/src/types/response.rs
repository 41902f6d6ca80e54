//! Handler chain result type.

/// Handler result for the chain. `Reply(text)` carries the text sent back to the user so later
/// handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Not handled here; pass to next handler.
    Continue,
    /// Handled without replying to the user; stop the chain.
    Stop,
    /// Handled and replied to the user; stop the chain.
    Reply(String),
}
