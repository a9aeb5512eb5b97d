//! Confirmation gate for destructive actions

use async_trait::async_trait;

/// Interactive yes/no prompt
///
/// `true` means the user accepted. Implementations may wait indefinitely.
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    async fn confirm(&self, title: &str, message: &str) -> bool;
}

/// Always answers the same way (non-interactive front ends)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticConfirm(pub bool);

#[async_trait]
impl ConfirmDialog for StaticConfirm {
    async fn confirm(&self, title: &str, _message: &str) -> bool {
        tracing::debug!(title, accepted = self.0, "Confirmation answered statically");
        self.0
    }
}
