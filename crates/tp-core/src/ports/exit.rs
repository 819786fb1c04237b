use async_trait::async_trait;

/// Host collaborator that decides what leaving the flow means
/// (closing a window, ending a terminal session, ...).
#[async_trait]
pub trait ExitPort: Send + Sync {
    async fn request_exit(&self) -> anyhow::Result<()>;
}
