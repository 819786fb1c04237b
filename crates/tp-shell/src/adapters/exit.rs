use async_trait::async_trait;
use tokio::sync::watch;
use tp_core::ports::ExitPort;
use tracing::info;

/// Ends the event loop when the flow asks to leave.
pub struct ShellExit {
    requested: watch::Sender<bool>,
}

impl ShellExit {
    pub fn new() -> Self {
        let (requested, _) = watch::channel(false);
        Self { requested }
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.requested.subscribe()
    }

    pub fn is_requested(&self) -> bool {
        *self.requested.borrow()
    }
}

impl Default for ShellExit {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ExitPort for ShellExit {
    async fn request_exit(&self) -> anyhow::Result<()> {
        info!("exit requested by flow");
        self.requested.send_replace(true);
        Ok(())
    }
}
