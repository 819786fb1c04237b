use crate::flow::FlowSnapshot;

#[async_trait::async_trait]
pub trait FlowEventPort: Send + Sync {
    async fn emit_flow_state_changed(&self, snapshot: FlowSnapshot) -> anyhow::Result<()>;
}
