use serde::{Deserialize, Serialize};

use super::{Activity, FlowIntent};

/// Side-effects produced by flow transitions.
///
/// 状态迁移产生的副作用。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowAction {
    /// Deliver `intent` once the delay configured for `activity` elapses.
    ScheduleIntent { activity: Activity, intent: FlowIntent },
    /// Retreat ran out of history; the host decides what leaving means.
    RequestExit,
}
