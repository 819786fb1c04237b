//! Flow orchestrator.
//!
//! This module coordinates the flow state machine and its side effects.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, error, info, info_span, warn, Instrument};

use tp_core::{
    config::FlowConfig,
    flow::{Activity, FlowAction, FlowIntent, FlowSnapshot, FlowState, FlowStateMachine, Screen},
    ids::CancelToken,
    ports::{ExitPort, FlowEventPort, SchedulerPort},
    premium::{PremiumOption, PremiumResolution},
};

use crate::usecases::flow::context::FlowContext;

pub type IntentSender = mpsc::UnboundedSender<FlowIntent>;
pub type IntentReceiver = mpsc::UnboundedReceiver<FlowIntent>;

/// Inbox for intents raised outside a dispatch, such as fired timers.
///
/// The host drains the receiver and feeds each intent back into
/// [`FlowOrchestrator::dispatch`], so dispatches stay sequential.
pub fn intent_channel() -> (IntentSender, IntentReceiver) {
    mpsc::unbounded_channel()
}

/// Orchestrator that drives flow state and side effects.
pub struct FlowOrchestrator {
    context: Arc<FlowContext>,
    timings: FlowConfig,
    pending: Mutex<HashMap<Activity, CancelToken>>,

    scheduler: Arc<dyn SchedulerPort>,
    event_port: Arc<dyn FlowEventPort>,
    exit_port: Arc<dyn ExitPort>,
    inbox: IntentSender,
}

impl FlowOrchestrator {
    pub fn new(
        initial_state: FlowState,
        timings: FlowConfig,
        scheduler: Arc<dyn SchedulerPort>,
        event_port: Arc<dyn FlowEventPort>,
        exit_port: Arc<dyn ExitPort>,
        inbox: IntentSender,
    ) -> Self {
        Self {
            context: FlowContext::new(initial_state),
            timings,
            pending: Mutex::new(HashMap::new()),
            scheduler,
            event_port,
            exit_port,
            inbox,
        }
    }

    pub async fn next_onboarding_page(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::OnboardingPageNext).await
    }

    pub async fn previous_onboarding_page(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::OnboardingPagePrevious).await
    }

    pub async fn finish_onboarding(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::OnboardingFinished).await
    }

    pub async fn select_premium(&self, option: PremiumOption) -> FlowSnapshot {
        self.dispatch(FlowIntent::PremiumOptionSelected { option })
            .await
    }

    /// Upgrade with the currently selected plan.
    pub async fn upgrade(&self) -> FlowSnapshot {
        let option = self.context.read(FlowState::premium_selection).await;
        self.dispatch(FlowIntent::PremiumResolved {
            resolution: PremiumResolution::Upgrade { option },
        })
        .await
    }

    pub async fn restore(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::PremiumResolved {
            resolution: PremiumResolution::Restore,
        })
        .await
    }

    pub async fn begin_preparation(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::BeginPreparation).await
    }

    pub async fn answer(&self, text: String) -> FlowSnapshot {
        self.dispatch(FlowIntent::AnswerChanged { text }).await
    }

    pub async fn question_advance(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::QuestionAdvance).await
    }

    pub async fn question_retreat(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::QuestionRetreat).await
    }

    pub async fn request_results(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::RequestResults).await
    }

    pub async fn start_new_session(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::StartNewSession).await
    }

    pub async fn back(&self) -> FlowSnapshot {
        self.dispatch(FlowIntent::Back).await
    }

    pub async fn get_state(&self) -> FlowSnapshot {
        self.context.read(FlowState::snapshot).await
    }

    pub async fn current_screen(&self) -> Screen {
        self.context.read(FlowState::current_screen).await
    }

    pub async fn reachable_screens(&self) -> Vec<Screen> {
        self.context.read(FlowState::reachable_screens).await
    }

    pub async fn dispatch(&self, intent: FlowIntent) -> FlowSnapshot {
        // Serializes host commands with intents arriving from the inbox.
        let _dispatch_guard = self.context.acquire_dispatch_lock().await;

        let span = info_span!("usecase.flow_orchestrator.dispatch", intent = intent.name());
        async {
            let current = self.context.get_state().await;
            let from = current.current_screen();
            let previous_activity = current.activity();
            let intent_name = intent.name();

            let (next, actions) = FlowStateMachine::transition(current, intent);
            info!(from = %from, to = %next.current_screen(), intent = intent_name, "flow state transition");

            self.release_activity(previous_activity, next.activity())
                .await;
            let snapshot = next.snapshot();
            self.context.set_state(next).await;
            self.execute_actions(actions).await;
            self.emit(snapshot.clone()).await;

            snapshot
        }
        .instrument(span)
        .await
    }

    /// Cancels callbacks that are still pending.
    pub async fn shutdown(&self) {
        let mut pending = self.pending.lock().await;
        for (activity, token) in pending.drain() {
            if self.scheduler.cancel(&token) {
                info!(?activity, %token, "cancelled pending flow intent");
            }
        }
    }

    async fn execute_actions(&self, actions: Vec<FlowAction>) {
        for action in actions {
            debug!(?action, "flow executing action");
            match action {
                FlowAction::ScheduleIntent { activity, intent } => {
                    let delay = self.timings.delay_for(activity);
                    let inbox = self.inbox.clone();
                    let intent_name = intent.name();
                    let token = self.scheduler.schedule(
                        delay,
                        Box::new(move || {
                            if inbox.send(intent).is_err() {
                                warn!(intent = intent_name, "intent inbox closed, dropping scheduled intent");
                            }
                        }),
                    );
                    debug!(
                        %token,
                        ?activity,
                        delay_ms = delay.as_millis() as u64,
                        "flow intent scheduled"
                    );
                    self.pending.lock().await.insert(activity, token);
                }
                FlowAction::RequestExit => {
                    if let Err(err) = self.exit_port.request_exit().await {
                        error!(error = %err, "flow exit request failed");
                    }
                }
            }
        }
    }

    /// Forgets the timer of an activity that ended. When the activity was
    /// abandoned (the user navigated away) the timer is cancelled so it
    /// cannot land on a later visit of the same screen.
    async fn release_activity(&self, previous: Option<Activity>, next: Option<Activity>) {
        let Some(activity) = previous else {
            return;
        };
        if next == Some(activity) {
            return;
        }
        if let Some(token) = self.pending.lock().await.remove(&activity) {
            if self.scheduler.cancel(&token) {
                debug!(?activity, %token, "abandoned flow intent cancelled");
            }
        }
    }

    async fn emit(&self, snapshot: FlowSnapshot) {
        if let Err(err) = self.event_port.emit_flow_state_changed(snapshot).await {
            warn!(error = %err, "flow state change emit failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use mockall::mock;
    use tp_core::ports::ScheduledCallback;
    use tp_core::questions::PromptSet;

    mock! {
        pub Exit {}

        #[async_trait]
        impl ExitPort for Exit {
            async fn request_exit(&self) -> anyhow::Result<()>;
        }
    }

    #[derive(Default)]
    struct RecordingEventPort {
        emitted: tokio::sync::Mutex<Vec<FlowSnapshot>>,
    }

    impl RecordingEventPort {
        async fn screens(&self) -> Vec<Screen> {
            self.emitted.lock().await.iter().map(|s| s.screen).collect()
        }
    }

    #[async_trait]
    impl FlowEventPort for RecordingEventPort {
        async fn emit_flow_state_changed(&self, snapshot: FlowSnapshot) -> anyhow::Result<()> {
            self.emitted.lock().await.push(snapshot);
            Ok(())
        }
    }

    struct FailingEventPort;

    #[async_trait]
    impl FlowEventPort for FailingEventPort {
        async fn emit_flow_state_changed(&self, _snapshot: FlowSnapshot) -> anyhow::Result<()> {
            anyhow::bail!("renderer gone")
        }
    }

    /// Holds callbacks until the test fires them by hand.
    #[derive(Default)]
    struct ManualScheduler {
        scheduled: StdMutex<Vec<(CancelToken, Duration, Option<ScheduledCallback>)>>,
        cancelled: StdMutex<Vec<CancelToken>>,
    }

    impl ManualScheduler {
        fn delays(&self) -> Vec<Duration> {
            self.scheduled.lock().unwrap().iter().map(|(_, d, _)| *d).collect()
        }

        fn fire_all(&self) {
            let callbacks: Vec<ScheduledCallback> = self
                .scheduled
                .lock()
                .unwrap()
                .iter_mut()
                .filter_map(|(_, _, cb)| cb.take())
                .collect();
            for callback in callbacks {
                callback();
            }
        }

        fn cancelled(&self) -> Vec<CancelToken> {
            self.cancelled.lock().unwrap().clone()
        }
    }

    impl SchedulerPort for ManualScheduler {
        fn schedule(&self, delay: Duration, callback: ScheduledCallback) -> CancelToken {
            let token = CancelToken::new();
            self.scheduled
                .lock()
                .unwrap()
                .push((token.clone(), delay, Some(callback)));
            token
        }

        fn cancel(&self, token: &CancelToken) -> bool {
            let mut scheduled = self.scheduled.lock().unwrap();
            let Some(entry) = scheduled.iter_mut().find(|(t, _, _)| t == token) else {
                return false;
            };
            if entry.2.take().is_none() {
                return false;
            }
            self.cancelled.lock().unwrap().push(token.clone());
            true
        }
    }

    struct Harness {
        orchestrator: FlowOrchestrator,
        scheduler: Arc<ManualScheduler>,
        events: Arc<RecordingEventPort>,
        inbox: IntentReceiver,
    }

    fn build(state: FlowState, exit: MockExit) -> Harness {
        let scheduler = Arc::new(ManualScheduler::default());
        let events = Arc::new(RecordingEventPort::default());
        let (tx, rx) = intent_channel();
        let orchestrator = FlowOrchestrator::new(
            state,
            FlowConfig::default(),
            scheduler.clone(),
            events.clone(),
            Arc::new(exit),
            tx,
        );
        Harness {
            orchestrator,
            scheduler,
            events,
            inbox: rx,
        }
    }

    fn unlocked() -> FlowState {
        FlowState::unlocked(PromptSet::default())
    }

    #[tokio::test]
    async fn dispatch_emits_a_snapshot_per_intent() {
        let h = build(FlowState::default(), MockExit::new());

        h.orchestrator.finish_onboarding().await;
        h.orchestrator.restore().await;

        assert_eq!(
            h.events.screens().await,
            vec![Screen::Premium, Screen::Entry]
        );
    }

    #[tokio::test]
    async fn begin_preparation_schedules_start_session_once() {
        let mut h = build(unlocked(), MockExit::new());

        let snapshot = h.orchestrator.begin_preparation().await;
        assert_eq!(snapshot.activity, Some(Activity::Preparing));
        h.orchestrator.begin_preparation().await;
        assert_eq!(h.scheduler.delays(), vec![Duration::from_millis(2_500)]);

        h.scheduler.fire_all();
        let intent = h.inbox.recv().await.expect("scheduled intent");
        assert_eq!(intent, FlowIntent::StartSession);

        let snapshot = h.orchestrator.dispatch(intent).await;
        assert_eq!(snapshot.screen, Screen::Questions);
        assert_eq!(snapshot.activity, None);
        assert!(h.orchestrator.pending.lock().await.is_empty());
    }

    #[tokio::test]
    async fn leaving_while_analyzing_cancels_the_timer() {
        let h = build(unlocked(), MockExit::new());
        h.orchestrator.dispatch(FlowIntent::StartSession).await;
        for _ in 0..4 {
            h.orchestrator.question_advance().await;
        }
        assert_eq!(h.orchestrator.current_screen().await, Screen::SessionCompleted);

        h.orchestrator.request_results().await;
        let snapshot = h.orchestrator.back().await;

        assert_eq!(snapshot.screen, Screen::Questions);
        assert_eq!(h.scheduler.cancelled().len(), 1);
        assert!(h.orchestrator.pending.lock().await.is_empty());
    }

    #[tokio::test]
    async fn back_at_entry_requests_exit_once() {
        let mut exit = MockExit::new();
        exit.expect_request_exit().times(1).returning(|| Ok(()));
        let h = build(unlocked(), exit);

        let snapshot = h.orchestrator.back().await;

        assert_eq!(snapshot.screen, Screen::Entry);
        assert!(snapshot.stack.is_empty());
    }

    #[tokio::test]
    async fn exit_failure_does_not_fail_dispatch() {
        let mut exit = MockExit::new();
        exit.expect_request_exit()
            .times(1)
            .returning(|| Err(anyhow::anyhow!("window already closed")));
        let h = build(unlocked(), exit);

        let snapshot = h.orchestrator.back().await;

        assert_eq!(snapshot.screen, Screen::Entry);
    }

    #[tokio::test]
    async fn emit_failure_still_commits_the_transition() {
        let (tx, _rx) = intent_channel();
        let orchestrator = FlowOrchestrator::new(
            FlowState::default(),
            FlowConfig::default(),
            Arc::new(ManualScheduler::default()),
            Arc::new(FailingEventPort),
            Arc::new(MockExit::new()),
            tx,
        );

        orchestrator.finish_onboarding().await;

        assert_eq!(orchestrator.current_screen().await, Screen::Premium);
    }

    #[tokio::test]
    async fn upgrade_uses_the_selected_plan() {
        let h = build(FlowState::default(), MockExit::new());
        h.orchestrator.finish_onboarding().await;
        h.orchestrator.select_premium(PremiumOption::Monthly).await;

        let snapshot = h.orchestrator.upgrade().await;

        assert_eq!(snapshot.screen, Screen::Entry);
        assert_eq!(
            snapshot.premium_resolution,
            Some(PremiumResolution::Upgrade {
                option: PremiumOption::Monthly
            })
        );
    }

    #[tokio::test]
    async fn shutdown_cancels_pending_timers() {
        let h = build(unlocked(), MockExit::new());
        h.orchestrator.begin_preparation().await;

        h.orchestrator.shutdown().await;

        assert_eq!(h.scheduler.cancelled().len(), 1);
        h.scheduler.fire_all();
    }
}
