//! Run Session use case
//!
//! Fans out one conversation per seed prompt across a bounded worker
//! pool and gathers each conversation's transcript as it completes.

use crate::config::RunParams;
use crate::ports::bot_transport::BotTransport;
use crate::ports::customer_simulator::CustomerSimulator;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use crate::use_cases::drive_conversation::DriveConversationUseCase;
use botbench_domain::{Transcript, TurnLog};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Errors that can occur when launching a run
#[derive(Error, Debug)]
pub enum RunSessionError {
    #[error("No seed prompts provided")]
    NoSeedPrompts,
}

/// Use case for running all conversations of a test session
///
/// Conversations are fully independent: they share only the read-only
/// [`RunParams`] and the transport/simulator handles. One conversation's
/// failure (transport, malformed body, or simulator) never aborts its
/// siblings, and every seed prompt yields exactly one transcript.
pub struct RunSessionUseCase<T: BotTransport + 'static, S: CustomerSimulator + 'static> {
    transport: Arc<T>,
    simulator: Arc<S>,
}

impl<T: BotTransport + 'static, S: CustomerSimulator + 'static> RunSessionUseCase<T, S> {
    pub fn new(transport: Arc<T>, simulator: Arc<S>) -> Self {
        Self {
            transport,
            simulator,
        }
    }

    /// Execute the run with default (no-op) progress
    pub async fn execute(
        &self,
        seed_prompts: &[String],
        params: &RunParams,
    ) -> Result<Vec<Transcript>, RunSessionError> {
        self.execute_with_progress(seed_prompts, params, &NoProgress)
            .await
    }

    /// Execute the run with progress callbacks
    ///
    /// Transcripts come back in completion order, not seed order.
    pub async fn execute_with_progress(
        &self,
        seed_prompts: &[String],
        params: &RunParams,
        progress: &dyn ProgressNotifier,
    ) -> Result<Vec<Transcript>, RunSessionError> {
        if seed_prompts.is_empty() {
            return Err(RunSessionError::NoSeedPrompts);
        }

        info!(
            "Starting run: {} conversations, {} workers, {} rounds",
            seed_prompts.len(),
            params.max_workers,
            params.rounds
        );
        progress.on_run_start(seed_prompts.len());

        let semaphore = Arc::new(Semaphore::new(params.max_workers.max(1)));
        let mut join_set = JoinSet::new();

        // Snapshot of the seed list: later mutations by the caller do
        // not affect a run already in flight.
        for (index, seed) in seed_prompts.iter().enumerate() {
            let driver =
                DriveConversationUseCase::new(Arc::clone(&self.transport), Arc::clone(&self.simulator));
            let params = params.clone();
            let seed = seed.clone();
            let semaphore = Arc::clone(&semaphore);

            join_set.spawn(async move {
                let _permit = semaphore.acquire_owned().await.expect("semaphore");
                (index, driver.execute(&seed, &params).await)
            });
        }

        let mut transcripts = Vec::with_capacity(seed_prompts.len());

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, Ok(transcript))) => {
                    debug!("Conversation {} completed", index + 1);
                    progress.on_conversation_complete(index, true);
                    transcripts.push(transcript);
                }
                Ok((index, Err(aborted))) => {
                    warn!("Conversation {} aborted: {}", index + 1, aborted.source);
                    progress.on_conversation_complete(index, false);
                    let mut log = aborted.log;
                    log.push(format!("Error generating next message: {}", aborted.source));
                    transcripts.push(log.into_transcript());
                }
                Err(e) => {
                    warn!("Conversation task failed: {}", e);
                    let mut log = TurnLog::new();
                    log.push(format!("Conversation task failed: {}", e));
                    transcripts.push(log.into_transcript());
                }
            }
        }

        progress.on_run_complete();
        Ok(transcripts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::bot_transport::ChatId;
    use crate::ports::customer_simulator::SimulatorError;
    use async_trait::async_trait;
    use botbench_domain::{BotReply, BotTurn, CorrelationId, Message};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    // === Mock implementations ===

    /// Echo transport with an injectable per-call delay, tracking the
    /// in-flight high-water mark.
    struct EchoTransport {
        delay: Duration,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl EchoTransport {
        fn new() -> Self {
            Self::with_delay(Duration::ZERO)
        }

        fn with_delay(delay: Duration) -> Self {
            Self {
                delay,
                in_flight: AtomicUsize::new(0),
                max_in_flight: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl BotTransport for EchoTransport {
        async fn send_turn(
            &self,
            _correlation_id: &CorrelationId,
            message: &str,
        ) -> (BotTurn, Vec<String>) {
            let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(current, Ordering::SeqCst);

            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }

            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            let reply = BotReply::new(json!({"sentence": format!("{}+ack", message)}));
            (BotTurn::Reply(reply), vec!["Request time: 0.01s".to_string()])
        }

        async fn resolve_chat_id(&self, _correlation_id: &CorrelationId) -> Option<ChatId> {
            None
        }
    }

    /// Succeeds everywhere except for conversations seeded with "poison".
    struct SelectiveSimulator;

    #[async_trait]
    impl CustomerSimulator for SelectiveSimulator {
        async fn next_message(
            &self,
            history: &[Message],
            _steering_prompt: &str,
        ) -> Result<String, SimulatorError> {
            if history.first().map(|m| m.content.as_str()) == Some("poison") {
                return Err(SimulatorError::RequestFailed("invalid api key".to_string()));
            }
            Ok("generated".to_string())
        }
    }

    /// Records progress callbacks.
    struct RecordingProgress {
        started_with: AtomicUsize,
        completed: AtomicUsize,
        failed: AtomicUsize,
        finished: AtomicUsize,
    }

    impl RecordingProgress {
        fn new() -> Self {
            Self {
                started_with: AtomicUsize::new(0),
                completed: AtomicUsize::new(0),
                failed: AtomicUsize::new(0),
                finished: AtomicUsize::new(0),
            }
        }
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_run_start(&self, total_conversations: usize) {
            self.started_with.store(total_conversations, Ordering::SeqCst);
        }

        fn on_conversation_complete(&self, _seed_index: usize, success: bool) {
            if success {
                self.completed.fetch_add(1, Ordering::SeqCst);
            } else {
                self.failed.fetch_add(1, Ordering::SeqCst);
            }
        }

        fn on_run_complete(&self) {
            self.finished.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn seeds(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("seed-{}", i)).collect()
    }

    fn params(rounds: usize, workers: usize) -> RunParams {
        RunParams::default()
            .with_endpoint("http://localhost/web/web")
            .with_rounds(rounds)
            .with_max_workers(workers)
    }

    // === Tests ===

    #[tokio::test]
    async fn n_seeds_produce_n_transcripts() {
        let runner = RunSessionUseCase::new(
            Arc::new(EchoTransport::new()),
            Arc::new(SelectiveSimulator),
        );

        let transcripts = runner.execute(&seeds(5), &params(2, 5)).await.unwrap();

        assert_eq!(transcripts.len(), 5);
        for transcript in &transcripts {
            assert!(transcript.contains("Conversation ID:"));
        }
    }

    #[tokio::test]
    async fn empty_seed_set_is_refused() {
        let runner = RunSessionUseCase::new(
            Arc::new(EchoTransport::new()),
            Arc::new(SelectiveSimulator),
        );

        let result = runner.execute(&[], &params(2, 5)).await;
        assert!(matches!(result, Err(RunSessionError::NoSeedPrompts)));
    }

    #[tokio::test]
    async fn simulator_failure_is_contained_to_its_conversation() {
        let runner = RunSessionUseCase::new(
            Arc::new(EchoTransport::new()),
            Arc::new(SelectiveSimulator),
        );

        let mut prompts = seeds(3);
        prompts.insert(1, "poison".to_string());

        let transcripts = runner.execute(&prompts, &params(2, 4)).await.unwrap();

        assert_eq!(transcripts.len(), 4);
        let aborted: Vec<_> = transcripts
            .iter()
            .filter(|t| t.contains("Error generating next message"))
            .collect();
        assert_eq!(aborted.len(), 1);
        // The poisoned transcript still carries its partial log.
        assert!(aborted[0].contains("Bot: poison+ack"));
        // The healthy conversations ran to the last round.
        let healthy = transcripts
            .iter()
            .filter(|t| t.contains("--- Round 2 ---"))
            .count();
        assert_eq!(healthy, 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn worker_pool_bounds_concurrency() {
        let delay = Duration::from_millis(50);
        let transport = Arc::new(EchoTransport::with_delay(delay));
        let runner =
            RunSessionUseCase::new(Arc::clone(&transport), Arc::new(SelectiveSimulator));

        let started = std::time::Instant::now();
        let transcripts = runner.execute(&seeds(5), &params(1, 2)).await.unwrap();
        let elapsed = started.elapsed();

        assert_eq!(transcripts.len(), 5);
        assert!(transport.max_in_flight.load(Ordering::SeqCst) <= 2);
        // 5 conversations through 2 workers: at least 3 sequential batches.
        assert!(elapsed >= delay * 3, "run finished too fast: {:?}", elapsed);
    }

    #[tokio::test]
    async fn progress_callbacks_cover_every_conversation() {
        let runner = RunSessionUseCase::new(
            Arc::new(EchoTransport::new()),
            Arc::new(SelectiveSimulator),
        );
        let progress = RecordingProgress::new();

        let mut prompts = seeds(2);
        prompts.push("poison".to_string());

        runner
            .execute_with_progress(&prompts, &params(1, 3), &progress)
            .await
            .unwrap();

        assert_eq!(progress.started_with.load(Ordering::SeqCst), 3);
        assert_eq!(progress.completed.load(Ordering::SeqCst), 2);
        assert_eq!(progress.failed.load(Ordering::SeqCst), 1);
        assert_eq!(progress.finished.load(Ordering::SeqCst), 1);
    }
}
