// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Workout Feedback
//!
//! [`SoundManager`] turns workout events into short tone/vibration sequences.
//! Sequences run one after another on a single background task fed by a
//! bounded queue; waits are `tokio::time::sleep`, so callers never block
//! and tests can drive time deterministically.
//!
//! Feedback is best effort: a failing backend is logged and the sequence
//! carries on, and nothing is ever reported back to the caller.

use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::config::FeedbackConfig;
use crate::constants::limits::FEEDBACK_QUEUE_CAPACITY;
use crate::logging::AppLogger;

pub mod backend;
pub mod sequence;

pub use backend::{NoVibration, TerminalBell, ToneGenerator, Vibrator};
pub use sequence::{sequence_duration, sequence_for, FeedbackEvent, FeedbackStep, ToneKind};

struct Request {
    event: FeedbackEvent,
    vibrate: bool,
    done: Option<oneshot::Sender<()>>,
}

/// Background feedback sequencer
pub struct SoundManager {
    tx: mpsc::Sender<Request>,
    worker: JoinHandle<()>,
}

impl SoundManager {
    /// Spawn the sequencer task; must be called inside a tokio runtime
    pub fn new(
        tones: Arc<dyn ToneGenerator>,
        vibrator: Arc<dyn Vibrator>,
        config: FeedbackConfig,
    ) -> Self {
        let (tx, mut rx) = mpsc::channel::<Request>(FEEDBACK_QUEUE_CAPACITY);

        let worker = tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                let vibrate = request.vibrate && config.vibration_enabled;
                run_sequence(
                    request.event,
                    &sequence_for(request.event, vibrate),
                    tones.as_ref(),
                    vibrator.as_ref(),
                    config.sound_enabled,
                )
                .await;
                if let Some(done) = request.done {
                    let _ = done.send(());
                }
            }
            debug!("Feedback sequencer stopped");
        });

        Self { tx, worker }
    }

    /// Terminal bell, no haptics
    pub fn with_defaults(config: FeedbackConfig) -> Self {
        Self::new(Arc::new(TerminalBell), Arc::new(NoVibration), config)
    }

    /// Queue feedback for `event` and return immediately
    ///
    /// Events arriving while the queue is full are dropped.
    pub fn play(&self, event: FeedbackEvent, vibrate: bool) {
        self.enqueue(Request {
            event,
            vibrate,
            done: None,
        });
    }

    /// Queue feedback for `event` and wait until its sequence has finished
    pub async fn play_and_wait(&self, event: FeedbackEvent, vibrate: bool) {
        let (done, finished) = oneshot::channel();
        if self.enqueue(Request {
            event,
            vibrate,
            done: Some(done),
        }) {
            let _ = finished.await;
        }
    }

    /// Finish queued sequences, then stop the task
    pub async fn shutdown(self) {
        let Self { tx, worker } = self;
        drop(tx);
        if let Err(e) = worker.await {
            warn!("Feedback sequencer ended abnormally: {}", e);
        }
    }

    fn enqueue(&self, request: Request) -> bool {
        let event = request.event;
        match self.tx.try_send(request) {
            Ok(()) => true,
            Err(e) => {
                AppLogger::log_feedback_failure(event.name(), "queue", &e.to_string());
                false
            }
        }
    }
}

async fn run_sequence(
    event: FeedbackEvent,
    steps: &[FeedbackStep],
    tones: &dyn ToneGenerator,
    vibrator: &dyn Vibrator,
    sound_enabled: bool,
) {
    for step in steps {
        match *step {
            FeedbackStep::Tone { kind, duration } => {
                if !sound_enabled {
                    continue;
                }
                if let Err(e) = tones.play_tone(kind, duration) {
                    AppLogger::log_feedback_failure(event.name(), step.label(), &e.to_string());
                }
                sleep(duration).await;
            }
            FeedbackStep::Vibrate { duration } => {
                if let Err(e) = vibrator.vibrate(duration) {
                    AppLogger::log_feedback_failure(event.name(), step.label(), &e.to_string());
                }
            }
            FeedbackStep::Wait { duration } => {
                if sound_enabled {
                    sleep(duration).await;
                }
            }
        }
    }
}
