// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Active Workout Session
//!
//! Drives one workout from start to completion. Four independent machines
//! track the workout itself, the completed-series listing, the last series
//! save and the completion call. Each is a [`LoadState`] published on a
//! `tokio::sync::watch` channel, so any number of observers can follow the
//! transitions.
//!
//! ```text
//! workout:     Idle|Error --start--> Loading --> Success(workout) | Error
//!              any (known id) --delete--> Loading --> Idle | Error
//! series:      * --load--> Loading --> Success(list) | Error
//! save:        * --save--> Loading --> Success(ack) | Error   (needs workout)
//! completion:  * --complete--> Loading --> Success(ack) | Error (needs workout)
//! ```
//!
//! Operations that are not allowed in the current state fail with
//! [`SessionError::InvalidTransition`] and leave every machine untouched.
//! Nothing is retried automatically.

use chrono::Utc;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::watch;

use crate::logging::AppLogger;
use crate::models::{ActionResponse, ActiveWorkout, CompleteWorkoutResponse, CompletedSeries, SeriesData};
use crate::repositories::ActiveWorkoutRepository;

pub mod state;

pub use state::{generate_request_id, generate_session_id, LoadState, SessionError};

pub type SessionResult<T> = Result<T, SessionError>;

/// Identifiers of the workout currently owned by the session
#[derive(Debug, Clone, Default)]
struct Current {
    workout_id: Option<i64>,
    session_id: String,
}

pub struct ActiveWorkoutSession {
    repository: Arc<ActiveWorkoutRepository>,
    workout: watch::Sender<LoadState<ActiveWorkout>>,
    series: watch::Sender<LoadState<Vec<CompletedSeries>>>,
    save: watch::Sender<LoadState<ActionResponse>>,
    completion: watch::Sender<LoadState<CompleteWorkoutResponse>>,
    current: Mutex<Current>,
}

impl ActiveWorkoutSession {
    pub fn new(repository: Arc<ActiveWorkoutRepository>) -> Self {
        Self {
            repository,
            workout: watch::Sender::new(LoadState::Idle),
            series: watch::Sender::new(LoadState::Idle),
            save: watch::Sender::new(LoadState::Idle),
            completion: watch::Sender::new(LoadState::Idle),
            current: Mutex::new(Current::default()),
        }
    }

    pub fn subscribe_workout(&self) -> watch::Receiver<LoadState<ActiveWorkout>> {
        self.workout.subscribe()
    }

    pub fn subscribe_series(&self) -> watch::Receiver<LoadState<Vec<CompletedSeries>>> {
        self.series.subscribe()
    }

    pub fn subscribe_save(&self) -> watch::Receiver<LoadState<ActionResponse>> {
        self.save.subscribe()
    }

    pub fn subscribe_completion(&self) -> watch::Receiver<LoadState<CompleteWorkoutResponse>> {
        self.completion.subscribe()
    }

    pub fn workout_state(&self) -> LoadState<ActiveWorkout> {
        self.workout.borrow().clone()
    }

    pub fn series_state(&self) -> LoadState<Vec<CompletedSeries>> {
        self.series.borrow().clone()
    }

    pub fn save_state(&self) -> LoadState<ActionResponse> {
        self.save.borrow().clone()
    }

    pub fn completion_state(&self) -> LoadState<CompleteWorkoutResponse> {
        self.completion.borrow().clone()
    }

    pub fn workout_id(&self) -> Option<i64> {
        self.current().workout_id
    }

    pub fn session_id(&self) -> Option<String> {
        let current = self.current();
        current.workout_id.map(|_| current.session_id)
    }

    /// Start a workout from `plan_id`, allowed from Idle or Error
    pub async fn start(&self, user_id: i64, plan_id: i64) -> SessionResult<ActiveWorkout> {
        enter_loading(&self.workout, "start workout", "workout", |s| {
            s.is_idle() || s.is_error()
        })?;

        let session_id = generate_session_id();
        let started = match self
            .repository
            .start_workout(user_id, plan_id, &session_id)
            .await
        {
            Ok(response) => response,
            Err(e) => {
                AppLogger::log_workout_event(&session_id, None, "start", false);
                self.workout.send_replace(LoadState::Error(e.to_string()));
                return Err(e.into());
            }
        };

        // Plan exercises degrade to an empty list
        let exercises = match self.repository.plan_exercises(plan_id).await {
            Ok(exercises) => exercises,
            Err(e) => {
                AppLogger::log_soft_fallback("plan_exercises", e.kind(), &e.to_string());
                Vec::new()
            }
        };

        let workout = ActiveWorkout {
            id: started.workout_id,
            plan_id,
            user_id,
            session_id: session_id.clone(),
            started_at: Utc::now().to_rfc3339(),
            duration_minutes: None,
            note: None,
            exercises,
        };

        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Current {
            workout_id: Some(workout.id),
            session_id: session_id.clone(),
        };
        self.series.send_replace(LoadState::Idle);
        self.save.send_replace(LoadState::Idle);
        self.completion.send_replace(LoadState::Idle);
        self.workout.send_replace(LoadState::Success(workout.clone()));

        AppLogger::log_workout_event(&session_id, Some(workout.id), "start", true);
        Ok(workout)
    }

    /// Reload the series already stored for the current workout
    pub async fn load_completed_series(&self) -> SessionResult<Vec<CompletedSeries>> {
        let workout_id = self.require_workout_id("load series")?;
        enter_loading(&self.series, "load series", "series list", |s| !s.is_loading())?;

        match self.repository.completed_series(workout_id).await {
            Ok(series) => {
                self.series.send_replace(LoadState::Success(series.clone()));
                Ok(series)
            }
            Err(e) => {
                self.series.send_replace(LoadState::Error(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Store logged sets for the started workout, then refresh the listing
    pub async fn save_series(&self, series: Vec<SeriesData>) -> SessionResult<ActionResponse> {
        let workout_id = self.require_started("save series")?;
        enter_loading(&self.save, "save series", "series save", |s| !s.is_loading())?;

        let request_id = generate_request_id();
        let saved = match self
            .repository
            .save_series(workout_id, series, &request_id)
            .await
        {
            Ok(ack) => ack,
            Err(e) => {
                self.save.send_replace(LoadState::Error(e.to_string()));
                return Err(e.into());
            }
        };
        self.save.send_replace(LoadState::Success(saved.clone()));
        AppLogger::log_workout_event(&self.current().session_id, Some(workout_id), "save_series", true);

        match self.load_completed_series().await {
            Ok(_) | Err(SessionError::Api(_)) => {}
            Err(e) => tracing::debug!("Skipped series refresh: {}", e),
        }
        Ok(saved)
    }

    /// Complete the started workout, recording its duration
    pub async fn complete(
        &self,
        duration_minutes: i64,
        note: Option<String>,
    ) -> SessionResult<CompleteWorkoutResponse> {
        let workout_id = self.require_started("complete workout")?;
        if self.workout.borrow().value().is_some_and(ActiveWorkout::is_completed) {
            return Err(SessionError::InvalidTransition {
                operation: "complete workout",
                machine: "workout",
                state: "completed",
            });
        }
        // Success is terminal until the next start or reset
        enter_loading(&self.completion, "complete workout", "completion", |s| {
            !s.is_loading() && !s.is_success()
        })?;

        let session_id = self.current().session_id;
        match self
            .repository
            .complete_workout(workout_id, duration_minutes, note.clone())
            .await
        {
            Ok(response) => {
                let recorded = response.duration_minutes.unwrap_or(duration_minutes);
                self.workout.send_modify(|state| {
                    if let LoadState::Success(workout) = state {
                        workout.duration_minutes = Some(recorded);
                        workout.note = note;
                    }
                });
                self.completion.send_replace(LoadState::Success(response.clone()));
                AppLogger::log_workout_event(&session_id, Some(workout_id), "complete", true);
                Ok(response)
            }
            Err(e) => {
                self.completion.send_replace(LoadState::Error(e.to_string()));
                AppLogger::log_workout_event(&session_id, Some(workout_id), "complete", false);
                Err(e.into())
            }
        }
    }

    /// Delete the current workout, from any state with a known workout id
    pub async fn delete(&self) -> SessionResult<ActionResponse> {
        let workout_id = self.require_workout_id("delete workout")?;
        let session_id = self.current().session_id;
        enter_loading(&self.workout, "delete workout", "workout", |s| !s.is_loading())?;

        match self.repository.delete_workout(workout_id).await {
            Ok(ack) => {
                self.reset();
                AppLogger::log_workout_event(&session_id, Some(workout_id), "delete", true);
                Ok(ack)
            }
            Err(e) => {
                self.workout.send_replace(LoadState::Error(e.to_string()));
                AppLogger::log_workout_event(&session_id, Some(workout_id), "delete", false);
                Err(e.into())
            }
        }
    }

    /// Forget the current workout locally so a new one can be started
    pub fn reset(&self) {
        *self.current.lock().unwrap_or_else(PoisonError::into_inner) = Current::default();
        self.workout.send_replace(LoadState::Idle);
        self.series.send_replace(LoadState::Idle);
        self.save.send_replace(LoadState::Idle);
        self.completion.send_replace(LoadState::Idle);
    }

    fn current(&self) -> Current {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn require_workout_id(&self, operation: &'static str) -> SessionResult<i64> {
        self.current().workout_id.ok_or(SessionError::InvalidTransition {
            operation,
            machine: "workout",
            state: "idle",
        })
    }

    fn require_started(&self, operation: &'static str) -> SessionResult<i64> {
        let state = self.workout.borrow();
        match state.value() {
            Some(workout) => Ok(workout.id),
            None => Err(SessionError::InvalidTransition {
                operation,
                machine: "workout",
                state: state.label(),
            }),
        }
    }
}

/// Atomically move `machine` to Loading when `allowed` accepts its state
fn enter_loading<T>(
    machine: &watch::Sender<LoadState<T>>,
    operation: &'static str,
    name: &'static str,
    allowed: impl FnOnce(&LoadState<T>) -> bool,
) -> SessionResult<()> {
    let mut rejected = None;
    machine.send_if_modified(|state| {
        if allowed(state) {
            *state = LoadState::Loading;
            true
        } else {
            rejected = Some(state.label());
            false
        }
    });

    match rejected {
        Some(state) => Err(SessionError::InvalidTransition {
            operation,
            machine: name,
            state,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::models::{
        CompleteWorkoutRequest, CompletedSeriesResponse, DeleteSeriesRequest,
        DeleteWorkoutRequest, PlanExercisesResponse, SaveSeriesRequest, StartWorkoutRequest,
        StartWorkoutResponse, WorkoutExercise,
    };
    use crate::services::{ActiveWorkoutService, ServiceResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct FakeWorkouts {
        fail_start: bool,
        fail_exercises: bool,
        fail_complete: bool,
        /// Completion responses omit `durata_totale`
        omit_duration: bool,
        session_ids: Mutex<Vec<String>>,
        saved: Mutex<Vec<SaveSeriesRequest>>,
        completions: AtomicUsize,
        deletions: AtomicUsize,
    }

    fn ack() -> ActionResponse {
        ActionResponse {
            success: true,
            message: None,
            id: None,
        }
    }

    #[async_trait]
    impl ActiveWorkoutService for FakeWorkouts {
        async fn start_workout(&self, request: &StartWorkoutRequest) -> ServiceResult<StartWorkoutResponse> {
            self.session_ids.lock().unwrap().push(request.session_id.clone());
            if self.fail_start {
                return Err(ApiError::status(500, "server error"));
            }
            Ok(StartWorkoutResponse {
                success: true,
                workout_id: 77,
                ..Default::default()
            })
        }

        async fn get_plan_exercises(&self, _plan_id: i64) -> ServiceResult<PlanExercisesResponse> {
            if self.fail_exercises {
                return Err(ApiError::status(502, "bad gateway"));
            }
            Ok(PlanExercisesResponse {
                success: true,
                exercises: vec![WorkoutExercise {
                    id: 1,
                    name: "Panca piana".to_string(),
                    sets: 4,
                    ..Default::default()
                }],
                ..Default::default()
            })
        }

        async fn save_series(&self, request: &SaveSeriesRequest) -> ServiceResult<ActionResponse> {
            self.saved.lock().unwrap().push(request.clone());
            Ok(ack())
        }

        async fn get_completed_series(&self, _workout_id: i64) -> ServiceResult<CompletedSeriesResponse> {
            let saved = self.saved.lock().unwrap();
            let series = saved
                .iter()
                .flat_map(|r| r.series.iter())
                .enumerate()
                .map(|(i, s)| CompletedSeries {
                    id: format!("s{}", i),
                    plan_exercise_id: s.plan_exercise_id,
                    weight: s.weight,
                    reps: s.reps,
                    ..Default::default()
                })
                .collect::<Vec<_>>();
            Ok(CompletedSeriesResponse {
                success: true,
                count: series.len() as i64,
                series,
                ..Default::default()
            })
        }

        async fn delete_series(&self, _request: &DeleteSeriesRequest) -> ServiceResult<ActionResponse> {
            Ok(ack())
        }

        async fn complete_workout(
            &self,
            request: &CompleteWorkoutRequest,
        ) -> ServiceResult<CompleteWorkoutResponse> {
            self.completions.fetch_add(1, Ordering::SeqCst);
            if self.fail_complete {
                return Err(ApiError::Backend("Allenamento non trovato".to_string()));
            }
            Ok(CompleteWorkoutResponse {
                success: true,
                workout_id: request.workout_id,
                duration_minutes: (!self.omit_duration).then_some(request.duration_minutes),
                ..Default::default()
            })
        }

        async fn delete_workout(&self, _request: &DeleteWorkoutRequest) -> ServiceResult<ActionResponse> {
            self.deletions.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok(ack())
        }
    }

    fn session_with(fake: FakeWorkouts) -> (ActiveWorkoutSession, Arc<FakeWorkouts>) {
        let fake = Arc::new(fake);
        let repository = Arc::new(ActiveWorkoutRepository::new(fake.clone()));
        (ActiveWorkoutSession::new(repository), fake)
    }

    #[tokio::test]
    async fn test_start_passes_session_id_unchanged() {
        let (session, fake) = session_with(FakeWorkouts::default());
        let workout = session.start(3, 12).await.unwrap();

        assert_eq!(workout.id, 77);
        assert_eq!(workout.exercises.len(), 1);
        assert!(!workout.is_completed());
        assert_eq!(fake.session_ids.lock().unwrap().as_slice(), &[workout.session_id.clone()]);
        assert!(workout.session_id.starts_with("session_"));
        assert_eq!(session.session_id(), Some(workout.session_id));
        assert!(session.workout_state().value().is_some());
    }

    #[tokio::test]
    async fn test_start_twice_is_invalid() {
        let (session, _) = session_with(FakeWorkouts::default());
        session.start(3, 12).await.unwrap();

        let err = session.start(3, 12).await.unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(session.workout_id(), Some(77));
    }

    #[tokio::test]
    async fn test_start_failure_leaves_error_state() {
        let (session, _) = session_with(FakeWorkouts {
            fail_start: true,
            ..Default::default()
        });
        let err = session.start(3, 12).await.unwrap_err();
        assert!(matches!(err, SessionError::Api(ref e) if e.status_code() == Some(500)));
        assert!(session.workout_state().is_error());
        assert_eq!(session.workout_id(), None);
    }

    #[tokio::test]
    async fn test_start_survives_missing_plan_exercises() {
        let (session, _) = session_with(FakeWorkouts {
            fail_exercises: true,
            ..Default::default()
        });
        let workout = session.start(3, 12).await.unwrap();
        assert!(workout.exercises.is_empty());
    }

    #[tokio::test]
    async fn test_save_series_requires_started_workout() {
        let (session, fake) = session_with(FakeWorkouts::default());
        let err = session
            .save_series(vec![SeriesData::new(5, 60.0, 10)])
            .await
            .unwrap_err();
        assert!(err.is_invalid_transition());
        assert!(session.save_state().is_idle());
        assert!(fake.saved.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_series_refreshes_completed_list() {
        let (session, fake) = session_with(FakeWorkouts::default());
        session.start(3, 12).await.unwrap();
        let mut observer = session.subscribe_series();

        session
            .save_series(vec![SeriesData::new(5, 60.0, 10)])
            .await
            .unwrap();

        assert!(observer.has_changed().unwrap());
        let listed = observer.borrow_and_update().clone();
        assert_eq!(listed.value().map(Vec::len), Some(1));
        assert!(session.save_state().value().is_some());

        let saved = fake.saved.lock().unwrap();
        assert_eq!(saved[0].workout_id, 77);
        assert!(saved[0].request_id.starts_with("req_"));
    }

    #[tokio::test]
    async fn test_complete_records_duration() {
        let (session, _) = session_with(FakeWorkouts::default());
        assert!(session.complete(45, None).await.unwrap_err().is_invalid_transition());

        session.start(3, 12).await.unwrap();
        let response = session.complete(45, Some("ottimo".to_string())).await.unwrap();
        assert_eq!(response.duration_minutes, Some(45));

        let workout = session.workout_state();
        let workout = workout.value().unwrap();
        assert!(workout.is_completed());
        assert_eq!(workout.note.as_deref(), Some("ottimo"));

        let err = session.complete(50, None).await.unwrap_err();
        assert!(err.is_invalid_transition());
    }

    #[tokio::test]
    async fn test_complete_failure_keeps_workout() {
        let (session, _) = session_with(FakeWorkouts {
            fail_complete: true,
            ..Default::default()
        });
        session.start(3, 12).await.unwrap();

        let err = session.complete(30, None).await.unwrap_err();
        assert!(matches!(err, SessionError::Api(ApiError::Backend(_))));
        assert!(session.completion_state().is_error());
        assert!(session.workout_state().value().is_some());

        // Retry is allowed after an error
        assert!(!session.complete(30, None).await.unwrap_err().is_invalid_transition());
    }

    #[tokio::test]
    async fn test_zero_minute_completion_is_final() {
        let (session, fake) = session_with(FakeWorkouts::default());
        session.start(3, 12).await.unwrap();

        session.complete(0, None).await.unwrap();
        let err = session.complete(0, None).await.unwrap_err();
        assert!(err.is_invalid_transition());
        assert_eq!(fake.completions.load(Ordering::SeqCst), 1);
        assert!(session.completion_state().is_success());
    }

    #[tokio::test]
    async fn test_completion_without_echoed_duration_is_final() {
        let (session, fake) = session_with(FakeWorkouts {
            omit_duration: true,
            ..Default::default()
        });
        session.start(3, 12).await.unwrap();

        session.complete(40, None).await.unwrap();
        assert!(session.complete(40, None).await.unwrap_err().is_invalid_transition());
        assert_eq!(fake.completions.load(Ordering::SeqCst), 1);

        // A new workout can be completed again
        session.reset();
        session.start(3, 12).await.unwrap();
        session.complete(40, None).await.unwrap();
        assert_eq!(fake.completions.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_concurrent_delete_reaches_backend_once() {
        let (session, fake) = session_with(FakeWorkouts::default());
        session.start(3, 12).await.unwrap();

        let (first, second) = tokio::join!(session.delete(), session.delete());
        assert!(first.is_ok());
        assert!(second.unwrap_err().is_invalid_transition());
        assert_eq!(fake.deletions.load(Ordering::SeqCst), 1);
        assert!(session.workout_state().is_idle());
    }

    #[tokio::test]
    async fn test_delete_resets_session() {
        let (session, _) = session_with(FakeWorkouts::default());
        assert!(session.delete().await.unwrap_err().is_invalid_transition());

        session.start(3, 12).await.unwrap();
        session.delete().await.unwrap();

        assert!(session.workout_state().is_idle());
        assert_eq!(session.workout_id(), None);
        session.start(3, 12).await.unwrap();
    }

    #[tokio::test]
    async fn test_observers_see_loading_then_success() {
        let (session, _) = session_with(FakeWorkouts::default());
        let mut observer = session.subscribe_workout();
        assert!(observer.borrow_and_update().is_idle());

        session.start(3, 12).await.unwrap();
        assert!(observer.has_changed().unwrap());
        assert_eq!(observer.borrow_and_update().label(), "success");
    }
}
