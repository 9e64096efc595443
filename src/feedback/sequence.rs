// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Workout events and the fixed tone/vibration sequences they trigger

use std::fmt;
use std::time::Duration;

/// Moments of a workout that deserve audible or haptic feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackEvent {
    /// An isometric hold or exercise timer reached zero
    TimerComplete,
    /// A set was logged
    SeriesComplete,
    /// Rest between sets is over
    RestComplete,
    /// The whole workout was completed
    WorkoutComplete,
    /// One tick of the last seconds of a countdown
    CountdownBeep,
}

impl FeedbackEvent {
    pub fn name(&self) -> &'static str {
        match self {
            FeedbackEvent::TimerComplete => "timer_complete",
            FeedbackEvent::SeriesComplete => "series_complete",
            FeedbackEvent::RestComplete => "rest_complete",
            FeedbackEvent::WorkoutComplete => "workout_complete",
            FeedbackEvent::CountdownBeep => "countdown_beep",
        }
    }
}

impl fmt::Display for FeedbackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tone flavours a generator is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneKind {
    /// Short neutral beep
    Beep,
    /// Higher pitched alert
    Alert,
    /// Rising "well done" tone
    Success,
}

/// One step of a feedback sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackStep {
    /// Sound a tone; the sequence advances once it has finished
    Tone { kind: ToneKind, duration: Duration },
    /// Start a vibration pulse; the sequence does not wait for it
    Vibrate { duration: Duration },
    /// Silence
    Wait { duration: Duration },
}

impl FeedbackStep {
    pub fn label(&self) -> &'static str {
        match self {
            FeedbackStep::Tone { .. } => "tone",
            FeedbackStep::Vibrate { .. } => "vibrate",
            FeedbackStep::Wait { .. } => "wait",
        }
    }

    /// Time the step occupies in its sequence
    pub fn occupies(&self) -> Duration {
        match self {
            FeedbackStep::Tone { duration, .. } | FeedbackStep::Wait { duration } => *duration,
            FeedbackStep::Vibrate { .. } => Duration::ZERO,
        }
    }
}

const fn tone(kind: ToneKind, ms: u64) -> FeedbackStep {
    FeedbackStep::Tone {
        kind,
        duration: Duration::from_millis(ms),
    }
}

const fn wait(ms: u64) -> FeedbackStep {
    FeedbackStep::Wait {
        duration: Duration::from_millis(ms),
    }
}

const TIMER_COMPLETE: &[FeedbackStep] = &[tone(ToneKind::Alert, 400), wait(450), tone(ToneKind::Alert, 600)];
const SERIES_COMPLETE: &[FeedbackStep] = &[tone(ToneKind::Beep, 150), wait(100), tone(ToneKind::Beep, 150)];
const REST_COMPLETE: &[FeedbackStep] = &[
    tone(ToneKind::Alert, 300),
    wait(150),
    tone(ToneKind::Alert, 300),
    wait(150),
    tone(ToneKind::Alert, 300),
];
const WORKOUT_COMPLETE: &[FeedbackStep] = &[
    tone(ToneKind::Success, 300),
    wait(100),
    tone(ToneKind::Success, 300),
    wait(100),
    tone(ToneKind::Success, 600),
];
const COUNTDOWN_BEEP: &[FeedbackStep] = &[tone(ToneKind::Beep, 100)];

fn vibration_ms(event: FeedbackEvent) -> u64 {
    match event {
        FeedbackEvent::TimerComplete => 400,
        FeedbackEvent::SeriesComplete => 200,
        FeedbackEvent::RestComplete => 500,
        FeedbackEvent::WorkoutComplete => 800,
        FeedbackEvent::CountdownBeep => 50,
    }
}

/// Steps for `event`, led by a vibration pulse when `vibrate` is set
pub fn sequence_for(event: FeedbackEvent, vibrate: bool) -> Vec<FeedbackStep> {
    let tones = match event {
        FeedbackEvent::TimerComplete => TIMER_COMPLETE,
        FeedbackEvent::SeriesComplete => SERIES_COMPLETE,
        FeedbackEvent::RestComplete => REST_COMPLETE,
        FeedbackEvent::WorkoutComplete => WORKOUT_COMPLETE,
        FeedbackEvent::CountdownBeep => COUNTDOWN_BEEP,
    };

    let mut steps = Vec::with_capacity(tones.len() + 1);
    if vibrate {
        steps.push(FeedbackStep::Vibrate {
            duration: Duration::from_millis(vibration_ms(event)),
        });
    }
    steps.extend_from_slice(tones);
    steps
}

/// Total time a sequence keeps the sequencer busy
pub fn sequence_duration(steps: &[FeedbackStep]) -> Duration {
    steps.iter().map(FeedbackStep::occupies).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::limits::MAX_FEEDBACK_SEQUENCE_MS;

    const ALL: [FeedbackEvent; 5] = [
        FeedbackEvent::TimerComplete,
        FeedbackEvent::SeriesComplete,
        FeedbackEvent::RestComplete,
        FeedbackEvent::WorkoutComplete,
        FeedbackEvent::CountdownBeep,
    ];

    #[test]
    fn test_sequences_fit_time_bound() {
        for event in ALL {
            for vibrate in [false, true] {
                let steps = sequence_for(event, vibrate);
                assert!(
                    sequence_duration(&steps) <= Duration::from_millis(MAX_FEEDBACK_SEQUENCE_MS),
                    "{} too long",
                    event
                );
            }
        }
    }

    #[test]
    fn test_vibration_leads_sequence() {
        let steps = sequence_for(FeedbackEvent::SeriesComplete, true);
        assert_eq!(steps[0].label(), "vibrate");
        assert_eq!(steps.len(), SERIES_COMPLETE.len() + 1);

        let quiet = sequence_for(FeedbackEvent::SeriesComplete, false);
        assert!(quiet.iter().all(|s| s.label() != "vibrate"));
    }

    #[test]
    fn test_every_sequence_sounds() {
        for event in ALL {
            assert!(sequence_for(event, false)
                .iter()
                .any(|s| matches!(s, FeedbackStep::Tone { .. })));
        }
    }
}
