// Timed animation beats and the per-kick countdown
//
// Each resolved kick plays a fixed, ordered sequence of beats (ball flight,
// result banner, ...). While a sequence runs no new charge may start.

use std::collections::VecDeque;
use std::time::Duration;

/// A named stretch of presentation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Beat {
    /// Ball travelling toward the goal
    Flight,
    /// "GOAL!" / "SAVED!" banner
    ShowResult,
    /// Final score on screen before the match summary
    FinalWhistle,
}

impl Beat {
    pub fn display_name(&self) -> &str {
        match self {
            Beat::Flight => "Flight",
            Beat::ShowResult => "Result",
            Beat::FinalWhistle => "Full time",
        }
    }
}

/// Ordered queue of beats advanced by frame time
#[derive(Debug, Clone, Default)]
pub struct BeatSequence {
    queue: VecDeque<(Beat, Duration)>,
    elapsed: Duration,
}

impl BeatSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a beat to the end of the sequence
    pub fn push(&mut self, beat: Beat, duration: Duration) {
        self.queue.push_back((beat, duration));
    }

    /// Beat currently playing
    pub fn current(&self) -> Option<Beat> {
        self.queue.front().map(|(beat, _)| *beat)
    }

    pub fn is_running(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Progress through the current beat, 0.0 to 1.0
    pub fn progress(&self) -> f32 {
        match self.queue.front() {
            Some((_, duration)) if !duration.is_zero() => {
                (self.elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
            }
            Some(_) => 1.0,
            None => 0.0,
        }
    }

    /// Advance by `dt`, returning every beat that finished, in order
    pub fn tick(&mut self, dt: Duration) -> Vec<Beat> {
        let mut finished = Vec::new();
        self.elapsed += dt;

        while let Some((beat, duration)) = self.queue.front().copied() {
            if self.elapsed < duration {
                break;
            }
            self.elapsed -= duration;
            self.queue.pop_front();
            finished.push(beat);
        }

        if self.queue.is_empty() {
            self.elapsed = Duration::ZERO;
        }
        finished
    }

    /// Drop all pending beats
    pub fn cancel(&mut self) {
        self.queue.clear();
        self.elapsed = Duration::ZERO;
    }
}

/// Time limit to act before the pending kick or dive fires by itself
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining: Option<Duration>,
}

impl Countdown {
    pub fn start(&mut self, limit: Duration) {
        self.remaining = Some(limit);
    }

    pub fn stop(&mut self) {
        self.remaining = None;
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.remaining
    }

    /// Advance the timer. Returns true exactly once, when it runs out.
    pub fn tick(&mut self, dt: Duration) -> bool {
        match self.remaining {
            Some(left) if left <= dt => {
                self.remaining = None;
                true
            }
            Some(left) => {
                self.remaining = Some(left - dt);
                false
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_beats_finish_in_order() {
        let mut seq = BeatSequence::new();
        seq.push(Beat::Flight, ms(1000));
        seq.push(Beat::ShowResult, ms(2000));

        assert!(seq.tick(ms(999)).is_empty());
        assert_eq!(seq.current(), Some(Beat::Flight));
        assert_eq!(seq.tick(ms(1)), vec![Beat::Flight]);
        assert_eq!(seq.current(), Some(Beat::ShowResult));
        assert_eq!(seq.tick(ms(2000)), vec![Beat::ShowResult]);
        assert!(!seq.is_running());
    }

    #[test]
    fn test_large_tick_drains_several_beats() {
        let mut seq = BeatSequence::new();
        seq.push(Beat::Flight, ms(1000));
        seq.push(Beat::ShowResult, ms(2000));
        seq.push(Beat::FinalWhistle, ms(2000));

        assert_eq!(seq.tick(ms(3500)), vec![Beat::Flight, Beat::ShowResult]);
        assert_eq!(seq.current(), Some(Beat::FinalWhistle));
        assert!((seq.progress() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn test_cancel_clears_everything() {
        let mut seq = BeatSequence::new();
        seq.push(Beat::Flight, ms(1000));
        seq.tick(ms(500));
        seq.cancel();
        assert!(!seq.is_running());
        assert!(seq.tick(ms(5000)).is_empty());
    }

    #[test]
    fn test_zero_length_beat_finishes_immediately() {
        let mut seq = BeatSequence::new();
        seq.push(Beat::ShowResult, Duration::ZERO);
        assert_eq!(seq.tick(Duration::ZERO), vec![Beat::ShowResult]);
    }

    #[test]
    fn test_countdown_fires_once() {
        let mut countdown = Countdown::default();
        countdown.start(ms(100));
        assert!(!countdown.tick(ms(60)));
        assert!(countdown.tick(ms(60)));
        assert!(!countdown.tick(ms(60)));
        assert_eq!(countdown.remaining(), None);
    }

    #[test]
    fn test_stopped_countdown_never_fires() {
        let mut countdown = Countdown::default();
        countdown.start(ms(100));
        countdown.stop();
        assert!(!countdown.tick(ms(1000)));
    }
}
