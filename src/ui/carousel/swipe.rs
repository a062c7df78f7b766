// SPDX-License-Identifier: MPL-2.0
//! Swipe sub-component: turns a horizontal drag (press, moves, release) into
//! a navigation decision.
//!
//! A release yields an `offset` (signed pixels since the press) and a release
//! `velocity` (pixels/second, estimated from the last two pointer samples).
//! The decision itself is a pure function over those two numbers.

use iced::Point;
use std::time::Instant;

/// Confidence threshold on `|offset| * velocity`. Drags below it snap back
/// without navigating.
pub const SWIPE_CONFIDENCE_THRESHOLD: f32 = 10_000.0;

/// Outcome of a completed drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Dragged leftwards with confidence: advance to the next slide.
    Forward,
    /// Dragged rightwards with confidence: rewind to the previous slide.
    Backward,
}

impl Swipe {
    /// The pagination step this swipe maps to.
    pub fn step(self) -> i32 {
        match self {
            Swipe::Forward => 1,
            Swipe::Backward => -1,
        }
    }
}

/// Decides whether an `offset`/`velocity` pair is a deliberate swipe.
///
/// `velocity` is a magnitude; the navigation direction comes solely from the
/// sign of `offset`. Dragging left (negative offset) moves the carousel
/// forward.
pub fn interpret_release(offset: f32, velocity: f32) -> Option<Swipe> {
    let power = offset.abs() * velocity;
    if power <= SWIPE_CONFIDENCE_THRESHOLD {
        return None;
    }
    if offset < 0.0 {
        Some(Swipe::Forward)
    } else {
        Some(Swipe::Backward)
    }
}

/// One pointer sample taken while dragging.
#[derive(Debug, Clone, Copy)]
struct Sample {
    x: f32,
    at: Instant,
}

/// Tracks an in-progress horizontal drag.
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    /// Position at press; `None` while no drag is in progress.
    origin: Option<Sample>,
    /// The two most recent pointer samples, for the release velocity estimate.
    previous: Option<Sample>,
    latest: Option<Sample>,
}

impl Tracker {
    /// Starts tracking a drag at the given position.
    pub fn press(&mut self, position: Point) {
        let sample = Sample {
            x: position.x,
            at: Instant::now(),
        };
        self.origin = Some(sample);
        self.previous = None;
        self.latest = Some(sample);
    }

    /// Records pointer movement while the button is held.
    pub fn moved(&mut self, position: Point) {
        if self.origin.is_none() {
            return;
        }
        self.previous = self.latest;
        self.latest = Some(Sample {
            x: position.x,
            at: Instant::now(),
        });
    }

    /// Ends the drag and interprets it. Returns `None` when no drag was in
    /// progress or the gesture did not cross the confidence threshold.
    pub fn release(&mut self) -> Option<Swipe> {
        let origin = self.origin.take()?;
        let latest = self.latest.take()?;
        let previous = self.previous.take();

        let offset = latest.x - origin.x;
        let velocity = release_velocity(previous, latest);
        interpret_release(offset, velocity)
    }

    /// Abandons the drag without interpreting it (e.g. pointer left the area).
    pub fn cancel(&mut self) {
        self.origin = None;
        self.previous = None;
        self.latest = None;
    }

    /// Whether a drag is currently in progress.
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}

/// Shortest time span the release velocity is estimated over, one frame at
/// 60 Hz. Pointer events can arrive microseconds apart; dividing by such a
/// span would turn a pixel of jitter into an arbitrarily large velocity.
const VELOCITY_WINDOW_MIN: f32 = 1.0 / 60.0;

/// Instantaneous horizontal speed over the last two samples, in pixels/second.
/// The sample span is clamped to [`VELOCITY_WINDOW_MIN`].
fn release_velocity(previous: Option<Sample>, latest: Sample) -> f32 {
    let Some(previous) = previous else {
        return 0.0;
    };
    let dt = latest
        .at
        .duration_since(previous.at)
        .as_secs_f32()
        .max(VELOCITY_WINDOW_MIN);
    (latest.x - previous.x).abs() / dt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};
    use std::time::Duration;

    #[test]
    fn confident_leftward_drag_swipes_forward() {
        // power = |-1200| * 10 = 12000 > 10000
        assert_eq!(interpret_release(-1200.0, 10.0), Some(Swipe::Forward));
    }

    #[test]
    fn confident_rightward_drag_swipes_backward() {
        assert_eq!(interpret_release(1200.0, 10.0), Some(Swipe::Backward));
    }

    #[test]
    fn weak_drag_does_not_navigate() {
        // power = 50 * 2 = 100 < 10000
        assert_eq!(interpret_release(50.0, 2.0), None);
    }

    #[test]
    fn power_exactly_at_threshold_does_not_navigate() {
        assert_eq!(interpret_release(-1000.0, 10.0), None);
    }

    #[test]
    fn zero_velocity_never_navigates() {
        assert_eq!(interpret_release(-5000.0, 0.0), None);
    }

    #[test]
    fn swipe_steps_map_to_pagination() {
        assert_eq!(Swipe::Forward.step(), 1);
        assert_eq!(Swipe::Backward.step(), -1);
    }

    #[test]
    fn release_without_press_returns_none() {
        let mut tracker = Tracker::default();
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn press_move_release_tracks_drag_state() {
        let mut tracker = Tracker::default();
        assert!(!tracker.is_dragging());

        tracker.press(Point::new(400.0, 100.0));
        assert!(tracker.is_dragging());

        tracker.moved(Point::new(380.0, 100.0));
        // A release consumes the drag regardless of outcome.
        let _ = tracker.release();
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn cancel_abandons_the_drag() {
        let mut tracker = Tracker::default();
        tracker.press(Point::new(400.0, 100.0));
        tracker.cancel();
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut tracker = Tracker::default();
        tracker.moved(Point::new(10.0, 10.0));
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.release(), None);
    }

    #[test]
    fn release_velocity_is_distance_over_clamped_time() {
        let earlier = Instant::now();
        // Busy-wait a tiny, measurable amount of time.
        while earlier.elapsed().as_micros() < 500 {}
        let later = Instant::now();

        let previous = Sample { x: 0.0, at: earlier };
        let latest = Sample { x: 10.0, at: later };
        let dt = later
            .duration_since(earlier)
            .as_secs_f32()
            .max(VELOCITY_WINDOW_MIN);

        assert_abs_diff_eq!(
            release_velocity(Some(previous), latest),
            10.0 / dt,
            epsilon = F32_EPSILON.max(10.0 / dt * 1e-5)
        );
    }

    #[test]
    fn jittery_samples_cannot_fake_a_confident_swipe() {
        let now = Instant::now();
        let previous = Sample { x: 400.0, at: now };
        let latest = Sample {
            x: 402.0,
            at: now + Duration::from_nanos(500),
        };

        // Two pixels in half a microsecond: the clamped window caps the
        // velocity well below anything the threshold lets through.
        let velocity = release_velocity(Some(previous), latest);
        assert!(velocity <= 2.0 / VELOCITY_WINDOW_MIN);
        assert_eq!(interpret_release(2.0, velocity), None);
    }

    #[test]
    fn release_velocity_without_prior_sample_is_zero() {
        let latest = Sample {
            x: 10.0,
            at: Instant::now(),
        };
        assert_abs_diff_eq!(release_velocity(None, latest), 0.0, epsilon = F32_EPSILON);
    }
}
