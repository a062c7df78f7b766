// SPDX-License-Identifier: MPL-2.0
//! Carousel engine: the index cursor, transition direction, and the
//! playing/fullscreen/hovered flags, with wraparound navigation.
//!
//! The engine is pure state. Timer scheduling and keyboard scoping live in
//! the application's subscriptions; notification effects are produced by the
//! carousel component wrapping this engine.

use std::num::NonZeroUsize;

/// Visual direction of the most recent transition.
///
/// Only records the sign of the last index change; it has no meaning beyond
/// choosing which side the next slide animates in from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Last transition advanced (or the carousel has not moved yet).
    #[default]
    Forward,
    /// Last transition rewound.
    Backward,
}

/// Core carousel state machine.
///
/// Two orthogonal boolean axes (`playing`, `fullscreen`) plus an integer
/// cursor and a transient direction. The slide count is fixed for the
/// lifetime of one engine and never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    len: NonZeroUsize,
    current: usize,
    direction: Direction,
    playing: bool,
    fullscreen: bool,
    hovered: bool,
}

impl Engine {
    /// Creates an engine over `len` slides: index 0, playing, windowed.
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            current: 0,
            direction: Direction::Forward,
            playing: true,
            fullscreen: false,
            hovered: false,
        }
    }

    /// Index of the slide currently shown. Always in `[0, len)`.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    /// Direction of the last transition.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The autoplay toggle as set by the user.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether the fullscreen overlay is shown.
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Whether the pointer is inside the carousel's hit area.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether the autoplay timer should currently run: the user toggle,
    /// overridden to false while the pointer hovers the carousel.
    pub fn effective_playing(&self) -> bool {
        self.playing && !self.hovered
    }

    /// Advances or rewinds by `step`, wrapping at both ends. Only the sign of
    /// `step` is recorded as the transition direction. A zero step is a no-op.
    pub fn paginate(&mut self, step: i32) {
        if step == 0 {
            return;
        }
        self.direction = if step > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };

        let len = self.len.get() as i64;
        let next = (self.current as i64 + i64::from(step)).rem_euclid(len);
        self.current = next as usize;
    }

    /// Jumps directly to `index`; out-of-range jumps are ignored.
    /// Direction is Forward when jumping ahead, Backward when jumping behind
    /// or to the same index; the tie-break matches the original slider's
    /// visuals.
    pub fn go_to(&mut self, index: usize) {
        if index >= self.len.get() {
            return;
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
    }

    /// Sets the autoplay toggle. Idempotent.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    /// Flips the autoplay toggle.
    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// Shows the fullscreen overlay. Leaves index, direction and the autoplay
    /// toggle untouched. The inline hover suspension is cleared: the overlay
    /// now covers the inline hit area, and a stale hover flag would keep
    /// autoplay frozen for the whole fullscreen session.
    pub fn enter_fullscreen(&mut self) {
        self.fullscreen = true;
        self.hovered = false;
    }

    /// Hides the fullscreen overlay.
    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    /// Pointer entered the carousel's hit area: autoplay is force-paused.
    /// Ignored while the overlay is up; the covered inline area still sees
    /// pointer events through the stacked layers.
    pub fn hover_enter(&mut self) {
        if self.fullscreen {
            return;
        }
        self.hovered = true;
    }

    /// Pointer left the hit area: autoplay resumes to the toggle value.
    pub fn hover_leave(&mut self) {
        self.hovered = false;
    }
}
