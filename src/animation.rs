//! Needle interpolation between successive readings.
//!
//! The host drives frames from its paint loop: every update starts a new
//! transition and hands out a [`FrameRequest`]; only the newest request may
//! draw. Timestamps are host milliseconds (e.g. a monotonic paint clock).

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Single-owner interpolation state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterpolationState {
    pub previous: f64,
    pub target: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    /// Last value handed to a frame.
    pub current: f64,
    pub done: bool,
}

/// One interpolated frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub value: f64,
    pub done: bool,
}

impl InterpolationState {
    /// A transition that is already at rest on `value`.
    pub fn at_rest(value: f64) -> Self {
        Self {
            previous: value,
            target: value,
            start_ms: 0.0,
            duration_ms: 0.0,
            current: value,
            done: true,
        }
    }

    /// Linear progress in `[0, 1]` at `now_ms`. A zero duration completes immediately.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || !self.duration_ms.is_finite() {
            return 1.0;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        if t.is_nan() {
            0.0
        } else {
            t.clamp(0.0, 1.0)
        }
    }
}

/// Advances `state` to `now_ms`. Pure: the caller stores the returned state.
///
/// On completion `previous` becomes `target`, so the next transition starts at rest.
pub fn step(state: InterpolationState, now_ms: f64) -> (InterpolationState, Frame) {
    let t = state.progress(now_ms);
    let value = state.previous + (state.target - state.previous) * t;
    let done = t >= 1.0;
    let next = InterpolationState {
        previous: if done { state.target } else { state.previous },
        current: if done { state.target } else { value },
        done,
        ..state
    };
    let value = next.current;
    (next, Frame { value, done })
}

/// Ticket for the next frame of one specific transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest {
    generation: u64,
}

impl FrameRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Owns the interpolation state and discards superseded frames.
#[derive(Clone, Debug)]
pub struct Animator {
    state: Option<InterpolationState>,
    duration_ms: f64,
    generation: u64,
}

impl Animator {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            state: None,
            duration_ms: duration_ms.max(0.0),
            generation: 0,
        }
    }

    /// Applies to transitions started after the call.
    pub fn set_duration_ms(&mut self, duration_ms: f64) {
        self.duration_ms = duration_ms.max(0.0);
    }

    /// Value currently on screen, if anything was drawn yet.
    pub fn displayed(&self) -> Option<f64> {
        self.state.map(|s| s.current)
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_some_and(|s| !s.done)
    }

    pub fn state(&self) -> Option<InterpolationState> {
        self.state
    }

    /// Starts a transition towards `target`.
    ///
    /// It begins at the value currently on screen, which may be mid-way through a
    /// previous transition. The first transition ever begins at rest on `target`.
    pub fn animate(&mut self, target: f64, now_ms: f64) -> FrameRequest {
        let Some(previous) = self.displayed() else {
            self.settle(target);
            return FrameRequest {
                generation: self.generation,
            };
        };
        self.generation += 1;
        self.state = Some(InterpolationState {
            previous,
            target,
            start_ms: now_ms,
            duration_ms: self.duration_ms,
            current: previous,
            done: false,
        });
        trace!(previous, target, generation = self.generation, "animation started");
        FrameRequest {
            generation: self.generation,
        }
    }

    /// Jumps straight to `value`, superseding any transition in flight.
    pub fn settle(&mut self, value: f64) {
        self.generation += 1;
        self.state = Some(InterpolationState::at_rest(value));
    }

    /// Produces the frame for `request` at `now_ms`.
    ///
    /// Returns `None` when the request was superseded or its transition already
    /// finished; the host must then stop scheduling frames for it.
    pub fn frame(&mut self, request: FrameRequest, now_ms: f64) -> Option<Frame> {
        if request.generation != self.generation {
            trace!(stale = request.generation, current = self.generation, "dropping superseded frame");
            return None;
        }
        let state = self.state.filter(|s| !s.done)?;
        let (next, frame) = step(state, now_ms);
        self.state = Some(next);
        trace!(value = frame.value, done = frame.done, "animation frame");
        Some(frame)
    }

    /// Drives a whole transition with the given frame clock, calling `on_frame`
    /// once per frame. Intended for hosts without a retained paint loop.
    pub fn run(
        &mut self,
        target: f64,
        frame_times_ms: impl IntoIterator<Item = f64>,
        mut on_frame: impl FnMut(f64),
    ) {
        let mut times = frame_times_ms.into_iter();
        let Some(start) = times.next() else {
            self.settle(target);
            on_frame(target);
            return;
        };
        let request = self.animate(target, start);
        for now in std::iter::once(start).chain(times) {
            match self.frame(request, now) {
                Some(frame) => {
                    on_frame(frame.value);
                    if frame.done {
                        return;
                    }
                }
                None => return,
            }
        }
    }
}
