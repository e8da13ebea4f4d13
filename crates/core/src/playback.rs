//! Idle/Playing state machine behind the trial-sweep animation.
//!
//! The machine owns the transition rules only; whoever drives it owns the
//! actual repeating timer and the live cutoff value, and feeds the latter in
//! on every call.

/// Milliseconds between sweep steps.
pub const TICK_MS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Playing,
}

/// What a trigger press asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressAction {
    /// Move the cutoff here and start the timer. The start point is rewound
    /// to zero when the press happened with the sweep already at its end.
    Start { from: u32 },
    /// Cancel the running timer.
    Stop,
}

/// What a timer tick asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickAction {
    /// Move the cutoff here and keep ticking.
    Advance(u32),
    /// The sweep reached the end; cancel the timer.
    Finish,
}

/// Sweep driver for the cutoff control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playback {
    max: u32,
    step: u32,
    state: PlaybackState,
}

impl Playback {
    /// A machine sweeping 0..=max in `step` increments; a zero step is
    /// treated as one.
    pub fn new(max: u32, step: u32) -> Self {
        Self {
            max,
            step: step.max(1),
            state: PlaybackState::Idle,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Handles a press of any play trigger given the live cutoff.
    pub fn press(&mut self, current: u32) -> PressAction {
        match self.state {
            PlaybackState::Idle => {
                self.state = PlaybackState::Playing;
                let from = if current >= self.max { 0 } else { current };
                PressAction::Start { from }
            }
            PlaybackState::Playing => {
                self.state = PlaybackState::Idle;
                PressAction::Stop
            }
        }
    }

    /// Handles one timer tick given the live cutoff. The advance is clamped
    /// to the end, so the final frame always lands exactly on `max` and the
    /// tick after it finishes.
    pub fn tick(&mut self, current: u32) -> TickAction {
        if current >= self.max {
            self.state = PlaybackState::Idle;
            TickAction::Finish
        } else {
            TickAction::Advance((current + self.step).min(self.max))
        }
    }
}
