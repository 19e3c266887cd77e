// SPDX-License-Identifier: MPL-2.0
//! Timed-rotation controller shared by the showcase sections.
//!
//! This module provides a framework-agnostic [`RotationController`] that owns
//! the single source of truth for "which showcase item is active": it advances
//! cyclically on a timer, accepts manual selection, and pauses while the user
//! is interacting. The same controller drives both the interactive QR demo and
//! the featured solution card, so each section keeps one instance and polls it
//! from the periodic tick subscription.

use std::time::{Duration, Instant};

/// Errors reported by the rotation controller.
///
/// Both variants are recoverable for the application as a whole:
/// `InvalidConfiguration` is fatal only to the construction attempt, and
/// `IndexOutOfRange` leaves the controller untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowcaseError {
    /// Bad constructor arguments (empty item list or zero interval).
    InvalidConfiguration(&'static str),
    /// A manual selection outside `[0, len)`.
    IndexOutOfRange { index: usize, len: usize },
}

impl std::fmt::Display for ShowcaseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShowcaseError::InvalidConfiguration(reason) => {
                write!(f, "invalid showcase configuration: {}", reason)
            }
            ShowcaseError::IndexOutOfRange { index, len } => {
                write!(f, "showcase index {} out of range (len {})", index, len)
            }
        }
    }
}

/// Snapshot of the controller state, read synchronously by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    pub active_index: usize,
    pub is_paused: bool,
    pub is_transitioning: bool,
}

/// Rotation phase as a tagged state machine.
///
/// `Idle(i)` → `Transitioning(i, j)` → `Idle(j)`; a manual `select` collapses
/// either phase directly to `Idle(new)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning { from: usize, to: usize, ends_at: Instant },
}

/// Cyclic rotation over a fixed, non-empty item list.
///
/// The controller is driven by an external scheduler calling [`tick`] with the
/// current instant; deadlines are tracked internally so the poll cadence does
/// not need to match the rotation interval. All operations are synchronous and
/// O(1), and failed operations never leave partially-mutated state.
///
/// [`tick`]: RotationController::tick
#[derive(Debug, Clone)]
pub struct RotationController<T> {
    items: Vec<T>,
    active: usize,
    phase: Phase,
    paused: bool,
    disposed: bool,
    interval: Duration,
    transition: Duration,
    /// When the next automatic advance begins a transition.
    next_advance_at: Instant,
}

impl<T> RotationController<T> {
    /// Creates a controller over `items`, starting at index 0, unpaused.
    ///
    /// Fails with `InvalidConfiguration` if `items` is empty or `interval`
    /// is zero. `transition` may be zero, in which case advances commit in a
    /// single step.
    pub fn new(
        items: Vec<T>,
        interval: Duration,
        transition: Duration,
        now: Instant,
    ) -> Result<Self, ShowcaseError> {
        if items.is_empty() {
            return Err(ShowcaseError::InvalidConfiguration("empty item list"));
        }
        if interval.is_zero() {
            return Err(ShowcaseError::InvalidConfiguration(
                "rotation interval must be positive",
            ));
        }
        Ok(Self {
            items,
            active: 0,
            phase: Phase::Idle,
            paused: false,
            disposed: false,
            interval,
            transition,
            next_advance_at: now + interval,
        })
    }

    /// Advances the rotation state machine against the current instant.
    ///
    /// While idle and unpaused, reaching the interval deadline starts a
    /// transition to the next item; reaching the transition deadline commits
    /// it. An in-flight transition completes even if the controller was
    /// paused mid-transition, but no new one starts until resumed. Ticks on a
    /// disposed controller are no-ops, never errors: the scheduler may
    /// deliver one last tick after `dispose`.
    pub fn tick(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        match self.phase {
            Phase::Transitioning { to, ends_at, .. } => {
                if now >= ends_at {
                    self.active = to;
                    self.phase = Phase::Idle;
                }
            }
            Phase::Idle => {
                if !self.paused && now >= self.next_advance_at {
                    let to = (self.active + 1) % self.items.len();
                    // Deadline-scheduled: late polls do not drift the cadence.
                    self.next_advance_at += self.interval;
                    if self.transition.is_zero() {
                        self.active = to;
                    } else {
                        self.phase = Phase::Transitioning {
                            from: self.active,
                            to,
                            ends_at: now + self.transition,
                        };
                    }
                }
            }
        }
    }

    /// Manually selects an item, e.g. from an indicator dot.
    ///
    /// A valid selection takes effect immediately, cancels any in-flight
    /// transition, and re-arms the automatic advance a full interval from
    /// `now` so the selection is not undone by a near-due timer. An invalid
    /// index reports `IndexOutOfRange` and changes nothing. On a disposed
    /// controller a valid selection is a no-op.
    pub fn select(&mut self, index: usize, now: Instant) -> Result<(), ShowcaseError> {
        if index >= self.items.len() {
            return Err(ShowcaseError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        if self.disposed {
            return Ok(());
        }
        self.active = index;
        self.phase = Phase::Idle;
        self.next_advance_at = now + self.interval;
        Ok(())
    }

    /// Freezes automatic advancement. An in-flight transition still commits.
    pub fn pause(&mut self) {
        if !self.disposed {
            self.paused = true;
        }
    }

    /// Resumes automatic advancement, a full interval from `now`.
    pub fn resume(&mut self, now: Instant) {
        if self.disposed || !self.paused {
            return;
        }
        self.paused = false;
        self.next_advance_at = now + self.interval;
    }

    /// Releases the controller. Idempotent; all later operations are no-ops.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    /// Synchronous state snapshot for the rendering layer.
    pub fn state(&self) -> ControllerState {
        ControllerState {
            active_index: self.active,
            is_paused: self.paused,
            is_transitioning: matches!(self.phase, Phase::Transitioning { .. }),
        }
    }

    /// Index of the active item.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active item.
    pub fn active(&self) -> &T {
        &self.items[self.active]
    }

    /// All items, in display order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        false // construction rejects empty lists
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Index the current transition is leaving, if one is in flight.
    ///
    /// Lets a view render the outgoing item during the exit animation.
    pub fn transition_from(&self) -> Option<usize> {
        match self.phase {
            Phase::Transitioning { from, .. } => Some(from),
            Phase::Idle => None,
        }
    }

    /// Progress of the in-flight transition in `[0, 1]`, if any.
    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        match self.phase {
            Phase::Transitioning { ends_at, .. } => {
                let remaining = ends_at.saturating_duration_since(now);
                let total = self.transition.as_secs_f32();
                if total <= f32::EPSILON {
                    return Some(1.0);
                }
                Some((1.0 - remaining.as_secs_f32() / total).clamp(0.0, 1.0))
            }
            Phase::Idle => None,
        }
    }

    /// Whether the scheduler should keep delivering ticks.
    ///
    /// False once disposed, or while paused with no transition in flight;
    /// the tick subscription shuts off accordingly.
    pub fn wants_ticks(&self) -> bool {
        if self.disposed {
            return false;
        }
        !self.paused || matches!(self.phase, Phase::Transitioning { .. })
    }
}
