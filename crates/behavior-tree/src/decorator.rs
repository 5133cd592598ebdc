//! Decorator behavior nodes.
//!
//! Decorators wrap a single child behavior and modify its result or execution.
//! This module provides [`Inverter`] (NOT logic), [`Repeater`] (looping) and
//! [`AlwaysSucceed`] (error suppression).

use crate::{Behavior, Status};

/// Inverts the result of its child behavior.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - `Running` passes through unchanged
///
/// This is analogous to a logical NOT (!) operation.
pub struct Inverter<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        self.child.tick(ctx, dt).invert()
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}

/// Re-runs its child a fixed number of times, or forever.
///
/// # Semantics
///
/// - Each time the child finishes (with either result) one repetition is
///   counted and the child is reset for the next run
/// - Returns `Running` until the repetition count is reached, then returns
///   `Success` and starts counting from zero again
/// - With no limit the repeater never finishes and always reports `Running`
pub struct Repeater<C> {
    child: Box<dyn Behavior<C>>,
    times: Option<u32>,
    count: u32,
}

impl<C> Repeater<C> {
    /// Repeats `child` exactly `times` times per run.
    pub fn new(child: Box<dyn Behavior<C>>, times: u32) -> Self {
        Self {
            child,
            times: Some(times),
            count: 0,
        }
    }

    /// Repeats `child` indefinitely.
    pub fn forever(child: Box<dyn Behavior<C>>) -> Self {
        Self {
            child,
            times: None,
            count: 0,
        }
    }

    /// Completed repetitions in the current run.
    pub fn count(&self) -> u32 {
        self.count
    }
}

impl<C> Behavior<C> for Repeater<C> {
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        if self.child.tick(ctx, dt).is_running() {
            return Status::Running;
        }

        self.count = self.count.saturating_add(1);
        self.child.reset();

        match self.times {
            Some(times) if self.count >= times => {
                self.count = 0;
                Status::Success
            }
            _ => Status::Running,
        }
    }

    fn reset(&mut self) {
        self.count = 0;
        self.child.reset();
    }
}

/// Always returns `Success` once its child finishes, regardless of the result.
///
/// # Semantics
///
/// - If the child returns `Success`, returns `Success`
/// - If the child returns `Failure`, **still returns `Success`**
/// - `Running` passes through unchanged
///
/// This is useful for:
/// - Optional behaviors that shouldn't cause a sequence to fail
/// - Logging/debugging nodes that observe state without affecting control flow
pub struct AlwaysSucceed<C> {
    child: Box<dyn Behavior<C>>,
}

impl<C> AlwaysSucceed<C> {
    /// Creates a new always-succeed wrapper around the given child behavior.
    pub fn new(child: Box<dyn Behavior<C>>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        match self.child.tick(ctx, dt) {
            Status::Running => Status::Running,
            Status::Success | Status::Failure => Status::Success,
        }
    }

    fn reset(&mut self) {
        self.child.reset();
    }
}
