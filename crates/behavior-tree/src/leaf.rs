//! Leaf behavior nodes.
//!
//! Leaves do the actual work of a tree: [`Action`] runs host code,
//! [`Condition`] tests the context, and [`Wait`] burns frames until a
//! duration has elapsed.

use crate::{Behavior, Status};

type ActionFn<C> = Box<dyn FnMut(&mut C, f64) -> Status + Send>;
type ConditionFn<C> = Box<dyn Fn(&C) -> bool + Send>;

/// Runs a host closure every tick and reports whatever it returns.
///
/// The closure receives the context and the frame delta, so long-running
/// actions can report `Running` until their work is done.
pub struct Action<C> {
    run: ActionFn<C>,
}

impl<C> Action<C> {
    /// Creates a new action node from a closure.
    pub fn new<F>(run: F) -> Self
    where
        F: FnMut(&mut C, f64) -> Status + Send + 'static,
    {
        Self { run: Box::new(run) }
    }
}

impl<C> Behavior<C> for Action<C> {
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        (self.run)(ctx, dt)
    }
}

/// Succeeds when the predicate holds, fails otherwise. Never `Running`.
pub struct Condition<C> {
    check: ConditionFn<C>,
}

impl<C> Condition<C> {
    /// Creates a new condition node from a predicate over the context.
    pub fn new<F>(check: F) -> Self
    where
        F: Fn(&C) -> bool + Send + 'static,
    {
        Self {
            check: Box::new(check),
        }
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&mut self, ctx: &mut C, _dt: f64) -> Status {
        Status::from((self.check)(&*ctx))
    }
}

/// Waits for `duration` seconds of accumulated frame time.
///
/// # Semantics
///
/// - Adds `dt` to its clock on every tick
/// - Returns `Success` on the tick where the clock reaches `duration`, and
///   restarts its clock so the next tick begins a fresh wait
/// - Returns `Running` otherwise
#[derive(Debug, Clone, PartialEq)]
pub struct Wait {
    duration: f64,
    elapsed: f64,
}

impl Wait {
    /// Creates a new wait node lasting `duration` seconds.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    /// Seconds accumulated so far in the current wait.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}

impl<C> Behavior<C> for Wait {
    fn tick(&mut self, _ctx: &mut C, dt: f64) -> Status {
        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.elapsed = 0.0;
            Status::Success
        } else {
            Status::Running
        }
    }

    fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestContext {
        value: i32,
    }

    #[test]
    fn action_mutates_context() {
        let mut action = Action::new(|ctx: &mut TestContext, _dt| {
            ctx.value += 1;
            Status::Success
        });

        let mut ctx = TestContext { value: 0 };
        assert_eq!(action.tick(&mut ctx, 0.016), Status::Success);
        assert_eq!(ctx.value, 1);
    }

    #[test]
    fn condition_reads_context() {
        let mut positive = Condition::new(|ctx: &TestContext| ctx.value > 0);

        assert_eq!(positive.tick(&mut TestContext { value: 3 }, 0.0), Status::Success);
        assert_eq!(positive.tick(&mut TestContext { value: -3 }, 0.0), Status::Failure);
    }

    #[test]
    fn wait_succeeds_once_duration_reached() {
        let mut wait = Wait::new(1.0);
        let mut ctx = TestContext { value: 0 };

        assert_eq!(wait.tick(&mut ctx, 0.4), Status::Running);
        assert_eq!(wait.tick(&mut ctx, 0.4), Status::Running);
        assert_eq!(wait.tick(&mut ctx, 0.4), Status::Success);
        // Clock restarted after success
        assert_eq!(wait.elapsed(), 0.0);
        assert_eq!(wait.tick(&mut ctx, 0.5), Status::Running);
    }

    #[test]
    fn wait_reset_clears_clock() {
        let mut wait = Wait::new(1.0);
        let mut ctx = TestContext { value: 0 };

        assert_eq!(wait.tick(&mut ctx, 0.9), Status::Running);
        Behavior::<TestContext>::reset(&mut wait);
        assert_eq!(wait.tick(&mut ctx, 0.5), Status::Running);
    }
}
