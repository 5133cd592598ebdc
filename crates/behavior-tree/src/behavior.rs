//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, which is the fundamental
//! abstraction for all behavior tree nodes. The trait is generic over a
//! context type `C`, allowing nodes to read and modify host game state
//! without the tree ever retaining it between ticks.

use crate::Status;

/// A behavior tree node that can be ticked against a context.
pub trait Behavior<C>: Send {
    /// Advance this node by one frame.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the context/blackboard owned by the host.
    /// * `dt` - Seconds elapsed since the previous tick.
    ///
    /// # Returns
    ///
    /// - `Status::Running` if the node needs further ticks
    /// - `Status::Success` if the behavior succeeded
    /// - `Status::Failure` if the behavior failed
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status;

    /// Clear all resumable state (cursors, timers, counters) recursively.
    ///
    /// After `reset` the node must behave exactly like a freshly built one.
    /// Stateless leaves keep the default no-op.
    fn reset(&mut self) {}
}

/// Blanket implementation for boxed behaviors.
///
/// This allows `Box<dyn Behavior<C>>` to also implement `Behavior<C>`,
/// enabling dynamic dispatch and heterogeneous collections of nodes.
impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        (**self).tick(ctx, dt)
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }
}
