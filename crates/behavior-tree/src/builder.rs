//! Builder utilities for ergonomic behavior tree construction.
//!
//! This module provides helper functions to reduce boilerplate when building
//! behavior trees. Instead of writing verbose `Box::new(Sequence::new(vec![...]))`,
//! you can use shorter functions like `sequence(vec![...])`.

use crate::{
    Action, AlwaysSucceed, Behavior, Condition, Inverter, Parallel, Repeater, Selector, Sequence,
    Status, Wait,
};

/// Creates an action node from a closure.
#[inline]
pub fn action<C: 'static, F>(run: F) -> Box<dyn Behavior<C>>
where
    F: FnMut(&mut C, f64) -> Status + Send + 'static,
{
    Box::new(Action::new(run))
}

/// Creates a condition node from a predicate.
#[inline]
pub fn condition<C: 'static, F>(check: F) -> Box<dyn Behavior<C>>
where
    F: Fn(&C) -> bool + Send + 'static,
{
    Box::new(Condition::new(check))
}

/// Creates a wait node lasting `duration` seconds.
#[inline]
pub fn wait<C: 'static>(duration: f64) -> Box<dyn Behavior<C>> {
    Box::new(Wait::new(duration))
}

/// Creates a sequence node.
///
/// Shorthand for `Box::new(Sequence::new(children))`.
#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
///
/// Shorthand for `Box::new(Selector::new(children))`.
#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

/// Creates a parallel node.
#[inline]
pub fn parallel<C: 'static>(
    children: Vec<Box<dyn Behavior<C>>>,
    required_successes: usize,
) -> Box<dyn Behavior<C>> {
    Box::new(Parallel::new(children, required_successes))
}

/// Creates an inverter node.
///
/// Shorthand for `Box::new(Inverter::new(child))`.
#[inline]
pub fn inverter<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Inverter::new(child))
}

/// Creates a repeater that runs `child` `times` times.
#[inline]
pub fn repeat<C: 'static>(child: Box<dyn Behavior<C>>, times: u32) -> Box<dyn Behavior<C>> {
    Box::new(Repeater::new(child, times))
}

/// Creates a repeater that never finishes.
#[inline]
pub fn repeat_forever<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(Repeater::forever(child))
}

/// Creates an always-succeed node.
///
/// Shorthand for `Box::new(AlwaysSucceed::new(child))`.
#[inline]
pub fn always_succeed<C: 'static>(child: Box<dyn Behavior<C>>) -> Box<dyn Behavior<C>> {
    Box::new(AlwaysSucceed::new(child))
}
