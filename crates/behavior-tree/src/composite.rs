//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple child behaviors.
//! [`Sequence`] (AND logic) and [`Selector`] (OR logic) keep a cursor so a
//! `Running` child is resumed on the next tick instead of re-running the
//! children before it. [`Parallel`] ticks every child every frame, and
//! [`UtilitySelector`] picks a child by score.

use crate::{Behavior, Status};

/// Type alias for a scored behavior option in utility-based decision making.
///
/// Each option consists of:
/// - A behavior to execute
/// - A scoring function that evaluates desirability (0-100)
type ScoredOption<C> = (Box<dyn Behavior<C>>, Box<dyn Fn(&C) -> u32 + Send>);

/// Executes child behaviors in order until one fails.
///
/// # Semantics
///
/// A `Sequence` node evaluates its children from left to right, starting at
/// the child that was running on the previous tick:
/// - If a child returns `Running`, the sequence returns `Running` and resumes
///   at that child next tick
/// - If a child returns `Failure`, the sequence resets and returns `Failure`
/// - If a child returns `Success`, the sequence **continues** to the next child
/// - Once every child has succeeded, the sequence resets and returns `Success`
///
/// This is analogous to a short-circuited logical AND (&&) operation.
pub struct Sequence<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    current: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self {
            children,
            current: 0,
        }
    }

    /// Index of the child that will be ticked next.
    pub fn cursor(&self) -> usize {
        self.current
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        while self.current < self.children.len() {
            match self.children[self.current].tick(ctx, dt) {
                Status::Running => return Status::Running,
                Status::Success => self.current += 1,
                Status::Failure => {
                    self.reset();
                    return Status::Failure;
                }
            }
        }
        // All children succeeded in this pass
        self.reset();
        Status::Success
    }

    fn reset(&mut self) {
        self.current = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Executes child behaviors in order until one succeeds.
///
/// # Semantics
///
/// A `Selector` node evaluates its children from left to right, starting at
/// the child that was running on the previous tick:
/// - If a child returns `Running`, the selector returns `Running`
/// - If a child returns `Success`, the selector resets and returns `Success`
/// - If a child returns `Failure`, the selector **continues** to the next child
/// - If all children fail, the selector resets and returns `Failure`
///
/// This is analogous to a short-circuited logical OR (||) operation.
pub struct Selector<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    current: usize,
}

impl<C> Selector<C> {
    /// Creates a new selector with the given child behaviors.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A selector with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self {
            children,
            current: 0,
        }
    }

    /// Index of the child that will be ticked next.
    pub fn cursor(&self) -> usize {
        self.current
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        while self.current < self.children.len() {
            match self.children[self.current].tick(ctx, dt) {
                Status::Running => return Status::Running,
                Status::Failure => self.current += 1,
                Status::Success => {
                    self.reset();
                    return Status::Success;
                }
            }
        }
        // All children failed
        self.reset();
        Status::Failure
    }

    fn reset(&mut self) {
        self.current = 0;
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Ticks every child on every call and aggregates their results.
///
/// # Semantics
///
/// - All children are ticked each call, there is no short-circuit
/// - Returns `Success` once at least `required_successes` children report
///   `Success` in the same tick
/// - Returns `Failure` once so many children failed that the remaining ones
///   can no longer reach `required_successes`
/// - Returns `Running` otherwise
///
/// Children are reset whenever the node completes.
pub struct Parallel<C> {
    children: Vec<Box<dyn Behavior<C>>>,
    required_successes: usize,
}

impl<C> Parallel<C> {
    /// Creates a new parallel node.
    ///
    /// `required_successes` is capped at the number of children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Box<dyn Behavior<C>>>, required_successes: usize) -> Self {
        assert!(
            !children.is_empty(),
            "Parallel must have at least one child"
        );
        let required_successes = required_successes.min(children.len());
        Self {
            children,
            required_successes,
        }
    }

    /// Number of child successes needed for this node to succeed.
    pub fn required_successes(&self) -> usize {
        self.required_successes
    }
}

impl<C> Behavior<C> for Parallel<C> {
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        let mut successes = 0;
        let mut failures = 0;

        for child in &mut self.children {
            match child.tick(ctx, dt) {
                Status::Success => successes += 1,
                Status::Failure => failures += 1,
                Status::Running => {}
            }
        }

        let tolerated_failures = self.children.len() - self.required_successes;
        if successes >= self.required_successes {
            self.reset();
            Status::Success
        } else if failures > tolerated_failures {
            self.reset();
            Status::Failure
        } else {
            Status::Running
        }
    }

    fn reset(&mut self) {
        for child in &mut self.children {
            child.reset();
        }
    }
}

/// Executes child behaviors based on utility scores.
///
/// # Semantics
///
/// A `UtilitySelector` node evaluates all children's scores and picks the highest:
/// - Each child has an associated scoring function that returns a score (0-100)
/// - All scoring functions are evaluated on every tick
/// - The child with the highest score is ticked (ties go to the earliest option)
/// - If all scores are 0, the selector returns `Failure`
///
/// When the winning option changes while another one was still `Running`,
/// the abandoned option is reset before the new one is ticked.
///
/// # Example
///
/// ```rust,ignore
/// use behavior_tree::UtilitySelector;
///
/// let selector = UtilitySelector::new(vec![
///     (flee_behavior(), Box::new(|ctx| compute_flee_score(ctx))),
///     (attack_behavior(), Box::new(|ctx| compute_attack_score(ctx))),
/// ]);
/// ```
pub struct UtilitySelector<C> {
    options: Vec<ScoredOption<C>>,
    active: Option<usize>,
}

impl<C> UtilitySelector<C> {
    /// Creates a new utility selector with the given options.
    ///
    /// Each option is a tuple of (behavior, scoring_function).
    /// The scoring function takes a read-only reference to the context
    /// and returns a score from 0 to 100.
    ///
    /// # Panics
    ///
    /// Panics if `options` is empty.
    pub fn new(options: Vec<ScoredOption<C>>) -> Self {
        assert!(
            !options.is_empty(),
            "UtilitySelector must have at least one option"
        );
        Self {
            options,
            active: None,
        }
    }
}

impl<C> Behavior<C> for UtilitySelector<C> {
    fn tick(&mut self, ctx: &mut C, dt: f64) -> Status {
        let mut best: Option<(usize, u32)> = None;
        for (index, (_, scorer)) in self.options.iter().enumerate() {
            let score = scorer(&*ctx);
            if score > 0 && best.is_none_or(|(_, top)| score > top) {
                best = Some((index, score));
            }
        }

        let Some((chosen, _)) = best else {
            // All options scored 0 (all impossible/undesirable)
            self.reset();
            return Status::Failure;
        };

        if let Some(previous) = self.active
            && previous != chosen
        {
            self.options[previous].0.reset();
        }

        let status = self.options[chosen].0.tick(ctx, dt);
        self.active = status.is_running().then_some(chosen);
        status
    }

    fn reset(&mut self) {
        self.active = None;
        for (behavior, _) in &mut self.options {
            behavior.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Wait};

    struct TestContext {
        value: i32,
        ticks: Vec<&'static str>,
    }

    impl TestContext {
        fn new() -> Self {
            Self {
                value: 0,
                ticks: Vec::new(),
            }
        }
    }

    struct Increment;
    impl Behavior<TestContext> for Increment {
        fn tick(&mut self, ctx: &mut TestContext, _dt: f64) -> Status {
            ctx.value += 1;
            Status::Success
        }
    }

    struct Decrement;
    impl Behavior<TestContext> for Decrement {
        fn tick(&mut self, ctx: &mut TestContext, _dt: f64) -> Status {
            ctx.value -= 1;
            Status::Success
        }
    }

    struct FailAlways;
    impl Behavior<TestContext> for FailAlways {
        fn tick(&mut self, _ctx: &mut TestContext, _dt: f64) -> Status {
            Status::Failure
        }
    }

    fn tagged(tag: &'static str, status: Status) -> Box<dyn Behavior<TestContext>> {
        Box::new(Action::new(move |ctx: &mut TestContext, _dt| {
            ctx.ticks.push(tag);
            status
        }))
    }

    #[test]
    fn sequence_all_success() {
        let mut seq = Sequence::new(vec![Box::new(Increment), Box::new(Increment)]);

        let mut ctx = TestContext::new();
        assert_eq!(seq.tick(&mut ctx, 0.0), Status::Success);
        assert_eq!(ctx.value, 2);
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(FailAlways),
            Box::new(Increment), // Should not execute
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(seq.tick(&mut ctx, 0.0), Status::Failure);
        assert_eq!(ctx.value, 1); // Only first increment executed
        assert_eq!(seq.cursor(), 0);
    }

    #[test]
    fn sequence_resumes_running_child() {
        let mut seq = Sequence::new(vec![
            Box::new(Increment),
            Box::new(Wait::new(1.0)),
            Box::new(Decrement),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(seq.tick(&mut ctx, 0.5), Status::Running);
        assert_eq!(seq.cursor(), 1);
        // Increment is not re-run while the wait is in progress
        assert_eq!(seq.tick(&mut ctx, 0.25), Status::Running);
        assert_eq!(ctx.value, 1);
        assert_eq!(seq.tick(&mut ctx, 0.25), Status::Success);
        assert_eq!(ctx.value, 0);
    }

    #[test]
    fn selector_succeeds_on_first_success() {
        let mut sel = Selector::new(vec![
            Box::new(FailAlways),
            Box::new(Increment),
            Box::new(Decrement), // Should not execute
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx, 0.0), Status::Success);
        assert_eq!(ctx.value, 1); // Only Increment executed
    }

    #[test]
    fn selector_fails_when_all_fail() {
        let mut sel = Selector::new(vec![Box::new(FailAlways), Box::new(FailAlways)]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx, 0.0), Status::Failure);
    }

    #[test]
    fn selector_resumes_running_child() {
        let mut sel = Selector::new(vec![
            tagged("fail", Status::Failure),
            Box::new(Wait::new(0.2)),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx, 0.1), Status::Running);
        assert_eq!(sel.tick(&mut ctx, 0.1), Status::Success);
        // The failing child was only consulted on the first tick
        assert_eq!(ctx.ticks, vec!["fail"]);
    }

    #[test]
    fn parallel_ticks_every_child() {
        let mut par = Parallel::new(
            vec![
                tagged("a", Status::Success),
                tagged("b", Status::Running),
                tagged("c", Status::Running),
            ],
            2,
        );

        let mut ctx = TestContext::new();
        assert_eq!(par.tick(&mut ctx, 0.0), Status::Running);
        assert_eq!(ctx.ticks, vec!["a", "b", "c"]);
    }

    #[test]
    fn parallel_succeeds_at_threshold() {
        let mut par = Parallel::new(
            vec![
                tagged("a", Status::Success),
                tagged("b", Status::Failure),
                tagged("c", Status::Success),
            ],
            2,
        );

        let mut ctx = TestContext::new();
        assert_eq!(par.tick(&mut ctx, 0.0), Status::Success);
    }

    #[test]
    fn parallel_fails_when_threshold_unreachable() {
        let mut par = Parallel::new(
            vec![
                tagged("a", Status::Failure),
                tagged("b", Status::Failure),
                tagged("c", Status::Running),
            ],
            2,
        );

        let mut ctx = TestContext::new();
        assert_eq!(par.tick(&mut ctx, 0.0), Status::Failure);
    }

    #[test]
    fn utility_selector_picks_highest_score() {
        let mut sel = UtilitySelector::new(vec![
            (
                Box::new(Increment) as Box<dyn Behavior<TestContext>>,
                Box::new(|_: &TestContext| 10),
            ),
            (
                Box::new(Decrement) as Box<dyn Behavior<TestContext>>,
                Box::new(|_: &TestContext| 90),
            ),
        ]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx, 0.0), Status::Success);
        assert_eq!(ctx.value, -1);
    }

    #[test]
    fn utility_selector_fails_when_all_zero() {
        let mut sel = UtilitySelector::new(vec![(
            Box::new(Increment) as Box<dyn Behavior<TestContext>>,
            Box::new(|_: &TestContext| 0),
        )]);

        let mut ctx = TestContext::new();
        assert_eq!(sel.tick(&mut ctx, 0.0), Status::Failure);
        assert_eq!(ctx.value, 0);
    }
}
