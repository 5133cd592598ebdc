//! Finite state machine driven by an external per-frame update.
//!
//! A [`StateMachine`] maps state names to [`FsmState`]s. Each state may carry
//! enter/update/exit hooks and an ordered list of conditional
//! [`Transition`]s. The machine never owns the host's context: every call that
//! can run a hook borrows it for the duration of that call only.
//!
//! # Lifecycle
//!
//! - The first state added becomes current without running its `on_enter`
//! - [`StateMachine::update`] advances `state_time`, runs `on_update`, then
//!   fires at most one transition: the highest priority one whose condition
//!   holds, with ties going to the one registered first
//! - [`StateMachine::set_state`] runs `on_exit` of the old state and
//!   `on_enter` of the new one; switching to the current state does nothing
//!
//! # Example
//!
//! ```rust
//! use game_ai::{FsmState, StateMachine};
//!
//! struct Guard { sees_player: bool }
//!
//! let mut fsm = StateMachine::new();
//! fsm.add_state(FsmState::new("patrol").transition("chase", 0, |g: &Guard| g.sees_player));
//! fsm.add_state(FsmState::new("chase").transition("patrol", 0, |g: &Guard| !g.sees_player));
//!
//! let mut guard = Guard { sees_player: true };
//! fsm.update(0.016, &mut guard).unwrap();
//! assert_eq!(fsm.current_state(), Some("chase"));
//! ```

use std::collections::HashMap;

use crate::error::{AiError, AiResult};

type EnterFn<C> = Box<dyn FnMut(&mut C)>;
type UpdateFn<C> = Box<dyn FnMut(f64, &mut C)>;
type ConditionFn<C> = Box<dyn Fn(&C) -> bool>;

/// Conditional edge to another state.
pub struct Transition<C> {
    to: String,
    condition: ConditionFn<C>,
    priority: i32,
}

impl<C> Transition<C> {
    pub fn new<F>(to: impl Into<String>, priority: i32, condition: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        Self {
            to: to.into(),
            condition: Box::new(condition),
            priority,
        }
    }

    /// Target state name.
    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }
}

/// A named state with optional hooks and outgoing transitions.
pub struct FsmState<C> {
    name: String,
    on_enter: Option<EnterFn<C>>,
    on_update: Option<UpdateFn<C>>,
    on_exit: Option<EnterFn<C>>,
    /// Kept sorted by descending priority, registration order within a priority.
    transitions: Vec<Transition<C>>,
}

impl<C> FsmState<C> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            on_enter: None,
            on_update: None,
            on_exit: None,
            transitions: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hook run when this state becomes current through a transition.
    #[must_use]
    pub fn on_enter(mut self, hook: impl FnMut(&mut C) + 'static) -> Self {
        self.on_enter = Some(Box::new(hook));
        self
    }

    /// Hook run on every update while this state is current.
    #[must_use]
    pub fn on_update(mut self, hook: impl FnMut(f64, &mut C) + 'static) -> Self {
        self.on_update = Some(Box::new(hook));
        self
    }

    /// Hook run when leaving this state.
    #[must_use]
    pub fn on_exit(mut self, hook: impl FnMut(&mut C) + 'static) -> Self {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// Adds a transition (builder pattern).
    #[must_use]
    pub fn transition<F>(mut self, to: impl Into<String>, priority: i32, condition: F) -> Self
    where
        F: Fn(&C) -> bool + 'static,
    {
        self.push_transition(Transition::new(to, priority, condition));
        self
    }

    /// Transitions in evaluation order.
    pub fn transitions(&self) -> &[Transition<C>] {
        &self.transitions
    }

    fn push_transition(&mut self, transition: Transition<C>) {
        let at = self
            .transitions
            .iter()
            .position(|t| t.priority < transition.priority)
            .unwrap_or(self.transitions.len());
        self.transitions.insert(at, transition);
    }
}

/// Named-state machine over a host context `C`.
pub struct StateMachine<C> {
    states: HashMap<String, FsmState<C>>,
    current: Option<String>,
    previous: Option<String>,
    state_time: f64,
}

impl<C> StateMachine<C> {
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
            current: None,
            previous: None,
            state_time: 0.0,
        }
    }

    /// Registers a state. The first state registered becomes current.
    ///
    /// Adding a state under an existing name replaces it.
    pub fn add_state(&mut self, state: FsmState<C>) -> &mut Self {
        if self.current.is_none() {
            self.current = Some(state.name.clone());
        }
        self.states.insert(state.name.clone(), state);
        self
    }

    /// Adds a transition to an already registered state.
    pub fn add_transition(&mut self, from: &str, transition: Transition<C>) -> AiResult<()> {
        let state = self
            .states
            .get_mut(from)
            .ok_or_else(|| AiError::UnknownState(from.to_string()))?;
        state.push_transition(transition);
        Ok(())
    }

    pub fn current_state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn previous_state(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Seconds since the current state was entered.
    pub fn state_time(&self) -> f64 {
        self.state_time
    }

    pub fn is_in(&self, name: &str) -> bool {
        self.current.as_deref() == Some(name)
    }

    pub fn has_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Switches to `name`, running exit and enter hooks.
    ///
    /// Does nothing if `name` is already current.
    pub fn set_state(&mut self, name: &str, ctx: &mut C) -> AiResult<()> {
        if self.is_in(name) {
            return Ok(());
        }
        if !self.states.contains_key(name) {
            return Err(AiError::UnknownState(name.to_string()));
        }

        if let Some(hook) = self
            .current
            .as_ref()
            .and_then(|current| self.states.get_mut(current))
            .and_then(|state| state.on_exit.as_mut())
        {
            hook(ctx);
        }

        tracing::debug!(from = ?self.current, to = name, "fsm transition");

        self.previous = self.current.replace(name.to_string());
        self.state_time = 0.0;

        if let Some(hook) = self
            .states
            .get_mut(name)
            .and_then(|state| state.on_enter.as_mut())
        {
            hook(ctx);
        }

        Ok(())
    }

    /// Advances the machine by `dt` seconds.
    ///
    /// Returns the name of the state entered, if a transition fired. A
    /// transition back into the current state fires nothing.
    pub fn update(&mut self, dt: f64, ctx: &mut C) -> AiResult<Option<String>> {
        let current = self.current.clone().ok_or(AiError::NoStates)?;
        self.state_time += dt;

        let state = self
            .states
            .get_mut(&current)
            .ok_or_else(|| AiError::UnknownState(current.clone()))?;

        if let Some(hook) = state.on_update.as_mut() {
            hook(dt, ctx);
        }

        let view: &C = ctx;
        let target = state
            .transitions
            .iter()
            .find(|t| (t.condition)(view))
            .map(|t| t.to.clone());

        match target {
            Some(to) if !self.is_in(&to) => {
                self.set_state(&to, ctx)?;
                Ok(Some(to))
            }
            _ => Ok(None),
        }
    }
}

impl<C> Default for StateMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}
