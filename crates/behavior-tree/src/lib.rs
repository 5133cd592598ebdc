//! Lightweight behavior tree library for frame-driven arcade games.
//!
//! Trees are ticked once per host frame with the frame's delta time. Nodes
//! may report [`Status::Running`], in which case composites remember where
//! they stopped and resume from the same child on the next tick.
//!
//! - **Externally driven**: the host loop owns the clock and calls `tick`
//! - **Minimal cursor state**: only what is needed to resume a running node
//! - **Resettable**: every node can be rewound to its freshly built state
//! - **Zero dependencies**: Pure Rust with no external crates
//!
//! # Architecture
//!
//! - [`Behavior`]: Core trait for all nodes
//! - [`Status`]: Running, Success or Failure
//! - Leaf nodes: [`Action`], [`Condition`], [`Wait`]
//! - Composite nodes: [`Sequence`], [`Selector`], [`Parallel`], [`UtilitySelector`]
//! - Decorator nodes: [`Inverter`], [`Repeater`], [`AlwaysSucceed`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod leaf;
pub mod status;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use composite::{Parallel, Selector, Sequence, UtilitySelector};
pub use decorator::{AlwaysSucceed, Inverter, Repeater};
pub use leaf::{Action, Condition, Wait};
pub use status::Status;
