//! Status returned by behavior nodes.

/// The result of ticking a behavior node.
///
/// # Frame-driven Semantics
///
/// A node that needs more than one frame to finish (walking to a waypoint,
/// waiting out a cooldown) reports `Running` until it completes. Composite
/// parents propagate `Running` upward and resume the same child next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The behavior has not finished yet and must be ticked again.
    Running,

    /// The behavior completed successfully.
    ///
    /// For conditions: The condition was met.
    /// For actions: The action finished its work.
    Success,

    /// The behavior failed.
    ///
    /// For conditions: The condition was not met.
    /// For actions: The action could not be carried out.
    Failure,
}

impl Status {
    /// Returns `true` if this status is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// Returns `true` if this status is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    /// Returns `true` if this status is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    /// Returns `true` once the node has finished, either way.
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }

    /// Inverts the status: Success becomes Failure and vice versa.
    ///
    /// `Running` passes through untouched.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

impl From<bool> for Status {
    fn from(value: bool) -> Self {
        if value { Status::Success } else { Status::Failure }
    }
}
