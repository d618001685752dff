/// Lifecycle shared by every simulation mode.
///
/// `Idle -> Running -> (Paused <-> Running)`, and any state can be reset back to
/// `Idle` or straight into `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
}

/// Where a reset leaves the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetMode {
    Idle,
    Running,
}

impl RunState {
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// State after a start request. Starting a paused run resumes it.
    pub fn started(self) -> RunState {
        RunState::Running
    }

    /// State after a pause toggle. Idle stays idle.
    pub fn toggled(self) -> RunState {
        match self {
            RunState::Idle => RunState::Idle,
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
        }
    }

    pub fn after_reset(mode: ResetMode) -> RunState {
        match mode {
            ResetMode::Idle => RunState::Idle,
            ResetMode::Running => RunState::Running,
        }
    }
}
