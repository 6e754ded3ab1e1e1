//! Single owner of the dashboard `SystemState`.

use super::types::SystemState;

/// Holds the one mutable `SystemState` of a dashboard instance.
///
/// All reads hand out copies and all writes go through `apply`, so the state
/// only ever changes by whole, pure transitions.
#[derive(Debug, Default)]
pub struct StateStore {
    state: SystemState,
}

impl StateStore {
    pub fn new(state: SystemState) -> Self {
        Self { state }
    }

    /// Snapshot of the current state.
    pub fn get(&self) -> SystemState {
        self.state
    }

    /// Replace the state with `mutation(current)` and return the new snapshot.
    pub fn apply<F>(&mut self, mutation: F) -> SystemState
    where
        F: FnOnce(SystemState) -> SystemState,
    {
        self.state = mutation(self.state);
        self.state
    }
}
