use crate::domain::prompt::SeedState;

/// Outcome for one definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub name: String,
    pub state: SeedState,
    /// Version created during this run, if any
    pub version: Option<u64>,
}

impl SeedEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            state: SeedState::Absent,
            version: None,
        }
    }

    /// Move to the next state
    pub fn advance(&mut self, next: SeedState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "invalid seed transition from {} to {}",
            self.state,
            next
        );
        self.state = next;
    }
}

/// Summary of a completed run, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub entries: Vec<SeedEntry>,
}

impl SeedReport {
    pub fn skipped(&self) -> impl Iterator<Item = &SeedEntry> {
        self.entries.iter().filter(|e| e.state == SeedState::Present)
    }

    pub fn created(&self) -> impl Iterator<Item = &SeedEntry> {
        self.entries.iter().filter(|e| e.state == SeedState::Aliased)
    }

    pub fn is_noop(&self) -> bool {
        self.created().next().is_none()
    }
}
