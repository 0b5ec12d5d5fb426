/// Where a single definition stands during a seeding run
///
/// # State Transitions
/// ```text
/// Absent -> Created -> Aliased
///   `-----> Present
/// ```
///
/// `Present` (already in the registry, skipped) and `Aliased` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedState {
    /// Not found in the registry (or the lookup failed)
    Absent,
    /// Found in the registry and left alone
    Present,
    /// A new version was registered but not yet aliased
    Created,
    /// The production alias points at the new version
    Aliased,
}

impl SeedState {
    /// Checks if a transition from current state to next state is valid
    ///
    /// # Example
    /// ```
    /// use prompt_seeder::domain::prompt::SeedState;
    ///
    /// assert!(SeedState::Absent.can_transition_to(SeedState::Created));
    /// assert!(!SeedState::Present.can_transition_to(SeedState::Created));
    /// ```
    pub fn can_transition_to(&self, next: SeedState) -> bool {
        use SeedState::*;
        matches!(
            (self, next),
            (Absent, Present) | (Absent, Created) | (Created, Aliased)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SeedState::Present | SeedState::Aliased)
    }
}

impl std::fmt::Display for SeedState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedState::Absent => write!(f, "absent"),
            SeedState::Present => write!(f, "present"),
            SeedState::Created => write!(f, "created"),
            SeedState::Aliased => write!(f, "aliased"),
        }
    }
}
