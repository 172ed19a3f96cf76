//! Invariant checking for deterministic simulation testing.
//!
//! Invariants are properties that must always hold during system execution.
//! Unlike example-based tests that check specific scenarios, invariants
//! verify behavioral properties across all possible execution paths.
//!
//! # Architecture
//!
//! The invariant system extracts observable state from the App into an
//! [`AppSnapshot`], then runs registered [`Invariant`] checks against it.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! let snapshot = AppSnapshot::from_app(&app);
//! registry.check_all(&snapshot)?;
//! ```

mod checks;
mod snapshot;

pub use checks::{
    CodeDigitsOnly, CodeWithinLength, CooldownBounded, FeedSelectionInRange, OtpFormMatchesRoute,
    SheetOverLoadedFeed, SingleFocusedCell,
};
pub use snapshot::{AppSnapshot, OtpSnapshot, SheetSnapshot};

/// Identifies an invariant in violation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantKind {
    /// The code holds only ASCII digits.
    CodeDigitsOnly,
    /// The code never exceeds the cell count.
    CodeWithinLength,
    /// Exactly one cell is focused and it exists.
    SingleFocusedCell,
    /// The resend countdown never exceeds its period.
    CooldownBounded,
    /// The passcode form and the passcode route agree.
    OtpFormMatchesRoute,
    /// The comment sheet only opens on the home tab over a loaded post.
    SheetOverLoadedFeed,
    /// The feed selection points at a post.
    FeedSelectionInRange,
}

impl InvariantKind {
    /// Name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::CodeDigitsOnly => "code_digits_only",
            Self::CodeWithinLength => "code_within_length",
            Self::SingleFocusedCell => "single_focused_cell",
            Self::CooldownBounded => "cooldown_bounded",
            Self::OtpFormMatchesRoute => "otp_form_matches_route",
            Self::SheetOverLoadedFeed => "sheet_over_loaded_feed",
            Self::FeedSelectionInRange => "feed_selection_in_range",
        }
    }
}

impl std::fmt::Display for InvariantKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The violated invariant.
    pub invariant: InvariantKind,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against App state.
///
/// Invariants are behavioral properties that must always hold.
/// They capture WHAT must be true, not specific test scenarios.
pub trait Invariant: Send + Sync {
    /// Which invariant this is.
    fn kind(&self) -> InvariantKind;

    /// Check the invariant against the current state.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, state: &AppSnapshot) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Use [`InvariantRegistry::standard()`] for every App invariant.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl std::fmt::Debug for InvariantRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.invariants.iter().map(|inv| inv.kind())).finish()
    }
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with all standard App invariants.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(CodeDigitsOnly);
        registry.add(CodeWithinLength);
        registry.add(SingleFocusedCell);
        registry.add(CooldownBounded);
        registry.add(OtpFormMatchesRoute);
        registry.add(SheetOverLoadedFeed);
        registry.add(FeedSelectionInRange);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given state.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, state: &AppSnapshot) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(state).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Check all invariants, panicking with every violation found.
    ///
    /// Use this in tests where you want immediate failure with context.
    #[allow(clippy::panic)]
    pub fn assert_all(&self, state: &AppSnapshot, context: &str) {
        if let Err(violations) = self.check_all(state) {
            panic!("Invariant violation {context}:\n  {}", report(&violations));
        }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}

/// One violation per line.
pub fn report(violations: &[Violation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n  ")
}
