//! Visibility filter and its route addresses.
//!
//! # Invariants
//! - The filter is transient UI state and is never persisted.
//! - Each filter maps to exactly one route address and back.

use std::fmt::{Display, Formatter};

/// Currently selected visibility scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    /// Route address selecting this filter.
    pub fn route(self) -> &'static str {
        match self {
            Self::All => "#/",
            Self::Active => "#/active",
            Self::Completed => "#/completed",
        }
    }

    /// Resolves a route address; unknown addresses fall back to `All`.
    pub fn from_route(route: &str) -> Self {
        match route.trim().trim_end_matches('/') {
            "#/active" => Self::Active,
            "#/completed" => Self::Completed,
            _ => Self::All,
        }
    }

    /// Whether an item with the given completion flag is visible.
    pub fn accepts(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }

    /// Lowercase name used by the CLI and log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }

    /// Parses a case-insensitive filter name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Filter;

    #[test]
    fn routes_round_trip() {
        for filter in Filter::ALL {
            assert_eq!(Filter::from_route(filter.route()), filter);
        }
    }

    #[test]
    fn unknown_route_selects_all() {
        assert_eq!(Filter::from_route("#/archived"), Filter::All);
        assert_eq!(Filter::from_route(""), Filter::All);
        assert_eq!(Filter::from_route("#/active/"), Filter::Active);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Filter::parse(" Completed "), Some(Filter::Completed));
        assert_eq!(Filter::parse("done"), None);
    }
}
