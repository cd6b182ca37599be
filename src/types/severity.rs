//! Defines the `Severity` enum, mapping the free-text status labels found on the
//! AccuWeather page to the three badge levels shown in the report.

use std::fmt;

/// Severity level of a pollen category, used to pick the badge.
///
/// The page reports levels such as "Low", "Moderate", "High" and "Very High".
/// "Very High" collapses into [`Severity::High`]; anything else is unknown and
/// gets no badge.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Severity {
    /// Status text "low".
    Low,
    /// Status text "moderate".
    Moderate,
    /// Status text "high" or "very high".
    High,
}

impl Severity {
    /// Attempts to classify a status label (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pollen::Severity;
    ///
    /// assert_eq!(Severity::from_status("Moderate"), Some(Severity::Moderate));
    /// assert_eq!(Severity::from_status("Very High"), Some(Severity::High));
    /// assert_eq!(Severity::from_status("Extreme"), None);
    /// ```
    pub fn from_status(status: &str) -> Option<Self> {
        match status.to_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "moderate" => Some(Severity::Moderate),
            "high" | "very high" => Some(Severity::High),
            _ => None,
        }
    }

    /// Short label printed inside the badge.
    pub fn badge_label(&self) -> &'static str {
        match self {
            Severity::Low => "LOW",
            Severity::Moderate => "MOD",
            Severity::High => "HIGH",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.badge_label())
    }
}
