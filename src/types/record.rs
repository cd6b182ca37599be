use crate::types::pollen_kind::PollenKind;
use crate::types::severity::Severity;

/// One pollen category as scraped from the health & activities page.
///
/// Both fields are kept as the page spells them (after trimming), the status is
/// not validated. Use [`PollenRecord::severity`] to classify it for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollenRecord {
    pub name: String,
    pub status: String,
}

impl PollenRecord {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }

    pub fn kind(&self) -> PollenKind {
        PollenKind::from_name(&self.name)
    }

    /// `None` when the status text is not one of the known levels.
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_status(&self.status)
    }
}
