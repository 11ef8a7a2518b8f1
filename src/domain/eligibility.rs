use serde::Serialize;

use super::ShippingRegions;

/// Outcome of the onboarding gate for a shipping-region selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    /// Ships to at least one supported region. The submission is forwarded.
    Accepted,
    /// Ships to no supported region, including the empty selection. The
    /// submission is declined softly and pointed at the waitlist.
    Waitlisted,
}

impl Eligibility {
    /// Classifies a selection. Co-selecting "Other regions" never downgrades a
    /// selection that contains a supported region.
    pub fn of(regions: &ShippingRegions) -> Self {
        if regions.iter().any(|region| region.is_supported()) {
            Eligibility::Accepted
        } else {
            Eligibility::Waitlisted
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Eligibility::Accepted)
    }
}

/// View state for the shipping-region section of the onboarding form.
///
/// Always derived from the whole selection via [`Eligibility::of`], never
/// toggled from individual checkbox events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionSelectionView {
    pub eligibility: Eligibility,
    /// Show the waitlist banner. Only once something has been selected.
    pub show_waitlist_banner: bool,
    /// Mark the supported-region checkboxes as `required`.
    pub require_supported_region: bool,
}

impl RegionSelectionView {
    pub fn from_selection(regions: &ShippingRegions) -> Self {
        let eligibility = Eligibility::of(regions);
        let waitlisted = !eligibility.is_accepted();
        Self {
            eligibility,
            show_waitlist_banner: waitlisted && !regions.is_empty(),
            require_supported_region: waitlisted,
        }
    }
}
