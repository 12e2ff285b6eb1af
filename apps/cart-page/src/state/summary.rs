//! # Summary Panel State
//!
//! Open/closed flags for the three collapsible sections of the order
//! summary. Each flag is local, independent, and has nothing to do with
//! cart totals: toggling a panel never touches the cart.

use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// The collapsible sections of the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummarySection {
    /// "Apply Discount Code" input.
    DiscountCode,
    /// "Redeem Points" teaser.
    RedeemPoints,
    /// "Estimate Shipping and Tax" form.
    ShippingEstimate,
}

impl SummarySection {
    /// Identifier used in form posts and element ids.
    pub fn slug(&self) -> &'static str {
        match self {
            SummarySection::DiscountCode => "discount-code",
            SummarySection::RedeemPoints => "redeem-points",
            SummarySection::ShippingEstimate => "shipping-estimate",
        }
    }
}

impl FromStr for SummarySection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discount-code" => Ok(SummarySection::DiscountCode),
            "redeem-points" => Ok(SummarySection::RedeemPoints),
            "shipping-estimate" => Ok(SummarySection::ShippingEstimate),
            _ => Err(()),
        }
    }
}

/// Snapshot of the three flags, as the renderer consumes them.
/// All sections start closed, like the prototype's `defaultOpen: false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummarySections {
    pub discount_code: bool,
    pub redeem_points: bool,
    pub shipping_estimate: bool,
}

impl SummarySections {
    /// Whether a section is currently expanded.
    pub fn is_open(&self, section: SummarySection) -> bool {
        match section {
            SummarySection::DiscountCode => self.discount_code,
            SummarySection::RedeemPoints => self.redeem_points,
            SummarySection::ShippingEstimate => self.shipping_estimate,
        }
    }

    /// Flips one section, leaving the others untouched.
    pub fn toggle(&mut self, section: SummarySection) {
        match section {
            SummarySection::DiscountCode => self.discount_code = !self.discount_code,
            SummarySection::RedeemPoints => self.redeem_points = !self.redeem_points,
            SummarySection::ShippingEstimate => self.shipping_estimate = !self.shipping_estimate,
        }
    }
}

/// Mutex-guarded section flags for the page view.
#[derive(Debug, Clone)]
pub struct SummaryState {
    sections: Arc<Mutex<SummarySections>>,
}

impl SummaryState {
    /// Creates summary state with every section closed.
    pub fn new() -> Self {
        SummaryState {
            sections: Arc::new(Mutex::new(SummarySections::default())),
        }
    }

    /// Returns a snapshot of the flags for rendering.
    pub fn snapshot(&self) -> SummarySections {
        *self.sections.lock().expect("summary mutex poisoned")
    }

    /// Flips one section and returns its new state.
    pub fn toggle(&self, section: SummarySection) -> bool {
        let mut sections = self.sections.lock().expect("summary mutex poisoned");
        sections.toggle(section);
        sections.is_open(section)
    }
}

impl Default for SummaryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_start_closed() {
        let state = SummaryState::new();
        let snapshot = state.snapshot();
        assert!(!snapshot.discount_code);
        assert!(!snapshot.redeem_points);
        assert!(!snapshot.shipping_estimate);
    }

    #[test]
    fn test_toggle_is_independent() {
        let state = SummaryState::new();

        assert!(state.toggle(SummarySection::DiscountCode));
        let snapshot = state.snapshot();
        assert!(snapshot.discount_code);
        assert!(!snapshot.redeem_points);
        assert!(!snapshot.shipping_estimate);

        // Toggling twice lands back where it started
        assert!(!state.toggle(SummarySection::DiscountCode));
        assert_eq!(state.snapshot(), SummarySections::default());
    }

    #[test]
    fn test_slug_round_trip() {
        for section in [
            SummarySection::DiscountCode,
            SummarySection::RedeemPoints,
            SummarySection::ShippingEstimate,
        ] {
            assert_eq!(section.slug().parse::<SummarySection>(), Ok(section));
        }
        assert!("gift-wrap".parse::<SummarySection>().is_err());
    }
}
