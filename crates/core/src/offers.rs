//! Offer type literals and the default free-module catalogue.

/// Offer type for a slot that carries a recurring fixed offer.
pub const OFFER_TYPE_FIXED: &str = "fixed";

/// Offer type for a teacher-chosen, non-recurring booking.
pub const OFFER_TYPE_FREE: &str = "free";

/// Module names teachers can pick for free (non-fixed) bookings.
pub const FREE_MODULES: [&str; 5] = [
    "Aktivierung",
    "Regulation / Entspannung",
    "Konflikt-Reset",
    "Turnen / flexibel",
    "Wochenstart Warm-Up",
];

/// The offer type a new booking gets, derived from whether the target slot
/// has a fixed-offer placement.
pub fn offer_type_for(has_fixed_offer: bool) -> &'static str {
    if has_fixed_offer {
        OFFER_TYPE_FIXED
    } else {
        OFFER_TYPE_FREE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_type_follows_placement() {
        assert_eq!(offer_type_for(true), "fixed");
        assert_eq!(offer_type_for(false), "free");
    }
}
