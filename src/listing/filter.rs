use crate::models::{apartment::Apartment, filter::FilterState};

/// Returns the apartments inside all three intervals, in listing order.
pub fn filter_apartments<'a>(apartments: &'a [Apartment], filter: &FilterState) -> Vec<&'a Apartment> {
    apartments
        .iter()
        .filter(|apartment| filter.matches(apartment))
        .collect()
}
