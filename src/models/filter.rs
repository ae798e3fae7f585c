use serde::Serialize;

use super::apartment::Apartment;

pub const PRICE_DOMAIN: RangeFilter = RangeFilter::new(200_000, 800_000);
pub const ROOM_DOMAIN: RangeFilter = RangeFilter::new(1, 6);
pub const SIZE_DOMAIN: RangeFilter = RangeFilter::new(50, 150);

/// Inclusive `[min, max]` interval over one listing attribute.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct RangeFilter {
    pub min: u32,
    pub max: u32,
}

impl RangeFilter {
    pub const fn new(min: u32, max: u32) -> Self {
        RangeFilter { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Clamps both bounds into `domain` and swaps a reversed pair.
    pub fn within(domain: RangeFilter, (low, high): (u32, u32)) -> Self {
        let low = low.clamp(domain.min, domain.max);
        let high = high.clamp(domain.min, domain.max);
        if low <= high {
            RangeFilter::new(low, high)
        } else {
            RangeFilter::new(high, low)
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct FilterState {
    pub price: RangeFilter,
    pub rooms: RangeFilter,
    pub size: RangeFilter,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            price: PRICE_DOMAIN,
            rooms: ROOM_DOMAIN,
            size: SIZE_DOMAIN,
        }
    }
}

impl FilterState {
    pub fn set_price_range(&mut self, range: (u32, u32)) {
        self.price = RangeFilter::within(PRICE_DOMAIN, range);
    }

    pub fn set_room_range(&mut self, range: (u32, u32)) {
        self.rooms = RangeFilter::within(ROOM_DOMAIN, range);
    }

    pub fn set_size_range(&mut self, range: (u32, u32)) {
        self.size = RangeFilter::within(SIZE_DOMAIN, range);
    }

    pub fn matches(&self, apartment: &Apartment) -> bool {
        self.price.contains(apartment.price)
            && self.rooms.contains(apartment.rooms)
            && self.size.contains(apartment.size)
    }
}
