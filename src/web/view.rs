use serde::Deserialize;

use crate::{
    config::Config,
    listing::{filter_apartments, listings_for_seed},
    models::{
        apartment::Apartment,
        filter::{FilterState, PRICE_DOMAIN, ROOM_DOMAIN, SIZE_DOMAIN},
    },
};

/// Query string of one page view. Missing bounds fall back to the domain bound.
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ViewQuery {
    pub seed: Option<u64>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub rooms_min: Option<u32>,
    pub rooms_max: Option<u32>,
    pub size_min: Option<u32>,
    pub size_max: Option<u32>,
}

impl ViewQuery {
    pub fn filter_state(&self) -> FilterState {
        let mut filter = FilterState::default();
        filter.set_price_range((
            self.price_min.unwrap_or(PRICE_DOMAIN.min),
            self.price_max.unwrap_or(PRICE_DOMAIN.max),
        ));
        filter.set_room_range((
            self.rooms_min.unwrap_or(ROOM_DOMAIN.min),
            self.rooms_max.unwrap_or(ROOM_DOMAIN.max),
        ));
        filter.set_size_range((
            self.size_min.unwrap_or(SIZE_DOMAIN.min),
            self.size_max.unwrap_or(SIZE_DOMAIN.max),
        ));
        filter
    }
}

/// The listing and filter state a single page view works on.
#[derive(Debug, Clone)]
pub struct ListingView {
    pub seed: u64,
    pub filter: FilterState,
    pub apartments: Vec<Apartment>,
}

impl ListingView {
    pub fn resolve(config: &Config, query: &ViewQuery) -> Self {
        // A pinned seed wins; otherwise keep the view's seed or start a new view.
        let seed = config
            .listing_seed
            .or(query.seed)
            .unwrap_or_else(rand::random);

        ListingView {
            seed,
            filter: query.filter_state(),
            apartments: listings_for_seed(seed),
        }
    }

    pub fn visible(&self) -> Vec<&Apartment> {
        filter_apartments(&self.apartments, &self.filter)
    }
}
