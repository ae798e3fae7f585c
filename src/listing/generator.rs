use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::models::{
    apartment::Apartment,
    filter::{PRICE_DOMAIN, ROOM_DOMAIN, SIZE_DOMAIN},
};

pub const LISTING_COUNT: usize = 20;

const ADJECTIVES: [&str; 3] = ["Geräumige", "Moderne", "Elegante"];

/// Generates the listing of one view. Every attribute is an independent
/// uniform draw over its inclusive domain.
pub fn generate_listings<R: Rng>(rng: &mut R) -> Vec<Apartment> {
    (0..LISTING_COUNT)
        .map(|index| Apartment {
            id: index as u32 + 1,
            rooms: rng.gen_range(ROOM_DOMAIN.min..=ROOM_DOMAIN.max),
            size: rng.gen_range(SIZE_DOMAIN.min..=SIZE_DOMAIN.max),
            price: rng.gen_range(PRICE_DOMAIN.min..=PRICE_DOMAIN.max),
            description: describe(index),
        })
        .collect()
}

pub fn listings_for_seed(seed: u64) -> Vec<Apartment> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_listings(&mut rng)
}

pub fn describe(index: usize) -> String {
    let feature = if index % 2 == 0 { "Balkon" } else { "Terrasse" };
    format!("{} Wohnung mit {}.", ADJECTIVES[index % 3], feature)
}
