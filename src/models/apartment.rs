use serde::Serialize;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Apartment {
    pub id: u32,
    pub rooms: u32,
    /// Living area in m².
    pub size: u32,
    /// Asking price in euro.
    pub price: u32,
    pub description: String,
}
