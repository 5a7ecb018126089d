use rust_decimal::Decimal;

use crate::model::id::DestinationId;

#[derive(Debug, Clone)]
pub struct Destination {
    pub id: DestinationId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price_per_night: Decimal,
    pub rating: Decimal,
}
