use kernel::model::{destination::Destination, id::DestinationId};
use rust_decimal::Decimal;

#[derive(sqlx::FromRow)]
pub struct DestinationRow {
    pub destination_id: DestinationId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price_per_night: Decimal,
    pub rating: Decimal,
}

impl From<DestinationRow> for Destination {
    fn from(value: DestinationRow) -> Self {
        let DestinationRow {
            destination_id,
            name,
            city,
            country,
            description,
            image_url,
            price_per_night,
            rating,
        } = value;
        Destination {
            id: destination_id,
            name,
            city,
            country,
            description,
            image_url,
            price_per_night,
            rating,
        }
    }
}
