use chrono::NaiveDate;
use kernel::model::{booking::Stay, destination::Destination, id::DestinationId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationsResponse {
    pub items: Vec<DestinationResponse>,
}

impl From<Vec<Destination>> for DestinationsResponse {
    fn from(value: Vec<Destination>) -> Self {
        Self {
            items: value.into_iter().map(DestinationResponse::from).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DestinationResponse {
    pub id: DestinationId,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub image_url: Option<String>,
    pub price_per_night: Decimal,
    pub rating: Decimal,
}

impl From<Destination> for DestinationResponse {
    fn from(value: Destination) -> Self {
        let Destination {
            id,
            name,
            city,
            country,
            description,
            image_url,
            price_per_night,
            rating,
        } = value;
        Self {
            id,
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

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

/// Price of a stay as shown on the new-booking form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub nights: i64,
    pub price_per_night: Decimal,
    pub total_amount: Decimal,
}

impl QuoteResponse {
    pub fn new(query: QuoteQuery, price_per_night: Decimal) -> Self {
        let stay = Stay::new(query.check_in, query.check_out);
        Self {
            nights: stay.nights().max(0),
            price_per_night,
            total_amount: stay.total_for(price_per_night),
        }
    }
}
