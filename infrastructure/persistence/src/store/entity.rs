use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::store::model::{StorePrice, StoreRecord};

#[derive(Debug, FromRow)]
pub struct StoreEntity {
    pub id: Option<String>,
    pub name: Option<String>,
    pub chain: Option<String>,
    pub address: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl StoreEntity {
    pub fn into_domain(self) -> StoreRecord {
        StoreRecord {
            id: self.id,
            name: self.name,
            chain: self.chain,
            address: self.address,
            latitude: self.lat,
            longitude: self.lng,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct StorePriceEntity {
    pub store_id: Uuid,
    pub food_name: String,
    pub price_usd: BigDecimal,
}

impl StorePriceEntity {
    /// `None` for prices that do not fit an `f64`.
    pub fn into_domain(self) -> Option<StorePrice> {
        Some(StorePrice {
            store_id: self.store_id,
            food_name: self.food_name.trim().to_lowercase(),
            price: self.price_usd.to_f64()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn should_lowercase_food_name_and_convert_price() {
        let store_id = Uuid::new_v4();
        let price = StorePriceEntity {
            store_id,
            food_name: " Whole Milk ".to_string(),
            price_usd: BigDecimal::from_str("1.49").unwrap(),
        }
        .into_domain()
        .unwrap();

        assert_eq!(price.store_id, store_id);
        assert_eq!(price.food_name, "whole milk");
        assert!((price.price - 1.49).abs() < 1e-9);
    }

    #[test]
    fn should_map_coordinates() {
        let record = StoreEntity {
            id: Some("id".to_string()),
            name: None,
            chain: None,
            address: None,
            lat: Some(1.5),
            lng: Some(-2.5),
        }
        .into_domain();

        assert_eq!(record.latitude, Some(1.5));
        assert_eq!(record.longitude, Some(-2.5));
    }
}
