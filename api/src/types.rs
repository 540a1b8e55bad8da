use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RestaurantsResponse {
    pub restaurants: Vec<RestaurantItem>,
}

#[derive(Debug, Deserialize)]
pub struct RestaurantItem {
    #[serde(rename = "objectId")]
    pub object_id: String,
    pub name: String,
    pub address1: String,
    pub suburb: String,
    #[serde(default)]
    pub cuisines: Vec<String>,
    #[serde(rename = "imageLink")]
    pub image_link: String,
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub deals: Vec<DealItem>,
}

// The live feed quotes every scalar ("discount": "30", "dineIn": "false"),
// so numbers and booleans accept either form.
#[derive(Debug, Deserialize)]
pub struct DealItem {
    #[serde(rename = "objectId")]
    pub object_id: String,
    #[serde(deserialize_with = "lenient_i32")]
    pub discount: i32,
    #[serde(rename = "qtyLeft", deserialize_with = "lenient_i32")]
    pub qty_left: i32,
    #[serde(rename = "dineIn", deserialize_with = "lenient_bool")]
    pub dine_in: bool,
    #[serde(default, deserialize_with = "lenient_opt_bool")]
    pub lightning: Option<bool>,
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolOrString {
    Bool(bool),
    Str(String),
}

fn lenient_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    match IntOrString::deserialize(deserializer)? {
        IntOrString::Int(n) => i32::try_from(n).map_err(de::Error::custom),
        IntOrString::Str(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

fn parse_bool<E: de::Error>(value: BoolOrString) -> Result<bool, E> {
    match value {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(E::custom(format!("invalid boolean: {}", other))),
        },
    }
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    parse_bool(BoolOrString::deserialize(deserializer)?)
}

fn lenient_opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BoolOrString>::deserialize(deserializer)?
        .map(parse_bool)
        .transpose()
}

impl From<DealItem> for eatclub_core::models::Deal {
    fn from(item: DealItem) -> Self {
        Self {
            id: item.object_id,
            discount: item.discount,
            qty_left: item.qty_left,
            dine_in: item.dine_in,
            lightning: item.lightning,
            open: item.open,
            close: item.close,
            start: item.start,
            end: item.end,
        }
    }
}

impl From<RestaurantItem> for eatclub_core::models::Restaurant {
    fn from(item: RestaurantItem) -> Self {
        Self {
            id: item.object_id,
            name: item.name,
            address1: item.address1,
            suburb: item.suburb,
            cuisines: item.cuisines,
            image_link: item.image_link,
            open: item.open,
            close: item.close,
            deals: item.deals.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eatclub_core::models::Restaurant;

    const LIVE_SHAPED: &str = r#"{
        "restaurants": [
            {
                "objectId": "DEA567C5-F64C-3C03-FF00-E3B24909BE00",
                "name": "Masala Kitchen",
                "address1": "55 Walsh Street",
                "suburb": "Lower East",
                "cuisines": ["Indian", "Koren", "Mexican"],
                "imageLink": "https://demo.eccdn.com.au/images/masala.jpg",
                "open": "3:00pm",
                "close": "9:00pm",
                "deals": [
                    {
                        "objectId": "DEA567C5-0000-3C03-FF00-E3B24909BE00",
                        "discount": "50",
                        "dineIn": "false",
                        "lightning": "true",
                        "open": "3:00pm",
                        "close": "9:00pm",
                        "qtyLeft": "5"
                    },
                    {
                        "objectId": "DEA567C5-1111-3C03-FF00-E3B24909BE00",
                        "discount": "40",
                        "dineIn": "true",
                        "lightning": "false",
                        "qtyLeft": "5"
                    }
                ]
            },
            {
                "objectId": "NO-DEALS",
                "name": "Simple Cafe",
                "address1": "123 Main Street",
                "suburb": "City Center",
                "imageLink": "",
                "open": "7:00am",
                "close": "4:00pm"
            }
        ]
    }"#;

    #[test]
    fn decodes_quoted_scalars() {
        let response: RestaurantsResponse = serde_json::from_str(LIVE_SHAPED).unwrap();
        let restaurants: Vec<Restaurant> =
            response.restaurants.into_iter().map(Into::into).collect();

        assert_eq!(restaurants.len(), 2);
        let masala = &restaurants[0];
        assert_eq!(masala.name, "Masala Kitchen");
        assert_eq!(masala.cuisines, vec!["Indian", "Koren", "Mexican"]);
        assert_eq!(masala.deals.len(), 2);

        let first = &masala.deals[0];
        assert_eq!(first.id, "DEA567C5-0000-3C03-FF00-E3B24909BE00");
        assert_eq!(first.discount, 50);
        assert_eq!(first.qty_left, 5);
        assert!(!first.dine_in);
        assert_eq!(first.lightning, Some(true));
        assert_eq!(first.open.as_deref(), Some("3:00pm"));
        assert_eq!(first.start, None);

        let second = &masala.deals[1];
        assert!(second.dine_in);
        assert_eq!(second.lightning, Some(false));
        assert_eq!(second.open, None);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let response: RestaurantsResponse = serde_json::from_str(LIVE_SHAPED).unwrap();
        let cafe: Restaurant = response.restaurants.into_iter().nth(1).unwrap().into();
        assert!(cafe.cuisines.is_empty());
        assert!(cafe.deals.is_empty());
        assert_eq!(cafe.best_deal_discount(), 0);
    }

    #[test]
    fn decodes_native_json_scalars() {
        let json = r#"{
            "objectId": "d1",
            "discount": 20,
            "qtyLeft": 0,
            "dineIn": true,
            "lightning": null
        }"#;
        let deal: DealItem = serde_json::from_str(json).unwrap();
        assert_eq!(deal.discount, 20);
        assert_eq!(deal.qty_left, 0);
        assert!(deal.dine_in);
        assert_eq!(deal.lightning, None);
    }

    #[test]
    fn out_of_range_discounts_pass_through() {
        let json = r#"{"objectId": "d1", "discount": "150", "qtyLeft": "-2", "dineIn": "true"}"#;
        let deal: DealItem = serde_json::from_str(json).unwrap();
        assert_eq!(deal.discount, 150);
        assert_eq!(deal.qty_left, -2);
    }

    #[test]
    fn rejects_garbage_numbers() {
        let json = r#"{"objectId": "d1", "discount": "lots", "qtyLeft": "1", "dineIn": "true"}"#;
        assert!(serde_json::from_str::<DealItem>(json).is_err());
    }

    #[test]
    fn rejects_missing_restaurant_list() {
        assert!(serde_json::from_str::<RestaurantsResponse>("{}").is_err());
    }
}
