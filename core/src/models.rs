use serde::{Deserialize, Serialize};

/// A time/quantity bound discount offered by a restaurant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub id: String,
    /// Percentage off, nominally 0-100. Out of range values are kept as-is.
    pub discount: i32,
    pub qty_left: i32,
    pub dine_in: bool,
    pub lightning: Option<bool>,
    pub open: Option<String>,
    pub close: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl Deal {
    pub fn is_lightning(&self) -> bool {
        self.lightning == Some(true)
    }

    /// "Between 3:00pm - 9:00pm", or "Anytime today" when either bound is missing
    pub fn time_window_label(&self) -> String {
        match (&self.open, &self.close) {
            (Some(open), Some(close)) => format!("Between {} - {}", open, close),
            _ => "Anytime today".to_string(),
        }
    }

    pub fn service_label(&self) -> &str {
        if self.dine_in {
            "Dine in"
        } else {
            "Takeaway"
        }
    }
}

/// A venue with zero or more deals, as delivered by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub address1: String,
    pub suburb: String,
    /// Display order matters; duplicates are kept.
    pub cuisines: Vec<String>,
    pub image_link: String,
    pub open: String,
    pub close: String,
    /// Payload order, not sorted.
    pub deals: Vec<Deal>,
}

impl Restaurant {
    /// Highest discount among the deals, 0 when there are none
    pub fn best_deal_discount(&self) -> i32 {
        self.deals.iter().map(|deal| deal.discount).max().unwrap_or(0)
    }

    pub fn address_line(&self) -> String {
        format!("{}, {}", self.address1, self.suburb)
    }

    pub fn hours_label(&self) -> String {
        format!("{} - {}", self.open, self.close)
    }

    pub fn cuisine_line(&self, separator: &str) -> String {
        self.cuisines.join(separator)
    }

    /// Case-insensitive substring match against the name or any cuisine tag.
    /// A blank query matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.trim().is_empty() {
            return true;
        }
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self
                .cuisines
                .iter()
                .any(|cuisine| cuisine.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(id: &str, discount: i32) -> Deal {
        Deal {
            id: id.to_string(),
            discount,
            qty_left: 3,
            dine_in: true,
            lightning: None,
            open: None,
            close: None,
            start: None,
            end: None,
        }
    }

    fn restaurant(name: &str, cuisines: &[&str], deals: Vec<Deal>) -> Restaurant {
        Restaurant {
            id: name.to_lowercase(),
            name: name.to_string(),
            address1: "55 Walsh Street".to_string(),
            suburb: "Lower East".to_string(),
            cuisines: cuisines.iter().map(|c| c.to_string()).collect(),
            image_link: String::new(),
            open: "3:00pm".to_string(),
            close: "9:00pm".to_string(),
            deals,
        }
    }

    #[test]
    fn best_deal_discount_is_zero_without_deals() {
        let r = restaurant("Simple Cafe", &["Coffee"], vec![]);
        assert_eq!(r.best_deal_discount(), 0);
    }

    #[test]
    fn best_deal_discount_takes_the_maximum() {
        let r = restaurant(
            "Masala Kitchen",
            &["Indian"],
            vec![deal("d1", 20), deal("d2", 50), deal("d3", 35)],
        );
        assert_eq!(r.best_deal_discount(), 50);
    }

    #[test]
    fn best_deal_discount_passes_negative_values_through() {
        let r = restaurant("Odd", &[], vec![deal("d1", -5)]);
        assert_eq!(r.best_deal_discount(), -5);
    }

    #[test]
    fn matches_query_checks_name_and_cuisines_case_insensitively() {
        let r = restaurant("ABC Chicken", &["Korean", "Fried Chicken"], vec![]);
        assert!(r.matches_query("abc"));
        assert!(r.matches_query("KOREAN"));
        assert!(r.matches_query("fried"));
        assert!(!r.matches_query("pizza"));
    }

    #[test]
    fn blank_query_matches_everything() {
        let r = restaurant("Pizza Palace", &["Pizza"], vec![]);
        assert!(r.matches_query(""));
        assert!(r.matches_query("   "));
    }

    #[test]
    fn query_is_matched_verbatim_when_not_blank() {
        let r = restaurant("Pizza Palace", &["Pizza"], vec![]);
        assert!(r.matches_query("za pa"));
        assert!(!r.matches_query(" pizza "));
    }

    #[test]
    fn labels() {
        let r = restaurant("Masala Kitchen", &["Indian", "Brazilian", "Indian"], vec![]);
        assert_eq!(r.address_line(), "55 Walsh Street, Lower East");
        assert_eq!(r.hours_label(), "3:00pm - 9:00pm");
        assert_eq!(r.cuisine_line(" • "), "Indian • Brazilian • Indian");

        let mut d = deal("d1", 30);
        assert_eq!(d.time_window_label(), "Anytime today");
        d.open = Some("3:00pm".to_string());
        assert_eq!(d.time_window_label(), "Anytime today");
        d.close = Some("9:00pm".to_string());
        assert_eq!(d.time_window_label(), "Between 3:00pm - 9:00pm");
        assert_eq!(d.service_label(), "Dine in");
        assert!(!d.is_lightning());
        d.lightning = Some(true);
        assert!(d.is_lightning());
    }
}
