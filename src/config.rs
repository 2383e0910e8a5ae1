use std::collections::HashSet;

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::error::{ConfigError, Result};
use crate::hours::StoreHours;

const EMBEDDED_MENU: &str = include_str!("../assets/menu.json");

pub const DEFAULT_TITLE: &str = "Fast React Pizza Co.";
pub const DEFAULT_CAPTION: &str = "Authentic Italian cuisine. 6 creative dishes to choose from. \
All from our stone oven, all organic, all delicious.";

/// How sold-out items show up in the menu list.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SoldOutPolicy {
    /// Keep the item and mark it sold out.
    #[default]
    Mark,
    /// Leave sold-out items out of the list.
    Hide,
}

/// Everything the storefront renders from, loaded once at startup.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_caption")]
    pub caption: String,
    #[serde(default)]
    pub hours: StoreHours,
    #[serde(default)]
    pub sold_out: SoldOutPolicy,
    pub items: Catalog,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_caption() -> String {
    DEFAULT_CAPTION.to_string()
}

impl MenuConfig {
    pub fn new(items: Catalog) -> Self {
        Self {
            title: default_title(),
            caption: default_caption(),
            hours: StoreHours::default(),
            sold_out: SoldOutPolicy::default(),
            items,
        }
    }

    pub fn with_hours(mut self, hours: StoreHours) -> Self {
        self.hours = hours;
        self
    }

    pub fn with_sold_out(mut self, policy: SoldOutPolicy) -> Self {
        self.sold_out = policy;
        self
    }

    /// The menu bundled into the binary from `assets/menu.json`.
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_MENU)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: MenuConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    // Hours are deliberately left unchecked.
    fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.name.as_str()) {
                return Err(ConfigError::DuplicateName(item.name.clone()));
            }
            if !item.price.is_finite() || item.price < 0.0 {
                return Err(ConfigError::InvalidPrice {
                    name: item.name.clone(),
                    price: item.price,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_menu_loads() {
        let cfg = MenuConfig::embedded().unwrap();
        assert_eq!(cfg.title, DEFAULT_TITLE);
        assert_eq!(cfg.hours, StoreHours::new(9, 22));
        assert_eq!(cfg.sold_out, SoldOutPolicy::Mark);
        assert_eq!(cfg.items.len(), 6);
        assert!(cfg.items.get("Pizza Salamino").unwrap().sold_out);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = MenuConfig::from_json(r#"{"items": []}"#).unwrap();
        assert_eq!(cfg.title, DEFAULT_TITLE);
        assert_eq!(cfg.caption, DEFAULT_CAPTION);
        assert_eq!(cfg.hours, StoreHours::default());
        assert_eq!(cfg.sold_out, SoldOutPolicy::Mark);
        assert!(cfg.items.is_empty());
    }

    #[test]
    fn reads_hide_policy_and_hours() {
        let cfg = MenuConfig::from_json(
            r#"{"soldOut": "hide", "hours": {"open": 11, "close": 23}, "items": []}"#,
        )
        .unwrap();
        assert_eq!(cfg.sold_out, SoldOutPolicy::Hide);
        assert_eq!(cfg.hours, StoreHours::new(11, 23));
    }

    #[test]
    fn inverted_hours_are_accepted() {
        let cfg = MenuConfig::from_json(r#"{"hours": {"open": 22, "close": 9}, "items": []}"#);
        assert!(cfg.is_ok());
    }

    #[test]
    fn rejects_duplicate_names() {
        let json = r#"{"items": [
            {"name":"Funghi","ingredients":"","price":12,"photoName":"a.jpg"},
            {"name":"Funghi","ingredients":"","price":13,"photoName":"b.jpg"}
        ]}"#;
        let err = MenuConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateName(ref n) if n == "Funghi"));
    }

    #[test]
    fn rejects_negative_price() {
        let json = r#"{"items": [
            {"name":"Funghi","ingredients":"","price":-1,"photoName":"a.jpg"}
        ]}"#;
        let err = MenuConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPrice { .. }));
        assert_eq!(err.to_string(), "Invalid price -1 for Funghi");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = MenuConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
