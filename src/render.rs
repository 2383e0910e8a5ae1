//! Pure display tree for the storefront.
//!
//! Everything here is a function of the menu config and the current hour.
//! The Yew components only turn these values into markup.

use crate::catalog::{Catalog, MenuItem};
use crate::config::{MenuConfig, SoldOutPolicy};
use crate::hours::StoreHours;

pub const SOLD_OUT_LABEL: &str = "SOLD OUT!";
pub const EMPTY_MENU_MESSAGE: &str = "We're working on our menu. Please come back later :)";
pub const CLOSED_MESSAGE: &str = "We are closed. Sorry!";
pub const ORDER_ACTION: &str = "Order";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStyle {
    Normal,
    SoldOut,
}

impl ItemStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            ItemStyle::Normal => "pizza",
            ItemStyle::SoldOut => "pizza sold-out",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub name: String,
    pub ingredients: String,
    pub photo: String,
    pub price_label: String,
    pub style: ItemStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MenuView {
    NonEmpty { caption: String, items: Vec<ItemView> },
    Empty { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FooterView {
    Order {
        open_label: String,
        close_label: String,
        message: String,
        action: String,
    },
    Closed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontView {
    pub title: String,
    pub menu: MenuView,
    pub footer: FooterView,
}

pub fn format_price(price: f64) -> String {
    format!("${}", price)
}

pub fn render_item(item: &MenuItem) -> ItemView {
    let (price_label, style) = if item.sold_out {
        (SOLD_OUT_LABEL.to_string(), ItemStyle::SoldOut)
    } else {
        (format_price(item.price), ItemStyle::Normal)
    };

    ItemView {
        name: item.name.clone(),
        ingredients: item.ingredients.clone(),
        photo: item.photo.clone(),
        price_label,
        style,
    }
}

/// The branch is decided by the catalog size alone; `Hide` only filters
/// the rows of a non-empty menu.
pub fn render_menu(catalog: &Catalog, caption: &str, policy: SoldOutPolicy) -> MenuView {
    if catalog.is_empty() {
        return MenuView::Empty {
            message: EMPTY_MENU_MESSAGE.to_string(),
        };
    }

    let items = catalog
        .iter()
        .filter(|it| policy == SoldOutPolicy::Mark || !it.sold_out)
        .map(render_item)
        .collect();

    MenuView::NonEmpty {
        caption: caption.to_string(),
        items,
    }
}

pub fn render_footer(hours: &StoreHours, hour: u8) -> FooterView {
    if !hours.is_open(hour) {
        return FooterView::Closed {
            message: CLOSED_MESSAGE.to_string(),
        };
    }

    let open_label = hours.open_label();
    let close_label = hours.close_label();
    let message = format!(
        "We are open from {} to {}. Come visit us or order!",
        open_label, close_label
    );

    FooterView::Order {
        open_label,
        close_label,
        message,
        action: ORDER_ACTION.to_string(),
    }
}

pub fn compose(config: &MenuConfig, hour: u8) -> StorefrontView {
    StorefrontView {
        title: config.title.clone(),
        menu: render_menu(&config.items, &config.caption, config.sold_out),
        footer: render_footer(&config.hours, hour),
    }
}
