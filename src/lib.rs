//! Static pizza menu storefront rendered with Yew.
//!
//! [`render::compose`] builds the whole page as plain data from a
//! [`config::MenuConfig`] and the current hour; [`components::App`] turns that
//! into markup.

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod hours;
pub mod render;

pub use catalog::{Catalog, MenuItem};
pub use components::{App, AppProps};
pub use config::{MenuConfig, SoldOutPolicy};
pub use error::ConfigError;
pub use hours::{BrowserClock, Clock, FixedClock, StoreHours};
pub use render::{compose, StorefrontView};
