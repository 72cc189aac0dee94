use serde::{Deserialize, Serialize};

use crate::feed::AutoAdvanceConfig;
use crate::order::{GeoPoint, OrderInfo, RestaurantInfo};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub order: OrderConfig,
    #[serde(default)]
    pub autoadvance: AutoAdvanceConfig,
}

/// The order the demo tracks.
///
/// Defaults reproduce the sample order so an empty config file is enough to
/// run the demo.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrderConfig {
    #[serde(default = "default_order_id")]
    pub id: String,
    /// Estimated delivery time, preformatted for display.
    #[serde(default = "default_eta")]
    pub eta: String,
    #[serde(default)]
    pub restaurant: RestaurantConfig,
    #[serde(default)]
    pub destination: DestinationConfig,
    /// Courier position; unset means no courier marker ever shows.
    #[serde(default = "default_driver")]
    pub driver: Option<DriverConfig>,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            id: default_order_id(),
            eta: default_eta(),
            restaurant: RestaurantConfig::default(),
            destination: DestinationConfig::default(),
            driver: default_driver(),
        }
    }
}

impl OrderConfig {
    /// Build the domain order from this configuration.
    pub fn to_order_info(&self) -> OrderInfo {
        let mut restaurant = RestaurantInfo::new(
            self.restaurant.name.clone(),
            GeoPoint::new(self.restaurant.lat, self.restaurant.lng),
        );
        if let Some(url) = &self.restaurant.photo_url {
            restaurant = restaurant.with_photo_url(url.clone());
        }

        OrderInfo {
            id: self.id.clone(),
            eta: self.eta.clone(),
            restaurant,
            destination: GeoPoint::new(self.destination.lat, self.destination.lng)
                .with_address(self.destination.address.clone()),
            driver_location: self
                .driver
                .as_ref()
                .map(|d| GeoPoint::new(d.lat, d.lng)),
        }
    }
}

/// Restaurant details for the demo order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RestaurantConfig {
    #[serde(default = "default_restaurant_name")]
    pub name: String,
    #[serde(default = "default_restaurant_lat")]
    pub lat: f64,
    #[serde(default = "default_restaurant_lng")]
    pub lng: f64,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: default_restaurant_name(),
            lat: default_restaurant_lat(),
            lng: default_restaurant_lng(),
            photo_url: None,
        }
    }
}

/// Delivery destination for the demo order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DestinationConfig {
    #[serde(default = "default_destination_address")]
    pub address: String,
    #[serde(default = "default_destination_lat")]
    pub lat: f64,
    #[serde(default = "default_destination_lng")]
    pub lng: f64,
}

impl Default for DestinationConfig {
    fn default() -> Self {
        Self {
            address: default_destination_address(),
            lat: default_destination_lat(),
            lng: default_destination_lng(),
        }
    }
}

/// Courier position for the demo order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DriverConfig {
    pub lat: f64,
    pub lng: f64,
}

fn default_order_id() -> String {
    "FD-6B3A9".to_string()
}

fn default_eta() -> String {
    "07:45 PM".to_string()
}

fn default_restaurant_name() -> String {
    "The Gourmet Kitchen".to_string()
}

fn default_restaurant_lat() -> f64 {
    34.0522
}

fn default_restaurant_lng() -> f64 {
    -118.2437
}

fn default_destination_address() -> String {
    "123 AppDev Lane".to_string()
}

fn default_destination_lat() -> f64 {
    34.0722
}

fn default_destination_lng() -> f64 {
    -118.2637
}

fn default_driver() -> Option<DriverConfig> {
    Some(DriverConfig {
        lat: 34.06,
        lng: -118.25,
    })
}
