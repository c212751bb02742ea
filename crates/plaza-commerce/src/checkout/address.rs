//! Shipping address types.

use crate::ids::{AddressId, UserId};
use serde::{Deserialize, Serialize};

/// A buyer's shipping address, shown to sellers on sold orders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShippingAddress {
    /// Address ID.
    pub id: AddressId,
    /// The user this address belongs to.
    pub user_id: UserId,
    /// Recipient name.
    pub recipient: String,
    /// Street address.
    pub street: String,
    /// Apartment, suite, etc.
    pub unit: Option<String>,
    /// City.
    pub city: String,
    /// State/province/region.
    pub region: Option<String>,
    /// Postal/ZIP code.
    pub postal_code: String,
    /// Country code (e.g. "US").
    pub country: String,
}

impl ShippingAddress {
    /// Create an address with the required fields.
    pub fn new(
        user_id: UserId,
        recipient: impl Into<String>,
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            id: AddressId::generate(),
            user_id,
            recipient: recipient.into(),
            street: street.into(),
            unit: None,
            city: city.into(),
            region: None,
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    /// Single-line form for order summaries.
    pub fn one_line(&self) -> String {
        let mut parts = vec![self.street.clone()];
        if let Some(ref unit) = self.unit {
            parts.push(unit.clone());
        }
        parts.push(self.city.clone());
        if let Some(ref region) = self.region {
            parts.push(region.clone());
        }
        parts.push(self.postal_code.clone());
        parts.push(self.country.clone());
        parts.join(", ")
    }

    /// Label form for shipping, one field per line.
    pub fn label(&self) -> String {
        let mut lines = vec![self.recipient.clone(), self.street.clone()];
        if let Some(ref unit) = self.unit {
            lines.push(unit.clone());
        }
        let city_line = match self.region {
            Some(ref region) => format!("{}, {} {}", self.city, region, self.postal_code),
            None => format!("{} {}", self.city, self.postal_code),
        };
        lines.push(city_line);
        lines.push(self.country.clone());
        lines.join("\n")
    }
}
