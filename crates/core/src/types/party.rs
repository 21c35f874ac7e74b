//! Customer party (address) entity.

use serde::{Deserialize, Serialize};

/// A party attached to a customer account, usually a postal address.
///
/// Text fields the commerce system leaves unset deserialize as empty strings,
/// so derived values like a single-line address concatenate cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    /// Identifier assigned by the commerce system.
    pub external_id: String,
    /// Identifier of the party within the customer's address book.
    pub party_id: String,
    /// Display name of the address (e.g. "Home").
    pub name: String,
    /// First name of the addressee.
    pub first_name: String,
    /// Last name of the addressee.
    pub last_name: String,
    /// Street line.
    pub address1: String,
    /// Second street line.
    pub address2: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal/ZIP code.
    #[serde(alias = "zip")]
    pub zip_postal_code: String,
    /// Country name.
    pub country: String,
    /// ISO country code.
    pub country_code: String,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Whether this is the customer's primary address.
    pub is_primary: bool,
}

impl Party {
    /// Get the addressee's full name.
    #[must_use]
    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            (true, false) => self.last_name.clone(),
            (true, true) => String::new(),
        }
    }
}
