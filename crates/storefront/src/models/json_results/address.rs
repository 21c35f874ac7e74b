//! Address book results.

use reference_storefront_core::{Party, ServiceProviderResult};
use serde::Serialize;

use super::base::BaseJsonResult;
use crate::models::mapping::{Initialize, map_each};
use crate::site::StorefrontUri;

/// Site-relative path of the address book page.
pub const ADDRESS_BOOK_PATH: &str = "/accountmanagement/addressbook";

/// Computes the derived fields of an [`AddressItemResult`].
///
/// Storefront variants that format addresses differently implement this and
/// pass it to [`AddressItemResult::initialize_with`]; the copied fields stay
/// the same.
pub trait AddressDerivation {
    /// Single-line address: `"{address1}, {city}, {zip}"`.
    fn full_address(&self, address: &Party) -> String {
        [
            address.address1.as_str(),
            ", ",
            address.city.as_str(),
            ", ",
            address.zip_postal_code.as_str(),
        ]
        .concat()
    }

    /// Link to the address in the shopper's address book.
    fn details_url(&self, address: &Party, site: &dyn StorefrontUri) -> String {
        [
            site.storefront_uri(ADDRESS_BOOK_PATH).as_str(),
            "?id=",
            address.external_id.as_str(),
        ]
        .concat()
    }
}

/// The storefront's default address formats.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardAddressDerivation;

impl AddressDerivation for StandardAddressDerivation {}

/// A single address from the customer's address book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressItemResult {
    #[serde(flatten)]
    pub base: BaseJsonResult,
    pub name: String,
    pub external_id: String,
    pub address1: String,
    pub zip_postal_code: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub full_address: String,
    pub is_primary: bool,
    pub details_url: String,
}

impl AddressItemResult {
    /// Create an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty result carrying the status of a service call.
    #[must_use]
    pub fn with_status(result: &ServiceProviderResult) -> Self {
        Self {
            base: BaseJsonResult::from_service_result(result),
            ..Self::default()
        }
    }

    /// Populate from `address`, computing derived fields with `derivation`.
    pub fn initialize_with(
        &mut self,
        address: &Party,
        site: &dyn StorefrontUri,
        derivation: &impl AddressDerivation,
    ) {
        self.name.clone_from(&address.name);
        self.external_id.clone_from(&address.external_id);
        self.address1.clone_from(&address.address1);
        self.city.clone_from(&address.city);
        self.state.clone_from(&address.state);
        self.zip_postal_code.clone_from(&address.zip_postal_code);
        self.country.clone_from(&address.country);
        self.is_primary = address.is_primary;
        self.full_address = derivation.full_address(address);
        self.details_url = derivation.details_url(address, site);
    }
}

impl Initialize<Party> for AddressItemResult {
    const ARGUMENT: &'static str = "address";

    fn initialize(&mut self, address: &Party, site: &dyn StorefrontUri) {
        self.initialize_with(address, site, &StandardAddressDerivation);
    }
}

/// The customer's address book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressListResult {
    #[serde(flatten)]
    pub base: BaseJsonResult,
    pub addresses: Vec<AddressItemResult>,
}

impl AddressListResult {
    /// Create an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty result carrying the status of a service call.
    #[must_use]
    pub fn with_status(result: &ServiceProviderResult) -> Self {
        Self {
            base: BaseJsonResult::from_service_result(result),
            addresses: Vec::new(),
        }
    }
}

impl Initialize<[Party]> for AddressListResult {
    const ARGUMENT: &'static str = "addresses";

    fn initialize(&mut self, addresses: &[Party], site: &dyn StorefrontUri) {
        self.addresses.clear();
        self.addresses.extend(map_each(addresses, site));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::models::MappingError;
    use crate::site::SiteContext;
    use serde_json::json;

    fn baker_street() -> Party {
        Party {
            external_id: "A1".to_string(),
            name: "Home".to_string(),
            address1: "221B Baker St".to_string(),
            city: "London".to_string(),
            state: "Greater London".to_string(),
            zip_postal_code: "NW1".to_string(),
            country: "United Kingdom".to_string(),
            is_primary: true,
            ..Party::default()
        }
    }

    fn site() -> SiteContext {
        SiteContext::new("https://shop.example.com")
    }

    #[test]
    fn test_initialize_copies_and_derives() {
        let mut result = AddressItemResult::new();
        result.initialize(&baker_street(), &site());

        assert_eq!(result.external_id, "A1");
        assert_eq!(result.address1, "221B Baker St");
        assert_eq!(result.state, "Greater London");
        assert!(result.is_primary);
        assert_eq!(result.full_address, "221B Baker St, London, NW1");
        assert_eq!(
            result.details_url,
            "https://shop.example.com/accountmanagement/addressbook?id=A1"
        );
    }

    #[test]
    fn test_full_address_keeps_separators_for_empty_parts() {
        let party = Party {
            address1: "1 Main St".to_string(),
            ..Party::default()
        };
        let mut result = AddressItemResult::new();
        result.initialize(&party, &site());
        assert_eq!(result.full_address, "1 Main St, , ");
    }

    #[test]
    fn test_details_url_with_site_relative_base() {
        let mut result = AddressItemResult::new();
        result.initialize(&baker_street(), &SiteContext::default());
        assert_eq!(result.details_url, "/accountmanagement/addressbook?id=A1");
    }

    #[test]
    fn test_custom_derivation_overrides_only_derived_fields() {
        struct Postal;
        impl AddressDerivation for Postal {
            fn full_address(&self, address: &Party) -> String {
                format!("{} {}", address.zip_postal_code, address.city)
            }
        }

        let mut result = AddressItemResult::new();
        result.initialize_with(&baker_street(), &site(), &Postal);
        assert_eq!(result.full_address, "NW1 London");
        assert_eq!(result.address1, "221B Baker St");
        assert_eq!(
            result.details_url,
            "https://shop.example.com/accountmanagement/addressbook?id=A1"
        );
    }

    #[test]
    fn test_try_initialize_null_address() {
        let mut result = AddressItemResult::new();
        let err = result.try_initialize(None, &site()).unwrap_err();
        assert_eq!(err, MappingError::ArgumentNull { argument: "address" });
        assert_eq!(result, AddressItemResult::new());
    }

    #[test]
    fn test_with_status_keeps_errors() {
        let status = ServiceProviderResult::failed(["Address not found"]);
        let result = AddressItemResult::with_status(&status);
        assert!(!result.base.success);
        assert_eq!(result.base.errors, vec!["Address not found"]);
    }

    #[test]
    fn test_serialize_wire_keys() {
        let mut result = AddressItemResult::new();
        result.initialize(&baker_street(), &site());
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(
            value,
            json!({
                "Success": true,
                "Errors": [],
                "HasErrors": false,
                "Name": "Home",
                "ExternalId": "A1",
                "Address1": "221B Baker St",
                "ZipPostalCode": "NW1",
                "City": "London",
                "State": "Greater London",
                "Country": "United Kingdom",
                "FullAddress": "221B Baker St, London, NW1",
                "IsPrimary": true,
                "DetailsUrl": "https://shop.example.com/accountmanagement/addressbook?id=A1"
            })
        );
    }

    #[test]
    fn test_list_preserves_order() {
        let parties: Vec<Party> = ["A1", "B2", "C3"]
            .into_iter()
            .map(|id| Party {
                external_id: id.to_string(),
                ..Party::default()
            })
            .collect();

        let mut result = AddressListResult::new();
        result.initialize(parties.as_slice(), &site());

        let ids: Vec<&str> = result
            .addresses
            .iter()
            .map(|a| a.external_id.as_str())
            .collect();
        assert_eq!(ids, ["A1", "B2", "C3"]);
    }

    #[test]
    fn test_list_reinitialize_replaces_entries() {
        let parties = vec![baker_street()];
        let mut result = AddressListResult::new();
        result.initialize(parties.as_slice(), &site());
        result.initialize(parties.as_slice(), &site());
        assert_eq!(result.addresses.len(), 1);
    }

    #[test]
    fn test_list_null_addresses() {
        let mut result = AddressListResult::new();
        assert_eq!(
            result.try_initialize(None, &site()),
            Err(MappingError::ArgumentNull {
                argument: "addresses"
            })
        );
    }
}
