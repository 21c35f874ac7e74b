//! JSON results returned to storefront browser scripts.
//!
//! Wire keys are PascalCase field names (`ExternalId`, `FullAddress`, ...).
//! Every result flattens a [`BaseJsonResult`] carrying the service status.

pub mod address;
pub mod base;
pub mod loyalty;
pub mod stock;

pub use address::{
    ADDRESS_BOOK_PATH, AddressDerivation, AddressItemResult, AddressListResult,
    StandardAddressDerivation,
};
pub use base::BaseJsonResult;
pub use loyalty::{LoyaltyCardItemResult, LoyaltyCardsResult, LoyaltyRewardPointItemResult};
pub use stock::{StockInfoListResult, StockInfoResult};
