mod carrier_finder;
mod lookup;

pub use carrier_finder::CarrierFinder;
pub use lookup::{lookup_carrier, CarrierLookupResponse};
