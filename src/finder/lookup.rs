use crate::carrierclassifier::carrierclassifier::CarrierClassifier;

/// Outcome of a carrier lookup as an HTTP endpoint reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarrierLookupResponse {
    /// The number parsed. `carrier` is empty when no carrier is known.
    Found { carrier: String },
    /// The number could not be parsed.
    BadRequest { message: String },
}

impl CarrierLookupResponse {
    pub fn status_code(&self) -> u16 {
        match self {
            CarrierLookupResponse::Found { .. } => 200,
            CarrierLookupResponse::BadRequest { .. } => 400,
        }
    }
}

pub fn lookup_carrier(classifier: &CarrierClassifier, phone: &str) -> CarrierLookupResponse {
    match classifier.get_carrier_for_number(phone) {
        Ok(carrier) => CarrierLookupResponse::Found { carrier },
        Err(err) => CarrierLookupResponse::BadRequest { message: err.to_string() },
    }
}
