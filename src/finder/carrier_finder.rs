use crate::carrierclassifier::carrierclassifier::CarrierClassifier;

/// State of an interactive carrier search box: the typed phone number and
/// either the carrier found for it or the reason it couldn't be parsed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CarrierFinder {
    pub phone: Option<String>,
    pub carrier: Option<String>,
    pub message: Option<String>,
}

impl CarrierFinder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = Some(phone.into());
    }

    /// Looks up the carrier of the current phone number.
    pub fn find(&mut self, classifier: &CarrierClassifier) {
        let phone = self.phone.as_deref().unwrap_or_default();
        match classifier.get_carrier_for_number(phone) {
            Ok(carrier) => {
                self.carrier = Some(carrier);
                self.message = None;
            }
            Err(err) => {
                self.carrier = None;
                self.message = Some(err.to_string());
            }
        }
    }

    /// Refreshes the result when a phone number is entered and returns the
    /// text to display.
    pub fn render(&mut self, classifier: &CarrierClassifier) -> String {
        if self.phone.as_deref().is_some_and(|phone| !phone.is_empty()) {
            self.find(classifier);
        }

        let carrier = self.carrier.as_deref().filter(|carrier| !carrier.is_empty());
        let message = self.message.as_deref().filter(|message| !message.is_empty());
        match (carrier, message) {
            (Some(carrier), Some(message)) => fast_cat::concat_str!(carrier, " ", message),
            (Some(text), None) | (None, Some(text)) => text.to_owned(),
            (None, None) => String::new(),
        }
    }
}
