use serde::{Deserialize, Serialize};

/// Shipping profile stored by `/profile/setprofile`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub phone: String,
    pub address1: String,
    pub address2: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
}

impl Profile {
    /// Names of required fields that are still blank. `address2` is optional.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("phone", &self.phone),
            ("address1", &self.address1),
            ("city", &self.city),
            ("postcode", &self.postcode),
            ("country", &self.country),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
