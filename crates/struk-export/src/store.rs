use serde::{Deserialize, Serialize};

/// Static header and footer text printed on every receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreProfile {
    pub name: String,
    pub address: String,
    pub greeting: String,
    pub support_contact: String,
}

impl Default for StoreProfile {
    fn default() -> Self {
        Self {
            name: "Warung Serbaguna".to_string(),
            address: "Jl. Merdeka No. 123".to_string(),
            greeting: "Terima Kasih".to_string(),
            support_contact: "0812-3456-7890".to_string(),
        }
    }
}
