use serde::{Deserialize, Serialize};

use crate::enums::CustomizerAttributeType;

/// A named placeholder that ads can reference for dynamic substitution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomizerAttribute {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Unique within the customer account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub attribute_type: Option<CustomizerAttributeType>,
}

/// The customer-level value substituted for a customizer attribute when
/// an ad referencing it serves.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerCustomizer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// Resource name of the attribute being valued.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizer_attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<CustomizerValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomizerValue {
    #[serde(rename = "type")]
    pub value_type: CustomizerAttributeType,
    pub string_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customizer_value_wire_shape() {
        let customizer = CustomerCustomizer {
            customizer_attribute: Some("customers/1/customizerAttributes/9".to_string()),
            value: Some(CustomizerValue {
                value_type: CustomizerAttributeType::Price,
                string_value: "100USD".to_string(),
            }),
            ..CustomerCustomizer::default()
        };
        let json = serde_json::to_value(&customizer).unwrap();
        assert_eq!(json["value"]["type"], "PRICE");
        assert_eq!(json["value"]["stringValue"], "100USD");
    }
}
