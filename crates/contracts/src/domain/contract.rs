use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A procurement contract as published on the marketplace.
///
/// Field names serialize in the camelCase shape used by the upstream data
/// feed, so a JSON export of the feed deserializes without a mapping layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub contract_number: String,
    pub contract_status: String,
    pub contract_date: NaiveDate,
    pub procurement_type: String,
    pub contract_value: f64,
    pub brand: String,
    /// Present only for contracts awarded through a bid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_number: Option<String>,
    pub buyer: Buyer,
    pub seller: Seller,
    pub consignee: Consignee,
    pub product: Product,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buyer {
    pub buyer_name: String,
    pub buyer_email: String,
    pub buyer_contact_number: String,
    pub buyer_address: String,
    pub organization_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ministry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

/// Seller reference on a contract.
///
/// The feed carries either a bare seller name or a full seller record; the
/// untagged representation accepts both. Use the accessor methods instead of
/// matching at call sites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Seller {
    Detailed(SellerDetails),
    Named(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellerDetails {
    pub seller_name: String,
    pub seller_email: String,
    pub seller_contact_number: String,
    pub seller_address: String,
    #[serde(rename = "sellerGSTNumber")]
    pub seller_gst_number: String,
    pub seller_verified_status: String,
}

impl Seller {
    pub fn name(&self) -> &str {
        match self {
            Seller::Named(name) => name,
            Seller::Detailed(d) => &d.seller_name,
        }
    }

    /// Empty for name-only sellers.
    pub fn email(&self) -> &str {
        match self {
            Seller::Named(_) => "",
            Seller::Detailed(d) => &d.seller_email,
        }
    }

    /// Empty for name-only sellers.
    pub fn address(&self) -> &str {
        match self {
            Seller::Named(_) => "",
            Seller::Detailed(d) => &d.seller_address,
        }
    }

    /// Empty for name-only sellers.
    pub fn gst_number(&self) -> &str {
        match self {
            Seller::Named(_) => "",
            Seller::Detailed(d) => &d.seller_gst_number,
        }
    }

    /// Name-only sellers default to "Unverified".
    pub fn verified_status(&self) -> &str {
        match self {
            Seller::Named(_) => "Unverified",
            Seller::Detailed(d) => &d.seller_verified_status,
        }
    }

    /// Case-insensitive search across every textual seller field.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        match self {
            Seller::Named(name) => name.to_lowercase().contains(&term),
            Seller::Detailed(d) => {
                d.seller_name.to_lowercase().contains(&term)
                    || d.seller_email.to_lowercase().contains(&term)
                    || d.seller_address.to_lowercase().contains(&term)
                    || d.seller_gst_number.to_lowercase().contains(&term)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consignee {
    pub consignee_name: String,
    pub consignee_email: String,
    pub consignee_contact_number: String,
    pub consignee_address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_name: String,
    pub product_model: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_order_value: f64,
    pub category_name: String,
    pub catalogue_status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detailed_seller() -> Seller {
        Seller::Detailed(SellerDetails {
            seller_name: "Stellar Infotech".to_string(),
            seller_email: "sales@stellar.in".to_string(),
            seller_contact_number: "080-4455667".to_string(),
            seller_address: "4 Residency Rd, Bengaluru, Karnataka, 560025".to_string(),
            seller_gst_number: "29AAACS1234F1Z5".to_string(),
            seller_verified_status: "Verified".to_string(),
        })
    }

    #[test]
    fn named_seller_defaults() {
        let s = Seller::Named("Omega Traders".to_string());
        assert_eq!(s.name(), "Omega Traders");
        assert_eq!(s.email(), "");
        assert_eq!(s.gst_number(), "");
        assert_eq!(s.verified_status(), "Unverified");
    }

    #[test]
    fn detailed_seller_accessors() {
        let s = detailed_seller();
        assert_eq!(s.name(), "Stellar Infotech");
        assert_eq!(s.verified_status(), "Verified");
        assert_eq!(s.gst_number(), "29AAACS1234F1Z5");
    }

    #[test]
    fn seller_search_is_case_insensitive() {
        let s = detailed_seller();
        assert!(s.matches_term("stellar"));
        assert!(s.matches_term("29aaacs"));
        assert!(!s.matches_term("omega"));

        let named = Seller::Named("Omega Traders".to_string());
        assert!(named.matches_term("OMEGA"));
        assert!(!named.matches_term("stellar"));
    }

    #[test]
    fn seller_deserializes_from_string_or_object() {
        let named: Seller = serde_json::from_str(r#""Omega Traders""#).unwrap();
        assert_eq!(named, Seller::Named("Omega Traders".to_string()));

        let detailed: Seller = serde_json::from_str(
            r#"{
                "sellerName": "Stellar Infotech",
                "sellerEmail": "sales@stellar.in",
                "sellerContactNumber": "080-4455667",
                "sellerAddress": "4 Residency Rd, Bengaluru, Karnataka, 560025",
                "sellerGSTNumber": "29AAACS1234F1Z5",
                "sellerVerifiedStatus": "Verified"
            }"#,
        )
        .unwrap();
        assert_eq!(detailed.name(), "Stellar Infotech");
    }
}
