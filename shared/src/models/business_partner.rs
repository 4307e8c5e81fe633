//! Business Partner Model

use serde::{Deserialize, Serialize};

/// Business partner entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BusinessPartner {
    pub id: i64,
    /// Human-readable sequential id (PTN000001)
    pub master_id: String,
    /// Partner type code (HEADQUARTERS / FRANCHISE / SHOP / SUPPLIER)
    pub partner_type: String,
    pub name: String,
    pub business_number: Option<String>,
    pub representative: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Business partner type taxonomy entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BusinessPartnerType {
    pub id: i64,
    pub code: String,
    pub name: String,
}

impl BusinessPartnerType {
    /// Built-in taxonomy served when the type table cannot be read
    pub fn defaults() -> Vec<BusinessPartnerType> {
        [
            (1, "HEADQUARTERS", "본사"),
            (2, "FRANCHISE", "가맹점"),
            (3, "SHOP", "매장"),
            (4, "SUPPLIER", "공급업체"),
        ]
        .into_iter()
        .map(|(id, code, name)| BusinessPartnerType {
            id,
            code: code.to_string(),
            name: name.to_string(),
        })
        .collect()
    }
}

/// Create business partner payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessPartnerCreate {
    pub partner_type: String,
    pub name: String,
    pub business_number: Option<String>,
    pub representative: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Next master id response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterIdResponse {
    pub master_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_taxonomy() {
        let codes: Vec<_> = BusinessPartnerType::defaults()
            .into_iter()
            .map(|t| t.code)
            .collect();
        assert_eq!(codes, ["HEADQUARTERS", "FRANCHISE", "SHOP", "SUPPLIER"]);
    }
}
