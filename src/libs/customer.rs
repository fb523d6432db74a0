use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomerKind {
    Private,
    Company,
}

/// Customer data captured for the report header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub kind: CustomerKind,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub postal_code: String,
    pub city: String,
    pub street: String,
    pub house_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl Customer {
    /// Company name for companies, otherwise "First Last" with empty
    /// parts skipped.
    pub fn display_name(&self) -> String {
        if let (CustomerKind::Company, Some(company)) = (self.kind, self.company_name.as_deref()) {
            if !company.trim().is_empty() {
                return company.trim().to_string();
            }
        }
        [self.first_name.as_str(), self.last_name.as_str()]
            .iter()
            .filter(|part| !part.trim().is_empty())
            .map(|part| part.trim())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Postal address as "Street No, PLZ City".
    pub fn address_line(&self) -> String {
        format!("{} {}, {} {}", self.street.trim(), self.house_number.trim(), self.postal_code.trim(), self.city.trim())
    }
}
