use chrono::NaiveDate;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::fridge_item::expiry::ExpiryInfo;
use business::domain::fridge_item::severity::{Severity, SeverityPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum SeverityDto {
    #[oai(rename = "fresh")]
    Fresh,
    #[oai(rename = "warning")]
    Warning,
    #[oai(rename = "critical")]
    Critical,
    #[oai(rename = "expires_today")]
    ExpiresToday,
    #[oai(rename = "expired")]
    Expired,
}

impl From<Severity> for SeverityDto {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Fresh => SeverityDto::Fresh,
            Severity::Warning => SeverityDto::Warning,
            Severity::Critical => SeverityDto::Critical,
            Severity::ExpiresToday => SeverityDto::ExpiresToday,
            Severity::Expired => SeverityDto::Expired,
        }
    }
}

/// Ad-hoc input for the expiry calculator.
#[derive(Debug, Clone, Object)]
pub struct ComputeExpiryRequest {
    /// Reference day (YYYY-MM-DD); defaults to the server's current date
    #[oai(skip_serializing_if_is_none)]
    pub today: Option<NaiveDate>,
    /// Expiry date (YYYY-MM-DD)
    pub expiry_date: NaiveDate,
    /// Date the item was opened (YYYY-MM-DD)
    #[oai(skip_serializing_if_is_none)]
    pub opened_date: Option<NaiveDate>,
    /// Days the item stays usable once opened (must be positive)
    #[oai(skip_serializing_if_is_none)]
    pub use_within_days: Option<u32>,
}

/// Day counts with their severity tiers and display labels.
#[derive(Debug, Clone, Object)]
pub struct ExpiryInfoResponse {
    /// Days until expiry; 0 is today, negative means already expired
    pub days_until_expiry: i64,
    /// Days until the use-by date, null when not applicable
    pub days_until_use_by: Option<i64>,
    /// Tier of the expiry countdown
    pub expiry_severity: SeverityDto,
    /// Tier of the use-by countdown, null when not applicable
    pub use_by_severity: Option<SeverityDto>,
    /// Most urgent of the two tiers
    pub severity: SeverityDto,
    /// Human readable expiry countdown
    pub expiry_label: String,
    /// Human readable use-by countdown, null when not applicable
    pub use_by_label: Option<String>,
}

impl ExpiryInfoResponse {
    pub fn present(info: ExpiryInfo, policy: &SeverityPolicy) -> Self {
        let assessment = policy.assess(&info);
        Self {
            days_until_expiry: info.days_until_expiry,
            days_until_use_by: info.days_until_use_by,
            expiry_severity: assessment.expiry.into(),
            use_by_severity: assessment.use_by.map(|s| s.into()),
            severity: assessment.most_urgent().into(),
            expiry_label: expiry_label(info.days_until_expiry),
            use_by_label: info.days_until_use_by.map(use_by_label),
        }
    }
}

pub fn expiry_label(days_until_expiry: i64) -> String {
    match days_until_expiry {
        d if d < 0 => format!("Expired {}d ago", d.unsigned_abs()),
        0 => "Expires today".to_string(),
        d => format!("{}d remaining", d),
    }
}

pub fn use_by_label(days_until_use_by: i64) -> String {
    match days_until_use_by {
        d if d < 0 => format!("Past use-by {}d ago", d.unsigned_abs()),
        0 => "Use today".to_string(),
        d => format!("Use within {}d", d),
    }
}
