use chrono::{DateTime, NaiveDate, Utc};
use poem_openapi::types::MaybeUndefined;
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::fridge_item::model::FridgeItem;
use business::domain::fridge_item::severity::SeverityPolicy;
use business::domain::fridge_item::use_cases::get_all::TrackedFridgeItem;
use business::domain::fridge_item::value_objects::EatenStatus;

use crate::api::expiry::dto::ExpiryInfoResponse;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Enum)]
pub enum EatenStatusDto {
    #[oai(rename = "fresh")]
    Fresh,
    #[oai(rename = "half eaten")]
    HalfEaten,
    #[oai(rename = "nearly eaten")]
    NearlyEaten,
    #[oai(rename = "eaten")]
    Eaten,
}

impl From<EatenStatus> for EatenStatusDto {
    fn from(status: EatenStatus) -> Self {
        match status {
            EatenStatus::Fresh => EatenStatusDto::Fresh,
            EatenStatus::HalfEaten => EatenStatusDto::HalfEaten,
            EatenStatus::NearlyEaten => EatenStatusDto::NearlyEaten,
            EatenStatus::Eaten => EatenStatusDto::Eaten,
        }
    }
}

impl From<EatenStatusDto> for EatenStatus {
    fn from(dto: EatenStatusDto) -> Self {
        match dto {
            EatenStatusDto::Fresh => EatenStatus::Fresh,
            EatenStatusDto::HalfEaten => EatenStatus::HalfEaten,
            EatenStatusDto::NearlyEaten => EatenStatus::NearlyEaten,
            EatenStatusDto::Eaten => EatenStatus::Eaten,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateFridgeItemRequest {
    /// Item name
    pub name: String,
    /// Expiry date (YYYY-MM-DD)
    pub expiry_date: NaiveDate,
    /// Date the item was opened (YYYY-MM-DD)
    #[oai(skip_serializing_if_is_none)]
    pub opened_date: Option<NaiveDate>,
    /// Days the item stays usable once opened (must be positive)
    #[oai(skip_serializing_if_is_none)]
    pub use_within_days: Option<u32>,
}

/// Partial update. Omitted fields are left unchanged; an explicit `null`
/// clears `opened_date` or `use_within_days`.
#[derive(Debug, Clone, Object)]
pub struct UpdateFridgeItemRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub expiry_date: Option<NaiveDate>,
    #[oai(skip_serializing_if_is_none)]
    pub eaten_status: Option<EatenStatusDto>,
    pub opened_date: MaybeUndefined<NaiveDate>,
    pub use_within_days: MaybeUndefined<u32>,
}

/// Maps a JSON field that may be missing, null or set onto keep/clear/set.
pub fn into_patch<T>(value: MaybeUndefined<T>) -> Option<Option<T>> {
    match value {
        MaybeUndefined::Undefined => None,
        MaybeUndefined::Null => Some(None),
        MaybeUndefined::Value(v) => Some(Some(v)),
    }
}

#[derive(Debug, Clone, Object)]
pub struct FridgeItemResponse {
    pub id: String,
    pub name: String,
    pub expiry_date: NaiveDate,
    pub opened_date: Option<NaiveDate>,
    pub use_within_days: Option<u32>,
    pub eaten_status: EatenStatusDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: String,
}

impl From<FridgeItem> for FridgeItemResponse {
    fn from(item: FridgeItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            expiry_date: item.expiry_date,
            opened_date: item.opened_date,
            use_within_days: item.use_within_days,
            eaten_status: item.eaten_status.into(),
            created_at: item.created_at,
            updated_at: item.updated_at,
            created_by: item.created_by.to_string(),
        }
    }
}

/// An inventory entry with its expiry information for the requested day.
#[derive(Debug, Clone, Object)]
pub struct TrackedFridgeItemResponse {
    pub item: FridgeItemResponse,
    pub expiry: ExpiryInfoResponse,
}

/// Presents the inventory most urgent first. Ties are broken by the nearer
/// countdown, then by name.
pub fn present_all(
    tracked: Vec<TrackedFridgeItem>,
    policy: &SeverityPolicy,
) -> Vec<TrackedFridgeItemResponse> {
    let mut ranked: Vec<_> = tracked
        .into_iter()
        .map(|t| {
            let severity = policy.assess(&t.expiry).most_urgent();
            let nearest = t
                .expiry
                .days_until_use_by
                .map_or(t.expiry.days_until_expiry, |d| {
                    d.min(t.expiry.days_until_expiry)
                });
            (severity, nearest, t)
        })
        .collect();

    ranked.sort_by(|(sev_a, days_a, a), (sev_b, days_b, b)| {
        sev_b
            .cmp(sev_a)
            .then(days_a.cmp(days_b))
            .then_with(|| a.item.name.cmp(&b.item.name))
    });

    ranked
        .into_iter()
        .map(|(_, _, t)| TrackedFridgeItemResponse {
            expiry: ExpiryInfoResponse::present(t.expiry, policy),
            item: t.item.into(),
        })
        .collect()
}
