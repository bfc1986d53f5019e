use chrono::Local;
use poem_openapi::{OpenApi, payload::Json};

use business::domain::fridge_item::expiry::compute_expiry_info;
use business::domain::fridge_item::model::MAX_USE_WITHIN_DAYS;
use business::domain::fridge_item::severity::SeverityPolicy;

use crate::api::error::ErrorResponse;
use crate::api::expiry::dto::{ComputeExpiryRequest, ExpiryInfoResponse};
use crate::api::tags::ApiTags;

pub struct ExpiryApi {
    policy: SeverityPolicy,
}

impl ExpiryApi {
    pub fn new(policy: SeverityPolicy) -> Self {
        Self { policy }
    }
}

/// Expiry calculator API
#[OpenApi]
impl ExpiryApi {
    /// Compute expiry information
    ///
    /// Runs the expiry calculator for arbitrary dates without touching the
    /// inventory. `today` defaults to the server's current date.
    #[oai(path = "/expiry/compute", method = "post", tag = "ApiTags::Expiry")]
    async fn compute(&self, body: Json<ComputeExpiryRequest>) -> ComputeExpiryResponse {
        let request = body.0;
        match request.use_within_days {
            Some(0) => {
                return ComputeExpiryResponse::BadRequest(ErrorResponse::validation(
                    "fridge_item.use_within_days_not_positive",
                ));
            }
            Some(d) if d > MAX_USE_WITHIN_DAYS => {
                return ComputeExpiryResponse::BadRequest(ErrorResponse::validation(
                    "fridge_item.use_within_days_too_large",
                ));
            }
            _ => {}
        }

        let today = request.today.unwrap_or_else(|| Local::now().date_naive());
        let info = compute_expiry_info(
            today,
            request.expiry_date,
            request.opened_date,
            request.use_within_days,
        );

        ComputeExpiryResponse::Ok(Json(ExpiryInfoResponse::present(info, &self.policy)))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ComputeExpiryResponse {
    #[oai(status = 200)]
    Ok(Json<ExpiryInfoResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
