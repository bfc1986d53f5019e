use std::sync::Arc;

use chrono::NaiveDate;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::fridge_item::severity::SeverityPolicy;
use business::domain::fridge_item::use_cases::create::{
    CreateFridgeItemParams, CreateFridgeItemUseCase,
};
use business::domain::fridge_item::use_cases::delete::{
    DeleteFridgeItemParams, DeleteFridgeItemUseCase,
};
use business::domain::fridge_item::use_cases::get_all::{
    GetAllFridgeItemsParams, GetAllFridgeItemsUseCase,
};
use business::domain::fridge_item::use_cases::update::{
    UpdateFridgeItemParams, UpdateFridgeItemUseCase,
};
use business::domain::shared::value_objects::CreatedBy;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::fridge_item::dto::{
    CreateFridgeItemRequest, FridgeItemResponse, TrackedFridgeItemResponse,
    UpdateFridgeItemRequest, into_patch, present_all,
};
use crate::api::tags::ApiTags;

pub struct FridgeItemApi {
    create_use_case: Arc<dyn CreateFridgeItemUseCase>,
    get_all_use_case: Arc<dyn GetAllFridgeItemsUseCase>,
    update_use_case: Arc<dyn UpdateFridgeItemUseCase>,
    delete_use_case: Arc<dyn DeleteFridgeItemUseCase>,
    created_by: CreatedBy,
    policy: SeverityPolicy,
}

impl FridgeItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateFridgeItemUseCase>,
        get_all_use_case: Arc<dyn GetAllFridgeItemsUseCase>,
        update_use_case: Arc<dyn UpdateFridgeItemUseCase>,
        delete_use_case: Arc<dyn DeleteFridgeItemUseCase>,
        created_by: CreatedBy,
        policy: SeverityPolicy,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            update_use_case,
            delete_use_case,
            created_by,
            policy,
        }
    }
}

fn parse_id(id: &str) -> Result<Uuid, Json<ErrorResponse>> {
    Uuid::parse_str(id).map_err(|_| ErrorResponse::validation("fridge_item.invalid_id"))
}

/// Fridge inventory API
///
/// Endpoints for tracking what is in the fridge and how soon it must be eaten.
#[OpenApi]
impl FridgeItemApi {
    /// List fridge items
    ///
    /// Returns every item with its expiry information, most urgent first.
    /// `today` (YYYY-MM-DD) overrides the reference day.
    #[oai(path = "/fridge-items", method = "get", tag = "ApiTags::FridgeItems")]
    async fn get_all_fridge_items(
        &self,
        today: Query<Option<NaiveDate>>,
    ) -> GetAllFridgeItemsResponse {
        match self
            .get_all_use_case
            .execute(GetAllFridgeItemsParams { today: today.0 })
            .await
        {
            Ok(tracked) => {
                GetAllFridgeItemsResponse::Ok(Json(present_all(tracked, &self.policy)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllFridgeItemsResponse::InternalError(json)
            }
        }
    }

    /// Add a fridge item
    ///
    /// New items start as "fresh" and are attributed to the configured creator.
    #[oai(path = "/fridge-items", method = "post", tag = "ApiTags::FridgeItems")]
    async fn create_fridge_item(
        &self,
        body: Json<CreateFridgeItemRequest>,
    ) -> CreateFridgeItemResponse {
        let params = CreateFridgeItemParams {
            name: body.0.name,
            expiry_date: body.0.expiry_date,
            opened_date: body.0.opened_date,
            use_within_days: body.0.use_within_days,
            created_by: self.created_by.clone(),
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateFridgeItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateFridgeItemResponse::BadRequest(json),
                    _ => CreateFridgeItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a fridge item
    ///
    /// Only the fields present in the body change. Send `null` for
    /// `opened_date` or `use_within_days` to clear them.
    #[oai(
        path = "/fridge-items/:id",
        method = "patch",
        tag = "ApiTags::FridgeItems"
    )]
    async fn update_fridge_item(
        &self,
        id: Path<String>,
        body: Json<UpdateFridgeItemRequest>,
    ) -> UpdateFridgeItemResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return UpdateFridgeItemResponse::BadRequest(json),
        };

        let request = body.0;
        let params = UpdateFridgeItemParams {
            id,
            name: request.name,
            expiry_date: request.expiry_date,
            eaten_status: request.eaten_status.map(|s| s.into()),
            opened_date: into_patch(request.opened_date),
            use_within_days: into_patch(request.use_within_days),
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateFridgeItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateFridgeItemResponse::BadRequest(json),
                    404 => UpdateFridgeItemResponse::NotFound(json),
                    _ => UpdateFridgeItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a fridge item
    #[oai(
        path = "/fridge-items/:id",
        method = "delete",
        tag = "ApiTags::FridgeItems"
    )]
    async fn delete_fridge_item(&self, id: Path<String>) -> DeleteFridgeItemResponse {
        let id = match parse_id(&id.0) {
            Ok(id) => id,
            Err(json) => return DeleteFridgeItemResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteFridgeItemParams { id })
            .await
        {
            Ok(()) => DeleteFridgeItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteFridgeItemResponse::NotFound(json),
                    _ => DeleteFridgeItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllFridgeItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TrackedFridgeItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateFridgeItemResponse {
    #[oai(status = 201)]
    Created(Json<FridgeItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateFridgeItemResponse {
    #[oai(status = 200)]
    Ok(Json<FridgeItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteFridgeItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use mockall::mock;
    use poem::{Route, http::StatusCode, test::TestClient};
    use poem_openapi::OpenApiService;
    use serde_json::json;

    use business::domain::fridge_item::errors::FridgeItemError;
    use business::domain::fridge_item::expiry::ExpiryInfo;
    use business::domain::fridge_item::model::FridgeItem;
    use business::domain::fridge_item::use_cases::get_all::TrackedFridgeItem;
    use business::domain::fridge_item::value_objects::EatenStatus;

    mock! {
        CreateUseCase {}
        #[async_trait]
        impl CreateFridgeItemUseCase for CreateUseCase {
            async fn execute(&self, params: CreateFridgeItemParams) -> Result<FridgeItem, FridgeItemError>;
        }
    }

    mock! {
        GetAllUseCase {}
        #[async_trait]
        impl GetAllFridgeItemsUseCase for GetAllUseCase {
            async fn execute(
                &self,
                params: GetAllFridgeItemsParams,
            ) -> Result<Vec<TrackedFridgeItem>, FridgeItemError>;
        }
    }

    mock! {
        UpdateUseCase {}
        #[async_trait]
        impl UpdateFridgeItemUseCase for UpdateUseCase {
            async fn execute(&self, params: UpdateFridgeItemParams) -> Result<FridgeItem, FridgeItemError>;
        }
    }

    mock! {
        DeleteUseCase {}
        #[async_trait]
        impl DeleteFridgeItemUseCase for DeleteUseCase {
            async fn execute(&self, params: DeleteFridgeItemParams) -> Result<(), FridgeItemError>;
        }
    }

    struct Mocks {
        create: MockCreateUseCase,
        get_all: MockGetAllUseCase,
        update: MockUpdateUseCase,
        delete: MockDeleteUseCase,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                create: MockCreateUseCase::new(),
                get_all: MockGetAllUseCase::new(),
                update: MockUpdateUseCase::new(),
                delete: MockDeleteUseCase::new(),
            }
        }

        fn client(self) -> TestClient<Route> {
            let api = FridgeItemApi::new(
                Arc::new(self.create),
                Arc::new(self.get_all),
                Arc::new(self.update),
                Arc::new(self.delete),
                CreatedBy::new("joe").unwrap(),
                SeverityPolicy::default(),
            );
            let service = OpenApiService::new(api, "test", "0.0.0");
            TestClient::new(Route::new().nest("/", service))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, expiry_date: NaiveDate) -> FridgeItem {
        let now = Utc::now();
        FridgeItem::from_repository(
            Uuid::new_v4(),
            name.to_string(),
            expiry_date,
            None,
            None,
            EatenStatus::Fresh,
            now,
            now,
            CreatedBy::new("joe").unwrap(),
        )
    }

    #[tokio::test]
    async fn should_list_items_most_urgent_first() {
        let mut mocks = Mocks::new();
        mocks
            .get_all
            .expect_execute()
            .withf(|params| params.today == NaiveDate::from_ymd_opt(2025, 11, 1))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    TrackedFridgeItem {
                        item: item("Cheese", date(2025, 11, 20)),
                        expiry: ExpiryInfo {
                            days_until_expiry: 19,
                            days_until_use_by: None,
                        },
                    },
                    TrackedFridgeItem {
                        item: item("Milk", date(2025, 10, 31)),
                        expiry: ExpiryInfo {
                            days_until_expiry: -1,
                            days_until_use_by: None,
                        },
                    },
                ])
            });

        let response = mocks
            .client()
            .get("/fridge-items")
            .query("today", &"2025-11-01")
            .send()
            .await;

        response.assert_status_is_ok();
        let json = response.json().await;
        let items = json.value().array();
        items.assert_len(2);
        let first = items.get(0).object();
        first.get("item").object().get("name").assert_string("Milk");
        first.get("expiry").object().get("severity").assert_string("expired");
    }

    #[tokio::test]
    async fn should_attribute_new_items_to_configured_creator() {
        let mut mocks = Mocks::new();
        mocks
            .create
            .expect_execute()
            .withf(|params| params.created_by.as_str() == "joe" && params.name == "Milk")
            .times(1)
            .returning(|_| Ok(item("Milk", NaiveDate::from_ymd_opt(2025, 11, 5).unwrap())));

        let response = mocks
            .client()
            .post("/fridge-items")
            .body_json(&json!({ "name": "Milk", "expiry_date": "2025-11-05" }))
            .send()
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json().await;
        let body = json.value().object();
        body.get("eaten_status").assert_string("fresh");
        body.get("created_by").assert_string("joe");
    }

    #[tokio::test]
    async fn should_return_bad_request_on_validation_error() {
        let mut mocks = Mocks::new();
        mocks
            .create
            .expect_execute()
            .times(1)
            .returning(|_| Err(FridgeItemError::NameEmpty));

        let response = mocks
            .client()
            .post("/fridge-items")
            .body_json(&json!({ "name": "", "expiry_date": "2025-11-05" }))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_clear_opened_date_on_explicit_null() {
        let mut mocks = Mocks::new();
        mocks
            .update
            .expect_execute()
            .withf(|params| {
                params.opened_date == Some(None)
                    && params.use_within_days.is_none()
                    && params.eaten_status == Some(EatenStatus::HalfEaten)
            })
            .times(1)
            .returning(|_| Ok(item("Milk", NaiveDate::from_ymd_opt(2025, 11, 5).unwrap())));

        let response = mocks
            .client()
            .patch(format!("/fridge-items/{}", Uuid::new_v4()))
            .body_json(&json!({ "opened_date": null, "eaten_status": "half eaten" }))
            .send()
            .await;

        response.assert_status_is_ok();
    }

    #[tokio::test]
    async fn should_return_bad_request_for_oversized_duration() {
        let mut mocks = Mocks::new();
        mocks
            .update
            .expect_execute()
            .withf(|params| params.use_within_days == Some(Some(3_000_000_000)))
            .times(1)
            .returning(|_| Err(FridgeItemError::UseWithinDaysTooLarge));

        let response = mocks
            .client()
            .patch(format!("/fridge-items/{}", Uuid::new_v4()))
            .body_json(&json!({ "use_within_days": 3_000_000_000u32 }))
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("fridge_item.use_within_days_too_large");
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_missing_item() {
        let mut mocks = Mocks::new();
        mocks
            .update
            .expect_execute()
            .times(1)
            .returning(|_| Err(FridgeItemError::NotFound));

        let response = mocks
            .client()
            .patch(format!("/fridge-items/{}", Uuid::new_v4()))
            .body_json(&json!({ "eaten_status": "eaten" }))
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_reject_invalid_id() {
        let response = Mocks::new()
            .client()
            .delete("/fridge-items/not-a-uuid")
            .send()
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let json = response.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("fridge_item.invalid_id");
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_item() {
        let id = Uuid::new_v4();
        let mut mocks = Mocks::new();
        mocks
            .delete
            .expect_execute()
            .withf(move |params| params.id == id)
            .times(1)
            .returning(|_| Err(FridgeItemError::NotFound));

        let response = mocks
            .client()
            .delete(format!("/fridge-items/{}", id))
            .send()
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn should_return_no_content_after_delete() {
        let mut mocks = Mocks::new();
        mocks.delete.expect_execute().times(1).returning(|_| Ok(()));

        let response = mocks
            .client()
            .delete(format!("/fridge-items/{}", Uuid::new_v4()))
            .send()
            .await;

        response.assert_status(StatusCode::NO_CONTENT);
    }
}
