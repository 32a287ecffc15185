use crate::{
    extractor::{AppJson, AppPath},
    model::{
        customer::{
            CreateCustomerRequest, CustomerResponse, UpdateCustomerRequest,
            UpdateCustomerRequestWithId,
        },
        MessageResponse,
    },
};
use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::id::CustomerId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn register_customer(
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<CustomerResponse>)> {
    req.validate(&())?;

    registry
        .customer_repository()
        .create(req.into())
        .await
        .map(|customer| (StatusCode::CREATED, Json(customer.into())))
        .map_err(|e| e.on_failure("failed to create customer"))
}

pub async fn show_customer_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<CustomerResponse>>> {
    registry
        .customer_repository()
        .find_all()
        .await
        .map(|customers| customers.into_iter().map(CustomerResponse::from).collect())
        .map(Json)
        .map_err(|e| e.on_failure("failed to fetch customers"))
}

pub async fn show_customer(
    AppPath(customer_id): AppPath<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<CustomerResponse>> {
    registry
        .customer_repository()
        .find_by_id(customer_id)
        .await
        .map_err(|e| e.on_failure("failed to fetch customer"))
        .and_then(|customer| match customer {
            Some(customer) => Ok(Json(customer.into())),
            None => Err(AppError::EntityNotFound("customer not found".into())),
        })
}

pub async fn update_customer(
    AppPath(customer_id): AppPath<CustomerId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpdateCustomerRequest>,
) -> AppResult<Json<CustomerResponse>> {
    req.validate(&())?;

    let update_customer = UpdateCustomerRequestWithId::new(customer_id, req);
    registry
        .customer_repository()
        .update(update_customer.into())
        .await
        .map(|customer| Json(customer.into()))
        .map_err(|e| e.on_failure("failed to update customer"))
}

pub async fn delete_customer(
    AppPath(customer_id): AppPath<CustomerId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<MessageResponse>> {
    registry
        .customer_repository()
        .delete(customer_id)
        .await
        .map(|_| Json(MessageResponse::new("customer deleted")))
        .map_err(|e| e.on_failure("failed to delete customer"))
}
