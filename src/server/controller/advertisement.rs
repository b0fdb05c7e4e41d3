use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        advertisement::{AdvertisementDto, PatchOperationDto, UpdateAdvertisementDto},
        api::ErrorDto,
    },
    server::{
        error::{advertisement::AdvertisementError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::advertisement::{Advertisement, CreateAdvertisementParam, UpdateAdvertisementParam},
        service::advertisement::AdvertisementService,
        state::AppState,
    },
};

/// Tag for grouping advertisement endpoints in OpenAPI documentation
pub static ADVERTISEMENT_TAG: &str = "advertisement";

fn into_dtos(advertisements: Vec<Advertisement>) -> Vec<AdvertisementDto> {
    advertisements
        .into_iter()
        .map(Advertisement::into_dto)
        .collect()
}

/// Retrieve all advertisements.
///
/// # Access Control
/// - `Admin` or `User`
///
/// # Returns
/// - `200 OK` - Every advertisement, in insertion order
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Token carries neither role
#[utoipa::path(
    get,
    path = "/api/advertisement",
    tag = ADVERTISEMENT_TAG,
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Successfully returned all the advertisements", body = Vec<AdvertisementDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Token lacks the Admin or User role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_advertisements(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::View])?;

    let service = AdvertisementService::new(&state.db);

    let advertisements = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(advertisements))))
}

/// Retrieve one advertisement.
///
/// # Access Control
/// - `Admin` or `User`
///
/// # Returns
/// - `200 OK` - The advertisement
/// - `400 Bad Request` - `Advertisement not found.`
#[utoipa::path(
    get,
    path = "/api/advertisement/{id}",
    tag = ADVERTISEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Advertisement ID")
    ),
    responses(
        (status = 200, description = "Successfully returned the advertisement", body = AdvertisementDto),
        (status = 400, description = "Could not find the advertisement", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Token lacks the Admin or User role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_advertisement(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::View])?;
    let Path(id) = id?;

    let service = AdvertisementService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(advertisement) => Ok((StatusCode::OK, Json(advertisement.into_dto()))),
        None => Err(AdvertisementError::NotFound(id).into()),
    }
}

/// Add an advertisement.
///
/// Responds with the full list of advertisements after the insert, which is what
/// existing clients of this endpoint consume.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - All advertisements including the new one
/// - `400 Bad Request` - Body is not a valid advertisement
#[utoipa::path(
    post,
    path = "/api/advertisement",
    tag = ADVERTISEMENT_TAG,
    security(("bearer" = [])),
    request_body = AdvertisementDto,
    responses(
        (status = 200, description = "Successfully added the advertisement", body = Vec<AdvertisementDto>),
        (status = 400, description = "Malformed request body", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Token lacks the Admin role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_advertisement(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<AdvertisementDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let service = AdvertisementService::new(&state.db);

    service
        .create(CreateAdvertisementParam::from_dto(payload))
        .await?;

    let advertisements = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(advertisements))))
}

/// Update all properties of an advertisement.
///
/// The advertisement is identified by the `id` in the body.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated advertisement
/// - `400 Bad Request` - `Advertisement not found.` or malformed body
#[utoipa::path(
    put,
    path = "/api/advertisement",
    tag = ADVERTISEMENT_TAG,
    security(("bearer" = [])),
    request_body = UpdateAdvertisementDto,
    responses(
        (status = 200, description = "Successfully updated the advertisement", body = AdvertisementDto),
        (status = 400, description = "Could not find the advertisement", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Token lacks the Admin role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_advertisement(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UpdateAdvertisementDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;
    let Json(payload) = payload?;

    let id = payload.id;
    let service = AdvertisementService::new(&state.db);

    let advertisement = service
        .update(UpdateAdvertisementParam::from_dto(payload))
        .await?;

    match advertisement {
        Some(advertisement) => Ok((StatusCode::OK, Json(advertisement.into_dto()))),
        None => Err(AdvertisementError::NotFound(id).into()),
    }
}

/// Update individual properties of an advertisement.
///
/// Accepts a JSON Patch document. `replace` and `test` are supported on
/// `/companyName` and `/slogan`; the document is applied atomically.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The patched advertisement
/// - `400 Bad Request` - `Advertisement not found.`, invalid path or value,
///   unsupported or failed operation
#[utoipa::path(
    patch,
    path = "/api/advertisement/{id}",
    tag = ADVERTISEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Advertisement ID")
    ),
    request_body(content = Vec<PatchOperationDto>, content_type = "application/json"),
    responses(
        (status = 200, description = "Successfully updated the advertisement", body = AdvertisementDto),
        (status = 400, description = "Advertisement not found or invalid patch document", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Token lacks the Admin role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_advertisement(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
    payload: Result<Json<Vec<PatchOperationDto>>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;
    let Path(id) = id?;
    let Json(payload) = payload?;

    let service = AdvertisementService::new(&state.db);

    match service.patch(id, payload).await? {
        Some(advertisement) => Ok((StatusCode::OK, Json(advertisement.into_dto()))),
        None => Err(AdvertisementError::NotFound(id).into()),
    }
}

/// Delete an advertisement.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The remaining advertisements
/// - `400 Bad Request` - `Advertisement not found`
#[utoipa::path(
    delete,
    path = "/api/advertisement/{id}",
    tag = ADVERTISEMENT_TAG,
    security(("bearer" = [])),
    params(
        ("id" = i32, Path, description = "Advertisement ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted the advertisement", body = Vec<AdvertisementDto>),
        (status = 400, description = "Could not find the advertisement", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 403, description = "Token lacks the Admin role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_advertisement(
    State(state): State<AppState>,
    headers: HeaderMap,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.tokens, &headers).require(&[Permission::Admin])?;
    let Path(id) = id?;

    let service = AdvertisementService::new(&state.db);

    if !service.delete(id).await? {
        return Err(AdvertisementError::DeleteTargetNotFound(id).into());
    }

    let advertisements = service.get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(advertisements))))
}
