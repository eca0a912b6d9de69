//! HTTP handlers for Users API

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    JsonBody, ValidatedJson,
    errors::responses::{
        BadRequestResponse, ForbiddenResponse, InternalServerErrorResponse, NotFoundResponse,
        UnauthorizedResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::UserResult;
use crate::models::{CreateUser, Role, UpdateUser, User, UserListResponse, UserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

#[derive(OpenApi)]
#[openapi(
    paths(list_users, get_user, create_user, update_user, delete_user),
    components(
        schemas(User, Role, CreateUser, UpdateUser, UserListResponse, UserResponse),
        responses(
            BadRequestResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User account management")
    )
)]
pub struct ApiDoc;

pub fn router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(Arc::new(service))
}

fn single(message: &str, user: User) -> Json<UserResponse> {
    Json(UserResponse {
        message: message.to_string(),
        user,
    })
}

#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "Users retrieved successfully", body = UserListResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<UserListResponse>> {
    let users = service.list_users().await?;
    Ok(Json(UserListResponse {
        message: "Users retrieved successfully".to_string(),
        total: users.len(),
        users,
    }))
}

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User retrieved successfully", body = UserResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service.get_user(&id).await?;
    Ok(single("User retrieved successfully", user))
}

#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created successfully", body = UserResponse),
        (status = 400, response = BadRequestResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, single("User created successfully", user)))
}

#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
    JsonBody(input): JsonBody<UpdateUser>,
) -> UserResult<Json<UserResponse>> {
    let user = service.update_user(&id, input).await?;
    Ok(single("User updated successfully", user))
}

#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted successfully", body = UserResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Path(id): Path<String>,
) -> UserResult<Json<UserResponse>> {
    let user = service.delete_user(&id).await?;
    Ok(single("User deleted successfully", user))
}
