//! REST surface for the user directory.
//!
//! A thin shim over the gRPC client: request bodies map one-to-one onto RPC
//! requests, and reply DTOs mirror RPC responses including the payload-level
//! `error` string, which is passed through verbatim. Handlers always answer
//! 200; callers check `error` on every response. A transport failure
//! reaching the backend is reported the same way.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use grpc_client::ChannelConfig;
use rpc::user::user_service_client::UserServiceClient;
use rpc::user::{CreateUserRequest, GetUserRequest, GetUsersListRequest, LoginUserRequest};
use serde::{Deserialize, Serialize};
use tonic::transport::Channel;
use utoipa::{IntoParams, ToSchema};

/// Connect the gRPC client with the tuned channel settings.
pub async fn connect(addr: &str) -> eyre::Result<UserServiceClient<Channel>> {
    let channel = grpc_client::connect(addr, &ChannelConfig::default()).await?;

    Ok(UserServiceClient::new(channel)
        .accept_compressed(tonic::codec::CompressionEncoding::Zstd)
        .send_compressed(tonic::codec::CompressionEncoding::Zstd))
}

pub fn router(client: UserServiceClient<Channel>) -> Router {
    Router::new()
        .route("/api/users", post(create_user).get(list_users))
        .route("/api/users/login", post(login_user))
        .route("/api/users/{user_id}", get(get_user))
        .with_state(client)
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserBody {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    /// Must be unique across all users
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListQuery {
    #[serde(default)]
    pub offset: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserReply {
    /// ID of the created user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryReply {
    pub user_id: String,
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UsersListReply {
    pub users: Vec<UserSummaryReply>,
    pub total: u32,
    pub offset: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginReply {
    /// JWT for subsequent authenticated requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserBody,
    responses(
        (status = 200, description = "Creation outcome; check `error`", body = CreateUserReply)
    )
)]
pub async fn create_user(
    State(mut client): State<UserServiceClient<Channel>>,
    Json(body): Json<CreateUserBody>,
) -> Json<CreateUserReply> {
    let request = CreateUserRequest {
        first_name: body.first_name,
        last_name: body.last_name,
        company: body.company,
        email: body.email,
        password: body.password,
    };

    let reply = match client.create_user(request).await {
        Ok(response) => {
            let r = response.into_inner();
            CreateUserReply {
                user_id: r.user_id,
                error: r.error,
            }
        }
        Err(status) => CreateUserReply {
            user_id: None,
            error: Some(status.message().to_string()),
        },
    };

    Json(reply)
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User fields, or `error`", body = UserReply)
    )
)]
pub async fn get_user(
    State(mut client): State<UserServiceClient<Channel>>,
    Path(user_id): Path<String>,
) -> Json<UserReply> {
    let reply = match client.get_user(GetUserRequest { user_id }).await {
        Ok(response) => {
            let r = response.into_inner();
            UserReply {
                user_id: r.user_id,
                first_name: r.first_name,
                last_name: r.last_name,
                company: r.company,
                email: r.email,
                error: r.error,
            }
        }
        Err(status) => UserReply {
            user_id: None,
            first_name: None,
            last_name: None,
            company: None,
            email: None,
            error: Some(status.message().to_string()),
        },
    };

    Json(reply)
}

/// List users, paginated and sorted by email
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    params(ListQuery),
    responses(
        (status = 200, description = "One page of users; check `error`", body = UsersListReply)
    )
)]
pub async fn list_users(
    State(mut client): State<UserServiceClient<Channel>>,
    Query(query): Query<ListQuery>,
) -> Json<UsersListReply> {
    let request = GetUsersListRequest {
        offset: query.offset,
        limit: query.limit,
    };

    let reply = match client.get_users_list(request).await {
        Ok(response) => {
            let r = response.into_inner();
            UsersListReply {
                users: r
                    .users
                    .into_iter()
                    .map(|u| UserSummaryReply {
                        user_id: u.user_id,
                        email: u.email,
                    })
                    .collect(),
                total: r.total,
                offset: r.offset,
                limit: r.limit,
                error: r.error,
            }
        }
        Err(status) => UsersListReply {
            users: vec![],
            total: 0,
            offset: query.offset,
            limit: query.limit,
            error: Some(status.message().to_string()),
        },
    };

    Json(reply)
}

/// Log in and receive a signed token
#[utoipa::path(
    post,
    path = "/api/users/login",
    tag = "users",
    request_body = LoginBody,
    responses(
        (status = 200, description = "Token on success, `error` otherwise", body = LoginReply)
    )
)]
pub async fn login_user(
    State(mut client): State<UserServiceClient<Channel>>,
    Json(body): Json<LoginBody>,
) -> Json<LoginReply> {
    let request = LoginUserRequest {
        email: body.email,
        password: body.password,
    };

    let reply = match client.login_user(request).await {
        Ok(response) => {
            let r = response.into_inner();
            LoginReply {
                token: r.token,
                error: r.error,
            }
        }
        Err(status) => LoginReply {
            token: None,
            error: Some(status.message().to_string()),
        },
    };

    Json(reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tonic::transport::Endpoint;
    use tower::ServiceExt; // For oneshot()

    fn unreachable_client() -> UserServiceClient<Channel> {
        // Lazy channel: no IO until the first call, which then fails.
        let channel = Endpoint::from_static("http://[::1]:1").connect_lazy();
        UserServiceClient::new(channel)
    }

    #[test]
    fn replies_omit_absent_fields_and_use_camel_case() {
        let reply = CreateUserReply {
            user_id: Some("usr_123".to_string()),
            error: None,
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["userId"], "usr_123");
        assert!(value.get("error").is_none());

        let reply = CreateUserReply {
            user_id: None,
            error: Some("User with this email already exists".to_string()),
        };
        let value = serde_json::to_value(&reply).unwrap();
        assert!(value.get("userId").is_none());
        assert_eq!(value["error"], "User with this email already exists");
    }

    #[test]
    fn list_query_defaults_match_the_rest_contract() {
        let query: ListQuery = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(query.offset, 0);
        assert_eq!(query.limit, 10);
    }

    #[tokio::test]
    async fn backend_transport_failure_surfaces_as_payload_error() {
        let app = router(unreachable_client());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/users?offset=0&limit=10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        // The error contract is payload-level: HTTP stays 200.
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(value["error"].as_str().is_some());
        assert_eq!(value["total"], 0);
        assert_eq!(value["limit"], 10);
    }
}
