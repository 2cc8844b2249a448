//! Users gRPC service implementation
//!
//! Wraps the domain `UserDirectoryService` and maps between proto messages
//! and domain types. Every domain failure lands in the response payload's
//! `error` field: callers of this service never see a protocol-level status
//! for a directory outcome, and must check `error` on each response.

use std::sync::Arc;

use domain_users::{CreateUser, UserDirectoryService, UserError, UserStore};
use rpc::user::{
    user_service_server::UserService, CreateUserRequest, CreateUserResponse, GetUserRequest,
    GetUserResponse, GetUsersListRequest, GetUsersListResponse, LoginUserRequest,
    LoginUserResponse, UserSummary,
};
use tonic::{Request, Response, Status};
use uuid::Uuid;

/// gRPC surface over the directory service.
///
/// Generic over the store type for testability.
pub struct UserServiceImpl<S>
where
    S: UserStore + 'static,
{
    service: Arc<UserDirectoryService<S>>,
}

impl<S> UserServiceImpl<S>
where
    S: UserStore + 'static,
{
    pub fn new(service: UserDirectoryService<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

#[tonic::async_trait]
impl<S> UserService for UserServiceImpl<S>
where
    S: UserStore + 'static,
{
    async fn create_user(
        &self,
        request: Request<CreateUserRequest>,
    ) -> Result<Response<CreateUserResponse>, Status> {
        let req = request.into_inner();
        let input = CreateUser {
            first_name: req.first_name,
            last_name: req.last_name,
            company: req.company,
            email: req.email,
            password: req.password,
        };

        let response = match self.service.create_user(input).await {
            Ok(user_id) => CreateUserResponse {
                user_id: Some(user_id.to_string()),
                error: None,
            },
            Err(e) => CreateUserResponse {
                user_id: None,
                error: Some(e.to_string()),
            },
        };

        Ok(Response::new(response))
    }

    async fn get_user(
        &self,
        request: Request<GetUserRequest>,
    ) -> Result<Response<GetUserResponse>, Status> {
        let req = request.into_inner();

        // A malformed id cannot match any record.
        let result = match Uuid::parse_str(&req.user_id) {
            Ok(user_id) => self.service.get_user(user_id).await,
            Err(_) => Err(UserError::NotFound),
        };

        let response = match result {
            Ok(profile) => GetUserResponse {
                user_id: Some(profile.user_id.to_string()),
                first_name: Some(profile.first_name),
                last_name: Some(profile.last_name),
                company: Some(profile.company),
                email: Some(profile.email),
                error: None,
            },
            Err(e) => GetUserResponse {
                user_id: None,
                first_name: None,
                last_name: None,
                company: None,
                email: None,
                error: Some(e.to_string()),
            },
        };

        Ok(Response::new(response))
    }

    async fn get_users_list(
        &self,
        request: Request<GetUsersListRequest>,
    ) -> Result<Response<GetUsersListResponse>, Status> {
        let req = request.into_inner();

        let response = match self.service.list_users(req.offset, req.limit).await {
            Ok(page) => GetUsersListResponse {
                users: page
                    .users
                    .into_iter()
                    .map(|u| UserSummary {
                        user_id: u.user_id.to_string(),
                        email: u.email,
                    })
                    .collect(),
                total: page.total as u32,
                offset: page.offset,
                limit: page.limit,
                error: None,
            },
            // The offending offset/limit are echoed back on failure too.
            Err(e) => GetUsersListResponse {
                users: vec![],
                total: 0,
                offset: req.offset,
                limit: req.limit,
                error: Some(e.to_string()),
            },
        };

        Ok(Response::new(response))
    }

    async fn login_user(
        &self,
        request: Request<LoginUserRequest>,
    ) -> Result<Response<LoginUserResponse>, Status> {
        let req = request.into_inner();

        let response = match self.service.login_user(&req.email, &req.password).await {
            Ok(token) => LoginUserResponse {
                token: Some(token),
                error: None,
            },
            Err(e) => LoginUserResponse {
                token: None,
                error: Some(e.to_string()),
            },
        };

        Ok(Response::new(response))
    }
}
