use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::list_users,
        crate::api::users::login_user,
    ),
    tags(
        (name = "users", description = "User directory operations")
    )
)]
pub struct ApiDoc;
