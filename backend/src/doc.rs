//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every picnic API endpoint, the health probes and the
//! domain types they exchange. The document backs Swagger UI in debug builds
//! and is exported via `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::domain::{
    City, Error, ErrorCode, NewUser, PicnicDetails, PicnicSummary, RegistrationReceipt, User,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Picnic backend API",
        description = "Cities, users, picnics and picnic registrations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::cities::create_city,
        crate::inbound::http::cities::list_cities,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::picnics::list_picnics,
        crate::inbound::http::picnics::create_picnic,
        crate::inbound::http::picnics::register_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        City,
        User,
        NewUser,
        PicnicSummary,
        PicnicDetails,
        RegistrationReceipt,
        Error,
        ErrorCode
    )),
    tags(
        (name = "city", description = "City creation and listing"),
        (name = "user", description = "User creation and listing"),
        (name = "picnic", description = "Picnics and registrations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
