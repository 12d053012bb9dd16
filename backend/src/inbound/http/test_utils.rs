//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::middleware::NormalizePath;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};

use crate::domain::ports::{
    MockCitiesCommand, MockCitiesQuery, MockPicnicsCommand, MockPicnicsQuery, MockUsersCommand,
    MockUsersQuery,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;

/// Mocked driving ports; set expectations on the fields before [`send`].
#[derive(Default)]
pub struct MockPorts {
    pub cities: MockCitiesCommand,
    pub cities_query: MockCitiesQuery,
    pub users: MockUsersCommand,
    pub users_query: MockUsersQuery,
    pub picnics: MockPicnicsCommand,
    pub picnics_query: MockPicnicsQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            cities: Arc::new(self.cities),
            cities_query: Arc::new(self.cities_query),
            users: Arc::new(self.users),
            users_query: Arc::new(self.users_query),
            picnics: Arc::new(self.picnics),
            picnics_query: Arc::new(self.picnics_query),
        }
    }
}

/// Run `request` against the API wired to `ports`, with trailing slashes
/// normalised as in production.
pub async fn send(ports: MockPorts, request: TestRequest) -> ServiceResponse {
    let app = test::init_service(
        App::new()
            .wrap(NormalizePath::trim())
            .app_data(web::Data::new(ports.into_state()))
            .configure(configure_api),
    )
    .await;
    test::call_service(&app, request.to_request()).await
}

/// Read the response body as JSON.
pub async fn json_body(res: ServiceResponse) -> serde_json::Value {
    let bytes = test::read_body(res).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
