//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain driving ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CitiesCommand, CitiesQuery, PicnicsCommand, PicnicsQuery, UsersCommand, UsersQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub cities: Arc<dyn CitiesCommand>,
    pub cities_query: Arc<dyn CitiesQuery>,
    pub users: Arc<dyn UsersCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub picnics: Arc<dyn PicnicsCommand>,
    pub picnics_query: Arc<dyn PicnicsQuery>,
}
