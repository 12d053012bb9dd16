//! Backend entry-point: loads settings, prepares the database and serves the
//! picnic API with health probes and OpenAPI docs.

mod server;

use std::sync::Arc;

use actix_web::web;
#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetricsBuilder;
use color_eyre::eyre::{Result, WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use picnic_backend::domain::LookupRetryPolicy;
use picnic_backend::inbound::http::health::HealthState;
use picnic_backend::outbound::persistence::{DbPool, run_migrations};
use picnic_backend::outbound::weather::OpenWeatherMapValidator;
use picnic_backend::settings::PicnicSettings;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        PicnicSettings::load().map_err(|err| eyre!("failed to load settings: {err}"))?;
    let database_url = settings.database_url()?;

    if settings.run_migrations() {
        let applied = run_migrations(database_url)
            .await
            .wrap_err("failed to apply migrations")?;
        info!(applied, "database migrations applied");
    }

    let pool = DbPool::new(settings.pool_config()?)
        .await
        .wrap_err("failed to build database pool")?;
    let validator = OpenWeatherMapValidator::new(
        settings.weather_base_url(),
        settings.weather_api_key()?,
        settings.weather_timeout(),
    )
    .wrap_err("failed to build weather client")?;
    let retry_policy = LookupRetryPolicy {
        max_attempts: settings.weather_max_attempts(),
        ..LookupRetryPolicy::default()
    };

    let bind_addr = settings.bind_addr()?;
    let config = ServerConfig::new(bind_addr, pool, Arc::new(validator))
        .with_retry_policy(retry_policy);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(%bind_addr, "picnic backend listening");
    server.await?;
    Ok(())
}

#[cfg(feature = "metrics")]
fn make_metrics() -> Result<actix_web_prom::PrometheusMetrics> {
    PrometheusMetricsBuilder::new("picnic")
        .endpoint("/metrics")
        .build()
        .map_err(|err| eyre!("configure Prometheus metrics: {err}"))
}
