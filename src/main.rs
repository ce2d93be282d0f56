pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{contact, content, email, signal};

use crate::contact::adapter::outgoing::ContactMessageRepositoryPostgres;
use crate::contact::application::ports::incoming::use_cases::SubmitContactMessageUseCase;
use crate::contact::application::services::SubmitContactMessageService;
use crate::content::adapter::outgoing::{ContentQueryPostgres, SlotStoreSnapshotCache};
use crate::content::application::content_use_cases::ContentUseCases;
use crate::email::adapter::outgoing::{ResendRelay, SmtpRelay};
use crate::email::application::ports::outgoing::{ContactNotifier, EmailRelay};
use crate::email::application::services::ContactNotificationService;
use crate::shared::config::{AppConfig, EmailConfig, RelaySettings};
use crate::signal::adapter::outgoing::{InMemorySlotStore, RedisSlotStore};
use crate::signal::application::ports::outgoing::SlotStore;
use crate::signal::application::services::SelectionMailboxService;
use crate::signal::application::signal_use_cases::SignalUseCases;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub contact: Arc<dyn SubmitContactMessageUseCase + Send + Sync>,
    pub signal: SignalUseCases,
}

#[cfg(not(tarpaulin_include))]
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,actix_web=info".into());
    let json = env::var("LOG_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Relay chosen by configuration, or `None` when email is not configured.
#[cfg(not(tarpaulin_include))]
fn build_notifier(
    email: Option<EmailConfig>,
) -> anyhow::Result<Option<Arc<dyn ContactNotifier + Send + Sync>>> {
    let Some(email) = email else {
        return Ok(None);
    };

    let relay: Arc<dyn EmailRelay + Send + Sync> = match &email.relay {
        RelaySettings::Resend { api_key } => Arc::new(ResendRelay::new(api_key)),
        RelaySettings::Smtp {
            server,
            username,
            password,
        } => Arc::new(
            SmtpRelay::new(server, username, password).context("Failed to build SMTP relay")?,
        ),
        RelaySettings::SmtpLocal { host, port } => Arc::new(SmtpRelay::new_local(host, *port)),
    };

    Ok(Some(Arc::new(ContactNotificationService::new(
        relay,
        email.routing,
    ))))
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    // Try .env.{environment} first, then fall back to .env
    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    init_tracing();
    info!(environment = %env, "Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    let db_arc = Arc::new(conn);

    // Slot store: Redis when configured, process memory otherwise
    let slot_store: Arc<dyn SlotStore + Send + Sync> = match &config.redis_url {
        Some(redis_url) => {
            let redis_pool = Config::from_url(redis_url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?;
            info!("Using Redis slot store");
            Arc::new(RedisSlotStore::new(Arc::new(redis_pool)))
        }
        None => {
            warn!("REDIS_URL not set, selections and snapshots are kept in memory");
            Arc::new(InMemorySlotStore::new())
        }
    };

    // Signals
    let signal = SignalUseCases::from_mailbox(SelectionMailboxService::new(Arc::clone(
        &slot_store,
    )));

    // Content
    let content = ContentUseCases::new(
        ContentQueryPostgres::new(Arc::clone(&db_arc)),
        Arc::new(SlotStoreSnapshotCache::new(Arc::clone(&slot_store))),
        Arc::clone(&signal.take_pending),
    );

    // Contact
    let notifier = build_notifier(config.email.clone())?;
    let contact = SubmitContactMessageService::new(
        Arc::new(ContactMessageRepositoryPostgres::new(Arc::clone(&db_arc))),
        notifier,
    );

    let state = AppState {
        content,
        contact: Arc::new(contact),
        signal,
    };

    let openapi = api::openapi::ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    info!(url = %server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&slot_store)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Pages
    cfg.service(crate::content::adapter::incoming::web::routes::get_home_page_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_works_page_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_about_page_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_project_details_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_site_shell_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::get_contact_page_handler);
    // Signals
    cfg.service(crate::signal::adapter::incoming::web::routes::stream_selection_handler);
    cfg.service(crate::signal::adapter::incoming::web::routes::take_pending_selection_handler);
    cfg.service(crate::signal::adapter::incoming::web::routes::queue_selection_handler);
    // Contact
    cfg.service(crate::contact::adapter::incoming::web::routes::submit_contact_message_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
