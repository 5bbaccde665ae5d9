//! WebinarHub Demo — single-node booking walkthrough.
//!
//! Wires the in-memory adapters together, seeds a webinar, and performs
//! one booking end to end. Serves as the reference bootstrap for
//! embedding the booking core in a host application.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing_subscriber::{EnvFilter, fmt};

use webinarhub_core::config::AppConfig;
use webinarhub_core::error::AppError;
use webinarhub_entity::{User, Webinar};
use webinarhub_notify::MailerDispatch;
use webinarhub_service::BookingService;
use webinarhub_store::{
    MemoryParticipationRepository, MemoryUserRepository, MemoryWebinarRepository, UserRepository,
    WebinarRepository,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("WEBINARHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Demo error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).init();
        }
    }
}

/// Seed the stores and run one booking.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting WebinarHub demo v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Initialize repositories ──────────────────────────
    let webinar_repo = Arc::new(MemoryWebinarRepository::new());
    let participation_repo = Arc::new(MemoryParticipationRepository::new());
    let user_repo = Arc::new(MemoryUserRepository::new());

    // ── Step 2: Initialize mailer ────────────────────────────────
    tracing::info!("Initializing mailer (provider: {})...", config.mail.provider);
    let mailer = Arc::new(MailerDispatch::from_config(&config.mail)?);

    // ── Step 3: Seed demo data ───────────────────────────────────
    let organizer = User::new("organizer@example.com").with_display_name("Demo Organizer");
    user_repo.create(&organizer).await?;

    let now = Utc::now();
    let webinar = Webinar::new(
        organizer.id,
        "Idiomatic Rust in Production",
        now + Duration::days(14),
        now + Duration::days(14) + Duration::hours(2),
        100,
    );
    webinar_repo.create(&webinar).await?;
    tracing::info!(
        webinar_id = %webinar.id,
        seats = webinar.seats,
        "Webinar seeded"
    );

    // ── Step 4: Book a seat ──────────────────────────────────────
    let service = BookingService::new(
        webinar_repo.clone(),
        participation_repo,
        user_repo,
        mailer,
    );

    let attendee = User::new("attendee@example.com");
    service.book_seat(webinar.id, &attendee).await?;

    let remaining = webinar_repo
        .find_by_id(&webinar.id)
        .await?
        .map(|w| w.remaining_seats)
        .unwrap_or_default();
    tracing::info!(
        webinar_id = %webinar.id,
        remaining = remaining,
        "Demo booking complete"
    );

    Ok(())
}
