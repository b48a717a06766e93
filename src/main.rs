use std::sync::Arc;

use color_eyre::eyre::Result;
use courtbook_client::config::ClientConfig;
use courtbook_client::http::HttpClient;
use courtbook_client::services::{BlogService, BookingService, PartnerService};
use courtbook_core::guard::{GuardOutcome, RouteGuard};
use courtbook_core::notify::Notifier;
use courtbook_core::session::{FileStorage, SessionStore};
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

/// Number of posts shown in the landing page carousel
const CAROUSEL_SIZE: usize = 3;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Courtbook client against {}", config.api_base_url);

    // Rehydrate the stored session
    let storage = FileStorage::new(&config.session_dir)?;
    let session = Arc::new(SessionStore::rehydrate(Arc::new(storage)));
    let notifier = Notifier::default();

    match RouteGuard::authenticated().check(&session) {
        GuardOutcome::Allow => {
            if let Some(role) = session.role() {
                info!(%role, "session is valid");
            }
        }
        GuardOutcome::RedirectToLogin if session.session().is_some() => {
            warn!("stored session expired");
            session.logout()?;
            notifier.warning("Your session has expired, please sign in again");
        }
        GuardOutcome::RedirectToLogin | GuardOutcome::Forbidden => {
            info!("browsing anonymously");
        }
    }

    let http = Arc::new(HttpClient::new(config, session.clone())?);
    let bookings = BookingService::new(http.clone());
    let partners = PartnerService::new(http.clone());
    let blog = BlogService::new(http);

    // Landing page data
    match bookings.pricing().await {
        Ok(plans) => {
            for plan in plans {
                info!("pricing: {} {:.2}/{}", plan.name, plan.price, plan.period);
            }
        }
        Err(e) => {
            notifier.error(format!("Could not load pricing: {e}"));
        }
    }

    match partners.list_partners().await {
        Ok(list) => info!("{} partners listed", list.len()),
        Err(e) => {
            notifier.error(format!("Could not load partners: {e}"));
        }
    }

    match blog.latest_posts(CAROUSEL_SIZE).await {
        Ok(posts) => {
            for post in posts {
                info!("blog: {} ({})", post.title, post.published_at.format("%d %b %Y"));
            }
        }
        Err(e) => {
            notifier.error(format!("Could not load blog posts: {e}"));
        }
    }

    if session.is_authenticated() {
        match bookings.my_bookings().await {
            Ok(mine) => info!("{} bookings on this account", mine.len()),
            Err(e) if e.requires_login() => {
                session.logout()?;
                notifier.warning("Please sign in again");
            }
            Err(e) => {
                notifier.error(format!("Could not load your bookings: {e}"));
            }
        }
    }

    Ok(())
}
