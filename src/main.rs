use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use music_api::{configure, AppState, Config};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    // The store lives for the whole process; nothing is persisted on exit.
    let app_state = web::Data::new(AppState::new(&config));
    let app_config = configure(app_state);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .configure(app_config.clone())
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    let server = server.bind((config.host.as_str(), config.port))?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        expose_song_detail = config.expose_song_detail,
        "server is listening"
    );
    server.run().await
}
