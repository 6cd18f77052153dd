use actix_web::{middleware::Logger, web, App, HttpServer};
use battle_of_monsters::api::config::{config, cors};
use battle_of_monsters::repository::database::Database;
use battle_of_monsters::settings::Settings;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

fn setup_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    setup_logger();

    let settings = Settings::from_env().map_err(|e| std::io::Error::other(e.to_string()))?;
    let db = Database::new(&settings).map_err(|e| std::io::Error::other(e.to_string()))?;
    tracing::info!(database_url = %settings.database_url, pool_size = settings.pool_size, "database ready");

    let (host, port) = settings.bind_address();
    tracing::info!("Starting server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .wrap(Logger::default())
            .app_data(web::Data::new(db.clone()))
            .configure(config)
    })
    .bind((host, port))?
    .run()
    .await
}
