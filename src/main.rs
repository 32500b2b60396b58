use actix_web::{App, HttpServer, middleware, web};

use quorum::config::AppConfig;
use quorum::db::Store;
use quorum::handlers;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();

    // SQLite creates the file but not its directory.
    if let Some(path) = config.database_url.strip_prefix("sqlite://") {
        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let store = Store::open(&config.database_url, config.max_connections)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to open database: {e}")))?;

    log::info!("Starting server at http://{}", config.bind_addr);

    let data = web::Data::new(store.clone());
    let result = HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(data.clone())
            .configure(handlers::configure)
            .default_service(web::to(|| async {
                actix_web::HttpResponse::NotFound().body("Not Found")
            }))
    })
    .bind(&config.bind_addr)?
    .run()
    .await;

    store.close().await;
    result
}
