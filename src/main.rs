use std::sync::Arc;

use actix_web::{middleware, web, App, HttpServer};
use anyhow::Context;
use todo_api::api;
use todo_api::config::Config;
use todo_api::repository::{MongoDbClient, TodoRepository};
use tracing_subscriber::EnvFilter;

async fn setup(config: &Config) -> anyhow::Result<web::Data<dyn TodoRepository>> {
    let todo_db = MongoDbClient::new(config)
        .await
        .context("Error connecting to MongoDB")?;
    todo_db.ping().await.context("Error pinging MongoDB")?;
    tracing::info!("Connected to MongoDB");
    let repository: Arc<dyn TodoRepository> = Arc::new(todo_db);
    Ok(web::Data::from(repository))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;
    let data = setup(&config).await?;

    tracing::info!(port = config.port, "starting server");
    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(api::config)
            .default_service(web::route().to(api::not_found))
            .wrap(api::error_handlers())
            .wrap(middleware::Logger::default())
    })
    .bind(("0.0.0.0", config.port))
    .with_context(|| format!("Error binding to port {}", config.port))?
    .run()
    .await
    .context("Server exited with an error")
}
