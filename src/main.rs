use actix_files::Files;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod pages;
mod templates;

use config::Config;
use pages::store::PageStore;
use templates::TemplateSet;

pub struct AppState {
    pub config: Config,
    pub store: Arc<PageStore>,
    pub templates: Arc<TemplateSet>,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_args();

    // Missing templates are operational misconfiguration: fail fast
    let templates = Arc::new(
        TemplateSet::load(&config.templates_dir())
            .unwrap_or_else(|e| panic!("failed to load templates from {:?}: {}", config.templates_dir(), e)),
    );
    let store = Arc::new(PageStore::new(config.data_dir()));

    if !store.data_dir().exists() {
        log::warn!(
            "Data directory {:?} does not exist; saves will fail until it is created",
            store.data_dir()
        );
    }

    let port = config.port;
    let static_dir = config.static_dir();
    log::info!("Starting wiki server on port {}", port);
    log::info!("Serving pages from {:?}", store.data_dir());

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                config: config.clone(),
                store: Arc::clone(&store),
                templates: Arc::clone(&templates),
            }))
            .wrap(Logger::default())
            .configure(controllers::health::config)
            .configure(controllers::pages::config)
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
