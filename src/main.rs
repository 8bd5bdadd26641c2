mod assets;
mod data;
mod dataobjects;
mod error;
mod layout;
mod markup;
mod navigation;
mod pages;
mod routes;
mod server;
mod settings;

#[macro_use]
extern crate lazy_static;

use actix_web::{middleware, web, App, HttpServer};

use crate::error::SiteResult;
use crate::server::SiteState;
use crate::settings::Settings;

#[actix_web::main]
async fn main() -> SiteResult<()> {
    // Logging defaults to `info` unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Settings: defaults, config files, then environment
    let settings = Settings::load()?;
    log::info!(
        "serving portfolio on http://{}:{} (assets from {})",
        settings.server.host,
        settings.server.port,
        settings.site.assets_dir.display()
    );

    let bind_address = (settings.server.host.clone(), settings.server.port);
    let workers = settings.server.workers;
    let state = web::Data::new(SiteState { settings });

    let mut http_server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .configure(server::configure)
    });
    if let Some(workers) = workers {
        http_server = http_server.workers(workers);
    }

    // Run until interrupted
    http_server.bind(bind_address)?.run().await?;
    log::info!("portfolio server stopped");
    Ok(())
}
