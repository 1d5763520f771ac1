//! Hot Takes HTTP server
//!
//! Actix-web REST API plus static frontend serving

pub mod routes;
pub mod state;
pub mod types;

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{web, App, HttpServer};
use hottakes_common::{AppConfig, Result};
use tracing::info;
use tracing_actix_web::TracingLogger;

use crate::state::AppState;

/// Start the HTTP server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_address = config.server_bind_address();
    let static_dir = config.static_dir.clone();
    let state = Arc::new(AppState::new(config));

    info!("Starting server on {}", bind_address);
    if static_dir.exists() {
        info!("Serving static frontend from {}", static_dir.display());
    }

    HttpServer::new(move || {
        let mut app = App::new()
            .wrap(TracingLogger::default())
            // The frontend is a browser SPA; keys travel in request bodies,
            // never in cookies, so permissive CORS is fine here.
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(routes::generate::generate_hot_takes);

        if static_dir.exists() {
            app = app.service(Files::new("/", &static_dir).index_file("index.html"));
        }

        app
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}
