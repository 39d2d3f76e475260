mod config;
mod db;
mod errors;
mod services;

use crate::config::Config;
use crate::db::Database;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use mime_guess::from_path;
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let config = Config::from_env();
    env_logger::init_from_env(Env::default().default_filter_or(config.log_level.as_str()));

    let database = match Database::open(&config.db_path) {
        Ok(database) => web::Data::new(database),
        Err(e) => {
            error!("{}", e);
            return Err(io::Error::other(e.to_string()));
        }
    };

    let url = config.url();
    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url);
        });
    }

    info!("Server running at {}", url);

    HttpServer::new(move || {
        App::new()
            .app_data(database.clone())
            .service(services::users::configure_routes())
            .service(services::filters::configure_routes())
            .service(services::health::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
