mod auth;
mod config;
mod db;
mod error;
mod ingest;
mod services;
#[cfg(test)]
mod test_support;

use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use env_logger::Env;
use log::info;

use crate::auth::AuthKeys;
use crate::config::Config;
use crate::db::Database;

async fn index() -> impl Responder {
    HttpResponse::Ok().body("Agent Manager backend is running")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = Config::from_env();

    let db = Database::open(&config.database_path)
        .map_err(|e| std::io::Error::other(e.to_string()))?;

    let admin_hash = bcrypt::hash(&config.admin_password, bcrypt::DEFAULT_COST)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    if db
        .seed_admin(&config.admin_email, &admin_hash)
        .map_err(|e| std::io::Error::other(e.to_string()))?
    {
        info!("seeded admin account {}", config.admin_email);
    }

    let keys = AuthKeys::new(&config.jwt_secret, config.token_ttl_secs);

    info!("Server running at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(10 * 1024 * 1024)) // 10 MB
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(keys.clone()))
            .service(services::auth::configure_routes())
            .service(services::agents::configure_routes())
            .service(services::lists::configure_routes())
            .route("/", web::get().to(index))
    })
    .bind(config.bind_addr.as_str())?
    .run()
    .await
}
