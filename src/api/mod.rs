use actix_web::web;

use crate::config::ServerConfig;

pub mod middleware;
pub mod models;
pub mod routes;

/// Routes plus body parser limits, as mounted by `serve`.
pub fn app_routes(server: &ServerConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    let limit = server.body_limit_bytes;
    move |cfg| {
        routes::body_limits(cfg, limit);
        routes::configure(cfg);
    }
}
