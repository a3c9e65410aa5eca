use actix_cors::Cors;
use actix_web::http::{header, Method, Uri};
use tracing::{info, warn};

use crate::config::ServerConfig;

/// Credentialed CORS restricted to `CLIENT_URL` and the local dev origin.
pub fn build_cors(config: &ServerConfig) -> Cors {
    let origins: Vec<String> = config
        .allowed_origins()
        .into_iter()
        .filter(|origin| {
            let valid = origin
                .parse::<Uri>()
                .map(|uri| uri.scheme().is_some() && uri.host().is_some())
                .unwrap_or(false);
            if !valid {
                warn!(%origin, "ignoring malformed CORS origin");
            }
            valid
        })
        .collect();
    info!(?origins, "configuring CORS allow-list");

    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods([Method::GET, Method::POST, Method::DELETE])
        .allowed_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}
