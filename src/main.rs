use actix_web::{web, App, HttpServer};
use clap::Parser;
use floatchat::api::{app_routes, middleware::build_cors};
use floatchat::chat::ChatController;
use floatchat::cli::{commands::{Cli, Commands}, run_repl};
use floatchat::config::AppConfig;
use floatchat::error::AppError;
use tracing::{error, info};

#[actix_web::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let mut config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Serve => serve(config).await,
        Commands::Chat { delay_ms, seed } => {
            if let Some(delay_ms) = delay_ms {
                config.chat.response_delay_ms = delay_ms;
            }
            if seed.is_some() {
                config.chat.seed = seed;
            }
            run_repl(config).await
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn serve(config: AppConfig) -> Result<(), AppError> {
    info!("Starting FloatChat server...");

    let chat = web::Data::new(ChatController::new(&config.chat));
    let host = config.server.host.clone();
    let port = config.server.port;

    info!("app is running on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(chat.clone())
            .wrap(build_cors(&config.server))
            .configure(app_routes(&config.server))
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}
