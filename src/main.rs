mod cli;
mod web;

use std::process::ExitCode;
use std::sync::Arc;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use clap::Parser;

use refract_site::catalog;
use refract_site::common::SiteError;
use refract_site::site::{self, SiteConfig};

use cli::{Cli, Command};

#[actix_web::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.site_config();

    let result = match cli.command() {
        Command::Build { .. } => site::build(&config).map(|report| {
            for path in &report.written {
                log::info!("Wrote {}", path.display());
            }
        }),
        Command::Serve => serve(config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn serve(config: SiteConfig) -> Result<(), SiteError> {
    catalog::install_builtin(&config.assets())?;

    let bind_addr = config.bind_addr.clone();
    let static_dir = config.static_dir.clone();
    let state = Data::new(web::AppState {
        config: Arc::new(config),
    });

    log::info!("Serving landing page at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(web::handlers::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .default_service(actix_web::web::to(web::handlers::public::not_found))
    })
    .bind(&bind_addr)
    .map_err(|source| SiteError::Bind {
        addr: bind_addr.clone(),
        source,
    })?
    .run()
    .await
    .map_err(|source| SiteError::Bind {
        addr: bind_addr.clone(),
        source,
    })
}
