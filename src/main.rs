use actix_web::{App, HttpServer, web};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paygate::application::service::PaymentService;
use paygate::config::StoreKind;
use paygate::interfaces::http;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,

    /// Which account data store to run against
    #[arg(long, value_enum, default_value_t = StoreKind::Primary)]
    store: StoreKind,
}

#[actix_web::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let service = web::Data::new(PaymentService::new(cli.store.build()));

    info!(bind = %cli.bind, store = ?cli.store, "starting payment server");

    HttpServer::new(move || App::new().app_data(service.clone()).configure(http::configure))
        .bind(&cli.bind)
        .into_diagnostic()?
        .run()
        .await
        .into_diagnostic()?;

    Ok(())
}
