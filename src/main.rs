use clap::Parser;

use crate::cli::Args;

mod app_context;
mod cli;
mod health;
mod http;
mod logging;
mod parking;
mod storage;

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init(&args);
    let app_context = app_context::init(&args).expect("Failed to open the parking database.");
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address)
        .await
        .expect("Failed to bind the listen address.");
    tracing::info!(listen_address = %args.listen_address, "Server is listening.");
    axum::serve(listener, router)
        .await
        .expect("Failed to run the server.");
}
