use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;


#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "parking.sqlite3")]
    pub database: PathBuf,
}
