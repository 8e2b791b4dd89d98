use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    #[arg(default_value = "places.example.json")]
    pub places: PathBuf,
    #[arg(long)]
    #[arg(default_value = "https://maps.googleapis.com/maps/api/streetview/metadata")]
    pub imagery_url: Url,
    #[arg(long)]
    pub imagery_api_key: Option<String>,
    #[arg(long = "allowed-origin")]
    #[arg(default_values_t = [
        String::from("http://127.0.0.1:3000"),
        String::from("http://localhost:3000"),
    ])]
    pub allowed_origins: Vec<String>,
}
