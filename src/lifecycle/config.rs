use clap::Parser;
use std::net::SocketAddr;

/// Command-line configuration for the product store server.
#[derive(Debug, Clone, Parser)]
#[command(name = "product-store", version, about = "In-memory product store over HTTP")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, default_value = "0.0.0.0:9000")]
    pub bind: SocketAddr,

    /// Number of store requests that may queue before callers wait
    #[arg(long, default_value_t = 32, value_parser = clap::value_parser!(u32).range(1..))]
    pub mailbox_size: u32,

    /// Start with the two demo products instead of an empty store
    #[arg(long)]
    pub seed_demo_data: bool,
}

impl Config {
    pub fn mailbox_size(&self) -> usize {
        self.mailbox_size as usize
    }
}
