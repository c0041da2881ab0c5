use std::net::{IpAddr, SocketAddr};

/// Command line options of the server binary.
///
/// Anything left unset falls back to the address `dx serve` hands over, or
/// localhost when run directly.
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long)]
    pub ip: Option<IpAddr>,
    #[arg(long)]
    pub port: Option<u16>,
}

impl Args {
    pub fn socket_addr(&self) -> SocketAddr {
        let fallback = dioxus_cli_config::fullstack_address_or_localhost();
        SocketAddr::new(
            self.ip.unwrap_or(fallback.ip()),
            self.port.unwrap_or(fallback.port()),
        )
    }
}
