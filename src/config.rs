//! Process configuration
//!
//! Each service binary parses its own [`ServiceConfig`] from flags or the
//! environment. Nothing is shared between the two processes.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_APPOINTMENT_PORT: u16 = 3001;
pub const DEFAULT_PATIENT_PORT: u16 = 3000;

#[derive(Debug, Clone, Parser)]
pub struct ServiceConfig {
    /// Address to bind
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on; each service has its own default
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServiceConfig {
    pub fn socket_addr(&self, default_port: u16) -> SocketAddr {
        SocketAddr::new(self.host, self.port.unwrap_or(default_port))
    }
}
