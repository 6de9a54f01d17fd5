use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "staffd",
    about = "Employee records HTTP service",
    version = crate::version::VERSION
)]
pub struct Config {
    #[arg(
        long,
        env = "STAFFD_BIND",
        value_name = "ADDR",
        default_value = "127.0.0.1:8080"
    )]
    pub bind: SocketAddr,
}
