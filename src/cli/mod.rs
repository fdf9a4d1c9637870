// CLI module for edgeserve

use clap::Parser;

/// edgeserve - serverless-ready HTTP bootstrap with credential provisioning
#[derive(Parser, Debug)]
#[command(name = "edgeserve", version, about, long_about = None)]
pub struct Args {
    /// Override the bind host from configuration
    #[arg(long, env = "EDGESERVE_HOST")]
    pub host: Option<String>,

    /// Override the bind port from configuration
    #[arg(long, env = "EDGESERVE_PORT")]
    pub port: Option<u16>,
}
