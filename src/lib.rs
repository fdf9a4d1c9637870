// edgeserve - Serverless-ready HTTP bootstrap with credential provisioning

pub mod cli;
pub mod config;
pub mod credentials;
pub mod error;
pub mod lifecycle;
pub mod routers;
pub mod server;
pub mod utils;
