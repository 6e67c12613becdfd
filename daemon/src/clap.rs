use crate::prelude::*;

/// Daily Word API daemon
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TCP port the API will listen on (defaults to the PORT environment variable, or 3000)
    #[arg(long)]
    pub port: Option<u16>,
}

impl Args {
    /// Resolved listen port. An unset or unparseable PORT variable falls back to 3000.
    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| std::env::var("PORT").ok().and_then(|port| port.parse().ok()))
            .unwrap_or(3000)
    }
}
