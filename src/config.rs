// Command-line and environment configuration.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::app::ui::IndexPage;

#[derive(Debug, Clone, Parser)]
#[command(name = "brew-dashboard")]
#[command(about = "Local dashboard for `brew services`")]
pub struct Config {
    /// Address to listen on. Keep this on loopback: there is no auth.
    #[arg(long, env = "BREW_DASHBOARD_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    #[arg(long, env = "BREW_DASHBOARD_PORT", default_value_t = 9999)]
    pub port: u16,

    /// Homebrew executable, looked up on PATH unless absolute.
    #[arg(long, env = "BREW_DASHBOARD_BREW", default_value = "brew")]
    pub brew: PathBuf,

    /// Serve this HTML file instead of the bundled page.
    #[arg(long, env = "BREW_DASHBOARD_INDEX")]
    pub index_file: Option<PathBuf>,

    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Config {
    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn index_page(&self) -> IndexPage {
        match &self.index_file {
            Some(path) => IndexPage::File(path.clone()),
            None => IndexPage::Bundled,
        }
    }
}
