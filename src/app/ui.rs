// Handles the dashboard page served at `/`.

use std::io;
use std::path::PathBuf;

const BUNDLED_INDEX: &str = include_str!("ui/index.html");

/// Where the single-page dashboard comes from.
#[derive(Debug, Clone)]
pub enum IndexPage {
    /// The page compiled into the binary.
    Bundled,
    /// A file on disk, re-read on every request so edits show up on reload.
    File(PathBuf),
}

impl IndexPage {
    pub async fn load(&self) -> io::Result<Vec<u8>> {
        match self {
            IndexPage::Bundled => Ok(BUNDLED_INDEX.as_bytes().to_vec()),
            IndexPage::File(path) => tokio::fs::read(path).await,
        }
    }
}
