use actix_files::Files;
use log::debug;
use std::path::PathBuf;

/// Stylesheets and other assets of the page, served below `/static`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFiles {
    pub directory: PathBuf,
}

impl Default for StaticFiles {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DIRECTORY)
    }
}

impl StaticFiles {
    pub const DEFAULT_DIRECTORY: &'static str = "./static";
    pub const MOUNT_PATH: &'static str = "/static";

    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn from_env() -> Self {
        let directory =
            std::env::var("STATIC_DIR").unwrap_or_else(|_| Self::DEFAULT_DIRECTORY.to_string());
        debug!("serving static files from {}", directory);
        Self::new(directory)
    }

    pub fn service(&self) -> Files {
        Files::new(Self::MOUNT_PATH, &self.directory)
    }
}
