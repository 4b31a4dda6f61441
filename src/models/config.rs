//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Glob passed to Tera, e.g. `templates/**/*.html`.
    pub templates_dir: String,
    pub assets_dir: String,
    /// Path of the static stay catalog JSON document.
    pub dataset_path: String,
}
