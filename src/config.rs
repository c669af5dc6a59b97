use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const DATA_DIR: &str = "data";
    pub const TEMPLATES_DIR: &str = "templates";
    pub const STATIC_DIR: &str = "static";
}

/// Process configuration, built once at startup and injected into the
/// store and handlers. The base directory is the single CLI argument and
/// is expected to contain `data/`, `templates/`, and `static/`.
#[derive(Clone, Debug)]
pub struct Config {
    pub base_dir: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            port: env::var(env_vars::PORT)
                .unwrap_or_else(|_| defaults::PORT.to_string())
                .parse()
                .expect("PORT must be a valid number"),
        }
    }

    /// Build from process arguments. Missing base directory is fatal.
    pub fn from_args() -> Self {
        let base_dir = env::args()
            .nth(1)
            .expect("usage: wiki-backend <base-dir>");
        Self::new(PathBuf::from(base_dir))
    }

    /// Directory holding one `<title>.txt` file per page
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join(defaults::DATA_DIR)
    }

    /// Directory holding `view.html` and `edit.html`
    pub fn templates_dir(&self) -> PathBuf {
        self.base_dir.join(defaults::TEMPLATES_DIR)
    }

    /// Directory of pass-through static assets (CSS, images)
    pub fn static_dir(&self) -> PathBuf {
        self.base_dir.join(defaults::STATIC_DIR)
    }
}
