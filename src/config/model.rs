use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub output_dir: PathBuf,
    pub request_timeout: Duration,
}
