use crate::config::model::Config;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "https://valorantesports.com";
const DEFAULT_OUTPUT_DIR: &str = "output";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

pub fn load_config() -> Config {
    let api_base_url = load_string_config("VALORANT_API_URL", DEFAULT_API_BASE_URL);
    let output_dir = PathBuf::from(load_string_config("OUTPUT_DIR", DEFAULT_OUTPUT_DIR));
    let request_timeout_secs =
        load_u64_config("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);

    Config {
        api_base_url,
        output_dir,
        request_timeout: Duration::from_secs(request_timeout_secs),
    }
}

fn load_string_config(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn load_u64_config(name: &str, default: u64) -> u64 {
    env::var(name)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|_| panic!("Invalid config '{}'. Expected an integer number.", name))
}
