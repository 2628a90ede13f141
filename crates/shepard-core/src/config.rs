use std::collections::HashMap;

/// Full application configuration.
/// The API key comes from env/.env only; everything else has an inline
/// default and an env override. Passed into components explicitly so
/// tests can construct their own.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenAI credential. May be empty; the CLI prompts interactively
    /// before building the backend when it is.
    pub api_key: String,
    pub model: String,
    pub openai_base_url: String,
    pub scholar_base_url: String,
    pub results_path: String,
    pub http_timeout_s: u64,
}

fn parse_dotenv() -> HashMap<String, String> {
    let mut map = HashMap::new();
    let Ok(contents) = std::fs::read_to_string(".env") else {
        return map;
    };
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((k, v)) = line.split_once('=') {
            map.insert(k.trim().to_string(), v.trim().to_string());
        }
    }
    map
}

fn get(key: &str, dotenv: &HashMap<String, String>) -> Option<String> {
    std::env::var(key).ok().or_else(|| dotenv.get(key).cloned())
}

fn get_str(key: &str, dotenv: &HashMap<String, String>, default: &str) -> String {
    get(key, dotenv).unwrap_or_else(|| default.to_string())
}

fn get_u64(key: &str, dotenv: &HashMap<String, String>, default: u64) -> u64 {
    get(key, dotenv)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Self {
        let dotenv = parse_dotenv();

        Config {
            api_key: get_str("OPENAI_API_KEY", &dotenv, ""),
            model: get_str("CHAT_GPT_MODEL", &dotenv, "gpt-3.5-turbo"),
            openai_base_url: get_str("OPENAI_BASE_URL", &dotenv, "https://api.openai.com/v1"),
            scholar_base_url: get_str("SCHOLAR_BASE_URL", &dotenv, "https://scholar.google.com"),
            results_path: get_str("RESULTS_PATH", &dotenv, "results.json"),
            http_timeout_s: get_u64("HTTP_TIMEOUT_S", &dotenv, 120),
        }
    }
}
