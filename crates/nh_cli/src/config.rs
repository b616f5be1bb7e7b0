use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use clap::{Parser, Subcommand};
use nh_core::config::{DEFAULT_ARTICLE_COUNT, DEFAULT_GATEWAY_MODEL, DEFAULT_GATEWAY_URL, DEFAULT_SEARCH_URL};
use nh_core::{Config, GatewayConfig, ProviderKind, SearchApiConfig};

/// Timeout given as `30s`, `2m`, `1m30s` or plain seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HumanDuration(pub Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();

        for c in s.trim().chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
                continue;
            }
            let num: u64 = current_number
                .parse()
                .map_err(|_| format!("Expected a number before '{}'", c))?;
            total_seconds += match c {
                's' => num,
                'm' => num * 60,
                'h' => num * 3600,
                _ => return Err(format!("Invalid duration unit: {}", c)),
            };
            current_number.clear();
        }

        if !current_number.is_empty() {
            total_seconds += current_number
                .parse::<u64>()
                .map_err(|_| "Invalid number in duration".to_string())?;
        }
        if total_seconds == 0 {
            return Err("Duration must be greater than zero".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "NewsHub headline service", long_about = None)]
pub struct Cli {
    /// Headline provider: ai (chat-completion gateway) or search (news search API)
    #[arg(long, env = "NEWS_PROVIDER", default_value = "ai", global = true)]
    pub provider: ProviderKind,

    #[arg(long, env = "AI_GATEWAY_API_KEY", hide_env_values = true, global = true)]
    pub gateway_api_key: Option<String>,

    #[arg(long, env = "AI_GATEWAY_URL", default_value = DEFAULT_GATEWAY_URL, global = true)]
    pub gateway_url: String,

    #[arg(long, env = "AI_GATEWAY_MODEL", default_value = DEFAULT_GATEWAY_MODEL, global = true)]
    pub model: String,

    /// Number of stories requested from the AI gateway
    #[arg(long, env = "ARTICLE_COUNT", default_value_t = DEFAULT_ARTICLE_COUNT, global = true)]
    pub article_count: usize,

    #[arg(long, env = "SEARCH_API_KEY", hide_env_values = true, global = true)]
    pub search_api_key: Option<String>,

    #[arg(long, env = "SEARCH_API_URL", default_value = DEFAULT_SEARCH_URL, global = true)]
    pub search_url: String,

    #[arg(long, env = "SEARCH_QUERY", default_value = "India", global = true)]
    pub query: String,

    #[arg(long, env = "SEARCH_REGION", default_value = "in", global = true)]
    pub region: String,

    #[arg(long, env = "SEARCH_LANGUAGE", default_value = "en", global = true)]
    pub language: String,

    /// Transport timeout for upstream calls (e.g. 30s, 1m)
    #[arg(long, env = "UPSTREAM_TIMEOUT", global = true)]
    pub timeout: Option<HumanDuration>,

    /// Structure articles locally instead of calling the AI gateway
    #[arg(long, env = "OUTLINE_STRUCTURER", global = true)]
    pub outline: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP server
    Serve {
        #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
        bind: SocketAddr,
    },
    /// Fetch and normalize headlines once, printing the JSON payload
    Headlines,
    /// Structure a single article and print the markdown
    Structure {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
    },
    /// Normalize a saved upstream body (stdin when no file is given)
    Normalize {
        file: Option<PathBuf>,
    },
}

impl Cli {
    pub fn config(&self) -> Config {
        let timeout = self.timeout.map(|t| t.0);
        Config {
            provider: self.provider,
            gateway: GatewayConfig {
                api_key: self.gateway_api_key.clone(),
                base_url: self.gateway_url.clone(),
                model: self.model.clone(),
                article_count: self.article_count,
                timeout,
                ..GatewayConfig::default()
            },
            search: SearchApiConfig {
                api_key: self.search_api_key.clone(),
                base_url: self.search_url.clone(),
                query: self.query.clone(),
                region: self.region.clone(),
                language: self.language.clone(),
                timeout,
                ..SearchApiConfig::default()
            },
        }
    }
}
