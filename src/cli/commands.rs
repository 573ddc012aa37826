//! CLI commands and argument parsing

use crate::types::Method;
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Command-line client for the Feishu / Lark open platform
#[derive(Parser, Debug)]
#[command(name = "lark")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML); `LARK_*` env vars are used otherwise
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Access token (overrides the config)
    #[arg(short, long, global = true)]
    pub token: Option<String>,

    /// Base URL (overrides the config)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Request inputs shared by both commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RequestArgs {
    /// Query parameter (repeatable; repeated keys become repeated params)
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Path parameter for a `:name` placeholder (repeatable)
    #[arg(long = "path", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub path_params: Vec<(String, String)>,

    /// Extra header (repeatable)
    #[arg(long = "header", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub headers: Vec<(String, String)>,

    /// JSON request body
    #[arg(long)]
    pub data: Option<String>,

    /// Call on behalf of a user with this token
    #[arg(long)]
    pub user_token: Option<String>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send a single request and print the response envelope
    Request {
        /// HTTP method
        method: Method,

        /// Endpoint path, e.g. /open-apis/im/v1/chats/:chat_id
        path: String,

        #[command(flatten)]
        args: RequestArgs,
    },

    /// Walk a cursor-paginated endpoint, printing one line per page
    Pages {
        /// Endpoint path, e.g. /open-apis/okr/v1/periods
        path: String,

        /// HTTP method
        #[arg(short = 'X', long, default_value = "GET")]
        method: Method,

        /// Field holding each page's records
        #[arg(long, default_value = "items")]
        items_field: String,

        /// Stop after this many pages (at least 1)
        #[arg(long)]
        max_pages: Option<NonZeroUsize>,

        #[command(flatten)]
        args: RequestArgs,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Indented JSON
    Pretty,
}

/// Parse `key=value`; the value may itself contain `=`
pub(crate) fn parse_key_value(s: &str) -> std::result::Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{s}`")),
    }
}
