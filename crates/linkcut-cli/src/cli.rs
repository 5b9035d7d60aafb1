use clap::{Parser, Subcommand, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const STORE_PATH_ENV: &str = "LINKCUT_STORE_PATH";
pub const LISTEN_ADDR_ENV: &str = "LINKCUT_LISTEN_ADDR";
pub const PUBLIC_BASE_URL_ENV: &str = "LINKCUT_PUBLIC_BASE_URL";
pub const START_ID_ENV: &str = "LINKCUT_START_ID";
pub const LOG_FORMAT_ENV: &str = "LINKCUT_LOG_FORMAT";

pub const DEFAULT_STORE_PATH: &str = "URLs.json";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:9090";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:9090";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Text => write!(f, "text"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "linkcut", version, about = "Assigns short codes to URLs and redirects them")]
pub struct CLI {
    /// JSON snapshot file holding all records.
    #[arg(long, env = STORE_PATH_ENV, default_value = DEFAULT_STORE_PATH)]
    pub store_path: PathBuf,

    /// Address the redirect server listens on.
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Base URL printed in front of new short codes.
    #[arg(long, env = PUBLIC_BASE_URL_ENV, default_value = DEFAULT_PUBLIC_BASE_URL)]
    pub public_base_url: String,

    /// Id of the first record when the store is empty.
    #[arg(long, env = START_ID_ENV)]
    pub start_id: Option<u64>,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Text
    )]
    pub log_format: LogFormatArg,

    // the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store a URL under the base-62 code of the next id.
    Shorten { url: String },
    /// Store a URL under a custom code.
    Custom { url: String, code: String },
    /// Start the redirect server.
    Serve,
}
