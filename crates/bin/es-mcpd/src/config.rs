use clap::{Parser, builder::BoolishValueParser};
use es_mcp::CrawlerIndices;
use es_mcp::server::DEFAULT_MCP_HTTP_ADDR;
use es_mcp::tools::crawler::{DEFAULT_BLOGS_INDEX, DEFAULT_DOCS_INDEX};
use std::error::Error;
use std::fmt;
use std::net::SocketAddr;

#[derive(Parser, Debug)]
#[command(name = "es-mcpd", version, about = "Elasticsearch MCP daemon.")]
struct CliArgs {
    #[arg(long, env = "ES_URL")]
    es_url: Option<String>,

    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "ES_DOCS_INDEX", default_value = DEFAULT_DOCS_INDEX)]
    docs_index: String,

    #[arg(long, env = "ES_BLOGS_INDEX", default_value = DEFAULT_BLOGS_INDEX)]
    blogs_index: String,

    #[arg(
        long = "stdio",
        env = "ES_MCP_ENABLE_STDIO",
        default_value_t = false,
        value_parser = BoolishValueParser::new()
    )]
    enable_stdio: bool,

    #[arg(
        long,
        env = "ES_MCP_SERVE",
        default_value_t = true,
        value_parser = BoolishValueParser::new()
    )]
    mcp_serve: bool,

    #[arg(long, env = "ES_MCP_HTTP_ADDR", default_value = DEFAULT_MCP_HTTP_ADDR)]
    mcp_http_addr: SocketAddr,
}

/// Runtime configuration loaded from CLI arguments and environment variables.
///
/// The Elasticsearch endpoint and key are not validated here; a bad value
/// shows up as a failure of the first backend call.
#[derive(Clone)]
pub struct EsConfig {
    pub es_url: Option<String>,
    pub api_key: Option<String>,
    pub crawler: CrawlerIndices,
    pub transport: Transport,
}

/// Transport the MCP server is exposed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Stdio,
    Http(SocketAddr),
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSetting { name: &'static str, value: String },
    NothingToServe,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSetting { name, value } => {
                write!(f, "invalid {name} value: {value:?}")
            }
            Self::NothingToServe => {
                write!(f, "no transport enabled: set ES_MCP_ENABLE_STDIO or ES_MCP_SERVE")
            }
        }
    }
}

impl Error for ConfigError {}

impl EsConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::try_from(args)
    }
}

impl TryFrom<CliArgs> for EsConfig {
    type Error = ConfigError;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        let es_url = args.es_url.filter(|value| !value.trim().is_empty());
        let api_key = args.api_key.filter(|value| !value.trim().is_empty());

        if args.docs_index.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "ES_DOCS_INDEX",
                value: args.docs_index,
            });
        }
        if args.blogs_index.trim().is_empty() {
            return Err(ConfigError::InvalidSetting {
                name: "ES_BLOGS_INDEX",
                value: args.blogs_index,
            });
        }

        let transport = if args.enable_stdio {
            Transport::Stdio
        } else if args.mcp_serve {
            Transport::Http(args.mcp_http_addr)
        } else {
            return Err(ConfigError::NothingToServe);
        };

        Ok(Self {
            es_url,
            api_key,
            crawler: CrawlerIndices {
                docs: args.docs_index,
                blogs: args.blogs_index,
            },
            transport,
        })
    }
}
