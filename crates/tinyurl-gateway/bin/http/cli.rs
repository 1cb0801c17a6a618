use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;
use tinyurl_shortener::CollisionPolicy;
use tinyurl_telemetry::LogFormat;

pub const LISTEN_ADDR_ENV: &str = "TINYURL_LISTEN_ADDR";
pub const STORAGE_BACKEND_ENV: &str = "TINYURL_STORAGE_BACKEND";
pub const TABLE_NAME_ENV: &str = "TABLE_NAME";
pub const DYNAMODB_REGION_ENV: &str = "TINYURL_DYNAMODB_REGION";
pub const DYNAMODB_ENDPOINT_ENV: &str = "TINYURL_DYNAMODB_ENDPOINT";
pub const ALLOWED_ORIGINS_ENV: &str = "ALLOWED_ORIGINS";
pub const PUBLIC_ORIGIN_ENV: &str = "TINYURL_PUBLIC_ORIGIN";
pub const COLLISION_POLICY_ENV: &str = "TINYURL_COLLISION_POLICY";
pub const LOG_FORMAT_ENV: &str = "TINYURL_LOG_FORMAT";
pub const OTLP_ENDPOINT_ENV: &str = "TINYURL_OTLP_ENDPOINT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_ALLOWED_ORIGINS: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "in-memory")]
    InMemory,
    #[value(name = "dynamodb")]
    DynamoDb,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::InMemory => write!(f, "in-memory"),
            StorageBackendArg::DynamoDb => write!(f, "dynamodb"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CollisionPolicyArg {
    #[value(name = "last-write-wins")]
    LastWriteWins,
    #[value(name = "reject")]
    Reject,
}

impl From<CollisionPolicyArg> for CollisionPolicy {
    fn from(arg: CollisionPolicyArg) -> Self {
        match arg {
            CollisionPolicyArg::LastWriteWins => CollisionPolicy::LastWriteWins,
            CollisionPolicyArg::Reject => CollisionPolicy::Reject,
        }
    }
}

impl Display for CollisionPolicyArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", CollisionPolicy::from(*self))
    }
}

#[derive(Debug, Parser)]
#[command(name = "tinyurl-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::InMemory
    )]
    pub storage: StorageBackendArg,

    #[arg(long, env = TABLE_NAME_ENV, required_if_eq("storage", "dynamodb"))]
    pub table_name: Option<String>,

    #[arg(long, env = DYNAMODB_REGION_ENV)]
    pub region: Option<String>,

    #[arg(long, env = DYNAMODB_ENDPOINT_ENV)]
    pub endpoint_url: Option<String>,

    /// Comma separated list of origins allowed by CORS, `*` for any.
    #[arg(long, env = ALLOWED_ORIGINS_ENV, default_value = DEFAULT_ALLOWED_ORIGINS)]
    pub allowed_origins: String,

    /// Origin used for tiny URLs when a request has no `Origin` header.
    #[arg(long, env = PUBLIC_ORIGIN_ENV)]
    pub public_origin: Option<String>,

    #[arg(
        long,
        env = COLLISION_POLICY_ENV,
        value_enum,
        default_value_t = CollisionPolicyArg::LastWriteWins
    )]
    pub collision_policy: CollisionPolicyArg,

    #[arg(long, env = LOG_FORMAT_ENV, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    #[arg(long, env = OTLP_ENDPOINT_ENV)]
    pub otlp_endpoint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["tinyurl-gateway"]).unwrap();
        assert_eq!(cli.listen_addr, DEFAULT_LISTEN_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(cli.storage, StorageBackendArg::InMemory);
        assert_eq!(cli.allowed_origins, "*");
        assert_eq!(cli.collision_policy, CollisionPolicyArg::LastWriteWins);
        assert_eq!(cli.log_format, LogFormat::Plain);
    }

    #[test]
    fn dynamodb_requires_table_name() {
        let result = CLI::try_parse_from(["tinyurl-gateway", "--storage", "dynamodb"]);
        assert!(result.is_err());

        let cli = CLI::try_parse_from([
            "tinyurl-gateway",
            "--storage",
            "dynamodb",
            "--table-name",
            "tbl_tiny_url",
        ])
        .unwrap();
        assert_eq!(cli.table_name.as_deref(), Some("tbl_tiny_url"));
    }

    #[test]
    fn collision_policy_maps_to_service_policy() {
        assert_eq!(
            CollisionPolicy::from(CollisionPolicyArg::Reject),
            CollisionPolicy::Reject
        );
        assert_eq!(CollisionPolicyArg::Reject.to_string(), "reject");
    }
}
