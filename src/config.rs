//! Command-line and environment configuration for the item server.

use std::net::SocketAddr;

use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, ValueEnum};

use crate::validation::catalog::{CatalogError, PropertiesCatalog};
use crate::validation::codes::{CodeFormat, MessageCodesResolver};

/// Where the error code sits within each catalogue key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CodePlacement {
    /// `required.item.itemName`
    #[default]
    Prefix,
    /// `item.itemName.required`
    Postfix,
}

impl From<CodePlacement> for CodeFormat {
    fn from(placement: CodePlacement) -> Self {
        match placement {
            CodePlacement::Prefix => Self::PrefixErrorCode,
            CodePlacement::Postfix => Self::PostfixErrorCode,
        }
    }
}

/// Server settings, read from flags with environment fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "item-service",
    about = "Serve the item registration pages and JSON endpoint",
    version
)]
pub struct ServerConfig {
    /// Address the HTTP server listens on.
    #[arg(
        long = "bind-addr",
        env = "ITEMS_BIND_ADDR",
        value_name = "addr",
        default_value = "127.0.0.1:8080"
    )]
    pub bind_addr: SocketAddr,

    /// Directory holding a message catalogue layered over the bundled one.
    #[arg(long = "messages-dir", env = "ITEMS_MESSAGES_DIR", value_name = "dir")]
    pub messages_dir: Option<Utf8PathBuf>,

    /// File name of the catalogue inside `--messages-dir`.
    #[arg(
        long = "messages-file",
        env = "ITEMS_MESSAGES_FILE",
        value_name = "name",
        default_value = "errors.properties"
    )]
    pub messages_file: String,

    /// Install the two sample items at startup.
    #[arg(
        long = "seed",
        env = "ITEMS_SEED",
        value_name = "bool",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub seed: bool,

    /// Text prepended to every message catalogue key.
    #[arg(
        long = "message-code-prefix",
        env = "ITEMS_MESSAGE_CODE_PREFIX",
        value_name = "prefix",
        default_value = ""
    )]
    pub message_code_prefix: String,

    /// Placement of the error code within catalogue keys.
    #[arg(
        long = "message-code-format",
        env = "ITEMS_MESSAGE_CODE_FORMAT",
        value_enum,
        default_value_t = CodePlacement::Prefix
    )]
    pub message_code_format: CodePlacement,
}

impl ServerConfig {
    /// Builds the message catalogue: the bundled messages, overridden by the
    /// configured file when a directory is set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Read`] when the configured file cannot be read.
    pub fn message_catalog(&self) -> Result<PropertiesCatalog, CatalogError> {
        let bundled = PropertiesCatalog::bundled();
        match &self.messages_dir {
            Some(dir) => Ok(bundled.merged_with(PropertiesCatalog::load(dir, &self.messages_file)?)),
            None => Ok(bundled),
        }
    }

    /// Builds the resolver that expands recorded error codes.
    #[must_use]
    pub fn message_codes(&self) -> MessageCodesResolver {
        MessageCodesResolver::new()
            .with_prefix(self.message_code_prefix.as_str())
            .with_format(self.message_code_format.into())
    }
}
