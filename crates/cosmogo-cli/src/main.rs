//! Cosmogo Command-Line Client
//!
//! Exposes the cosmogo helpers for scripts and quick lookups.

mod commands;
mod error;
mod formatter;

use clap::{Args as ClapArgs, Parser, Subcommand};
use cosmogo_core::gravatar::DEFAULT_SIZE;
use cosmogo_core::identifier::{
    DEFAULT_ALPHABET, DEFAULT_DELIMITER, DEFAULT_GROUPS, DEFAULT_GROUP_LENGTH,
};
use cosmogo_core::IdentifierConfig;
use formatter::OutputFormat;

/// Cosmogo Command-Line Client
#[derive(Parser, Debug)]
#[command(name = "cosmogo")]
#[command(version, about = "Base36, identifiers, slugs and constraint error translation")]
pub struct Args {
    /// Output format
    #[arg(long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode or decode base36 values
    #[command(subcommand)]
    Base36(Base36Command),

    /// Generate grouped identifiers
    Identifier(IdentifierArgs),

    /// Build a gravatar URL
    Gravatar {
        /// Email address
        email: String,

        /// Avatar size in pixels
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: u32,

        /// Fallback image
        #[arg(long)]
        default: Option<String>,
    },

    /// Turn text into a URL slug
    Slugify {
        /// Text to slugify
        text: String,
    },

    /// Translate a constraint violation into a validation error
    Translate {
        /// Engine vendor (postgresql, sqlite, ...)
        #[arg(long)]
        engine: String,

        /// Field message, as field=text
        #[arg(long = "message", value_parser = parse_pair)]
        messages: Vec<(String, String)>,

        /// Value shown when the engine does not report it, as field=value
        #[arg(long = "value", value_parser = parse_pair)]
        values: Vec<(String, String)>,

        /// Violation text reported by the engine
        error: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum Base36Command {
    /// Encode a non-negative integer
    Encode {
        #[arg(allow_negative_numbers = true)]
        value: i128,
    },
    /// Decode a base36 string
    Decode { value: String },
}

#[derive(ClapArgs, Debug)]
pub struct IdentifierArgs {
    /// Number of groups
    #[arg(long, default_value_t = DEFAULT_GROUPS)]
    pub groups: usize,

    /// Characters per group
    #[arg(long, default_value_t = DEFAULT_GROUP_LENGTH)]
    pub group_length: usize,

    /// Group delimiter
    #[arg(long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Characters to draw from
    #[arg(long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Number of identifiers to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Print length and space size instead of identifiers
    #[arg(long)]
    pub stats: bool,
}

impl From<&IdentifierArgs> for IdentifierConfig {
    fn from(args: &IdentifierArgs) -> Self {
        IdentifierConfig::new()
            .with_groups(args.groups)
            .with_group_length(args.group_length)
            .with_delimiter(args.delimiter.clone())
            .with_alphabet(args.alphabet.clone())
    }
}

/// Parse a `key=value` argument.
fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got {raw:?}"))
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cosmogo_cli=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();
    let formatter = formatter::create_formatter(args.format);

    match commands::execute(&args.command) {
        Ok(output) => println!("{}", formatter.format(&output)),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("email=Taken"),
            Ok(("email".to_string(), "Taken".to_string()))
        );
        assert_eq!(
            parse_pair("msg=a=b"),
            Ok(("msg".to_string(), "a=b".to_string()))
        );
        assert!(parse_pair("novalue").is_err());
        assert!(parse_pair("=x").is_err());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "cosmogo",
            "--format",
            "json",
            "translate",
            "--engine",
            "sqlite",
            "--message",
            "username=taken",
            "UNIQUE constraint failed: users.username",
        ])
        .unwrap();

        assert_eq!(args.format, OutputFormat::Json);
        match args.command {
            Command::Translate {
                engine, messages, ..
            } => {
                assert_eq!(engine, "sqlite");
                assert_eq!(messages, vec![("username".to_string(), "taken".to_string())]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_negative_base36_parses() {
        let args = Args::try_parse_from(["cosmogo", "base36", "encode", "-1"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Base36(Base36Command::Encode { value: -1 })
        ));
    }

    #[test]
    fn test_identifier_args_into_config() {
        let args = Args::try_parse_from(["cosmogo", "identifier", "--groups", "2"]).unwrap();
        let Command::Identifier(identifier) = args.command else {
            panic!("expected identifier command");
        };
        let config = IdentifierConfig::from(&identifier);
        assert_eq!(config, IdentifierConfig::new().with_groups(2));
    }
}
