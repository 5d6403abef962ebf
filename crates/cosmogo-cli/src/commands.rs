//! Subcommand execution.

use cosmogo_core::{
    base36, gravatar_url, text, ConstraintErrorTranslator, Engine, IdentifierConfig,
    IdentifierGenerator,
};
use serde_json::{json, Value};

use crate::error::CliError;
use crate::{Base36Command, Command, IdentifierArgs};

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    /// Plain text lines.
    pub lines: Vec<String>,
    /// Structured result.
    pub json: Value,
}

impl CommandOutput {
    fn single(line: String) -> Self {
        Self {
            json: Value::String(line.clone()),
            lines: vec![line],
        }
    }
}

/// Execute a subcommand.
pub fn execute(command: &Command) -> Result<CommandOutput, CliError> {
    match command {
        Command::Base36(Base36Command::Encode { value }) => {
            Ok(CommandOutput::single(base36::encode_signed(*value)?))
        }

        Command::Base36(Base36Command::Decode { value }) => {
            let decoded = base36::decode(value)?;
            Ok(CommandOutput {
                lines: vec![decoded.to_string()],
                // u128 does not fit a JSON number in general
                json: Value::String(decoded.to_string()),
            })
        }

        Command::Identifier(args) => identifier(args),

        Command::Gravatar {
            email,
            size,
            default,
        } => Ok(CommandOutput::single(gravatar_url(
            email,
            *size,
            default.as_deref(),
        ))),

        Command::Slugify { text: value } => Ok(CommandOutput::single(text::slugify(value))),

        Command::Translate {
            engine,
            messages,
            values,
            error,
        } => {
            let translator = values.iter().fold(
                ConstraintErrorTranslator::new(Engine::from_vendor(engine))
                    .with_messages(messages.iter().cloned()),
                |translator, (field, value)| translator.with_value(field.clone(), value.clone()),
            );

            let validation = translator.translate(error);
            let line = match validation.field() {
                Some(field) => format!(
                    "{field} [{}]: {}",
                    validation.code(),
                    validation.message().unwrap_or_default()
                ),
                None => format!("[{}]: {}", validation.code(), validation.message().unwrap_or_default()),
            };

            Ok(CommandOutput {
                lines: vec![line],
                json: serde_json::to_value(&validation)?,
            })
        }
    }
}

fn identifier(args: &IdentifierArgs) -> Result<CommandOutput, CliError> {
    let generator = IdentifierGenerator::new(IdentifierConfig::from(args))?;

    if args.stats {
        let space = generator
            .space_size()
            .map(|size| size.to_string())
            .unwrap_or_else(|| "overflow".to_string());

        return Ok(CommandOutput {
            lines: vec![
                format!("length: {}", generator.total_length()),
                format!("space: {space}"),
            ],
            json: json!({
                "length": generator.total_length(),
                "space_size": space,
            }),
        });
    }

    tracing::debug!(count = args.count, "generating identifiers");
    let identifiers: Vec<String> = (0..args.count).map(|_| generator.generate()).collect();

    Ok(CommandOutput {
        json: json!(identifiers),
        lines: identifiers,
    })
}
