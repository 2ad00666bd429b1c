use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;

#[derive(Debug, clap::Args)]
pub(crate) struct DecodeIdCmd {
    #[arg(
        help="One or more base64 global ID tokens of the form \
             `base64(\"<Type>:<id>\")`.",
        name="TOKENS",
        required=true,
    )]
    tokens: Vec<String>,
}

#[inherent::inherent]
impl RunnableCommand for DecodeIdCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut decoded = vec![];
        let mut errors = vec![];
        for token in &self.tokens {
            match shapeql::decode_global_id(token) {
                Ok(id) => decoded.push(format!("{token} => {id}")),
                Err(e) => {
                    log::debug!("Failed to decode {token:?}: {e:?}");
                    errors.push(format!("{token}: {e}"));
                },
            }
        }

        if !errors.is_empty() {
            return CommandResult::failures(
                format_args!(
                    "Failed to decode {} of {} global IDs:",
                    errors.len(),
                    self.tokens.len(),
                ),
                &errors,
            );
        }

        CommandResult::stdout(format_args!("{}", decoded.join("\n")))
    }
}
