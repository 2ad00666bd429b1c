mod compile;
mod decode_id;

use crate::Cli;
use crate::CommandResult;
use compile::CompileCmd;
use decode_id::DecodeIdCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "shapeql")]
pub(crate) enum CommandEnum {
    Compile(Box<CompileCmd>),
    DecodeId(Box<DecodeIdCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Compile(cmd) => cmd.run(cli).await,
            Self::DecodeId(cmd) => cmd.run(cli).await,
        }
    }
}
