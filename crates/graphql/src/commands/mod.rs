mod codegen;

use crate::Cli;
use crate::CommandResult;
use codegen::CodegenCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    Codegen(Box<CodegenCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Codegen(cmd) => cmd.run(cli).await
        }
    }
}
