use clap::CommandFactory;
use crate::commands;

#[derive(clap::Parser, Debug)]
#[command(name = "graphql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        action=clap::ArgAction::Count,
        global=true,
        help="Enable verbose logging on stderr. Repeat (`-vv`) to also log \
             each loaded fragment and generated hook.",
        long,
        short='v',
    )]
    pub verbose: u8,

    #[arg(
        conflicts_with="verbose",
        global=true,
        help="Only log warnings and errors.",
        long,
        short='q',
    )]
    pub quiet: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
