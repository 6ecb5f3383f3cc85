use crate::commands::CommandEnum;
use crate::Cli;
use clap::Parser;

#[test]
fn codegen_arguments() {
    let cli = Cli::try_parse_from([
        "graphql",
        "codegen",
        "-vv",
        "--config",
        "codegen.json",
        "--graphql-file-exts",
        "graphql,gqls",
        "src/queries",
    ]).unwrap();

    assert_eq!(cli.verbose, 2);
    assert!(!cli.quiet);
    let Some(CommandEnum::Codegen(cmd)) = cli.cmd else {
        panic!("expected the codegen command");
    };
    assert_eq!(cmd.config.as_deref(), Some(std::path::Path::new("codegen.json")));
    assert_eq!(cmd.graphql_file_exts, vec!["graphql", "gqls"]);
    assert!(cmd.output.is_none());
}

#[test]
fn quiet_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["graphql", "-q", "-v", "codegen", "a.graphql"]).is_err());
}

#[test]
fn codegen_requires_an_input_path() {
    assert!(Cli::try_parse_from(["graphql", "codegen"]).is_err());
}
