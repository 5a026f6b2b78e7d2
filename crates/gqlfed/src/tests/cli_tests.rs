use crate::Cli;
use crate::commands::CommandEnum;
use clap::Parser;

fn parse_args(args: &[&str]) -> Cli {
    match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => panic!("failed to parse {args:?}: {err}"),
    }
}

#[test]
fn no_subcommand_is_accepted() {
    let cli = parse_args(&["gqlfed", "-v"]);
    assert!(cli.verbose);
    assert!(cli.cmd.is_none());
}

#[test]
fn dot_requires_output() {
    assert!(Cli::try_parse_from(["gqlfed", "dot", "schema.graphql"]).is_err());
    let cli = parse_args(&["gqlfed", "dot", "-o", "out.dot", "-p", "schema.graphql"]);
    assert!(matches!(cli.cmd, Some(CommandEnum::Dot(_))));
}

#[test]
fn purge_requires_config_and_inputs() {
    assert!(Cli::try_parse_from(["gqlfed", "purge", "schema.graphql"]).is_err());
    assert!(Cli::try_parse_from(["gqlfed", "purge", "-c", "purge.yaml"]).is_err());

    let cli = parse_args(&[
        "gqlfed", "purge",
        "-c", "purge.yaml",
        "-e", "generated",
        "-e", "vendor",
        "--suffix=-purged",
        "--graphql-file-exts", "graphql,gql",
        "schemas/",
        "extra.graphql",
    ]);
    assert!(matches!(cli.cmd, Some(CommandEnum::Purge(_))));
}

#[test]
fn verbose_is_accepted_after_subcommand() {
    let cli = parse_args(&["gqlfed", "dot", "-o", "out.dot", "schema.graphql", "-v"]);
    assert!(cli.verbose);
}
