use crate::Cli;

use clap::CommandFactory;

fn register_arg_help(arg: &str) -> String {
    let command = Cli::command();
    let register = command
        .find_subcommand("session")
        .and_then(|s| s.find_subcommand("register"))
        .unwrap();

    register
        .get_arguments()
        .find(|a| a.get_id() == arg)
        .and_then(|a| a.get_help())
        .map(|h| h.to_string())
        .unwrap()
}

#[test]
fn test_register_interest_help_lists_every_catalog_id() {
    let help = register_arg_help("interest");

    for id in ["chef", "baker", "hotel", "hospitality", "events"] {
        assert!(help.contains(id), "missing {id} in {help}");
    }
}

#[test]
fn test_cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
