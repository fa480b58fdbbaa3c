//! Help output specs

use crate::prelude::*;

#[test]
fn help_lists_commands() {
    let temp = Project::empty();
    temp.pgr()
        .args(&["--help"])
        .passes()
        .stdout_has("account")
        .stdout_has("contract")
        .stdout_has("snapshot")
        .stdout_has("replay")
        .stdout_has("clear")
        .stdout_has("markers");
}

#[test]
fn account_help_lists_actions() {
    let temp = Project::empty();
    temp.pgr()
        .args(&["account", "--help"])
        .passes()
        .stdout_has("create")
        .stdout_has("fund")
        .stdout_has("register");
}
