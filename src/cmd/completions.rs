//! Completions command implementation
//!
//! Handles the `scriptset completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate a shell completion script for `cmd` into `out`
///
/// # Examples
///
/// ```bash
/// # Bash
/// scriptset completions bash > /etc/bash_completion.d/scriptset
///
/// # Zsh
/// scriptset completions zsh > ~/.zfunc/_scriptset
///
/// # Fish
/// scriptset completions fish > ~/.config/fish/completions/scriptset.fish
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Arg;

    fn command() -> Command {
        Command::new("scriptset")
            .subcommand(Command::new("tags").arg(Arg::new("names").num_args(1..)))
            .subcommand(Command::new("plan"))
    }

    #[test]
    fn test_completions_mention_subcommands() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish, Shell::PowerShell] {
            let mut out = Vec::new();
            cmd_completions(shell, &mut command(), &mut out);

            let script = String::from_utf8(out).unwrap();
            assert!(
                script.contains("scriptset"),
                "{:?} script lacks bin name",
                shell
            );
            assert!(
                script.contains("plan"),
                "{:?} script lacks subcommand",
                shell
            );
        }
    }
}
