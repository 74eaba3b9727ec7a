//! Completions command implementation
//!
//! Handles the `bundle-size completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate shell completion scripts for `cmd` on stdout
///
/// # Examples
///
/// ```bash
/// # Bash
/// bundle-size completions bash > /etc/bash_completion.d/bundle-size
///
/// # Zsh
/// bundle-size completions zsh > ~/.zfunc/_bundle-size
/// ```
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}

/// Generate shell completion scripts into any writer
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}
