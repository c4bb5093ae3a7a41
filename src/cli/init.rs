//! The init command: emit the shell integration script.
//!
//! The scripts consume the exit code contract: `0` places the generated
//! command straight into the input buffer, `10` warns first and then places
//! it, and any other code is a tool failure whose diagnostics stay on
//! stderr.

use anyhow::Result;
use hermes_core::exit_codes;
use hermes_core::CliError;

const ZSH_SCRIPT: &str = r#"# hermes shell integration for zsh
# Install with: hermes init zsh >> ~/.zshrc && source ~/.zshrc
hermes-generate() {
  local cmd
  cmd=$(HERMES_SHELL_INTEGRATION=1 hermes gen -- "$@")
  local code=$?
  case $code in
    0)
      print -z -- "$cmd"
      ;;
    10)
      print -u2 "hermes: review this command before running it"
      print -z -- "$cmd"
      ;;
    *)
      print -u2 "hermes: command generation failed (exit $code)"
      return $code
      ;;
  esac
}
alias h='hermes-generate'
"#;

const BASH_SCRIPT: &str = r#"# hermes shell integration for bash
# Install with: hermes init bash >> ~/.bashrc && source ~/.bashrc
hermes-generate() {
  local cmd
  cmd=$(HERMES_SHELL_INTEGRATION=1 hermes gen -- "$@")
  local code=$?
  case $code in
    0)
      ;;
    10)
      echo "hermes: review this command before running it" >&2
      ;;
    *)
      echo "hermes: command generation failed (exit $code)" >&2
      return $code
      ;;
  esac
  # bash has no zsh-style buffer push; stage the command in history instead
  history -s "$cmd"
  echo "$cmd"
}
alias h='hermes-generate'
"#;

const FISH_SCRIPT: &str = r#"# hermes shell integration for fish
# Install with: hermes init fish >> ~/.config/fish/config.fish
function hermes-generate
    set -l cmd (env HERMES_SHELL_INTEGRATION=1 hermes gen -- $argv)
    set -l code $status
    switch $code
        case 0
            commandline -r -- $cmd
        case 10
            echo "hermes: review this command before running it" >&2
            commandline -r -- $cmd
        case '*'
            echo "hermes: command generation failed (exit $code)" >&2
            return $code
    end
end
alias h='hermes-generate'
"#;

pub fn handle_init_command(shell: &str) -> Result<i32> {
    let script = script_for(shell).ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "unsupported shell: {shell} (supported: zsh, bash, fish)"
        ))
    })?;
    print!("{script}");
    Ok(exit_codes::SUCCESS)
}

fn script_for(shell: &str) -> Option<&'static str> {
    match shell {
        "zsh" => Some(ZSH_SCRIPT),
        "bash" => Some(BASH_SCRIPT),
        "fish" => Some(FISH_SCRIPT),
        _ => None,
    }
}
