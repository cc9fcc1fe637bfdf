use assert_cmd::{cargo::cargo_bin_cmd, Command};

/// Get a Command for promptscore
pub fn promptscore() -> Command {
    cargo_bin_cmd!("promptscore")
}
