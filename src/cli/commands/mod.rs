pub mod auth;
pub mod logging;
pub mod records;

use crate::config::DEFAULT_TIMEOUT_SECONDS;
use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_STORAGE_PATH: &str = "storage-path";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("atlas")
        .about("Student Atlas course management client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_API_URL)
                .short('u')
                .long(ARG_API_URL)
                .help("Backend base address, example: http://localhost:8080")
                .env("ATLAS_API_URL")
                .required(true),
        )
        .arg(
            Arg::new(ARG_STORAGE_PATH)
                .long(ARG_STORAGE_PATH)
                .help("Session file (default: <data dir>/student-atlas/storage.json)")
                .env("ATLAS_STORAGE_PATH")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help(format!(
                    "HTTP request timeout in seconds (default: {DEFAULT_TIMEOUT_SECONDS})"
                ))
                .env("ATLAS_TIMEOUT_SECONDS")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .subcommands(auth::subcommands())
        .subcommands(records::subcommands());

    logging::with_args(command)
}
