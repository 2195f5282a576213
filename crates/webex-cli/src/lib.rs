/*
[INPUT]:  CLI modules
[OUTPUT]: Library surface of the webex binary
[POS]:    Crate root - module wiring
[UPDATE]: When adding modules
*/

pub mod cli;
pub mod commands;
pub mod config;
pub mod output;
pub mod session;

pub use cli::{Cli, Command};
pub use commands::{ListOptions, execute};
pub use config::CliConfig;
pub use output::{OutputFormat, render};
pub use session::Session;
