/*
[INPUT]:  Process arguments
[OUTPUT]: Parsed command tree
[POS]:    CLI surface - flags and subcommands of the webex binary
[UPDATE]: When adding subcommands or global flags
*/

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "webex", version, about = "Command line client for the Webex REST API")]
pub struct Cli {
    /// YAML config file (default: <config dir>/webex/config.yaml)
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config_path: Option<PathBuf>,
    /// Access token, overrides config and WEBEX_ACCESS_TOKEN
    #[arg(long, value_name = "TOKEN", global = true)]
    pub token: Option<String>,
    #[arg(long = "base-url", value_name = "URL", global = true)]
    pub base_url: Option<String>,
    /// Tracing filter, e.g. `debug` or `webex_sdk=trace`
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
    #[arg(long, value_enum, global = true)]
    pub output: Option<OutputFormat>,
    /// Stop list commands after N items
    #[arg(long, value_name = "N", global = true)]
    pub max: Option<u32>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the authenticated identity
    Me,
    #[command(subcommand)]
    People(PeopleCommand),
    #[command(subcommand)]
    Rooms(RoomsCommand),
    #[command(subcommand)]
    Messages(MessagesCommand),
    #[command(subcommand)]
    Devices(DevicesCommand),
    #[command(subcommand)]
    Workspaces(WorkspacesCommand),
    #[command(subcommand)]
    Recordings(RecordingsCommand),
    #[command(subcommand)]
    TrackingCodes(TrackingCodesCommand),
    #[command(subcommand)]
    Numbers(NumbersCommand),
}

#[derive(Subcommand, Debug)]
pub enum PeopleCommand {
    List {
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "display-name")]
        display_name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RoomsCommand {
    List {
        #[arg(long = "team-id")]
        team_id: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MessagesCommand {
    List {
        #[arg(long = "room-id")]
        room_id: String,
    },
    Send(SendMessageArgs),
}

#[derive(Args, Debug)]
pub struct SendMessageArgs {
    #[arg(long = "room-id", conflicts_with = "to_person_email")]
    pub room_id: Option<String>,
    #[arg(long = "to-person-email")]
    pub to_person_email: Option<String>,
    #[arg(long)]
    pub text: Option<String>,
    #[arg(long)]
    pub markdown: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DevicesCommand {
    List {
        #[arg(long = "workspace-id")]
        workspace_id: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum WorkspacesCommand {
    List {
        #[arg(long = "display-name")]
        display_name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecordingsCommand {
    List {
        #[arg(long = "host-email")]
        host_email: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum TrackingCodesCommand {
    List {
        #[arg(long = "site-url")]
        site_url: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum NumbersCommand {
    List {
        #[arg(long = "location-id")]
        location_id: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "webex", "rooms", "list", "--max", "3", "--output", "yaml", "--token", "t",
        ])
        .unwrap();
        assert_eq!(cli.max, Some(3));
        assert_eq!(cli.output, Some(OutputFormat::Yaml));
        assert_eq!(cli.token.as_deref(), Some("t"));
        assert!(matches!(cli.command, Command::Rooms(RoomsCommand::List { team_id: None })));
    }

    #[test]
    fn test_tracking_codes_require_site_url() {
        assert!(Cli::try_parse_from(["webex", "tracking-codes", "list"]).is_err());
    }

    #[test]
    fn test_send_rejects_two_recipients() {
        let result = Cli::try_parse_from([
            "webex",
            "messages",
            "send",
            "--room-id",
            "r1",
            "--to-person-email",
            "a@example.com",
            "--text",
            "hi",
        ]);
        assert!(result.is_err());
    }
}
