use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hrportal
#[derive(Parser)]
#[command(
    name = "hrportal",
    version = env!("CARGO_PKG_VERSION"),
    about = "HR portal companion: attendance summaries and exports, ticket notifications, schedules and NTE responses",
    long_about = None
)]
pub struct Cli {
    /// Use a different configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the API base URL from the configuration
    #[arg(global = true, long = "api", value_name = "URL")]
    pub api: Option<String>,

    /// Print diagnostic logs on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Store the session used to talk to the portal API
    Login {
        #[arg(long, help = "Bearer token issued by the portal")]
        token: String,

        #[arg(long, help = "Role of the signed-in user (e.g. admin, it, hr)")]
        role: String,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },

    /// Print the attendance summary for a period
    Summary {
        #[arg(
            long,
            short,
            value_name = "RANGE",
            help = "YYYY, YYYY-MM, YYYY-MM-DD or START:END of the same form"
        )]
        range: String,

        #[arg(long, short, value_name = "ID", help = "Only this employee")]
        employee: Option<String>,

        #[arg(
            long,
            short,
            value_name = "FILE",
            help = "Read employees and attendance from a JSON snapshot instead of the API"
        )]
        input: Option<String>,
    },

    /// Export the attendance summary and detail sheets
    Export {
        #[arg(long, short, value_name = "RANGE")]
        range: String,

        #[arg(long, short, value_name = "ID")]
        employee: Option<String>,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "DIR", help = "Output directory (default from config)")]
        dir: Option<String>,

        #[arg(long, short, value_name = "FILE")]
        input: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite without asking")]
        force: bool,
    },

    /// Show open tickets for your role
    Tickets {
        #[arg(
            long,
            short,
            help = "Keep polling; press Enter to refresh now, Ctrl-C to quit"
        )]
        watch: bool,
    },

    /// Print the shift schedule grid
    Schedule {
        #[arg(long, short, value_name = "RANGE")]
        range: String,

        #[arg(long, short, value_name = "FILE")]
        input: Option<String>,
    },

    /// Notice-to-explain workflow
    Nte {
        #[command(subcommand)]
        action: NteAction,
    },
}

#[derive(Subcommand)]
pub enum NteAction {
    /// Show an NTE and its current stage
    Show { id: String },

    /// Answer an NTE as the employee
    Respond {
        id: String,

        #[arg(long, help = "Your explanation")]
        feedback: String,

        #[arg(long, help = "Confirm that the explanation is truthful")]
        confirm: bool,

        #[arg(long, value_name = "FILE", help = "File holding your signature (data URL or SVG)")]
        signature: Option<String>,
    },
}
