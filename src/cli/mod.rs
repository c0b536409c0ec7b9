//! Command-line interface.

pub mod breach;
pub mod completions;
pub mod context;
pub mod emergency;
pub mod enroll;
pub mod history;
pub mod notes;
pub mod output;
pub mod report;
pub mod share;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::domain::{AccessLevel, Permission};

/// Strongroom - security layer for a local credential vault.
#[derive(Parser)]
#[command(
    name = "strongroom",
    about = "Secure notes, password history, breach alerts, sharing and emergency access",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Manage secure notes
    Note {
        #[command(subcommand)]
        action: NoteAction,
    },

    /// Track and inspect previous passwords
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// Scan for breached credentials and manage alerts
    Breach {
        #[command(subcommand)]
        action: BreachAction,
    },

    /// Share credentials with other people
    Share {
        #[command(subcommand)]
        action: ShareAction,
    },

    /// Manage emergency access contacts
    Emergency {
        #[command(subcommand)]
        action: EmergencyAction,
    },

    /// Show a security report for a credential export
    Report {
        /// JSON array of credentials
        credentials: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Enroll platform strong authentication
    Enroll,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Note subcommands.
#[derive(Subcommand)]
pub enum NoteAction {
    /// Add a note
    Add {
        title: String,
        /// Note body (prompted for if omitted)
        #[arg(short, long)]
        content: Option<String>,
        #[arg(long, default_value = "General")]
        category: String,
        /// Tag, may be repeated
        #[arg(short, long = "tag")]
        tags: Vec<String>,
        /// Encrypt the note body
        #[arg(short, long)]
        encrypt: bool,
        /// File to attach, may be repeated
        #[arg(short, long = "attach")]
        attachments: Vec<PathBuf>,
    },

    /// List notes
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a note
    Show {
        id: String,
        /// Print the decrypted body
        #[arg(long)]
        reveal: bool,
    },

    /// Edit a note
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Replace tags, may be repeated
        #[arg(short, long = "tag")]
        tags: Vec<String>,
    },

    /// Delete a note
    Rm {
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

/// History subcommands.
#[derive(Subcommand)]
pub enum HistoryAction {
    /// Record a password change
    Track {
        password_id: String,
        /// Previous password (prompted for if omitted)
        #[arg(long)]
        old: Option<String>,
        #[arg(short, long, default_value = "manual change")]
        reason: String,
    },

    /// List previous passwords of a credential
    List {
        password_id: String,
        /// Print the decrypted old passwords
        #[arg(long)]
        reveal: bool,
    },
}

/// Breach subcommands.
#[derive(Subcommand)]
pub enum BreachAction {
    /// Scan a credential export against the breach list
    Scan {
        /// JSON array of credentials
        credentials: PathBuf,
    },

    /// List alerts
    List {
        /// Only unresolved alerts
        #[arg(short, long)]
        unresolved: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark an alert as resolved
    Resolve { id: String },
}

/// Share subcommands.
#[derive(Subcommand)]
pub enum ShareAction {
    /// Share a credential
    Add {
        password_id: String,
        recipient: String,
        /// Allow the recipient to edit
        #[arg(long)]
        edit: bool,
        /// Days until the grant expires
        #[arg(long)]
        expires_in: Option<u32>,
    },

    /// List grants
    List {
        /// Only grants that have not expired
        #[arg(short, long)]
        active: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Emergency contact subcommands.
#[derive(Subcommand)]
pub enum EmergencyAction {
    /// Add a contact
    Add {
        name: String,
        email: String,
        #[arg(short, long, default_value = "")]
        relationship: String,
        #[arg(long, value_enum, default_value = "limited")]
        access: AccessArg,
        /// Hours before access is granted
        #[arg(long, default_value_t = 48)]
        waiting_hours: u32,
    },

    /// List contacts
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove a contact
    Rm {
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum AccessArg {
    Limited,
    Full,
}

impl From<AccessArg> for AccessLevel {
    fn from(arg: AccessArg) -> Self {
        match arg {
            AccessArg::Limited => AccessLevel::Limited,
            AccessArg::Full => AccessLevel::Full,
        }
    }
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Note { action } => match action {
            NoteAction::Add {
                title,
                content,
                category,
                tags,
                encrypt,
                attachments,
            } => notes::add(notes::AddArgs {
                title,
                content,
                category,
                tags,
                encrypt,
                attachments,
            }),
            NoteAction::List { json } => notes::list(json),
            NoteAction::Show { id, reveal } => notes::show(&id, reveal),
            NoteAction::Edit {
                id,
                title,
                content,
                category,
                tags,
            } => notes::edit(&id, title, content, category, tags),
            NoteAction::Rm { id, yes } => notes::rm(&id, yes),
        },
        History { action } => match action {
            HistoryAction::Track {
                password_id,
                old,
                reason,
            } => history::track(&password_id, old, &reason),
            HistoryAction::List {
                password_id,
                reveal,
            } => history::list(&password_id, reveal),
        },
        Breach { action } => match action {
            BreachAction::Scan { credentials } => breach::scan(&credentials),
            BreachAction::List { unresolved, json } => breach::list(unresolved, json),
            BreachAction::Resolve { id } => breach::resolve(&id),
        },
        Share { action } => match action {
            ShareAction::Add {
                password_id,
                recipient,
                edit,
                expires_in,
            } => {
                let permission = if edit {
                    Permission::Edit
                } else {
                    Permission::View
                };
                share::add(&password_id, &recipient, permission, expires_in)
            }
            ShareAction::List { active, json } => share::list(active, json),
        },
        Emergency { action } => match action {
            EmergencyAction::Add {
                name,
                email,
                relationship,
                access,
                waiting_hours,
            } => emergency::add(name, email, relationship, access.into(), waiting_hours),
            EmergencyAction::List { json } => emergency::list(json),
            EmergencyAction::Rm { id, yes } => emergency::rm(&id, yes),
        },
        Report { credentials, json } => report::execute(&credentials, json),
        Enroll => enroll::execute(),
        Completions { shell } => completions::execute(shell),
    }
}
