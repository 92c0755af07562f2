use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "eyesentry-migrate")]
#[command(about = "Run schema migrations against the EyeSentry database", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print the steps without calling the database
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Show timing/latency information
    #[arg(long, global = true)]
    pub timing: bool,

    /// Enable verbose debug output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Where to connect and as whom. Only needed when steps actually run.
#[derive(Args, Debug, Clone, Default)]
pub struct ConnectionArgs {
    /// Project URL of the managed database
    #[arg(long, env = "SUPABASE_URL", global = true)]
    pub supabase_url: Option<String>,

    /// Public anon key of the project
    #[arg(long, env = "SUPABASE_ANON_KEY", global = true, hide_env_values = true)]
    pub anon_key: Option<String>,

    /// Admin account email
    #[arg(long, env = "ADMIN_EMAIL", global = true)]
    pub email: Option<String>,

    /// Admin account password (prompted for when omitted on a terminal)
    #[arg(long, env = "ADMIN_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the built-in migrations
    List,
    /// Run a built-in migration by name
    Run {
        /// Migration name, see `list`
        name: String,
    },
    /// Add a column: create it, comment it, backfill existing rows
    AddColumn {
        #[arg(long)]
        table: String,

        #[arg(long)]
        column: String,

        /// SQL type, e.g. "text" or "boolean not null default false"
        #[arg(long = "type")]
        sql_type: String,

        #[arg(long)]
        comment: String,

        /// Backfill value; parsed as JSON, otherwise used as a string
        #[arg(long = "default")]
        default_value: String,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
