use anyhow::Result;
use clap::Parser;
use eyesentry_business::migration::MigrationCatalog;
use eyesentry_cli::cli::{Cli, Commands};
use eyesentry_cli::commands::{
    add_column_migration, execute_migration, generate_completions, run_list, run_named,
};
use eyesentry_cli::timing;

#[global_allocator]
static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    timing::init_tracing(cli.verbose, cli.timing);

    let catalog = MigrationCatalog::builtin();

    match cli.command {
        Commands::List => {
            run_list(&catalog);
            Ok(())
        }
        Commands::Run { name } => run_named(&catalog, &name, &cli.connection, cli.dry_run).await,
        Commands::AddColumn {
            table,
            column,
            sql_type,
            comment,
            default_value,
        } => {
            let migration = add_column_migration(table, column, sql_type, comment, &default_value);
            execute_migration(&migration, &cli.connection, cli.dry_run).await
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}
