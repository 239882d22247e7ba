use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::List(args) => commands::list::handle(&args, ctx, flags).await,
        Commands::Show(args) => commands::show::handle(&args, ctx, flags).await,
        Commands::Import(args) => commands::import::handle(&args, ctx, flags).await,
        Commands::Export(args) => commands::export::handle(&args, ctx, flags).await,
        Commands::Instances => commands::instances::handle(ctx, flags).await,
    }
}
