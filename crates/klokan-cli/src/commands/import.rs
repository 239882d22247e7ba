use klokan_db::import::InstanceImporter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ImportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `klokan import`.
pub async fn handle(
    args: &ImportArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let report = InstanceImporter::import(&ctx.db, &args.path).await?;
    output(&report, flags.format)
}
