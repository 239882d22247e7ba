use klokan_core::responses::AnswerSheetListResponse;

use crate::cli::root_commands::ListArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::parse_instance_key;
use crate::context::AppContext;
use crate::output::output;

/// Handle `klokan list`.
pub async fn handle(args: &ListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let key = parse_instance_key(args.year, &args.category, ctx)?;
    let answer_sheets = ctx.db.list_answer_sheets(key).await?;
    tracing::debug!(%key, count = answer_sheets.len(), "listed answer sheets");

    if flags.format == OutputFormat::Table {
        return output(&answer_sheets, flags.format);
    }
    output(
        &AnswerSheetListResponse {
            instance: key,
            answer_sheets,
        },
        flags.format,
    )
}
