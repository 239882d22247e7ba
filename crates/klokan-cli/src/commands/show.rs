use anyhow::Context;
use klokan_core::grid::AnswerGrid;
use klokan_core::responses::AnswerSheetDetail;
use serde::Serialize;

use crate::cli::root_commands::ShowArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::grid::render_grid;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AnswerSheetShowResponse {
    #[serde(flatten)]
    detail: AnswerSheetDetail,
    chosen_grid: AnswerGrid,
    correct_grid: AnswerGrid,
    #[serde(skip_serializing_if = "Option::is_none")]
    scan_written_to: Option<String>,
}

/// Handle `klokan show`.
pub async fn handle(args: &ShowArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail = ctx.db.answer_sheet_detail(args.id).await?;

    let scan_written_to = match &args.scan_out {
        Some(path) => {
            let scan = ctx.db.get_scan(args.id).await?;
            std::fs::write(path, &scan)
                .with_context(|| format!("failed to write scan to {}", path.display()))?;
            tracing::info!(path = %path.display(), bytes = scan.len(), "scan written");
            Some(path.display().to_string())
        }
        None => None,
    };

    let chosen_grid = detail.chosen_grid();
    let correct_grid = detail.correct_grid();

    if flags.format == OutputFormat::Table {
        println!(
            "Answer sheet {} | student {} | {} | {} points",
            detail.sheet.id,
            detail.sheet.student_number,
            detail.instance.key(),
            detail.sheet.points
        );
        println!();
        println!("{}", render_grid(&chosen_grid, &correct_grid));
        if !flags.quiet {
            if let Some(path) = &scan_written_to {
                println!();
                println!("scan written to {path}");
            }
        }
        return Ok(());
    }

    output(
        &AnswerSheetShowResponse {
            detail,
            chosen_grid,
            correct_grid,
            scan_written_to,
        },
        flags.format,
    )
}
