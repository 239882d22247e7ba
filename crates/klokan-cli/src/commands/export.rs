use std::fs::File;
use std::io::BufWriter;

use anyhow::Context;
use klokan_config::LineEnding;
use klokan_db::export::{AnswerSheetExporter, ExportScope};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::commands::shared::parse_instance_key;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportResponse {
    path: String,
    scope: String,
    rows_written: u32,
}

/// Handle `klokan export`.
pub async fn handle(
    args: &ExportArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let scope = match (args.year, args.category.as_deref()) {
        (Some(year), Some(category)) => {
            ExportScope::Selection(parse_instance_key(year, category, ctx)?)
        }
        _ => ExportScope::All,
    };

    let exporter = if args.lf {
        AnswerSheetExporter::new(LineEnding::Lf)
    } else {
        AnswerSheetExporter::from_config(&ctx.config.export)
    };

    let file = File::create(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;
    let mut sink = BufWriter::new(file);
    let report = exporter
        .export(&ctx.db, scope, &mut sink)
        .await
        .with_context(|| format!("export to {} failed", args.out.display()))?;

    output(
        &ExportResponse {
            path: args.out.display().to_string(),
            scope: match scope {
                ExportScope::Selection(key) => key.to_string(),
                ExportScope::All => String::from("all"),
            },
            rows_written: report.rows_written,
        },
        flags.format,
    )
}
