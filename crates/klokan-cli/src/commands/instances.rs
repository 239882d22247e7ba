use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InstanceRow {
    id: i64,
    year: i32,
    category: String,
    answer_sheets: usize,
}

/// Handle `klokan instances`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let instances = ctx.db.list_instances().await?;

    let mut rows = Vec::with_capacity(instances.len());
    for instance in instances {
        let answer_sheets = ctx.db.list_answer_sheets(instance.key()).await?.len();
        rows.push(InstanceRow {
            id: instance.id,
            year: instance.year,
            category: instance.category.to_string(),
            answer_sheets,
        });
    }
    output(&rows, flags.format)
}
