use anyhow::Context;
use klokan_core::entities::InstanceKey;
use klokan_core::enums::Category;

use crate::context::AppContext;

/// Build an instance key from command-line input, checking the year against
/// the configured selectable range.
pub fn parse_instance_key(
    year: i32,
    category: &str,
    ctx: &AppContext,
) -> anyhow::Result<InstanceKey> {
    ctx.config.general.check_year(year, ctx.current_year)?;
    let category = category
        .parse::<Category>()
        .with_context(|| format!("invalid --category '{category}'"))?;
    Ok(InstanceKey::new(year, category))
}
