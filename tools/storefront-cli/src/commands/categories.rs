//! Category listing command.

use anyhow::Result;
use storefront_core::catalog::categories;

use crate::context::Context;

/// Run the categories command.
pub async fn run(ctx: &Context) -> Result<()> {
    let products = ctx.load_catalog().await?;
    let names = categories(&products);

    if ctx.output.is_json() {
        ctx.output.json(&names);
        return Ok(());
    }

    ctx.output.header("Categories");
    if names.is_empty() {
        ctx.output.info("The catalog is empty");
        return Ok(());
    }

    for name in &names {
        let count = products.iter().filter(|p| &p.category == name).count();
        ctx.output.note(&format!("{} ({})", name, count));
    }

    Ok(())
}
