//! Category listing.

use anyhow::Result;
use shopcart_commerce::catalog::category_label;

use super::CategoriesArgs;
use crate::context::Context;

/// Run the categories command.
pub fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let categories = catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        if args.raw {
            ctx.output.list_item(category);
        } else {
            ctx.output.list_item(&category_label(category));
        }
    }

    Ok(())
}
