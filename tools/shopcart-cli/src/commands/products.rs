//! Catalog listing with search and category filters.

use anyhow::Result;
use shopcart_commerce::catalog::category_label;
use shopcart_commerce::search::CatalogQuery;

use super::ProductsArgs;
use crate::context::Context;

/// Run the products command.
pub fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let query = CatalogQuery::new()
        .with_text(args.search)
        .with_category(args.category.as_str());
    let results = query.run(catalog.products());

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Products ({} of {})",
        results.len(),
        results.catalog_size()
    ));

    if results.is_empty() {
        ctx.output.info("No products match.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|product| {
            vec![
                product.id.to_string(),
                product.title.clone(),
                category_label(&product.category),
                ctx.config.display.money(&product.price),
            ]
        })
        .collect();
    ctx.output.table(&["ID", "TITLE", "CATEGORY", "PRICE"], &rows);

    Ok(())
}
