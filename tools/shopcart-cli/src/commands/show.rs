//! Single product detail.

use anyhow::Result;
use shopcart_commerce::catalog::category_label;
use shopcart_commerce::{CommerceError, ProductId};

use super::ShowArgs;
use crate::context::Context;

/// Run the show command.
pub fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let id = ProductId::new(args.id);
    let product = catalog
        .get(&id)
        .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("id", product.id.as_str());
    ctx.output.kv("price", &ctx.config.display.money(&product.price));
    if !product.category.is_empty() {
        ctx.output.kv("category", &category_label(&product.category));
    }
    if product.rating.count > 0 {
        ctx.output.kv(
            "rating",
            &format!(
                "{:.1} ({} reviews)",
                product.rating.rate, product.rating.count
            ),
        );
    }
    if !product.image.is_empty() {
        ctx.output.kv("image", &product.image);
    }
    if !product.description.is_empty() {
        ctx.output.info("");
        println!("{}", product.description);
    }

    Ok(())
}
