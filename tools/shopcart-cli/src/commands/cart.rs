//! Replay a cart script and print the resulting cart.

use anyhow::{bail, Result};
use shopcart_commerce::cart::CartEvent;

use super::CartArgs;
use crate::context::Context;
use crate::script::{self, CartScript, Outcome, ScriptRun};

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let script = CartScript::load(&args.script)?;
    ctx.output
        .debug(&format!("Replaying {} steps from {}", script.steps.len(), args.script));

    let session = script::run(&script, &catalog, args.strict);

    if ctx.output.is_json() {
        ctx.output.json(&session);
    } else {
        print_steps(&session, ctx);
        print_cart(&session, ctx);
    }

    if args.strict && session.steps.iter().any(|s| s.outcome.is_rejected()) {
        bail!("Cart script stopped at step {}", session.steps.len());
    }

    Ok(())
}

fn print_steps(session: &ScriptRun, ctx: &Context) {
    ctx.output.header("Steps");
    for report in &session.steps {
        let target = report
            .product
            .as_ref()
            .map(|id| format!(" {}", id))
            .unwrap_or_default();
        let label = format!("#{} {}{}", report.step, report.op, target);

        match &report.outcome {
            Outcome::Applied { message: Some(message), .. } => {
                ctx.output.success(&format!("{}: {}", label, message));
            }
            Outcome::Applied { event, message: None } => {
                ctx.output.success(&format!("{}: {}", label, describe(event)));
            }
            Outcome::Ignored { message } => ctx.output.warn(&format!("{}: {}", label, message)),
            Outcome::Failed { message } => ctx.output.error(&format!("{}: {}", label, message)),
        }
    }
}

fn describe(event: &CartEvent) -> String {
    match event {
        CartEvent::Added { line_quantity, .. } => format!("quantity now {}", line_quantity),
        CartEvent::QuantityChanged { from, to, .. } => format!("quantity {} -> {}", from, to),
        CartEvent::Removed { line } => format!("removed {}", line.title),
        CartEvent::Cleared { lines } => format!("cleared {} lines", lines),
    }
}

fn print_cart(session: &ScriptRun, ctx: &Context) {
    let display = &ctx.config.display;
    let cart = &session.cart;

    ctx.output.header("Shopping Cart");
    if cart.is_empty() {
        ctx.output.info("Your cart is empty");
    } else {
        let rows: Vec<Vec<String>> = cart
            .lines()
            .iter()
            .map(|line| {
                vec![
                    line.product_id.to_string(),
                    line.title.clone(),
                    line.quantity.to_string(),
                    display.money(&line.unit_price),
                    display.money(&line.line_total()),
                ]
            })
            .collect();
        ctx.output
            .table(&["ID", "TITLE", "QTY", "PRICE", "TOTAL"], &rows);
    }

    let summary = cart.summary();
    ctx.output.header("Order Summary");
    ctx.output.kv(
        &format!("Subtotal ({} items)", summary.item_count),
        &display.money(&summary.subtotal),
    );
    ctx.output.kv("Shipping", &summary.shipping_label());
    ctx.output.kv("Total", &display.money(&summary.total));
}
