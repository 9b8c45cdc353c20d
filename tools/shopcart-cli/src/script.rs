//! Scripted cart sessions.
//!
//! A script is a list of steps replayed against a fresh cart:
//!
//! ```toml
//! [[step]]
//! op = "add"
//! product = 1
//! quantity = 2
//!
//! [[step]]
//! op = "remove"
//! product = 1
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shopcart_commerce::cart::{Cart, CartEvent, CartStore};
use shopcart_commerce::catalog::Catalog;
use shopcart_commerce::{CommerceError, ProductId};
use tracing::debug;

/// A cart script file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartScript {
    /// Steps in the order they are applied.
    #[serde(default, alias = "step")]
    pub steps: Vec<ScriptStep>,
}

impl CartScript {
    /// Load a script from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read cart script: {}", path))?;

        Self::parse(path, &content)
    }

    /// Parse script text; `.json` paths are JSON, everything else TOML.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON cart script: {}", path))
        } else {
            toml::from_str(content)
                .with_context(|| format!("Failed to parse TOML cart script: {}", path))
        }
    }
}

/// One user action against the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Add units of a catalog product.
    Add {
        product: ProductId,
        #[serde(default = "default_quantity")]
        quantity: i64,
    },
    /// Replace a line's quantity.
    Set { product: ProductId, quantity: i64 },
    /// Nudge a line's quantity by `delta`.
    Step { product: ProductId, delta: i64 },
    /// Delete a line.
    Remove { product: ProductId },
    /// Empty the cart.
    Clear,
}

fn default_quantity() -> i64 {
    1
}

impl ScriptStep {
    fn name(&self) -> &'static str {
        match self {
            ScriptStep::Add { .. } => "add",
            ScriptStep::Set { .. } => "set",
            ScriptStep::Step { .. } => "step",
            ScriptStep::Remove { .. } => "remove",
            ScriptStep::Clear => "clear",
        }
    }

    fn product(&self) -> Option<&ProductId> {
        match self {
            ScriptStep::Add { product, .. }
            | ScriptStep::Set { product, .. }
            | ScriptStep::Step { product, .. }
            | ScriptStep::Remove { product } => Some(product),
            ScriptStep::Clear => None,
        }
    }
}

/// What happened to one step.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The cart changed; `message` is the notice shown to the shopper.
    Applied {
        event: CartEvent,
        message: Option<String>,
    },
    /// Soft rejection: nothing happened, nothing went wrong.
    Ignored { message: String },
    /// The step was rejected.
    Failed { message: String },
}

impl Outcome {
    fn from_error(err: CommerceError) -> Self {
        if err.is_soft() {
            Outcome::Ignored {
                message: err.to_string(),
            }
        } else {
            Outcome::Failed {
                message: err.to_string(),
            }
        }
    }

    /// Whether the step was rejected, softly or not.
    pub fn is_rejected(&self) -> bool {
        !matches!(self, Outcome::Applied { .. })
    }
}

/// Result of one step.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StepReport {
    /// 1-based position in the script.
    pub step: usize,
    pub op: &'static str,
    pub product: Option<ProductId>,
    pub outcome: Outcome,
}

/// Result of a whole script.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptRun {
    pub steps: Vec<StepReport>,
    /// Final cart state.
    pub cart: Cart,
}

impl ScriptRun {
    /// Number of steps rejected with a non-soft error.
    pub fn failures(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Failed { .. }))
            .count()
    }
}

/// Replay `script` against a fresh cart priced in the catalog's currency.
///
/// With `strict`, the run stops after the first rejected step.
pub fn run(script: &CartScript, catalog: &Catalog, strict: bool) -> ScriptRun {
    let mut store = CartStore::new(catalog.currency());
    store.subscribe(|event: &CartEvent, cart: &Cart| {
        debug!(
            product = ?event.product_id(),
            lines = cart.len(),
            items = cart.total_items(),
            "cart updated"
        );
    });

    let mut steps = Vec::with_capacity(script.steps.len());
    for (index, step) in script.steps.iter().enumerate() {
        let outcome = match apply_step(&mut store, catalog, step) {
            Ok(event) => {
                let message = notice(&event, store.cart());
                Outcome::Applied { event, message }
            }
            Err(e) => Outcome::from_error(e),
        };

        let rejected = outcome.is_rejected();
        steps.push(StepReport {
            step: index + 1,
            op: step.name(),
            product: step.product().cloned(),
            outcome,
        });

        if strict && rejected {
            break;
        }
    }

    ScriptRun {
        steps,
        cart: store.cart().clone(),
    }
}

fn apply_step(
    store: &mut CartStore,
    catalog: &Catalog,
    step: &ScriptStep,
) -> Result<CartEvent, CommerceError> {
    match step {
        ScriptStep::Add { product, quantity } => {
            let product = catalog
                .get(product)
                .ok_or_else(|| CommerceError::ProductNotFound(product.to_string()))?;
            store.add(product, *quantity)
        }
        ScriptStep::Set { product, quantity } => store.set_quantity(product, *quantity),
        ScriptStep::Step { product, delta } => store.step_quantity(product, *delta),
        ScriptStep::Remove { product } => store.remove(product),
        ScriptStep::Clear => store.clear(),
    }
}

/// Shopper-facing notice for an applied event.
fn notice(event: &CartEvent, cart: &Cart) -> Option<String> {
    match event {
        CartEvent::Added { product_id, .. } => cart
            .get(product_id)
            .map(|line| format!("{} added to cart!", line.title)),
        CartEvent::Removed { .. } => Some("Item removed from cart".to_string()),
        CartEvent::QuantityChanged { .. } | CartEvent::Cleared { .. } => None,
    }
}
