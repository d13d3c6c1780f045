//! Terminal rendering for the CLI.
//!
//! Human mode prints styled lines and fixed-width tables; `--json` mode
//! suppresses all of that and commands print one JSON document instead.

use console::style;
use storefront_core::cart::CartSummary;
use storefront_core::display::ProductDisplay;

const CATALOG_WIDTHS: [usize; 5] = [6, 32, 16, 10, 16];
const CART_WIDTHS: [usize; 5] = [6, 28, 10, 5, 10];

/// Output handler for CLI messages.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn is_json(&self) -> bool {
        self.json
    }

    pub fn info(&self, msg: &str) {
        self.line(&style("ℹ").blue().to_string(), msg);
    }

    pub fn success(&self, msg: &str) {
        self.line(&style("✓").green().to_string(), msg);
    }

    /// Warnings go to stderr so they never mix with listings.
    pub fn warn(&self, msg: &str) {
        if !self.json {
            eprintln!("{} {}", style("⚠").yellow(), msg);
        }
    }

    /// Errors are printed in both modes; JSON mode wraps them in an object.
    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        } else {
            eprintln!("{} {}", style("✗").red(), style(msg).red());
        }
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if self.verbose && !self.json {
            eprintln!("{} {}", style("→").dim(), style(msg).dim());
        }
    }

    pub fn header(&self, msg: &str) {
        if !self.json {
            println!("\n{}", style(msg).bold().underlined());
        }
    }

    pub fn kv(&self, key: &str, value: &str) {
        if !self.json {
            println!("  {}: {}", style(key).dim(), value);
        }
    }

    /// One note per cart action, or a category entry.
    pub fn note(&self, item: &str) {
        self.line(&style("•").dim().to_string(), item);
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    /// Product listing with cart-aware stock badges.
    pub fn catalog_table(&self, cards: &[ProductDisplay<'_>]) {
        if self.json {
            return;
        }
        println!(
            "  {}",
            pad_row(&["ID", "TITLE", "CATEGORY", "PRICE", "STOCK"], &CATALOG_WIDTHS)
        );
        for card in cards {
            println!("  {}", pad_row(&catalog_row(card), &CATALOG_WIDTHS));
        }
    }

    /// Cart lines followed by the two totals rows.
    pub fn cart_table(&self, summary: &CartSummary) {
        if self.json {
            return;
        }
        println!(
            "  {}",
            pad_row(&["ID", "TITLE", "EACH", "QTY", "SUBTOTAL"], &CART_WIDTHS)
        );
        for line in &summary.lines {
            let cols = [
                line.product_id.to_string(),
                truncate(&line.title, CART_WIDTHS[1]),
                line.unit_price.display(),
                line.quantity.to_string(),
                line.subtotal.display(),
            ];
            println!("  {}", pad_row(&cols, &CART_WIDTHS));
        }
        println!();
        self.kv("Total Items", &summary.total_items.to_string());
        self.kv("Total Price", &summary.total_price.display());
    }

    fn line(&self, glyph: &str, msg: &str) {
        if !self.json {
            println!("{} {}", glyph, msg);
        }
    }
}

/// Columns for one product in the catalog table.
fn catalog_row(card: &ProductDisplay<'_>) -> [String; 5] {
    [
        card.product.id.to_string(),
        truncate(&card.product.title, CATALOG_WIDTHS[1]),
        truncate(&card.product.category, CATALOG_WIDTHS[2]),
        card.price_label(),
        stock_badge(card.product.stock, card.quantity_in_cart),
    ]
}

fn pad_row<S: AsRef<str>>(cols: &[S], widths: &[usize]) -> String {
    cols.iter()
        .zip(widths)
        .map(|(col, width)| format!("{:width$}", col.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Colored stock label for a product row.
pub fn stock_badge(stock: u32, in_cart: u32) -> String {
    if stock == 0 {
        return style("out of stock").red().to_string();
    }

    let label = format!("{}/{} in cart", in_cart, stock);
    if in_cart >= stock {
        style(label).yellow().to_string()
    } else {
        style(label).green().to_string()
    }
}

/// Shorten text to `max` characters, marking the cut.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
