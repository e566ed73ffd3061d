use anyhow::{bail, Result};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use grocer_client::{Api, ClientError};
use grocer_types::{Ack, CreateOrder};

/// Prints the outcome of a mutation, preferring the server's message.
pub fn report(result: Result<Ack, ClientError>, done: &str) -> Result<()> {
    let ack = result?;
    println!("{} {}", "✓".green(), ack.message.as_deref().unwrap_or(done));
    Ok(())
}

pub async fn show_cart(api: &Api) -> Result<()> {
    let cart = api.cart().await?;
    if cart.is_empty() {
        println!("{}", "Cart is empty.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Product", "Name", "Qty", "Price", "Subtotal"]);
    for item in &cart.items {
        let name = if item.in_stock { Cell::new(&item.name) } else { Cell::new(&item.name).fg(Color::Red) };
        table.add_row(vec![
            Cell::new(&item.product_id),
            name,
            Cell::new(item.quantity),
            Cell::new(format!("{:.2}", item.price)),
            Cell::new(format!("{:.2}", item.subtotal)),
        ]);
    }

    println!("{table}");
    println!("\n{} items, total {}", cart.total_items, format!("{:.2}", cart.total_price).bold());
    Ok(())
}

pub async fn show_wishlist(api: &Api) -> Result<()> {
    let wishlist = api.wishlist().await?;
    if wishlist.items.is_empty() {
        println!("{}", "Wishlist is empty.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Product", "Name", "Price", "Status"]);
    for item in &wishlist.items {
        let status = if item.in_stock {
            Cell::new("In stock").fg(Color::Green)
        } else {
            Cell::new("Out of stock").fg(Color::Red)
        };
        table.add_row(vec![
            Cell::new(&item.product_id),
            Cell::new(&item.name),
            Cell::new(format!("{:.2}", item.price)),
            status,
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn check_wishlist(api: &Api, product_id: &str) -> Result<()> {
    if api.in_wishlist(product_id).await? {
        println!("{} {} is in your wishlist", "♥".red(), product_id);
    } else {
        println!("{} is not in your wishlist", product_id);
    }
    Ok(())
}

/// Orders every in-stock cart line, then empties the cart.
pub async fn checkout(api: &Api) -> Result<()> {
    let cart = api.cart().await?;
    let lines = cart.orderable_lines();
    if lines.is_empty() {
        bail!("Nothing to order: the cart has no in-stock items");
    }
    let skipped = cart.items.len() - lines.len();

    let receipt = api.create_order(&CreateOrder::new(lines)).await?;
    if let Err(e) = api.clear_cart().await {
        tracing::warn!(error = %e, "order placed but the cart could not be cleared");
    }

    println!("{} Order placed: {}", "✓".green(), receipt.id.green());
    if skipped > 0 {
        println!("{} {} out-of-stock item(s) were left out", "!".yellow(), skipped);
    }
    Ok(())
}

pub async fn history(api: &Api, json: bool) -> Result<()> {
    let orders = api.order_history().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&orders)?);
        return Ok(());
    }
    if orders.is_empty() {
        println!("{}", "No orders yet.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Order", "Placed", "Items", "Total", "Status"]);
    for order in &orders {
        let placed = order.created_at.map(|t| t.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default();
        table.add_row(vec![
            Cell::new(&order.id),
            Cell::new(placed),
            Cell::new(order.items.len()),
            Cell::new(format!("{:.2}", order.total_price)),
            Cell::new(&order.status).fg(status_color(&order.status)),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn track(api: &Api, order_id: &str) -> Result<()> {
    let tracking = api.track_order(order_id).await?;
    println!("{} {}  {}", "Order".bold(), tracking.order_id, tracking.status.color(colored_status(&tracking.status)));

    let mut history = tracking.history.clone();
    history.sort_by_key(|change| change.timestamp);
    for change in &history {
        let at = change.timestamp.map(|t| t.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_else(|| "-".to_string());
        if change.note.is_empty() {
            println!("  {}  {}", at.dimmed(), change.status);
        } else {
            println!("  {}  {}  {}", at.dimmed(), change.status, change.note.dimmed());
        }
    }
    Ok(())
}

fn status_color(status: &str) -> Color {
    match status.to_ascii_lowercase().as_str() {
        "delivered" | "completed" => Color::Green,
        "cancelled" | "canceled" => Color::Red,
        "shipped" | "out_for_delivery" => Color::Cyan,
        _ => Color::Yellow,
    }
}

fn colored_status(status: &str) -> colored::Color {
    match status_color(status) {
        Color::Green => colored::Color::Green,
        Color::Red => colored::Color::Red,
        Color::Cyan => colored::Color::Cyan,
        _ => colored::Color::Yellow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color() {
        assert_eq!(status_color("Delivered"), Color::Green);
        assert_eq!(status_color("cancelled"), Color::Red);
        assert_eq!(status_color("pending"), Color::Yellow);
    }
}
