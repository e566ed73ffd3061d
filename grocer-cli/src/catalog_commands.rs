use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use grocer_client::filter::FilterQuery;
use grocer_client::Api;
use grocer_types::Product;

pub async fn list_products(api: &Api, query: &str, category: &str, json: bool) -> Result<()> {
    let products = api.list_products(&FilterQuery::new(query, category)).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }
    if products.is_empty() {
        println!("{}", "No products found.".yellow());
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Category", "Price", "Stock"]);
    for product in &products {
        table.add_row(vec![
            Cell::new(&product.id),
            Cell::new(&product.name),
            Cell::new(category_label(product)),
            Cell::new(format_price(product)),
            stock_cell(product),
        ]);
    }

    println!("{table}");
    println!("\n{} products", products.len());
    Ok(())
}

pub async fn show_product(api: &Api, id: &str) -> Result<()> {
    let product = api.product_by_id(id).await?;
    print_product(&product);
    Ok(())
}

pub async fn lookup_barcode(api: &Api, code: &str) -> Result<()> {
    match api.lookup_barcode(code).await? {
        Some(product) => print_product(&product),
        None => println!("{} No product for barcode {}", "✗".red(), code.trim().yellow()),
    }
    Ok(())
}

pub async fn list_categories(api: &Api, json: bool) -> Result<()> {
    let categories = api.list_categories().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&categories)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Items"]);
    for category in &categories {
        table.add_row(vec![
            Cell::new(&category.id),
            Cell::new(&category.name),
            Cell::new(category.items_count),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub async fn list_brands(api: &Api, json: bool) -> Result<()> {
    let brands = api.list_brands().await?;
    if json {
        println!("{}", serde_json::to_string_pretty(&brands)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "Name", "Country"]);
    for brand in &brands {
        table.add_row(vec![Cell::new(&brand.id), Cell::new(&brand.name), Cell::new(&brand.country)]);
    }
    println!("{table}");
    Ok(())
}

fn print_product(product: &Product) {
    println!("{}", product.name.bold());
    if !product.description.is_empty() {
        println!("{}", product.description);
    }
    println!("  {} {}", "ID:".dimmed(), product.id);
    println!("  {} {}", "Barcode:".dimmed(), if product.barcode.is_empty() { "-" } else { product.barcode.as_str() });
    println!("  {} {}", "Price:".dimmed(), format_price(product));
    println!("  {} {}", "Stock:".dimmed(), product.stock_qty);
    if let Some(location) = product.location() {
        println!("  {} {}", "Location:".dimmed(), location);
    }
}

fn category_label(product: &Product) -> &str {
    product.category_name.as_deref().filter(|name| !name.is_empty()).unwrap_or(&product.category_id)
}

pub fn format_price(product: &Product) -> String {
    match product.price {
        Some(price) if product.currency.is_empty() => format!("{price:.2}"),
        Some(price) => format!("{price:.2} {}", product.currency),
        None => "-".to_string(),
    }
}

fn stock_cell(product: &Product) -> Cell {
    if product.in_stock() {
        Cell::new(product.stock_qty).fg(Color::Green)
    } else {
        Cell::new("Out").fg(Color::Red)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        let mut product = Product { price: Some(2.5), ..Default::default() };
        assert_eq!(format_price(&product), "2.50");
        product.currency = "EUR".to_string();
        assert_eq!(format_price(&product), "2.50 EUR");
        product.price = None;
        assert_eq!(format_price(&product), "-");
    }
}
