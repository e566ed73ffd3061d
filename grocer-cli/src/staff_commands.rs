use crate::cli::StaffCommands;
use crate::order_commands::report;
use anyhow::{Context, Result};
use colored::Colorize;
use grocer_client::Api;
use grocer_types::ProductDraft;
use std::path::Path;

pub async fn run(api: &Api, cmd: StaffCommands) -> Result<()> {
    match cmd {
        StaffCommands::Ping => {
            let reply = api.staff_ping().await?;
            println!("{} {}", "✓".green(), reply);
            Ok(())
        },
        StaffCommands::CreateProduct { file } => {
            let draft = read_draft(&file)?;
            report(api.create_product(&draft).await, "Product created")
        },
        StaffCommands::UpdateProduct { id, file } => {
            let draft = read_draft(&file)?;
            report(api.update_product(&id, &draft).await, "Product updated")
        },
        StaffCommands::DeleteProduct { id } => report(api.delete_product(&id).await, "Product deleted"),
        StaffCommands::CreateCategory { name } => report(api.create_category(&name).await, "Category created"),
        StaffCommands::RenameCategory { id, name } => {
            report(api.rename_category(&id, &name).await, "Category renamed")
        },
        StaffCommands::DeleteCategory { id } => report(api.delete_category(&id).await, "Category deleted"),
        StaffCommands::CreateBrand { name } => report(api.create_brand(&name).await, "Brand created"),
        StaffCommands::RenameBrand { id, name } => report(api.rename_brand(&id, &name).await, "Brand renamed"),
        StaffCommands::DeleteBrand { id } => report(api.delete_brand(&id).await, "Brand deleted"),
    }
}

fn read_draft(path: &Path) -> Result<ProductDraft> {
    let content = std::fs::read_to_string(path).context("Failed to read file")?;
    serde_json::from_str(&content).context("Failed to parse product JSON")
}
