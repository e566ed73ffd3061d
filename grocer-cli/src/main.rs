//! Grocer CLI
//!
//! Talks to the storefront REST API with the same client the WebUI uses.
//! The session token lives in a file so separate invocations share it.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use grocer_client::{Api, AuthStore, ClientConfig, ClientError, FileTokenStore, HttpClient, Session};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

mod account_commands;
mod catalog_commands;
mod cli;
mod order_commands;
mod staff_commands;

use cli::{CartCommands, Cli, Commands, OrderCommands, WishlistCommands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let token_path = match cli.token_file.clone() {
        Some(path) => path,
        None => FileTokenStore::default_path().context("Failed to resolve data directory for the token file")?,
    };
    tracing::debug!(path = %token_path.display(), "using token file");

    let session = Session::new(Arc::new(FileTokenStore::new(token_path)));
    let config = ClientConfig::new(&cli.api_url).with_timeout_secs(cli.timeout_secs);
    let api = Api::new(HttpClient::new(config, session)?);

    let result = run(cli.command, api).await;
    if let Err(e) = &result {
        if e.downcast_ref::<ClientError>().is_some_and(ClientError::is_unauthorized) {
            eprintln!("{}", "Not signed in, or the session has expired. Run `grocer login` first.".yellow());
        }
    }
    result
}

async fn run(command: Commands, api: Api) -> Result<()> {
    match command {
        Commands::Login { email, password } => account_commands::login(&AuthStore::new(api), &email, &password).await,
        Commands::Register { full_name, email, password, staff_code } => {
            account_commands::register(&AuthStore::new(api), full_name, email, password, staff_code).await
        },
        Commands::Logout => {
            account_commands::logout(&AuthStore::new(api));
            Ok(())
        },
        Commands::Whoami => account_commands::whoami(&api).await,
        Commands::Products { query, category, json } => {
            catalog_commands::list_products(&api, &query, &category, json).await
        },
        Commands::Product { id } => catalog_commands::show_product(&api, &id).await,
        Commands::Categories { json } => catalog_commands::list_categories(&api, json).await,
        Commands::Brands { json } => catalog_commands::list_brands(&api, json).await,
        Commands::Barcode { code } => catalog_commands::lookup_barcode(&api, &code).await,
        Commands::Cart(cmd) => match cmd {
            CartCommands::Show => order_commands::show_cart(&api).await,
            CartCommands::Add { product_id, quantity } => {
                order_commands::report(api.add_to_cart(&product_id, quantity).await, "Added to cart")
            },
            CartCommands::Update { product_id, quantity } => {
                order_commands::report(api.update_cart_item(&product_id, quantity).await, "Cart updated")
            },
            CartCommands::Remove { product_id } => {
                order_commands::report(api.remove_from_cart(&product_id).await, "Removed from cart")
            },
            CartCommands::Clear => order_commands::report(api.clear_cart().await, "Cart cleared"),
        },
        Commands::Wishlist(cmd) => match cmd {
            WishlistCommands::Show => order_commands::show_wishlist(&api).await,
            WishlistCommands::Add { product_id } => {
                order_commands::report(api.add_to_wishlist(&product_id).await, "Added to wishlist")
            },
            WishlistCommands::Remove { product_id } => {
                order_commands::report(api.remove_from_wishlist(&product_id).await, "Removed from wishlist")
            },
            WishlistCommands::Check { product_id } => order_commands::check_wishlist(&api, &product_id).await,
        },
        Commands::Order(cmd) => match cmd {
            OrderCommands::Checkout => order_commands::checkout(&api).await,
            OrderCommands::History { json } => order_commands::history(&api, json).await,
            OrderCommands::Track { order_id } => order_commands::track(&api, &order_id).await,
        },
        Commands::Staff(cmd) => staff_commands::run(&api, cmd).await,
    }
}
