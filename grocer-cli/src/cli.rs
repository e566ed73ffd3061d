use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "grocer",
    about = "Grocer - storefront client for the terminal",
    version = env!("CARGO_PKG_VERSION"),
    author,
    propagate_version = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, env = "GROCER_API_BASE_URL", default_value = "http://localhost:8080")]
    pub api_url: String,

    #[arg(long, env = "GROCER_API_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,

    #[arg(long, env = "GROCER_TOKEN_FILE", help = "Token file (default: <data dir>/grocer/token)")]
    pub token_file: Option<PathBuf>,

    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Log in and store the session token")]
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "GROCER_PASSWORD", hide_env_values = true)]
        password: String,
    },

    #[command(about = "Create an account")]
    Register {
        #[arg(long)]
        full_name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long, env = "GROCER_PASSWORD", hide_env_values = true)]
        password: String,

        #[arg(long, help = "Staff registration code")]
        staff_code: Option<String>,
    },

    #[command(about = "Forget the stored session token")]
    Logout,

    #[command(about = "Show the signed-in profile and badge counts")]
    Whoami,

    #[command(about = "List products, optionally filtered")]
    Products {
        #[arg(short, long, default_value = "", help = "Free-text search")]
        query: String,

        #[arg(short, long, default_value = "", help = "Category id")]
        category: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Show one product")]
    Product {
        id: String,
    },

    #[command(about = "List categories")]
    Categories {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "List brands")]
    Brands {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Look up a product by barcode")]
    Barcode {
        code: String,
    },

    #[command(subcommand, about = "Manage the cart")]
    Cart(CartCommands),

    #[command(subcommand, about = "Manage the wishlist")]
    Wishlist(WishlistCommands),

    #[command(subcommand, about = "Place and follow orders")]
    Order(OrderCommands),

    #[command(subcommand, about = "Back-office catalog management (staff only)")]
    Staff(StaffCommands),
}

#[derive(Subcommand)]
pub enum CartCommands {
    #[command(about = "Show the cart")]
    Show,

    #[command(about = "Add a product")]
    Add {
        product_id: String,

        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },

    #[command(about = "Change a line's quantity")]
    Update {
        product_id: String,

        #[arg(short, long)]
        quantity: u32,
    },

    #[command(about = "Remove a product")]
    Remove {
        product_id: String,
    },

    #[command(about = "Empty the cart")]
    Clear,
}

#[derive(Subcommand)]
pub enum WishlistCommands {
    #[command(about = "Show the wishlist")]
    Show,

    #[command(about = "Add a product")]
    Add {
        product_id: String,
    },

    #[command(about = "Remove a product")]
    Remove {
        product_id: String,
    },

    #[command(about = "Check whether a product is wishlisted")]
    Check {
        product_id: String,
    },
}

#[derive(Subcommand)]
pub enum OrderCommands {
    #[command(about = "Order every in-stock cart line")]
    Checkout,

    #[command(about = "Show past orders")]
    History {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Show an order's status history")]
    Track {
        order_id: String,
    },
}

#[derive(Subcommand)]
pub enum StaffCommands {
    #[command(about = "Check staff access")]
    Ping,

    #[command(about = "Create a product from a JSON file")]
    CreateProduct {
        #[arg(short, long, help = "Path to product JSON")]
        file: PathBuf,
    },

    #[command(about = "Replace a product from a JSON file")]
    UpdateProduct {
        id: String,

        #[arg(short, long, help = "Path to product JSON")]
        file: PathBuf,
    },

    #[command(about = "Delete a product")]
    DeleteProduct {
        id: String,
    },

    #[command(about = "Create a category")]
    CreateCategory {
        name: String,
    },

    #[command(about = "Rename a category")]
    RenameCategory {
        id: String,
        name: String,
    },

    #[command(about = "Delete a category")]
    DeleteCategory {
        id: String,
    },

    #[command(about = "Create a brand")]
    CreateBrand {
        name: String,
    },

    #[command(about = "Rename a brand")]
    RenameBrand {
        id: String,
        name: String,
    },

    #[command(about = "Delete a brand")]
    DeleteBrand {
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_products_defaults_to_no_filter() {
        let cli = Cli::try_parse_from(["grocer", "products"]).expect("parses");
        match cli.command {
            Commands::Products { query, category, json } => {
                assert!(query.is_empty());
                assert!(category.is_empty());
                assert!(!json);
            },
            _ => panic!("expected products"),
        }
    }

    #[test]
    fn test_cart_add_quantity() {
        let cli = Cli::try_parse_from(["grocer", "cart", "add", "p1", "-q", "3"]).expect("parses");
        assert!(matches!(cli.command, Commands::Cart(CartCommands::Add { quantity: 3, .. })));
    }
}
