//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "shreeaura-admin",
    version,
    about = "ShreeAura e-commerce admin console"
)]
pub struct Cli {
    /// Admin API base URL (overrides SHREEAURA_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Where the admin token is stored (overrides SHREEAURA_SESSION_FILE)
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Mirror log output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the admin token
    Login {
        #[arg(long)]
        email: String,
        /// Password; falls back to SHREEAURA_ADMIN_PASSWORD, then a prompt
        #[arg(long)]
        password: Option<String>,
    },
    /// Discard the stored admin token
    Logout,
    /// Show the session and API endpoint in use
    Status,
    /// Manage product categories
    Categories {
        #[command(subcommand)]
        action: Option<CategoryAction>,
    },
    /// Manage shop-by-name entries
    ShopByName {
        #[command(subcommand)]
        action: Option<CatalogAction>,
    },
    /// Manage shop-by-category tiles
    ShopByCategory {
        #[command(subcommand)]
        action: Option<CatalogAction>,
    },
    /// Manage blog posts
    Blogs {
        #[command(subcommand)]
        action: Option<BlogAction>,
    },
    /// Browse orders
    Orders {
        #[command(subcommand)]
        action: Option<OrderAction>,
    },
    /// Browse the seller directory
    Sellers {
        /// Filter by name, email or phone
        #[arg(long)]
        search: Option<String>,
    },
    /// Seller balances, OTP-gated payouts and receipts
    Payments {
        #[command(subcommand)]
        action: PaymentCommand,
    },
}

impl Command {
    /// Name used for the command's log span
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login { .. } => "login",
            Command::Logout => "logout",
            Command::Status => "status",
            Command::Categories { .. } => "categories",
            Command::ShopByName { .. } => "shop-by-name",
            Command::ShopByCategory { .. } => "shop-by-category",
            Command::Blogs { .. } => "blogs",
            Command::Orders { .. } => "orders",
            Command::Sellers { .. } => "sellers",
            Command::Payments { .. } => "payments",
        }
    }
}

/// Confirmation flag shared by delete actions
#[derive(Args, Debug, Clone, Copy)]
pub struct ConfirmArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Subcommand, Debug)]
pub enum CategoryAction {
    /// List categories
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Add a category
    Add { name: String },
    /// Rename a category
    Edit { id: i64, name: String },
    /// Delete a category
    Delete {
        id: i64,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum CatalogAction {
    /// List entries
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Add an entry with its image
    Add {
        name: String,
        #[arg(long)]
        image: PathBuf,
    },
    /// Rename an entry, optionally replacing its image
    Edit {
        id: i64,
        name: String,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete an entry
    Delete {
        id: i64,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

/// Description given inline or read from a file
#[derive(Args, Debug, Clone)]
#[group(multiple = false)]
pub struct DescriptionArgs {
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub description_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum BlogAction {
    /// List posts
    List {
        #[arg(long)]
        search: Option<String>,
    },
    /// Print one post
    Show { id: i64 },
    /// Publish a new post
    Add {
        #[arg(long)]
        title: String,
        #[command(flatten)]
        description: DescriptionArgs,
        #[arg(long)]
        image: PathBuf,
    },
    /// Edit a post; omitted fields keep their current value
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[command(flatten)]
        description: DescriptionArgs,
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete a post
    Delete {
        id: i64,
        #[command(flatten)]
        confirm: ConfirmArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderAction {
    /// List orders
    List {
        /// Filter by customer or seller name
        #[arg(long)]
        search: Option<String>,
        /// Only orders placed on this day (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Order detail with products and quantities
    Show { id: i64 },
}

#[derive(Subcommand, Debug)]
pub enum PaymentCommand {
    /// Show balances for a seller
    Show { seller_id: String },
    /// Pay a seller after OTP verification
    Pay {
        seller_id: String,
        /// Amount in rupees; defaults to the full payable balance
        #[arg(long)]
        amount: Option<f64>,
        /// OTP read from the seller; prompted for when omitted
        #[arg(long)]
        otp: Option<String>,
    },
    /// Record money received from a seller
    Receive {
        seller_id: String,
        /// Amount in rupees; defaults to the full receivable balance
        #[arg(long)]
        amount: Option<f64>,
    },
}
