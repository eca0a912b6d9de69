//! CRM CLI
//!
//! Command-line client for the CRM API: list, filter, create, edit and
//! delete products and users, and mint development tokens.

use axum_helpers::{JwtAuth, JwtConfig};
use clap::{Parser, Subcommand};
use core_config::FromEnv;
use core_config::tracing::install_color_eyre;
use domain_products::{CreateProduct, ProductQuery, UpdateProduct, query};
use domain_users::{CreateUser, Role, UpdateUser};
use eyre::{Result, WrapErr};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod client;
mod output;

use client::CrmClient;

#[derive(Parser)]
#[command(name = "crm-cli")]
#[command(about = "Manage CRM products and users from the command line")]
struct Cli {
    /// Base URL of the CRM API
    #[arg(long, env = "CRM_API_URL", default_value = "http://localhost:5000", global = true)]
    api_url: String,

    /// Bearer token sent with every request
    #[arg(long, env = "CRM_TOKEN", global = true, hide_env_values = true)]
    token: Option<String>,

    /// Print raw JSON responses instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Product catalogue operations
    #[command(subcommand)]
    Products(ProductCommand),

    /// User account operations
    #[command(subcommand)]
    Users(UserCommand),

    /// Mint a development token signed with JWT_SECRET
    Token {
        /// Subject claim, e.g. an email address
        #[arg(short, long)]
        subject: String,

        /// Role claim
        #[arg(short, long, default_value = "admin")]
        role: String,
    },
}

#[derive(Subcommand)]
enum ProductCommand {
    /// List products
    List {
        /// Keep only this category (case-insensitive)
        #[arg(short, long)]
        category: Option<String>,

        /// Keep products whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Sort key: name, price, price-desc or stock
        #[arg(long)]
        sort: Option<String>,

        /// Fetch everything once and filter/sort locally
        #[arg(long)]
        local: bool,
    },

    /// Show one product
    Get { id: String },

    /// Create a product
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long, allow_hyphen_values = true)]
        price: f64,
        #[arg(long)]
        category: String,
        #[arg(long, allow_hyphen_values = true)]
        stock: i64,
    },

    /// Update the given fields of a product
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        price: Option<f64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        stock: Option<i64>,
    },

    /// Delete a product
    Delete { id: String },
}

#[derive(Subcommand)]
enum UserCommand {
    /// List users
    List,

    /// Show one user
    Get { id: String },

    /// Create a user
    Create {
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        /// user or admin (default user)
        #[arg(long)]
        role: Option<Role>,
    },

    /// Update the given fields of a user
    Update {
        id: String,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        role: Option<Role>,
    },

    /// Delete a user
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    // Logs go to stderr so stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let client = CrmClient::new(&cli.api_url, cli.token.clone());

    match cli.command {
        Commands::Products(command) => run_products(&client, command, cli.json).await,
        Commands::Users(command) => run_users(&client, command, cli.json).await,
        Commands::Token { subject, role } => {
            let config = JwtConfig::from_env().wrap_err("JWT_SECRET must be set to mint tokens")?;
            let token = JwtAuth::new(&config).issue_token(&subject, &role)?;
            info!(%subject, %role, ttl_secs = config.ttl_secs, "Issued token");
            println!("{token}");
            Ok(())
        }
    }
}

async fn run_products(client: &CrmClient, command: ProductCommand, json: bool) -> Result<()> {
    match command {
        ProductCommand::List {
            category,
            search,
            sort,
            local,
        } => {
            let wanted = ProductQuery {
                category,
                search,
                sort,
            };
            let mut body = if local {
                client.list_products(&ProductQuery::default()).await?
            } else {
                client.list_products(&wanted).await?
            };
            if local {
                body.products = query::apply(&body.products, &wanted);
                body.total = body.products.len();
            }

            if json {
                print_json(&body)?;
            } else {
                print!("{}", output::products_table(&body.products));
                println!("{} product(s)", body.total);
            }
        }
        ProductCommand::Get { id } => print_json(&client.get_product(&id).await?)?,
        ProductCommand::Create {
            name,
            description,
            price,
            category,
            stock,
        } => {
            let input = CreateProduct {
                name: Some(name),
                description: Some(description),
                price: Some(price),
                category: Some(category),
                stock: Some(stock),
            };
            print_json(&client.create_product(&input).await?)?;
        }
        ProductCommand::Update {
            id,
            name,
            description,
            price,
            category,
            stock,
        } => {
            let input = UpdateProduct {
                name,
                description,
                price,
                category,
                stock,
            };
            print_json(&client.update_product(&id, &input).await?)?;
        }
        ProductCommand::Delete { id } => print_json(&client.delete_product(&id).await?)?,
    }
    Ok(())
}

async fn run_users(client: &CrmClient, command: UserCommand, json: bool) -> Result<()> {
    match command {
        UserCommand::List => {
            let body = client.list_users().await?;
            if json {
                print_json(&body)?;
            } else {
                print!("{}", output::users_table(&body.users));
                println!("{} user(s)", body.total);
            }
        }
        UserCommand::Get { id } => print_json(&client.get_user(&id).await?)?,
        UserCommand::Create {
            username,
            email,
            role,
        } => {
            let input = CreateUser {
                username: Some(username),
                email: Some(email),
                role,
            };
            print_json(&client.create_user(&input).await?)?;
        }
        UserCommand::Update {
            id,
            username,
            email,
            role,
        } => {
            let input = UpdateUser {
                username,
                email,
                role,
            };
            print_json(&client.update_user(&id, &input).await?)?;
        }
        UserCommand::Delete { id } => print_json(&client.delete_user(&id).await?)?,
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
