//! `storefront` - command line front end for the storefront client.
//!
//! # Usage
//!
//! ```bash
//! storefront sign-in -e ada@example.com -p secret
//! storefront whoami
//! storefront products --category <id>
//! storefront cart
//! storefront goto /orders
//! storefront logout
//! storefront schema
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use clap::{Parser, Subcommand};

use storefront_client::config::{config_schema, load_config};
use storefront_client::controllers::{CartController, CatalogController, LoginController};
use storefront_client::routes::{dashboard_links, Navigation, Route};
use storefront_client::startup::build_state;
use storefront_client::state::AppState;
use storefront_client::utils::logger::init_logging;

#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about = "Storefront client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the returned token
    SignIn {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and store the returned token
    SignUp {
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Forget the stored token
    Logout,
    /// Show who the stored token belongs to
    Whoami,
    /// List products, optionally filtered by category ids
    Products {
        #[arg(short, long)]
        category: Vec<String>,
    },
    /// Show the signed-in user's cart
    Cart,
    /// Resolve a path the way the navigation shell would
    Goto { path: String },
    /// Print the configuration JSON schema
    Schema,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Commands::Schema = cli.command {
        match config_schema() {
            Ok(schema) => println!("{}", schema),
            Err(e) => {
                eprintln!("Failed to render configuration schema: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = Arc::new(load_config());
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let result = match build_state(config) {
        Ok(state) => run(cli.command, state).await,
        Err(e) => Err(e.to_string()),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Commands, state: AppState) -> Result<(), String> {
    match command {
        Commands::SignIn { email, password } => {
            let mut page = LoginController::new(state.api.clone());
            page.edit(|form| {
                form.email = email;
                form.password = password;
            });
            submit_login(page).await?;
        }
        Commands::SignUp {
            name,
            email,
            password,
        } => {
            let mut page = LoginController::new(state.api.clone());
            page.toggle_mode();
            page.edit(|form| {
                form.name = name;
                form.email = email;
                form.password = password;
            });
            submit_login(page).await?;
        }
        Commands::Logout => {
            state.guard.navigate(Route::Logout);
            println!("Signed out");
        }
        Commands::Whoami => match state.session.auth_data() {
            Some(auth) => {
                let claims = auth.claims;
                println!("{} <{}> ({:?})", claims.name, claims.email, claims.role);
                println!("Session expires at {}", claims.exp);
                for link in dashboard_links(claims.role) {
                    println!("  {:<12} {}", link.label, link.route);
                }
            }
            None => println!("Not signed in"),
        },
        Commands::Products { category } => {
            let mut page = CatalogController::new(state.api.clone());
            if category.is_empty() {
                page.load().await;
            } else {
                for id in &category {
                    page.filter.toggle_category(id);
                }
                page.apply_filter().await;
            }
            if let Some(error) = page.view.error {
                return Err(error);
            }
            for product in &page.products {
                let stock = if product.in_stock() {
                    format!("{} in stock", product.quantity)
                } else {
                    "out of stock".to_string()
                };
                println!("{}  {:<30} {:>10.2}  {}", product.id, product.name, product.price, stock);
            }
        }
        Commands::Cart => {
            if let Navigation::Redirect(to) = state.guard.navigate(Route::Cart) {
                return Err(format!("Sign in first (redirected to {})", to));
            }
            let mut page = CartController::new(state.api.clone());
            page.load().await;
            if let Some(error) = page.view.error {
                return Err(error);
            }
            for line in &page.lines {
                println!(
                    "{}  {:<30} {} x {:.2} = {:.2}",
                    line.id,
                    line.product.name,
                    line.quantity,
                    line.price,
                    line.line_total()
                );
            }
            println!("Subtotal: {:.2}", page.subtotal());
        }
        Commands::Goto { path } => match state.guard.navigate_path(&path) {
            Navigation::Render(route) => println!("render {}", route),
            Navigation::Redirect(route) => println!("redirect {}", route),
        },
        Commands::Schema => {}
    }
    Ok(())
}

async fn submit_login(mut page: LoginController) -> Result<(), String> {
    match page.submit().await {
        Some(route) => {
            println!("Signed in, continue at {}", route);
            Ok(())
        }
        None => Err(page
            .view
            .error
            .unwrap_or_else(|| "Authentication failed".to_string())),
    }
}
