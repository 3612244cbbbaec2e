//! homefront - engagement CLI for real-estate listings
//!
//! Shortlist favorites and comparisons locally, browse listings through
//! the site API, and build share links.

mod api;
mod commands;
mod config;
mod engagement;
mod models;
mod notify;
mod share;
mod shortlist;
mod store;
mod validation;

use clap::{Parser, Subcommand};

use engagement::ActionKind;
use models::{SearchFilters, TransactionType};
use share::SharePlatform;
use validation::ContactForm;

#[derive(Parser)]
#[command(name = "homefront")]
#[command(author, version, about = "A local-first engagement engine for real-estate listings")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize homefront (first-time setup)
    Init,

    /// Favorites shortlist operations
    Favorites {
        #[command(subcommand)]
        operation: ShortlistOperationCli,
    },

    /// Comparison shortlist operations (up to 4 properties)
    Compare {
        #[command(subcommand)]
        operation: ShortlistOperationCli,
    },

    /// Search listings
    Search {
        /// Transaction type: sale, rent, or lease
        #[arg(long = "for")]
        transaction_type: Option<String>,

        /// Property type code
        #[arg(short = 't', long = "type")]
        property_type: Option<String>,

        /// Location name or city
        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        /// Minimum number of bedrooms
        #[arg(short, long)]
        bedrooms: Option<u32>,

        /// Maximum number of results
        #[arg(long)]
        limit: Option<u32>,

        #[arg(long)]
        offset: Option<u32>,
    },

    /// Show one listing by id
    Property {
        id: i64,
    },

    /// List available locations
    Locations,

    /// List available property types
    Types,

    /// Show featured listings
    Featured {
        /// Maximum number of results
        #[arg(short, long, default_value_t = 6)]
        limit: u32,
    },

    /// Build an outbound share link
    Share {
        /// Platform: facebook, twitter, whatsapp, or email
        platform: String,

        /// Link to share
        #[arg(short, long)]
        url: String,

        /// Accompanying text (tweet text, message, email subject)
        #[arg(short, long, default_value = "")]
        text: String,
    },

    /// Validate a contact form before submission
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long, default_value = "")]
        message: String,
    },
}

#[derive(Subcommand)]
enum ShortlistOperationCli {
    /// Flip membership of a property
    Toggle {
        /// Property id
        id: String,
    },

    /// List members in insertion order
    List,

    /// Remove every member
    Clear,
}

fn shortlist_command(kind: ActionKind, operation: ShortlistOperationCli) -> anyhow::Result<()> {
    match operation {
        ShortlistOperationCli::Toggle { id } => commands::toggle(kind, &id),
        ShortlistOperationCli::List => commands::list(kind),
        ShortlistOperationCli::Clear => commands::clear(kind),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            commands::init()?;
        }
        Commands::Favorites { operation } => {
            shortlist_command(ActionKind::Favorite, operation)?;
        }
        Commands::Compare { operation } => {
            shortlist_command(ActionKind::Compare, operation)?;
        }
        Commands::Search {
            transaction_type,
            property_type,
            location,
            min_price,
            max_price,
            bedrooms,
            limit,
            offset,
        } => {
            let transaction_type = match transaction_type {
                Some(t) => Some(t.parse::<TransactionType>().map_err(|e| anyhow::anyhow!(e))?),
                None => None,
            };
            let filters = SearchFilters {
                transaction_type,
                property_type,
                location,
                min_price,
                max_price,
                bedrooms,
                limit,
                offset,
            };
            commands::search(filters).await?;
        }
        Commands::Property { id } => {
            commands::show_property(id).await?;
        }
        Commands::Locations => {
            commands::locations().await?;
        }
        Commands::Types => {
            commands::property_types().await?;
        }
        Commands::Featured { limit } => {
            commands::featured(limit).await?;
        }
        Commands::Share { platform, url, text } => {
            let platform = platform
                .parse::<SharePlatform>()
                .map_err(|e| anyhow::anyhow!(e))?;
            commands::share(platform, &url, &text)?;
        }
        Commands::Contact {
            name,
            email,
            phone,
            message,
        } => {
            commands::contact(ContactForm {
                name,
                email,
                phone,
                message,
            })?;
        }
    }

    Ok(())
}
