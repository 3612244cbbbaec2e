//! CLI commands for homefront

use anyhow::{bail, Context, Result};

use crate::api::ApiClient;
use crate::config::{load_config, save_config, Config, HomefrontPaths};
use crate::engagement::{ActionKind, Engagement};
use crate::models::SearchFilters;
use crate::share::{share_url, SharePlatform};
use crate::shortlist::PropertyId;
use crate::store::FileStore;
use crate::validation::{normalize_phone, validate_contact, ContactForm};

/// Initialize homefront for first-time setup
pub fn init() -> Result<()> {
    let paths = HomefrontPaths::new()?;

    if paths.is_initialized() {
        println!("Homefront is already initialized at {}", paths.root.display());
        return Ok(());
    }

    println!("Initializing homefront at {}...", paths.root.display());

    paths.ensure_dirs()?;
    println!("  Created profile directory");

    let config = Config::default();
    save_config(&paths, &config)?;
    println!("  Created config.toml");

    println!();
    println!("Homefront initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  homefront favorites toggle <id>   Shortlist a property");
    println!("  homefront search                  Search listings");
    println!("  homefront featured                Show featured listings");

    Ok(())
}

/// Toggle a property on the favorites or comparison shortlist
pub fn toggle(kind: ActionKind, id: &str) -> Result<()> {
    let paths = HomefrontPaths::new()?;
    ensure_initialized(&paths)?;

    let mut engagement = open_engagement(&paths);
    let id = PropertyId::from(id);

    let badge = match kind {
        ActionKind::Favorite => {
            engagement.toggle_favorite(&id);
            engagement.favorites_badge()
        }
        ActionKind::Compare => {
            engagement.toggle_compare(&id);
            engagement.compare_badge()
        }
    };

    for notice in engagement.notices().active() {
        println!("[{}] {}", notice.level, notice.message);
    }
    match badge.text() {
        Some(text) => println!("Badge: {}", text),
        None => println!("Badge: hidden"),
    }

    Ok(())
}

/// List shortlist members in insertion order
pub fn list(kind: ActionKind) -> Result<()> {
    let paths = HomefrontPaths::new()?;
    ensure_initialized(&paths)?;

    let engagement = open_engagement(&paths);
    let members = match kind {
        ActionKind::Favorite => engagement.favorites().members(),
        ActionKind::Compare => engagement.comparison().members(),
    };

    if members.is_empty() {
        println!("No {} properties yet.", kind);
        return Ok(());
    }

    for (index, id) in members.iter().enumerate() {
        println!("{:>3}. {}", index + 1, id);
    }
    println!();
    println!("{} properties", members.len());

    Ok(())
}

/// Drop every member of a shortlist
pub fn clear(kind: ActionKind) -> Result<()> {
    let paths = HomefrontPaths::new()?;
    ensure_initialized(&paths)?;

    let mut engagement = open_engagement(&paths);
    match kind {
        ActionKind::Favorite => engagement.favorites_mut().clear(),
        ActionKind::Compare => engagement.comparison_mut().clear(),
    }
    println!("Cleared {} properties.", kind);

    Ok(())
}

/// Search listings through the site API
pub async fn search(filters: SearchFilters) -> Result<()> {
    let client = api_client()?;
    let properties = client.search_properties(&filters).await?;

    if properties.is_empty() {
        println!("No properties matched.");
        return Ok(());
    }

    print_summaries(&properties);
    Ok(())
}

/// Show one listing, with its local shortlist status
pub async fn show_property(id: i64) -> Result<()> {
    let paths = HomefrontPaths::new()?;
    let client = api_client()?;
    let property = client.property(id).await?;

    println!("{}", property.name);
    println!("{}", "=".repeat(50));
    println!("Price:    {}", property.price_label());
    if let Some(city) = &property.city {
        println!("City:     {}", city);
    }
    if let Some(address) = &property.address {
        println!("Address:  {}", address);
    }
    println!("Beds:     {}", property.bedrooms);
    println!("Baths:    {}", property.bathrooms);
    if let Some(property_type) = &property.property_type {
        println!("Type:     {}", property_type);
    }
    println!("Deal:     {}", property.transaction_type);
    if !property.features.is_empty() {
        println!("Features: {}", property.features.join(", "));
    }
    if let Some(agent) = &property.agent {
        let phone = agent.phone.as_deref().unwrap_or("-");
        println!("Agent:    {} ({})", agent.name, phone);
    }

    if paths.is_initialized() {
        let engagement = open_engagement(&paths);
        let id = PropertyId::from(id);
        println!();
        println!(
            "Favorited: {}   In comparison: {}",
            yes_no(engagement.favorites().contains(&id)),
            yes_no(engagement.comparison().contains(&id))
        );
    }

    Ok(())
}

/// List available locations
pub async fn locations() -> Result<()> {
    let client = api_client()?;
    let locations = client.locations().await?;

    for location in locations {
        println!("{:<24} {}", location.name, location.code);
    }
    Ok(())
}

/// List available property types
pub async fn property_types() -> Result<()> {
    let client = api_client()?;
    let types = client.property_types().await?;

    for property_type in types {
        println!("{:<24} {}", property_type.name, property_type.code);
    }
    Ok(())
}

/// Show featured listings
pub async fn featured(limit: u32) -> Result<()> {
    let client = api_client()?;
    let properties = client.featured_properties(limit).await?;

    if properties.is_empty() {
        println!("No featured properties.");
        return Ok(());
    }

    print_summaries(&properties);
    Ok(())
}

/// Print an outbound share link
pub fn share(platform: SharePlatform, url: &str, text: &str) -> Result<()> {
    println!("{}", share_url(platform, url, text));
    Ok(())
}

/// Validate a contact form the way the site does before submitting
pub fn contact(form: ContactForm) -> Result<()> {
    let errors = validate_contact(&form);

    if errors.is_empty() {
        println!("Form is valid.");
        println!("Phone normalized to {}", normalize_phone(&form.phone));
        return Ok(());
    }

    for error in &errors {
        println!("{} {}", error.field, error.problem);
    }
    bail!("{} field(s) failed validation", errors.len());
}

fn ensure_initialized(paths: &HomefrontPaths) -> Result<()> {
    if !paths.is_initialized() {
        bail!("Homefront is not initialized. Run: homefront init");
    }
    Ok(())
}

fn open_engagement(paths: &HomefrontPaths) -> Engagement<FileStore> {
    Engagement::new(
        FileStore::new(paths.store_file.clone()),
        FileStore::new(paths.store_file.clone()),
    )
}

fn api_client() -> Result<ApiClient> {
    let paths = HomefrontPaths::new()?;
    let config = load_config(&paths).context("Failed to load configuration")?;
    Ok(ApiClient::new(config.api.base_url))
}

fn print_summaries(properties: &[crate::models::PropertySummary]) {
    println!(
        "{:<6} {:<30} {:<14} {:<16} {:<5} {:<5}",
        "ID", "NAME", "PRICE", "CITY", "BEDS", "BATHS"
    );
    println!("{}", "-".repeat(80));

    for property in properties {
        println!(
            "{:<6} {:<30} {:<14} {:<16} {:<5} {:<5}",
            property.id,
            truncate(&property.name, 28),
            property.price_label(),
            truncate(property.city.as_deref().unwrap_or("-"), 14),
            property.bedrooms,
            property.bathrooms
        );
    }
    println!();
    println!("{} properties", properties.len());
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}
