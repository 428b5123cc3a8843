//! # Basic Catalog Example
//!
//! This example demonstrates the full catalog flow:
//! - Connecting and migrating the schema
//! - Signing in with a verified identity profile
//! - Creating categories and items
//! - Browsing and the JSON feed
//! - Owner-checked edits and deletes
//!
//! Requires a running PostgreSQL with a `curio` database.

use curio::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("🚀 Curio Basic Catalog Example");
    println!("==============================");

    // 1. Database Setup
    let db_config = DatabaseConfig::new(
        "localhost".to_string(), 5432, "curio".to_string(),
        "postgres".to_string(), "password".to_string(),
        1, 5, 30, 600, 3600,
    );
    let config = AppConfig {
        database: db_config,
        item_cache: CacheConfig::new(100, 30),
        directory: DirectoryConfig::new(100),
    };

    let curio = Curio::new(config).await?;
    curio.migrate(true).await?;
    curio.health_check().await?;
    println!("✅ Database connected and migrated");

    // 2. Sign in (the OAuth token exchange happens in your web layer;
    //    the profile below is what the provider hands back)
    println!("\n👤 Signing In");
    println!("-------------");

    let mut session = Session::new();
    let state = session.issue_state_token().to_string();
    println!("Issued anti-forgery state token: {state}");

    let profile = UserProfile::new("Ada Lovelace", "ada@example.com")
        .with_picture("https://example.com/ada.png");
    let user = curio.directory().sign_in(&mut session, profile).await?;
    println!("✅ Signed in as {} (user id {})", user.name, user.id);

    // Second sign-in with the same email resolves the same account
    let again = curio
        .directory()
        .sign_in(&mut Session::new(), UserProfile::new("Ada Lovelace", "ada@example.com"))
        .await?;
    assert_eq!(again.id, user.id);
    println!("✅ Repeat sign-in resolved the existing account");

    // 3. Build a small catalog
    println!("\n📦 Building the Catalog");
    println!("-----------------------");

    let current = curio.directory().current_user(&session).await?;
    let hockey = curio.catalog().add_category(current.as_ref(), "Hockey").await?;
    let chess = curio.catalog().add_category(current.as_ref(), "Chess").await?;

    let stick = curio
        .catalog()
        .add_item(
            current.as_ref(),
            ItemDraft::new("Stick", hockey.id).with_description("A hockey stick"),
        )
        .await?;
    curio
        .catalog()
        .add_item(
            current.as_ref(),
            ItemDraft::new("Board", chess.id).with_description("Tournament board"),
        )
        .await?;
    println!("✅ Created {} categories, {} items", 2, 2);

    // 4. Browse
    println!("\n🔎 Browsing");
    println!("-----------");

    for category in curio.catalog().categories().await? {
        println!("  • {}", category.name);
    }

    let (category, items) = curio.catalog().items_in("Hockey").await?;
    println!("Category '{}' has {} item(s)", category.name, items.len());

    let found = curio.catalog().item_in_category("Hockey", "Stick").await?;
    println!("Found '{}' by name", found.name);

    // Cached read path: the second fetch is served from the item cache
    let _ = curio.catalog().item_by_id(stick.id).await?;
    let _ = curio.catalog().item_by_id(stick.id).await?;

    // 5. JSON feed
    println!("\n📋 JSON Feed");
    println!("------------");

    for entry in curio.catalog().feed().await? {
        println!("  {}", entry.to_json()?);
    }

    // 6. Edit and delete (owner checks apply)
    println!("\n✏️  Editing");
    println!("----------");

    let edited = curio
        .catalog()
        .edit_item(
            current.as_ref(),
            stick.id,
            ItemDraft::new("Composite Stick", hockey.id).with_description("Carbon fiber"),
        )
        .await?;
    println!("Edited item now named '{}' (updated: {:?})", edited.name, edited.updated);

    curio.catalog().delete_item(current.as_ref(), stick.id).await?;
    println!("Deleted item {}", stick.id);

    // 7. Sign out
    curio.directory().sign_out(&mut session);
    println!("\n👋 Signed out. Done!");

    Ok(())
}
