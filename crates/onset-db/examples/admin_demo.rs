//! Walkthrough of an admin session against a throwaway database.
//!
//! Run with: `cargo run -p onset-db --example admin_demo`

use onset_core::{AccessGate, ImageRef, LoadOutcome, ProductDraft, SeedReason};
use onset_db::{StoreFactory, setup_store};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let dir = tempfile::tempdir()?;
    let pool = setup_store(&dir.path().join("catalog.db")).await?;
    let storefront = StoreFactory::build_storefront(pool, AccessGate::from_secret("OnsetAdmin123"));

    match storefront.load_catalog().await {
        LoadOutcome::Replaced { count } => println!("loaded {count} live products"),
        LoadOutcome::SeedRetained { reason } => match reason {
            SeedReason::EmptyRemote => println!("remote catalog empty; showing seed products"),
            SeedReason::StoreUnavailable(msg) => println!("store unreachable ({msg}); showing seed products"),
        },
    }

    storefront.submit_credential("OnsetAdmin123")?;

    let added = storefront
        .add_product(ProductDraft {
            name: "Onset Beanie".to_string(),
            price: "9,500".to_string(),
            image: Some(ImageRef::Url("/products/beanie.png".to_string())),
        })
        .await?;
    println!("published {} as {}", added.name, added.id);

    for product in storefront.products() {
        println!("  {:<16} {:>7} MWK  [{}]", product.name, product.price, product.id);
    }

    storefront.delete_product(&added.id).await?;
    println!("retired {} again; {} products remain", added.name, storefront.products().len());

    Ok(())
}
