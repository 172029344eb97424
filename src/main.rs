use oglasnik::describe::{AdDraft, DescriptionGenerator, HttpDescriptionGenerator};
use oglasnik::repository::{JsonFileListingRepository, ListingRepository};
use oglasnik::{search, AppConfig, FilterSpec, PageItem};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    info!("🔎 Oglasnik - pretraga oglasa");
    let repository = JsonFileListingRepository::open(&config.data_path).await?;
    info!("Using listing store at {}", repository.path().display());
    let listings = repository.get_all().await?;

    let search_term = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let mut spec = FilterSpec::default().with_search_term(search_term);
    spec.price_currency = config.currency;

    let result = search(&listings, &spec, config.sort, 1, config.page_size);

    println!("{} oglasa pronađeno\n", result.total_count);

    for (i, listing) in result.items.iter().enumerate() {
        println!("{}. {} ({})", i + 1, listing.title, listing.price_label());
        println!("   {} · {}", listing.location, listing.category);
        if let Some(condition) = &listing.condition {
            println!("   Stanje: {}", condition);
        }
        println!("   Postavljeno: {}", listing.posted_date.format("%d.%m.%Y."));
        println!("   ID: {}", listing.id);
        println!();
    }

    let pager: Vec<String> = result
        .page_numbers()
        .into_iter()
        .map(|item| match item {
            PageItem::Page(n) if n == result.current_page => format!("[{}]", n),
            PageItem::Page(n) => n.to_string(),
            PageItem::Ellipsis => "...".to_string(),
        })
        .collect();
    if !pager.is_empty() {
        println!("Strane: {}", pager.join(" "));
    }

    if let (Some(api), Some(top)) = (config.description_api, result.items.first()) {
        let generator = HttpDescriptionGenerator::new(api)?;
        match generator.generate(&AdDraft::from(*top)).await {
            Ok(description) => println!("\nPredlog opisa za \"{}\":\n{}", top.title, description),
            Err(e) => warn!("Description generation failed: {:#}", e),
        }
    }

    Ok(())
}
