use std::sync::Arc;

use anyhow::Result;
use masthead_core::{
    Catalog,
    application::ports::time::Clock,
    config::CatalogConfig,
    infrastructure::{telemetry::init_tracing, time::SystemClock},
};

fn main() {
    if let Err(err) = bootstrap() {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

fn bootstrap() -> Result<()> {
    init_tracing(&CatalogConfig::log_filter_from_env());
    let config = CatalogConfig::from_env()?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let mut catalog = Catalog::with_config(clock, &config);
    seed(&mut catalog)?;
    report(&catalog)?;
    Ok(())
}

fn seed(catalog: &mut Catalog) -> Result<()> {
    let ada = catalog.create_author("Ada")?;
    let grace = catalog.create_author("Grace")?;
    let weekly = catalog.create_magazine("Tech Weekly", "Tech")?;
    let quarterly = catalog.create_magazine("Prose Quarterly", "Literature")?;

    catalog.add_article(ada, weekly, "Rust vs C++")?;
    catalog.add_article(ada, weekly, "Ownership Explained")?;
    catalog.add_article(ada, weekly, "Lifetimes in Practice")?;
    catalog.add_article(grace, weekly, "Compilers for Everyone")?;
    let essay = catalog.add_article(grace, quarterly, "On Writing Clearly")?;
    catalog.set_article_author(essay, ada)?;
    Ok(())
}

fn report(catalog: &Catalog) -> Result<()> {
    for author in catalog.authors() {
        let topics = catalog.topic_areas(author.id())?.unwrap_or_default();
        tracing::info!(
            author = %author.name(),
            articles = author.articles().len(),
            topics = ?topics,
            "author summary"
        );
    }

    for magazine in catalog.magazines() {
        let contributing: Vec<&str> = catalog
            .contributing_authors(magazine.id())?
            .unwrap_or_default()
            .into_iter()
            .map(|author| author.name().as_str())
            .collect();
        tracing::info!(
            magazine = %magazine.name(),
            category = %magazine.category(),
            titles = ?catalog.article_titles(magazine.id())?,
            contributing = ?contributing,
            "magazine summary"
        );
    }

    match catalog.top_publisher() {
        Some(magazine) => tracing::info!(magazine = %magazine.name(), "top publisher"),
        None => tracing::info!("no magazine has published anything yet"),
    }
    Ok(())
}
