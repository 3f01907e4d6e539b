// tests/support/builders.rs
use std::sync::Arc;

use masthead_core::{
    Catalog,
    config::CatalogConfig,
    domain::{author::AuthorId, magazine::MagazineId},
};

use super::mocks::ManualClock;

pub fn empty_catalog() -> Catalog {
    Catalog::new(Arc::new(ManualClock::new()))
}

/// Catalog plus a handle on its clock, for tests that watch timestamps.
pub fn catalog_with_clock() -> (Catalog, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    let catalog = Catalog::with_config(clock.clone(), &CatalogConfig::default());
    (catalog, clock)
}

/// Writes `count` articles for `author` in `magazine` with distinct titles.
pub fn publish_many(
    catalog: &mut Catalog,
    author: AuthorId,
    magazine: MagazineId,
    count: usize,
) {
    let prefix = catalog.magazine(magazine).unwrap().name().as_str().to_owned();
    for _ in 0..count {
        let title = format!("{prefix} piece {}", catalog.articles().count() + 1);
        catalog.add_article(author, magazine, title).unwrap();
    }
}
