//! End-to-end reconciliation against a real SQLite store
//!
//! Exercises the full path: seed catalog, insert miscategorized venues,
//! reconcile, verify the migrated state, and confirm a second run is a
//! no-op.

use foodmap_domain::traits::PlaceStore;
use foodmap_domain::{Category, NewVenue};
use foodmap_reconciler::{Reconciler, ReconcilerConfig};
use foodmap_store::SqliteStore;

fn seeded_store() -> SqliteStore {
    let mut store = SqliteStore::new(":memory:").unwrap();
    for category in Category::ALL {
        store.seed_category(&category.label()).unwrap();
    }
    store
}

fn insert(store: &mut SqliteStore, name: &str, description: Option<&str>, stored: Category) {
    store
        .insert_venue(&NewVenue {
            name: name.to_string(),
            description: description.map(String::from),
            lat: 10.77,
            lon: 106.69,
            primary_category: stored.id(),
            categories: vec![stored.id()],
        })
        .unwrap();
}

#[test]
fn test_full_reconcile_cycle() {
    let mut store = seeded_store();
    insert(&mut store, "Bún Chả Hà Nội", None, Category::Cafe);
    insert(&mut store, "ABC Cafe", None, Category::Restaurant);
    insert(&mut store, "Phở Bò 24", None, Category::Vietnamese);

    let reconciler = Reconciler::new(ReconcilerConfig::default());
    let report = reconciler.run(&mut store).unwrap();

    // Two venues were wrong, one was already correct.
    assert_eq!(report.fixed, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.failed, 0);

    let venues = store.venues().unwrap();
    assert_eq!(venues[0].primary_category, Category::Vietnamese.id());
    assert_eq!(
        store.venue_categories(venues[0].id).unwrap(),
        vec![Category::Vietnamese.id()]
    );
    assert_eq!(venues[1].primary_category, Category::Cafe.id());

    // The diff listing resolves catalog names for the operator.
    let rendered = report.render(&store.categories().unwrap());
    assert!(rendered.contains("Bún Chả Hà Nội"));
    assert!(rendered.contains("[Cafe] -> [Vietnamese]"));
}

#[test]
fn test_second_run_fixes_nothing() {
    let mut store = seeded_store();
    insert(&mut store, "Chè Thái Cô Ba", None, Category::Vietnamese);
    insert(&mut store, "Nhà hàng Hải Sản Biển Đông", None, Category::Restaurant);

    let reconciler = Reconciler::new(ReconcilerConfig::default());
    let first = reconciler.run(&mut store).unwrap();
    assert_eq!(first.fixed, 2);

    let second = reconciler.run(&mut store).unwrap();
    assert_eq!(second.fixed, 0);
    assert_eq!(second.skipped, 2);
    assert!(second.diffs.is_empty());
}

#[test]
fn test_dry_run_leaves_database_untouched() {
    let mut store = seeded_store();
    insert(&mut store, "Bún Chả Hà Nội", None, Category::Cafe);

    let dry = Reconciler::new(ReconcilerConfig::dry_run());
    let report = dry.run(&mut store).unwrap();
    assert_eq!(report.fixed, 1);

    // Nothing was written: a wet run still finds the same work.
    let wet = Reconciler::new(ReconcilerConfig::default());
    let wet_report = wet.run(&mut store).unwrap();
    assert_eq!(wet_report.fixed, 1);
    assert_eq!(wet_report.diffs, report.diffs);
}

#[test]
fn test_on_disk_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foodmap.db");

    {
        let mut store = SqliteStore::new(&path).unwrap();
        for category in Category::ALL {
            store.seed_category(&category.label()).unwrap();
        }
        insert(&mut store, "Tiệm bánh ngọt Anh Hòa", None, Category::Restaurant);
        Reconciler::default_config().run(&mut store).unwrap();
    }

    let store = SqliteStore::new(&path).unwrap();
    let venues = store.venues().unwrap();
    assert_eq!(venues[0].primary_category, Category::Dessert.id());
}
