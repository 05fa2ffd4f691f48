//! Integration tests for foodmap-store
//!
//! These tests verify the full catalog + venue + association cycle against
//! a real SQLite database.

use foodmap_domain::traits::PlaceStore;
use foodmap_domain::{Category, NewVenue};
use foodmap_store::SqliteStore;

fn seeded_store() -> SqliteStore {
    let mut store = SqliteStore::new(":memory:").unwrap();
    for category in Category::ALL {
        store.seed_category(&category.label()).unwrap();
    }
    store
}

fn venue(name: &str, categories: &[Category]) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        description: None,
        lat: 10.77,
        lon: 106.69,
        primary_category: categories[0].id(),
        categories: categories.iter().map(Category::id).collect(),
    }
}

#[test]
fn test_store_initialization() {
    let store = SqliteStore::new(":memory:");
    assert!(store.is_ok(), "Store should initialize successfully");
}

#[test]
fn test_catalog_round_trip() {
    let store = seeded_store();
    let catalog = store.categories().unwrap();

    assert_eq!(catalog.len(), Category::ALL.len());
    assert_eq!(catalog[0].id, Category::Restaurant.id());
    assert_eq!(catalog[0].name, "Restaurant");
    assert_eq!(catalog[1].name, "Vietnamese");
}

#[test]
fn test_insert_and_list_venues() {
    let mut store = seeded_store();

    let id = store
        .insert_venue(&venue("Bún Chả Hà Nội", &[Category::Vietnamese]))
        .unwrap();
    store
        .insert_venue(&venue("ABC Cafe", &[Category::Cafe]))
        .unwrap();

    let venues = store.venues().unwrap();
    assert_eq!(venues.len(), 2);
    assert_eq!(venues[0].id, id);
    assert_eq!(venues[0].name, "Bún Chả Hà Nội");
    assert_eq!(venues[0].primary_category, Category::Vietnamese.id());
    assert_eq!(venues[0].description, None);
}

#[test]
fn test_insert_writes_association_rows() {
    let mut store = seeded_store();

    let id = store
        .insert_venue(&venue("Gogi House", &[Category::Korean, Category::Bbq]))
        .unwrap();

    assert_eq!(
        store.venue_categories(id).unwrap(),
        vec![Category::Korean.id(), Category::Bbq.id()]
    );
}

#[test]
fn test_insert_without_categories_is_refused() {
    let mut store = seeded_store();
    let mut payload = venue("Quán Test", &[Category::Vietnamese]);
    payload.categories.clear();

    assert!(store.insert_venue(&payload).is_err());
    assert!(store.venues().unwrap().is_empty());
}

#[test]
fn test_replace_updates_associations_and_primary() {
    let mut store = seeded_store();

    let id = store
        .insert_venue(&venue("Bún Chả Hà Nội", &[Category::Cafe]))
        .unwrap();

    store
        .replace_venue_categories(id, &[Category::Vietnamese.id()])
        .unwrap();

    assert_eq!(
        store.venue_categories(id).unwrap(),
        vec![Category::Vietnamese.id()]
    );
    let stored = store.venues().unwrap().remove(0);
    assert_eq!(stored.primary_category, Category::Vietnamese.id());
}

#[test]
fn test_replace_preserves_target_order() {
    let mut store = seeded_store();

    let id = store
        .insert_venue(&venue("Sushi Hokkaido", &[Category::Restaurant]))
        .unwrap();

    let target = vec![Category::Vietnamese.id(), Category::Japanese.id()];
    store.replace_venue_categories(id, &target).unwrap();

    assert_eq!(store.venue_categories(id).unwrap(), target);
    // Primary is the first element of the new set, not the old primary.
    let stored = store.venues().unwrap().remove(0);
    assert_eq!(stored.primary_category, Category::Vietnamese.id());
}

#[test]
fn test_replace_unknown_venue_fails() {
    let mut store = seeded_store();
    let result = store.replace_venue_categories(
        foodmap_domain::VenueId::new(999),
        &[Category::Vietnamese.id()],
    );
    assert!(result.is_err());
}

#[test]
fn test_venue_categories_empty_when_no_rows() {
    let store = seeded_store();
    assert!(store
        .venue_categories(foodmap_domain::VenueId::new(1))
        .unwrap()
        .is_empty());
}

#[test]
fn test_on_disk_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("foodmap.db");

    {
        let mut store = SqliteStore::new(&path).unwrap();
        for category in Category::ALL {
            store.seed_category(&category.label()).unwrap();
        }
        store
            .insert_venue(&venue("Phở Bò 24", &[Category::Vietnamese]))
            .unwrap();
    }

    // Reopen and verify persistence.
    let store = SqliteStore::new(&path).unwrap();
    assert_eq!(store.venues().unwrap().len(), 1);
    assert_eq!(store.categories().unwrap().len(), Category::ALL.len());
}
