//! Integration tests for full-text search and the substring fallback

use wain_core::{Database, Place, PlacePage, PriceLevel, TtlCache};

fn place(id: &str, name_ar: &str, name_en: &str, category: &str, rating: Option<f64>) -> Place {
    Place {
        id: id.to_string(),
        name_ar: name_ar.to_string(),
        name_en: name_en.to_string(),
        category: category.to_string(),
        category_en: String::new(),
        neighborhood: "حي العليا".to_string(),
        neighborhood_en: "Olaya".to_string(),
        description_ar: None,
        district: None,
        rating,
        price_level: Some(PriceLevel::Moderate),
        price_range: None,
        trending: false,
        is_new: false,
        is_free: false,
        lat: None,
        lng: None,
        maps_url: None,
        opening_hours: None,
        tags: Vec::new(),
        perfect_for: Vec::new(),
        audience: Vec::new(),
        sources: Vec::new(),
    }
}

fn seeded_db() -> Database {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();
    db.insert_place(&place(
        "a",
        "كافيه بلند",
        "Boulevard Cafe",
        "كافيه",
        Some(4.8),
    ))
    .unwrap();
    db.insert_place(&place("b", "مطعم النافورة", "Fountain", "مطعم", Some(4.2)))
        .unwrap();
    db.insert_place(&place("c", "كوفي زمان", "Zaman Coffee", "كافيه", Some(3.0)))
        .unwrap();
    db
}

#[test]
fn test_empty_query_returns_nothing() {
    let db = seeded_db();
    let (places, total) = db.search_places("   ", 20, 0).unwrap();
    assert!(places.is_empty());
    assert_eq!(total, 0);
}

#[test]
fn test_fts_search_ranks_and_counts() {
    let db = seeded_db();
    let (places, total) = db.search_places("كافيه", 10, 0).unwrap();

    assert_eq!(total, 2);
    let ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
    // "a" matches in name and category, so it outranks "c"
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_hamza_insensitive_query() {
    let db = seeded_db();
    db.insert_place(&place("d", "مطعم احمد", "Ahmad", "مطعم", Some(4.0)))
        .unwrap();

    let (places, total) = db.search_places("أحمد", 10, 0).unwrap();
    assert_eq!(total, 1);
    assert_eq!(places[0].id, "d");
}

#[test]
fn test_multi_word_query_requires_all_words() {
    let db = seeded_db();
    let (_, total) = db.search_places("كافيه بلند", 10, 0).unwrap();
    assert_eq!(total, 1);

    let (places, total) = db.search_places("كافيه قصر", 10, 0).unwrap();
    // No single place carries both words in its indexed text; the fallback
    // substring scan over the whole phrase finds nothing either
    assert_eq!(total, 0);
    assert!(places.is_empty());
}

#[test]
fn test_pagination_invariant() {
    let db = seeded_db();
    let (page1, total) = db.search_places("كافيه", 1, 0).unwrap();
    assert_eq!(total, 2);
    assert_eq!(page1.len(), 1);

    let (page2, total) = db.search_places("كافيه", 1, 1).unwrap();
    assert_eq!(total, 2);
    assert_eq!(page2.len(), 1);
    assert_ne!(page1[0].id, page2[0].id);

    let (beyond, total) = db.search_places("كافيه", 1, 2).unwrap();
    assert_eq!(total, 2);
    assert!(beyond.is_empty());

    let envelope = PlacePage::new(page2, total, 2, 1);
    assert!(!envelope.has_next);
}

#[test]
fn test_fallback_matches_substring_in_english_name() {
    let db = seeded_db();
    let mut cafe = place("x", "مقهى الاستثناء", "Café Exception", "كافيه", Some(4.1));
    cafe.description_ar = Some("مقهى مميز".to_string());
    db.insert_place(&cafe).unwrap();

    // "afé" is not a token prefix anywhere, so FTS finds nothing and the
    // substring scan recovers the place
    let (places, total) = db.search_places("afé", 10, 0).unwrap();
    assert_eq!(total, 1);
    assert_eq!(places[0].id, "x");
}

#[test]
fn test_fallback_single_arabic_character() {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();
    let mut cafe = place("x", "مقهى الاستثناء", "Cafe Exception", "كافيه", Some(4.1));
    cafe.description_ar = Some("مقهى هادئ".to_string());
    db.insert_place(&cafe).unwrap();

    // No indexed token starts with "ق", but the name contains it
    let (places, total) = db.search_places("ق", 10, 0).unwrap();
    assert_eq!(total, 1);
    assert_eq!(places[0].id, "x");
}

#[test]
fn test_fallback_orders_by_rating() {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();
    db.insert_place(&place("low", "مقهى واحد", "One", "كافيه", Some(3.0)))
        .unwrap();
    db.insert_place(&place("high", "مقهى اثنين", "Two", "كافيه", Some(4.9)))
        .unwrap();

    let (places, total) = db.search_places("ق", 10, 0).unwrap();
    assert_eq!(total, 2);
    assert_eq!(places[0].id, "high");
    assert_eq!(places[1].id, "low");
}

#[test]
fn test_quote_in_query_is_not_syntax() {
    let db = seeded_db();
    db.insert_place(&place(
        "q",
        "جو",
        "Joe's \"Corner\" Diner",
        "مطعم",
        Some(4.0),
    ))
    .unwrap();

    // Must not produce an FTS5 syntax error, and must find the place whose
    // name contains the quoted word
    let (places, total) = db.search_places("\"corner\"", 10, 0).unwrap();
    assert_eq!(total, 1);
    assert_eq!(places[0].id, "q");
}

#[test]
fn test_limit_is_clamped() {
    let db = seeded_db();
    // limit 0 clamps to 1 rather than failing
    let (places, total) = db.search_places("كافيه", 0, 0).unwrap();
    assert_eq!(total, 2);
    assert_eq!(places.len(), 1);
}

#[test]
fn test_cached_search_returns_same_page() {
    let db = seeded_db();
    let cache = TtlCache::new();

    let (first, total_first) = db.search_places_cached(&cache, "كافيه", 10, 0).unwrap();
    assert_eq!(total_first, 2);

    // Mutate the catalog; the cached page must still be served
    db.insert_place(&place("z", "كافيه جديد", "New Cafe", "كافيه", Some(5.0)))
        .unwrap();
    let (second, total_second) = db.search_places_cached(&cache, "كافيه", 10, 0).unwrap();
    assert_eq!(total_second, 2);
    assert_eq!(
        first.iter().map(|p| &p.id).collect::<Vec<_>>(),
        second.iter().map(|p| &p.id).collect::<Vec<_>>()
    );
}
