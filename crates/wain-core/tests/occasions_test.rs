//! Integration tests for occasion recommendations and the end-to-end
//! search + recommend scenario

use wain_core::{Database, Occasion, Place, TtlCache, WainError};

fn place(id: &str, category: &str, rating: Option<f64>) -> Place {
    Place {
        id: id.to_string(),
        name_ar: format!("مكان {id}"),
        name_en: format!("Place {id}"),
        category: category.to_string(),
        category_en: String::new(),
        neighborhood: "حي الملقا".to_string(),
        neighborhood_en: "Al Malqa".to_string(),
        description_ar: None,
        district: None,
        rating,
        price_level: None,
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

#[test]
fn test_invalid_occasion_is_rejected_before_any_query() {
    let err = "not_a_real_occasion".parse::<Occasion>().unwrap_err();
    assert!(matches!(err, WainError::InvalidOccasion(_)));
}

#[test]
fn test_keyword_match_outside_category_hints() {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();

    // Category has no romantic hint, but the tags do
    let mut park = place("park", "متنزه", Some(4.0));
    park.perfect_for = vec!["عشاء رومانسي".to_string()];
    db.insert_place(&park).unwrap();

    let (places, total) = db.recommend(Occasion::Romantic, 10, 0).unwrap();
    assert_eq!(total, 1);
    assert_eq!(places[0].id, "park");
}

#[test]
fn test_audience_tag_matches_too() {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();

    let mut spot = place("spot", "متنزه", Some(4.0));
    spot.audience = vec!["شباب".to_string()];
    db.insert_place(&spot).unwrap();

    let (_, total) = db.recommend(Occasion::Friends, 10, 0).unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_recommend_pagination() {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();
    for i in 0..5 {
        db.insert_place(&place(&format!("cafe{i}"), "كافيه", Some(3.0 + i as f64 * 0.2)))
            .unwrap();
    }

    let (page1, total) = db.recommend(Occasion::Quiet, 2, 0).unwrap();
    assert_eq!(total, 5);
    assert_eq!(page1.len(), 2);

    let (page3, total) = db.recommend(Occasion::Quiet, 2, 4).unwrap();
    assert_eq!(total, 5);
    assert_eq!(page3.len(), 1);
}

#[test]
fn test_end_to_end_scenario() {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();

    let mut a = place("a", "كافيه", Some(4.8));
    a.name_ar = "كافيه بلند".to_string();
    a.trending = true;
    let mut b = place("b", "مطعم", Some(4.2));
    b.perfect_for = vec!["رومانسي".to_string()];
    let mut c = place("c", "كافيه", Some(3.0));
    c.name_ar = "كوفي زمان".to_string();
    db.import_places(&[a, b, c]).unwrap();

    // Romantic: B via keyword, A and C via the category hints; ordered by
    // rating descending
    let (places, _) = db.recommend(Occasion::Romantic, 10, 0).unwrap();
    let ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
    assert!(ids.contains(&"b"));
    assert_eq!(ids, vec!["a", "b", "c"]);

    // Search: only the two cafes, best match first
    let (places, total) = db.search_places("كافيه", 10, 0).unwrap();
    assert_eq!(total, 2);
    let ids: Vec<&str> = places.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn test_places_for_intent_combines_filters() {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();

    let mut olaya_cafe = place("olaya", "كافيه", Some(4.5));
    olaya_cafe.neighborhood = "حي العليا".to_string();
    let malqa_cafe = place("malqa", "كافيه", Some(4.9));
    let mut olaya_rest = place("rest", "مطعم", Some(4.0));
    olaya_rest.neighborhood = "حي العليا".to_string();
    db.import_places(&[olaya_cafe, malqa_cafe, olaya_rest])
        .unwrap();

    let wain_core::Intent::Query(intent) = wain_core::extract_intent("ابي قهوة بالعليا") else {
        panic!("expected query intent");
    };
    let places = db.places_for_intent(&intent, 10).unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0].id, "olaya");

    // Empty intent queries nothing
    let places = db
        .places_for_intent(&wain_core::QueryIntent::default(), 10)
        .unwrap();
    assert!(places.is_empty());
}

#[test]
fn test_cached_recommend_serves_stale_page() {
    let db = Database::open_in_memory().unwrap();
    db.initialize().unwrap();
    db.insert_place(&place("one", "كافيه", Some(4.0))).unwrap();

    let cache = TtlCache::new();
    let (_, total) = db.recommend_cached(&cache, Occasion::Quiet, 10, 0).unwrap();
    assert_eq!(total, 1);

    db.insert_place(&place("two", "كافيه", Some(4.5))).unwrap();
    let (_, total) = db.recommend_cached(&cache, Occasion::Quiet, 10, 0).unwrap();
    assert_eq!(total, 1);

    cache.clear();
    let (_, total) = db.recommend_cached(&cache, Occasion::Quiet, 10, 0).unwrap();
    assert_eq!(total, 2);
}
