use chrono::{Duration, Utc};
use estate_hub::models::{
    Address, Currency, EngagementCounters, ListingType, Price, Property, PropertyStatus,
    PropertyType,
};
use estate_hub::query::{
    match_score, run_search, ClientPreferences, PageRequest, PropertyFilters, SearchQuery, SortBy,
    SortOrder,
};

fn listing(id: &str, price: i64, bedrooms: u32, city: &str, amenities: &[&str]) -> Property {
    let now = Utc::now();
    Property {
        id: id.to_string(),
        professional_id: "pro-test".to_string(),
        title: format!("Listing {id}"),
        description: String::new(),
        property_type: PropertyType::Apartment,
        listing_type: ListingType::Sale,
        price: Price {
            amount: price,
            currency: Currency::Usd,
            negotiable: false,
        },
        bedrooms,
        bathrooms: 1,
        square_feet: 800,
        year_built: None,
        status: PropertyStatus::Active,
        counters: EngagementCounters::default(),
        amenities: amenities.iter().map(|a| a.to_string()).collect(),
        images: vec![],
        address: Address {
            street: "1 Test St".to_string(),
            city: city.to_string(),
            state: "IL".to_string(),
            postal_code: "00000".to_string(),
            country: "US".to_string(),
        },
        created_at: now - Duration::days(1),
        published_at: Some(now - Duration::days(1)),
        updated_at: now,
    }
}

fn fixture() -> Vec<Property> {
    vec![
        listing("a", 100_000, 1, "Springfield", &["parking"]),
        listing("b", 250_000, 2, "Chicago", &["parking", "gym"]),
        listing("c", 400_000, 3, "Peoria", &["gym", "pool", "parking"]),
        listing("d", 550_000, 4, "Chicago", &["garden"]),
        listing("e", 700_000, 5, "Naperville", &[]),
    ]
}

fn search(properties: &[Property], filters: PropertyFilters) -> Vec<Property> {
    run_search(
        properties,
        &SearchQuery {
            filters,
            page: PageRequest {
                page: 1,
                limit: 100,
            },
            ..Default::default()
        },
    )
    .properties
}

#[test]
fn price_range_is_inclusive_on_both_ends() {
    let all = fixture();
    let hits = search(
        &all,
        PropertyFilters {
            price_min: Some(250_000),
            price_max: Some(550_000),
            ..Default::default()
        },
    );
    assert_eq!(hits.len(), 3);
    for p in &hits {
        assert!((250_000..=550_000).contains(&p.price.amount));
    }
}

#[test]
fn contradictory_range_matches_nothing_without_error() {
    let all = fixture();
    let hits = search(
        &all,
        PropertyFilters {
            price_min: Some(500_000),
            price_max: Some(100_000),
            ..Default::default()
        },
    );
    assert!(hits.is_empty());
}

#[test]
fn amenity_filter_requires_superset() {
    let all = fixture();
    let hits = search(
        &all,
        PropertyFilters {
            amenities: Some(vec!["parking".to_string(), "gym".to_string()]),
            ..Default::default()
        },
    );
    assert_eq!(hits.len(), 2);
    for p in &hits {
        assert!(p.amenities.iter().any(|a| a == "parking"));
        assert!(p.amenities.iter().any(|a| a == "gym"));
    }
}

#[test]
fn location_matches_city_substring_case_insensitively() {
    let all = fixture();
    let hits = search(
        &all,
        PropertyFilters {
            location: Some("chic".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(hits.len(), 2);

    // state matches too: everything in the fixture is in IL
    let by_state = search(
        &all,
        PropertyFilters {
            location: Some("il".to_string()),
            ..Default::default()
        },
    );
    assert_eq!(by_state.len(), all.len());
}

#[test]
fn bedroom_filter_is_a_minimum() {
    let all = fixture();
    let hits = search(
        &all,
        PropertyFilters {
            bedrooms: Some(3),
            ..Default::default()
        },
    );
    assert_eq!(hits.len(), 3);
    assert!(hits.iter().all(|p| p.bedrooms >= 3));
}

#[test]
fn price_sort_desc_reverses_asc() {
    let all = fixture();
    let run = |order| {
        run_search(
            &all,
            &SearchQuery {
                sort_by: SortBy::Price,
                sort_order: order,
                page: PageRequest {
                    page: 1,
                    limit: 100,
                },
                ..Default::default()
            },
        )
        .properties
        .into_iter()
        .map(|p| p.id)
        .collect::<Vec<_>>()
    };
    let asc = run(SortOrder::Asc);
    let mut desc = run(SortOrder::Desc);
    desc.reverse();
    assert_eq!(asc, desc);
    assert_eq!(asc, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn pagination_slices_the_middle_page() {
    // 25 listings with ascending prices so the order is deterministic
    let all: Vec<Property> = (0..25)
        .map(|i| listing(&format!("p{i:02}"), 100_000 + i as i64 * 1000, 2, "Springfield", &[]))
        .collect();
    let result = run_search(
        &all,
        &SearchQuery {
            sort_by: SortBy::Price,
            sort_order: SortOrder::Asc,
            page: PageRequest { page: 2, limit: 10 },
            ..Default::default()
        },
    );
    assert_eq!(result.total, 25);
    assert_eq!(result.properties.len(), 10);
    assert_eq!(result.properties.first().unwrap().id, "p10");
    assert_eq!(result.properties.last().unwrap().id, "p19");
}

#[test]
fn pagination_final_page_is_short() {
    let all: Vec<Property> = (0..25)
        .map(|i| listing(&format!("p{i:02}"), 100_000 + i as i64 * 1000, 2, "Springfield", &[]))
        .collect();
    let result = run_search(
        &all,
        &SearchQuery {
            sort_by: SortBy::Price,
            sort_order: SortOrder::Asc,
            page: PageRequest { page: 3, limit: 10 },
            ..Default::default()
        },
    );
    assert_eq!(result.properties.len(), 5);
    assert_eq!(result.properties.first().unwrap().id, "p20");
    assert_eq!(result.properties.last().unwrap().id, "p24");

    let past_the_end = run_search(
        &all,
        &SearchQuery {
            page: PageRequest { page: 4, limit: 10 },
            ..Default::default()
        },
    );
    assert!(past_the_end.properties.is_empty());
    assert_eq!(past_the_end.total, 25);
}

#[test]
fn stable_sort_keeps_insertion_order_on_ties() {
    let mut all = vec![
        listing("first", 300_000, 2, "Springfield", &[]),
        listing("second", 300_000, 2, "Springfield", &[]),
        listing("third", 300_000, 2, "Springfield", &[]),
    ];
    // same price everywhere, same publish day: order must not change
    let now = Utc::now();
    for p in &mut all {
        p.published_at = Some(now - Duration::days(5));
    }
    let result = run_search(
        &all,
        &SearchQuery {
            sort_by: SortBy::Price,
            sort_order: SortOrder::Asc,
            ..Default::default()
        },
    );
    let ids: Vec<_> = result.properties.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn match_score_is_full_with_no_stated_preferences() {
    let p = listing("a", 100_000, 1, "Springfield", &["parking"]);
    assert_eq!(match_score(&p, &ClientPreferences::default()), 100);
}

#[test]
fn match_score_drops_per_missed_preference() {
    let p = listing("a", 500_000, 2, "Springfield", &["parking"]);
    // over budget: lose the 30-point budget weight
    let prefs = ClientPreferences {
        budget_max: Some(400_000),
        ..Default::default()
    };
    assert_eq!(match_score(&p, &prefs), 70);

    // half the requested amenities present: half of the 10-point weight
    let prefs = ClientPreferences {
        amenities: vec!["parking".to_string(), "pool".to_string()],
        ..Default::default()
    };
    assert_eq!(match_score(&p, &prefs), 95);
}

#[test]
fn match_score_is_deterministic() {
    let p = listing("a", 350_000, 3, "Chicago", &["gym", "parking"]);
    let prefs = ClientPreferences {
        budget_min: Some(300_000),
        budget_max: Some(400_000),
        min_bedrooms: Some(2),
        location: Some("chicago".to_string()),
        amenities: vec!["gym".to_string()],
        ..Default::default()
    };
    let first = match_score(&p, &prefs);
    assert_eq!(first, 100);
    assert_eq!(match_score(&p, &prefs), first);
}
