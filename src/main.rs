use chrono::{Duration, Utc};
use estate_hub::models::{NewViewing, Role, ViewingStatus};
use estate_hub::query::{
    ClientPreferences, PageRequest, PropertyFilters, SearchQuery, SortBy, SortOrder,
};
use estate_hub::{EstateService, ServiceConfig};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let config = ServiceConfig::from_env();
    info!("🏠 Estate Hub - property search demo");
    info!("Backend: {}", config.base_url);

    let service = EstateService::connect(config).await?;
    info!(
        "Breaker state after health probe: {:?}",
        service.breaker_state()
    );

    // Illinois sale listings under 700k with a balcony, cheapest first
    let query = SearchQuery {
        filters: PropertyFilters {
            location: Some("IL".to_string()),
            price_max: Some(700_000),
            amenities: Some(vec!["balcony".to_string()]),
            ..Default::default()
        },
        sort_by: SortBy::Price,
        sort_order: SortOrder::Asc,
        page: PageRequest { page: 1, limit: 10 },
    };
    let result = service.search(&query).await?;

    info!("Found {} matching listings", result.total);
    let now = Utc::now();
    for (i, property) in result.properties.iter().enumerate() {
        println!(
            "{}. {} - {} {} ({})",
            i + 1,
            property.title,
            property.price.amount,
            property.address.city,
            property.address.state
        );
        println!(
            "   {} bed, {} bath, {} sqft, {} days on market",
            property.bedrooms,
            property.bathrooms,
            property.square_feet,
            property.days_on_market(now)
        );
        println!("   Amenities: {}", property.amenities.join(", "));
        println!();
    }

    // Score the page for a client hunting a two-bed with parking
    let preferences = ClientPreferences {
        budget_max: Some(400_000),
        min_bedrooms: Some(2),
        amenities: vec!["parking".to_string()],
        ..Default::default()
    };
    for property in &result.properties {
        let score = service.score_property(&property.id, &preferences).await?;
        println!("{}% match - {}", score, property.title);
    }

    // Book and confirm a viewing on the top hit
    if let Some(best) = result.properties.first() {
        let viewing = service
            .schedule_viewing(NewViewing {
                property_id: best.id.clone(),
                requester_id: "client-demo".to_string(),
                professional_id: best.professional_id.clone(),
                scheduled_for: Utc::now() + Duration::days(2),
            })
            .await?;
        let confirmed = service
            .update_viewing(&viewing.id, ViewingStatus::Confirmed)
            .await?;
        info!(
            "Viewing {} for '{}' is {:?}",
            confirmed.id, best.title, confirmed.status
        );
    }

    // Role dispatch drives which dashboard the front-end renders
    for role in Role::ALL {
        println!("{role:?} -> {:?}", role.dashboard());
    }

    // Save the page to disk for inspection
    let json = serde_json::to_string_pretty(&result.properties)?;
    tokio::fs::write("search_results.json", json).await?;
    info!("💾 Saved results to search_results.json");

    Ok(())
}
