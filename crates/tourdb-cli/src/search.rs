//! Search command handlers for the CLI.
//!
//! Both commands run through the same `SearchService` the HTTP server uses,
//! so results, ordering and enrichment match the API exactly.

use tourdb_core::{normalize_keyword, Coordinate, SearchConfig};
use tourdb_db::PgStore;
use tourdb_search::{CallerId, Page, SearchResult, SearchService};

#[derive(Debug)]
pub(crate) struct NearbyArgs {
    pub lat: f64,
    pub lng: f64,
    pub radius_km: Option<f64>,
    pub page: i64,
    pub caller: Option<i64>,
}

#[derive(Debug)]
pub(crate) struct KeywordArgs {
    pub keyword: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub page: i64,
    pub caller: Option<i64>,
}

fn service(pool: &sqlx::PgPool, config: SearchConfig) -> SearchService<PgStore, PgStore, PgStore> {
    let store = PgStore::new(pool.clone());
    SearchService::new(store.clone(), store.clone(), store, config)
}

/// Run a radius search and print the page.
///
/// # Errors
///
/// Returns an error for an invalid coordinate, radius or page, or if
/// storage is unavailable.
pub(crate) async fn run_nearby(
    pool: &sqlx::PgPool,
    config: SearchConfig,
    args: NearbyArgs,
    json: bool,
) -> anyhow::Result<()> {
    let origin = Coordinate::new(args.lat, args.lng).validate()?;
    let page = service(pool, config)
        .nearby_search(origin, args.radius_km, args.page, args.caller.map(CallerId))
        .await?;
    print_page(&page, json)
}

/// Run a keyword search and print the page.
///
/// # Errors
///
/// Returns an error for a blank keyword, invalid coordinate or page, or if
/// storage is unavailable.
pub(crate) async fn run_keyword(
    pool: &sqlx::PgPool,
    config: SearchConfig,
    args: KeywordArgs,
    json: bool,
) -> anyhow::Result<()> {
    let keyword = normalize_keyword(&args.keyword)?;
    let origin = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(Coordinate::new(lat, lng).validate()?),
        (None, None) => None,
        _ => anyhow::bail!("--lat and --lng must be given together"),
    };
    let page = service(pool, config)
        .keyword_search(keyword, origin, args.page, args.caller.map(CallerId))
        .await?;
    print_page(&page, json)
}

fn print_page(page: &Page<SearchResult>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(page)?);
        return Ok(());
    }

    if page.content.is_empty() {
        println!(
            "no places found (page {} of {}, {} total)",
            page.current_page, page.total_pages, page.total_elements
        );
        return Ok(());
    }

    println!("{}", table_header());
    for result in &page.content {
        println!("{}", table_row(result));
    }
    println!();
    println!(
        "page {} of {}, {} total",
        page.current_page, page.total_pages, page.total_elements
    );
    Ok(())
}

pub(crate) fn table_header() -> String {
    format!(
        "{:<8}{:<10}{:<16}{:<12}{:<6}NAME",
        "ID", "KM", "DISTRICT", "CITY", "BKMK"
    )
}

pub(crate) fn table_row(result: &SearchResult) -> String {
    let distance = result
        .distance_km
        .map_or_else(|| "-".to_string(), |d| format!("{d:.1}"));
    let bookmarked = if result.bookmark_status { "yes" } else { "no" };
    let name = if result.name.chars().count() > 40 {
        format!("{}...", result.name.chars().take(40).collect::<String>())
    } else {
        result.name.clone()
    };
    format!(
        "{:<8}{:<10}{:<16}{:<12}{:<6}{}",
        result.place_id, distance, result.district_name, result.city_name, bookmarked, name
    )
}
