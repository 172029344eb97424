use chrono::{DateTime, Duration, TimeZone, Utc};
use oglasnik::repository::seed::sample_listings;
use oglasnik::repository::{InMemoryListingRepository, ListingRepository};
use oglasnik::{search, Currency, FilterSpec, Listing, PageItem, SortKey};

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 4, 1, 8, 0, 0).unwrap()
}

fn car(id: &str, title: &str, price: f64, posted_date: DateTime<Utc>) -> Listing {
    Listing {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        location: "Beograd".to_string(),
        category: "vozila".to_string(),
        price,
        currency: Currency::Eur,
        condition: Some("polovno".to_string()),
        posted_date,
        seller_id: None,
        images: vec![],
    }
}

fn ids(items: &[&Listing]) -> Vec<String> {
    items.iter().map(|l| l.id.clone()).collect()
}

#[test]
fn golf_audi_bmw_scenario() {
    let t1 = base_date();
    let listings = vec![
        car("A", "VW Golf 7", 12_500.0, t1),
        car("B", "Audi A4", 14_200.0, t1 + Duration::days(1)),
        car("C", "BMW 320d", 21_000.0, t1 + Duration::days(2)),
    ];

    let golf = search(
        &listings,
        &FilterSpec::default().with_search_term("golf"),
        SortKey::Newest,
        1,
        9,
    );
    assert_eq!(ids(&golf.items), ["A"]);

    let by_price = search(&listings, &FilterSpec::default(), SortKey::PriceDesc, 1, 9);
    assert_eq!(ids(&by_price.items), ["C", "B", "A"]);

    let newest = search(&listings, &FilterSpec::default(), SortKey::Newest, 1, 9);
    assert_eq!(ids(&newest.items), ["C", "B", "A"]);

    let second_page = search(&listings, &FilterSpec::default(), SortKey::Newest, 2, 2);
    assert_eq!(ids(&second_page.items), ["A"]);
    assert_eq!(second_page.total_pages, 2);
}

#[test]
fn twenty_three_matches_in_pages_of_nine() {
    let listings: Vec<Listing> = (0..23)
        .map(|i| {
            car(
                &i.to_string(),
                "Opel Astra",
                1_000.0 + i as f64,
                base_date() + Duration::hours(i),
            )
        })
        .collect();
    let spec = FilterSpec::default().with_search_term("astra");

    let page3 = search(&listings, &spec, SortKey::Newest, 3, 9);
    assert_eq!(page3.total_count, 23);
    assert_eq!(page3.total_pages, 3);
    assert_eq!(page3.items.len(), 5);

    let page4 = search(&listings, &spec, SortKey::Newest, 4, 9);
    assert!(page4.items.is_empty());
    assert_eq!(page4.total_pages, 3);
}

#[test]
fn same_query_gives_same_order() {
    let listings = sample_listings();
    let spec = FilterSpec::default()
        .with_search_term("stan")
        .with_location("Novi Sad")
        .with_location("Niš");

    let first = search(&listings, &spec, SortKey::PriceAsc, 1, 9);
    let second = search(&listings, &spec, SortKey::PriceAsc, 1, 9);
    assert_eq!(first, second);
    assert!(!first.items.is_empty());
}

#[test]
fn price_range_skips_other_currency_and_price_on_request() {
    let listings = sample_listings();
    let spec = FilterSpec::default().with_price_range("1", "1000000");

    let result = search(&listings, &spec, SortKey::Newest, 1, 50);
    assert!(!result.items.is_empty());
    assert!(result
        .items
        .iter()
        .all(|l| l.currency == Currency::Eur && !l.is_price_on_request()));
}

#[test]
fn ten_pages_render_compact_list() {
    let listings: Vec<Listing> = (0..10)
        .map(|i| car(&i.to_string(), "Fiat Punto", 900.0, base_date()))
        .collect();

    let result = search(&listings, &FilterSpec::default(), SortKey::Newest, 5, 1);
    assert_eq!(
        result.page_numbers(),
        vec![
            PageItem::Page(1),
            PageItem::Ellipsis,
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );
}

#[tokio::test]
async fn searches_a_repository_snapshot() {
    let repo = InMemoryListingRepository::with_listings(sample_listings());
    repo.remove("1").await.unwrap();

    let snapshot = repo.get_all().await.unwrap();
    let result = search(
        &snapshot,
        &FilterSpec::default().with_category("vozila"),
        SortKey::PriceAsc,
        1,
        9,
    );

    assert_eq!(ids(&result.items), ["2", "3"]);
}
