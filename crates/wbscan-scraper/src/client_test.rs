use super::*;

const BASE: &str = "https://catalog.wb.ru";

fn filter(low_price: u64, top_price: u64, discount: Option<u32>) -> ScrapeFilter {
    ScrapeFilter {
        low_price,
        top_price,
        discount,
    }
}

#[test]
fn search_url_embeds_hundredths_price_range_and_discount() {
    let url =
        CatalogClient::search_url(BASE, "sport4", "subject=9211", 3, &filter(1000, 10_000, Some(10)))
            .unwrap();
    assert_eq!(
        url,
        "https://catalog.wb.ru/catalog/sport4/catalog?appType=1&curr=rub&dest=-1257786&locale=ru\
         &page=3&priceU=100000;1000000&sort=popular&spp=0&subject=9211&discount=10"
    );
}

#[test]
fn search_url_omits_discount_when_unset() {
    let url =
        CatalogClient::search_url(BASE, "sport4", "subject=9211", 1, &filter(1, 1_000_000, None))
            .unwrap();
    assert!(url.ends_with("&subject=9211"), "got {url}");
    assert!(!url.contains("discount"));
}

#[test]
fn search_url_strips_trailing_slash_from_base() {
    let url =
        CatalogClient::search_url("https://catalog.wb.ru/", "bl_shirts", "cat=8126", 1, &filter(1, 2, None))
            .unwrap();
    assert!(url.starts_with("https://catalog.wb.ru/catalog/bl_shirts/catalog?"));
}

#[test]
fn search_url_skips_empty_category_query() {
    let url = CatalogClient::search_url(BASE, "sport4", "", 1, &filter(1, 2, None)).unwrap();
    assert!(url.ends_with("&spp=0"), "got {url}");
}

#[test]
fn search_url_does_not_double_the_separator() {
    let url =
        CatalogClient::search_url(BASE, "sport4", "&kind=2&subject=9211", 1, &filter(1, 2, None))
            .unwrap();
    assert!(url.ends_with("&spp=0&kind=2&subject=9211"), "got {url}");
}

#[test]
fn search_url_rejects_invalid_base() {
    let result = CatalogClient::search_url("not-a-url", "sport4", "cat=1", 1, &filter(1, 2, None));
    assert!(matches!(result, Err(ScraperError::InvalidUrl { .. })));
}

#[test]
fn with_endpoints_overrides_defaults() {
    let client = CatalogClient::new(5, "wbscan-test/0.1", 5, 0)
        .unwrap()
        .with_endpoints("http://127.0.0.1:1/menu.json", "http://127.0.0.1:1");
    assert_eq!(client.catalog_url, "http://127.0.0.1:1/menu.json");
    assert_eq!(client.search_base_url, "http://127.0.0.1:1");
    assert_eq!(client.max_attempts, 5);
}
