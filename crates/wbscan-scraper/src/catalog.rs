//! Category tree flattening and URL-to-category resolution.

use wbscan_core::{CatalogTree, CategoryNode, CategoryRecord};

/// Flattens a catalog tree into category records in depth-first pre-order.
///
/// A node is emitted before its children, and a forest is walked sibling by
/// sibling in input order. Traversal uses an explicit stack so arbitrarily
/// deep menus cannot overflow the call stack.
#[must_use]
pub fn flatten_catalog(tree: &CatalogTree) -> Vec<CategoryRecord> {
    let roots: &[CategoryNode] = match tree {
        CatalogTree::Forest(nodes) => nodes,
        CatalogTree::Node(node) => std::slice::from_ref(node),
    };

    let mut records = Vec::new();
    // Reversed so the first sibling is popped first.
    let mut stack: Vec<&CategoryNode> = roots.iter().rev().collect();

    while let Some(node) = stack.pop() {
        records.push(node.to_record());
        stack.extend(node.children.iter().rev());
    }

    records
}

/// Returns the first record whose site-relative path equals the path of
/// `category_url`, or `None` when the catalog has no such category.
///
/// Record URLs are usually already relative; any that carry `site_origin`
/// have it stripped before comparison.
#[must_use]
pub fn resolve_category<'a>(
    category_url: &str,
    site_origin: &str,
    records: &'a [CategoryRecord],
) -> Option<&'a CategoryRecord> {
    let wanted = url_path(category_url, site_origin);
    let origin = site_origin.trim_end_matches('/');

    let found = records
        .iter()
        .find(|record| record.url.strip_prefix(origin).unwrap_or(&record.url) == wanted);

    match found {
        Some(record) => tracing::info!(name = %record.name, "category found"),
        None => tracing::warn!(category_url, "category not present in catalog"),
    }
    found
}

/// Path component of a category URL.
///
/// Falls back to stripping the origin and any query string by hand when the
/// input is not an absolute URL.
fn url_path(category_url: &str, site_origin: &str) -> String {
    reqwest::Url::parse(category_url).map_or_else(
        |_| {
            let relative = category_url
                .strip_prefix(site_origin.trim_end_matches('/'))
                .unwrap_or(category_url);
            relative
                .split(['?', '#'])
                .next()
                .unwrap_or(relative)
                .to_owned()
        },
        |u| u.path().to_owned(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://www.wildberries.ru";

    fn node(name: &str, children: Vec<CategoryNode>) -> CategoryNode {
        CategoryNode {
            name: name.to_owned(),
            shard: Some(format!("shard-{name}")),
            url: format!("/catalog/{name}"),
            query: Some(format!("cat={name}")),
            children,
        }
    }

    fn record(name: &str, url: &str) -> CategoryRecord {
        CategoryRecord {
            name: name.to_owned(),
            shard: Some("sport4".to_owned()),
            url: url.to_owned(),
            query: Some("subject=9211".to_owned()),
        }
    }

    fn names(records: &[CategoryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    // -----------------------------------------------------------------------
    // flatten_catalog
    // -----------------------------------------------------------------------

    #[test]
    fn flatten_single_leaf_yields_one_record() {
        let tree = CatalogTree::Node(node("a", vec![]));
        let flat = flatten_catalog(&tree);
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].url, "/catalog/a");
        assert_eq!(flat[0].shard.as_deref(), Some("shard-a"));
    }

    #[test]
    fn flatten_emits_every_node_in_pre_order() {
        // a
        // ├── b
        // │   ├── d
        // │   └── e
        // └── c
        //     └── f
        let tree = CatalogTree::Node(node(
            "a",
            vec![
                node("b", vec![node("d", vec![]), node("e", vec![])]),
                node("c", vec![node("f", vec![])]),
            ],
        ));
        let flat = flatten_catalog(&tree);
        assert_eq!(names(&flat), vec!["a", "b", "d", "e", "c", "f"]);
    }

    #[test]
    fn flatten_forest_concatenates_sibling_subtrees_in_input_order() {
        let tree = CatalogTree::Forest(vec![
            node("x", vec![node("x1", vec![])]),
            node("y", vec![]),
            node("z", vec![node("z1", vec![node("z2", vec![])])]),
        ]);
        let flat = flatten_catalog(&tree);
        assert_eq!(names(&flat), vec!["x", "x1", "y", "z", "z1", "z2"]);
    }

    #[test]
    fn flatten_empty_forest_yields_nothing() {
        let flat = flatten_catalog(&CatalogTree::Forest(vec![]));
        assert!(flat.is_empty());
    }

    #[test]
    fn flatten_handles_deep_chains() {
        let mut deepest = node("leaf", vec![]);
        for depth in 0..1_000 {
            deepest = node(&format!("n{depth}"), vec![deepest]);
        }
        let tree = CatalogTree::Node(deepest);
        let flat = flatten_catalog(&tree);
        assert_eq!(flat.len(), 1_001);
        assert_eq!(flat[0].name, "n999");
        assert_eq!(flat.last().map(|r| r.name.as_str()), Some("leaf"));
    }

    #[test]
    fn flatten_keeps_missing_shard_and_query_as_none() {
        let tree = CatalogTree::Node(CategoryNode {
            name: "Section".to_owned(),
            shard: None,
            url: "/catalog/section".to_owned(),
            query: None,
            children: vec![],
        });
        let flat = flatten_catalog(&tree);
        assert!(flat[0].shard.is_none());
        assert!(flat[0].query.is_none());
    }

    // -----------------------------------------------------------------------
    // resolve_category
    // -----------------------------------------------------------------------

    #[test]
    fn resolve_matches_by_path() {
        let records = vec![
            record("Sport", "/catalog/sport"),
            record("Bikes", "/catalog/sport/vidy-sporta/velosport/velosipedy"),
        ];
        let found = resolve_category(
            "https://www.wildberries.ru/catalog/sport/vidy-sporta/velosport/velosipedy",
            ORIGIN,
            &records,
        );
        assert_eq!(found.map(|r| r.name.as_str()), Some("Bikes"));
    }

    #[test]
    fn resolve_ignores_query_string_on_input_url() {
        let records = vec![record("Bikes", "/catalog/sport/velosipedy")];
        let found = resolve_category(
            "https://www.wildberries.ru/catalog/sport/velosipedy?sort=popular&page=2",
            ORIGIN,
            &records,
        );
        assert!(found.is_some());
    }

    #[test]
    fn resolve_returns_first_match_on_duplicates() {
        let records = vec![
            record("First", "/catalog/gifts"),
            record("Second", "/catalog/gifts"),
        ];
        let found = resolve_category("https://www.wildberries.ru/catalog/gifts", ORIGIN, &records);
        assert_eq!(found.map(|r| r.name.as_str()), Some("First"));
    }

    #[test]
    fn resolve_strips_origin_from_absolute_record_urls() {
        let records = vec![record("Promo", "https://www.wildberries.ru/promotions/sale")];
        let found =
            resolve_category("https://www.wildberries.ru/promotions/sale", ORIGIN, &records);
        assert_eq!(found.map(|r| r.name.as_str()), Some("Promo"));
    }

    #[test]
    fn resolve_absent_url_returns_none() {
        let records = vec![record("Sport", "/catalog/sport")];
        let found = resolve_category("https://www.wildberries.ru/catalog/books", ORIGIN, &records);
        assert!(found.is_none());
    }

    #[test]
    fn resolve_does_not_match_parent_prefix() {
        let records = vec![record("Sport", "/catalog/sport")];
        let found = resolve_category(
            "https://www.wildberries.ru/catalog/sport/velosport",
            ORIGIN,
            &records,
        );
        assert!(found.is_none());
    }

    #[test]
    fn url_path_falls_back_for_relative_input() {
        assert_eq!(url_path("/catalog/sport?x=1", ORIGIN), "/catalog/sport");
    }
}
