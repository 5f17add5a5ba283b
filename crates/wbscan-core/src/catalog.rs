//! Category tree shapes returned by the catalog menu endpoint.
//!
//! The endpoint's root is a JSON array of top-level sections, but any subtree
//! may be handed to the flattener on its own, so the input is modelled as
//! either a single node or a forest of siblings.

use serde::Deserialize;

/// A catalog document: one node, or a bare list of sibling nodes with no
/// shared parent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CatalogTree {
    Forest(Vec<CategoryNode>),
    Node(CategoryNode),
}

/// One entry of the category menu.
///
/// A node with an empty `children` list is a leaf; the endpoint either omits
/// `childs` or sends an empty array for those.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryNode {
    pub name: String,
    #[serde(default)]
    pub shard: Option<String>,
    /// Site-relative path, e.g. `"/catalog/sport/vidy-sporta/velosport"`.
    pub url: String,
    /// Search filter fragment, e.g. `"subject=9211"`.
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default, rename = "childs")]
    pub children: Vec<CategoryNode>,
}

impl CategoryNode {
    /// The node's own routing data, without its subtree.
    #[must_use]
    pub fn to_record(&self) -> CategoryRecord {
        CategoryRecord {
            name: self.name.clone(),
            shard: self.shard.clone(),
            url: self.url.clone(),
            query: self.query.clone(),
        }
    }
}

/// A flattened category: the routing parameters the search endpoint needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRecord {
    pub name: String,
    pub shard: Option<String>,
    pub url: String,
    pub query: Option<String>,
}
