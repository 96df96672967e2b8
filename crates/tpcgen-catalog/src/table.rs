use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A logical table in the generation catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    pub name: String,
    /// Expected field count per generated row.
    pub columns: usize,
    /// Whether the generator can split this table into independent partitions.
    pub parallelizable: bool,
    /// Dependent table emitted as a side effect of the same generation pass.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub child: Option<String>,
}

impl TableSpec {
    pub fn new(name: &str, columns: usize, parallelizable: bool) -> Self {
        Self {
            name: name.to_string(),
            columns,
            parallelizable,
            child: None,
        }
    }

    pub fn with_child(mut self, child: &str) -> Self {
        self.child = Some(child.to_string());
        self
    }
}

/// Ordered, closed set of tables a run iterates over.
///
/// Tables that appear as another table's child are never top-level
/// generation targets; they have no partition plan of their own and are
/// only materialized from their parent's merged stream.
#[derive(Debug, Clone)]
pub struct Catalog {
    tables: Vec<TableSpec>,
    children: HashSet<String>,
}

impl Catalog {
    /// Build a catalog, validating child references.
    ///
    /// Rejects duplicate table names, child references that do not resolve
    /// within the catalog, and chained pairings (a child declaring its own
    /// child).
    pub fn new(tables: Vec<TableSpec>) -> Result<Self> {
        let mut by_name: HashMap<&str, &TableSpec> = HashMap::new();
        for table in &tables {
            if by_name.insert(table.name.as_str(), table).is_some() {
                return Err(CatalogError::InvalidCatalog(format!(
                    "duplicate table '{}'",
                    table.name
                )));
            }
        }

        let mut children = HashSet::new();
        for table in &tables {
            let Some(child) = table.child.as_deref() else {
                continue;
            };
            let Some(child_spec) = by_name.get(child) else {
                return Err(CatalogError::InvalidCatalog(format!(
                    "table '{}' references missing child '{}'",
                    table.name, child
                )));
            };
            if child_spec.child.is_some() {
                return Err(CatalogError::InvalidCatalog(format!(
                    "child table '{}' must not declare its own child",
                    child
                )));
            }
            if !children.insert(child.to_string()) {
                return Err(CatalogError::InvalidCatalog(format!(
                    "table '{}' is the child of more than one parent",
                    child
                )));
            }
        }

        Ok(Self { tables, children })
    }

    pub fn get(&self, name: &str) -> Option<&TableSpec> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Child paired with `name`, if `name` owns a shared generation pass.
    pub fn child_of(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|table| table.child.as_deref())
    }

    /// Whether `name` is only reachable as some parent's child.
    pub fn is_child_only(&self, name: &str) -> bool {
        self.children.contains(name)
    }

    /// Tables iterated as top-level generation targets, in catalog order.
    pub fn top_level(&self) -> impl Iterator<Item = &TableSpec> {
        self.tables
            .iter()
            .filter(|table| !self.children.contains(&table.name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableSpec> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
