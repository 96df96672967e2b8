//! The built-in TPC-DS v2 table catalog.
//!
//! Column counts follow the TPC-DS specification. The three sales fact
//! tables each pair with their returns table, which dsdgen emits from the
//! same generation pass. Dimension tables that dsdgen refuses to split are
//! marked non-parallelizable; `promotion` belongs to that set (older
//! generation scripts misspelled it as `promotions`, silently leaving it
//! parallel).

use crate::table::{Catalog, TableSpec};

/// Catalog of all 24 TPC-DS tables in generation order.
pub fn tpcds_catalog() -> Catalog {
    let tables = vec![
        TableSpec::new("call_center", 31, false),
        TableSpec::new("catalog_page", 9, false),
        TableSpec::new("catalog_returns", 27, true),
        TableSpec::new("catalog_sales", 34, true).with_child("catalog_returns"),
        TableSpec::new("customer", 18, true),
        TableSpec::new("customer_address", 13, true),
        TableSpec::new("customer_demographics", 9, false),
        TableSpec::new("date_dim", 28, false),
        TableSpec::new("household_demographics", 5, false),
        TableSpec::new("income_band", 3, false),
        TableSpec::new("inventory", 4, true),
        TableSpec::new("item", 22, false),
        TableSpec::new("promotion", 19, false),
        TableSpec::new("reason", 3, false),
        TableSpec::new("ship_mode", 6, false),
        TableSpec::new("store", 29, false),
        TableSpec::new("store_returns", 20, true),
        TableSpec::new("store_sales", 23, true).with_child("store_returns"),
        TableSpec::new("time_dim", 10, false),
        TableSpec::new("warehouse", 14, false),
        TableSpec::new("web_page", 14, false),
        TableSpec::new("web_returns", 24, true),
        TableSpec::new("web_sales", 34, true).with_child("web_returns"),
        TableSpec::new("web_site", 26, false),
    ];

    // The literal set above is validated at startup; a failure here is a
    // defect in this module, not a runtime condition.
    match Catalog::new(tables) {
        Ok(catalog) => catalog,
        Err(err) => unreachable!("built-in TPC-DS catalog is invalid: {err}"),
    }
}
