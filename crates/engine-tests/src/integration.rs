use crate::utils::{MemoryStore, get_f64, get_i64, get_string};
use engine::pipeline::{self, PipelineConfig};
use model::{core::value::Value, quality::Entity};
use std::fs;
use tempfile::TempDir;
use tracing_test::traced_test;

const CUSTOMERS_HEADER: &str = "first_name,last_name,email,phone,city,registration_date";
const PRODUCTS_HEADER: &str = "product_name,category,price,stock_quantity";
const SALES_HEADER: &str = "customer_id,product_id,transaction_date,quantity,unit_price";

fn write_sources(customers: &[&str], products: &[&str], sales: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    let join = |header: &str, rows: &[&str]| {
        let mut text = header.to_string();
        for row in rows {
            text.push('\n');
            text.push_str(row);
        }
        text.push('\n');
        text
    };
    fs::write(dir.path().join("customers_raw.csv"), join(CUSTOMERS_HEADER, customers)).unwrap();
    fs::write(dir.path().join("products_raw.csv"), join(PRODUCTS_HEADER, products)).unwrap();
    fs::write(dir.path().join("sales_raw.csv"), join(SALES_HEADER, sales)).unwrap();
    dir
}

fn fleximart_store() -> MemoryStore {
    MemoryStore::fleximart()
        .allow_keys("orders", "customer_id", vec![Value::Int(1), Value::Int(2)])
        .allow_keys("order_items", "product_id", vec![Value::Int(1), Value::Int(2)])
}

#[tokio::test]
#[traced_test]
async fn full_run_produces_expected_counts_and_linked_orders() {
    let dir = write_sources(
        &[
            "Asha,Sharma,asha@example.com,98765 43210,Pune,2023-01-15",
            "Asha,Sharma,asha@example.com,98765 43210,Pune,2023-01-15",
            "Ravi,Verma,ravi@example.com,,Mumbai,2023-02-01",
            "Meera,Iyer,,9123456780,Chennai,2023-03-10",
            ",,,,,",
        ],
        &[
            "Laptop,  electronics ,999.99,12",
            "Mug,kitchen,,",
            ",electronics,5.0,2",
        ],
        &[
            "1,1,2023-05-01,2,50.0",
            "2,1,2023-05-02,1,999.99",
            ",1,2023-05-03,1,10.0",
            "1,2,bad-date,3,5.0",
        ],
    );

    let mut store = fleximart_store();
    let summary = pipeline::run(&PipelineConfig::from_dir(dir.path()), &mut store)
        .await
        .expect("pipeline run");

    let customers = *summary.report.stats(Entity::Customers).unwrap();
    assert_eq!(customers.processed, 4);
    assert_eq!(customers.duplicates, 1);
    assert_eq!(customers.missing, 1);
    // 4 processed, minus the duplicate, minus the dropped null-email row.
    assert_eq!(customers.loaded, 2);

    let products = *summary.report.stats(Entity::Products).unwrap();
    assert_eq!(products.processed, 3);
    assert_eq!(products.duplicates, 0);
    // Price and stock default away; only the null product name remains.
    assert_eq!(products.missing, 1);
    assert_eq!(products.loaded, 3);

    let sales = *summary.report.stats(Entity::Sales).unwrap();
    assert_eq!(sales.processed, 4);
    assert_eq!(sales.duplicates, 0);
    assert_eq!(sales.missing, 1);
    assert_eq!(sales.loaded, 3);

    assert!(summary.failures.is_empty());

    // Phone normalization reached the store.
    let loaded_customers = store.rows("customers");
    assert_eq!(loaded_customers.len(), 2);
    assert_eq!(
        get_string(&loaded_customers[0], "phone").as_deref(),
        Some("+91-9876543210")
    );

    // The defaulted product row was still persisted.
    let loaded_products = store.rows("products");
    assert_eq!(loaded_products.len(), 3);
    assert_eq!(get_f64(&loaded_products[1], "price"), Some(0.0));
    assert_eq!(get_i64(&loaded_products[1], "stock_quantity"), Some(0));
    assert_eq!(get_string(&loaded_products[0], "category").as_deref(), Some("Electronics"));

    // One order per sale, one item per order, linked by generated identity,
    // with total_amount equal to the item subtotal.
    let orders = store.rows("orders");
    let items = store.rows("order_items");
    assert_eq!(orders.len(), 3);
    assert_eq!(items.len(), 3);
    for item in items {
        let order_id = get_i64(item, "order_id").unwrap();
        let parents: Vec<_> = orders
            .iter()
            .filter(|o| get_i64(o, "id") == Some(order_id))
            .collect();
        assert_eq!(parents.len(), 1);
        assert_eq!(
            get_f64(parents[0], "total_amount"),
            get_f64(item, "subtotal")
        );
        let siblings = items
            .iter()
            .filter(|i| get_i64(i, "order_id") == Some(order_id))
            .count();
        assert_eq!(siblings, 1);
    }
    assert_eq!(get_f64(&orders[0], "total_amount"), Some(100.0));
}

#[tokio::test]
#[traced_test]
async fn sale_with_unknown_customer_is_skipped_without_orphan_order() {
    let dir = write_sources(
        &["Asha,Sharma,asha@example.com,9876543210,Pune,2023-01-15"],
        &["Laptop,electronics,999.99,12"],
        &[
            "999,1,2023-05-01,2,50.0",
            "1,1,2023-05-02,1,999.99",
        ],
    );

    let mut store = fleximart_store();
    let summary = pipeline::run(&PipelineConfig::from_dir(dir.path()), &mut store)
        .await
        .expect("pipeline run");

    let sales = *summary.report.stats(Entity::Sales).unwrap();
    assert_eq!(sales.processed, 2);
    assert_eq!(sales.loaded, 1);

    // The rejected sale left nothing behind.
    let orders = store.rows("orders");
    assert_eq!(orders.len(), 1);
    assert_eq!(get_i64(&orders[0], "customer_id"), Some(1));
    assert_eq!(store.rows("order_items").len(), 1);

    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].entity, Entity::Sales);
    assert_eq!(summary.failures[0].row_index, 0);
    assert!(summary.failures[0].error.contains("Foreign key"));
}

#[tokio::test]
async fn duplicate_email_skips_row_and_commits_the_rest() {
    let dir = write_sources(
        &[
            "Asha,Sharma,asha@example.com,9876543210,Pune,2023-01-15",
            "Arun,Nair,asha@example.com,9000000001,Kochi,2023-04-01",
            "Ravi,Verma,ravi@example.com,9000000002,Mumbai,2023-02-01",
        ],
        &["Laptop,electronics,999.99,12"],
        &["1,1,2023-05-01,1,10.0"],
    );

    let mut store = fleximart_store();
    let summary = pipeline::run(&PipelineConfig::from_dir(dir.path()), &mut store)
        .await
        .expect("pipeline run");

    let customers = *summary.report.stats(Entity::Customers).unwrap();
    assert_eq!(customers.processed, 3);
    assert_eq!(customers.duplicates, 0);
    assert_eq!(customers.loaded, 2);

    let loaded = store.rows("customers");
    assert_eq!(loaded.len(), 2);
    assert_eq!(get_string(&loaded[0], "email").as_deref(), Some("asha@example.com"));
    assert_eq!(get_string(&loaded[1], "email").as_deref(), Some("ravi@example.com"));

    assert_eq!(summary.failures.len(), 1);
    assert_eq!(summary.failures[0].entity, Entity::Customers);
    assert_eq!(summary.failures[0].table, "customers");
    assert_eq!(summary.failures[0].row_index, 1);
}

#[tokio::test]
async fn sale_with_null_quantity_fails_not_null_and_run_continues() {
    let dir = write_sources(
        &["Asha,Sharma,asha@example.com,9876543210,Pune,2023-01-15"],
        &["Laptop,electronics,999.99,12"],
        &[
            "1,1,2023-05-01,,50.0",
            "2,1,2023-05-02,1,999.99",
        ],
    );

    let mut store = fleximart_store();
    let summary = pipeline::run(&PipelineConfig::from_dir(dir.path()), &mut store)
        .await
        .expect("pipeline run");

    let sales = *summary.report.stats(Entity::Sales).unwrap();
    assert_eq!(sales.processed, 2);
    // Null quantity survives cleaning (only ids drop rows) and counts as
    // missing, then fails the store's NOT NULL constraint at load.
    assert_eq!(sales.missing, 1);
    assert_eq!(sales.loaded, 1);

    assert_eq!(store.rows("orders").len(), 1);
    assert_eq!(store.rows("order_items").len(), 1);
    assert_eq!(summary.failures.len(), 1);
    assert!(summary.failures[0].error.contains("cannot be null"));
}

#[tokio::test]
async fn missing_source_file_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = fleximart_store();
    let err = pipeline::run(&PipelineConfig::from_dir(dir.path()), &mut store)
        .await
        .unwrap_err();
    assert!(matches!(err, engine::error::EtlError::Extract(_)));
    assert!(store.rows("customers").is_empty());
}
