//! Built-in sample dataset
//!
//! A small shop schema used when no dataset is configured, or when loading the
//! configured one fails.

use std::collections::BTreeSet;

use super::{DataProvider, ProviderError};
use crate::model::{ColumnMetadata, RowRecord};

const TABLES: &[&str] = &["users", "orders", "products", "categories"];

#[derive(Debug, Clone, Copy, Default)]
pub struct SampleProvider;

impl DataProvider for SampleProvider {
    fn label(&self) -> String {
        "sample data".to_string()
    }

    fn list_tables(&self) -> Result<Vec<String>, ProviderError> {
        Ok(TABLES.iter().map(|t| t.to_string()).collect())
    }

    fn fetch_columns(&self, table: &str) -> Result<Vec<ColumnMetadata>, ProviderError> {
        let columns = match table {
            "users" => vec![
                ColumnMetadata::new("ID", "int", false, "PRI"),
                ColumnMetadata::new("Username", "varchar(50)", false, "UNI"),
                ColumnMetadata::new("Email", "varchar(100)", false, "UNI"),
                ColumnMetadata::new("Active", "tinyint(1)", false, ""),
            ],
            "orders" => vec![
                ColumnMetadata::new("ID", "int", false, "PRI"),
                ColumnMetadata::new("UserID", "int", false, "MUL"),
                ColumnMetadata::new("TotalPrice", "decimal(10,2)", false, ""),
                ColumnMetadata::new("Status", "varchar(20)", false, ""),
            ],
            "products" => vec![
                ColumnMetadata::new("ID", "int", false, "PRI"),
                ColumnMetadata::new("Name", "varchar(100)", false, ""),
                ColumnMetadata::new("Price", "decimal(10,2)", false, ""),
                ColumnMetadata::new("Category", "varchar(50)", false, "MUL"),
            ],
            "categories" => vec![
                ColumnMetadata::new("ID", "int", false, "PRI"),
                ColumnMetadata::new("Name", "varchar(50)", false, ""),
                ColumnMetadata::new("Slug", "varchar(50)", false, "UNI"),
            ],
            other => return Err(ProviderError::MissingTable(other.to_string())),
        };
        Ok(columns)
    }

    fn fetch_index_names(&self, table: &str) -> Result<BTreeSet<String>, ProviderError> {
        let names: &[&str] = match table {
            "users" => &["PRIMARY", "idx_username", "idx_email"],
            "orders" => &["PRIMARY", "idx_user_id"],
            "products" => &["PRIMARY", "idx_category"],
            "categories" => &["PRIMARY", "idx_slug"],
            other => return Err(ProviderError::MissingTable(other.to_string())),
        };
        Ok(names.iter().map(|n| n.to_string()).collect())
    }

    fn fetch_rows(&self, table: &str, limit: usize) -> Result<Vec<RowRecord>, ProviderError> {
        let rows = match table {
            "users" => users(),
            "orders" => orders(),
            "products" => products(),
            "categories" => categories(),
            other => return Err(ProviderError::MissingTable(other.to_string())),
        };
        Ok(rows.into_iter().take(limit).collect())
    }
}

fn users() -> Vec<RowRecord> {
    [
        (1, "johndoe", "john@example.com", true),
        (2, "janedoe", "jane@example.com", true),
        (3, "bobsmith", "bob@example.com", false),
        (4, "alicejones", "alice@example.com", true),
        (5, "mikebrown", "mike@example.com", true),
    ]
    .into_iter()
    .map(|(id, username, email, active)| {
        RowRecord::new()
            .with_field("ID", id as i64)
            .with_field("Username", username)
            .with_field("Email", email)
            .with_field("Active", active)
    })
    .collect()
}

fn orders() -> Vec<RowRecord> {
    [
        (101, 1, 125.99, "Completed"),
        (102, 2, 89.50, "Processing"),
        (103, 1, 45.75, "Shipped"),
        (104, 3, 210.25, "Pending"),
        (105, 4, 55.00, "Completed"),
    ]
    .into_iter()
    .map(|(id, user_id, total, status)| {
        RowRecord::new()
            .with_field("ID", id as i64)
            .with_field("UserID", user_id as i64)
            .with_field("TotalPrice", total)
            .with_field("Status", status)
    })
    .collect()
}

fn products() -> Vec<RowRecord> {
    [
        (201, "Laptop", 999.99, "Electronics"),
        (202, "Headphones", 129.99, "Electronics"),
        (203, "Coffee Maker", 79.50, "Appliances"),
        (204, "Running Shoes", 89.95, "Footwear"),
        (205, "Desk Chair", 199.99, "Furniture"),
    ]
    .into_iter()
    .map(|(id, name, price, category)| {
        RowRecord::new()
            .with_field("ID", id as i64)
            .with_field("Name", name)
            .with_field("Price", price)
            .with_field("Category", category)
    })
    .collect()
}

fn categories() -> Vec<RowRecord> {
    [
        (301, "Electronics", "electronics"),
        (302, "Appliances", "appliances"),
        (303, "Footwear", "footwear"),
        (304, "Furniture", "furniture"),
        (305, "Books", "books"),
    ]
    .into_iter()
    .map(|(id, name, slug)| {
        RowRecord::new()
            .with_field("ID", id as i64)
            .with_field("Name", name)
            .with_field("Slug", slug)
    })
    .collect()
}
