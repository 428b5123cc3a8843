//! Schema DDL for the catalog tables
//!
//! Table and column names follow the catalog's relational schema:
//! `users`, `category`, `item`. Referential integrity beyond these
//! foreign keys is the database's business, not this crate's.

pub const CREATE_USERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id SERIAL PRIMARY KEY,
    name VARCHAR(256) NOT NULL,
    email VARCHAR(256) NOT NULL,
    picture VARCHAR(256)
)
"#;

pub const CREATE_CATEGORY_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS category (
    id SERIAL PRIMARY KEY,
    name VARCHAR(250) NOT NULL,
    user_id INTEGER REFERENCES users (id)
)
"#;

pub const CREATE_ITEM_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS item (
    id SERIAL PRIMARY KEY,
    name VARCHAR(250) NOT NULL,
    description VARCHAR(2048),
    created TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated TIMESTAMPTZ,
    category_id INTEGER REFERENCES category (id),
    user_id INTEGER REFERENCES users (id)
)
"#;

/// Tables in creation order (respects foreign keys)
pub fn create_tables_sql() -> [&'static str; 3] {
    [CREATE_USERS_TABLE, CREATE_CATEGORY_TABLE, CREATE_ITEM_TABLE]
}

/// Indexes backing the hot lookups: users by email, categories by name,
/// items by category and by recency
pub fn create_indexes_sql() -> Vec<&'static str> {
    vec![
        "CREATE INDEX IF NOT EXISTS idx_users_email ON users (email)",
        "CREATE INDEX IF NOT EXISTS idx_category_name ON category (name)",
        "CREATE INDEX IF NOT EXISTS idx_item_category_id ON item (category_id)",
        "CREATE INDEX IF NOT EXISTS idx_item_created ON item (created DESC)",
    ]
}

/// Tables in drop order (reverse of creation)
pub fn drop_tables_sql() -> [&'static str; 3] {
    [
        "DROP TABLE IF EXISTS item CASCADE",
        "DROP TABLE IF EXISTS category CASCADE",
        "DROP TABLE IF EXISTS users CASCADE",
    ]
}
