//! Deterministic seeded store fixture.
//!
//! # Responsibility
//! - Produce a fully isolated, freshly migrated store per call.
//! - Seed the fixed baseline dataset with identical ids and field values on
//!   every invocation.
//!
//! # Invariants
//! - Two contexts created concurrently share no file, connection or cache.
//! - Dropping the returned connection releases the backing storage on every
//!   exit path, panics included.
//! - Baseline: 5 addresses, 5 clients (ids 1..5) and 5 accounts (ids 1..5)
//!   spanning 4 distinct clients.

use crate::db::{open_store_in_memory, DbResult};
use crate::model::Address;
use log::info;
use rusqlite::{params, Connection};

/// Account rows guaranteed by a fresh context.
pub const SEEDED_ACCOUNT_COUNT: usize = 5;
/// Client rows guaranteed by a fresh context.
pub const SEEDED_CLIENT_COUNT: usize = 5;

/// (id, name, phone_number, email, type, address_id)
const CLIENT_SEED: &[(i64, &str, &str, &str, &str, i64)] = &[
    (1, "Maria Petrova", "0885100200", "maria.petrova@mail.com", "individual", 1),
    (2, "Georgi Ivanov", "0886111222", "georgi.ivanov@mail.com", "individual", 2),
    (3, "Arc Consult EOOD", "029433100", "office@arcconsult.bg", "business", 3),
    (4, "Elena Dimitrova", "0887333444", "elena.dimitrova@mail.com", "individual", 4),
    (5, "Nord Trading AD", "029544200", "contact@nordtrading.bg", "business", 5),
];

/// (id, name, balance, type, is_active, client_id) - 4 distinct clients.
const ACCOUNT_SEED: &[(i64, &str, &str, &str, i64, i64)] = &[
    (1, "Main savings", "1500.00", "savings_account", 1, 1),
    (2, "Salary", "248.75", "current_account", 1, 2),
    (3, "Company operating", "98210.40", "current_account", 1, 3),
    (4, "Holiday fund", "620.00", "savings_account", 0, 4),
    (5, "Emergency reserve", "3200.00", "savings_account", 1, 1),
];

/// Creates a private, freshly migrated store seeded with the baseline rows.
///
/// The caller owns the returned connection exclusively; releasing it (drop)
/// discards the store.
pub fn create_seeded_context() -> DbResult<Connection> {
    let conn = open_store_in_memory()?;
    seed_baseline(&conn)?;
    info!(
        "event=fixture_seed module=db status=ok accounts={SEEDED_ACCOUNT_COUNT} clients={SEEDED_CLIENT_COUNT}"
    );
    Ok(conn)
}

fn seed_baseline(conn: &Connection) -> DbResult<()> {
    for address in baseline_addresses() {
        conn.execute(
            "INSERT INTO Addresses (id, line) VALUES (?1, ?2);",
            params![address.id, address.line],
        )?;
    }

    for (id, name, phone_number, email, kind, address_id) in CLIENT_SEED {
        conn.execute(
            "INSERT INTO Clients (id, name, phone_number, email, type, address_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![id, name, phone_number, email, kind, address_id],
        )?;
    }

    for (id, name, balance, kind, is_active, client_id) in ACCOUNT_SEED {
        conn.execute(
            "INSERT INTO Accounts (id, name, balance, type, is_active, client_id)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![id, name, balance, kind, is_active, client_id],
        )?;
    }

    Ok(())
}

fn baseline_addresses() -> Vec<Address> {
    [
        "12 Vitosha Blvd, Sofia",
        "4 Graf Ignatiev St, Sofia",
        "88 Maria Luiza Blvd, Plovdiv",
        "15 Slivnitsa Blvd, Varna",
        "2 Aleksandrovska St, Ruse",
    ]
    .iter()
    .enumerate()
    .map(|(index, line)| Address {
        id: index as i64 + 1,
        line: (*line).to_string(),
    })
    .collect()
}
