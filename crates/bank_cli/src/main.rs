//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `bank_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use bank_core::db::fixture::create_seeded_context;
use bank_core::{AccountsRepository, AccountsService, ClientsRepository, ClientsService, Mapper};

fn main() {
    println!("bank_core version={}", bank_core::core_version());

    let mapper = match Mapper::build() {
        Ok(mapper) => mapper,
        Err(err) => {
            eprintln!("mapper build failed: {err}");
            std::process::exit(1);
        }
    };

    let conn = match create_seeded_context() {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("seeded context failed: {err}");
            std::process::exit(1);
        }
    };

    let accounts = AccountsService::new(&conn, &mapper).get_accounts();
    let clients = ClientsService::new(&conn, &mapper).get_clients();
    match (accounts, clients) {
        (Ok(accounts), Ok(clients)) => {
            println!("seeded accounts={} clients={}", accounts.len(), clients.len());
        }
        (Err(err), _) | (_, Err(err)) => {
            eprintln!("seeded store probe failed: {err}");
            std::process::exit(1);
        }
    }
}
