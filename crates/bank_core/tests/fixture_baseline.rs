use bank_core::db::fixture::{
    create_seeded_context, SEEDED_ACCOUNT_COUNT, SEEDED_CLIENT_COUNT,
};
use bank_core::{AccountsRepository, AccountsService, ClientsRepository, ClientsService, Mapper};
use std::collections::HashSet;

#[test]
fn fresh_context_carries_the_fixed_baseline() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();

    let accounts = AccountsService::new(&conn, &mapper).get_accounts().unwrap();
    let clients = ClientsService::new(&conn, &mapper).get_clients().unwrap();

    assert_eq!(accounts.len(), SEEDED_ACCOUNT_COUNT);
    assert_eq!(clients.len(), SEEDED_CLIENT_COUNT);

    let referenced: HashSet<i64> = accounts.iter().map(|dto| dto.client_id).collect();
    assert_eq!(referenced.len(), 4);

    let client_ids: HashSet<i64> = clients.iter().map(|dto| dto.id).collect();
    assert!(referenced.is_subset(&client_ids));
}

#[test]
fn seeding_is_deterministic_across_invocations() {
    let mapper = Mapper::build().unwrap();

    let conn_a = create_seeded_context().unwrap();
    let conn_b = create_seeded_context().unwrap();

    let accounts_a = AccountsService::new(&conn_a, &mapper).get_accounts().unwrap();
    let accounts_b = AccountsService::new(&conn_b, &mapper).get_accounts().unwrap();
    assert_eq!(accounts_a, accounts_b);

    let clients_a = ClientsService::new(&conn_a, &mapper).get_clients().unwrap();
    let clients_b = ClientsService::new(&conn_b, &mapper).get_clients().unwrap();
    assert_eq!(clients_a, clients_b);
}

#[test]
fn dropping_a_context_discards_its_storage() {
    let mapper = Mapper::build().unwrap();

    {
        let conn = create_seeded_context().unwrap();
        let service = AccountsService::new(&conn, &mapper);
        assert!(service.delete_account(1).unwrap());
    }

    // A new context starts from the untouched baseline.
    let conn = create_seeded_context().unwrap();
    let service = AccountsService::new(&conn, &mapper);
    assert!(service.get_account(1).unwrap().is_some());
    assert_eq!(service.get_accounts().unwrap().len(), SEEDED_ACCOUNT_COUNT);
}
