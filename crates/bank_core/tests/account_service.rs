use bank_core::db::fixture::{create_seeded_context, SEEDED_ACCOUNT_COUNT};
use bank_core::{AccountDto, AccountType, AccountsRepository, AccountsService, Mapper, RepoError};
use rust_decimal::Decimal;

fn new_account_dto(client_id: i64) -> AccountDto {
    AccountDto {
        id: 0,
        name: "Account".to_string(),
        balance: Decimal::ZERO,
        kind: AccountType::SavingsAccount,
        is_active: false,
        client_id,
    }
}

#[test]
fn get_by_id_returns_matching_account() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    let account = service.get_account(1).unwrap().unwrap();
    assert_eq!(account.id, 1);
}

#[test]
fn get_by_id_returns_none_for_missing_account() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    assert!(service.get_account(6).unwrap().is_none());
}

#[test]
fn get_accounts_returns_seeded_rows_in_id_order() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    let accounts = service.get_accounts().unwrap();
    assert_eq!(accounts.len(), SEEDED_ACCOUNT_COUNT);
    let ids: Vec<i64> = accounts.iter().map(|dto| dto.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn save_assigns_id_and_persists_submitted_fields() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    let dto = new_account_dto(4);
    let response = service.save_account(&dto).unwrap();

    assert_eq!(response.id, 6);
    let stored = service.get_account(response.id).unwrap().unwrap();
    assert_eq!(stored.name, dto.name);
    assert_eq!(stored.balance, dto.balance);
    assert_eq!(stored.kind, dto.kind);
    assert_eq!(stored.is_active, dto.is_active);
    assert_eq!(stored.client_id, dto.client_id);
}

#[test]
fn save_ignores_caller_supplied_id() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    let mut dto = new_account_dto(4);
    dto.id = 42;
    let response = service.save_account(&dto).unwrap();

    assert_eq!(response.id, 6);
    assert!(service.get_account(42).unwrap().is_none());
}

#[test]
fn save_with_missing_client_fails_referential_integrity() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    let dto = new_account_dto(99);
    let err = service.save_account(&dto).unwrap_err();
    assert!(matches!(err, RepoError::ReferentialIntegrity { .. }));
    assert_eq!(service.get_accounts().unwrap().len(), SEEDED_ACCOUNT_COUNT);
}

#[test]
fn delete_existing_account_returns_true_and_removes_row() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    assert!(service.delete_account(1).unwrap());
    assert_eq!(
        service.get_accounts().unwrap().len(),
        SEEDED_ACCOUNT_COUNT - 1
    );
    assert!(service.get_account(1).unwrap().is_none());
}

#[test]
fn delete_missing_account_returns_false_and_leaves_store_unchanged() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    assert!(!service.delete_account(6).unwrap());
    assert_eq!(service.get_accounts().unwrap().len(), SEEDED_ACCOUNT_COUNT);
}

#[test]
fn put_overwrites_mutable_fields_and_keeps_id() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    let created = service.save_account(&new_account_dto(4)).unwrap();

    let update = AccountDto {
        id: created.id,
        name: "Renamed account".to_string(),
        balance: "777.50".parse::<Decimal>().unwrap(),
        kind: AccountType::CurrentAccount,
        is_active: true,
        client_id: 2,
    };
    let response = service.put_account(created.id, &update).unwrap();

    assert_eq!(response.id, created.id);
    assert_eq!(response.name, update.name);
    assert_eq!(response.balance, update.balance);
    assert_eq!(response.kind, update.kind);
    assert_eq!(response.is_active, update.is_active);
    assert_eq!(response.client_id, update.client_id);

    let stored = service.get_account(created.id).unwrap().unwrap();
    assert_eq!(stored, response);
}

#[test]
fn put_missing_account_fails_with_exact_message() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    let dto = new_account_dto(4);
    let err = service.put_account(6, &dto).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { .. }));
    assert_eq!(err.to_string(), "Account not found");
}

#[test]
fn put_with_missing_client_fails_referential_integrity() {
    let conn = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();
    let service = AccountsService::new(&conn, &mapper);

    let mut dto = new_account_dto(99);
    dto.id = 1;
    let err = service.put_account(1, &dto).unwrap_err();
    assert!(matches!(err, RepoError::ReferentialIntegrity { .. }));
}

#[test]
fn contexts_are_isolated_from_each_other() {
    let conn_a = create_seeded_context().unwrap();
    let conn_b = create_seeded_context().unwrap();
    let mapper = Mapper::build().unwrap();

    let service_a = AccountsService::new(&conn_a, &mapper);
    let service_b = AccountsService::new(&conn_b, &mapper);

    assert!(service_a.delete_account(1).unwrap());
    service_a.save_account(&new_account_dto(4)).unwrap();

    let untouched = service_b.get_accounts().unwrap();
    assert_eq!(untouched.len(), SEEDED_ACCOUNT_COUNT);
    assert!(service_b.get_account(1).unwrap().is_some());
}
