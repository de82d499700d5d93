//! SQLite accounts service.
//!
//! # Invariants
//! - Read/delete misses are sentinel results; update misses are errors
//!   ("Account not found"). The asymmetry is contractual.
//! - Foreign-key failures on write surface as `ReferentialIntegrity`.

use crate::dto::AccountDto;
use crate::mapper::Mapper;
use crate::model::{Account, AccountType};
use crate::repo::{map_write_err, AccountsRepository, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use rust_decimal::Decimal;

const ACCOUNT_SELECT_SQL: &str =
    "SELECT id, name, balance, type, is_active, client_id FROM Accounts";
const ENTITY: &str = "Account";

/// Concrete accounts repository over one store connection.
pub struct AccountsService<'a> {
    conn: &'a Connection,
    mapper: &'a Mapper,
}

impl<'a> AccountsService<'a> {
    pub fn new(conn: &'a Connection, mapper: &'a Mapper) -> Self {
        Self { conn, mapper }
    }

    fn find_entity(&self, id: i64) -> RepoResult<Option<Account>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACCOUNT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_account_row(row)?));
        }
        Ok(None)
    }

    fn read_back(&self, id: i64) -> RepoResult<Account> {
        self.find_entity(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("written account {id} could not be read back"))
        })
    }
}

impl AccountsRepository for AccountsService<'_> {
    fn get_account(&self, id: i64) -> RepoResult<Option<AccountDto>> {
        Ok(self
            .find_entity(id)?
            .map(|entity| self.mapper.account_to_dto(&entity)))
    }

    fn get_accounts(&self) -> RepoResult<Vec<AccountDto>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACCOUNT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut dtos = Vec::new();

        while let Some(row) = rows.next()? {
            let entity = parse_account_row(row)?;
            dtos.push(self.mapper.account_to_dto(&entity));
        }

        Ok(dtos)
    }

    fn save_account(&self, dto: &AccountDto) -> RepoResult<AccountDto> {
        let entity = self.mapper.account_to_entity(dto);

        self.conn
            .execute(
                "INSERT INTO Accounts (name, balance, type, is_active, client_id)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    entity.name.as_str(),
                    entity.balance.to_string(),
                    account_type_to_db(entity.kind),
                    bool_to_int(entity.is_active),
                    entity.client_id,
                ],
            )
            .map_err(|err| map_write_err(ENTITY, err))?;

        let persisted = self.read_back(self.conn.last_insert_rowid())?;
        Ok(self.mapper.account_to_dto(&persisted))
    }

    fn delete_account(&self, id: i64) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM Accounts WHERE id = ?1;", params![id])
            .map_err(|err| map_write_err(ENTITY, err))?;
        Ok(changed > 0)
    }

    fn put_account(&self, id: i64, dto: &AccountDto) -> RepoResult<AccountDto> {
        if self.find_entity(id)?.is_none() {
            return Err(RepoError::NotFound { entity: ENTITY });
        }

        let entity = self.mapper.account_to_entity(dto);
        self.conn
            .execute(
                "UPDATE Accounts
                 SET name = ?1, balance = ?2, type = ?3, is_active = ?4, client_id = ?5
                 WHERE id = ?6;",
                params![
                    entity.name.as_str(),
                    entity.balance.to_string(),
                    account_type_to_db(entity.kind),
                    bool_to_int(entity.is_active),
                    entity.client_id,
                    id,
                ],
            )
            .map_err(|err| map_write_err(ENTITY, err))?;

        let persisted = self.read_back(id)?;
        Ok(self.mapper.account_to_dto(&persisted))
    }
}

fn parse_account_row(row: &Row<'_>) -> RepoResult<Account> {
    let balance_text: String = row.get("balance")?;
    let balance = balance_text.parse::<Decimal>().map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid balance value `{balance_text}` in Accounts.balance"
        ))
    })?;

    let type_text: String = row.get("type")?;
    let kind = parse_account_type(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid account type `{type_text}` in Accounts.type"
        ))
    })?;

    let is_active = match row.get::<_, i64>("is_active")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid is_active value `{other}` in Accounts.is_active"
            )));
        }
    };

    Ok(Account {
        id: row.get("id")?,
        name: row.get("name")?,
        balance,
        kind,
        is_active,
        client_id: row.get("client_id")?,
    })
}

fn account_type_to_db(kind: AccountType) -> &'static str {
    match kind {
        AccountType::SavingsAccount => "savings_account",
        AccountType::CurrentAccount => "current_account",
    }
}

fn parse_account_type(value: &str) -> Option<AccountType> {
    match value {
        "savings_account" => Some(AccountType::SavingsAccount),
        "current_account" => Some(AccountType::CurrentAccount),
        _ => None,
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
