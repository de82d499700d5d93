//! SQLite clients service.
//!
//! # Invariants
//! - Read/delete misses are sentinel results; update misses are errors
//!   ("Client not found"). The asymmetry is contractual.
//! - Rows persist the entity shape (`email`); the wire rename to `Mail`
//!   happens in the mapper on the way out.

use crate::dto::ClientDto;
use crate::mapper::Mapper;
use crate::model::{Client, ClientType};
use crate::repo::{map_write_err, ClientsRepository, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};

const CLIENT_SELECT_SQL: &str =
    "SELECT id, name, phone_number, email, type, address_id FROM Clients";
const ENTITY: &str = "Client";

/// Concrete clients repository over one store connection.
pub struct ClientsService<'a> {
    conn: &'a Connection,
    mapper: &'a Mapper,
}

impl<'a> ClientsService<'a> {
    pub fn new(conn: &'a Connection, mapper: &'a Mapper) -> Self {
        Self { conn, mapper }
    }

    fn find_entity(&self, id: i64) -> RepoResult<Option<Client>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLIENT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query(params![id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_client_row(row)?));
        }
        Ok(None)
    }

    fn read_back(&self, id: i64) -> RepoResult<Client> {
        self.find_entity(id)?.ok_or_else(|| {
            RepoError::InvalidData(format!("written client {id} could not be read back"))
        })
    }
}

impl ClientsRepository for ClientsService<'_> {
    fn get_client(&self, id: i64) -> RepoResult<Option<ClientDto>> {
        Ok(self
            .find_entity(id)?
            .map(|entity| self.mapper.client_to_dto(&entity)))
    }

    fn get_clients(&self) -> RepoResult<Vec<ClientDto>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CLIENT_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut dtos = Vec::new();

        while let Some(row) = rows.next()? {
            let entity = parse_client_row(row)?;
            dtos.push(self.mapper.client_to_dto(&entity));
        }

        Ok(dtos)
    }

    fn save_client(&self, dto: &ClientDto) -> RepoResult<ClientDto> {
        let entity = self.mapper.client_to_entity(dto);

        self.conn
            .execute(
                "INSERT INTO Clients (name, phone_number, email, type, address_id)
                 VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    entity.name.as_str(),
                    entity.phone_number.as_str(),
                    entity.email.as_str(),
                    client_type_to_db(entity.kind),
                    entity.address_id,
                ],
            )
            .map_err(|err| map_write_err(ENTITY, err))?;

        let persisted = self.read_back(self.conn.last_insert_rowid())?;
        Ok(self.mapper.client_to_dto(&persisted))
    }

    fn delete_client(&self, id: i64) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM Clients WHERE id = ?1;", params![id])
            .map_err(|err| map_write_err(ENTITY, err))?;
        Ok(changed > 0)
    }

    fn put_client(&self, id: i64, dto: &ClientDto) -> RepoResult<ClientDto> {
        if self.find_entity(id)?.is_none() {
            return Err(RepoError::NotFound { entity: ENTITY });
        }

        let entity = self.mapper.client_to_entity(dto);
        self.conn
            .execute(
                "UPDATE Clients
                 SET name = ?1, phone_number = ?2, email = ?3, type = ?4, address_id = ?5
                 WHERE id = ?6;",
                params![
                    entity.name.as_str(),
                    entity.phone_number.as_str(),
                    entity.email.as_str(),
                    client_type_to_db(entity.kind),
                    entity.address_id,
                    id,
                ],
            )
            .map_err(|err| map_write_err(ENTITY, err))?;

        let persisted = self.read_back(id)?;
        Ok(self.mapper.client_to_dto(&persisted))
    }
}

fn parse_client_row(row: &Row<'_>) -> RepoResult<Client> {
    let type_text: String = row.get("type")?;
    let kind = parse_client_type(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid client type `{type_text}` in Clients.type"))
    })?;

    Ok(Client {
        id: row.get("id")?,
        name: row.get("name")?,
        phone_number: row.get("phone_number")?,
        email: row.get("email")?,
        kind,
        address_id: row.get("address_id")?,
    })
}

fn client_type_to_db(kind: ClientType) -> &'static str {
    match kind {
        ClientType::Individual => "individual",
        ClientType::Business => "business",
    }
}

fn parse_client_type(value: &str) -> Option<ClientType> {
    match value {
        "individual" => Some(ClientType::Individual),
        "business" => Some(ClientType::Business),
        _ => None,
    }
}
