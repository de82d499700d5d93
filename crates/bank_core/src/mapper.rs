//! Entity <-> DTO mapping configuration.
//!
//! # Responsibility
//! - Translate stored entity shapes to wire DTO shapes and back, losslessly.
//! - Verify at build time that every declared field is covered by a rule.
//!
//! # Invariants
//! - A `Mapper` is built once per process and only ever read afterwards; it is
//!   passed by shared reference into every service instance.
//! - `Client.email` travels as `ClientDto.mail`; every other field maps under
//!   an identical name. Renames live in the rule tables, never in convention
//!   or reflection, so an uncovered field fails `build()` instead of being
//!   silently dropped.

use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::dto::{AccountDto, ClientDto};
use crate::model::{Account, Client};

/// One entity-field-to-dto-field translation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub entity: &'static str,
    pub dto: &'static str,
}

const fn rule(entity: &'static str, dto: &'static str) -> FieldRule {
    FieldRule { entity, dto }
}

const ACCOUNT_RULES: &[FieldRule] = &[
    rule("id", "id"),
    rule("name", "name"),
    rule("balance", "balance"),
    rule("type", "type"),
    rule("is_active", "is_active"),
    rule("client_id", "client_id"),
];

const CLIENT_RULES: &[FieldRule] = &[
    rule("id", "id"),
    rule("name", "name"),
    rule("phone_number", "phone_number"),
    // The one deliberate rename on the wire.
    rule("email", "mail"),
    rule("type", "type"),
    rule("address_id", "address_id"),
];

pub type MapperResult<T> = Result<T, MapperError>;

/// Configuration-build failure for the mapping layer.
#[derive(Debug, PartialEq, Eq)]
pub enum MapperError {
    /// A declared field has no covering rule.
    UnmappedField {
        aggregate: &'static str,
        side: &'static str,
        field: &'static str,
    },
    /// Two rules claim the same field on one side.
    DuplicateRule {
        aggregate: &'static str,
        side: &'static str,
        field: &'static str,
    },
    /// A rule names a field the shape does not declare.
    UnknownField {
        aggregate: &'static str,
        side: &'static str,
        field: &'static str,
    },
}

impl Display for MapperError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmappedField {
                aggregate,
                side,
                field,
            } => write!(f, "{aggregate} {side} field `{field}` has no mapping rule"),
            Self::DuplicateRule {
                aggregate,
                side,
                field,
            } => write!(
                f,
                "{aggregate} {side} field `{field}` is claimed by more than one rule"
            ),
            Self::UnknownField {
                aggregate,
                side,
                field,
            } => write!(
                f,
                "{aggregate} mapping rule names unknown {side} field `{field}`"
            ),
        }
    }
}

impl Error for MapperError {}

/// Immutable entity/DTO mapping configuration for all aggregates.
pub struct Mapper {
    account_rules: &'static [FieldRule],
    client_rules: &'static [FieldRule],
}

impl Mapper {
    /// Builds and verifies the process-wide mapping configuration.
    ///
    /// # Errors
    /// Fails when any declared field of either shape is not covered by
    /// exactly one rule, or when a rule names an undeclared field.
    pub fn build() -> MapperResult<Self> {
        verify_rules(
            "Account",
            ACCOUNT_RULES,
            Account::FIELD_NAMES,
            AccountDto::FIELD_NAMES,
        )?;
        verify_rules(
            "Client",
            CLIENT_RULES,
            Client::FIELD_NAMES,
            ClientDto::FIELD_NAMES,
        )?;

        Ok(Self {
            account_rules: ACCOUNT_RULES,
            client_rules: CLIENT_RULES,
        })
    }

    /// Verified account field rules.
    pub fn account_rules(&self) -> &[FieldRule] {
        self.account_rules
    }

    /// Verified client field rules.
    pub fn client_rules(&self) -> &[FieldRule] {
        self.client_rules
    }

    pub fn account_to_dto(&self, entity: &Account) -> AccountDto {
        AccountDto {
            id: entity.id,
            name: entity.name.clone(),
            balance: entity.balance,
            kind: entity.kind,
            is_active: entity.is_active,
            client_id: entity.client_id,
        }
    }

    pub fn account_to_entity(&self, dto: &AccountDto) -> Account {
        Account {
            id: dto.id,
            name: dto.name.clone(),
            balance: dto.balance,
            kind: dto.kind,
            is_active: dto.is_active,
            client_id: dto.client_id,
        }
    }

    pub fn client_to_dto(&self, entity: &Client) -> ClientDto {
        ClientDto {
            id: entity.id,
            name: entity.name.clone(),
            phone_number: entity.phone_number.clone(),
            mail: entity.email.clone(),
            kind: entity.kind,
            address_id: entity.address_id,
        }
    }

    pub fn client_to_entity(&self, dto: &ClientDto) -> Client {
        Client {
            id: dto.id,
            name: dto.name.clone(),
            phone_number: dto.phone_number.clone(),
            email: dto.mail.clone(),
            kind: dto.kind,
            address_id: dto.address_id,
        }
    }
}

fn verify_rules(
    aggregate: &'static str,
    rules: &'static [FieldRule],
    entity_fields: &'static [&'static str],
    dto_fields: &'static [&'static str],
) -> MapperResult<()> {
    check_side(aggregate, "entity", entity_fields, rules, |r| r.entity)?;
    check_side(aggregate, "dto", dto_fields, rules, |r| r.dto)?;
    Ok(())
}

fn check_side(
    aggregate: &'static str,
    side: &'static str,
    declared: &'static [&'static str],
    rules: &'static [FieldRule],
    pick: impl Fn(&FieldRule) -> &'static str,
) -> MapperResult<()> {
    let mut covered = HashSet::new();
    for field in rules.iter().map(pick) {
        if !declared.contains(&field) {
            return Err(MapperError::UnknownField {
                aggregate,
                side,
                field,
            });
        }
        if !covered.insert(field) {
            return Err(MapperError::DuplicateRule {
                aggregate,
                side,
                field,
            });
        }
    }

    for field in declared {
        if !covered.contains(field) {
            return Err(MapperError::UnmappedField {
                aggregate,
                side,
                field,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{check_side, rule, FieldRule, Mapper, MapperError};
    use crate::dto::ClientDto;
    use crate::model::{Client, ClientType};
    use rust_decimal::Decimal;

    #[test]
    fn build_succeeds_and_carries_the_mail_rename() {
        let mapper = Mapper::build().unwrap();
        assert!(mapper
            .client_rules()
            .iter()
            .any(|r| r.entity == "email" && r.dto == "mail"));
        assert!(mapper
            .account_rules()
            .iter()
            .all(|r| r.entity == r.dto));
    }

    #[test]
    fn client_round_trip_is_lossless() {
        let mapper = Mapper::build().unwrap();
        let entity = Client {
            id: 7,
            name: "Maria Petrova".to_string(),
            phone_number: "0885100200".to_string(),
            email: "maria.petrova@mail.com".to_string(),
            kind: ClientType::Individual,
            address_id: 1,
        };

        let dto = mapper.client_to_dto(&entity);
        assert_eq!(dto.mail, entity.email);

        let back = mapper.client_to_entity(&dto);
        assert_eq!(back, entity);
    }

    #[test]
    fn account_round_trip_is_lossless() {
        let mapper = Mapper::build().unwrap();
        let dto = crate::dto::AccountDto {
            id: 2,
            name: "Salary".to_string(),
            balance: "248.75".parse::<Decimal>().unwrap(),
            kind: crate::model::AccountType::CurrentAccount,
            is_active: true,
            client_id: 2,
        };

        let entity = mapper.account_to_entity(&dto);
        assert_eq!(mapper.account_to_dto(&entity), dto);
    }

    #[test]
    fn uncovered_field_fails_the_build_check() {
        // One rule short of the declared client shape.
        const PARTIAL: &[FieldRule] = &[
            rule("id", "id"),
            rule("name", "name"),
            rule("phone_number", "phone_number"),
            rule("type", "type"),
            rule("address_id", "address_id"),
        ];

        let err = check_side("Client", "entity", Client::FIELD_NAMES, PARTIAL, |r| {
            r.entity
        })
        .unwrap_err();
        assert_eq!(
            err,
            MapperError::UnmappedField {
                aggregate: "Client",
                side: "entity",
                field: "email",
            }
        );
    }

    #[test]
    fn duplicate_rule_fails_the_build_check() {
        const DOUBLED: &[FieldRule] = &[
            rule("id", "id"),
            rule("name", "name"),
            rule("phone_number", "phone_number"),
            rule("email", "mail"),
            rule("email", "mail"),
            rule("type", "type"),
            rule("address_id", "address_id"),
        ];

        let err = check_side("Client", "dto", ClientDto::FIELD_NAMES, DOUBLED, |r| r.dto)
            .unwrap_err();
        assert!(matches!(err, MapperError::DuplicateRule { field: "mail", .. }));
    }

    #[test]
    fn unknown_field_fails_the_build_check() {
        const STRAY: &[FieldRule] = &[rule("id", "id"), rule("fax_number", "fax_number")];

        let err = check_side("Client", "entity", Client::FIELD_NAMES, STRAY, |r| r.entity)
            .unwrap_err();
        assert!(matches!(
            err,
            MapperError::UnknownField {
                field: "fax_number",
                ..
            }
        ));
    }
}
