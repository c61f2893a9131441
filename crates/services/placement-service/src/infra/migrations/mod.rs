//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}
//!
//! Tables are created parents first: roles, then the three aggregate roots
//! with their child tables, then accounts, which reference all of them.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_roles_table;
mod m20240101_000002_create_facility_tables;
mod m20240101_000003_create_placement_executive_tables;
mod m20240101_000004_create_student_tables;
mod m20240101_000005_create_accounts_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_roles_table::Migration),
            Box::new(m20240101_000002_create_facility_tables::Migration),
            Box::new(m20240101_000003_create_placement_executive_tables::Migration),
            Box::new(m20240101_000004_create_student_tables::Migration),
            Box::new(m20240101_000005_create_accounts_table::Migration),
        ]
    }
}

/// Auto-increment integer primary key.
fn id_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

/// Non-null timestamp column.
fn timestamp_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .not_null()
        .to_owned()
}

/// Nullable soft delete timestamp column.
fn deleted_at_column<T: IntoIden>(name: T) -> ColumnDef {
    ColumnDef::new(name)
        .timestamp_with_time_zone()
        .null()
        .to_owned()
}

/// Plain (non-unique) index on one column.
fn index_on<T, C>(name: &str, table: T, column: C) -> IndexCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden,
{
    Index::create()
        .name(name)
        .table(table)
        .col(column)
        .to_owned()
}

/// Foreign key from a child column to its parent's primary key.
fn foreign_key<T, C, P, K>(name: &str, table: T, column: C, parent: P, key: K) -> ForeignKeyCreateStatement
where
    T: IntoIden + 'static,
    C: IntoIden,
    P: IntoIden + 'static,
    K: IntoIden,
{
    ForeignKey::create()
        .name(name)
        .from(table, column)
        .to(parent, key)
        .on_delete(ForeignKeyAction::Restrict)
        .to_owned()
}
