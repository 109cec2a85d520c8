// Alunos API
// Copyright 2024 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! Generic abstraction to access different database systems, plus the statements that manipulate
//! the alunos table on top of it.
//!
//! The facilities in this module provide an abstraction over different database systems such as
//! PostgreSQL and SQLite.  The PostgreSQL backend is for production use and the SQLite backend is
//! primarily intended to support unit tests.

use crate::model::{Aluno, AlunoId, ModelError};
use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;
use sqlx::sqlite::SqliteRow;

pub mod postgres;
pub mod sqlite;

/// Database errors.  Any unexpected errors that come from the database are classified as
/// `BackendError`, but errors we know about have more specific types.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DbError {
    /// Indicates that a request to create an entry failed because it already exists.
    #[error("Already exists")]
    AlreadyExists,

    /// Catch-all error type for unexpected database errors.
    #[error("Database error: {0}")]
    BackendError(String),

    /// Indicates a failure processing the data that already exists in the database.
    #[error("Data integrity error: {0}")]
    DataIntegrityError(String),

    /// Indicates that a requested entry does not exist.
    #[error("Entity not found")]
    NotFound,

    /// Indicates that the database is not available (maybe because of too many active concurrent
    /// connections).
    #[error("Unavailable")]
    Unavailable,
}

impl From<ModelError> for DbError {
    fn from(e: ModelError) -> Self {
        DbError::DataIntegrityError(e.to_string())
    }
}

/// Result type for this module.
pub type DbResult<T> = Result<T, DbError>;

/// A database executor that can talk to multiple database implementations.
///
/// This type provides a generic mechanism to access a typed instance of a database, which is needed
/// by sqlx to offer type safety guarantees during query compilation.  Users of this type are forced
/// to destructure it and issue different calls for each database.
///
/// Note that this can wrap an executor that talks directly to a pool or to an open transaction.
pub enum Executor {
    /// A PostgreSQL executor that can be used in `sqlx` operations.
    Postgres(postgres::PostgresExecutor),

    /// A SQLite executor that can be used in `sqlx` operations.
    Sqlite(sqlite::SqliteExecutor),
}

/// A wrapper for a database executor backed by an open transaction.
pub struct TxExecutor(Executor);

impl TxExecutor {
    /// Returns the executor wrapped by this transaction.
    ///
    /// This would be better called `executor` but this method is used so frequently that it makes
    /// call sites too verbose.
    pub fn ex(&mut self) -> &mut Executor {
        &mut self.0
    }

    /// Commits the transaction.
    pub async fn commit(self) -> DbResult<()> {
        match self.0 {
            Executor::Postgres(e) => e.commit().await,
            Executor::Sqlite(e) => e.commit().await,
        }
    }
}

/// Abstraction over the database connection.
#[async_trait]
pub trait Db {
    /// Obtains an executor for direct access to the pool.
    ///
    /// This would be better called `executor` but this method is used so frequently that it makes
    /// call sites too verbose.
    async fn ex(&self) -> DbResult<Executor>;

    /// Begins a transaction.
    ///
    /// It is the responsibility of the caller to call `commit` on the returned executor.  Otherwise
    /// the transaction is rolled back on drop.
    async fn begin(&self) -> DbResult<TxExecutor>;

    /// Closes all connections to the database.
    async fn close(&self);
}

/// Initializes the database schema.
pub async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,
    }
}

impl TryFrom<PgRow> for Aluno {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let nome: String = row.try_get("nome").map_err(postgres::map_sqlx_error)?;
        let email: String = row.try_get("email").map_err(postgres::map_sqlx_error)?;

        Ok(Aluno::new(AlunoId::new(id), nome, email))
    }
}

impl TryFrom<SqliteRow> for Aluno {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let nome: String = row.try_get("nome").map_err(sqlite::map_sqlx_error)?;
        let email: String = row.try_get("email").map_err(sqlite::map_sqlx_error)?;

        Ok(Aluno::new(AlunoId::from_i64(id)?, nome, email))
    }
}

/// Creates a new aluno with the given `nome` and `email`, returning the stored record with the
/// id that the database assigned to it.
pub(crate) async fn create_aluno(
    ex: &mut Executor,
    nome: String,
    email: String,
) -> DbResult<Aluno> {
    let id = match ex {
        Executor::Postgres(ex) => {
            let query_str = "INSERT INTO alunos (nome, email) VALUES ($1, $2) RETURNING id";
            let row = sqlx::query(query_str)
                .bind(nome.as_str())
                .bind(email.as_str())
                .fetch_one(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            let id: i32 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
            AlunoId::new(id)
        }

        Executor::Sqlite(ex) => {
            let query_str = "INSERT INTO alunos (nome, email) VALUES (?, ?)";
            let done = sqlx::query(query_str)
                .bind(nome.as_str())
                .bind(email.as_str())
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            AlunoId::from_i64(done.last_insert_rowid())?
        }
    };

    Ok(Aluno::new(id, nome, email))
}

/// Returns the window of alunos that starts at offset `skip` and contains at most `limit`
/// entries, in insertion order.
pub(crate) async fn list_alunos(ex: &mut Executor, skip: u32, limit: u32) -> DbResult<Vec<Aluno>> {
    let mut alunos = Vec::new();
    match ex {
        Executor::Postgres(ex) => {
            let query_str = "SELECT id, nome, email FROM alunos ORDER BY id LIMIT $1 OFFSET $2";
            let rows = sqlx::query(query_str)
                .bind(i64::from(limit))
                .bind(i64::from(skip))
                .fetch_all(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            alunos.reserve(rows.len());
            for row in rows {
                alunos.push(Aluno::try_from(row)?);
            }
        }

        Executor::Sqlite(ex) => {
            let query_str = "SELECT id, nome, email FROM alunos ORDER BY id LIMIT ? OFFSET ?";
            let rows = sqlx::query(query_str)
                .bind(i64::from(limit))
                .bind(i64::from(skip))
                .fetch_all(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            alunos.reserve(rows.len());
            for row in rows {
                alunos.push(Aluno::try_from(row)?);
            }
        }
    }
    Ok(alunos)
}

/// Gets the aluno with the given `id`, or `None` if it does not exist.
pub(crate) async fn get_aluno(ex: &mut Executor, id: AlunoId) -> DbResult<Option<Aluno>> {
    match ex {
        Executor::Postgres(ex) => {
            let query_str = "SELECT id, nome, email FROM alunos WHERE id = $1";
            let raw_aluno = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_optional(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            match raw_aluno {
                Some(row) => Ok(Some(Aluno::try_from(row)?)),
                None => Ok(None),
            }
        }

        Executor::Sqlite(ex) => {
            let query_str = "SELECT id, nome, email FROM alunos WHERE id = ?";
            let raw_aluno = sqlx::query(query_str)
                .bind(id.as_i32())
                .fetch_optional(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            match raw_aluno {
                Some(row) => Ok(Some(Aluno::try_from(row)?)),
                None => Ok(None),
            }
        }
    }
}

/// Replaces the `nome` and `email` of the aluno with the given `id`, returning the updated
/// record.  Returns `None` and leaves the table untouched when the aluno does not exist.
pub(crate) async fn update_aluno(
    ex: &mut Executor,
    id: AlunoId,
    nome: String,
    email: String,
) -> DbResult<Option<Aluno>> {
    let rows_affected = match ex {
        Executor::Postgres(ex) => {
            let query_str = "UPDATE alunos SET nome = $1, email = $2 WHERE id = $3";
            let done = sqlx::query(query_str)
                .bind(nome.as_str())
                .bind(email.as_str())
                .bind(id.as_i32())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        Executor::Sqlite(ex) => {
            let query_str = "UPDATE alunos SET nome = ?, email = ? WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(nome.as_str())
                .bind(email.as_str())
                .bind(id.as_i32())
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }
    };

    match rows_affected {
        0 => Ok(None),
        1 => Ok(Some(Aluno::new(id, nome, email))),
        _ => Err(DbError::BackendError("Update affected more than one row".to_owned())),
    }
}

/// Deletes the aluno with the given `id`, returning whether an entry was actually removed.
pub(crate) async fn delete_aluno(ex: &mut Executor, id: AlunoId) -> DbResult<bool> {
    let rows_affected = match ex {
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM alunos WHERE id = $1";
            let done = sqlx::query(query_str)
                .bind(id.as_i32())
                .execute(ex)
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM alunos WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(id.as_i32())
                .execute(ex)
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }
    };

    match rows_affected {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(DbError::BackendError("Delete affected more than one row".to_owned())),
    }
}
