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

//! High-level data types.

use derive_getters::Getters;
use derive_more::Constructor;
use serde::{Deserialize, Serialize};

/// Error type returned when data cannot be represented by the model types.
#[derive(Debug, PartialEq, thiserror::Error)]
#[error("{0}")]
pub(crate) struct ModelError(pub(crate) String);

/// Result type for this module.
pub(crate) type ModelResult<T> = Result<T, ModelError>;

/// Identifier of an aluno as assigned by the database.  We store this as an `i32` because that
/// is what the PostgreSQL integer column gives us, and we validate the range when a backend
/// hands us a wider type.
#[derive(Clone, Constructor, Copy, Eq, PartialEq, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize))]
pub(crate) struct AlunoId(i32);

impl AlunoId {
    /// Creates an id from an `i64` with range validation.
    pub(crate) fn from_i64(id: i64) -> ModelResult<AlunoId> {
        match i32::try_from(id) {
            Ok(id) => Ok(AlunoId(id)),
            Err(e) => Err(ModelError(format!("Aluno id cannot be represented: {}", e))),
        }
    }

    /// Returns the id as an `i32`.
    pub(crate) fn as_i32(&self) -> i32 {
        self.0
    }
}

/// A student registered in the service.
#[derive(Constructor, Getters, Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct Aluno {
    /// Identifier of the aluno, assigned by the database at creation time.
    id: AlunoId,

    /// Name of the aluno.  Free-form text on which we impose no structure.
    nome: String,

    /// Email of the aluno.  Free-form text on which we impose no structure.
    email: String,
}
