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

//! API to update an existing aluno.

use crate::driver::Driver;
use crate::model::AlunoId;
use crate::rest::{EmptyBody, RestError};
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

/// Message sent to the server to replace the details of an aluno.
#[derive(Default, Deserialize, Serialize)]
pub(crate) struct UpdateRequest {
    /// New name for the aluno.
    nome: String,

    /// New email address for the aluno.
    email: String,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    Query(request): Query<UpdateRequest>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let aluno = driver.update_aluno(AlunoId::new(id), request.nome, request.email).await?;
    Ok(Json(aluno))
}
