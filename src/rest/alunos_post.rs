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

//! API to create a new aluno.

use crate::driver::Driver;
use crate::rest::{EmptyBody, RestError};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

/// Message sent to the server to create a new aluno.
#[derive(Default, Deserialize, Serialize)]
pub(crate) struct CreateRequest {
    /// Name of the aluno to create.
    nome: String,

    /// Email address of the aluno to create.
    email: String,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Query(request): Query<CreateRequest>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let aluno = driver.create_aluno(request.nome, request.email).await?;
    Ok(Json(aluno))
}
