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

//! API to list the stored alunos.

use crate::driver::Driver;
use crate::rest::{EmptyBody, RestError};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

/// Message sent to the server to query a window of the alunos listing.
#[derive(Deserialize, Serialize)]
pub(crate) struct ListRequest {
    /// Number of alunos to skip from the start of the listing.
    #[serde(default)]
    skip: u32,

    /// Maximum number of alunos to return.
    #[serde(default = "default_limit")]
    limit: u32,
}

/// Default value of the `limit` query parameter.
fn default_limit() -> u32 {
    10
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Query(request): Query<ListRequest>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let alunos = driver.list_alunos(request.skip, request.limit).await?;
    Ok(Json(alunos))
}
