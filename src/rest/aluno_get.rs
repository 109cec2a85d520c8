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

//! API to get a single aluno by its identifier.

use crate::driver::Driver;
use crate::model::AlunoId;
use crate::rest::{EmptyBody, RestError};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    Path(id): Path<i32>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    let aluno = driver.get_aluno(AlunoId::new(id)).await?;
    Ok(Json(aluno))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::*;
    use crate::rest::ErrorResponse;
    use crate::rest::testutils::*;
    use axum::http;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::GET, format!("/alunos/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        let aluno = context.create_aluno("Ana", "ana@example.com").await;
        context.create_aluno("Bruno", "bruno@example.com").await;

        let response = OneShotBuilder::new(context.into_app(), route("1"))
            .send_empty()
            .await
            .expect_json::<Aluno>()
            .await;
        assert_eq!(aluno, response);
    }

    #[tokio::test]
    async fn test_missing() {
        let context = TestContext::setup().await;

        context.create_aluno("Ana", "ana@example.com").await;

        let response = OneShotBuilder::new(context.into_app(), route("2"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_json::<ErrorResponse>()
            .await;
        assert_eq!("Aluno not found", response.detail);
    }

    #[tokio::test]
    async fn test_invalid_id() {
        OneShotBuilder::new(TestContext::setup().await.into_app(), route("abc"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::BAD_REQUEST)
            .expect_text("Invalid URL")
            .await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("1"));
}
