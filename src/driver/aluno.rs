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

//! Operations on one aluno.

use crate::db;
use crate::driver::{Driver, DriverError, DriverResult};
use crate::model::{Aluno, AlunoId};

impl Driver {
    /// Deletes an existing aluno by `id`.
    pub(crate) async fn delete_aluno(self, id: AlunoId) -> DriverResult<()> {
        if db::delete_aluno(&mut self.db.ex().await?, id).await? {
            Ok(())
        } else {
            Err(DriverError::NotFound("Aluno not found".to_owned()))
        }
    }

    /// Gets the details of the aluno with the given `id`.
    pub(crate) async fn get_aluno(self, id: AlunoId) -> DriverResult<Aluno> {
        match db::get_aluno(&mut self.db.ex().await?, id).await? {
            Some(aluno) => Ok(aluno),
            None => Err(DriverError::NotFound("Aluno not found".to_owned())),
        }
    }

    /// Replaces the `nome` and `email` of the aluno with the given `id` and returns the updated
    /// record.
    pub(crate) async fn update_aluno(
        self,
        id: AlunoId,
        nome: String,
        email: String,
    ) -> DriverResult<Aluno> {
        match db::update_aluno(&mut self.db.ex().await?, id, nome, email).await? {
            Some(aluno) => Ok(aluno),
            None => Err(DriverError::NotFound("Aluno not found".to_owned())),
        }
    }
}
