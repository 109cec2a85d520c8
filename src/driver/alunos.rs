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

//! Operations on the collection of alunos.

use crate::db;
use crate::driver::{Driver, DriverResult};
use crate::model::Aluno;

impl Driver {
    /// Registers a new aluno with the given `nome` and `email` and returns the stored record,
    /// including the id that was assigned to it.
    pub(crate) async fn create_aluno(self, nome: String, email: String) -> DriverResult<Aluno> {
        let aluno = db::create_aluno(&mut self.db.ex().await?, nome, email).await?;
        Ok(aluno)
    }

    /// Lists the window of alunos that starts at offset `skip` and contains at most `limit`
    /// entries.
    pub(crate) async fn list_alunos(self, skip: u32, limit: u32) -> DriverResult<Vec<Aluno>> {
        let alunos = db::list_alunos(&mut self.db.ex().await?, skip, limit).await?;
        Ok(alunos)
    }
}
