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

//! Test utilities for the business layer.

use crate::db::{self, Db, Executor};
use crate::driver::Driver;
use crate::model::{Aluno, AlunoId};
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// The database that the driver is backed by.
    db: Arc<dyn Db + Send + Sync>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes the test context, backed by an in-memory SQLite database.
    pub(crate) async fn setup() -> Self {
        let db = Arc::from(db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let driver = Driver::new(db.clone());
        Self { db, driver }
    }

    /// Gets a direct executor against the database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Gets a copy of the driver in this test context.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Syntactic sugar to create an aluno for testing purposes.
    pub(crate) async fn create_aluno(&self, nome: &str, email: &str) -> Aluno {
        db::create_aluno(&mut self.ex().await, nome.to_owned(), email.to_owned()).await.unwrap()
    }

    /// Syntactic sugar to fetch an aluno directly from the database.
    pub(crate) async fn get_aluno(&self, id: AlunoId) -> Option<Aluno> {
        db::get_aluno(&mut self.ex().await, id).await.unwrap()
    }
}
