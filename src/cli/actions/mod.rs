pub mod auth;
pub mod courses;
pub mod overview;
pub mod registrations;
pub mod results;
pub mod students;

// Single dispatch point lives in `run`, so this file only lists what can run.
mod run;

use crate::{cli::globals::GlobalArgs, features::auth::RegisterStudentRequest};

/// List plus create/update/delete for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Crud<I> {
    List,
    Add(I),
    Update { id: i64, input: I },
    Delete { id: i64 },
}

impl<I> Crud<I> {
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Crud::List)
    }
}

#[derive(Debug)]
pub enum Action {
    Login(auth::Login),
    Logout,
    WhoAmI,
    RegisterStudent(RegisterStudentRequest),
    Courses(Crud<crate::features::courses::CourseInput>),
    Students(Crud<crate::features::students::StudentInput>),
    Results(results::Command),
    Registrations(registrations::Command),
    Overview,
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self, globals: &GlobalArgs) -> anyhow::Result<()> {
        run::execute(self, globals).await
    }
}
