use crate::{
    cli::{
        actions::{auth, courses, overview, registrations, results, students, Action},
        globals::GlobalArgs,
        navigator::TerminalNavigator,
    },
    portal::Portal,
};
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// Execute the provided action against a portal built from the global options.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action, globals: &GlobalArgs) -> Result<()> {
    let navigator = Arc::new(TerminalNavigator::new());
    let portal = Portal::new(&globals.config()?, navigator.clone())?;

    let result = match action {
        Action::Login(login) => auth::login(&portal, login).await,
        Action::Logout => {
            auth::logout(&portal);
            Ok(())
        }
        Action::WhoAmI => auth::whoami(&portal),
        Action::RegisterStudent(request) => auth::register_student(&portal, &request).await,
        Action::Courses(command) => courses::execute(&portal, command).await,
        Action::Students(command) => students::execute(&portal, command).await,
        Action::Results(command) => results::execute(&portal, command).await,
        Action::Registrations(command) => registrations::execute(&portal, command).await,
        Action::Overview => overview::execute(&portal).await,
    };

    if let Some(path) = navigator.redirected_to() {
        debug!(path, "action ended with a redirect");
    }

    result
}
