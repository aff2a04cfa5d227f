use crate::{
    cli::actions::Crud,
    features::results::{client, ResultInput, ResultRecord},
    portal::Portal,
    session::Role,
};
use anyhow::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `mine` limits the list to the logged-in student's own results.
    List { mine: bool },
    Change(Crud<ResultInput>),
}

/// # Errors
/// Returns an error if the guard, validation or a request fails.
pub async fn execute(portal: &Portal, command: Command) -> Result<()> {
    let gateway = portal.gateway();

    match command {
        Command::List { mine: true } => {
            print_results(&own_results(portal).await?);
            return Ok(());
        }
        Command::List { mine: false } | Command::Change(Crud::List) => {
            portal.require_role(Role::Admin)?;
        }
        Command::Change(change) => {
            portal.require_role(Role::Admin)?;
            match change {
                Crud::List => {}
                Crud::Add(input) => {
                    client::create(gateway, &input).await?;
                    println!(
                        "Result {} for {} recorded.",
                        input.grade.trim(),
                        input.student_number.trim()
                    );
                }
                Crud::Update { id, input } => {
                    client::update(gateway, id, &input).await?;
                    println!("Result {id} updated.");
                }
                Crud::Delete { id } => {
                    client::delete(gateway, id).await?;
                    println!("Result {id} deleted.");
                }
            }
        }
    }

    print_results(&client::list(gateway).await?);
    Ok(())
}

/// Results recorded under the logged-in student's number. A student session
/// without a number sees nothing.
///
/// # Errors
/// Returns an error if the session is not a student's or the request fails.
pub async fn own_results(portal: &Portal) -> Result<Vec<ResultRecord>> {
    let profile = portal.require_role(Role::Student)?;
    let number = profile.student_number.unwrap_or_default();
    Ok(client::list(portal.gateway())
        .await?
        .into_iter()
        .filter(|result| !number.is_empty() && result.student_number.trim() == number)
        .collect())
}

pub fn print_results(results: &[ResultRecord]) {
    if results.is_empty() {
        println!("No results.");
        return;
    }
    println!("{:<6} {:<12} {:<10} {:<6} COURSE", "ID", "NUMBER", "CODE", "GRADE");
    for result in results {
        println!(
            "{:<6} {:<12} {:<10} {:<6} {}",
            result.id,
            result.student_number,
            result.course_code,
            result.grade,
            result.course_name.as_deref().unwrap_or("-")
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{RecordingNavigator, UNAUTHORIZED_PATH},
        config::AppConfig,
        guards::GuardError,
        session::{Identity, Profile},
        storage::MemoryStorage,
    };
    use secrecy::SecretString;
    use serde_json::json;
    use std::{net::TcpListener, sync::Arc};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn portal_as(
        base_url: &str,
        profile: Profile,
        navigator: Arc<RecordingNavigator>,
    ) -> anyhow::Result<Portal> {
        let portal = Portal::with_storage(
            &AppConfig::new(base_url)?,
            Arc::new(MemoryStorage::new()),
            navigator,
        )?;
        let identity = Identity {
            profile,
            token: SecretString::from("t1".to_string()),
        };
        let context = portal.gateway().context();
        context.persist(&identity)?;
        context.publish(identity);
        Ok(portal)
    }

    async fn backend() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/results"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "studentNumber": "STU001", "courseCode": "CS101", "grade": "A"},
                {"id": 2, "studentNumber": "STU002", "courseCode": "CS101", "grade": "B"},
                {"id": 3, "studentNumber": " STU001 ", "courseCode": "MA201", "grade": "B+"}
            ])))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn mine_keeps_only_own_student_number() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = backend().await;
        let profile = Profile::new("Ada", "ada@u.edu", Role::Student, Some("STU001".into()));
        let portal = portal_as(&server.uri(), profile, Arc::new(RecordingNavigator::new()))?;

        let results = own_results(&portal).await?;

        assert_eq!(
            results.iter().map(|result| result.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        execute(&portal, Command::List { mine: true }).await?;
        Ok(())
    }

    #[tokio::test]
    async fn mine_is_for_students_only() -> anyhow::Result<()> {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return Ok(());
        }
        let server = backend().await;
        let navigator = Arc::new(RecordingNavigator::new());
        let profile = Profile::new("Admin", "admin@u.edu", Role::Admin, None);
        let portal = portal_as(&server.uri(), profile, navigator.clone())?;

        let err = own_results(&portal)
            .await
            .err()
            .ok_or_else(|| anyhow::anyhow!("expected the guard to refuse"))?;

        assert!(matches!(
            err.downcast_ref::<GuardError>(),
            Some(GuardError::WrongRole { .. })
        ));
        assert_eq!(navigator.last().as_deref(), Some(UNAUTHORIZED_PATH));
        Ok(())
    }
}
