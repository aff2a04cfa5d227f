use crate::{
    cli::{
        actions::{auth::Login, registrations, results, Action, Crud},
        commands::{self, auth as auth_cmd, records},
        globals::GlobalArgs,
    },
    features::{
        auth::RegisterStudentRequest, courses::CourseInput, results::ResultInput,
        students::StudentInput,
    },
};
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use secrecy::SecretString;
use std::{path::PathBuf, time::Duration};

fn required(matches: &clap::ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn record_id(matches: &clap::ArgMatches) -> Result<i64> {
    matches
        .get_one::<i64>(records::ARG_ID)
        .copied()
        .context("missing required argument: <ID>")
}

/// # Errors
/// Returns an error if `--api-url` is missing.
pub fn globals(matches: &clap::ArgMatches) -> Result<GlobalArgs> {
    let mut globals = GlobalArgs::new(required(matches, commands::ARG_API_URL)?);
    if let Some(path) = matches.get_one::<PathBuf>(commands::ARG_STORAGE_PATH) {
        globals.storage_path.clone_from(path);
    }
    if let Some(seconds) = matches.get_one::<u64>(commands::ARG_TIMEOUT) {
        globals.timeout = Duration::from_secs(*seconds);
    }
    Ok(globals)
}

/// Parses `list | add | update <ID> | delete <ID>` with `form` reading the fields.
fn crud<I>(
    matches: &clap::ArgMatches,
    form: impl Fn(&clap::ArgMatches) -> Result<I>,
) -> Result<Crud<I>> {
    match matches.subcommand() {
        Some((records::CMD_LIST, _)) => Ok(Crud::List),
        Some((records::CMD_ADD, sub_m)) => Ok(Crud::Add(form(sub_m)?)),
        Some((records::CMD_UPDATE, sub_m)) => Ok(Crud::Update {
            id: record_id(sub_m)?,
            input: form(sub_m)?,
        }),
        Some((records::CMD_DELETE, sub_m)) => Ok(Crud::Delete {
            id: record_id(sub_m)?,
        }),
        other => Err(anyhow!("unknown subcommand: {:?}", other.map(|(name, _)| name))),
    }
}

fn course_form(matches: &clap::ArgMatches) -> Result<CourseInput> {
    Ok(CourseInput {
        code: required(matches, records::ARG_CODE)?,
        title: required(matches, records::ARG_TITLE)?,
        credits: matches
            .get_one::<u32>(records::ARG_CREDITS)
            .copied()
            .context("missing required argument: --credits")?,
        instructor: required(matches, records::ARG_INSTRUCTOR)?,
    })
}

fn student_form(matches: &clap::ArgMatches) -> Result<StudentInput> {
    Ok(StudentInput {
        name: required(matches, records::ARG_NAME)?,
        email: required(matches, records::ARG_EMAIL)?,
        student_number: required(matches, records::ARG_STUDENT_NUMBER)?,
    })
}

fn result_form(matches: &clap::ArgMatches) -> Result<ResultInput> {
    Ok(ResultInput {
        student_number: required(matches, records::ARG_STUDENT_NUMBER)?,
        course_code: required(matches, records::ARG_COURSE_CODE)?,
        grade: required(matches, records::ARG_GRADE)?,
    })
}

fn results_command(matches: &clap::ArgMatches) -> Result<results::Command> {
    if let Some(list) = matches.subcommand_matches(records::CMD_LIST) {
        return Ok(results::Command::List {
            mine: list.get_flag(records::ARG_MINE),
        });
    }
    Ok(results::Command::Change(crud(matches, result_form)?))
}

fn registrations_command(matches: &clap::ArgMatches) -> Result<registrations::Command> {
    match matches.subcommand() {
        Some((records::CMD_LIST, _)) => Ok(registrations::Command::List),
        Some((records::CMD_ENROLL, sub_m)) => Ok(registrations::Command::Enroll {
            course_id: sub_m
                .get_one::<i64>(records::ARG_COURSE)
                .copied()
                .context("missing required argument: --course")?,
            student_id: sub_m.get_one::<i64>(records::ARG_STUDENT).copied(),
            date: sub_m.get_one::<NaiveDate>(records::ARG_DATE).copied(),
        }),
        Some((records::CMD_DROP, sub_m)) => Ok(registrations::Command::Drop {
            registration_id: record_id(sub_m)?,
        }),
        other => Err(anyhow!("unknown subcommand: {:?}", other.map(|(name, _)| name))),
    }
}

/// # Errors
/// Returns an error if required arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    match matches.subcommand() {
        Some((auth_cmd::CMD_LOGIN, sub_m)) => Ok(Action::Login(Login {
            email: required(sub_m, auth_cmd::ARG_EMAIL)?,
            password: SecretString::from(required(sub_m, auth_cmd::ARG_PASSWORD)?),
        })),
        Some((auth_cmd::CMD_LOGOUT, _)) => Ok(Action::Logout),
        Some((auth_cmd::CMD_WHOAMI, _)) => Ok(Action::WhoAmI),
        Some((auth_cmd::CMD_REGISTER_STUDENT, sub_m)) => {
            Ok(Action::RegisterStudent(RegisterStudentRequest {
                name: required(sub_m, auth_cmd::ARG_NAME)?,
                email: required(sub_m, auth_cmd::ARG_EMAIL)?,
                student_number: required(sub_m, auth_cmd::ARG_STUDENT_NUMBER)?,
                password: SecretString::from(required(sub_m, auth_cmd::ARG_PASSWORD)?),
            }))
        }
        Some((records::CMD_COURSES, sub_m)) => Ok(Action::Courses(crud(sub_m, course_form)?)),
        Some((records::CMD_STUDENTS, sub_m)) => Ok(Action::Students(crud(sub_m, student_form)?)),
        Some((records::CMD_RESULTS, sub_m)) => Ok(Action::Results(results_command(sub_m)?)),
        Some((records::CMD_REGISTRATIONS, sub_m)) => {
            Ok(Action::Registrations(registrations_command(sub_m)?))
        }
        Some((records::CMD_OVERVIEW, _)) => Ok(Action::Overview),
        other => Err(anyhow!("unknown command: {:?}", other.map(|(name, _)| name))),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn parse(args: &[&str]) -> clap::ArgMatches {
        let mut argv = vec!["atlas", "--api-url", "http://localhost:8080"];
        argv.extend_from_slice(args);
        commands::new().get_matches_from(argv)
    }

    #[test]
    fn test_globals_from_matches() {
        temp_env::with_vars(
            [
                ("ATLAS_STORAGE_PATH", Some("/tmp/atlas-session.json")),
                ("ATLAS_TIMEOUT_SECONDS", Some("4")),
            ],
            || {
                let globals = globals(&parse(&["whoami"])).unwrap();
                assert_eq!(globals.api_url, "http://localhost:8080");
                assert_eq!(
                    globals.storage_path,
                    PathBuf::from("/tmp/atlas-session.json")
                );
                assert_eq!(globals.timeout, Duration::from_secs(4));
            },
        );
    }

    #[test]
    fn test_login_action_keeps_password_secret() {
        temp_env::with_vars([("ATLAS_PASSWORD", None::<&str>)], || {
            let action = handler(&parse(&[
                "login",
                "--email",
                "admin@u.edu",
                "--password",
                "pw",
            ]))
            .unwrap();
            let Action::Login(login) = action else {
                panic!("expected login action");
            };
            assert_eq!(login.email, "admin@u.edu");
            assert_eq!(login.password.expose_secret(), "pw");
            assert!(!format!("{login:?}").contains("pw\""));
        });
    }

    #[test]
    fn test_course_update_action() {
        let action = handler(&parse(&[
            "courses",
            "update",
            "7",
            "--code",
            "CS101",
            "--title",
            "Intro",
            "--credits",
            "3",
            "--instructor",
            "Dr. Smith",
        ]))
        .unwrap();
        let Action::Courses(Crud::Update { id, input }) = action else {
            panic!("expected course update");
        };
        assert_eq!(id, 7);
        assert_eq!(input.credits, 3);
        assert_eq!(input.instructor, "Dr. Smith");
    }

    #[test]
    fn test_results_list_and_delete() {
        let list = handler(&parse(&["results", "list", "--mine"])).unwrap();
        assert!(matches!(
            list,
            Action::Results(results::Command::List { mine: true })
        ));

        let delete = handler(&parse(&["results", "delete", "3"])).unwrap();
        assert!(matches!(
            delete,
            Action::Results(results::Command::Change(Crud::Delete { id: 3 }))
        ));
    }

    #[test]
    fn test_enroll_with_date() {
        let action = handler(&parse(&[
            "registrations",
            "enroll",
            "--course",
            "5",
            "--date",
            "2024-09-02",
        ]))
        .unwrap();
        let Action::Registrations(registrations::Command::Enroll {
            course_id,
            student_id,
            date,
        }) = action
        else {
            panic!("expected enroll");
        };
        assert_eq!(course_id, 5);
        assert_eq!(student_id, None);
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 9, 2));
    }

    #[test]
    fn test_simple_actions() {
        assert!(matches!(handler(&parse(&["logout"])).unwrap(), Action::Logout));
        assert!(matches!(
            handler(&parse(&["overview"])).unwrap(),
            Action::Overview
        ));
        assert!(matches!(
            handler(&parse(&["registrations", "drop", "9"])).unwrap(),
            Action::Registrations(registrations::Command::Drop { registration_id: 9 })
        ));
    }
}
