use crate::{
    features::{
        courses,
        dashboard::StudentOverview,
        registrations::{client, Registration},
        results, students,
    },
    portal::Portal,
    session::{Profile, Role},
};
use anyhow::{bail, Result};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Enroll {
        course_id: i64,
        student_id: Option<i64>,
        date: Option<NaiveDate>,
    },
    Drop {
        registration_id: i64,
    },
}

/// Students act on their own registrations, resolved from the student number
/// of the session. Admins see everything and must name the student to enroll.
/// # Errors
/// Returns an error if the guard, the student lookup or a request fails.
pub async fn execute(portal: &Portal, command: Command) -> Result<()> {
    let profile = portal.require_authenticated()?;
    let gateway = portal.gateway();

    match command {
        Command::List => {}
        Command::Enroll {
            course_id,
            student_id,
            date,
        } => {
            let student_id = match (profile.role, student_id) {
                (Role::Admin, Some(id)) => id,
                (Role::Admin, None) => bail!("--student is required when enrolling as admin"),
                (Role::Student, requested) => {
                    let own = own_overview(portal, &profile).await?;
                    let Some(student) = own.student.as_ref() else {
                        bail!("No student record matches your student number");
                    };
                    if requested.is_some_and(|id| id != student.id) {
                        bail!("Students can only enroll themselves");
                    }
                    if own.registration_for_course(course_id).is_some() {
                        bail!("Already registered for course {course_id}");
                    }
                    student.id
                }
            };
            client::enroll(gateway, student_id, course_id, date).await?;
            println!("Registered student {student_id} for course {course_id}.");
        }
        Command::Drop { registration_id } => {
            if profile.role == Role::Student {
                let own = own_overview(portal, &profile).await?;
                if !own
                    .registrations
                    .iter()
                    .any(|registration| registration.id == registration_id)
                {
                    bail!("Registration {registration_id} is not one of yours");
                }
            }
            client::drop(gateway, registration_id).await?;
            println!("Registration {registration_id} dropped.");
        }
    }

    match profile.role {
        Role::Admin => print_registrations(&client::list(gateway).await?),
        Role::Student => print_registrations(&own_overview(portal, &profile).await?.registrations),
    }
    Ok(())
}

/// Fetches every list the student dashboard is derived from.
pub(crate) async fn own_overview(portal: &Portal, profile: &Profile) -> Result<StudentOverview> {
    let gateway = portal.gateway();
    let (all_students, all_courses, all_registrations, all_results) = tokio::try_join!(
        students::client::list(gateway),
        courses::client::list(gateway),
        client::list(gateway),
        results::client::list(gateway),
    )?;

    Ok(StudentOverview::build(
        profile.student_number.as_deref().unwrap_or_default(),
        &all_students,
        &all_courses,
        &all_registrations,
        &all_results,
    ))
}

pub fn print_registrations(registrations: &[Registration]) {
    if registrations.is_empty() {
        println!("No registrations.");
        return;
    }
    println!("{:<6} {:<12} {:<10} DATE", "ID", "STUDENT", "COURSE");
    for registration in registrations {
        println!(
            "{:<6} {:<12} {:<10} {}",
            registration.id,
            registration
                .student
                .as_ref()
                .map_or("-", |student| student.student_number.as_str()),
            registration
                .course
                .as_ref()
                .map_or("-", |course| course.code.as_str()),
            registration.registration_date.as_deref().unwrap_or("-")
        );
    }
}
