use crate::{
    cli::actions::{courses::print_courses, registrations::own_overview, results::print_results},
    features::{courses, dashboard::AdminOverview, results, students},
    portal::Portal,
    session::Role,
};
use anyhow::Result;

/// # Errors
/// Returns an error when logged out or when a list cannot be fetched.
pub async fn execute(portal: &Portal) -> Result<()> {
    let profile = portal.require_authenticated()?;

    match profile.role {
        Role::Admin => {
            let gateway = portal.gateway();
            let (all_courses, all_students, all_results) = tokio::try_join!(
                courses::client::list(gateway),
                students::client::list(gateway),
                results::client::list(gateway),
            )?;
            let overview = AdminOverview::build(&all_courses, &all_students, &all_results);

            println!("Welcome, {}", profile.name);
            println!(
                "Courses: {}  Students: {}  Results: {}",
                overview.course_count, overview.student_count, overview.result_count
            );
            println!("\nRecent courses");
            print_courses(&overview.recent_courses);
            println!("\nRecent students");
            for student in &overview.recent_students {
                println!("  {} {}", student.student_number, student.name);
            }
        }
        Role::Student => {
            let overview = own_overview(portal, &profile).await?;

            let name = overview
                .student
                .as_ref()
                .map_or(profile.name.as_str(), |student| student.name.as_str());
            println!("Welcome, {name}");
            println!(
                "Registered courses: {}  Total credits: {}  Results: {}",
                overview.courses.len(),
                overview.total_credits,
                overview.results.len()
            );
            println!("\nMy courses");
            for entry in &overview.courses {
                println!(
                    "  [{}] {} {} ({} credits) since {}",
                    entry.registration_id,
                    entry.course.code,
                    entry.course.title,
                    entry.course.credits,
                    entry.registration_date.as_deref().unwrap_or("-")
                );
            }
            println!("\nAvailable courses");
            print_courses(&overview.available_courses);
            println!("\nMy results");
            print_results(&overview.results);
        }
    }
    Ok(())
}
