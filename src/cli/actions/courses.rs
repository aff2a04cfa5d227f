use crate::{
    cli::actions::Crud,
    features::courses::{client, Course, CourseInput},
    portal::Portal,
    session::Role,
};
use anyhow::Result;

/// Anyone logged in may list courses; changes are admin-only. Every command
/// ends by printing the refreshed list.
/// # Errors
/// Returns an error if the guard, validation or a request fails.
pub async fn execute(portal: &Portal, command: Crud<CourseInput>) -> Result<()> {
    if command.is_mutation() {
        portal.require_role(Role::Admin)?;
    } else {
        portal.require_authenticated()?;
    }

    let gateway = portal.gateway();
    match command {
        Crud::List => {}
        Crud::Add(input) => {
            client::create(gateway, &input).await?;
            println!("Course {} added.", input.code.trim());
        }
        Crud::Update { id, input } => {
            client::update(gateway, id, &input).await?;
            println!("Course {id} updated.");
        }
        Crud::Delete { id } => {
            client::delete(gateway, id).await?;
            println!("Course {id} deleted.");
        }
    }

    print_courses(&client::list(gateway).await?);
    Ok(())
}

pub fn print_courses(courses: &[Course]) {
    if courses.is_empty() {
        println!("No courses.");
        return;
    }
    println!(
        "{:<6} {:<10} {:<32} {:>7}  INSTRUCTOR",
        "ID", "CODE", "TITLE", "CREDITS"
    );
    for course in courses {
        println!(
            "{:<6} {:<10} {:<32} {:>7}  {}",
            course.id, course.code, course.title, course.credits, course.instructor
        );
    }
}
