use crate::{
    cli::actions::Crud,
    features::students::{client, Student, StudentInput},
    portal::Portal,
    session::Role,
};
use anyhow::Result;

/// # Errors
/// Returns an error for non-admins, invalid input or a failed request.
pub async fn execute(portal: &Portal, command: Crud<StudentInput>) -> Result<()> {
    portal.require_role(Role::Admin)?;

    let gateway = portal.gateway();
    match command {
        Crud::List => {}
        Crud::Add(input) => {
            client::create(gateway, &input).await?;
            println!("Student {} added.", input.student_number.trim());
        }
        Crud::Update { id, input } => {
            client::update(gateway, id, &input).await?;
            println!("Student {id} updated.");
        }
        Crud::Delete { id } => {
            client::delete(gateway, id).await?;
            println!("Student {id} deleted.");
        }
    }

    print_students(&client::list(gateway).await?);
    Ok(())
}

pub fn print_students(students: &[Student]) {
    if students.is_empty() {
        println!("No students.");
        return;
    }
    println!("{:<6} {:<12} {:<28} EMAIL", "ID", "NUMBER", "NAME");
    for student in students {
        println!(
            "{:<6} {:<12} {:<28} {}",
            student.id, student.student_number, student.name, student.email
        );
    }
}
