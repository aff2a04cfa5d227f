//! Subcommands for the course, student, result and registration resources.

use clap::{Arg, ArgAction, Command};

pub const CMD_COURSES: &str = "courses";
pub const CMD_STUDENTS: &str = "students";
pub const CMD_RESULTS: &str = "results";
pub const CMD_REGISTRATIONS: &str = "registrations";
pub const CMD_OVERVIEW: &str = "overview";

pub const CMD_LIST: &str = "list";
pub const CMD_ADD: &str = "add";
pub const CMD_UPDATE: &str = "update";
pub const CMD_DELETE: &str = "delete";
pub const CMD_ENROLL: &str = "enroll";
pub const CMD_DROP: &str = "drop";

pub const ARG_ID: &str = "id";
pub const ARG_CODE: &str = "code";
pub const ARG_TITLE: &str = "title";
pub const ARG_CREDITS: &str = "credits";
pub const ARG_INSTRUCTOR: &str = "instructor";
pub const ARG_NAME: &str = "name";
pub const ARG_EMAIL: &str = "email";
pub const ARG_STUDENT_NUMBER: &str = "student-number";
pub const ARG_COURSE_CODE: &str = "course-code";
pub const ARG_GRADE: &str = "grade";
pub const ARG_MINE: &str = "mine";
pub const ARG_COURSE: &str = "course";
pub const ARG_STUDENT: &str = "student";
pub const ARG_DATE: &str = "date";

fn id_arg(help: &'static str) -> Arg {
    Arg::new(ARG_ID)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(i64))
}

fn text_arg(name: &'static str) -> Arg {
    Arg::new(name).long(name).required(true)
}

/// `list`, `add`, `update <ID>` and `delete <ID>` sharing the same form fields.
fn crud(name: &'static str, about: &'static str, fields: &[Arg]) -> Command {
    Command::new(name)
        .about(about)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(Command::new(CMD_LIST).about("List all records"))
        .subcommand(
            Command::new(CMD_ADD)
                .about("Create a record")
                .args(fields.iter().cloned()),
        )
        .subcommand(
            Command::new(CMD_UPDATE)
                .about("Replace a record")
                .arg(id_arg("Record id"))
                .args(fields.iter().cloned()),
        )
        .subcommand(
            Command::new(CMD_DELETE)
                .about("Delete a record")
                .arg(id_arg("Record id")),
        )
}

fn course_fields() -> Vec<Arg> {
    vec![
        text_arg(ARG_CODE),
        text_arg(ARG_TITLE),
        text_arg(ARG_CREDITS).value_parser(clap::value_parser!(u32)),
        text_arg(ARG_INSTRUCTOR),
    ]
}

fn student_fields() -> Vec<Arg> {
    vec![
        text_arg(ARG_NAME),
        text_arg(ARG_EMAIL),
        text_arg(ARG_STUDENT_NUMBER),
    ]
}

fn result_fields() -> Vec<Arg> {
    vec![
        text_arg(ARG_STUDENT_NUMBER),
        text_arg(ARG_COURSE_CODE),
        text_arg(ARG_GRADE),
    ]
}

#[must_use]
pub fn subcommands() -> Vec<Command> {
    let results = crud(CMD_RESULTS, "Manage grades", &result_fields()).mut_subcommand(
        CMD_LIST,
        |list| {
            list.arg(
                Arg::new(ARG_MINE)
                    .long(ARG_MINE)
                    .help("Only the logged-in student's results")
                    .action(ArgAction::SetTrue),
            )
        },
    );

    vec![
        crud(CMD_COURSES, "Manage courses", &course_fields()),
        crud(CMD_STUDENTS, "Manage student records (admin)", &student_fields()),
        results,
        Command::new(CMD_REGISTRATIONS)
            .about("Course registrations")
            .subcommand_required(true)
            .arg_required_else_help(true)
            .subcommand(Command::new(CMD_LIST).about("List registrations"))
            .subcommand(
                Command::new(CMD_ENROLL)
                    .about("Register for a course")
                    .arg(
                        Arg::new(ARG_COURSE)
                            .long(ARG_COURSE)
                            .help("Course id")
                            .required(true)
                            .value_parser(clap::value_parser!(i64)),
                    )
                    .arg(
                        Arg::new(ARG_STUDENT)
                            .long(ARG_STUDENT)
                            .help("Student id (admins only, students enroll themselves)")
                            .value_parser(clap::value_parser!(i64)),
                    )
                    .arg(
                        Arg::new(ARG_DATE)
                            .long(ARG_DATE)
                            .help("Registration date, YYYY-MM-DD (default: today)")
                            .value_parser(clap::value_parser!(chrono::NaiveDate)),
                    ),
            )
            .subcommand(
                Command::new(CMD_DROP)
                    .about("Drop a registration")
                    .arg(id_arg("Registration id")),
            ),
        Command::new(CMD_OVERVIEW).about("Dashboard summary for the logged-in user"),
    ]
}
