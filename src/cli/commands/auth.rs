use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_WHOAMI: &str = "whoami";
pub const CMD_REGISTER_STUDENT: &str = "register-student";

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_NAME: &str = "name";
pub const ARG_STUDENT_NUMBER: &str = "student-number";

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long(ARG_PASSWORD)
        .help("Account password")
        .env("ATLAS_PASSWORD")
        .hide_env_values(true)
        .required(true)
}

#[must_use]
pub fn subcommands() -> Vec<Command> {
    vec![
        Command::new(CMD_LOGIN)
            .about("Log in and persist the session")
            .arg(
                Arg::new(ARG_EMAIL)
                    .long(ARG_EMAIL)
                    .help("Account email")
                    .env("ATLAS_EMAIL")
                    .required(true),
            )
            .arg(password_arg()),
        Command::new(CMD_LOGOUT).about("Clear the persisted session"),
        Command::new(CMD_WHOAMI).about("Show the logged-in user"),
        Command::new(CMD_REGISTER_STUDENT)
            .about("Create a student account with login credentials (admin)")
            .arg(Arg::new(ARG_NAME).long(ARG_NAME).required(true))
            .arg(Arg::new(ARG_EMAIL).long(ARG_EMAIL).required(true))
            .arg(
                Arg::new(ARG_STUDENT_NUMBER)
                    .long(ARG_STUDENT_NUMBER)
                    .required(true),
            )
            .arg(password_arg().env("ATLAS_STUDENT_PASSWORD")),
    ]
}
