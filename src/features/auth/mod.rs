//! Auth endpoints. Login itself is performed by the session store, which owns
//! the resulting token; this module carries the wire types and the admin-only
//! student account registration. Passwords must never be logged.

pub mod client;
pub mod types;

pub use client::register_student;
pub use types::RegisterStudentRequest;
