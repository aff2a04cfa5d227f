use crate::features::{courses::Course, students::Student};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A course registration as returned by the backend. The nested records may
/// be missing when the referenced student or course was deleted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: i64,
    #[serde(default)]
    pub student: Option<Student>,
    #[serde(default)]
    pub course: Option<Course>,
    #[serde(default)]
    pub registration_date: Option<String>,
}

impl Registration {
    #[must_use]
    pub fn student_id(&self) -> Option<i64> {
        self.student.as_ref().map(|student| student.id)
    }

    #[must_use]
    pub fn course_id(&self) -> Option<i64> {
        self.course.as_ref().map(|course| course.id)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IdRef {
    pub id: i64,
}

/// Body of `POST /api/registrations`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRegistration {
    pub student: IdRef,
    pub course: IdRef,
    pub registration_date: NaiveDate,
}

impl NewRegistration {
    #[must_use]
    pub fn new(student_id: i64, course_id: i64, registration_date: NaiveDate) -> Self {
        Self {
            student: IdRef { id: student_id },
            course: IdRef { id: course_id },
            registration_date,
        }
    }
}
