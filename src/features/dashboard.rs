//! Read-only views derived from the resource lists. They hold no state of
//! their own and are rebuilt from fresh lists after every mutation.

use crate::features::{
    courses::Course, registrations::Registration, results::ResultRecord, students::Student,
};
use serde::Serialize;

/// Number of courses and students shown in the admin "recent" panels.
pub const RECENT_LIMIT: usize = 3;

/// A course the current student is registered for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    pub registration_id: i64,
    pub course: Course,
    pub registration_date: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentOverview {
    pub student: Option<Student>,
    pub registrations: Vec<Registration>,
    pub courses: Vec<EnrolledCourse>,
    pub available_courses: Vec<Course>,
    pub total_credits: u32,
    pub results: Vec<ResultRecord>,
}

impl StudentOverview {
    /// Builds the student dashboard for `student_number`.
    ///
    /// When no student record matches the number, nothing counts as
    /// registered: every course is available and the totals are zero.
    #[must_use]
    pub fn build(
        student_number: &str,
        students: &[Student],
        courses: &[Course],
        registrations: &[Registration],
        results: &[ResultRecord],
    ) -> Self {
        let wanted = student_number.trim();
        let student = crate::features::students::client::find_by_number(students, wanted).cloned();

        let registrations: Vec<Registration> = match &student {
            Some(student) => registrations
                .iter()
                .filter(|registration| registration.student_id() == Some(student.id))
                .cloned()
                .collect(),
            None => Vec::new(),
        };

        let enrolled: Vec<EnrolledCourse> = registrations
            .iter()
            .filter_map(|registration| {
                registration.course.clone().map(|course| EnrolledCourse {
                    registration_id: registration.id,
                    course,
                    registration_date: registration.registration_date.clone(),
                })
            })
            .collect();

        let available_courses = courses
            .iter()
            .filter(|course| {
                !registrations
                    .iter()
                    .any(|registration| registration.course_id() == Some(course.id))
            })
            .cloned()
            .collect();

        let total_credits = enrolled
            .iter()
            .map(|entry| entry.course.credits)
            .fold(0u32, u32::saturating_add);

        let results = if wanted.is_empty() {
            Vec::new()
        } else {
            results
                .iter()
                .filter(|result| result.student_number.trim() == wanted)
                .cloned()
                .collect()
        };

        Self {
            student,
            registrations,
            courses: enrolled,
            available_courses,
            total_credits,
            results,
        }
    }

    /// The registration to delete when dropping `course_id`.
    #[must_use]
    pub fn registration_for_course(&self, course_id: i64) -> Option<&Registration> {
        self.registrations
            .iter()
            .find(|registration| registration.course_id() == Some(course_id))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOverview {
    pub course_count: usize,
    pub student_count: usize,
    pub result_count: usize,
    pub recent_courses: Vec<Course>,
    pub recent_students: Vec<Student>,
}

impl AdminOverview {
    /// Counts plus the last [`RECENT_LIMIT`] courses and students in list order.
    #[must_use]
    pub fn build(courses: &[Course], students: &[Student], results: &[ResultRecord]) -> Self {
        Self {
            course_count: courses.len(),
            student_count: students.len(),
            result_count: results.len(),
            recent_courses: last_n(courses, RECENT_LIMIT),
            recent_students: last_n(students, RECENT_LIMIT),
        }
    }
}

fn last_n<T: Clone>(items: &[T], n: usize) -> Vec<T> {
    items[items.len().saturating_sub(n)..].to_vec()
}
