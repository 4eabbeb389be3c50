use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Student profile row. Every optional column stays NULL until the student
/// fills it in.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct StudentRow {
    pub student_id: i64,
    pub name: String,
    pub email: String,
    pub cgpa: Option<f64>,
    pub graduation_year: Option<i32>,
    pub department: Option<String>,
}

/// One academic term with its GPA.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AcademicRecordRow {
    pub record_id: i64,
    pub term_name: String,
    pub gpa: Option<f64>,
}

/// Academic record enriched with its course names for the response body.
#[derive(Debug, Clone, Serialize)]
pub struct AcademicRecord {
    pub record_id: i64,
    pub term_name: String,
    pub gpa: Option<f64>,
    pub courses: Vec<String>,
}
