pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{analytics, auth, matching, mentors, students};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Auth
        .route("/api/auth/register", post(auth::handlers::handle_register))
        .route(
            "/api/auth/login",
            post(auth::handlers::handle_login).get(auth::handlers::handle_login_method_hint),
        )
        // Student profile & assessment
        .route(
            "/api/users/student",
            get(students::handlers::handle_get_profile)
                .put(students::handlers::handle_update_profile),
        )
        .route(
            "/api/users/academic-records",
            get(students::handlers::handle_get_academic_records)
                .post(students::handlers::handle_add_academic_record),
        )
        .route(
            "/api/users/skills",
            get(students::handlers::handle_get_skill_catalog),
        )
        .route(
            "/api/users/student/skills",
            get(students::handlers::handle_get_student_skills)
                .post(students::handlers::handle_replace_student_skills),
        )
        .route(
            "/api/users/interests",
            get(students::handlers::handle_get_interest_catalog),
        )
        .route(
            "/api/users/student/interests",
            get(students::handlers::handle_get_student_interests)
                .post(students::handlers::handle_replace_student_interests),
        )
        // Career recommendations
        .route(
            "/api/career/recommendations",
            get(matching::handlers::handle_get_recommendations),
        )
        // Mentors
        .route("/api/mentors", get(mentors::handlers::handle_get_mentors))
        .route(
            "/api/mentors/request",
            post(mentors::handlers::handle_request_mentorship),
        )
        // Analytics
        .route(
            "/api/analytics",
            get(analytics::handlers::handle_get_analytics),
        )
        .with_state(state)
}
