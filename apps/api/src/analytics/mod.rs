pub mod handlers;
pub mod readiness;
