pub mod health;
pub mod students;
pub mod courses;
pub mod grades;
pub mod metrics;
pub mod auth;
pub mod swagger;
