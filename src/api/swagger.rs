use utoipa::OpenApi;
use utoipa::openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Student Records API",
        version = "1.0.0",
        description = "In-memory record management API for students, courses and grades. \n\n**Storage:** everything lives in process memory and resets on restart.\n\n**Authentication:** `/login` issues a JWT Bearer token; only `/protected` requires one — the record endpoints are open.",
        contact(
            name = "Records Service Team"
        )
    ),
    paths(
        // Students
        crate::api::students::get_students,
        crate::api::students::create_student,
        crate::api::students::get_student,
        crate::api::students::update_student,
        crate::api::students::delete_student,
        crate::api::students::get_student_grades,
        crate::api::students::get_student_report,

        // Courses
        crate::api::courses::get_courses,
        crate::api::courses::create_course,
        crate::api::courses::get_course,
        crate::api::courses::update_course,
        crate::api::courses::delete_course,
        crate::api::courses::get_course_students,

        // Grades
        crate::api::grades::get_grades,
        crate::api::grades::create_grade,

        // Auth
        crate::api::auth::login,
        crate::api::auth::protected,

        // Health & Metrics
        crate::api::health::health_check,
        crate::api::metrics::get_metrics,
    ),
    components(
        schemas(
            crate::models::Student,
            crate::models::StudentPayload,
            crate::models::Course,
            crate::models::UpdateCourseRequest,
            crate::models::Grade,
            crate::services::report_service::StudentReport,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::AuthResponse,
            crate::services::auth_service::UserInfo,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Students", description = "Student CRUD plus per-student grade listing and GPA report."),
        (name = "Courses", description = "Course CRUD with client-supplied ids and partial-merge updates."),
        (name = "Grades", description = "Append-only grade records joining students and courses."),
        (name = "Auth", description = "Token issuance and the admin-only protected endpoint."),
        (name = "Health", description = "Health check and request counters for monitoring."),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT token"))
                        .build()
                ),
            );
        }
    }
}
