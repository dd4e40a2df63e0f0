use actix_web::{web, HttpResponse};

use crate::models::{Course, UpdateCourseRequest};
use crate::store::RecordStore;

#[utoipa::path(
    get,
    path = "/courses",
    tag = "Courses",
    responses(
        (status = 200, description = "All courses in insertion order", body = [Course])
    )
)]
pub async fn get_courses(store: web::Data<RecordStore>) -> HttpResponse {
    log::info!("📋 GET /courses");
    HttpResponse::Ok().json(store.list_courses())
}

#[utoipa::path(
    post,
    path = "/courses",
    tag = "Courses",
    request_body = Course,
    responses(
        (status = 201, description = "Course registered with the client-supplied id", body = Course),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn create_course(
    store: web::Data<RecordStore>,
    payload: web::Json<Course>,
) -> HttpResponse {
    log::info!("📝 POST /courses - name: {}", payload.name);

    let course = store.create_course(payload.into_inner());
    log::info!("✅ Course {} registered", course.id);
    HttpResponse::Created().json(course)
}

#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = "Courses",
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course(store: web::Data<RecordStore>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🔍 GET /courses/{}", id);

    match store.get_course(id) {
        Ok(course) => HttpResponse::Ok().json(course),
        Err(e) => {
            log::warn!("❌ {}", e);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    put,
    path = "/courses/{id}",
    tag = "Courses",
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course merged in place, unsupplied fields kept", body = Course),
        (status = 404, description = "Course not found")
    )
)]
pub async fn update_course(
    store: web::Data<RecordStore>,
    path: web::Path<i64>,
    payload: web::Json<UpdateCourseRequest>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("📝 PUT /courses/{}", id);

    match store.merge_course(id, payload.into_inner()) {
        Ok(course) => HttpResponse::Ok().json(course),
        Err(e) => {
            log::warn!("❌ {}", e);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/courses/{id}",
    tag = "Courses",
    responses(
        (status = 204, description = "Course deleted"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn delete_course(store: web::Data<RecordStore>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /courses/{}", id);

    match store.delete_course(id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => {
            log::warn!("❌ {}", e);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/courses/{id}/students",
    tag = "Courses",
    responses(
        (status = 200, description = "Free-text student name list of the course"),
        (status = 404, description = "Course not found")
    )
)]
pub async fn get_course_students(
    store: web::Data<RecordStore>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("👥 GET /courses/{}/students", id);

    match store.course_students(id) {
        Ok(students) => HttpResponse::Ok().json(students),
        Err(e) => {
            log::warn!("❌ {}", e);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}
