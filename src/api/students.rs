use actix_web::{web, HttpResponse};

use crate::models::{Student, StudentPayload};
use crate::services::report_service;
use crate::store::RecordStore;

#[utoipa::path(
    get,
    path = "/students",
    tag = "Students",
    responses(
        (status = 200, description = "All students in insertion order", body = [Student])
    )
)]
pub async fn get_students(store: web::Data<RecordStore>) -> HttpResponse {
    log::info!("📋 GET /students");
    HttpResponse::Ok().json(store.list_students())
}

#[utoipa::path(
    post,
    path = "/students",
    tag = "Students",
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Student created with server-assigned id", body = Student),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn create_student(
    store: web::Data<RecordStore>,
    payload: web::Json<StudentPayload>,
) -> HttpResponse {
    log::info!("📝 POST /students - name: {}", payload.name);

    let student = store.create_student(payload.into_inner());
    log::info!("✅ Student created with id {}", student.id);
    HttpResponse::Created().json(student)
}

#[utoipa::path(
    get,
    path = "/students/{id}",
    tag = "Students",
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(store: web::Data<RecordStore>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🔍 GET /students/{}", id);

    match store.get_student(id) {
        Ok(student) => HttpResponse::Ok().json(student),
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
    path = "/students/{id}",
    tag = "Students",
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student replaced, id preserved", body = Student),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    store: web::Data<RecordStore>,
    path: web::Path<i64>,
    payload: web::Json<StudentPayload>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("📝 PUT /students/{}", id);

    match store.replace_student(id, payload.into_inner()) {
        Ok(student) => HttpResponse::Ok().json(student),
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
    path = "/students/{id}",
    tag = "Students",
    responses(
        (status = 204, description = "Student deleted"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(store: web::Data<RecordStore>, path: web::Path<i64>) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🗑️ DELETE /students/{}", id);

    match store.delete_student(id) {
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
    path = "/students/{id}/grades",
    tag = "Students",
    responses(
        (status = 200, description = "Raw grade records for the student, possibly empty")
    )
)]
pub async fn get_student_grades(
    store: web::Data<RecordStore>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("🎓 GET /students/{}/grades", id);

    // Lista crua, sem agregação; id desconhecido rende lista vazia
    HttpResponse::Ok().json(store.grades_for_student(id))
}

#[utoipa::path(
    get,
    path = "/students/{id}/report",
    tag = "Students",
    responses(
        (status = 200, description = "Aggregated courses, grades and GPA", body = report_service::StudentReport),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student_report(
    store: web::Data<RecordStore>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();
    log::info!("📊 GET /students/{}/report", id);

    match report_service::student_report(&store, id) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => {
            log::warn!("❌ {}", e);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": e.to_string()
            }))
        }
    }
}
