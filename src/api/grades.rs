use actix_web::{web, HttpResponse};

use crate::models::Grade;
use crate::store::RecordStore;

#[utoipa::path(
    get,
    path = "/grades",
    tag = "Grades",
    responses(
        (status = 200, description = "All grade records in insertion order", body = [Grade])
    )
)]
pub async fn get_grades(store: web::Data<RecordStore>) -> HttpResponse {
    log::info!("📋 GET /grades");
    HttpResponse::Ok().json(store.list_grades())
}

#[utoipa::path(
    post,
    path = "/grades",
    tag = "Grades",
    request_body = Grade,
    responses(
        (status = 201, description = "Grade appended", body = Grade),
        (status = 400, description = "Malformed request body")
    )
)]
pub async fn create_grade(store: web::Data<RecordStore>, payload: web::Json<Grade>) -> HttpResponse {
    log::info!(
        "📝 POST /grades - student {} / course {}",
        payload.student_id,
        payload.course_id
    );

    // Append-only; student_id/course_id não são validados contra as coleções
    let grade = store.add_grade(payload.into_inner());
    HttpResponse::Created().json(grade)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn routes() -> actix_web::Scope {
        web::scope("/grades")
            .route("", web::get().to(get_grades))
            .route("", web::post().to(create_grade))
    }

    #[actix_web::test]
    async fn post_appends_and_get_lists_in_order() {
        let store = web::Data::new(RecordStore::new());
        let app =
            test::init_service(App::new().app_data(store.clone()).service(routes())).await;

        for (student_id, grade) in [(1, 90.0), (2, 85.0)] {
            let req = test::TestRequest::post()
                .uri("/grades")
                .set_json(serde_json::json!({
                    "student_id": student_id, "course_id": 1, "grade": grade
                }))
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), 201);
        }

        let req = test::TestRequest::get().uri("/grades").to_request();
        let grades: Vec<Grade> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(grades.len(), 2);
        assert_eq!(grades[0].grade, 90.0);
        assert_eq!(grades[1].grade, 85.0);
    }

    #[actix_web::test]
    async fn dangling_references_are_accepted() {
        let store = web::Data::new(RecordStore::new());
        let app =
            test::init_service(App::new().app_data(store.clone()).service(routes())).await;

        // nenhum aluno/curso existe, mesmo assim a nota entra
        let req = test::TestRequest::post()
            .uri("/grades")
            .set_json(serde_json::json!({
                "student_id": 99, "course_id": 99, "grade": 50.0
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 201);
    }
}
