mod api;
mod middleware;
mod models;
mod seeds;
mod services;
mod store;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "3001".to_string());

    if env::var("JWT_SECRET").is_err() {
        log::warn!("⚠️  JWT_SECRET not set — falling back to the development secret");
    }

    log::info!("🚀 Starting Records Service...");

    // In-memory record store: estado some no restart, por desenho
    let store = store::RecordStore::new();
    seeds::sample_records_seed::seed_sample_records(&store);
    let store_data = web::Data::new(store);

    // Diretório estático de usuários do auth (senhas com hash bcrypt)
    let directory_data =
        web::Data::new(services::auth_service::UserDirectory::with_default_users());

    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);
    log::info!("📄 OpenAPI spec at: http://{}:{}/api-docs/openapi.json", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin("http://localhost:3000")
            .allowed_origin("http://127.0.0.1:3000")
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(store_data.clone())
            .app_data(directory_data.clone())
            .wrap(cors)
            .wrap(middleware::RequestMetrics)
            .wrap(Logger::default())
            // Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Health check & metrics
            .route("/health", web::get().to(api::health::health_check))
            .route("/metrics", web::get().to(api::metrics::get_metrics))
            // Auth: emissão de token e endpoint restrito a admin.
            // Independente do record store — só /protected exige JWT.
            .route("/login", web::post().to(api::auth::login))
            .service(
                web::resource("/protected")
                    .wrap(middleware::AuthMiddleware)
                    .route(web::get().to(api::auth::protected)),
            )
            // Students (CRUD + notas + relatório com GPA)
            .service(
                web::scope("/students")
                    .route("", web::get().to(api::students::get_students))
                    .route("", web::post().to(api::students::create_student))
                    .route("/{id}", web::get().to(api::students::get_student))
                    .route("/{id}", web::put().to(api::students::update_student))
                    .route("/{id}", web::delete().to(api::students::delete_student))
                    .route("/{id}/grades", web::get().to(api::students::get_student_grades))
                    .route("/{id}/report", web::get().to(api::students::get_student_report)),
            )
            // Courses (CRUD com merge parcial no PUT)
            .service(
                web::scope("/courses")
                    .route("", web::get().to(api::courses::get_courses))
                    .route("", web::post().to(api::courses::create_course))
                    .route("/{id}", web::get().to(api::courses::get_course))
                    .route("/{id}", web::put().to(api::courses::update_course))
                    .route("/{id}", web::delete().to(api::courses::delete_course))
                    .route("/{id}/students", web::get().to(api::courses::get_course_students)),
            )
            // Grades (append-only)
            .service(
                web::scope("/grades")
                    .route("", web::get().to(api::grades::get_grades))
                    .route("", web::post().to(api::grades::create_grade)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
