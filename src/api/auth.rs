use actix_web::{web, HttpResponse};

use crate::services::auth_service;
use crate::services::auth_service::{AuthResponse, Claims, LoginRequest, UserDirectory};

#[utoipa::path(
    post,
    path = "/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    directory: web::Data<UserDirectory>,
    request: web::Json<LoginRequest>,
) -> HttpResponse {
    log::info!("🔐 POST /login - username: {}", request.username);

    match auth_service::login(&directory, &request) {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.username);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.username, e);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "success": false,
                "error": "Invalid credentials"
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/protected",
    tag = "Auth",
    responses(
        (status = 200, description = "Caller holds the admin role"),
        (status = 401, description = "Missing, invalid or expired token"),
        (status = 403, description = "Valid token without the admin role")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn protected(user: web::ReqData<Claims>) -> HttpResponse {
    log::info!("🔒 GET /protected - sub: {}", user.sub);

    // O middleware já barrou 401; aqui só resta a checagem de papel
    if !user.roles.iter().any(|role| role == "admin") {
        log::warn!("❌ User {} lacks the admin role", user.sub);
        return HttpResponse::Forbidden().json(serde_json::json!({
            "message": "You are not authorized to access this endpoint"
        }));
    }

    HttpResponse::Ok().json(serde_json::json!({
        "message": "You are authorized to access this endpoint!"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::AuthMiddleware;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    macro_rules! init_auth_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(UserDirectory::with_default_users()))
                    .route("/login", web::post().to(login))
                    .service(
                        web::resource("/protected")
                            .wrap(AuthMiddleware)
                            .route(web::get().to(protected)),
                    ),
            )
            .await
        };
    }

    macro_rules! login_token {
        ($app:expr, $username:expr, $password:expr) => {{
            let req = test::TestRequest::post()
                .uri("/login")
                .set_json(serde_json::json!({ "username": $username, "password": $password }))
                .to_request();
            let body: serde_json::Value = test::call_and_read_body_json($app, req).await;
            body["access_token"].as_str().unwrap().to_string()
        }};
    }

    #[actix_web::test]
    async fn login_issues_token_with_roles_claim() {
        let app = init_auth_app!();

        let req = test::TestRequest::post()
            .uri("/login")
            .set_json(serde_json::json!({ "username": "alice", "password": "password1" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body["success"], true);
        let claims = auth_service::verify_token(body["access_token"].as_str().unwrap()).unwrap();
        assert_eq!(claims.sub, "1");
        assert!(claims.roles.contains(&"admin".to_string()));
    }

    #[actix_web::test]
    async fn login_with_bad_credentials_is_401() {
        let app = init_auth_app!();

        for payload in [
            serde_json::json!({ "username": "alice", "password": "wrong" }),
            serde_json::json!({ "username": "nobody", "password": "password1" }),
        ] {
            let req = test::TestRequest::post()
                .uri("/login")
                .set_json(payload)
                .to_request();
            let res = test::call_service(&app, req).await;
            assert_eq!(res.status(), 401);
        }
    }

    #[actix_web::test]
    async fn protected_requires_admin_role() {
        let app = init_auth_app!();

        // alice tem o papel admin: 200
        let token = login_token!(&app, "alice", "password1");
        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        // bob é só user: 403
        let token = login_token!(&app, "bob", "password2");
        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 403);
    }

    #[actix_web::test]
    async fn protected_without_token_is_401_before_role_check() {
        let app = init_auth_app!();

        for request in [
            test::TestRequest::get().uri("/protected"),
            test::TestRequest::get()
                .uri("/protected")
                .insert_header(("Authorization", "Bearer garbage")),
            test::TestRequest::get()
                .uri("/protected")
                .insert_header(("Authorization", "Basic abc")),
        ] {
            let res = test::call_service(&app, request.to_request()).await;
            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

            // corpo JSON no mesmo formato dos demais erros da API
            assert_eq!(
                res.headers().get("content-type").unwrap(),
                "application/json"
            );
            let body: serde_json::Value = test::read_body_json(res).await;
            assert_eq!(body["success"], false);
            assert!(body["error"].is_string());
        }
    }
}
