use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    Error, HttpMessage, HttpResponse,
};
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};

use crate::services::auth_service;

/// Rejeita a request com 401 antes do handler quando o token Bearer está
/// ausente, malformado, inválido ou expirado. Com token válido, as Claims
/// verificadas ficam disponíveis via `web::ReqData<Claims>`.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        // Get Authorization header
        let auth_header = req.headers().get("Authorization");

        let message = match auth_header {
            Some(header_value) => {
                let bearer = header_value
                    .to_str()
                    .ok()
                    .and_then(|value| value.strip_prefix("Bearer "));

                match bearer {
                    Some(token) => match auth_service::verify_token(token) {
                        Ok(claims) => {
                            req.extensions_mut().insert(claims);

                            let fut = self.service.call(req);
                            return Box::pin(async move {
                                let res = fut.await?;
                                Ok(res.map_into_left_body())
                            });
                        }
                        Err(e) => {
                            log::warn!("❌ Token rejected: {}", e);
                            "Invalid or expired token"
                        }
                    },
                    None => "Invalid token format",
                }
            }
            None => "Missing authorization token",
        };

        // 401 com corpo JSON, no mesmo formato dos outros erros da API
        let (request, _) = req.into_parts();
        let response = HttpResponse::Unauthorized()
            .json(serde_json::json!({
                "success": false,
                "error": message
            }))
            .map_into_right_body();

        Box::pin(async move { Ok(ServiceResponse::new(request, response)) })
    }
}
