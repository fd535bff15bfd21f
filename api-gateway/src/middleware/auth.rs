//! Bearer token authentication for protected routes.
//!
//! Runs before any backend call: a missing or malformed token short-circuits
//! with 401 and the request never reaches a service. The token subject is the
//! only caller identity ever passed downstream; client-supplied ids are never
//! trusted for authorization.

use crate::error::GatewayError;
use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::ResponseError,
    Error, FromRequest, HttpMessage, HttpRequest,
};
use crypto_core::{TokenError, TokenKeys};
use futures::future::{ready, LocalBoxFuture, Ready};
use uuid::Uuid;

/// Caller identity extracted from the verified token subject.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

impl FromRequest for AuthUser {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        match req.extensions().get::<AuthUser>().copied() {
            Some(user) => ready(Ok(user)),
            None => ready(Err(
                GatewayError::unauthenticated("missing or invalid token").into()
            )),
        }
    }
}

pub struct AuthMiddleware {
    keys: TokenKeys,
}

impl AuthMiddleware {
    pub fn new(keys: TokenKeys) -> Self {
        Self { keys }
    }
}

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
        ready(Ok(AuthMiddlewareService {
            service,
            keys: self.keys.clone(),
        }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
    keys: TokenKeys,
}

impl<S> AuthMiddlewareService<S> {
    /// Reply with 401 without ever calling the wrapped service.
    fn reject<B: 'static>(
        req: ServiceRequest,
        message: &str,
    ) -> LocalBoxFuture<'static, Result<ServiceResponse<EitherBody<B>>, Error>> {
        let response = GatewayError::unauthenticated(message)
            .error_response()
            .map_into_right_body();
        Box::pin(ready(Ok(req.into_response(response))))
    }
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
        // Headers are read before extensions_mut so no immutable borrow is
        // still alive when the extensions are touched.
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.strip_prefix("Bearer "))
            .map(str::to_owned);

        let token = match token {
            Some(token) => token,
            None => return Self::reject(req, "missing or invalid token"),
        };

        match self.keys.verify_subject(&token) {
            Ok(user_id) => {
                req.extensions_mut().insert(AuthUser(user_id));
                let fut = self.service.call(req);
                Box::pin(async move { Ok(fut.await?.map_into_left_body()) })
            }
            Err(TokenError::Expired) => {
                tracing::debug!("rejected expired bearer token");
                Self::reject(req, "token has expired")
            }
            Err(TokenError::Invalid) => {
                tracing::debug!("rejected invalid bearer token");
                Self::reject(req, "missing or invalid token")
            }
        }
    }
}
