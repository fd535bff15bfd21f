//! Unauthenticated routes: registration and login. Bodies map 1:1 onto the
//! identity service operations and its outcome is relayed as-is.

use crate::clients::ServiceClients;
use crate::error::GatewayError;
use crate::rest_api::models::{LoginBody, RegisterBody};
use actix_web::{web, HttpResponse};
use identity_service::RegisterUser;

pub async fn register(
    clients: web::Data<ServiceClients>,
    body: web::Json<RegisterBody>,
) -> Result<HttpResponse, GatewayError> {
    let body = body.into_inner();
    let profile = clients
        .identity
        .register(RegisterUser {
            login: body.login,
            password: body.password,
            email: body.email,
        })
        .await?;

    Ok(HttpResponse::Created().json(profile))
}

pub async fn login(
    clients: web::Data<ServiceClients>,
    body: web::Json<LoginBody>,
) -> Result<HttpResponse, GatewayError> {
    let token = clients.identity.login(&body.login, &body.password).await?;

    Ok(HttpResponse::Ok().json(token))
}
