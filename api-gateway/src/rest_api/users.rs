//! Profile routes. The path id is what the caller asks for; the token-derived
//! identity is what authorization runs against.

use crate::clients::ServiceClients;
use crate::error::GatewayError;
use crate::middleware::AuthUser;
use crate::rest_api::models::UpdateUserBody;
use actix_web::{web, HttpResponse};
use uuid::Uuid;

pub async fn get_user(
    clients: web::Data<ServiceClients>,
    path: web::Path<Uuid>,
    user: AuthUser,
) -> Result<HttpResponse, GatewayError> {
    let profile = clients.identity.get_profile(*path, user.0).await?;

    Ok(HttpResponse::Ok().json(profile))
}

pub async fn update_user(
    clients: web::Data<ServiceClients>,
    path: web::Path<Uuid>,
    user: AuthUser,
    body: web::Json<UpdateUserBody>,
) -> Result<HttpResponse, GatewayError> {
    let profile = clients
        .identity
        .update_profile(*path, user.0, body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(profile))
}
