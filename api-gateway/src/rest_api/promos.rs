//! Promo routes.

use crate::clients::ServiceClients;
use crate::error::GatewayError;
use crate::middleware::AuthUser;
use crate::rest_api::models::{
    CreatePromoBody, DeleteJson, ListPromosJson, ListQuery, PromoJson, UpdatePromoBody,
};
use actix_web::{web, HttpResponse};
use promo_service::ListParams;
use uuid::Uuid;

pub async fn create_promo(
    clients: web::Data<ServiceClients>,
    user: AuthUser,
    body: web::Json<CreatePromoBody>,
) -> Result<HttpResponse, GatewayError> {
    let promo = clients
        .promos
        .create_promo(body.into_inner().into_new_promo(user.0))
        .await?;

    Ok(HttpResponse::Created().json(PromoJson::from(promo)))
}

pub async fn get_promo(
    clients: web::Data<ServiceClients>,
    path: web::Path<Uuid>,
    user: AuthUser,
) -> Result<HttpResponse, GatewayError> {
    let promo = clients.promos.get_promo(*path, user.0).await?;

    Ok(HttpResponse::Ok().json(PromoJson::from(promo)))
}

pub async fn update_promo(
    clients: web::Data<ServiceClients>,
    path: web::Path<Uuid>,
    user: AuthUser,
    body: web::Json<UpdatePromoBody>,
) -> Result<HttpResponse, GatewayError> {
    let promo = clients
        .promos
        .update_promo(*path, user.0, body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(PromoJson::from(promo)))
}

pub async fn delete_promo(
    clients: web::Data<ServiceClients>,
    path: web::Path<Uuid>,
    user: AuthUser,
) -> Result<HttpResponse, GatewayError> {
    clients.promos.delete_promo(*path, user.0).await?;

    Ok(HttpResponse::Ok().json(DeleteJson { success: true }))
}

pub async fn list_promos(
    clients: web::Data<ServiceClients>,
    user: AuthUser,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, GatewayError> {
    let page = clients
        .promos
        .list_promos(
            user.0,
            ListParams {
                page: query.page(),
                per_page: query.per_page(),
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(ListPromosJson {
        promos: page.promos.into_iter().map(PromoJson::from).collect(),
        total: page.total,
    }))
}
