//! Post routes.

use crate::clients::ServiceClients;
use crate::error::GatewayError;
use crate::middleware::AuthUser;
use crate::rest_api::models::{
    CreatePostBody, DeleteJson, ListPostsJson, ListQuery, PostJson, UpdatePostBody,
};
use actix_web::{web, HttpResponse};
use content_service::ListParams;
use uuid::Uuid;

pub async fn create_post(
    clients: web::Data<ServiceClients>,
    user: AuthUser,
    body: web::Json<CreatePostBody>,
) -> Result<HttpResponse, GatewayError> {
    let post = clients
        .content
        .create_post(body.into_inner().into_new_post(user.0))
        .await?;

    Ok(HttpResponse::Created().json(PostJson::from(post)))
}

pub async fn get_post(
    clients: web::Data<ServiceClients>,
    path: web::Path<Uuid>,
    user: AuthUser,
) -> Result<HttpResponse, GatewayError> {
    let post = clients.content.get_post(*path, user.0).await?;

    Ok(HttpResponse::Ok().json(PostJson::from(post)))
}

pub async fn update_post(
    clients: web::Data<ServiceClients>,
    path: web::Path<Uuid>,
    user: AuthUser,
    body: web::Json<UpdatePostBody>,
) -> Result<HttpResponse, GatewayError> {
    let post = clients
        .content
        .update_post(*path, user.0, body.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(PostJson::from(post)))
}

pub async fn delete_post(
    clients: web::Data<ServiceClients>,
    path: web::Path<Uuid>,
    user: AuthUser,
) -> Result<HttpResponse, GatewayError> {
    clients.content.delete_post(*path, user.0).await?;

    Ok(HttpResponse::Ok().json(DeleteJson { success: true }))
}

pub async fn list_posts(
    clients: web::Data<ServiceClients>,
    user: AuthUser,
    query: web::Query<ListQuery>,
) -> Result<HttpResponse, GatewayError> {
    let page = clients
        .content
        .list_posts(
            user.0,
            ListParams {
                page: query.page(),
                per_page: query.per_page(),
            },
        )
        .await?;

    Ok(HttpResponse::Ok().json(ListPostsJson {
        posts: page.posts.into_iter().map(PostJson::from).collect(),
        total: page.total,
    }))
}
