//! REST surface of the gateway.
//!
//! Route map:
//!
//! | Method & path                  | Auth   | Backend operation        |
//! |--------------------------------|--------|--------------------------|
//! | POST /register                 | none   | identity: register       |
//! | POST /login                    | none   | identity: login          |
//! | GET/PUT /users/{id}            | bearer | identity: profile        |
//! | POST/GET /posts                | bearer | content: create/list     |
//! | GET/PUT/DELETE /posts/{id}     | bearer | content: get/update/del  |
//! | POST/GET /promos               | bearer | promos: create/list      |
//! | GET/PUT/DELETE /promos/{id}    | bearer | promos: get/update/del   |

pub mod auth;
pub mod models;
pub mod posts;
pub mod promos;
pub mod users;

use actix_web::{web, HttpResponse};

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

/// Routes that require no bearer token.
pub fn public_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)))
        .service(web::resource("/register").route(web::post().to(auth::register)))
        .service(web::resource("/login").route(web::post().to(auth::login)));
}

/// Routes behind the bearer-token middleware.
pub fn protected_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/users/{id}")
            .route(web::get().to(users::get_user))
            .route(web::put().to(users::update_user)),
    )
    .service(
        web::resource("/posts")
            .route(web::post().to(posts::create_post))
            .route(web::get().to(posts::list_posts)),
    )
    .service(
        web::resource("/posts/{id}")
            .route(web::get().to(posts::get_post))
            .route(web::put().to(posts::update_post))
            .route(web::delete().to(posts::delete_post)),
    )
    .service(
        web::resource("/promos")
            .route(web::post().to(promos::create_promo))
            .route(web::get().to(promos::list_promos)),
    )
    .service(
        web::resource("/promos/{id}")
            .route(web::get().to(promos::get_promo))
            .route(web::put().to(promos::update_promo))
            .route(web::delete().to(promos::delete_promo)),
    );
}
