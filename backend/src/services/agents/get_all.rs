use actix_web::{web, HttpResponse};

use crate::auth::AuthedAdmin;
use crate::db::Database;
use crate::error::ApiError;

/// Handler for `GET /api/agents`.
pub async fn process(
    db: web::Data<Database>,
    _admin: AuthedAdmin,
) -> Result<HttpResponse, ApiError> {
    let agents = db.find_all_agents()?;
    Ok(HttpResponse::Ok().json(agents))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{bearer, insert_agent, test_db, test_keys};
    use actix_web::{test, web, App};

    #[actix_web::test]
    async fn returns_agents_in_registration_order() {
        let (_dir, db) = test_db();
        insert_agent(&db, "a", "a@example.com");
        insert_agent(&db, "b", "b@example.com");
        let keys = test_keys();
        let token = bearer(&keys);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .app_data(web::Data::new(keys))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/agents")
            .insert_header(("Authorization", token))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let emails: Vec<_> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|a| a["email"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(emails, ["a@example.com", "b@example.com"]);
    }

    #[actix_web::test]
    async fn invalid_token_is_forbidden() {
        let (_dir, db) = test_db();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .app_data(web::Data::new(test_keys()))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/agents")
            .insert_header(("Authorization", "Bearer not-a-real-token"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 403);
    }
}
