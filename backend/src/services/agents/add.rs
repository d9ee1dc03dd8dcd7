use actix_web::{web, HttpResponse};
use common::model::agent::Agent;
use common::requests::NewAgentRequest;
use log::info;
use uuid::Uuid;

use crate::auth::AuthedAdmin;
use crate::db::Database;
use crate::error::ApiError;

/// Handler for `POST /api/agents`. Responds 201 with the created agent.
pub async fn process(
    db: web::Data<Database>,
    _admin: AuthedAdmin,
    payload: web::Json<NewAgentRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = payload.into_inner();
    let password_hash = bcrypt::hash(&req.password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {}", e)))?;

    let agent = Agent {
        id: Uuid::new_v4().to_string(),
        name: req.name,
        email: req.email,
        mobile: req.mobile,
        password_hash,
    };
    db.insert_agent(&agent)?;
    info!("registered agent {} ({})", agent.name, agent.email);
    Ok(HttpResponse::Created().json(agent))
}

#[cfg(test)]
mod tests {
    use crate::test_support::{bearer, test_db, test_keys};
    use actix_web::{test, web, App};
    use common::requests::NewAgentRequest;

    fn new_agent(email: &str) -> NewAgentRequest {
        NewAgentRequest {
            name: "Ana".to_string(),
            email: email.to_string(),
            mobile: "555-0100".to_string(),
            password: "secret".to_string(),
        }
    }

    #[actix_web::test]
    async fn created_agent_does_not_expose_its_password_hash() {
        let (_dir, db) = test_db();
        let keys = test_keys();
        let token = bearer(&keys);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .app_data(web::Data::new(keys))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/agents")
            .insert_header(("Authorization", token))
            .set_json(new_agent("ana@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "ana@example.com");
        assert!(body.get("passwordHash").is_none());
        assert!(body.get("password").is_none());

        // The hash is stored, just never serialized.
        let stored = &db.find_all_agents().unwrap()[0];
        assert!(bcrypt::verify("secret", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn registration_requires_a_token() {
        let (_dir, db) = test_db();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db.clone()))
                .app_data(web::Data::new(test_keys()))
                .service(super::super::configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/agents")
            .set_json(new_agent("ana@example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);
        assert!(db.find_all_agents().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn duplicate_email_is_a_server_error() {
        let (_dir, db) = test_db();
        let keys = test_keys();
        let token = bearer(&keys);

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(db))
                .app_data(web::Data::new(keys))
                .service(super::super::configure_routes()),
        )
        .await;

        for expected in [201, 500] {
            let req = test::TestRequest::post()
                .uri("/api/agents")
                .insert_header(("Authorization", token.clone()))
                .set_json(new_agent("ana@example.com"))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }
}
