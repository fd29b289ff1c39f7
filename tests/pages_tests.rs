use actix_web::{http::StatusCode, test};

use roster::database::models::NewTeamForm;
use roster::database::repositories::{MemberRepository, TeamRepository};

mod common;

#[actix_web::test]
async fn test_home_page_lists_teams_and_members() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let app = common::init_app(&db.pool).await;

    let teams = TeamRepository::new(db.pool.clone());
    teams
        .create_team(&NewTeamForm {
            name: "Red Team".to_string(),
            code: "RED".to_string(),
            description: "The red ones".to_string(),
            website: "https://red.example".to_string(),
        })
        .await
        .unwrap();

    let members = MemberRepository::new(db.pool.clone());
    members.create_member("Alice", "RED").await.unwrap();

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = common::body_string(resp).await;
    assert!(body.contains("Red Team"));
    assert!(body.contains("/team/RED"));
    assert!(body.contains("Alice"));
}

#[actix_web::test]
async fn test_about_page_renders() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let app = common::init_app(&db.pool).await;

    let req = test::TestRequest::get().uri("/about/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = common::body_string(resp).await;
    assert!(body.contains("About"));
}

#[actix_web::test]
async fn test_things_page_renders_empty_listing() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let app = common::init_app(&db.pool).await;

    let req = test::TestRequest::get().uri("/things/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // The legacy table exists but nothing ever inserts into it
    let body = common::body_string(resp).await;
    assert!(body.contains("Things"));
    assert!(!body.contains("<li>"));
}

#[actix_web::test]
async fn test_health_reports_ok() {
    common::setup_test_env();
    let db = common::TestDb::new().await.unwrap();
    let app = common::init_app(&db.pool).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}
