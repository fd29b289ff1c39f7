use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{
    App,
    cookie::{Cookie, Key},
    dev::{Service, ServiceResponse},
    test, web,
};
use anyhow::Result;
use sqlx::SqlitePool;
use tempfile::TempDir;

use roster::database::init_database;
use roster::database::repositories::{MemberRepository, TeamRepository, ThingRepository};
use roster::routes;

// Test database wrapper
pub struct TestDb {
    pub pool: SqlitePool,
    _temp_dir: TempDir,
}

impl TestDb {
    pub async fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let database_url = format!("sqlite:{}/test.db", temp_dir.path().display());
        let pool = init_database(&database_url).await?;

        Ok(TestDb {
            pool,
            _temp_dir: temp_dir,
        })
    }
}

/// Build the full application service against the given pool, with the
/// same route table and session middleware as the real server.
pub async fn init_app(
    pool: &SqlitePool,
) -> impl Service<Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(TeamRepository::new(pool.clone())))
            .app_data(web::Data::new(MemberRepository::new(pool.clone())))
            .app_data(web::Data::new(ThingRepository::new(pool.clone())))
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
                    .cookie_secure(false)
                    .build(),
            )
            .configure(routes::configure),
    )
    .await
}

/// Session cookies set by a response, for carrying flash notices into
/// the next request.
#[allow(dead_code)]
pub fn session_cookies(resp: &ServiceResponse) -> Vec<Cookie<'static>> {
    resp.response()
        .cookies()
        .map(|c| c.into_owned())
        .collect()
}

/// Read a response body as UTF-8 text.
#[allow(dead_code)]
pub async fn body_string(resp: ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("response body was not UTF-8")
}

#[allow(dead_code)]
pub fn setup_test_env() {
    let _ = env_logger::builder().is_test(true).try_init();
}
