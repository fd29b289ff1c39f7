use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{App, HttpServer, cookie::Key, middleware::Logger, web};
use anyhow::Result;

use roster::Config;
use roster::database::{
    init_database,
    repositories::{MemberRepository, TeamRepository, ThingRepository},
};
use roster::routes;

#[actix_web::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init();

    println!("🚀 Starting Roster server...");

    // Load configuration
    let config = Config::from_env()?;
    println!(
        "📋 Configuration loaded (environment: {})",
        config.environment
    );

    // Initialize database
    let pool = init_database(&config.database_url).await?;
    println!("✅ Database initialized");

    // Initialize repositories
    let team_repository = TeamRepository::new(pool.clone());
    let member_repository = MemberRepository::new(pool.clone());
    let thing_repository = ThingRepository::new(pool.clone());

    let team_repo_data = web::Data::new(team_repository);
    let member_repo_data = web::Data::new(member_repository);
    let thing_repo_data = web::Data::new(thing_repository);

    // Session cookies carry the one-shot flash notices
    let session_key = Key::derive_from(config.session_secret.as_bytes());
    let cookie_secure = config.is_production();

    let server_address = config.server_address();
    println!("🌐 Server starting on http://{}", server_address);

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .app_data(team_repo_data.clone())
            .app_data(member_repo_data.clone())
            .app_data(thing_repo_data.clone())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(cookie_secure)
                    .build(),
            )
            .wrap(Logger::new(
                r#"%a "%r" %s %b "%{Referer}i" "%{User-Agent}i" %T"#,
            ))
            .configure(routes::configure)
    })
    .bind(&server_address)?
    .run()
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))
}
