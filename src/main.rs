use actix_files as fs;
use actix_web::{web::Data, App, HttpServer};
use dotenv::dotenv;
use log::{error, info};
use tera::Tera;

use startup_sage::model::GeminiClient;
use startup_sage::web::routes;
use startup_sage::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Startup Sage web application");

    // Initialize the Gemini API client
    let client = match GeminiClient::new() {
        Ok(client) => {
            info!("Gemini API client initialized");
            client
        }
        Err(e) => {
            error!("Failed to initialize Gemini API client: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize template engine
    let mut tera = match Tera::new("templates/**/*") {
        Ok(t) => t,
        Err(e) => {
            error!("Template parsing error: {}", e);
            std::process::exit(1);
        }
    };
    tera.autoescape_on(vec![".html"]);

    // Create app state
    let app_state = Data::new(AppState::new(tera, client));

    let bind_addr =
        std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
    info!("Listening on {}", bind_addr);

    // Start web server
    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .configure(routes::configure)
            .service(fs::Files::new("/static", "./static"))
    })
    .bind(bind_addr)?
    .run()
    .await
}
