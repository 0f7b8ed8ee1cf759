use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use tera::Context;
use uuid::Uuid;

use crate::dispatcher::{feedback_instruction, IDEA_INSTRUCTION};
use crate::model::GenerationContext;
use crate::web::models::{FeedbackRequest, FeedbackResponse, GenerateRequest, GenerateResponse};
use crate::AppState;

/// Ideas requested per generate action.
pub const IDEA_COUNT: usize = 5;

// Index page handler
pub async fn index(data: web::Data<AppState>) -> impl Responder {
    let mut context = Context::new();
    context.insert("chatbot_name", "Startup Sage");
    context.insert(
        "chatbot_description",
        "Your personal advisor for generating innovative startup ideas based on your interests and industry preferences!",
    );
    match data.tera.render("index.html", &context) {
        Ok(html) => HttpResponse::Ok().content_type("text/html").body(html),
        Err(e) => {
            error!("Template error: {}", e);
            HttpResponse::InternalServerError().body("Template error")
        }
    }
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Generate a fresh batch of startup ideas for the session
pub async fn generate(
    data: web::Data<AppState>,
    req: web::Json<GenerateRequest>,
) -> impl Responder {
    // Both fields are required; blank input never reaches the service
    if req.interests.trim().is_empty() || req.industry.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "warning": "Please fill out both the 'interests' and 'industry' fields to generate startup ideas."
        }));
    }

    let session_id = req.session_id.unwrap_or_else(Uuid::new_v4);
    info!(
        "Generate request from session {}: interests={:?} industry={:?}",
        session_id, req.interests, req.industry
    );

    let ctx = GenerationContext {
        interests: req.interests.clone(),
        industry: req.industry.clone(),
        instruction: IDEA_INSTRUCTION.to_string(),
    };

    let ideas = data.dispatcher.generate_batch(&ctx, IDEA_COUNT).await;

    // Replace the session's batch wholesale
    match data.sessions.lock() {
        Ok(mut sessions) => {
            sessions.insert(session_id, ideas.clone());
        }
        Err(e) => {
            error!("Failed to lock sessions mutex: {}", e);
            return HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error"
            }));
        }
    }

    HttpResponse::Ok().json(GenerateResponse { ideas, session_id })
}

// Request feedback on one idea from the session's current batch
pub async fn feedback(
    data: web::Data<AppState>,
    req: web::Json<FeedbackRequest>,
) -> impl Responder {
    // Resolve the selected idea while holding the lock, then release it
    // before calling out to the service
    let selected_idea = {
        let sessions = match data.sessions.lock() {
            Ok(guard) => guard,
            Err(e) => {
                error!("Failed to lock sessions mutex: {}", e);
                return HttpResponse::InternalServerError().json(json!({
                    "error": "Internal server error"
                }));
            }
        };

        match sessions.get(&req.session_id).filter(|batch| !batch.is_empty()) {
            Some(batch) => match batch.get(req.idea_index) {
                Some(idea) => idea.clone(),
                None => {
                    return HttpResponse::BadRequest().json(json!({
                        "warning": format!(
                            "Selected idea {} is out of range for the current batch of {}.",
                            req.idea_index,
                            batch.len()
                        )
                    }));
                }
            },
            None => {
                return HttpResponse::BadRequest().json(json!({
                    "warning": "Please generate startup ideas first to get feedback."
                }));
            }
        }
    };

    info!(
        "Feedback request from session {} for idea {}",
        req.session_id, req.idea_index
    );

    let ctx = GenerationContext {
        interests: req.interests.clone(),
        industry: req.industry.clone(),
        instruction: feedback_instruction(&selected_idea),
    };

    let mut batch = data.dispatcher.generate_batch(&ctx, 1).await;
    // The dispatcher always returns at least one displayable item
    let feedback = batch.pop().unwrap_or_default();

    HttpResponse::Ok().json(FeedbackResponse {
        feedback,
        session_id: req.session_id,
    })
}
