use actix_web::{delete, get, http::header, post, web, HttpResponse, Responder, Result as WebResult};
use tracing::debug;

use crate::api::models::{ChatPageQuery, SubmitRequest, SubmitResponse};
use crate::chat::ChatController;
use crate::render::{html, ChatView};

/// Liveness check.
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("app is running")
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({"status": "healthy"}))
}

// --- Chat page ---

#[get("")]
pub async fn chat_page(
    chat: web::Data<ChatController>,
    query: web::Query<ChatPageQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let mut view = ChatView::with_draft(query.draft.unwrap_or_default());
    if let Some(pick) = query.pick {
        view.pick_question(pick);
    }

    let transcript = chat.transcript().await;
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html::render_page(&transcript, &view))
}

#[post("")]
pub async fn submit_form(
    chat: web::Data<ChatController>,
    form: web::Form<SubmitRequest>,
) -> impl Responder {
    // Rejections are silent for the page; it simply re-renders.
    if let Err(e) = chat.submit(&form.text).await {
        debug!("form submission ignored: {}", e);
    }
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/chat#latest"))
        .finish()
}

// --- Messages ---

#[get("/messages")]
pub async fn get_messages(chat: web::Data<ChatController>) -> impl Responder {
    HttpResponse::Ok().json(chat.transcript().await)
}

#[post("/messages")]
pub async fn add_message(
    chat: web::Data<ChatController>,
    req: web::Json<SubmitRequest>,
) -> WebResult<HttpResponse> {
    let (message, _reply) = chat.submit(&req.text).await?;
    Ok(HttpResponse::Accepted().json(SubmitResponse {
        accepted: true,
        message,
    }))
}

#[delete("/pending")]
pub async fn cancel_pending(chat: web::Data<ChatController>) -> impl Responder {
    if chat.cancel().await {
        HttpResponse::NoContent().finish()
    } else {
        HttpResponse::NotFound().finish()
    }
}

/// Body parser limits shared by the JSON and form extractors.
pub fn body_limits(cfg: &mut web::ServiceConfig, limit: usize) {
    cfg.app_data(web::JsonConfig::default().limit(limit))
        .app_data(web::FormConfig::default().limit(limit));
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(health).service(
        web::scope("/chat")
            .service(chat_page)
            .service(submit_form)
            .service(get_messages)
            .service(add_message)
            .service(cancel_pending),
    );
}
