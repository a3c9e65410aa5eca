#[cfg(test)]
mod tests {
    use actix_web::http::{header, Method, StatusCode};
    use actix_web::{test, web, App};
    use floatchat::api::{app_routes, middleware::build_cors};
    use floatchat::chat::ChatController;
    use floatchat::config::AppConfig;
    use floatchat::render::{QUICK_QUESTIONS, THINKING_LABEL};
    use serde_json::{json, Value};

    const DEV_ORIGIN: &str = "http://localhost:5173";

    fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.client_url = Some("https://floatchat.example".to_string());
        config.chat.seed = Some(11);
        config
    }

    macro_rules! init_app {
        ($config:expr) => {{
            let config = $config;
            let chat = web::Data::new(ChatController::new(&config.chat));
            test::init_service(
                App::new()
                    .app_data(chat)
                    .wrap(build_cors(&config.server))
                    .configure(app_routes(&config.server)),
            )
            .await
        }};
    }

    #[actix_web::test]
    async fn test_index_reports_liveness() {
        let app = init_app!(test_config());
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let content_type = resp
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/plain"));
        let body = test::read_body(resp).await;
        assert_eq!(&body[..], b"app is running");
    }

    #[actix_web::test]
    async fn test_health_reports_healthy() {
        let app = init_app!(test_config());
        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/health").to_request())
                .await;
        assert_eq!(body, json!({"status": "healthy"}));
    }

    #[actix_web::test]
    async fn test_oversized_bodies_are_refused() {
        let mut config = test_config();
        config.server.body_limit_bytes = 64;
        let app = init_app!(config);
        let long_text = "temperature ".repeat(20);

        let json_resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/chat/messages")
                .set_json(json!({ "text": long_text }))
                .to_request(),
        )
        .await;
        assert_eq!(json_resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let form_resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/chat")
                .set_form([("text", long_text.as_str())])
                .to_request(),
        )
        .await;
        assert_eq!(form_resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let transcript: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/chat/messages").to_request(),
        )
        .await;
        assert_eq!(transcript["messages"].as_array().unwrap().len(), 1);

        // Within the limit the same route accepts.
        let ok = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/chat/messages")
                .set_json(json!({"text": "salt"}))
                .to_request(),
        )
        .await;
        assert_eq!(ok.status(), StatusCode::ACCEPTED);
    }

    #[actix_web::test]
    async fn test_preflight_allows_configured_origins_with_credentials() {
        let app = init_app!(test_config());

        for origin in ["https://floatchat.example", DEV_ORIGIN] {
            let req = test::TestRequest::default()
                .method(Method::OPTIONS)
                .uri("/chat/messages")
                .insert_header((header::ORIGIN, origin))
                .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "POST"))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert!(resp.status().is_success(), "preflight for {origin} failed");
            let headers = resp.headers();
            assert_eq!(
                headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
                origin
            );
            assert_eq!(
                headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
                "true"
            );
        }
    }

    #[actix_web::test]
    async fn test_unlisted_origin_is_not_echoed() {
        let app = init_app!(test_config());
        let req = test::TestRequest::get()
            .uri("/")
            .insert_header((header::ORIGIN, "https://evil.example"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_ne!(
            resp.headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|v| v.to_str().ok()),
            Some("https://evil.example")
        );
    }

    #[actix_web::test]
    async fn test_fresh_transcript() {
        let app = init_app!(test_config());
        let transcript: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/chat/messages").to_request(),
        )
        .await;

        assert_eq!(transcript["pending"], json!(false));
        assert!(transcript["sessionId"].is_string());
        let messages = transcript["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["id"], json!(1));
        assert_eq!(messages[0]["role"], json!("bot"));
        assert!(messages[0].get("visualization").is_none());
        assert!(messages[0]["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn test_json_submit_then_conflict_then_cancel() {
        let app = init_app!(test_config());

        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/chat/messages")
                .set_json(json!({"text": "salinity please"}))
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::ACCEPTED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["accepted"], json!(true));
        assert_eq!(body["message"]["id"], json!(2));
        assert_eq!(body["message"]["role"], json!("user"));

        let busy = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/chat/messages")
                .set_json(json!({"text": "temperature too"}))
                .to_request(),
        )
        .await;
        assert_eq!(busy.status(), StatusCode::CONFLICT);

        let blank = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/chat/messages")
                .set_json(json!({"text": "   "}))
                .to_request(),
        )
        .await;
        assert_eq!(blank.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let page = test::call_and_read_body(&app, test::TestRequest::get().uri("/chat").to_request()).await;
        let page = String::from_utf8_lossy(&page);
        assert!(page.contains(THINKING_LABEL));
        assert!(page.contains("http-equiv=\"refresh\""));

        let cancelled = test::call_service(
            &app,
            test::TestRequest::delete().uri("/chat/pending").to_request(),
        )
        .await;
        assert_eq!(cancelled.status(), StatusCode::NO_CONTENT);

        let again = test::call_service(
            &app,
            test::TestRequest::delete().uri("/chat/pending").to_request(),
        )
        .await;
        assert_eq!(again.status(), StatusCode::NOT_FOUND);

        let transcript: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/chat/messages").to_request(),
        )
        .await;
        assert_eq!(transcript["pending"], json!(false));
        assert_eq!(transcript["messages"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_form_submit_redirects_to_latest() {
        let app = init_app!(test_config());
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/chat")
                .set_form([("text", "Display seasonal temperature variations")])
                .to_request(),
        )
        .await;

        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/chat#latest");

        // Blank form posts are swallowed the same way.
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/chat")
                .set_form([("text", "")])
                .to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let transcript: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/chat/messages").to_request(),
        )
        .await;
        assert_eq!(transcript["messages"].as_array().unwrap().len(), 2);
        assert_eq!(transcript["pending"], json!(true));
    }

    #[actix_web::test]
    async fn test_chat_page_prefills_picked_question() {
        let app = init_app!(test_config());
        let body = test::call_and_read_body(
            &app,
            test::TestRequest::get().uri("/chat?pick=2").to_request(),
        )
        .await;
        let page = String::from_utf8_lossy(&body);

        assert!(page.contains(&format!("value=\"{}\"", QUICK_QUESTIONS[2])));
        assert!(page.contains("Welcome to FloatChat!"));
        assert!(page.contains("id=\"latest\""));
        assert!(!page.contains("http-equiv=\"refresh\""));
        for question in QUICK_QUESTIONS {
            assert!(page.contains(&question.replace('\'', "&#39;")));
        }
    }
}
