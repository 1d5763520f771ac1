use actix_web::{post, web, HttpResponse};
use hottakes_common::{HotTakesError, Result};
use hottakes_llm::{build_client, extract_hot_takes, hot_take_prompt, ProviderId};
use tracing::{error, warn};

use crate::state::AppState;
use crate::types::{ErrorResponse, GenerateHotTakesRequest, HotTakesResponse};

/// POST /api/generate-hot-takes - Turn freeform thoughts into hot takes
#[post("/api/generate-hot-takes")]
pub async fn generate_hot_takes(
    req: web::Json<GenerateHotTakesRequest>,
    state: web::Data<std::sync::Arc<AppState>>,
) -> HttpResponse {
    match run_generation(req.into_inner(), &state).await {
        Ok(hot_takes) => HttpResponse::Ok().json(HotTakesResponse { hot_takes }),
        Err(e) if e.is_client_error() => {
            warn!("Rejected hot take request: {}", e);
            HttpResponse::BadRequest().json(ErrorResponse {
                error: client_message(e),
            })
        }
        Err(e) => {
            // Upstream detail stays in the server log
            error!("Hot take generation failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to generate hot takes".to_string(),
            })
        }
    }
}

/// Validate, dispatch to the selected provider, extract takes.
///
/// Validation runs before the client is built, so no outbound call is
/// ever made for a 400.
async fn run_generation(req: GenerateHotTakesRequest, state: &AppState) -> Result<Vec<String>> {
    let provider: ProviderId = required_field(req.provider.as_deref(), "Provider")?.parse()?;
    let thoughts = required_field(req.thoughts.as_deref(), "Thoughts")?;

    let client = build_client(provider, req.api_key.as_deref(), &state.config)?;

    let prompt = hot_take_prompt(thoughts);
    let raw = client.generate(&prompt).await?;

    let hot_takes = extract_hot_takes(&raw);
    if hot_takes.is_empty() {
        // The model ignored the numbered-list format; the caller gets an
        // empty list, but leave a trace of what came back.
        warn!(
            "No hot takes extracted from a {} char completion ({})",
            raw.len(),
            client.provider_id()
        );
    }

    Ok(hot_takes)
}

/// Trimmed field value, or an invalid-input error naming the field
fn required_field<'a>(value: Option<&'a str>, name: &str) -> Result<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| HotTakesError::invalid_input(format!("{} field is required", name)))
}

/// Human-readable message for a 400 body, without the error kind prefix
fn client_message(e: HotTakesError) -> String {
    match e {
        HotTakesError::InvalidInput(msg) => msg,
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use hottakes_common::AppConfig;
    use serde_json::json;
    use std::sync::Arc;

    async fn call(
        config: AppConfig,
        body: serde_json::Value,
    ) -> actix_web::dev::ServiceResponse {
        let state = Arc::new(AppState::new(config));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(generate_hot_takes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/generate-hot-takes")
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    #[actix_web::test]
    async fn test_missing_thoughts_is_rejected() {
        let resp = call(AppConfig::default(), json!({ "provider": "ollama" })).await;
        assert_eq!(resp.status(), 400);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("Thoughts"));
    }

    #[actix_web::test]
    async fn test_whitespace_thoughts_is_rejected() {
        let resp = call(
            AppConfig::default(),
            json!({ "provider": "ollama", "thoughts": "   \n  " }),
        )
        .await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn test_missing_provider_is_rejected() {
        let resp = call(AppConfig::default(), json!({ "thoughts": "hmm" })).await;
        assert_eq!(resp.status(), 400);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("Provider"));
    }

    #[actix_web::test]
    async fn test_unknown_provider_is_rejected() {
        let resp = call(
            AppConfig::default(),
            json!({ "provider": "grok", "thoughts": "hmm" }),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("grok"));
    }

    #[actix_web::test]
    async fn test_hosted_provider_without_key_is_rejected() {
        // No upstream is mocked: validation fails before any outbound call
        let resp = call(
            AppConfig::default(),
            json!({ "provider": "openai", "thoughts": "hmm" }),
        )
        .await;
        assert_eq!(resp.status(), 400);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert!(body.error.contains("API key"));
    }

    #[actix_web::test]
    async fn test_ollama_generation_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"model":"llama3.2","response":"1. Wit is a crutch\n2. Log off\n\nHope that helps!","done":true}"#,
            )
            .create_async()
            .await;

        let config = AppConfig {
            ollama_base_url: server.url(),
            ..AppConfig::default()
        };

        // Local provider, no apiKey in the request
        let resp = call(
            config,
            json!({ "provider": "ollama", "thoughts": "social media is too witty" }),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: HotTakesResponse = test::read_body_json(resp).await;
        assert_eq!(body.hot_takes, vec!["Wit is a crutch", "Log off"]);
        mock.assert_async().await;
    }

    #[actix_web::test]
    async fn test_upstream_failure_yields_generic_500() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(500)
            .create_async()
            .await;

        let config = AppConfig {
            ollama_base_url: server.url(),
            ..AppConfig::default()
        };

        let resp = call(
            config,
            json!({ "provider": "ollama", "thoughts": "hmm" }),
        )
        .await;
        assert_eq!(resp.status(), 500);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error, "Failed to generate hot takes");
    }

    #[actix_web::test]
    async fn test_freeform_completion_yields_empty_list() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/generate")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"model":"llama3.2","response":"Here are my thoughts, unnumbered.","done":true}"#)
            .create_async()
            .await;

        let config = AppConfig {
            ollama_base_url: server.url(),
            ..AppConfig::default()
        };

        let resp = call(
            config,
            json!({ "provider": "ollama", "thoughts": "hmm" }),
        )
        .await;
        assert_eq!(resp.status(), 200);

        let body: HotTakesResponse = test::read_body_json(resp).await;
        assert!(body.hot_takes.is_empty());
    }
}
