use serde::Serialize;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

use idea_quiz_api::config::Config;
use idea_quiz_api::http::cors::add_cors;
use idea_quiz_api::http::response::{error_response, json_response, text_response};
use idea_quiz_api::models::request::IdeasRequest;
use idea_quiz_api::services::idea_generation::IdeaService;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_ansi(false).init();
    run(handler).await
}

#[derive(Serialize)]
struct IdeasResponse {
    ideas: String,
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    // Browser preflight, then POST only
    match req.method().as_str() {
        "OPTIONS" => {
            return Ok(add_cors(
                Response::builder()
                    .status(StatusCode::NO_CONTENT)
                    .body(Body::Empty)?,
            ));
        }
        "POST" => {}
        _ => {
            let mut response = text_response(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")?;
            response.headers_mut().insert("Allow", "POST".parse().unwrap());
            return Ok(add_cors(response));
        }
    }

    let request = IdeasRequest::from_body(req.body());
    let response = match generate(&request).await {
        Ok(ideas) => json_response(StatusCode::OK, &IdeasResponse { ideas })?,
        Err(err) => {
            tracing::error!(error = %err, "generate-ideas request failed");
            error_response(&err)?
        }
    };
    Ok(add_cors(response))
}

async fn generate(request: &IdeasRequest) -> idea_quiz_api::Result<String> {
    let config = Config::from_env()?;
    IdeaService::from_config(&config).generate(request).await
}
