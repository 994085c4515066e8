//! Request routing and endpoint handlers

use std::borrow::Cow;
use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use chrono::Utc;
use http::{Method, Request, StatusCode};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::Body;
use percent_encoding::percent_decode_str;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tower_service::Service;

use super::response::{html_response, json_response, to_data, ApiError, ApiResponse};
use super::AppState;
use crate::catalog::{SkinTone, Undertone};
use crate::error::RequestError;
use crate::generator::{generate, PaletteRequest};
use crate::harmony::{analyze, MIN_COLORS};
use crate::quotes::pick_quote;
use crate::recommend::recommend;
use crate::variants::{all_variants, variants, Scheme};

/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Every route, as `(method, path, description)`.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/health", "Server status"),
    ("POST", "/api/generate-palette", "Generate a personalized color palette"),
    ("GET", "/api/quote", "Inspirational beauty quote, optionally by ?category="),
    ("POST", "/api/analyze-harmony", "Analyze the harmony of a list of colors"),
    ("POST", "/api/harmony-variants", "Harmony variants of a base color"),
    ("GET", "/api/recommendations/{skin_tone}/{undertone}", "Recommendations for a skin profile"),
    ("POST", "/mcp", "Method dispatch: generate_palette, get_quote, analyze_harmony, harmony_variants"),
];

/// The application service: maps each request to exactly one response.
#[derive(Clone, Debug)]
pub struct Router {
    state: Arc<AppState>,
}

impl Router {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

impl<B> Service<Request<B>> for Router
where
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    type Response = ApiResponse;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<ApiResponse, Infallible>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let state = Arc::clone(&self.state);
        Box::pin(async move { Ok(handle(&state, req).await) })
    }
}

/// Read the body and dispatch on method and path.
pub async fn handle<B>(state: &AppState, req: Request<B>) -> ApiResponse
where
    B: Body,
    B::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let (parts, body) = req.into_parts();

    let body = match Limited::new(body, MAX_BODY_BYTES).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.downcast_ref::<LengthLimitError>().is_some() => {
            return ApiError::PayloadTooLarge(MAX_BODY_BYTES).into_response();
        }
        Err(e) => {
            return ApiError::from(RequestError::InvalidBody(e.to_string())).into_response();
        }
    };

    let path = parts.uri.path();
    route(state, &parts.method, path, parts.uri.query(), &body)
        .unwrap_or_else(ApiError::into_response)
}

fn route(
    state: &AppState,
    method: &Method,
    path: &str,
    query: Option<&str>,
    body: &[u8],
) -> Result<ApiResponse, ApiError> {
    let decoded: Vec<Cow<'_, str>> = path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| percent_decode_str(s).decode_utf8_lossy())
        .collect();
    let segments: Vec<&str> = decoded.iter().map(AsRef::as_ref).collect();
    let allow = |expected: Method| -> Result<(), ApiError> {
        if *method == expected {
            Ok(())
        } else {
            Err(ApiError::MethodNotAllowed {
                method: method.clone(),
                path: path.to_string(),
                allow: expected,
            })
        }
    };

    match segments.as_slice() {
        [] => {
            allow(Method::GET)?;
            Ok(landing_page(state))
        }
        ["health"] => {
            allow(Method::GET)?;
            Ok(health(state))
        }
        ["api", "generate-palette"] => {
            allow(Method::POST)?;
            generate_palette(state, body)
        }
        ["api", "quote"] => {
            allow(Method::GET)?;
            quote(state, query_param(query, "category").as_deref())
        }
        ["api", "analyze-harmony"] => {
            allow(Method::POST)?;
            analyze_harmony(body)
        }
        ["api", "harmony-variants"] => {
            allow(Method::POST)?;
            let data = harmony_variants(parse_body(body)?)?;
            Ok(json_response(StatusCode::OK, &json!({ "success": true, "data": data })))
        }
        ["api", "recommendations", skin, undertone] => {
            allow(Method::GET)?;
            recommendations(skin, undertone)
        }
        ["mcp"] => {
            allow(Method::POST)?;
            mcp(state, body)
        }
        _ => Err(ApiError::NotFound(path.to_string())),
    }
}

/// Decoded value of `key` in a query string. Only the first occurrence counts.
fn query_param(query: Option<&str>, key: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, RequestError> {
    Ok(serde_json::from_slice(body)?)
}

/// Same as [`parse_body`] for the `params` of a dispatched method.
fn parse_params<T: DeserializeOwned>(params: Value) -> Result<T, RequestError> {
    Ok(serde_json::from_value(params)?)
}

fn landing_page(state: &AppState) -> ApiResponse {
    let endpoints: String = ENDPOINTS
        .iter()
        .map(|(method, path, description)| {
            format!(
                "    <div class=\"endpoint\"><span class=\"method\">{} {}</span><p>{}</p></div>\n",
                method,
                escape_html(path),
                escape_html(description)
            )
        })
        .collect();

    let connection = match &state.info.url {
        Some(url) => format!("<p>Server URL: <strong>{}</strong></p>", escape_html(url)),
        None => String::new(),
    };

    html_response(format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>{name}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 800px; margin: 0 auto; padding: 20px; }}
    .endpoint {{ background: #f8f9fa; padding: 12px; margin: 8px 0; border-radius: 5px; }}
    .method {{ font-weight: bold; color: #28a745; }}
  </style>
</head>
<body>
  <h1>{name}</h1>
  <p>Color palettes, harmony analysis and styling recommendations.</p>
  <p><strong>Version:</strong> {version}</p>
  {connection}
  <h2>Endpoints</h2>
{endpoints}</body>
</html>
"#,
        name = escape_html(&state.info.name),
        version = escape_html(&state.info.version),
        connection = connection,
        endpoints = endpoints,
    ))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;")
}

fn health(state: &AppState) -> ApiResponse {
    let endpoints: Vec<String> =
        ENDPOINTS.iter().map(|(method, path, _)| format!("{} {}", method, path)).collect();

    json_response(
        StatusCode::OK,
        &json!({
            "status": "healthy",
            "serverName": state.info.name,
            "version": state.info.version,
            "timestamp": Utc::now().to_rfc3339(),
            "endpoints": endpoints,
            "uptimeSeconds": state.uptime_seconds(),
        }),
    )
}

fn generate_palette(state: &AppState, body: &[u8]) -> Result<ApiResponse, ApiError> {
    let request: PaletteRequest = parse_body(body)?;
    let palette = generate(&request, &state.info, Utc::now())?;
    let message = format!("{} palette generated for {}", palette.palette_type, palette.event_type);

    Ok(json_response(
        StatusCode::OK,
        &json!({ "success": true, "data": to_data(&palette)?, "message": message }),
    ))
}

fn quote(state: &AppState, category: Option<&str>) -> Result<ApiResponse, ApiError> {
    let quote = pick_quote(category, &mut rand::rng(), Utc::now());

    Ok(json_response(
        StatusCode::OK,
        &json!({ "success": true, "data": to_data(&quote)?, "serverInfo": state.info.name }),
    ))
}

#[derive(Debug, Default, Deserialize)]
struct HarmonyRequest {
    #[serde(default)]
    colors: Vec<String>,
}

fn analyze_harmony(body: &[u8]) -> Result<ApiResponse, ApiError> {
    let request: HarmonyRequest = parse_body(body)?;
    if request.colors.len() < MIN_COLORS {
        return Err(RequestError::TooFewColors { min: MIN_COLORS, got: request.colors.len() }.into());
    }

    let report = analyze(&request.colors);
    Ok(json_response(
        StatusCode::OK,
        &json!({
            "success": true,
            "data": to_data(&report)?,
            "colorsAnalyzed": request.colors.len(),
        }),
    ))
}

#[derive(Debug, Default, Deserialize)]
struct VariantsRequest {
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    scheme: Option<String>,
}

/// One scheme when `scheme` is given, every scheme otherwise.
fn harmony_variants(request: VariantsRequest) -> Result<Value, ApiError> {
    let color = request.color.ok_or(RequestError::MissingField("color"))?;
    let invalid = |source| RequestError::InvalidColor { value: color.clone(), source };

    match request.scheme.as_deref() {
        Some(name) => {
            let scheme: Scheme = name.parse().map_err(RequestError::from)?;
            to_data(&variants(&color, scheme).map_err(invalid)?)
        }
        None => to_data(&all_variants(&color).map_err(invalid)?),
    }
}

fn recommendations(skin: &str, undertone: &str) -> Result<ApiResponse, ApiError> {
    let skin: SkinTone = skin.parse().map_err(RequestError::from)?;
    let undertone: Undertone = undertone.parse().map_err(RequestError::from)?;

    Ok(json_response(
        StatusCode::OK,
        &json!({
            "success": true,
            "data": to_data(&recommend(skin, undertone))?,
            "profile": { "skinTone": skin.as_str(), "undertone": undertone.as_str() },
        }),
    ))
}

#[derive(Debug, Deserialize)]
struct MethodCall {
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteParams {
    #[serde(default)]
    category: Option<String>,
}

fn mcp(state: &AppState, body: &[u8]) -> Result<ApiResponse, ApiError> {
    let call: MethodCall = parse_body(body)?;
    let method = call.method.unwrap_or_default();
    let params = if call.params.is_null() { json!({}) } else { call.params };

    let result = match method.as_str() {
        "generate_palette" => {
            let request: PaletteRequest = parse_params(params)?;
            to_data(&generate(&request, &state.info, Utc::now())?)?
        }
        "get_quote" => {
            let QuoteParams { category } = parse_params(params)?;
            to_data(&pick_quote(category.as_deref(), &mut rand::rng(), Utc::now()))?
        }
        "analyze_harmony" => {
            let HarmonyRequest { colors } = parse_params(params)?;
            to_data(&analyze(&colors))?
        }
        "harmony_variants" => harmony_variants(parse_params(params)?)?,
        _ => return Err(RequestError::UnsupportedMethod(method).into()),
    };

    Ok(json_response(
        StatusCode::OK,
        &json!({
            "success": true,
            "result": result,
            "method": method,
            "server": state.info.name,
        }),
    ))
}
