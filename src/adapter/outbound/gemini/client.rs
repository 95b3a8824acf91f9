//! Gemini quote provider.
//!
//! Asks a search-grounded Gemini model to read the P2P summary tables on
//! p2p.army and return the seven prices the desk needs as strict JSON.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::domain::quote::{ExchangeRate, GroundingSource, MarketRates};
use crate::error::QuoteError;
use crate::port::outbound::quote::QuoteProvider;

use super::payload::RatesPayload;

/// Gemini REST endpoint root.
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Primary and fallback environment variables for the API key.
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// Provenance label stamped on every quote.
pub const SOURCE_LABEL: &str = "Sincronizado con p2p.army (Resumen de Métodos)";

/// Title used for grounding chunks that carry none.
pub const DEFAULT_SOURCE_TITLE: &str = "Referencia p2p.army";

const PROMPT: &str = "\
Extrae los precios de las tablas de resumen de p2p.army.

1. Venezuela (VES): fila \"PagoMovil\" en Bybit y Binance, columna \"Section SELL (buying)\".
2. Brasil (BRL): fila \"PIX\" en Bybit y Binance, columna \"Section BUY (selling)\" para comprar USDT con BRL.
3. Tasas oficiales: BCV (Venezuela), BCB (Brasil) y el cruce oficial BRL/VES.

Usa los valores de la tabla de resumen, no promedios de anuncios individuales.
Devuelve solo el JSON.";

const SYSTEM_INSTRUCTION: &str = "\
Eres un extractor de datos de alta precisión. Refleja los valores exactos de las \
tablas de resumen de p2p.army. Prioriza la columna 'Section SELL' para VES y \
'Section BUY' para BRL.";

/// Gemini `generateContent` client.
#[derive(Debug)]
pub struct Gemini {
    client: Client,
    /// `None` when no key was found; every fetch then fails.
    api_key: Option<String>,
    model: String,
    thinking_budget: u32,
}

impl Gemini {
    /// Create a client with explicit configuration.
    #[must_use]
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        thinking_budget: u32,
        timeout: Duration,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
            thinking_budget,
        }
    }

    /// Create a client with the key from `GEMINI_API_KEY`, falling back to
    /// `API_KEY`.
    ///
    /// A missing key is not an error here: it surfaces as
    /// [`QuoteError::MissingCredential`] on the first fetch, so the desk can
    /// still run in manual mode.
    #[must_use]
    pub fn from_env(model: impl Into<String>, thinking_budget: u32, timeout: Duration) -> Self {
        let api_key = API_KEY_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|v| !v.trim().is_empty()));
        Self::new(api_key, model, thinking_budget, timeout)
    }

    #[must_use]
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{}:generateContent", self.model)
    }

    fn request(&self) -> Request {
        Request {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part {
                    text: PROMPT.to_string(),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION.to_string(),
                }],
            },
            tools: vec![json!({ "googleSearch": {} })],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: response_schema(),
                thinking_config: ThinkingConfig {
                    thinking_budget: self.thinking_budget,
                },
            },
        }
    }
}

/// JSON schema requiring all seven numeric fields.
fn response_schema() -> Value {
    let number = |description: &str| json!({ "type": "NUMBER", "description": description });
    json!({
        "type": "OBJECT",
        "properties": {
            "usdVes": number("Tasa oficial BCV"),
            "usdBrl": number("Tasa oficial BCB"),
            "brlToVes": number("Cruce oficial BRL/VES"),
            "binanceVes": number("Section SELL de PagoMovil en Binance"),
            "binanceBrl": number("Section BUY de PIX en Binance"),
            "bybitVes": number("Section SELL de PagoMovil en Bybit"),
            "bybitBrl": number("Section BUY de PIX en Bybit"),
        },
        "required": RatesPayload::FIELDS,
    })
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Request {
    contents: Vec<Content>,
    system_instruction: Content,
    tools: Vec<Value>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct Response {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Deserialize)]
struct WebChunk {
    uri: Option<String>,
    title: Option<String>,
}

impl Response {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }

    /// Web sources cited by the first candidate. Chunks without a URI are
    /// skipped.
    fn sources(&self) -> Vec<GroundingSource> {
        self.candidates
            .first()
            .and_then(|c| c.grounding_metadata.as_ref())
            .map(|meta| {
                meta.grounding_chunks
                    .iter()
                    .filter_map(|chunk| chunk.web.as_ref())
                    .filter_map(|web| {
                        let uri = web.uri.as_ref().filter(|u| !u.is_empty())?;
                        let title = web
                            .title
                            .clone()
                            .filter(|t| !t.is_empty())
                            .unwrap_or_else(|| DEFAULT_SOURCE_TITLE.to_string());
                        Some(GroundingSource {
                            title,
                            uri: uri.clone(),
                        })
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn into_quote(self) -> Result<ExchangeRate, QuoteError> {
        let text = self
            .text()
            .ok_or_else(|| QuoteError::Malformed("response carried no text".into()))?;
        let payload = RatesPayload::parse(&text)?;

        Ok(ExchangeRate {
            brl_to_ves: payload.brl_to_ves,
            usd_ves: payload.usd_ves,
            usd_brl: payload.usd_brl,
            binance: Some(MarketRates::new(payload.binance_ves, payload.binance_brl)),
            bybit: Some(MarketRates::new(payload.bybit_ves, payload.bybit_brl)),
            last_updated: Utc::now(),
            source: SOURCE_LABEL.to_string(),
            grounding_sources: self.sources(),
        })
    }
}

#[async_trait]
impl QuoteProvider for Gemini {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn fetch(&self) -> Result<ExchangeRate, QuoteError> {
        let api_key = self.api_key.as_deref().ok_or(QuoteError::MissingCredential {
            variable: API_KEY_VARS[0],
        })?;

        debug!(model = %self.model, "Requesting quote");
        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&self.request())
            .send()
            .await
            .map_err(|e| QuoteError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<Response>()
            .await
            .map_err(|e| QuoteError::Malformed(e.to_string()))?
            .into_quote()
    }
}
