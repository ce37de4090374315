//! MyMemory translation client.

use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use lexdraft_core::{Error, Language, Result};

use crate::Translator;

const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// HTTP client for the MyMemory translation API.
///
/// One GET per field, short deadline, no retries — callers degrade to the
/// untranslated value on any failure.
pub struct MyMemoryTranslator {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl MyMemoryTranslator {
    pub fn new(timeout_secs: u64) -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, timeout_secs)
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_endpoint(endpoint: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Translation(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

impl Translator for MyMemoryTranslator {
    fn translate(&self, text: &str, target: Language) -> Result<String> {
        let langpair = format!("en|{}", target.code());
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .map_err(|e| Error::Translation(e.to_string()))?;

        let body: Value = response
            .json()
            .map_err(|e| Error::Translation(e.to_string()))?;

        // responseStatus is a number on success but arrives as a string on
        // some error responses.
        let status_ok = match body.get("responseStatus") {
            Some(Value::Number(n)) => n.as_i64() == Some(200),
            Some(Value::String(s)) => s == "200",
            _ => false,
        };
        if !status_ok {
            return Err(Error::Translation(format!(
                "responseStatus != 200 for langpair {langpair}"
            )));
        }

        let translated = body
            .get("responseData")
            .and_then(|d| d.get("translatedText"))
            .and_then(|t| t.as_str())
            .ok_or_else(|| Error::Translation("missing translatedText".to_string()))?;

        debug!("translated {} chars to {}", text.len(), target.code());
        Ok(translated.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_endpoint_is_a_translation_error() {
        // Reserved TEST-NET address; connect fails fast, no real traffic.
        let t = MyMemoryTranslator::with_endpoint("http://192.0.2.1:1/get", 1).unwrap();
        let err = t.translate("hello", Language::Hi).unwrap_err();
        assert!(matches!(err, Error::Translation(_)));
    }
}
