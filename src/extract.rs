use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde_json::Value;
use tracing::debug;

/// Flat `name -> value` fields from a request body.
///
/// Accepts `application/x-www-form-urlencoded`, `multipart/form-data` and
/// JSON objects. A body that cannot be read in any of these shapes yields an
/// empty map, so handlers report it with their usual validation error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormFields(pub HashMap<String, String>);

impl FormFields {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        let fields = if content_type.starts_with("application/json") {
            match Json::<serde_json::Map<String, Value>>::from_request(req, state).await {
                Ok(Json(object)) => Some(from_json(object)),
                Err(err) => {
                    debug!(error = %err, "Unreadable JSON body");
                    None
                }
            }
        } else if content_type.starts_with("multipart/form-data") {
            match Multipart::from_request(req, state).await {
                Ok(multipart) => from_multipart(multipart).await,
                Err(err) => {
                    debug!(error = %err, "Unreadable multipart body");
                    None
                }
            }
        } else {
            match Form::<HashMap<String, String>>::from_request(req, state).await {
                Ok(Form(map)) => Some(map),
                Err(err) => {
                    debug!(error = %err, "Unreadable form body");
                    None
                }
            }
        };

        Ok(Self(fields.unwrap_or_default()))
    }
}

/// Strings are taken verbatim; any other JSON value keeps its JSON text.
fn from_json(object: serde_json::Map<String, Value>) -> HashMap<String, String> {
    object
        .into_iter()
        .map(|(name, value)| {
            let text = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            (name, text)
        })
        .collect()
}

async fn from_multipart(mut multipart: Multipart) -> Option<HashMap<String, String>> {
    let mut fields = HashMap::new();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let Some(name) = field.name().map(str::to_owned) else {
                    continue;
                };
                match field.text().await {
                    Ok(text) => {
                        fields.insert(name, text);
                    }
                    Err(err) => {
                        debug!(error = %err, field = %name, "Unreadable multipart field");
                        return None;
                    }
                }
            }
            Ok(None) => return Some(fields),
            Err(err) => {
                debug!(error = %err, "Malformed multipart body");
                return None;
            }
        }
    }
}
