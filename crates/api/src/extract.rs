//! Extractor for small text-only forms.
//!
//! The admin page posts `FormData`, which browsers encode as
//! `multipart/form-data`; scripted clients tend to send
//! `application/x-www-form-urlencoded`. [`FormFields`] accepts either and
//! exposes the last value of each field by name.

use std::collections::HashMap;

use axum::extract::{FromRequest, Multipart, Request};
use axum::http::header::CONTENT_TYPE;
use axum::Form;

use crate::error::{AppError, AppResult};

/// Text fields of a submitted form, keyed by field name.
#[derive(Debug, Default, Clone)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    /// Raw value of a field, if it was sent.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Text value of a field. Absent fields yield `None`; empty strings are kept.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    /// Numeric value of a field.
    ///
    /// Absent or blank fields yield `None` (browsers send `width=` for an
    /// empty input). Anything else must parse as a finite number.
    pub fn optional_f64(&self, name: &str) -> AppResult<Option<f64>> {
        let Some(raw) = self.get(name).map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(AppError::BadRequest(format!(
                "Field '{name}' must be a number, got '{raw}'"
            ))),
        }
    }
}

impl FromIterator<(String, String)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if content_type.starts_with("multipart/form-data") {
            let mut multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            let mut fields = HashMap::new();
            while let Some(field) = multipart
                .next_field()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?
            {
                let Some(name) = field.name().map(str::to_string) else {
                    continue;
                };
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                fields.insert(name, text);
            }
            Ok(Self(fields))
        } else if content_type.is_empty() {
            // Bodyless POSTs carry no fields.
            Ok(Self::default())
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            Ok(pairs.into_iter().collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn numbers_parsed() {
        let f = fields(&[("width", "1200.5"), ("height", " 800 ")]);
        assert_eq!(f.optional_f64("width").unwrap(), Some(1200.5));
        assert_eq!(f.optional_f64("height").unwrap(), Some(800.0));
    }

    #[test]
    fn blank_or_missing_numbers_are_none() {
        let f = fields(&[("width", "")]);
        assert_eq!(f.optional_f64("width").unwrap(), None);
        assert_eq!(f.optional_f64("height").unwrap(), None);
    }

    #[test]
    fn malformed_numbers_rejected() {
        let f = fields(&[("width", "wide"), ("height", "NaN")]);
        assert_matches!(f.optional_f64("width"), Err(AppError::BadRequest(_)));
        assert_matches!(f.optional_f64("height"), Err(AppError::BadRequest(_)));
    }

    #[test]
    fn text_kept_verbatim() {
        let f = fields(&[("memo", "")]);
        assert_eq!(f.optional_text("memo").as_deref(), Some(""));
        assert_eq!(f.optional_text("status"), None);
    }
}
