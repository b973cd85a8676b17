use std::collections::HashMap;

use actix_multipart::Multipart;
use futures_util::StreamExt;
use serde::Deserialize;

use crate::error::AppError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct AiRequest {
    pub problem: String,
}

pub struct UploadedReport {
    pub filename: String,
    pub content: Vec<u8>,
}

pub struct BookRequest {
    pub doctor: String,
    pub date: String,
    pub time: String,
    pub problem: String,
    pub report: Option<UploadedReport>,
}

impl BookRequest {
    /// Reads the multipart booking form, rejecting it once all parts together
    /// exceed `limit` bytes. A `report` part without a file name is treated as
    /// no upload.
    pub async fn from_multipart(mut payload: Multipart, limit: usize) -> Result<Self, AppError> {
        let mut fields = HashMap::new();
        let mut report = None;
        let mut total = 0;

        while let Some(field) = payload.next().await {
            let mut field = field.map_err(|err| AppError::BadRequest(err.to_string()))?;
            let name = field.name().unwrap_or_default().to_string();
            let filename = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(|filename| filename.to_string());

            let mut content = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk.map_err(|err| AppError::BadRequest(err.to_string()))?;
                total += chunk.len();
                if total > limit {
                    return Err(AppError::PayloadTooLarge(limit));
                }
                content.extend_from_slice(&chunk);
            }

            if name == "report" {
                report = filename
                    .filter(|filename| !filename.is_empty())
                    .map(|filename| UploadedReport { filename, content });
            } else {
                let value = String::from_utf8(content)
                    .map_err(|_| AppError::BadRequest(format!("Field '{}' is not UTF-8", name)))?;
                fields.insert(name, value);
            }
        }

        let mut take = |name: &str| {
            fields
                .remove(name)
                .ok_or_else(|| AppError::MissingFormField(name.to_string()))
        };

        Ok(Self {
            doctor: take("doctor")?,
            date: take("date")?,
            time: take("time")?,
            problem: take("problem")?,
            report,
        })
    }
}
