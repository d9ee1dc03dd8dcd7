use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use common::requests::Message;
use futures_util::StreamExt;
use log::info;

use crate::auth::AuthedAdmin;
use crate::db::Database;
use crate::error::ApiError;
use crate::ingest::{distribute, parse_rows, SourceFormat};

struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

/// Handler for `POST /api/lists/upload`.
///
/// Validation runs strictly before parsing, and parsing strictly before any
/// write, so a rejected upload leaves no lists behind. The per-agent writes
/// themselves are independent statements with no surrounding transaction: if
/// one fails mid-way, earlier groups stay persisted and the request reports
/// a server error.
pub async fn process(
    db: web::Data<Database>,
    _admin: AuthedAdmin,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let file = read_upload(payload).await?.ok_or(ApiError::MissingFile)?;
    if file.bytes.is_empty() {
        return Err(ApiError::MissingFile);
    }
    let format = SourceFormat::from_extension(extension(&file.filename)?)?;

    let roster = db.find_all_agents()?;
    if roster.is_empty() {
        return Err(ApiError::NoAgentsAvailable);
    }

    let items = parse_rows(&file.bytes, format)?;
    let row_count = items.len();

    for (agent_id, group) in distribute(items, &roster)? {
        db.create_list(&agent_id, group)?;
    }

    info!(
        "distributed {} rows from '{}' across {} agents",
        row_count,
        file.filename,
        roster.len()
    );
    Ok(HttpResponse::Ok().json(Message::new("List uploaded and distributed successfully")))
}

fn extension(filename: &str) -> Result<&str, ApiError> {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .ok_or(ApiError::UnsupportedExtension)
}

/// Drains the multipart stream and buffers the first `file` field in memory.
async fn read_upload(mut payload: Multipart) -> Result<Option<UploadedFile>, ApiError> {
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| ApiError::MalformedInput(e.to_string()))?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| ApiError::MalformedInput(e.to_string()))?;
            bytes.extend_from_slice(&chunk);
        }
        return Ok(Some(UploadedFile { filename, bytes }));
    }
    Ok(None)
}
