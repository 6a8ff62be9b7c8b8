//! File upload encoding.
//!
//! Remote sessions cannot type a local path into a file input; the file
//! is shipped to the server first. The payload is a zip archive holding
//! exactly one entry named after the file's base name, base64-encoded,
//! posted to the session's `file` endpoint. The server answers with the
//! remote path to substitute into subsequent value commands.

use std::io::{Cursor, Write};
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Value, json};
use wd_runtime::{Error, Result, Session};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Uploads a local file and returns the server-side filename.
///
/// # Errors
///
/// Read failures propagate uncaught; callers probing "is this text a
/// path?" must decide that before calling (see `Element::type_keys`).
pub async fn upload(session: &Session, path: &Path) -> Result<String> {
	let data = tokio::fs::read(path).await?;
	let name = path
		.file_name()
		.map(|name| name.to_string_lossy().into_owned())
		.ok_or_else(|| Error::InvalidArgument(format!("not a file path: {}", path.display())))?;

	let archive = pack(&name, &data)?;
	tracing::debug!(target = "wd", file = %name, bytes = data.len(), "uploading file");

	let value = session.post("file", json!({ "file": STANDARD.encode(archive) })).await?;
	match value {
		Value::String(remote) => Ok(remote),
		other => Err(Error::Protocol(format!("file upload response was not a string: {other}"))),
	}
}

/// Packs file content into a single-entry zip archive.
fn pack(name: &str, data: &[u8]) -> Result<Vec<u8>> {
	let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
	writer
		.start_file(name, SimpleFileOptions::default())
		.map_err(std::io::Error::from)?;
	writer.write_all(data)?;
	let cursor = writer.finish().map_err(std::io::Error::from)?;
	Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
	use std::io::Read;

	use super::*;

	#[test]
	fn test_pack_produces_single_named_entry() {
		let archive = pack("notes.txt", b"hello upload").unwrap();

		let mut reader = zip::ZipArchive::new(Cursor::new(archive)).unwrap();
		assert_eq!(reader.len(), 1);

		let mut entry = reader.by_index(0).unwrap();
		assert_eq!(entry.name(), "notes.txt");
		let mut content = String::new();
		entry.read_to_string(&mut content).unwrap();
		assert_eq!(content, "hello upload");
	}

	#[test]
	fn test_pack_empty_file() {
		let archive = pack("empty.bin", b"").unwrap();
		let reader = zip::ZipArchive::new(Cursor::new(archive)).unwrap();
		assert_eq!(reader.len(), 1);
	}
}
