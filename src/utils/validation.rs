use validator::Validate;

use crate::error::{Error, Result};

pub fn validate<T: Validate>(val: &T) -> std::result::Result<(), validator::ValidationErrors> {
    val.validate()
}

pub fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Contact numbers are 10 to 15 digits with no separators.
pub fn check_contact_number(value: &str) -> Result<()> {
    if !is_digits(value) {
        return Err(Error::BadRequest(
            "Contact number must contain only digits".to_string(),
        ));
    }
    if !(10..=15).contains(&value.len()) {
        return Err(Error::BadRequest(
            "Contact number must be between 10 and 15 digits".to_string(),
        ));
    }
    Ok(())
}

const ALLOWED_UPLOAD_EXTS: [&str; 6] = ["pdf", "doc", "docx", "jpg", "jpeg", "png"];

/// Checks the extension against the allow-list and sniffs the leading bytes
/// for the formats that carry a magic number.
pub fn check_upload(filename: &str, data: &[u8]) -> Result<()> {
    let ext = std::path::Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    if !ALLOWED_UPLOAD_EXTS.contains(&ext.as_str()) {
        return Err(Error::BadRequest(format!("File type .{} is not allowed", ext)));
    }
    if ext == "pdf" && !data.starts_with(b"%PDF") {
        return Err(Error::BadRequest("Invalid PDF file content".into()));
    }
    if (ext == "jpg" || ext == "jpeg") && !data.starts_with(&[0xFF, 0xD8]) {
        return Err(Error::BadRequest("Invalid JPEG file content".into()));
    }
    if ext == "png" && !data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
        return Err(Error::BadRequest("Invalid PNG file content".into()));
    }
    Ok(())
}
