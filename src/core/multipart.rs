//! # Multipart form bodies
//!
//! This module contains the [`MultipartForm`] model used by endpoints
//! that upload `multipart/form-data` bodies.

use uuid::Uuid;

const CRLF: &str = "\r\n";

/// One part of a multipart request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartPart {
    /// The field name under which the data is submitted.
    pub name: String,

    /// Name of the file being transferred.
    pub file_name: String,

    /// MIME type of the data, if known.
    pub mime_type: Option<String>,

    /// Raw content of the part.
    pub data: Vec<u8>,
}

impl MultipartPart {
    fn write_into(&self, body: &mut Vec<u8>) {
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"",
                self.name, self.file_name
            )
            .as_bytes(),
        );

        if let Some(mime_type) = &self.mime_type {
            body.extend_from_slice(format!("{CRLF}Content-Type: {mime_type}").as_bytes());
        }

        body.extend_from_slice(CRLF.as_bytes());
        body.extend_from_slice(CRLF.as_bytes());
        body.extend_from_slice(&self.data);
        body.extend_from_slice(CRLF.as_bytes());
    }
}

/// A multipart request body model.
///
/// Holds an ordered list of [`MultipartPart`]s and a boundary token
/// generated fresh for every form, and encodes them into a single
/// `multipart/form-data` body.
///
/// # Examples
/// ```
/// use courier::core::{MultipartForm, MultipartPart};
///
/// let form = MultipartForm::new(vec![MultipartPart {
///     name: "avatar".into(),
///     file_name: "avatar.png".into(),
///     mime_type: Some("image/png".into()),
///     data: vec![0x89, 0x50, 0x4e, 0x47],
/// }]);
///
/// let body = form.encode();
/// assert!(!body.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartForm {
    parts: Vec<MultipartPart>,
    boundary: String,
}

impl MultipartForm {
    /// Create a form from the given parts with a random boundary.
    pub fn new(parts: Vec<MultipartPart>) -> Self {
        Self {
            parts,
            boundary: Uuid::new_v4().to_string(),
        }
    }

    /// The boundary token separating the encoded parts.
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Turn all parts into one coherent request body.
    ///
    /// A form without parts encodes to an empty body; no boundary is
    /// emitted in that case.
    pub fn encode(&self) -> Vec<u8> {
        if self.parts.is_empty() {
            return Vec::new();
        }

        let mut body = Vec::new();
        for part in &self.parts {
            body.extend_from_slice(format!("--{}{CRLF}", self.boundary).as_bytes());
            part.write_into(&mut body);
        }
        body.extend_from_slice(format!("--{}--{CRLF}", self.boundary).as_bytes());

        body
    }
}
