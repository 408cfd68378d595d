//! Attachment rendering strategy.
//!
//! DESIGN
//! ======
//! [`choose_viewer`] is a pure dispatch from a file and its context to a
//! [`Viewer`]. Presentation layers (Leptos components, terminal output) only
//! ever match on the result, so the extension table lives in one place.
//!
//! Word documents go through a third-party public viewer, which can only
//! fetch URLs reachable from the internet. Without a public base the
//! strategy falls back to a download link.

#[cfg(test)]
#[path = "viewer_test.rs"]
mod viewer_test;

use crate::api::{encode_component, file_path, join_url, with_token};
use crate::types::FileInfo;

/// Public document viewer used for Word files.
pub const DOCS_VIEWER_URL: &str = "https://docs.google.com/viewer";

/// Coarse file category derived from the extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Pdf,
    Html,
    Text,
    Word,
    Spreadsheet,
    Other,
}

impl FileKind {
    #[must_use]
    pub fn from_ext(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "bmp" | "webp" | "svg" => Self::Image,
            "pdf" => Self::Pdf,
            "html" | "htm" => Self::Html,
            "txt" => Self::Text,
            "docx" | "doc" => Self::Word,
            "xlsx" | "xls" => Self::Spreadsheet,
            _ => Self::Other,
        }
    }
}

/// Where file URLs point and how they authenticate.
#[derive(Clone, Copy, Debug, Default)]
pub struct ViewerContext<'a> {
    /// Base for backend-relative file URLs. Empty means same origin.
    pub api_base: &'a str,
    /// Session token appended as `?token=`.
    pub token: Option<&'a str>,
    /// Publicly reachable base from `/api/public-url`, if known.
    pub public_base: Option<&'a str>,
}

/// How to display one attachment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Viewer {
    /// Inline `<img>`.
    Image { src: String, alt: String },
    /// Embedded frame pointed at the file URL.
    Frame { src: String, title: String },
    /// Embedded frame pointed at the external document viewer.
    External { src: String, title: String },
    /// Download link only.
    Download { href: String, name: String, label: String, icon: &'static str },
}

impl Viewer {
    /// True for every strategy that shows the content in place.
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        !matches!(self, Self::Download { .. })
    }

    /// URL the strategy loads or links to.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Image { src, .. } | Self::Frame { src, .. } | Self::External { src, .. } => src,
            Self::Download { href, .. } => href,
        }
    }
}

/// Pick the display strategy for `file`.
#[must_use]
pub fn choose_viewer(file: &FileInfo, incoming_no: i64, ctx: &ViewerContext<'_>) -> Viewer {
    let ext = file.extension();
    let src = file_url(file, incoming_no, ctx.api_base, ctx.token);
    match FileKind::from_ext(&ext) {
        FileKind::Image => Viewer::Image { src, alt: file.name.clone() },
        FileKind::Pdf | FileKind::Html | FileKind::Text => Viewer::Frame { src, title: file.name.clone() },
        FileKind::Word => match ctx.public_base.filter(|base| !base.is_empty()) {
            Some(public_base) => {
                let public = public_file_url(file, incoming_no, public_base, ctx.token);
                Viewer::External { src: external_viewer_url(&public), title: file.name.clone() }
            }
            None => download(file, &ext, src),
        },
        FileKind::Spreadsheet | FileKind::Other => download(file, &ext, src),
    }
}

fn download(file: &FileInfo, ext: &str, href: String) -> Viewer {
    Viewer::Download {
        href,
        name: file.name.clone(),
        label: ext.to_ascii_uppercase(),
        icon: download_icon(ext),
    }
}

/// Authenticated URL of `file` relative to `base`.
#[must_use]
pub fn file_url(file: &FileInfo, incoming_no: i64, base: &str, token: Option<&str>) -> String {
    let raw = if file.url.is_empty() { file_path(incoming_no, &file.name) } else { file.url.clone() };
    let absolute = if is_absolute(&raw) { raw } else { join_url(base, &raw) };
    with_token(&absolute, token)
}

fn public_file_url(file: &FileInfo, incoming_no: i64, public_base: &str, token: Option<&str>) -> String {
    let path = if file.url.is_empty() || is_absolute(&file.url) {
        file_path(incoming_no, &file.name)
    } else {
        file.url.clone()
    };
    with_token(&join_url(public_base, &path), token)
}

/// Wrap a public file URL in the external document viewer.
#[must_use]
pub fn external_viewer_url(public_file_url: &str) -> String {
    format!("{DOCS_VIEWER_URL}?url={}&embedded=true", encode_component(public_file_url))
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Icon shown on a file tab.
#[must_use]
pub fn tab_icon(ext: &str) -> &'static str {
    match ext {
        "pdf" => "📕",
        "txt" => "📄",
        "html" => "🌐",
        "docx" => "📘",
        "xlsx" => "📊",
        _ => "📎",
    }
}

/// Icon shown on a download card.
#[must_use]
pub fn download_icon(ext: &str) -> &'static str {
    match ext {
        "docx" | "doc" => "📄",
        "xlsx" | "xls" => "📊",
        _ => "📎",
    }
}
