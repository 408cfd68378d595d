use super::*;

fn file(name: &str, ext: &str) -> FileInfo {
    FileInfo { name: name.to_owned(), ext: ext.to_owned(), url: format!("/files/1233/{name}") }
}

fn ctx<'a>(token: Option<&'a str>, public_base: Option<&'a str>) -> ViewerContext<'a> {
    ViewerContext { api_base: "http://api.test", token, public_base }
}

// =============================================================
// Dispatch table
// =============================================================

#[test]
fn images_render_inline() {
    for ext in ["png", "JPG", "jpeg", "gif", "webp", "svg"] {
        let viewer = choose_viewer(&file("scan", ext), 1233, &ctx(None, None));
        assert!(matches!(viewer, Viewer::Image { .. }), "{ext}");
    }
}

#[test]
fn pdf_html_text_render_in_frame() {
    for ext in ["pdf", "html", "htm", "txt", "PDF"] {
        let viewer = choose_viewer(&file("doc", ext), 1233, &ctx(None, None));
        assert!(matches!(viewer, Viewer::Frame { .. }), "{ext}");
    }
}

#[test]
fn word_uses_external_viewer_when_public_base_known() {
    let viewer = choose_viewer(
        &file("contract.docx", "docx"),
        1233,
        &ctx(Some("tok"), Some("https://public.example.org")),
    );
    let Viewer::External { src, title } = viewer else {
        panic!("expected external viewer");
    };
    assert_eq!(title, "contract.docx");
    assert!(src.starts_with("https://docs.google.com/viewer?url="));
    assert!(src.ends_with("&embedded=true"));
    assert!(src.contains(&encode_component(
        "https://public.example.org/files/1233/contract.docx?token=tok"
    )));
}

#[test]
fn word_without_public_base_downloads() {
    let viewer = choose_viewer(&file("old.doc", "doc"), 1233, &ctx(None, None));
    assert!(!viewer.is_embedded());
    let Viewer::Download { icon, label, .. } = viewer else {
        panic!("expected download");
    };
    assert_eq!(icon, "📄");
    assert_eq!(label, "DOC");
}

#[test]
fn unsupported_extensions_always_download() {
    for ext in ["xlsx", "zip", "eml", "", "exe", "xls"] {
        let viewer = choose_viewer(&file("blob", ext), 1233, &ctx(Some("t"), Some("https://p.test")));
        assert!(matches!(viewer, Viewer::Download { .. }), "{ext:?}");
        assert!(!viewer.is_embedded());
    }
}

#[test]
fn spreadsheet_download_gets_chart_icon() {
    let Viewer::Download { icon, .. } = choose_viewer(&file("t.xlsx", "xlsx"), 1, &ctx(None, None)) else {
        panic!("expected download");
    };
    assert_eq!(icon, "📊");
}

// =============================================================
// URLs
// =============================================================

#[test]
fn relative_urls_join_api_base_and_carry_token() {
    let viewer = choose_viewer(&file("a.txt", "txt"), 1233, &ctx(Some("abc"), None));
    assert_eq!(viewer.target(), "http://api.test/files/1233/a.txt?token=abc");
}

#[test]
fn absolute_urls_are_kept() {
    let f = FileInfo { name: "a.pdf".into(), ext: "pdf".into(), url: "https://cdn.test/a.pdf".into() };
    assert_eq!(file_url(&f, 1, "http://api.test", None), "https://cdn.test/a.pdf");
}

#[test]
fn missing_url_is_built_from_incoming_no_and_name() {
    let f = FileInfo { name: "my letter.txt".into(), ext: "txt".into(), url: String::new() };
    assert_eq!(file_url(&f, 77, "", Some("t")), "/files/77/my%20letter.txt?token=t");
}

// =============================================================
// Icons
// =============================================================

#[test]
fn tab_icons_follow_extension() {
    assert_eq!(tab_icon("pdf"), "📕");
    assert_eq!(tab_icon("html"), "🌐");
    assert_eq!(tab_icon("docx"), "📘");
    assert_eq!(tab_icon("rar"), "📎");
}
