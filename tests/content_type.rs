use docmeta_core::metadata::DocumentMetadata;
use docmeta_core::utils::guess_type;

#[test]
fn known_extensions() {
    assert_eq!(guess_type("report.pdf").as_deref(), Some("application/pdf"));
    assert_eq!(guess_type("index.html").as_deref(), Some("text/html"));
    assert_eq!(guess_type("scan.png").as_deref(), Some("image/png"));
    assert_eq!(
        guess_type("letter.docx").as_deref(),
        Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
    );
}

#[test]
fn extension_lookup_ignores_case() {
    assert_eq!(guess_type("REPORT.PDF").as_deref(), Some("application/pdf"));
}

#[test]
fn unknown_or_missing_extension_is_absent() {
    assert_eq!(guess_type("noext"), None);
    assert_eq!(guess_type(""), None);
    assert_eq!(guess_type("archive.notarealextension"), None);
}

#[test]
fn paths_use_the_final_component() {
    assert_eq!(guess_type("/var/data/v1.2/report.pdf").as_deref(), Some("application/pdf"));
    assert_eq!(guess_type("/var/data/v1.2/report"), None);
}

#[test]
fn urls_use_only_the_path() {
    assert_eq!(
        guess_type("https://example.com/papers/report.pdf?download=1#page=2").as_deref(),
        Some("application/pdf")
    );
    assert_eq!(guess_type("https://arxiv.org/abs/2408.09869"), None);
    assert_eq!(guess_type("https://example.com/"), None);
}

#[test]
fn windows_drive_paths_are_not_urls() {
    assert_eq!(guess_type(r"C:\docs\report.pdf").as_deref(), Some("application/pdf"));
}

#[test]
fn data_urls_report_declared_type() {
    assert_eq!(guess_type("data:application/pdf;base64,JVBERi0=").as_deref(), Some("application/pdf"));
    assert_eq!(guess_type("data:,hello").as_deref(), Some("text/plain"));
}

#[test]
fn records_for_sources_carry_the_guess() {
    let record = DocumentMetadata::for_source("report.pdf");
    assert_eq!(record.source.as_deref(), Some("report.pdf"));
    assert_eq!(record.content_type.as_deref(), Some("application/pdf"));

    let record = DocumentMetadata::for_source("noext");
    assert!(!record.to_map().contains_key("type"));
}
