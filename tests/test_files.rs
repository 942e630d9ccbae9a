use simpleserver::files;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("simpleserver-test-{}-{}", std::process::id(), name))
}

#[test]
fn test_resolve_root_uses_index_file() {
    assert_eq!(files::resolve("/", "index.html"), "index.html");
    assert_eq!(files::resolve("/", "home.html"), "home.html");
}

#[test]
fn test_resolve_strips_through_first_slash() {
    assert_eq!(files::resolve("/notes.txt", "index.html"), "notes.txt");
    assert_eq!(files::resolve("/sub/page.html", "index.html"), "sub/page.html");
}

#[test]
fn test_resolve_path_without_slash_passes_through() {
    assert_eq!(files::resolve("notes.txt", "index.html"), "notes.txt");
    assert_eq!(files::resolve("", "index.html"), "");
}

#[tokio::test]
async fn test_load_reports_on_disk_size() {
    let path = temp_path("sized.txt");
    std::fs::write(&path, b"hi\n").unwrap();

    let file = files::load(path.to_str().unwrap()).await.unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(file.size, 3);
    assert_eq!(file.body, b"hi\n".to_vec());
}

#[tokio::test]
async fn test_load_appends_missing_final_newline() {
    let path = temp_path("unterminated.txt");
    std::fs::write(&path, b"hi").unwrap();

    let file = files::load(path.to_str().unwrap()).await.unwrap();
    std::fs::remove_file(&path).unwrap();

    // The advertised size stays at the on-disk byte count.
    assert_eq!(file.size, 2);
    assert_eq!(file.body, b"hi\n".to_vec());
}

#[tokio::test]
async fn test_load_keeps_crlf_line_endings() {
    let path = temp_path("crlf.txt");
    std::fs::write(&path, b"a\r\nb\r\n").unwrap();

    let file = files::load(path.to_str().unwrap()).await.unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(file.size, 6);
    assert_eq!(file.body, b"a\r\nb\r\n".to_vec());
}

#[tokio::test]
async fn test_load_empty_file() {
    let path = temp_path("empty.txt");
    std::fs::write(&path, b"").unwrap();

    let file = files::load(path.to_str().unwrap()).await.unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(file.size, 0);
    assert!(file.body.is_empty());
}

#[tokio::test]
async fn test_load_missing_file_is_an_error() {
    let path = temp_path("does-not-exist.txt");

    let result = files::load(path.to_str().unwrap()).await;

    assert!(result.is_err());
}
