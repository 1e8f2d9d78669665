use search_cli::{collect_input_files, format_hits, format_match, load_corpus};
use search_core::{DocumentStatus, SearchServer};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn write_corpus(dir: &std::path::Path) {
    fs::write(
        dir.join("a.jsonl"),
        concat!(
            r#"{"id": 12, "text": "белый кот и модный ошейник", "ratings": [1]}"#,
            "\n\n",
            r#"{"id": 4, "text": "пушистый кот пушистый хвост", "status": "active", "ratings": [12, 1, 5]}"#,
            "\n",
        ),
    )
    .unwrap();
    fs::write(
        dir.join("b.json"),
        r#"[{"id": 42, "text": "ухоженный пёс выразительные глаза", "status": "excluded", "ratings": [-2, 5, 3]}]"#,
    )
    .unwrap();
    fs::write(dir.join("notes.txt"), "ignored").unwrap();
}

#[test]
fn loads_json_and_jsonl_in_name_order() {
    let dir = tempdir().unwrap();
    write_corpus(dir.path());
    assert_eq!(collect_input_files(dir.path()).unwrap().len(), 2);

    let mut server = SearchServer::from_stop_words_text("и в на").unwrap();
    let added = load_corpus(&mut server, dir.path()).unwrap();
    assert_eq!(added, 3);
    assert_eq!(server.ids().collect::<Vec<_>>(), vec![12, 4, 42]);
    assert_eq!(server.document_status(42), Some(DocumentStatus::Excluded));

    let hits = server.find_top_documents("пушистый ухоженный кот").unwrap();
    let plain = format_hits(&hits, false).unwrap();
    assert_eq!(
        plain,
        "{ document_id = 4, relevance = 0.650672, rating = 6 }\n{ document_id = 12, relevance = 0.101366, rating = 1 }"
    );
    let json: Value = serde_json::from_str(&format_hits(&hits, true).unwrap()).unwrap();
    assert_eq!(json[0]["doc_id"].as_i64(), Some(4));
    assert_eq!(json[1]["rating"].as_i64(), Some(1));
}

#[test]
fn formats_match_lines() {
    let words = vec!["кот".to_string(), "пушистый".to_string()];
    assert_eq!(
        format_match(4, &words, DocumentStatus::Active, false).unwrap(),
        "{ document_id = 4, status = active, words = кот пушистый }"
    );
    let json: Value = serde_json::from_str(&format_match(4, &words, DocumentStatus::Removed, true).unwrap()).unwrap();
    assert_eq!(json["status"], "removed");
    assert_eq!(json["words"][1], "пушистый");
}

#[test]
fn duplicate_id_aborts_loading() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("dup.jsonl");
    fs::write(&file, "{\"id\": 1, \"text\": \"cat\"}\n{\"id\": 1, \"text\": \"dog\"}\n").unwrap();
    let mut server = SearchServer::new();
    let err = load_corpus(&mut server, &file).unwrap_err();
    assert!(format!("{err:#}").contains("document id 1 already exists"));
    assert_eq!(server.document_count(), 1);
}

#[test]
fn missing_input_path_is_an_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("typo.jsonl");
    let mut server = SearchServer::new();
    let err = load_corpus(&mut server, &missing).unwrap_err();
    assert!(err.to_string().contains("does not exist"));
    assert!(collect_input_files(&missing).is_err());
    assert_eq!(server.document_count(), 0);
}

#[test]
fn scalar_json_root_is_an_error() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("corpus.json");
    fs::write(&file, "42").unwrap();
    let mut server = SearchServer::new();
    let err = load_corpus(&mut server, &file).unwrap_err();
    assert!(format!("{err:#}").contains("expected a document object or array"));
}
