use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use wordle_ranker::cache::{build_first_turn, covers, load_or_build, read_ranking, write_ranking};
use wordle_ranker::{SolverError, Word};

fn words(list: &[&str]) -> Vec<Word> {
    list.iter().map(|w| Word::parse(w).unwrap()).collect()
}

fn test_words() -> Vec<Word> {
    words(&["crane", "slate", "trace", "crate", "raise", "toast", "beast"])
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("wordle-ranker-{}-{}.csv", name, std::process::id()))
}

#[test]
fn test_written_ranking_reads_back() {
    let ranking = build_first_turn(&test_words()).unwrap();
    let mut buf = Vec::new();
    write_ranking(&ranking, &mut buf).unwrap();

    let text = String::from_utf8(buf.clone()).unwrap();
    assert!(text.starts_with("word,score\n"));
    assert_eq!(text.lines().count(), ranking.len() + 1);

    let read = read_ranking(Cursor::new(buf), 5).unwrap();
    assert_eq!(read, ranking);
}

#[test]
fn test_rejects_missing_header() {
    let err = read_ranking(Cursor::new("crane,1.5\n"), 5).unwrap_err();
    assert!(matches!(err, SolverError::CacheFormat { line: 1, .. }));
}

#[test]
fn test_rejects_unsorted_rows() {
    let csv = "word,score\ncrane,1.5\nslate,1.25\n";
    let err = read_ranking(Cursor::new(csv), 5).unwrap_err();
    assert!(matches!(err, SolverError::CacheFormat { line: 3, .. }));
}

#[test]
fn test_rejects_bad_rows() {
    for csv in [
        "word,score\ncrane\n",
        "word,score\ncrane,abc\n",
        "word,score\ncranes,1.0\n",
        "word,score\ncrane,-1.0\n",
    ] {
        let err = read_ranking(Cursor::new(csv), 5).unwrap_err();
        assert!(matches!(err, SolverError::CacheFormat { line: 2, .. }), "{csv:?}");
    }
}

#[test]
fn test_covers() {
    let dictionary = test_words();
    let ranking = build_first_turn(&dictionary).unwrap();
    assert!(covers(&ranking, &dictionary));
    assert!(!covers(&ranking, &dictionary[1..]));
    assert!(!covers(&ranking, &words(&["crane", "slate", "trace", "crate", "raise", "toast", "zebra"])));
}

#[test]
fn test_load_or_build_creates_then_reuses() {
    let path = temp_path("reuse");
    let _ = fs::remove_file(&path);
    let dictionary = test_words();

    let built = load_or_build(&path, &dictionary).unwrap();
    assert!(path.exists());
    assert_eq!(built, build_first_turn(&dictionary).unwrap());

    let loaded = load_or_build(&path, &dictionary).unwrap();
    assert_eq!(loaded, built);

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_load_or_build_replaces_stale_cache() {
    let path = temp_path("stale");
    fs::write(&path, "word,score\nzebra,1.0\n").unwrap();
    let dictionary = test_words();

    let ranking = load_or_build(&path, &dictionary).unwrap();
    assert!(covers(&ranking, &dictionary));

    let reread = read_ranking(Cursor::new(fs::read(&path).unwrap()), 5).unwrap();
    assert_eq!(reread, ranking);

    fs::remove_file(&path).unwrap();
}
