use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;

fn parse(text: &str) -> WordList {
    WordList::parse_with_rng(text, &mut StdRng::seed_from_u64(9))
}

#[test]
fn ids_are_line_indexes() {
    let list = parse("the\nmoon\nsings\n");
    let ids: Vec<TileId> = list.snapshot().iter().map(|w| w.id).collect();
    assert_eq!(ids, vec![0, 1, 2]);
    assert_eq!(list.get(1).map(|w| w.word.as_str()), Some("moon"));
}

#[test]
fn blank_lines_are_skipped_but_keep_ids_line_based() {
    let list = parse("the\n\n  \nmoon\r\n");
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(0).map(|w| w.word.as_str()), Some("the"));
    assert_eq!(list.get(3).map(|w| w.word.as_str()), Some("moon"));
    assert!(list.get(1).is_none());
}

#[test]
fn positions_fall_inside_the_field() {
    let text = "a\n".repeat(200);
    for word in parse(&text).snapshot() {
        assert!((0..FIELD_SIZE).contains(&word.x), "x out of field: {}", word.x);
        assert!((0..FIELD_SIZE).contains(&word.y), "y out of field: {}", word.y);
    }
}

#[test]
fn same_seed_places_words_identically() {
    assert_eq!(parse("a\nb\nc"), parse("a\nb\nc"));
}

#[test]
fn apply_move_updates_position_last_write_wins() {
    let mut list = parse("cat\ndog");
    assert_eq!(list.apply_move(&MoveIntent { id: 1, v: 1, x: 10, y: 20 }), Some(RemoteMove { id: 1, x: 10, y: 20 }));
    assert_eq!(list.apply_move(&MoveIntent { id: 1, v: 1, x: 30, y: 40 }), Some(RemoteMove { id: 1, x: 30, y: 40 }));
    let dog = list.get(1).cloned();
    assert_eq!(dog.map(|w| (w.x, w.y)), Some((30, 40)));
}

#[test]
fn apply_move_ignores_unknown_ids() {
    let mut list = parse("cat");
    let before = list.clone();
    assert_eq!(list.apply_move(&MoveIntent { id: 5, v: 1, x: 1, y: 1 }), None);
    assert_eq!(list, before);
}

#[test]
fn load_reports_missing_file() {
    let err = WordList::load(Path::new("/definitely/not/here/words.txt")).unwrap_err();
    assert!(matches!(err, WordsError::Read { .. }));
}

#[test]
fn load_rejects_empty_file() {
    let path = std::env::temp_dir().join(format!("fridge-empty-{}.txt", std::process::id()));
    std::fs::write(&path, "\n\n").unwrap();
    let err = WordList::load(&path).unwrap_err();
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(err, WordsError::Empty(_)));
}

#[test]
fn load_reads_words_from_disk() {
    let path = std::env::temp_dir().join(format!("fridge-words-{}.txt", std::process::id()));
    std::fs::write(&path, "honey\nbee\n").unwrap();
    let list = WordList::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(list.len(), 2);
}
