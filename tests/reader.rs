use movetree::tree::MoveTree;
use pretty_assertions::assert_eq;

fn kids<'a>(tree: &'a MoveTree, token: &str) -> Vec<&'a str> {
    tree.children(token).iter().map(String::as_str).collect()
}

#[test]
fn rows_map_to_their_trimmed_nonempty_fields() {
    let src = "d4; Nf6 ;d5\nNf6;g6\nd5;Nf3\n";
    let tree = MoveTree::from_reader(src.as_bytes()).expect("well-formed move list");
    assert_eq!(tree.len(), 3);
    assert_eq!(kids(&tree, "d4"), vec!["Nf6", "d5"]);
    assert_eq!(kids(&tree, "Nf6"), vec!["g6"]);
    assert_eq!(kids(&tree, "d5"), vec!["Nf3"]);
}

#[test]
fn key_order_follows_row_order() {
    let src = "e4;e5\na4\nd4;d5\n";
    let tree = MoveTree::from_reader(src.as_bytes()).expect("well-formed move list");
    let order: Vec<&str> = tree.tokens().collect();
    assert_eq!(order, vec!["e4", "a4", "d4"]);
}

#[test]
fn blank_and_tokenless_rows_are_tolerated() {
    let src = "\n\nd4;Nf6\n   \n;e5;e6\n";
    let tree = MoveTree::from_reader(src.as_bytes()).expect("well-formed move list");
    assert_eq!(tree.len(), 1);
    assert!(tree.contains("d4"));
}

#[test]
fn no_chess_validation_at_read_time() {
    let src = "xyzzy;not-a-move\n";
    let tree = MoveTree::from_reader(src.as_bytes()).expect("reader accepts any tokens");
    assert_eq!(kids(&tree, "xyzzy"), vec!["not-a-move"]);
}

#[test]
fn missing_file_propagates_io_error() {
    let err = MoveTree::from_path("definitely/not/here.csv");
    assert!(err.is_err(), "expected a terminal read failure");
}
