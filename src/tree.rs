use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Branching move list: token -> ordered child tokens.
///
/// Keys iterate in the order their rows appeared, so resolution and export
/// stay deterministic for a given input file.
#[derive(Debug, Default, Clone)]
pub struct MoveTree {
    children: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl MoveTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row. A repeated token replaces its earlier children
    /// (last row wins) but keeps its original place in iteration order.
    pub fn insert(&mut self, token: &str, children: Vec<String>) {
        if !self.children.contains_key(token) {
            self.order.push(token.to_string());
        }
        self.children.insert(token.to_string(), children);
    }

    /// Ordered children of a token; empty slice for leaves and unknown tokens.
    pub fn children(&self, token: &str) -> &[String] {
        self.children.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All tokens that appeared as row keys, in row order.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.order.iter().map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.children.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Parse a semicolon-delimited move list: field 0 is the token, the rest
    /// are its ordered children. Fields are trimmed; empty fields and rows
    /// without a token are skipped. No chess validation happens here.
    pub fn from_reader<R: Read>(reader: R) -> io::Result<MoveTree> {
        let mut tree = MoveTree::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let mut fields = line.split(';').map(str::trim);
            let token = match fields.next() {
                Some(t) if !t.is_empty() => t,
                _ => continue,
            };
            let children: Vec<String> = fields
                .filter(|f| !f.is_empty())
                .map(str::to_string)
                .collect();
            tree.insert(token, children);
        }
        Ok(tree)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> io::Result<MoveTree> {
        Self::from_reader(File::open(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kids(tree: &MoveTree, token: &str) -> Vec<String> {
        tree.children(token).to_vec()
    }

    #[test]
    fn blank_lines_and_empty_fields_are_skipped() {
        let tree = MoveTree::from_reader("\nd4;;Nf6; \n\n ; \n".as_bytes()).expect("parse");
        assert_eq!(tree.len(), 1);
        assert_eq!(kids(&tree, "d4"), vec!["Nf6".to_string()]);
    }

    #[test]
    fn duplicate_token_last_row_wins() {
        let tree = MoveTree::from_reader("d4;Nf6\ne4;e5\nd4;d5\n".as_bytes()).expect("parse");
        assert_eq!(kids(&tree, "d4"), vec!["d5".to_string()]);
        // the key keeps its first position in iteration order
        let order: Vec<&str> = tree.tokens().collect();
        assert_eq!(order, vec!["d4", "e4"]);
    }

    #[test]
    fn unknown_token_is_a_leaf() {
        let tree = MoveTree::new();
        assert!(tree.children("d4").is_empty());
    }
}
