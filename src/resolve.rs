use crate::san::{self, MoveVerdict};
use crate::tree::MoveTree;
use cozy_chess::Board;
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;

/// Token -> FEN, in first-discovery order. Insertion is first-wins: a token
/// reached again through another root or branch keeps its first position.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PositionMap {
    fens: HashMap<String, String>,
    order: Vec<String>,
}

impl PositionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a token's position unless one was already recorded.
    /// Returns whether the entry was inserted.
    pub fn insert_if_absent(&mut self, token: &str, fen: String) -> bool {
        if self.fens.contains_key(token) {
            return false;
        }
        self.fens.insert(token.to_string(), fen);
        self.order.push(token.to_string());
        true
    }

    /// Merge one root's discoveries, in their discovery order, first-wins.
    pub fn absorb(&mut self, discovered: Vec<(String, String)>) {
        for (token, fen) in discovered {
            self.insert_if_absent(&token, fen);
        }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.fens.get(token).map(String::as_str)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.fens.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// (token, fen) pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.order.iter().map(|t| (t.as_str(), self.fens[t].as_str()))
    }
}

/// Depth-first traversal of one root candidate, starting from the standard
/// initial position. Returns (token, fen) pairs in discovery order, where
/// each FEN is the position after the token's move has been played.
///
/// The stack is explicit LIFO and children are pushed in listed order, so
/// siblings come out in reverse listed order; the gallery consumer re-sorts
/// from the move tree, not from discovery order. A child that is not a legal
/// move in its parent's position prunes its entire subtree silently, and so
/// does a child that already appears on its own ancestor chain: a move list
/// that names a cycle would otherwise replay it forever.
pub fn resolve_root(tree: &MoveTree, root: &str) -> Vec<(String, String)> {
    let mut discovered = Vec::new();
    let mut stack: Vec<(Board, String, Vec<String>)> = Vec::new();
    let start = Board::default();
    match san::classify(&start, root) {
        MoveVerdict::Legal(mv) => {
            let mut board = start;
            board.play_unchecked(mv);
            stack.push((board, root.to_string(), vec![root.to_string()]));
        }
        verdict => debug!("root '{root}' skipped: {verdict:?} from the initial position"),
    }
    while let Some((board, token, path)) = stack.pop() {
        discovered.push((token.clone(), board.to_string()));
        for child in tree.children(&token) {
            if path.iter().any(|seen| seen == child) {
                debug!("pruned '{child}' under '{token}': repeats on this branch");
                continue;
            }
            match san::classify(&board, child) {
                MoveVerdict::Legal(mv) => {
                    let mut next = board.clone();
                    next.play_unchecked(mv);
                    let mut next_path = path.clone();
                    next_path.push(child.clone());
                    stack.push((next, child.clone(), next_path));
                }
                verdict => debug!("pruned '{child}' under '{token}': {verdict:?} in {board}"),
            }
        }
    }
    discovered
}

/// Resolve every tree key as an independent root, in listed order.
pub fn resolve(tree: &MoveTree) -> PositionMap {
    let mut positions = PositionMap::new();
    for root in tree.tokens() {
        positions.absorb(resolve_root(tree, root));
    }
    positions
}

/// Parallel variant: roots share no state, so each traversal runs on the
/// current rayon pool; per-root results are merged sequentially in listed
/// root order, which reproduces the sequential result exactly.
pub fn resolve_parallel(tree: &MoveTree) -> PositionMap {
    let roots: Vec<&str> = tree.tokens().collect();
    let per_root: Vec<Vec<(String, String)>> = roots
        .par_iter()
        .map(|root| resolve_root(tree, root))
        .collect();
    let mut positions = PositionMap::new();
    for discovered in per_root {
        positions.absorb(discovered);
    }
    positions
}
