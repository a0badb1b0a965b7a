use cozy_chess::{Board, File, GameStatus, Move, Piece, Rank};

/// Outcome of asking whether a token names a move in a given position.
///
/// This is a verdict, not an error: the resolver prunes on `Illegal` and
/// `Unparseable` without surfacing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveVerdict {
    Legal(Move),
    Illegal,
    Unparseable,
}

/// Classify a token against a position.
///
/// The token is matched against the SAN of every legal move (check/mate and
/// annotation suffixes ignored, `0-0` spellings accepted), then against the
/// engine's UCI rendering. A SAN- or UCI-shaped token that matches nothing
/// is `Illegal`; anything else is `Unparseable`. Ambiguous SAN (e.g. `Ne2`
/// where two knights reach e2) matches no canonical form and is `Illegal`.
pub fn classify(board: &Board, token: &str) -> MoveVerdict {
    let wanted = normalize(token);
    if wanted.is_empty() {
        return MoveVerdict::Unparseable;
    }
    let legal = legal_moves(board);
    for &mv in &legal {
        if san_core(board, &legal, mv) == wanted {
            return MoveVerdict::Legal(mv);
        }
    }
    // UCI fallback; note cozy-chess renders castling as king-takes-rook (e1h1)
    for &mv in &legal {
        if mv.to_string() == wanted {
            return MoveVerdict::Legal(mv);
        }
    }
    if is_san_shaped(&wanted) || is_uci_shaped(&wanted) {
        MoveVerdict::Illegal
    } else {
        MoveVerdict::Unparseable
    }
}

/// Canonical SAN for a legal move, including `+`/`#` suffix.
pub fn to_san(board: &Board, mv: Move) -> String {
    let legal = legal_moves(board);
    format!("{}{}", san_core(board, &legal, mv), suffix(board, mv))
}

pub fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    board.generate_moves(|ml| {
        for m in ml {
            moves.push(m);
        }
        false
    });
    moves
}

/// SAN without the check/mate suffix. `legal` must be the move list of
/// `board`; it drives capture and disambiguation decisions.
fn san_core(board: &Board, legal: &[Move], mv: Move) -> String {
    let stm = board.side_to_move();
    // Castling is encoded king-onto-own-rook
    if board.color_on(mv.to) == Some(stm) {
        return if (mv.to.file() as u8) > (mv.from.file() as u8) {
            "O-O".to_string()
        } else {
            "O-O-O".to_string()
        };
    }
    let piece = match board.piece_on(mv.from) {
        Some(p) => p,
        None => return String::new(),
    };
    let mut san = String::new();
    if piece == Piece::Pawn {
        if mv.from.file() != mv.to.file() {
            // covers en passant: a diagonal pawn move is always a capture
            san.push(file_char(mv.from.file()));
            san.push('x');
        }
        san.push_str(&mv.to.to_string());
        if let Some(promo) = mv.promotion {
            san.push('=');
            san.push(piece_char(promo));
        }
        return san;
    }
    san.push(piece_char(piece));
    let mut ambiguous = false;
    let mut from_file_clash = false;
    let mut from_rank_clash = false;
    for &other in legal {
        if other == mv || other.to != mv.to || other.from == mv.from {
            continue;
        }
        if board.piece_on(other.from) != Some(piece) {
            continue;
        }
        if board.color_on(other.to) == Some(stm) {
            continue;
        }
        ambiguous = true;
        if other.from.file() == mv.from.file() {
            from_file_clash = true;
        }
        if other.from.rank() == mv.from.rank() {
            from_rank_clash = true;
        }
    }
    if ambiguous {
        if !from_file_clash {
            san.push(file_char(mv.from.file()));
        } else if !from_rank_clash {
            san.push(rank_char(mv.from.rank()));
        } else {
            san.push(file_char(mv.from.file()));
            san.push(rank_char(mv.from.rank()));
        }
    }
    if board.piece_on(mv.to).is_some() {
        san.push('x');
    }
    san.push_str(&mv.to.to_string());
    san
}

fn suffix(board: &Board, mv: Move) -> &'static str {
    let mut next = board.clone();
    next.play_unchecked(mv);
    if next.checkers().is_empty() {
        ""
    } else if next.status() == GameStatus::Won {
        "#"
    } else {
        "+"
    }
}

fn normalize(token: &str) -> String {
    let t = token
        .trim()
        .trim_end_matches(|c| matches!(c, '+' | '#' | '!' | '?'));
    match t {
        "0-0" | "o-o" => "O-O".to_string(),
        "0-0-0" | "o-o-o" => "O-O-O".to_string(),
        _ => t.to_string(),
    }
}

fn is_file(c: char) -> bool {
    ('a'..='h').contains(&c)
}

fn is_rank(c: char) -> bool {
    ('1'..='8').contains(&c)
}

// [KQRBN]? [a-h]? [1-8]? x? [a-h][1-8] (=[QRBN])? | O-O | O-O-O
fn is_san_shaped(t: &str) -> bool {
    if t == "O-O" || t == "O-O-O" {
        return true;
    }
    let mut body: Vec<char> = t.chars().collect();
    if matches!(body.first(), Some('K' | 'Q' | 'R' | 'B' | 'N')) {
        body.remove(0);
    }
    if body.len() >= 2
        && body[body.len() - 2] == '='
        && matches!(body[body.len() - 1], 'Q' | 'R' | 'B' | 'N')
    {
        body.truncate(body.len() - 2);
    }
    let n = body.len();
    if n < 2 || !is_file(body[n - 2]) || !is_rank(body[n - 1]) {
        return false;
    }
    let mut prefix = &body[..n - 2];
    if let Some((&'x', rest)) = prefix.split_last() {
        prefix = rest;
    }
    match prefix {
        [] => true,
        [c] => is_file(*c) || is_rank(*c),
        [f, r] => is_file(*f) && is_rank(*r),
        _ => false,
    }
}

fn is_uci_shaped(t: &str) -> bool {
    let b: Vec<char> = t.chars().collect();
    if b.len() != 4 && b.len() != 5 {
        return false;
    }
    if !(is_file(b[0]) && is_rank(b[1]) && is_file(b[2]) && is_rank(b[3])) {
        return false;
    }
    b.len() == 4 || matches!(b[4], 'q' | 'r' | 'b' | 'n')
}

fn file_char(f: File) -> char {
    (b'a' + f as u8) as char
}

fn rank_char(r: Rank) -> char {
    (b'1' + r as u8) as char
}

fn piece_char(p: Piece) -> char {
    match p {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}
