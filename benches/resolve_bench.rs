use criterion::{black_box, criterion_group, criterion_main, Criterion};
use movetree::resolve::resolve;
use movetree::tree::MoveTree;

// King's Indian main line; every token is unique so the chain stays a tree.
fn kings_indian_tree() -> MoveTree {
    let line = [
        "d4", "Nf6", "c4", "g6", "Nc3", "Bg7", "e4", "d6", "Nf3", "e5", "Be2", "Nc6", "d5", "Ne7",
    ];
    let mut rows = String::new();
    for pair in line.windows(2) {
        rows.push_str(&format!("{};{}\n", pair[0], pair[1]));
    }
    MoveTree::from_reader(rows.as_bytes()).expect("well-formed move list")
}

fn bench_resolve(c: &mut Criterion) {
    let tree = kings_indian_tree();
    c.bench_function("resolve_kings_indian_line", |b| {
        b.iter(|| resolve(black_box(&tree)))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
