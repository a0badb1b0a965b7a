use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use movetree::export::{build_manifest, write_outputs};
use movetree::resolve::{resolve_parallel, resolve_root, PositionMap};
use movetree::tree::MoveTree;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "movetree",
    about = "Resolve a branching chess move list into per-position FEN files",
    long_about = None
)]
struct Args {
    /// Semicolon-delimited move list: token;child;child;...
    #[arg(value_name = "MOVES")]
    input: PathBuf,

    /// Output directory (defaults to the input file stem)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Worker threads for per-root resolution
    #[arg(long, default_value_t = 1)]
    threads: usize,

    /// Print token/FEN pairs instead of writing files
    #[arg(long, default_value_t = false)]
    no_write: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tree = MoveTree::from_path(&args.input)
        .with_context(|| format!("reading move list {}", args.input.display()))?;
    log::info!("loaded {} move rows from {}", tree.len(), args.input.display());

    let positions = if args.threads > 1 {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build()
            .context("building thread pool")?;
        pool.install(|| resolve_parallel(&tree))
    } else {
        let pb = ProgressBar::new(tree.len() as u64);
        let mut positions = PositionMap::new();
        for root in tree.tokens() {
            positions.absorb(resolve_root(&tree, root));
            pb.inc(1);
        }
        pb.finish_and_clear();
        positions
    };
    println!("resolved {} positions from {} rows", positions.len(), tree.len());

    if args.no_write {
        for (token, fen) in positions.iter() {
            println!("{token}: {fen}");
        }
        return Ok(());
    }

    let out_dir = args.out.unwrap_or_else(|| {
        PathBuf::from(
            args.input
                .file_stem()
                .map(|s| s.to_os_string())
                .unwrap_or_else(|| "positions".into()),
        )
    });
    let manifest = build_manifest(&tree, &positions);
    write_outputs(&out_dir, &manifest)
        .with_context(|| format!("writing outputs to {}", out_dir.display()))?;
    println!(
        "wrote {} positions and manifest.json to {}",
        manifest.entries.len(),
        out_dir.display()
    );
    Ok(())
}
