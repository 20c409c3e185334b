//! Builds a small tree, prints some statistics about it, draws it and then
//! deletes keys from it.

use bst_render::{InsertOutcome, Tree};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Build, draw and prune an unbalanced binary search tree
#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Key the tree is seeded with
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    root: i64,

    /// Keys inserted after the root, in order
    #[arg(long, value_delimiter = ',', default_value = "10,15,3,4", allow_negative_numbers = true)]
    keys: Vec<i64>,

    /// Keys deleted after the tree is drawn
    #[arg(long, value_delimiter = ',', default_value = "10", allow_negative_numbers = true)]
    delete: Vec<i64>,

    /// Increase log verbosity (-d, -d -d, -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut tree = Tree::new(cli.root);
    for key in &cli.keys {
        if tree.insert(*key) == InsertOutcome::AlreadyPresent {
            println!("{} is already present", key);
        }
    }

    if let Some(root) = tree.root() {
        println!("{}", root);
        for child in root.left().into_iter().chain(root.right()) {
            println!("{}", child);
        }
    }
    println!("Number of elements in the tree: {}", tree.size());

    println!("Tree:");
    println!("{}", tree);

    for key in &cli.delete {
        tree.delete(key);
    }
    println!("Number of elements after deletion: {}", tree.size());
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
