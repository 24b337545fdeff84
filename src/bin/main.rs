//! Demo: scroll an article and watch the bar at the top track it.
//! Run with: cargo run -- [path/to/article.txt]

use reading_progress::article::{self, Article};
use std::path::PathBuf;

fn main() {
    let article = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match article::load_article(&path) {
            Ok(article) => article,
            Err(err) => {
                eprintln!("{err}; falling back to the built-in article");
                Article::default()
            }
        },
        None => Article::default(),
    };

    reading_progress::app(article).run();
}
