//! Article text for the demo page.
//!
//! The demo can load a plain-text article from disk (first non-empty line
//! is the title) or fall back to a built-in sample.

use bevy::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The text shown in the scrollable page.
#[derive(Resource, Debug, Clone)]
pub struct Article {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum ArticleError {
    #[error("failed to read article file: {0}")]
    Io(#[from] std::io::Error),
    #[error("article file has no content: {0}")]
    Empty(PathBuf),
}

/// Load an article from a plain-text file. The first non-empty line becomes
/// the title, everything after it the body.
pub fn load_article(path: &Path) -> Result<Article, ArticleError> {
    let text = std::fs::read_to_string(path)?;

    let mut lines = text.lines().skip_while(|line| line.trim().is_empty());
    let title = match lines.next() {
        Some(line) if !line.trim().is_empty() => line.trim().to_string(),
        _ => return Err(ArticleError::Empty(path.to_path_buf())),
    };
    let body = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    if body.is_empty() {
        return Err(ArticleError::Empty(path.to_path_buf()));
    }

    info!("Loaded article '{}' from {}", title, path.display());
    Ok(Article { title, body })
}

impl Default for Article {
    fn default() -> Self {
        Self {
            title: "Reading progress, measured honestly".to_string(),
            body: sample_body(),
        }
    }
}

fn sample_body() -> String {
    let paragraph = "A progress bar over an article makes one promise: the \
filled portion matches how far through the scrollable range the reader has \
come. The range is the header plus the content minus the window, and the \
tricky cases are the boring ones. A page shorter than the window has \
nothing to scroll through, so the bar stays empty instead of dividing by \
zero. An over-scrolled rubber-band offset pins the bar at full rather than \
past it. Everything else is re-measuring on every tick and never trusting \
a cached height.";

    // Enough copies to guarantee the page scrolls at any window size.
    std::iter::repeat_n(paragraph, 24)
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_title_and_body() {
        let mut file = tempfile_with("\n\nMy Post\nfirst paragraph\nsecond\n");
        let article = load_article(file.path()).unwrap();
        assert_eq!(article.title, "My Post");
        assert_eq!(article.body, "first paragraph\nsecond");
        file.close();
    }

    #[test]
    fn empty_file_is_an_error() {
        let mut file = tempfile_with("   \n\n");
        assert!(matches!(
            load_article(file.path()),
            Err(ArticleError::Empty(_))
        ));
        file.close();
    }

    #[test]
    fn title_without_body_is_an_error() {
        let mut file = tempfile_with("Just a title\n");
        assert!(matches!(
            load_article(file.path()),
            Err(ArticleError::Empty(_))
        ));
        file.close();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let missing = Path::new("/nonexistent/article.txt");
        assert!(matches!(load_article(missing), Err(ArticleError::Io(_))));
    }

    #[test]
    fn default_article_is_long_enough_to_scroll() {
        let article = Article::default();
        assert!(article.body.len() > 4000);
    }

    struct TempArticle {
        path: PathBuf,
    }

    impl TempArticle {
        fn path(&self) -> &Path {
            &self.path
        }

        fn close(&mut self) {
            let _ = std::fs::remove_file(&self.path);
        }
    }

    fn tempfile_with(contents: &str) -> TempArticle {
        let path = std::env::temp_dir().join(format!(
            "reading-progress-test-{}-{:?}.txt",
            std::process::id(),
            std::thread::current().id()
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        TempArticle { path }
    }
}
