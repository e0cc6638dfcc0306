// Data loader capability
//
// Encoders never fetch data themselves. They name their data sources and the
// lifecycle asks a `DataLoader` for each one, so the same encoder runs
// against bundled files, a test fixture or any other transport.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use hashbrown::HashMap;

/// A loaded data document: an opaque JSON value.
pub type Document = serde_json::Value;

/// Future returned by [`DataLoader::load`].
pub type LoadFuture<'a> = Pin<Box<dyn Future<Output = Result<Document, LoadError>> + 'a>>;

/// Error produced while fetching a data document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("data source not found: {0}")]
    NotFound(String),

    #[error("failed to read data source {name}: {error}")]
    Io {
        name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("data source {name} is not valid JSON: {error}")]
    Parse {
        name: String,
        #[source]
        error: serde_json::Error,
    },
}

/// Fetches named data documents.
///
/// Loading is asynchronous; implementations run on a single-threaded
/// runtime and need not be `Send`.
pub trait DataLoader {
    fn load<'a>(&'a self, source: &'a str) -> LoadFuture<'a>;
}

// ---------------------------------------------------------------------------
// InMemoryLoader
// ---------------------------------------------------------------------------

/// A loader serving documents held in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryLoader {
    documents: HashMap<String, Document>,
}

impl InMemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add a document under a source name.
    pub fn with(mut self, source: impl Into<String>, document: Document) -> Self {
        self.insert(source, document);
        self
    }

    pub fn insert(&mut self, source: impl Into<String>, document: Document) {
        self.documents.insert(source.into(), document);
    }
}

impl DataLoader for InMemoryLoader {
    fn load<'a>(&'a self, source: &'a str) -> LoadFuture<'a> {
        Box::pin(async move {
            self.documents
                .get(source)
                .cloned()
                .ok_or_else(|| LoadError::NotFound(source.to_string()))
        })
    }
}

// ---------------------------------------------------------------------------
// FileLoader
// ---------------------------------------------------------------------------

/// A loader reading `<root>/<source>.json` files.
#[derive(Debug, Clone)]
pub struct FileLoader {
    root: PathBuf,
}

impl FileLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing a data source.
    pub fn path_for(&self, source: &str) -> PathBuf {
        self.root.join(format!("{source}.json"))
    }
}

impl DataLoader for FileLoader {
    fn load<'a>(&'a self, source: &'a str) -> LoadFuture<'a> {
        Box::pin(async move {
            let path = self.path_for(source);
            let text = match tokio::fs::read_to_string(&path).await {
                Ok(text) => text,
                Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                    return Err(LoadError::NotFound(path.display().to_string()));
                }
                Err(error) => {
                    return Err(LoadError::Io {
                        name: source.to_string(),
                        error,
                    });
                }
            };
            log::debug!("loaded data source {source} from {}", path.display());
            serde_json::from_str(&text).map_err(|error| LoadError::Parse {
                name: source.to_string(),
                error,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn in_memory_serves_documents() {
        let loader = InMemoryLoader::new().with("cockney", json!({"stairs": []}));
        let doc = loader.load("cockney").await.unwrap();
        assert_eq!(doc, json!({"stairs": []}));
    }

    #[tokio::test]
    async fn in_memory_missing_source() {
        let loader = InMemoryLoader::new();
        let err = loader.load("eng-kana").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound(ref name) if name == "eng-kana"));
    }

    #[tokio::test]
    async fn file_loader_missing_file() {
        let loader = FileLoader::new("/nonexistent/glyphswap/data");
        let err = loader.load("eng-kana").await.unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn file_loader_paths() {
        let loader = FileLoader::new("/data");
        assert_eq!(loader.path_for("word-to-ipa"), PathBuf::from("/data/word-to-ipa.json"));
        assert_eq!(loader.root(), Path::new("/data"));
    }
}
