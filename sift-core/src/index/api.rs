//! Public API for adding and retrieving documents.

use log::{debug, warn};
use sift_types::{DocId, DocumentError, IngestReport};

use crate::corpus::Document;
use crate::index::types::Sift;

impl Sift {
    /// Adds a document to the index.
    ///
    /// The document's text is stored for substring queries and its tokens
    /// are indexed for vocabulary and whole-token queries.
    ///
    /// # Errors
    ///
    /// Returns `DocumentError::DuplicateName` if a document with this name exists.
    /// Returns `DocumentError::TooLarge` if the text would overflow the text arena.
    /// Returns `DocumentError::InvalidInput` if the text contains control characters.
    ///
    /// A rejected document leaves the engine unchanged.
    #[inline(never)]
    pub fn add(&mut self, document: Document) -> Result<DocId, DocumentError> {
        let doc_id = self.corpus.add(&document.name, &document.text)?;
        let indexed = self.index.insert_document(&document.tokens);
        debug_assert_eq!(doc_id, indexed, "corpus and index ids diverged");
        self.documents_added += 1;

        debug!(
            "indexed {:?} as doc {doc_id}: {} bytes, {} tokens",
            document.name,
            document.text.len(),
            document.tokens.len()
        );
        Ok(doc_id)
    }

    /// Analyzes raw text with the default analyzer and adds it.
    ///
    /// # Errors
    ///
    /// See [`Sift::add`].
    pub fn add_text(&mut self, name: &str, raw: &str) -> Result<DocId, DocumentError> {
        self.add(Document::analyze(name, raw))
    }

    /// Adds multiple documents, skipping the ones that are rejected.
    pub fn add_batch<I>(&mut self, documents: I) -> IngestReport
    where
        I: IntoIterator<Item = Document>,
    {
        let mut report = IngestReport::default();

        for document in documents {
            let name = document.name.clone();
            match self.add(document) {
                Ok(_) => report.added += 1,
                Err(e) => {
                    warn!("skipping document {name:?}: {e}");
                    report.failed += 1;
                    report.last_error = Some(e);
                }
            }
        }

        debug!(
            "batch ingestion: {} added, {} failed, {} documents total",
            report.added,
            report.failed,
            self.len()
        );
        report
    }

    /// Retrieves a document's text by its ID.
    #[inline(always)]
    pub fn get(&self, doc_id: DocId) -> Option<&str> {
        self.corpus.text(doc_id)
    }

    /// Retrieves a document's name by its ID.
    #[inline(always)]
    pub fn name(&self, doc_id: DocId) -> Option<&str> {
        self.corpus.name(doc_id)
    }

    /// Looks a document up by name.
    #[inline(always)]
    pub fn id_of(&self, name: &str) -> Option<DocId> {
        self.corpus.id_of(name)
    }
}
