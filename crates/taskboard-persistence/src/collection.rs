//! Document collections on top of key-value storage.
//!
//! A collection is a JSON array stored under one key. Reads deserialize the
//! array; every write serializes the entire array back, so writes cost
//! O(collection size).

use crate::traits::{Document, KeyValueStorage};
use taskboard_core::{make_id, TaskboardError, TaskboardResult};

pub struct CollectionStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> CollectionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// True once the collection has been written at least once, even if it
    /// is empty now.
    pub async fn exists(&self, collection: &str) -> TaskboardResult<bool> {
        self.storage.contains_key(collection).await
    }

    pub async fn list<D: Document>(&self, collection: &str) -> TaskboardResult<Vec<D>> {
        match self.storage.get_item(collection).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(Vec::new()),
        }
    }

    pub async fn get<D: Document>(&self, collection: &str, id: &str) -> TaskboardResult<D> {
        self.list::<D>(collection)
            .await?
            .into_iter()
            .find(|doc| doc.doc_id() == Some(id))
            .ok_or_else(|| not_found(collection, id))
    }

    /// Update-only: fails with `NotFound` when the document's id is not
    /// already present.
    pub async fn put<D: Document>(&self, collection: &str, doc: D) -> TaskboardResult<D> {
        let id = doc
            .doc_id()
            .ok_or_else(|| not_found(collection, "<no id>"))?
            .to_string();
        let mut docs = self.list::<D>(collection).await?;
        let slot = docs
            .iter_mut()
            .find(|d| d.doc_id() == Some(id.as_str()))
            .ok_or_else(|| not_found(collection, &id))?;
        *slot = doc.clone();
        self.write_all(collection, &docs).await?;
        Ok(doc)
    }

    /// Assigns a fresh id that collides with no existing document and
    /// appends.
    pub async fn post<D: Document>(&self, collection: &str, mut doc: D) -> TaskboardResult<D> {
        let mut docs = self.list::<D>(collection).await?;
        let id = loop {
            let candidate = make_id();
            if !docs.iter().any(|d| d.doc_id() == Some(candidate.as_str())) {
                break candidate;
            }
        };
        doc.set_doc_id(id);
        docs.push(doc.clone());
        self.write_all(collection, &docs).await?;
        Ok(doc)
    }

    pub async fn remove<D: Document>(&self, collection: &str, id: &str) -> TaskboardResult<()> {
        let mut docs = self.list::<D>(collection).await?;
        let index = docs
            .iter()
            .position(|d| d.doc_id() == Some(id))
            .ok_or_else(|| not_found(collection, id))?;
        docs.remove(index);
        self.write_all(collection, &docs).await
    }

    /// Replaces the whole collection.
    pub async fn write_all<D: Document>(&self, collection: &str, docs: &[D]) -> TaskboardResult<()> {
        let value = serde_json::to_value(docs)?;
        self.storage.set_item(collection, value).await?;
        tracing::debug!("Wrote {} documents to {}", docs.len(), collection);
        Ok(())
    }
}

fn not_found(collection: &str, id: &str) -> TaskboardError {
    TaskboardError::NotFound(format!("entity {} in {}", id, collection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStorage;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        text: String,
    }

    impl Document for Note {
        fn doc_id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn set_doc_id(&mut self, id: String) {
            self.id = Some(id);
        }
    }

    fn note(text: &str) -> Note {
        Note {
            id: None,
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_post_assigns_ids_and_appends() {
        let store = CollectionStore::new(MemoryStorage::new());
        let a = store.post("notes", note("a")).await.unwrap();
        let b = store.post("notes", note("b")).await.unwrap();
        assert!(a.id.is_some());
        assert_ne!(a.id, b.id);

        let all: Vec<Note> = store.list("notes").await.unwrap();
        assert_eq!(all, vec![a, b]);
    }

    #[tokio::test]
    async fn test_put_is_update_only() {
        let store = CollectionStore::new(MemoryStorage::new());
        let mut saved = store.post("notes", note("a")).await.unwrap();
        saved.text = "edited".to_string();
        store.put("notes", saved.clone()).await.unwrap();

        let fetched: Note = store.get("notes", saved.id.as_deref().unwrap()).await.unwrap();
        assert_eq!(fetched.text, "edited");

        let stranger = Note {
            id: Some("nope".to_string()),
            text: "x".to_string(),
        };
        assert!(store.put("notes", stranger).await.unwrap_err().is_not_found());
        assert!(store.put("notes", note("no id")).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_remove_and_missing_ids() {
        let store = CollectionStore::new(MemoryStorage::new());
        let saved = store.post("notes", note("a")).await.unwrap();
        let id = saved.id.unwrap();

        store.remove::<Note>("notes", &id).await.unwrap();
        assert!(store.get::<Note>("notes", &id).await.unwrap_err().is_not_found());
        assert!(store.remove::<Note>("notes", &id).await.unwrap_err().is_not_found());

        // The collection still exists, just empty.
        assert!(store.exists("notes").await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_collection_lists_empty() {
        let store = CollectionStore::new(MemoryStorage::new());
        let all: Vec<Note> = store.list("notes").await.unwrap();
        assert!(all.is_empty());
        assert!(!store.exists("notes").await.unwrap());
    }
}
