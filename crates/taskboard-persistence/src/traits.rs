use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use taskboard_core::TaskboardResult;
use taskboard_domain::Board;

/// Durable key-value storage, the moral equivalent of browser local storage.
/// Values are JSON trees stored whole under a key.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    async fn get_item(&self, key: &str) -> TaskboardResult<Option<serde_json::Value>>;

    /// Replaces the value stored under `key`.
    async fn set_item(&self, key: &str, value: serde_json::Value) -> TaskboardResult<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    async fn remove_item(&self, key: &str) -> TaskboardResult<()>;

    async fn contains_key(&self, key: &str) -> TaskboardResult<bool> {
        Ok(self.get_item(key).await?.is_some())
    }
}

/// A JSON document addressable by id inside a collection.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync {
    fn doc_id(&self) -> Option<&str>;
    fn set_doc_id(&mut self, id: String);
}

impl Document for Board {
    fn doc_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_doc_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[async_trait]
impl<T: KeyValueStorage + ?Sized> KeyValueStorage for &T {
    async fn get_item(&self, key: &str) -> TaskboardResult<Option<serde_json::Value>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: serde_json::Value) -> TaskboardResult<()> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> TaskboardResult<()> {
        (**self).remove_item(key).await
    }
}

#[async_trait]
impl<T: KeyValueStorage + ?Sized> KeyValueStorage for std::sync::Arc<T> {
    async fn get_item(&self, key: &str) -> TaskboardResult<Option<serde_json::Value>> {
        (**self).get_item(key).await
    }

    async fn set_item(&self, key: &str, value: serde_json::Value) -> TaskboardResult<()> {
        (**self).set_item(key, value).await
    }

    async fn remove_item(&self, key: &str) -> TaskboardResult<()> {
        (**self).remove_item(key).await
    }
}
