//! Durable home of the bearer token, injected into the session controller.

use anyhow::Result;

use super::LocalStore;

pub trait SessionStore {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, token: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// Token persisted in `state.json`, surviving process restarts.
#[derive(Clone, Debug)]
pub struct FileSessionStore {
    store: LocalStore,
}

impl FileSessionStore {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Result<Option<String>> {
        self.store.get_token()
    }

    fn save(&mut self, token: &str) -> Result<()> {
        self.store.set_token(token)
    }

    fn clear(&mut self) -> Result<()> {
        self.store.clear_token()
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemorySessionStore {
    token: Option<String>,
}

impl MemorySessionStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.token.clone())
    }

    fn save(&mut self, token: &str) -> Result<()> {
        self.token = Some(token.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.token = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_persists_across_instances() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let mut first = FileSessionStore::new(LocalStore::open(dir.path())?);
        assert_eq!(first.load()?, None);
        first.save("t1")?;

        let mut second = FileSessionStore::new(LocalStore::open(dir.path())?);
        assert_eq!(second.load()?.as_deref(), Some("t1"));

        second.clear()?;
        assert_eq!(first.load()?, None);
        Ok(())
    }
}
