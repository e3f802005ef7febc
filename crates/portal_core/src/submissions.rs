use std::collections::HashSet;

use shared::{
    domain::{NewSubmission, SectorSubmission, SubmissionId},
    PortalError, PortalResult,
};
use storage::{KeyValueStore, SUBMISSIONS_KEY};

/// Append-only, insertion-ordered list of sector submissions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStore {
    items: Vec<SectorSubmission>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the durable list. An absent key is an empty store.
    pub fn load(store: &dyn KeyValueStore) -> PortalResult<Self> {
        let raw = store
            .get_string(SUBMISSIONS_KEY)
            .map_err(|err| PortalError::StorageRead {
                key: SUBMISSIONS_KEY.to_string(),
                message: err.to_string(),
            })?;
        match raw {
            Some(raw) => Self::decode(&raw),
            None => Ok(Self::new()),
        }
    }

    pub fn decode(raw: &str) -> PortalResult<Self> {
        let items: Vec<SectorSubmission> =
            serde_json::from_str(raw).map_err(|err| PortalError::DataCorruption {
                key: SUBMISSIONS_KEY.to_string(),
                message: err.to_string(),
            })?;

        let duplicate = {
            let mut seen = HashSet::with_capacity(items.len());
            let dup = items
                .iter()
                .find(|item| !seen.insert(&item.id))
                .map(|item| item.id.to_string());
            dup
        };
        if let Some(dup) = duplicate {
            return Err(PortalError::DataCorruption {
                key: SUBMISSIONS_KEY.to_string(),
                message: format!("duplicate submission id '{dup}'"),
            });
        }

        Ok(Self { items })
    }

    pub fn encode(&self) -> PortalResult<String> {
        serde_json::to_string(&self.items).map_err(|err| PortalError::StorageWrite {
            key: SUBMISSIONS_KEY.to_string(),
            message: err.to_string(),
        })
    }

    pub fn persist(&self, store: &mut dyn KeyValueStore) -> PortalResult<()> {
        let encoded = self.encode()?;
        store
            .set_string(SUBMISSIONS_KEY, encoded)
            .map_err(|err| PortalError::StorageWrite {
                key: SUBMISSIONS_KEY.to_string(),
                message: err.to_string(),
            })
    }

    /// Appends a record with a fresh id that is unique within the store.
    pub fn append(&mut self, new: NewSubmission, submitted_at: String) -> &SectorSubmission {
        let id = self.fresh_id();
        self.items
            .push(SectorSubmission::from_new(id, submitted_at, new));
        let last = self.items.len() - 1;
        &self.items[last]
    }

    fn fresh_id(&self) -> SubmissionId {
        loop {
            let id = SubmissionId::generate();
            if !self.items.iter().any(|item| item.id == id) {
                return id;
            }
        }
    }

    pub fn as_slice(&self) -> &[SectorSubmission] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectorSubmission> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/submissions_tests.rs"]
mod tests;
