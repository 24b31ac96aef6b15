/// Dense ordinal identifier a record receives at insertion time.
pub type DocId = u32;

/// Growable in-memory record store. A record's id is its position in the
/// sequence: ids are dense integers in `[0, len)` assigned at insertion,
/// and removing a record shifts every later id down by one. Anything
/// derived from ids (the inverted index) must therefore be rebuilt after
/// a removal; `SearchEngine` takes care of that invalidation.
#[derive(Debug)]
pub struct DocumentStore<R> {
    records: Vec<R>,
}

impl<R> DocumentStore<R> {
    pub fn new() -> Self {
        DocumentStore { records: Vec::new() }
    }

    /// Append a record and return its id. Amortized O(1).
    pub fn insert(&mut self, record: R) -> DocId {
        self.records.push(record);
        (self.records.len() - 1) as DocId
    }

    /// Remove the record at `id`, shifting later records down. Returns
    /// false for an out-of-range id. O(n) compaction.
    pub fn remove(&mut self, id: DocId) -> bool {
        let idx = id as usize;
        if idx >= self.records.len() {
            return false;
        }
        self.records.remove(idx);
        true
    }

    /// Fetch a record by id. Out-of-range ids (a user typo, a stale
    /// report) yield None rather than a panic.
    pub fn get(&self, id: DocId) -> Option<&R> {
        self.records.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in id order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &R)> {
        self.records.iter().enumerate().map(|(i, r)| (i as DocId, r))
    }
}

impl<R> Default for DocumentStore<R> {
    fn default() -> Self {
        DocumentStore::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Resume;

    #[test]
    fn insert_assigns_dense_ids() {
        let mut store = DocumentStore::new();
        assert_eq!(store.insert(Resume::new(10, "SQL")), 0);
        assert_eq!(store.insert(Resume::new(11, "Java")), 1);
        assert_eq!(store.insert(Resume::new(12, "Git")), 2);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn remove_shifts_later_ids_down() {
        let mut store = DocumentStore::new();
        store.insert(Resume::new(10, "SQL"));
        store.insert(Resume::new(11, "Java"));
        store.insert(Resume::new(12, "Git"));

        assert!(store.remove(1));
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).map(|r| r.id), Some(12));
    }

    #[test]
    fn out_of_range_access_is_benign() {
        let mut store: DocumentStore<Resume> = DocumentStore::new();
        assert!(!store.remove(0));
        assert!(store.get(99).is_none());
        store.insert(Resume::new(1, "SQL"));
        assert!(!store.remove(5));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn iter_walks_in_id_order() {
        let mut store = DocumentStore::new();
        store.insert(Resume::new(10, "SQL"));
        store.insert(Resume::new(11, "Java"));
        let ids: Vec<DocId> = store.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 1]);
    }
}
