//! Case-insensitive byte-keyed map.

use hashbrown::{Equivalent, HashMap};
use std::hash::{Hash, Hasher};

/// Feeds `bytes` to `state` with ASCII letters folded to lowercase.
fn hash_folded<H: Hasher>(bytes: &[u8], state: &mut H) {
    state.write_usize(bytes.len());
    for byte in bytes {
        state.write_u8(byte.to_ascii_lowercase());
    }
}

/// An owned key that hashes and compares with ASCII case folded.
#[derive(Debug, Clone)]
struct FoldedKey(Box<[u8]>);

impl Hash for FoldedKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(&self.0, state);
    }
}

impl PartialEq for FoldedKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for FoldedKey {}

/// A borrowed query matching any [`FoldedKey`] that differs only in ASCII
/// case.
struct FoldedQuery<'a>(&'a [u8]);

impl Hash for FoldedQuery<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_folded(self.0, state);
    }
}

impl Equivalent<FoldedKey> for FoldedQuery<'_> {
    fn equivalent(&self, key: &FoldedKey) -> bool {
        self.0.eq_ignore_ascii_case(&key.0)
    }
}

/// An insertion-ordered map keyed by byte strings compared with ASCII case
/// folding.
///
/// Keys keep the spelling they were inserted with; lookups accept any case
/// variant and never allocate. Once a key is present, later inserts of any
/// case variant of it are rejected rather than replacing the value.
///
/// # Example
///
/// ```rust
/// use encreg_db::CaseInsensitiveBytesMap;
///
/// let mut map = CaseInsensitiveBytesMap::new();
/// assert!(map.insert(b"Shift_JIS", 7));
/// assert_eq!(map.get(b"SHIFT_jis"), Some(&7));
/// assert_eq!(map.get_key_value(b"shift_jis").unwrap().0, b"Shift_JIS");
/// ```
#[derive(Debug, Clone)]
pub struct CaseInsensitiveBytesMap<V> {
    /// Keys and values in insertion order.
    entries: Vec<(Box<[u8]>, V)>,
    /// Folded key to position in `entries`.
    positions: HashMap<FoldedKey, usize>,
}

impl<V> Default for CaseInsensitiveBytesMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<V> CaseInsensitiveBytesMap<V> {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `key` unless a case variant of `key` exists.
    ///
    /// Returns `true` if the value was inserted.
    pub fn insert(&mut self, key: &[u8], value: V) -> bool {
        if self.position(key).is_some() {
            return false;
        }
        self.positions.insert(FoldedKey(key.into()), self.entries.len());
        self.entries.push((key.into(), value));
        true
    }

    /// Returns the value stored under any case variant of `key`.
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        self.get_key_value(key).map(|(_, value)| value)
    }

    /// Returns the stored key spelling and value for `key`.
    pub fn get_key_value(&self, key: &[u8]) -> Option<(&[u8], &V)> {
        self.position(key).map(|position| {
            let (stored, value) = &self.entries[position];
            (stored.as_ref(), value)
        })
    }

    /// Checks whether any case variant of `key` is present.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.position(key).is_some()
    }

    /// Returns the number of keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates keys and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &V)> + '_ {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_ref(), value))
    }

    fn position(&self, key: &[u8]) -> Option<usize> {
        self.positions.get(&FoldedQuery(key)).copied()
    }
}
