//! Single-entry memoization keyed by input identity.
//!
//! Derived collections (rows, column schema) are recomputed only when one of
//! their inputs changes. Shared inputs (`Arc`) compare by pointer, plain
//! flags by value. The cache keeps its key alive, so a pointer can never be
//! reused by a different allocation while it is cached.

use std::sync::Arc;

/// Identity comparison for memo keys
pub trait SameInput {
    fn same_input(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SameInput for Arc<T> {
    fn same_input(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(self), Arc::as_ptr(other))
    }
}

impl<T: SameInput> SameInput for Option<T> {
    fn same_input(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.same_input(b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl SameInput for bool {
    fn same_input(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! impl_same_input_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: SameInput),+> SameInput for ($($name,)+) {
            fn same_input(&self, other: &Self) -> bool {
                $(self.$idx.same_input(&other.$idx))&&+
            }
        }
    };
}

impl_same_input_tuple!(A: 0, B: 1);
impl_same_input_tuple!(A: 0, B: 1, C: 2);
impl_same_input_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_same_input_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);

/// Remembers the last computed value and the inputs it came from.
pub struct MemoizeOne<K, V> {
    last: Option<(K, Arc<V>)>,
}

impl<K: SameInput, V> MemoizeOne<K, V> {
    pub fn new() -> Self {
        Self { last: None }
    }

    /// Return the cached value if `key` is identical to the last key,
    /// otherwise compute, cache and return a fresh one.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> Arc<V> {
        if let Some((last_key, value)) = &self.last {
            if last_key.same_input(&key) {
                return Arc::clone(value);
            }
        }
        let value = Arc::new(compute(&key));
        self.last = Some((key, Arc::clone(&value)));
        value
    }
}

impl<K: SameInput, V> Default for MemoizeOne<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_arc_hits_cache() {
        let mut memo: MemoizeOne<(Arc<Vec<u32>>, bool), usize> = MemoizeOne::new();
        let input = Arc::new(vec![1, 2, 3]);
        let mut calls = 0;

        let first = memo.get_or_compute((Arc::clone(&input), false), |(v, _)| {
            calls += 1;
            v.len()
        });
        let second = memo.get_or_compute((Arc::clone(&input), false), |(v, _)| {
            calls += 1;
            v.len()
        });

        assert_eq!(calls, 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_equal_but_distinct_arc_recomputes() {
        let mut memo: MemoizeOne<Arc<Vec<u32>>, usize> = MemoizeOne::new();
        let a = memo.get_or_compute(Arc::new(vec![1]), |v| v.len());
        let b = memo.get_or_compute(Arc::new(vec![1]), |v| v.len());
        assert!(!Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_flag_change_recomputes() {
        let mut memo: MemoizeOne<bool, bool> = MemoizeOne::new();
        assert!(!*memo.get_or_compute(false, |f| *f));
        assert!(*memo.get_or_compute(true, |f| *f));
    }

    #[test]
    fn test_option_identity() {
        let shared = Arc::new(5);
        assert!(Some(Arc::clone(&shared)).same_input(&Some(Arc::clone(&shared))));
        assert!(None::<Arc<i32>>.same_input(&None));
        assert!(!Some(shared).same_input(&None));
    }

    #[test]
    fn test_trait_object_identity_ignores_vtable() {
        let value: Arc<dyn std::fmt::Debug + Send + Sync> = Arc::new(1u8);
        let alias = Arc::clone(&value);
        assert!(value.same_input(&alias));
    }
}
