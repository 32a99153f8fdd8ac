//! A fixed-bucket hash set of pids.
//!
//! Values are spread over `bucket_count` chains by `value % bucket_count`.
//! There is no rehashing: callers size the set for the cardinality they
//! expect (all live processes, or the handful of matches of one query) when
//! they create it.

use crate::types::IntSetError;

/// Bucket count suited to a set holding every live process on a system.
pub const SYSTEM_BUCKETS: usize = 1000;

/// Bucket count suited to the result of one descendant query.
pub const MATCH_BUCKETS: usize = 100;

/// Set of non-negative integers with separate chaining.
///
/// Each bucket is an ordered chain; new values go to the tail, so
/// [`values`](IntSet::values) yields buckets in ascending index order and
/// each chain in insertion order.
#[derive(Debug, Clone)]
pub struct IntSet {
    buckets: Vec<Vec<i32>>,
    len: usize,
}

impl IntSet {
    /// Creates an empty set with `bucket_count` chains.
    pub fn with_buckets(bucket_count: usize) -> Result<Self, IntSetError> {
        if bucket_count == 0 {
            return Err(IntSetError::InvalidBucketCount(bucket_count));
        }

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.resize_with(bucket_count, Vec::new);

        Ok(Self { buckets, len: 0 })
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of values currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // Negative values have no bucket.
    fn bucket_of(&self, value: i32) -> Option<usize> {
        usize::try_from(value)
            .ok()
            .map(|v| v % self.buckets.len())
    }

    pub fn contains(&self, value: i32) -> bool {
        match self.bucket_of(value) {
            Some(idx) => self.buckets[idx].contains(&value),
            None => false,
        }
    }

    /// Adds `value`, returning `Ok(false)` if it was already present.
    ///
    /// Fails for negative values, and if the chain cannot grow.
    pub fn add(&mut self, value: i32) -> Result<bool, IntSetError> {
        let idx = self
            .bucket_of(value)
            .ok_or(IntSetError::NegativeValue(value))?;
        let chain = &mut self.buckets[idx];

        if chain.contains(&value) {
            return Ok(false);
        }

        chain.try_reserve(1)?;
        chain.push(value);
        self.len += 1;
        Ok(true)
    }

    /// Removes `value`, returning whether it was present.
    ///
    /// The rest of the chain keeps its order.
    pub fn remove(&mut self, value: i32) -> bool {
        let Some(idx) = self.bucket_of(value) else {
            return false;
        };
        let chain = &mut self.buckets[idx];

        match chain.iter().position(|&v| v == value) {
            Some(pos) => {
                chain.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Copies every stored value out, in bucket-then-chain order.
    pub fn values(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len);
        for chain in &self.buckets {
            out.extend_from_slice(chain);
        }
        out
    }

    /// Returns a cursor positioned before the first value.
    ///
    /// The cursor borrows the set, so the set cannot be mutated while a
    /// cursor over it is alive.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor {
            set: self,
            bucket: 0,
            pos: 0,
            yielded: 0,
        }
    }

    pub fn iter(&self) -> Cursor<'_> {
        self.cursor()
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = i32;
    type IntoIter = Cursor<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

/// Outcome of one [`Cursor::next_step`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A value, with more to follow.
    More(i32),
    /// The final value of the set.
    Last(i32),
    /// Nothing left (or the set is empty).
    PastEnd,
}

/// Restartable cursor over an [`IntSet`].
///
/// Tracks a bucket index and a position inside that bucket's chain, and
/// visits values in the same order as [`IntSet::values`].
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    set: &'a IntSet,
    bucket: usize,
    pos: usize,
    yielded: usize,
}

impl Cursor<'_> {
    /// Rewinds to before the first value.
    pub fn reset(&mut self) {
        self.bucket = 0;
        self.pos = 0;
        self.yielded = 0;
    }

    /// Advances to the next value.
    pub fn next_step(&mut self) -> Step {
        let buckets = &self.set.buckets;

        while self.bucket < buckets.len() {
            let chain = &buckets[self.bucket];
            if let Some(&value) = chain.get(self.pos) {
                self.pos += 1;
                self.yielded += 1;
                return if self.yielded == self.set.len {
                    Step::Last(value)
                } else {
                    Step::More(value)
                };
            }
            self.bucket += 1;
            self.pos = 0;
        }

        Step::PastEnd
    }
}

impl Iterator for Cursor<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        match self.next_step() {
            Step::More(value) | Step::Last(value) => Some(value),
            Step::PastEnd => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.set.len - self.yielded;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Cursor<'_> {}
