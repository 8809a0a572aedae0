//! HeightIndex - O(log n) prefix sums over display-row heights
//!
//! Each visible node is one row in display order. The index answers "where
//! does row i start" and "which row covers offset y" without walking the
//! whole tree, which is what keeps painting and hit-testing proportional to
//! the visible band.
//!
//! # Complexity
//!
//! - `push`: O(log n)
//! - `set`: O(log n)
//! - `prefix_sum` / `start_of`: O(log n)
//! - `lower_bound`: O(log² n)
//! - `total`: O(log n)

/// Fenwick tree of row heights.
#[derive(Debug, Clone, Default)]
pub struct HeightIndex {
    /// Fenwick backing storage (the `fenwick` crate handles 1-based math).
    tree: Vec<i64>,
    /// Number of rows pushed.
    len: usize,
}

impl HeightIndex {
    /// Create an index with room for `capacity` rows.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tagtree::view_state::height_index::HeightIndex;
    /// let index = HeightIndex::new(100);
    /// assert_eq!(index.len(), 0);
    /// assert_eq!(index.total(), 0);
    /// ```
    pub fn new(capacity: usize) -> Self {
        Self {
            tree: vec![0; capacity],
            len: 0,
        }
    }

    /// Append a row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tagtree::view_state::height_index::HeightIndex;
    /// let mut index = HeightIndex::new(2);
    /// index.push(20);
    /// index.push(40);
    /// index.push(20);
    /// assert_eq!(index.len(), 3);
    /// assert_eq!(index.total(), 80);
    /// ```
    pub fn push(&mut self, height: u32) {
        if self.len >= self.tree.len() {
            // Growing a Fenwick array in place breaks the implicit tree, so
            // rebuild from the row heights.
            let heights: Vec<u32> = (0..self.len).map(|i| self.height(i)).collect();
            self.tree = vec![0; (self.tree.len().max(1)) * 2];
            for (i, h) in heights.into_iter().enumerate() {
                fenwick::array::update(&mut self.tree, i, i64::from(h));
            }
        }
        let idx = self.len;
        self.len += 1;
        fenwick::array::update(&mut self.tree, idx, i64::from(height));
    }

    /// Replace the height of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn set(&mut self, index: usize, height: u32) {
        let delta = i64::from(height) - i64::from(self.height(index));
        if delta != 0 {
            fenwick::array::update(&mut self.tree, index, delta);
        }
    }

    /// Height of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn height(&self, index: usize) -> u32 {
        (self.prefix_sum(index) - self.start_of(index)) as u32
    }

    /// Cumulative height of rows `0..=index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tagtree::view_state::height_index::HeightIndex;
    /// let mut index = HeightIndex::new(4);
    /// index.push(20);
    /// index.push(40);
    /// assert_eq!(index.prefix_sum(0), 20);
    /// assert_eq!(index.prefix_sum(1), 60);
    /// ```
    pub fn prefix_sum(&self, index: usize) -> u64 {
        assert!(
            index < self.len,
            "row {} out of bounds (len: {})",
            index,
            self.len
        );
        fenwick::array::prefix_sum(&self.tree, index).max(0) as u64
    }

    /// Offset at which row `index` starts (sum of all earlier rows).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn start_of(&self, index: usize) -> u64 {
        if index == 0 {
            assert!(self.len > 0, "row 0 out of bounds (len: 0)");
            0
        } else {
            self.prefix_sum(index - 1)
        }
    }

    /// First row whose extent covers `offset`, i.e. the first row with
    /// `prefix_sum(row) > offset`.
    ///
    /// Returns `None` when `offset >= total()` or the index is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tagtree::view_state::height_index::HeightIndex;
    /// let mut index = HeightIndex::new(4);
    /// index.push(20); // [0..20)
    /// index.push(40); // [20..60)
    /// index.push(20); // [60..80)
    /// assert_eq!(index.lower_bound(0), Some(0));
    /// assert_eq!(index.lower_bound(20), Some(1));
    /// assert_eq!(index.lower_bound(79), Some(2));
    /// assert_eq!(index.lower_bound(80), None);
    /// ```
    pub fn lower_bound(&self, offset: u64) -> Option<usize> {
        let (mut left, mut right) = (0, self.len);
        while left < right {
            let mid = left + (right - left) / 2;
            if self.prefix_sum(mid) > offset {
                right = mid;
            } else {
                left = mid + 1;
            }
        }
        (left < self.len).then_some(left)
    }

    /// Sum of all row heights.
    pub fn total(&self) -> u64 {
        if self.len == 0 {
            0
        } else {
            self.prefix_sum(self.len - 1)
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no rows were pushed.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop all rows, keeping the allocation.
    pub fn clear(&mut self) {
        self.tree.iter_mut().for_each(|slot| *slot = 0);
        self.len = 0;
    }
}
