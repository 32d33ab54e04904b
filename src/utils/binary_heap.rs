use std::{ops::Range, cmp};

/// binary min heap without decrease-key support.
/// the same logical element may be inserted several times, callers are expected to skip superseded entries when popping them
#[derive(Clone, Debug)]
pub struct MinBinaryHeap<T: Ord> {
    data: Vec<T>
}

impl<T: Ord> Default for MinBinaryHeap<T> {

    fn default() -> Self {
        MinBinaryHeap::new()
    }
}

impl<T: Ord> MinBinaryHeap<T> {

    pub fn new() -> Self {
        MinBinaryHeap {
            data: Vec::new()
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        MinBinaryHeap {
            data: Vec::with_capacity(capacity)
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn insert(&mut self, entry: T) {
        let initial_index = self.data.len();
        self.data.push(entry);

        self.sift_up(initial_index);
    }

    pub fn pop(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let last_index = self.len() - 1;
        self.data.swap(0, last_index); // move first element to the back
        let min_element = self.data.pop();

        if !self.is_empty() {
            self.sift_down(0);
        }

        min_element
    }

    fn sift_up(&mut self, index: usize) {
        let mut current_index = index;

        while 0 < current_index {
            let parent_index = self.parent_index(current_index);

            if self.data[parent_index] <= self.data[current_index] {
                break;
            }

            self.data.swap(parent_index, current_index);
            current_index = parent_index;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let mut current_index = index;

        loop {
            let mut min_entry_index: usize = current_index;

            for child_index in self.children_indices(current_index) {
                if self.data[child_index] < self.data[min_entry_index] {
                    min_entry_index = child_index;
                }
            }

            if min_entry_index == current_index {
                break;
            }

            self.data.swap(min_entry_index, current_index);
            current_index = min_entry_index;
        }
    }

    fn parent_index(&self, index: usize) -> usize {
        (index - 1) / 2
    }

    /// valid child positions of the given index
    fn children_indices(&self, index: usize) -> Range<usize> {
        let min_index = cmp::min(self.len(), 2 * index + 1);
        let max_index = cmp::min(self.len(), 2 * index + 3);

        min_index..max_index
    }
}
