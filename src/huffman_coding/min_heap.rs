use std::cmp::Ordering;

/// Array backed binary min-heap. The ordering is supplied as a comparator rather than taken from
/// the element type, so the same heap can order tree vertices by weight alone.
pub struct MinHeap<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    elements: Vec<T>,
    compare: F,
}

impl<T, F> MinHeap<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    pub fn new(compare: F) -> Self {
        Self {
            elements: Vec::new(),
            compare,
        }
    }

    pub fn with_capacity(capacity: usize, compare: F) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Add an element and restore the heap order.
    pub fn push(&mut self, element: T) {
        self.elements.push(element);
        self.percolate_up(self.elements.len() - 1);
    }

    /// Remove and return the smallest element.
    pub fn pop(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();
        if self.elements.len() > 1 {
            self.percolate_down(0);
        }
        min
    }

    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn percolate_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.compare)(&self.elements[index], &self.elements[parent]) != Ordering::Less {
                break;
            }
            self.elements.swap(index, parent);
            index = parent;
        }
    }

    fn percolate_down(&mut self, mut index: usize) {
        let len = self.elements.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;
            if left < len
                && (self.compare)(&self.elements[left], &self.elements[smallest]) == Ordering::Less
            {
                smallest = left;
            }
            if right < len
                && (self.compare)(&self.elements[right], &self.elements[smallest]) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == index {
                break;
            }
            self.elements.swap(index, smallest);
            index = smallest;
        }
    }
}
