use std::collections::VecDeque;

/// Fixed-capacity buffer ordered most-recent-first.
#[derive(Debug, Clone)]
pub struct RecentWindow<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: Clone> RecentWindow<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// Inserts at the front, evicting the oldest item when full.
    pub fn push_front(&mut self, item: T) {
        if self.capacity == 0 {
            return;
        }
        if self.items.len() == self.capacity {
            self.items.pop_back();
        }
        self.items.push_front(item);
    }

    /// Copies out up to `limit` items (all when `None`), most recent first.
    pub fn to_ordered(&self, limit: Option<usize>) -> Vec<T> {
        let take = limit.unwrap_or(self.items.len());
        self.items.iter().take(take).cloned().collect()
    }
}
