//! Rolling Windows
//!
//! Fixed-capacity sequences: insertion beyond capacity evicts the oldest
//! element. Every helper returns a fresh vector and never mutates its
//! input, so callers holding the previous collection can rely on cheap
//! change detection.

/// Append `item`, then truncate to `cap` by dropping the oldest (front)
/// entries. Used by time-ordered windows (oldest first, newest last).
pub fn append_capped<T: Clone>(items: &[T], item: T, cap: usize) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);

    while next.len() > cap {
        next.remove(0);
    }
    next
}

/// Insert `item` at the head, then truncate to `cap` by dropping the tail.
/// Used by newest-first collections (threat timeline, log feeds).
pub fn prepend_capped<T: Clone>(items: &[T], item: T, cap: usize) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.push(item);
    next.extend_from_slice(items);
    next.truncate(cap);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_below_cap() {
        let window = append_capped(&[1, 2], 3, 24);
        assert_eq!(window, vec![1, 2, 3]);
    }

    #[test]
    fn test_append_evicts_oldest() {
        let mut window: Vec<u32> = Vec::new();
        for i in 0..25 {
            window = append_capped(&window, i, 24);
        }

        // 25 inserts into a 24-slot window: entry 0 is gone
        assert_eq!(window.len(), 24);
        assert!(!window.contains(&0));
        assert_eq!(window[0], 1);
        assert_eq!(*window.last().unwrap(), 24);
    }

    #[test]
    fn test_prepend_keeps_newest() {
        let mut window: Vec<u32> = Vec::new();
        for i in 0..20 {
            window = prepend_capped(&window, i, 15);
        }

        assert_eq!(window.len(), 15);
        assert_eq!(window[0], 19);
        assert!(!window.contains(&4));
    }

    #[test]
    fn test_input_is_untouched() {
        let original = vec![1, 2, 3];
        let next = append_capped(&original, 4, 3);

        assert_eq!(original, vec![1, 2, 3]);
        assert_eq!(next, vec![2, 3, 4]);
    }
}
