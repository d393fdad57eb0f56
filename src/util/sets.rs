//! Ordered vectors used as small sets
//!
//! Insertion order is kept; membership is by equality.

pub fn set_contains<T: PartialEq>(set: &[T], value: &T) -> bool {
    set.contains(value)
}

/// Add `value` unless already present; returns whether it was added
pub fn set_add<T: PartialEq>(set: &mut Vec<T>, value: T) -> bool {
    if set.contains(&value) {
        return false;
    }
    set.push(value);
    true
}

/// Remove the first occurrence of `value`; returns whether it was present
pub fn set_remove<T: PartialEq>(set: &mut Vec<T>, value: &T) -> bool {
    match set.iter().position(|v| v == value) {
        Some(index) => {
            set.remove(index);
            true
        }
        None => false,
    }
}

/// Elements of `a` also in `b`, in `a`'s order
pub fn set_intersection<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<T> {
    a.iter().filter(|v| b.contains(v)).cloned().collect()
}
