//! The centered-window computation behind "nearby posts" navigation: given a
//! focal position in a series, pick the inclusive index range of posts to
//! show around it.

/// An inclusive index range within a series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub first: usize,
    pub last: usize,
}

impl Window {
    /// The number of indices the window spans.
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        self.first <= index && index <= self.last
    }
}

/// Computes the window of `size` positions centered on `focus` within a
/// sequence of `count` elements (`focus < count`, `count > 0`).
///
/// An even `size` is widened by one so the window can center on the focal
/// position. At either boundary the window slides rather than truncates, so
/// a focal position near an end still sees a full complement of neighbors;
/// the resulting width is always `min(size, count)` with `size` rounded up
/// to odd.
pub fn centered(focus: usize, count: usize, size: usize) -> Window {
    let size = match size % 2 {
        0 => size + 1,
        _ => size,
    } as i64;
    let count = count as i64;

    let mut first = focus as i64 - (size - 1) / 2;
    let mut last = first + size - 1;

    if first < 0 {
        // shift right: extend the far edge by the deficit, capped at the end
        last = (last - first).min(count - 1);
        first = 0;
    }
    if last >= count {
        first = (count - size).max(0);
        last = count - 1;
    }

    Window {
        first: first as usize,
        last: last as usize,
    }
}
