use spanwise_core_rs::num::Element;
use spanwise_core_rs::{Needle, ViewOp};

/// Counting policy: which part of the view the occurrences are tallied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountPolicy {
    /// Total occurrences across the whole view.
    All,
    /// Occurrences in the maximal matching prefix.
    Leading,
    /// Occurrences in the maximal matching suffix.
    Trailing,
    /// Offset of the first occurrence.
    Until,
    /// Leading plus trailing.
    Around,
    /// Everything except the leading and trailing runs.
    Inside,
    /// Elements not accounted for by any occurrence.
    Inverse,
}

/// Windowed counting built on top of matching.
pub trait Count: ViewOp {
    /// Count occurrences of `needle` under `policy`.
    ///
    /// An empty view and an empty sequence/set needle both count 0, and any
    /// combination without a defined meaning falls back to 0 rather than
    /// failing; the fallback is a permissive default, not an error path.
    ///
    /// Sequence needles are counted in non-overlapping windows of needle
    /// width. Set needles are tallied elementwise, not per distinct
    /// occurrence.
    fn count(&self, policy: CountPolicy, needle: Needle<'_, Self::Elem>) -> usize {
        let data = self.as_slice();
        if data.is_empty() || needle.is_empty() {
            return 0;
        }
        match policy {
            CountPolicy::All => count_all(data, needle),
            CountPolicy::Leading => count_leading(data, needle),
            CountPolicy::Trailing => count_trailing(data, needle),
            CountPolicy::Until => count_until(data, needle),
            CountPolicy::Around => count_leading(data, needle) + count_trailing(data, needle),
            CountPolicy::Inside => {
                // Overlapping leading/trailing runs degrade to 0 instead of
                // underflowing.
                count_all(data, needle)
                    .saturating_sub(count_leading(data, needle) + count_trailing(data, needle))
            }
            CountPolicy::Inverse => data.len() - count_all(data, needle),
        }
    }
}

impl<V: ViewOp + ?Sized> Count for V {}

fn count_all<T: Element>(data: &[T], needle: Needle<'_, T>) -> usize {
    match needle {
        Needle::Scalar(value) => data.iter().filter(|el| **el == value).count(),
        Needle::Set(members) => data.iter().filter(|el| members.contains(el)).count(),
        Needle::Sequence(run) => {
            // Non-overlapping: jump the full needle width after a match,
            // one element otherwise.
            let mut count = 0;
            let mut pos = 0;
            while pos + run.len() <= data.len() {
                if data[pos..pos + run.len()] == *run {
                    count += 1;
                    pos += run.len();
                } else {
                    pos += 1;
                }
            }
            count
        }
    }
}

fn count_leading<T: Element>(data: &[T], needle: Needle<'_, T>) -> usize {
    match needle {
        Needle::Scalar(_) | Needle::Set(_) => data
            .iter()
            .take_while(|el| needle.matches_element(el))
            .count(),
        Needle::Sequence(run) => {
            // Stride forward in windows of needle width, counting windows,
            // not elements. A repeat that starts off the window grid is
            // invisible to this scan.
            let mut count = 0;
            let mut pos = 0;
            while pos + run.len() <= data.len() && data[pos..pos + run.len()] == *run {
                count += 1;
                pos += run.len();
            }
            count
        }
    }
}

fn count_trailing<T: Element>(data: &[T], needle: Needle<'_, T>) -> usize {
    match needle {
        Needle::Scalar(_) | Needle::Set(_) => data
            .iter()
            .rev()
            .take_while(|el| needle.matches_element(el))
            .count(),
        Needle::Sequence(run) => {
            // Stride backward in windows of needle width with saturating
            // steps. The scan stops once the cursor reaches 0, so the
            // window starting at index 0 is never tested.
            let mut count = 0;
            let mut cursor = data.len().saturating_sub(run.len());
            while cursor != 0 {
                if data[cursor..cursor + run.len()] != *run {
                    break;
                }
                count += 1;
                cursor = cursor.saturating_sub(run.len());
            }
            count
        }
    }
}

fn count_until<T: Element>(data: &[T], needle: Needle<'_, T>) -> usize {
    match needle {
        Needle::Scalar(_) | Needle::Set(_) => data
            .iter()
            .position(|el| needle.matches_element(el))
            .unwrap_or(data.len()),
        Needle::Sequence(run) => {
            // Scan aligned windows of needle width; the answer is the
            // element offset of the first matching window. A view shorter
            // than the needle degenerates to 0.
            if data.len() < run.len() {
                return 0;
            }
            let mut pos = 0;
            while pos + run.len() <= data.len() {
                if data[pos..pos + run.len()] == *run {
                    return pos;
                }
                pos += run.len();
            }
            pos
        }
    }
}
