use std::collections::VecDeque;
use std::fmt;

use thiserror::Error;

use super::page_set::PageSet;
use super::roman::to_roman;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("{start_field} lists {starts} value(s) but {end_field} lists {ends}")]
    LengthMismatch {
        start_field: String,
        end_field: String,
        starts: usize,
        ends: usize,
    },
}

/// Inclusive page range over which one numbering sequence runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: u32,
    pub end: u32,
}

impl Window {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, page: u32) -> bool {
        self.start <= page && page <= self.end
    }
}

/// Windows consumed left to right. Multiwork items carry several, plain
/// items exactly one. The last window stays active once reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowQueue {
    windows: VecDeque<Window>,
}

impl WindowQueue {
    pub fn single(window: Window) -> Self {
        Self {
            windows: VecDeque::from([window]),
        }
    }

    /// Pairs start and end cells position by position.
    ///
    /// An absent cell counts as the single value `0`, so an absent start
    /// with a present end numbers every page up to that end.
    pub fn from_bounds(
        start_field: &str,
        starts: &PageSet,
        end_field: &str,
        ends: &PageSet,
    ) -> Result<Self, WindowError> {
        let starts = bounds_or_zero(starts);
        let ends = bounds_or_zero(ends);
        if starts.len() != ends.len() {
            return Err(WindowError::LengthMismatch {
                start_field: start_field.to_string(),
                end_field: end_field.to_string(),
                starts: starts.len(),
                ends: ends.len(),
            });
        }

        let windows = starts
            .iter()
            .zip(&ends)
            .map(|(&start, &end)| Window::new(start, end))
            .collect();
        Ok(Self { windows })
    }

    pub fn current(&self) -> Window {
        self.windows.front().copied().unwrap_or(Window::new(0, 0))
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Moves to the next window when `page` closes the current one.
    /// Returns whether the queue advanced.
    pub fn advance_past(&mut self, page: u32) -> bool {
        if self.windows.len() > 1 && page == self.current().end {
            self.windows.pop_front();
            return true;
        }
        false
    }
}

fn bounds_or_zero(set: &PageSet) -> Vec<u32> {
    if set.is_absent() {
        vec![0]
    } else {
        set.values().to_vec()
    }
}

/// One numbering dimension: its windows plus the running counter.
#[derive(Debug, Clone)]
struct Track {
    windows: WindowQueue,
    next: u32,
}

impl Track {
    fn new(windows: WindowQueue) -> Self {
        Self { windows, next: 1 }
    }

    fn restart_at(&mut self, page: u32) {
        if page == self.windows.current().start {
            self.next = 1;
        }
    }

    fn take(&mut self) -> u32 {
        let value = self.next;
        self.next += 1;
        value
    }
}

/// Reading-order label for a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderLabel {
    Arabic(u32),
    Roman(String),
}

impl fmt::Display for OrderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderLabel::Arabic(n) => write!(f, "{n}"),
            OrderLabel::Roman(s) => f.write_str(s),
        }
    }
}

/// Assigns order labels to consecutive pages of one document.
///
/// Roman numbering wins while a page sits inside the active roman window;
/// otherwise arabic numbering applies inside the active arabic window,
/// skipping unpaginated pages. Both counters restart at their window's start
/// page and only advance when they label a page.
#[derive(Debug, Clone)]
pub struct SegmentCursor {
    arabic: Track,
    roman: Option<Track>,
    unpaginated: PageSet,
}

impl SegmentCursor {
    pub fn new(arabic: WindowQueue, roman: Option<WindowQueue>, unpaginated: PageSet) -> Self {
        Self {
            arabic: Track::new(arabic),
            roman: roman.map(Track::new),
            unpaginated,
        }
    }

    /// Labels `page`, then advances any window that ends on it.
    ///
    /// Pages must be fed in ascending order; the boundary page itself is
    /// labelled by the window it closes.
    pub fn label(&mut self, page: u32) -> Option<OrderLabel> {
        self.arabic.restart_at(page);
        if let Some(roman) = self.roman.as_mut() {
            roman.restart_at(page);
        }

        let label = match self.roman.as_mut() {
            Some(roman) if roman.windows.current().contains(page) => {
                Some(OrderLabel::Roman(to_roman(roman.take())))
            }
            _ if self.arabic.windows.current().contains(page)
                && !self.unpaginated.contains(page) =>
            {
                Some(OrderLabel::Arabic(self.arabic.take()))
            }
            _ => None,
        };

        if self.arabic.windows.advance_past(page) {
            log::debug!("page {page} closes an ordering window");
        }
        if let Some(roman) = self.roman.as_mut()
            && roman.windows.advance_past(page)
        {
            log::debug!("page {page} closes a roman window");
        }

        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue(pairs: &[(u32, u32)]) -> WindowQueue {
        let starts = PageSet::Many(pairs.iter().map(|p| p.0).collect());
        let ends = PageSet::Many(pairs.iter().map(|p| p.1).collect());
        WindowQueue::from_bounds("start", &starts, "end", &ends).unwrap()
    }

    fn labels(cursor: &mut SegmentCursor, pages: u32) -> Vec<Option<String>> {
        (1..=pages)
            .map(|page| cursor.label(page).map(|l| l.to_string()))
            .collect()
    }

    fn expected(values: &[Option<&str>]) -> Vec<Option<String>> {
        values.iter().map(|v| v.map(str::to_string)).collect()
    }

    #[test]
    fn single_window_numbers_from_one() {
        let mut cursor = SegmentCursor::new(
            WindowQueue::single(Window::new(3, 5)),
            None,
            PageSet::Absent,
        );

        assert_eq!(
            labels(&mut cursor, 7),
            expected(&[None, None, Some("1"), Some("2"), Some("3"), None, None])
        );
    }

    #[test]
    fn multiwork_windows_restart_numbering() {
        let mut cursor = SegmentCursor::new(queue(&[(1, 5), (6, 10)]), None, PageSet::Absent);

        assert_eq!(
            labels(&mut cursor, 10),
            expected(&[
                Some("1"),
                Some("2"),
                Some("3"),
                Some("4"),
                Some("5"),
                Some("1"),
                Some("2"),
                Some("3"),
                Some("4"),
                Some("5"),
            ])
        );
    }

    #[test]
    fn last_window_stays_active() {
        let mut q = queue(&[(1, 2), (4, 6)]);

        assert!(q.advance_past(2));
        assert!(!q.advance_past(6));
        assert_eq!(q.current(), Window::new(4, 6));
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn advance_only_on_current_end() {
        let mut q = queue(&[(1, 5), (6, 10)]);

        assert!(!q.advance_past(10));
        assert_eq!(q.current(), Window::new(1, 5));
    }

    #[test]
    fn gap_between_windows_is_unlabelled() {
        let mut cursor = SegmentCursor::new(queue(&[(1, 2), (5, 6)]), None, PageSet::Absent);

        assert_eq!(
            labels(&mut cursor, 6),
            expected(&[Some("1"), Some("2"), None, None, Some("1"), Some("2")])
        );
    }

    #[test]
    fn roman_preface_then_arabic_body() {
        let mut cursor = SegmentCursor::new(
            WindowQueue::single(Window::new(4, 10)),
            Some(WindowQueue::single(Window::new(1, 3))),
            PageSet::Absent,
        );

        assert_eq!(
            labels(&mut cursor, 10),
            expected(&[
                Some("i"),
                Some("ii"),
                Some("iii"),
                Some("1"),
                Some("2"),
                Some("3"),
                Some("4"),
                Some("5"),
                Some("6"),
                Some("7"),
            ])
        );
    }

    #[test]
    fn roman_window_suppresses_overlapping_arabic() {
        let mut cursor = SegmentCursor::new(
            WindowQueue::single(Window::new(1, 5)),
            Some(WindowQueue::single(Window::new(1, 2))),
            PageSet::Absent,
        );

        assert_eq!(
            labels(&mut cursor, 5),
            expected(&[Some("i"), Some("ii"), Some("1"), Some("2"), Some("3")])
        );
    }

    #[test]
    fn unpaginated_pages_are_skipped() {
        let mut cursor = SegmentCursor::new(
            WindowQueue::single(Window::new(1, 5)),
            None,
            PageSet::Single(3),
        );

        assert_eq!(
            labels(&mut cursor, 5),
            expected(&[Some("1"), Some("2"), None, Some("3"), Some("4")])
        );
    }

    #[test]
    fn multiwork_roman_windows_restart() {
        let mut cursor = SegmentCursor::new(
            queue(&[(3, 4), (7, 8)]),
            Some(queue(&[(1, 2), (5, 6)])),
            PageSet::Absent,
        );

        assert_eq!(
            labels(&mut cursor, 8),
            expected(&[
                Some("i"),
                Some("ii"),
                Some("1"),
                Some("2"),
                Some("i"),
                Some("ii"),
                Some("1"),
                Some("2"),
            ])
        );
    }

    #[test]
    fn bounds_pair_position_by_position() {
        let mut q = WindowQueue::from_bounds(
            "start",
            &PageSet::Many(vec![3, 7]),
            "end",
            &PageSet::Many(vec![5, 9]),
        )
        .unwrap();

        assert_eq!(q.len(), 2);
        assert_eq!(q.current(), Window::new(3, 5));
        assert!(q.advance_past(5));
        assert_eq!(q.current(), Window::new(7, 9));
        assert!(!q.advance_past(9));
    }

    #[test]
    fn absent_start_numbers_up_to_end() {
        let q = WindowQueue::from_bounds("start", &PageSet::Absent, "end", &PageSet::Single(3))
            .unwrap();
        let mut cursor = SegmentCursor::new(q, None, PageSet::Absent);

        assert_eq!(
            labels(&mut cursor, 4),
            expected(&[Some("1"), Some("2"), Some("3"), None])
        );
    }

    #[test]
    fn absent_bounds_label_nothing() {
        let q = WindowQueue::from_bounds("start", &PageSet::Absent, "end", &PageSet::Absent)
            .unwrap();
        let mut cursor = SegmentCursor::new(q, None, PageSet::Absent);

        assert!(labels(&mut cursor, 5).iter().all(Option::is_none));
    }

    #[test]
    fn mismatched_bounds_are_rejected() {
        let err = WindowQueue::from_bounds(
            "roman start",
            &PageSet::Many(vec![1, 9]),
            "roman cap",
            &PageSet::Single(4),
        )
        .unwrap_err();

        assert_eq!(
            err.to_string(),
            "roman start lists 2 value(s) but roman cap lists 1"
        );
    }
}
