//! Gallery lightbox and filter model.

/// Query parameter that mirrors the active gallery filter.
pub const FILTER_PARAM: &str = "filter";

/// Filter value that shows every item.
pub const FILTER_ALL: &str = "all";

/// What the lightbox shows for one `.gallery-item`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GalleryItem {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub category: String,
}

/// Index of the open lightbox image; stepping past either end wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryCursor {
    index: usize,
    len: usize,
}

impl GalleryCursor {
    /// `None` for an empty gallery. An out-of-range index clamps to the last item.
    pub fn new(index: usize, len: usize) -> Option<Self> {
        if len == 0 {
            return None;
        }
        Some(Self {
            index: index.min(len - 1),
            len,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Arrow keys step through images; `None` for keys the lightbox ignores.
    pub fn step_for_key(self, key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(self.prev()),
            "ArrowRight" => Some(self.next()),
            _ => None,
        }
    }
}

/// `data-category` holds space separated categories.
pub fn matches_filter(categories: &str, filter: &str) -> bool {
    filter == FILTER_ALL || categories.split_whitespace().any(|c| c == filter)
}

/// Filter restored from the query string, defaulting to `all`.
pub fn initial_filter(param: Option<&str>) -> &str {
    match param {
        Some(value) if !value.trim().is_empty() => value,
        _ => FILTER_ALL,
    }
}
