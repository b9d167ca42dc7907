// src/domain/gallery.rs

/// Lightbox position over a listing's photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightbox {
    pub index: usize,
    pub total: usize,
}

impl Lightbox {
    /// `None` when there is nothing to show at `index`.
    pub fn open(index: usize, total: usize) -> Option<Self> {
        (index < total).then_some(Self { index, total })
    }

    pub fn next(&self) -> usize {
        (self.index + 1) % self.total
    }

    pub fn prev(&self) -> usize {
        (self.index + self.total - 1) % self.total
    }

    /// Prev/next controls only make sense with more than one photo.
    pub fn can_navigate(&self) -> bool {
        self.total > 1
    }

    /// Human counter, e.g. "2 / 5".
    pub fn counter(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }
}
