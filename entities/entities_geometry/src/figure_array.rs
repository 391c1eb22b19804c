//! Figure Array Module
//!
//! A growable container owning figures of mixed types.
//!
//! Indices are signed at the API boundary. A negative or too-large index is
//! never an error: `get` returns `None` and `remove` does nothing.

use tracing::debug;

use crate::figure::Figure;

/// Heterogeneous figure container
#[derive(Debug, Default)]
pub struct FigureArray {
    /// Figures in insertion order
    figures: Vec<Box<dyn Figure>>,
}

impl FigureArray {
    /// Create a new empty array
    pub fn new() -> Self {
        Self {
            figures: Vec::new(),
        }
    }

    /// Append a figure
    pub fn push<F: Figure + 'static>(&mut self, figure: F) {
        self.push_boxed(Some(Box::new(figure)));
    }

    /// Append an already boxed figure; `None` is ignored
    pub fn push_boxed(&mut self, figure: Option<Box<dyn Figure>>) {
        match figure {
            Some(figure) => {
                debug!(kind = figure.type_name(), index = self.figures.len(), "figure added");
                self.figures.push(figure);
            }
            None => debug!("ignoring empty figure"),
        }
    }

    /// Remove the figure at `index`, shifting later figures down
    ///
    /// Returns the removed figure, or None if the index is invalid.
    pub fn remove(&mut self, index: i64) -> Option<Box<dyn Figure>> {
        let idx = self.checked_index(index)?;
        let removed = self.figures.remove(idx);
        debug!(kind = removed.type_name(), index = idx, "figure removed");
        Some(removed)
    }

    /// Get the figure at `index`, or None if the index is invalid
    pub fn get(&self, index: i64) -> Option<&dyn Figure> {
        let idx = self.checked_index(index)?;
        Some(self.figures[idx].as_ref())
    }

    /// Sum of the areas of all figures
    pub fn total_area(&self) -> f64 {
        self.figures.iter().map(|f| f.area()).sum()
    }

    /// Number of figures
    pub fn size(&self) -> usize {
        self.figures.len()
    }

    /// Check if the array holds no figures
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Iterate over the figures in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Figure> + '_ {
        self.figures.iter().map(|f| {
            let figure: &dyn Figure = f.as_ref();
            figure
        })
    }

    fn checked_index(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&idx| idx < self.figures.len())
    }
}
