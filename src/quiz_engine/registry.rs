use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use tracing::info;

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::{ElementRecord, GridPosition},
};

/// The read-only set of elements every game draws from.
///
/// Records are stored behind `Arc` so games can hold on to the exact record
/// they asked about; `Arc::ptr_eq` identifies "the same element" across draws.
#[derive(Debug)]
pub struct Registry {
    elements: Vec<Arc<ElementRecord>>,
    by_position: HashMap<GridPosition, usize>,
}

impl Registry {
    /// Build a registry from already-validated records.
    ///
    /// Records are sorted by atomic number. Fails on an empty input, on
    /// duplicate symbols or atomic numbers, and on two records claiming the
    /// same grid cell.
    pub fn new(mut records: Vec<ElementRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(QuizError::EmptyRegistry);
        }
        records.sort_by_key(|e| e.atomic_number());

        let mut by_position = HashMap::with_capacity(records.len());
        let mut symbols = HashMap::with_capacity(records.len());
        for (idx, rec) in records.iter().enumerate() {
            if idx > 0 && records[idx - 1].atomic_number() == rec.atomic_number() {
                return Err(QuizError::DuplicateElement(format!(
                    "atomic number {}",
                    rec.atomic_number()
                )));
            }
            if symbols.insert(rec.symbol().to_lowercase(), idx).is_some() {
                return Err(QuizError::DuplicateElement(format!("symbol {}", rec.symbol())));
            }
            if let Some(prev) = by_position.insert(rec.position(), idx) {
                let pos = rec.position();
                return Err(QuizError::PositionCollision {
                    row: pos.row,
                    column: pos.column,
                    first: records[prev].symbol().to_string(),
                    second: rec.symbol().to_string(),
                });
            }
        }

        info!(count = records.len(), "element registry built");
        Ok(Registry {
            elements: records.into_iter().map(Arc::new).collect(),
            by_position,
        })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Uniform draw with replacement.
    pub fn random_element<R: Rng + ?Sized>(&self, rng: &mut R) -> &Arc<ElementRecord> {
        let idx = rng.gen_range(0..self.elements.len());
        &self.elements[idx]
    }

    /// Fresh Fisher-Yates shuffled copy of every record. The caller owns the
    /// returned vector; the registry order is untouched.
    pub fn all_elements_shuffled<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Arc<ElementRecord>> {
        let mut all = self.elements.clone();
        for i in (1..all.len()).rev() {
            let j = rng.gen_range(0..=i);
            all.swap(i, j);
        }
        all
    }

    /// Element occupying a grid cell; `None` means an empty cell.
    pub fn lookup_by_position(&self, row: u8, column: u8) -> Option<&Arc<ElementRecord>> {
        self.by_position
            .get(&GridPosition::new(row, column))
            .map(|&idx| &self.elements[idx])
    }

    /// Case-insensitive symbol lookup ("fe" finds Fe).
    pub fn lookup_by_symbol(&self, symbol: &str) -> Option<&Arc<ElementRecord>> {
        self.elements
            .iter()
            .find(|e| e.symbol().eq_ignore_ascii_case(symbol))
    }

    pub fn lookup_by_atomic_number(&self, atomic_number: u16) -> Option<&Arc<ElementRecord>> {
        self.elements
            .binary_search_by_key(&atomic_number, |e| e.atomic_number())
            .ok()
            .map(|idx| &self.elements[idx])
    }

    /// Case-insensitive name lookup.
    pub fn lookup_by_name(&self, name: &str) -> Option<&Arc<ElementRecord>> {
        let wanted = name.to_lowercase();
        self.elements.iter().find(|e| e.name().to_lowercase() == wanted)
    }

    /// Records in atomic-number order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ElementRecord>> {
        self.elements.iter()
    }

    /// One line per element (`"H, 1, Hydrogen, 1.008"`) under a heading.
    pub fn listing(&self) -> String {
        let mut out = String::from("All elements\n\n");
        for e in &self.elements {
            out.push_str(&e.to_string());
            out.push('\n');
        }
        out
    }
}
