//! Built-in reference dataset and its line format.
//!
//! Each line reads `symbol atomic_number name mass period group family`,
//! whitespace separated. Elements without a standard group (the f-block
//! strips) carry `-` in the group column. Blank lines and lines starting
//! with `#` are skipped.
//!
//! ```text
//! H 1 Hydrogen 1.008 1 1 Nonmetals
//! La 57 Lanthanum 138.91 6 - Lanthanides
//! ```

use crate::quiz_engine::{
    error::{QuizError, Result},
    models::{ElementRecord, Family, RawElement},
    registry::Registry,
};

/// All 118 elements, embedded at compile time.
pub const REFERENCE_DATA: &str = include_str!("../../data/elements.txt");

/// Parse one dataset line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_no: usize) -> Result<RawElement> {
    let parse_err = |reason: String| QuizError::Parse { line: line_no, reason };

    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[symbol, z, name, mass, period, group, family] = fields.as_slice() else {
        return Err(parse_err(format!("expected 7 fields, found {}", fields.len())));
    };

    let atomic_number = z
        .parse::<u16>()
        .map_err(|e| parse_err(format!("atomic number '{z}': {e}")))?;
    let mass = mass
        .parse::<f64>()
        .map_err(|e| parse_err(format!("mass '{mass}': {e}")))?;
    let period = period
        .parse::<u8>()
        .map_err(|e| parse_err(format!("period '{period}': {e}")))?;
    // Anything that is not a plain number means "no group".
    let group = group.parse::<u8>().ok();
    let family = family.parse::<Family>().map_err(parse_err)?;

    Ok(RawElement {
        symbol: symbol.to_string(),
        name: name.to_string(),
        atomic_number,
        mass,
        period,
        group,
        family,
    })
}

/// Parse and validate a whole dataset text.
pub fn parse_dataset(text: &str) -> Result<Vec<ElementRecord>> {
    text.lines()
        .enumerate()
        .filter(|(_, l)| {
            let t = l.trim();
            !t.is_empty() && !t.starts_with('#')
        })
        .map(|(i, l)| parse_line(l, i + 1).and_then(ElementRecord::new))
        .collect()
}

impl Registry {
    /// Registry over the embedded reference dataset.
    pub fn reference() -> Result<Registry> {
        Registry::new(parse_dataset(REFERENCE_DATA)?)
    }

    /// Registry over a dataset text in the reference line format.
    pub fn from_dataset(text: &str) -> Result<Registry> {
        Registry::new(parse_dataset(text)?)
    }
}
