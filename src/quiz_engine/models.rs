use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

// ---------------------------------------------------------------------------
// Grid primitives
// ---------------------------------------------------------------------------

/// A cell on the periodic-table grid. Rows 1..=7 are the periods, rows 8 and 9
/// hold the lanthanide and actinide strips. Columns are 1..=18.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u8,
    pub column: u8,
}

impl GridPosition {
    pub fn new(row: u8, column: u8) -> Self {
        GridPosition { row, column }
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Chemical family, used by presentation layers for colouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    #[serde(rename = "Alkali_metals")]
    AlkaliMetal,
    #[serde(rename = "Alkaline_earth_metals")]
    AlkalineEarthMetal,
    #[serde(rename = "Lanthanides")]
    Lanthanide,
    #[serde(rename = "Actinides")]
    Actinide,
    #[serde(rename = "Transition_metals")]
    TransitionMetal,
    #[serde(rename = "Poor_metals")]
    PoorMetal,
    #[serde(rename = "Metalloids")]
    Metalloid,
    #[serde(rename = "Nonmetals")]
    Nonmetal,
    #[serde(rename = "Halogens")]
    Halogen,
    #[serde(rename = "Noble_gases")]
    NobleGas,
    #[serde(rename = "Other")]
    Other,
}

impl Family {
    /// Dataset token, e.g. `"Noble_gases"`.
    pub fn token(self) -> &'static str {
        match self {
            Family::AlkaliMetal        => "Alkali_metals",
            Family::AlkalineEarthMetal => "Alkaline_earth_metals",
            Family::Lanthanide         => "Lanthanides",
            Family::Actinide           => "Actinides",
            Family::TransitionMetal    => "Transition_metals",
            Family::PoorMetal          => "Poor_metals",
            Family::Metalloid          => "Metalloids",
            Family::Nonmetal           => "Nonmetals",
            Family::Halogen            => "Halogens",
            Family::NobleGas           => "Noble_gases",
            Family::Other              => "Other",
        }
    }

    pub const ALL: [Family; 11] = [
        Family::AlkaliMetal,
        Family::AlkalineEarthMetal,
        Family::Lanthanide,
        Family::Actinide,
        Family::TransitionMetal,
        Family::PoorMetal,
        Family::Metalloid,
        Family::Nonmetal,
        Family::Halogen,
        Family::NobleGas,
        Family::Other,
    ];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Family::AlkaliMetal        => "Alkali metal",
            Family::AlkalineEarthMetal => "Alkaline earth metal",
            Family::Lanthanide         => "Lanthanide",
            Family::Actinide           => "Actinide",
            Family::TransitionMetal    => "Transition metal",
            Family::PoorMetal          => "Poor metal",
            Family::Metalloid          => "Metalloid",
            Family::Nonmetal           => "Nonmetal",
            Family::Halogen            => "Halogen",
            Family::NobleGas           => "Noble gas",
            Family::Other              => "Other",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|f| f.token() == s)
            .ok_or_else(|| format!("unknown family '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// Element record
// ---------------------------------------------------------------------------

/// Unvalidated record shape, as handed over by a dataset loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawElement {
    pub symbol: String,
    pub name: String,
    pub atomic_number: u16,
    pub mass: f64,
    pub period: u8,
    pub group: Option<u8>,
    #[serde(default = "default_family")]
    pub family: Family,
}

fn default_family() -> Family {
    Family::Other
}

/// One chemical element. Immutable once built; the grid position is derived
/// from atomic number, period and group at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawElement")]
pub struct ElementRecord {
    symbol: String,
    name: String,
    atomic_number: u16,
    mass: f64,
    period: u8,
    group: Option<u8>,
    family: Family,
    position: GridPosition,
}

impl ElementRecord {
    /// Validate a raw record and derive its grid position.
    ///
    /// Lanthanides (57..=71) land on row `period + 2`, column `Z - 53`;
    /// actinides (89..=103) on row `period + 2`, column `Z - 85`. Every other
    /// element sits at `(period, group)` and therefore needs a group.
    pub fn new(raw: RawElement) -> Result<Self, QuizError> {
        let invalid = |reason: String| QuizError::InvalidRecord {
            symbol: raw.symbol.clone(),
            reason,
        };

        if raw.symbol.is_empty() || raw.name.is_empty() {
            return Err(invalid("symbol and name must be non-empty".to_string()));
        }
        if raw.atomic_number == 0 {
            return Err(invalid("atomic number must be at least 1".to_string()));
        }
        if !(raw.mass.is_finite() && raw.mass > 0.0) {
            return Err(invalid(format!("mass must be positive, got {}", raw.mass)));
        }
        if raw.period == 0 {
            return Err(invalid("period must be at least 1".to_string()));
        }

        let z = raw.atomic_number;
        let position = match z {
            57..=71 => GridPosition::new(raw.period.saturating_add(2), (z - 53) as u8),
            89..=103 => GridPosition::new(raw.period.saturating_add(2), (z - 85) as u8),
            _ => match raw.group {
                Some(group @ 1..=18) => GridPosition::new(raw.period, group),
                Some(group) => return Err(invalid(format!("group {group} is out of range"))),
                None => return Err(invalid("element outside the f-block has no group".to_string())),
            },
        };

        Ok(ElementRecord {
            symbol: raw.symbol,
            name: raw.name,
            atomic_number: z,
            mass: raw.mass,
            period: raw.period,
            group: raw.group,
            family: raw.family,
            position,
        })
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn atomic_number(&self) -> u16 {
        self.atomic_number
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn period(&self) -> u8 {
        self.period
    }

    /// `None` for f-block elements without a standard group.
    pub fn group(&self) -> Option<u8> {
        self.group
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn position(&self) -> GridPosition {
        self.position
    }
}

impl TryFrom<RawElement> for ElementRecord {
    type Error = QuizError;

    fn try_from(raw: RawElement) -> Result<Self, Self::Error> {
        ElementRecord::new(raw)
    }
}

impl fmt::Display for ElementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}", self.symbol, self.atomic_number, self.name, self.mass)
    }
}

// ---------------------------------------------------------------------------
// Game metadata
// ---------------------------------------------------------------------------

/// The five practice modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuizKind {
    AtomicNumber,
    Name,
    Symbol,
    Mass,
    Placement,
}

impl QuizKind {
    pub const ALL: [QuizKind; 5] = [
        QuizKind::AtomicNumber,
        QuizKind::Name,
        QuizKind::Symbol,
        QuizKind::Mass,
        QuizKind::Placement,
    ];
}

impl fmt::Display for QuizKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QuizKind::AtomicNumber => "Atomic Number",
            QuizKind::Name         => "Name",
            QuizKind::Symbol       => "Symbol",
            QuizKind::Mass         => "Atomic Mass",
            QuizKind::Placement    => "Placement",
        };
        write!(f, "{}", s)
    }
}

/// Categorical result of evaluating one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Right answer; attribute and mass quizzes move on to a new question.
    Correct,
    /// Wrong answer with attempts to spare; same question stays up.
    IncorrectRetry,
    /// Wrong answer on the last attempt; the answer is revealed and a new
    /// question is drawn.
    IncorrectExhausted,
    /// Wrong answer in a single-shot or unlimited-retry mode (mass, placement).
    Incorrect,
    /// Malformed input for a numeric question. No attempt is consumed.
    InvalidInput,
    /// Placement session has run out of elements.
    SessionComplete,
}

/// An answer as it arrives from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Answer {
    /// Free-text answer for the attribute quizzes.
    Text(String),
    /// One of the emitted mass choices, passed back exactly.
    Mass(f64),
    /// A clicked grid cell.
    Position(GridPosition),
}

impl Answer {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Answer::Text(_)     => "text",
            Answer::Mass(_)     => "mass",
            Answer::Position(_) => "position",
        }
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_string())
    }
}

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<f64> for Answer {
    fn from(m: f64) -> Self {
        Answer::Mass(m)
    }
}

impl From<GridPosition> for Answer {
    fn from(p: GridPosition) -> Self {
        Answer::Position(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(symbol: &str, z: u16, period: u8, group: Option<u8>) -> RawElement {
        RawElement {
            symbol: symbol.to_string(),
            name: format!("{symbol}-name"),
            atomic_number: z,
            mass: 10.0,
            period,
            group,
            family: Family::Other,
        }
    }

    #[test]
    fn main_block_position_is_period_and_group() {
        let e = ElementRecord::new(raw("He", 2, 1, Some(18))).unwrap();
        assert_eq!(e.position(), GridPosition::new(1, 18));
    }

    #[test]
    fn lanthanides_and_actinides_are_remapped() {
        let la = ElementRecord::new(raw("La", 57, 6, None)).unwrap();
        let lu = ElementRecord::new(raw("Lu", 71, 6, None)).unwrap();
        let ac = ElementRecord::new(raw("Ac", 89, 7, Some(3))).unwrap();
        let lr = ElementRecord::new(raw("Lr", 103, 7, None)).unwrap();
        assert_eq!(la.position(), GridPosition::new(8, 4));
        assert_eq!(lu.position(), GridPosition::new(8, 18));
        assert_eq!(ac.position(), GridPosition::new(9, 4));
        assert_eq!(lr.position(), GridPosition::new(9, 18));
    }

    #[test]
    fn missing_group_outside_f_block_is_rejected() {
        let err = ElementRecord::new(raw("Fe", 26, 4, None)).unwrap_err();
        assert!(matches!(err, QuizError::InvalidRecord { .. }));
    }

    #[test]
    fn non_positive_mass_is_rejected() {
        let mut r = raw("X", 5, 2, Some(13));
        r.mass = 0.0;
        assert!(ElementRecord::new(r.clone()).is_err());
        r.mass = f64::NAN;
        assert!(ElementRecord::new(r).is_err());
    }

    #[test]
    fn deserialize_derives_position() {
        let json = r#"{"symbol":"Ce","name":"Cerium","atomic_number":58,
                       "mass":140.12,"period":6,"group":null,"family":"Lanthanides"}"#;
        let e: ElementRecord = serde_json::from_str(json).unwrap();
        assert_eq!(e.position(), GridPosition::new(8, 5));
        assert_eq!(e.family(), Family::Lanthanide);
    }

    #[test]
    fn family_tokens_round_trip() {
        for f in Family::ALL {
            assert_eq!(f.token().parse::<Family>().unwrap(), f);
        }
        assert!("Dragons".parse::<Family>().is_err());
    }

    #[test]
    fn display_lists_symbol_number_name_mass() {
        let mut r = raw("H", 1, 1, Some(1));
        r.name = "Hydrogen".to_string();
        r.mass = 1.008;
        let e = ElementRecord::new(r).unwrap();
        assert_eq!(e.to_string(), "H, 1, Hydrogen, 1.008");
    }
}
