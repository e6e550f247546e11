//! Bracket selection on linear and circular axes.
//!
//! Both policies expect a non-empty, strictly increasing value slice as
//! produced by [`AxisValues`](super::AxisValues).

use serde::{Deserialize, Serialize};

use crate::angle::{normalize_360, FULL_TURN};

/// Pair of axis values surrounding a query coordinate.
///
/// On a circular axis `upper` may exceed 360 when the bracket crosses the
/// 0°/360° seam.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    pub lower: f64,
    pub upper: f64,
}

impl Bracket {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Both bounds on the same axis value.
    pub fn is_degenerate(&self) -> bool {
        self.lower == self.upper
    }
}

/// How the frequency bracket behaves for a query above every sampled frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyPolicy {
    /// Upper bound falls back to the highest sampled frequency.
    #[default]
    Clamped,
    /// Upper bound falls back to the lowest sampled frequency, matching the
    /// numeric output of the earlier tool.
    Legacy,
}

/// Brackets `query` on a non-circular axis.
///
/// `lower` is the greatest value `<= query` (else the first value); `upper` is
/// the first value `>= query`, else the fallback chosen by `policy`.
pub fn linear_bracket(values: &[f64], query: f64, policy: FrequencyPolicy) -> Bracket {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return Bracket::new(query, query);
    };

    let mut lower = first;
    let mut upper = match policy {
        FrequencyPolicy::Clamped => last,
        FrequencyPolicy::Legacy => first,
    };

    for &v in values {
        if v <= query {
            lower = v;
        }
        if v >= query {
            upper = v;
            break;
        }
    }

    Bracket::new(lower, upper)
}

/// A bracket together with the query coordinate on the same monotonic
/// scale as the bounds.
///
/// On a linear axis the query is passed through unchanged; on a circular
/// axis it is unwrapped across the 0°/360° seam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBracket {
    pub bracket: Bracket,
    pub query: f64,
}

/// Brackets `query` (degrees, any range) on a circular axis.
///
/// The value list is walked as a cycle whose last element is followed by
/// `first + 360`. A query below the first value falls into the seam pair.
/// The returned bounds and query are unwrapped so that
/// `lower <= query <= upper` holds numerically.
pub fn circular_bracket(values: &[f64], query: f64) -> AxisBracket {
    let mut query = normalize_360(query);
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return AxisBracket {
            bracket: Bracket::new(query, query),
            query,
        };
    };

    let (lower, mut upper) = if values.len() == 1 {
        (first, first)
    } else {
        values
            .iter()
            .enumerate()
            .map(|(i, &current)| {
                let next = values.get(i + 1).copied().unwrap_or(first + FULL_TURN);
                (current, next)
            })
            .find(|&(current, next)| current <= query && query <= next)
            .unwrap_or((last, first))
    };

    if upper < lower {
        upper += FULL_TURN;
    }
    if query < lower {
        query += FULL_TURN;
    }

    AxisBracket {
        bracket: Bracket::new(lower, upper),
        query,
    }
}
