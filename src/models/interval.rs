//! Interval input: monzo notation or a frequency ratio.

use kite_color::primes::PrimeCache;
use kite_color::Monzo;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ratios are factored over primes up to this bound
pub const PRIME_LIMIT: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntervalError {
    #[error("Empty interval")]
    Empty,

    #[error("Invalid monzo exponent '{0}'")]
    Exponent(String),

    #[error("Invalid ratio '{0}'")]
    Ratio(String),

    #[error("Ratio must be positive: {0}")]
    NonPositive(String),

    #[error("{value} has a prime factor above {limit}")]
    PrimeTooLarge { value: u64, limit: u64 },
}

/// An interval as typed by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Interval {
    /// `[1 0 1 -1>`, `[1, 0, 1, -1]` or `1,0,1,-1`
    Monzo { exponents: Vec<i32> },
    /// `10/7` or `5`
    Ratio { numerator: u64, denominator: u64 },
}

impl Interval {
    /// Monzo of this interval, trailing zeros kept as typed for monzo input
    pub fn to_monzo(&self) -> Result<Monzo, IntervalError> {
        match self {
            Interval::Monzo { exponents } => Ok(Monzo::new(exponents.clone())),
            Interval::Ratio {
                numerator,
                denominator,
            } => factor_ratio(*numerator, *denominator),
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interval::Monzo { exponents } => {
                write!(f, "{}", Monzo::from(exponents.as_slice()))
            }
            Interval::Ratio {
                numerator,
                denominator,
            } => write!(f, "{numerator}/{denominator}"),
        }
    }
}

impl FromStr for Interval {
    type Err = IntervalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(IntervalError::Empty);
        }

        if s.starts_with('[') || s.contains(',') {
            return parse_monzo(s);
        }

        let (numerator, denominator) = parse_fraction(s)?;
        Ok(Interval::Ratio {
            numerator,
            denominator,
        })
    }
}

fn parse_monzo(s: &str) -> Result<Interval, IntervalError> {
    let body = s.strip_prefix('[').unwrap_or(s);
    let body = body
        .strip_suffix('>')
        .or_else(|| body.strip_suffix('⟩'))
        .or_else(|| body.strip_suffix(']'))
        .unwrap_or(body);

    let exponents = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i32>()
                .map_err(|_| IntervalError::Exponent(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Interval::Monzo { exponents })
}

/// Parse `n/d` or `n` into positive integers
pub fn parse_fraction(s: &str) -> Result<(u64, u64), IntervalError> {
    let s = s.trim();
    let (num, den) = match s.split_once('/') {
        Some((num, den)) => (num.trim(), den.trim()),
        None => (s, "1"),
    };
    if num.starts_with('-') || den.starts_with('-') {
        return Err(IntervalError::NonPositive(s.to_string()));
    }
    let numerator: u64 = num
        .parse()
        .map_err(|_| IntervalError::Ratio(s.to_string()))?;
    let denominator: u64 = den
        .parse()
        .map_err(|_| IntervalError::Ratio(s.to_string()))?;
    if numerator == 0 || denominator == 0 {
        return Err(IntervalError::NonPositive(s.to_string()));
    }
    Ok((numerator, denominator))
}

/// Factor `numerator / denominator` into a monzo over primes up to [`PRIME_LIMIT`]
pub fn factor_ratio(numerator: u64, denominator: u64) -> Result<Monzo, IntervalError> {
    if numerator == 0 || denominator == 0 {
        return Err(IntervalError::NonPositive(format!("{numerator}/{denominator}")));
    }

    let mut primes = PrimeCache::new();
    let mut exponents = Vec::new();
    let mut num = numerator;
    let mut den = denominator;

    let mut index = 1;
    while num > 1 || den > 1 {
        let prime = primes
            .get(index)
            .map_err(|_| IntervalError::Ratio(format!("{numerator}/{denominator}")))?;
        if prime > PRIME_LIMIT {
            let value = if num > 1 { num } else { den };
            return Err(IntervalError::PrimeTooLarge {
                value,
                limit: PRIME_LIMIT,
            });
        }

        let mut exponent = 0i32;
        while num % prime == 0 {
            num /= prime;
            exponent += 1;
        }
        while den % prime == 0 {
            den /= prime;
            exponent -= 1;
        }
        exponents.push(exponent);
        index += 1;
    }

    Ok(Monzo::new(exponents).trimmed())
}
