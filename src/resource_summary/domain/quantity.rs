//! Resource quantity parsing.
//!
//! Parses Kubernetes resource quantities ("500m", "1.5", "2Gi", "1e3") with
//! exact integer arithmetic and normalizes them to milli-CPU units, bytes
//! or mebibytes.

use crate::shared::error::ManifestError;
use crate::shared::ManifestResult;
use regex::Regex;
use std::sync::LazyLock;

const BYTES_PER_MIB: u64 = 1024 * 1024;

/// Largest power of ten that fits in a u128 (10^38).
const MAX_POW10: u32 = 38;

/// sign, number, then either a decimal exponent or a suffix
static QUANTITY_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^([+-]?)(?:(\d+)(?:\.(\d*))?|\.(\d+))(?:[eE]([+-]?\d+)|(Ki|Mi|Gi|Ti|Pi|Ei|n|u|m|k|K|M|G|T|P|E))?$",
    )
    .expect("quantity grammar is a valid regex")
});

/// A parsed quantity: `mantissa * 10^exponent * multiplier`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quantity {
    text: String,
    mantissa: u128,
    exponent: i32,
    multiplier: u128,
}

impl Quantity {
    /// Parses a quantity string.
    ///
    /// # Errors
    /// Returns `ManifestError::QuantityParse` for anything outside the
    /// quantity grammar, for negative values and for numbers too large to
    /// represent.
    pub fn parse(text: &str) -> ManifestResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ManifestError::quantity(text, "empty quantity"));
        }

        let caps = QUANTITY_REGEX
            .captures(trimmed)
            .ok_or_else(|| ManifestError::quantity(text, "does not match the quantity grammar"))?;

        if caps.get(1).map(|m| m.as_str()) == Some("-") {
            return Err(ManifestError::quantity(
                text,
                "negative quantities are not supported",
            ));
        }

        let integer = caps.get(2).map(|m| m.as_str()).unwrap_or("");
        let fraction = caps
            .get(3)
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or("")
            .trim_end_matches('0');

        let digits = format!("{}{}", integer, fraction);
        let significant = digits.trim_start_matches('0');
        if significant.len() > MAX_POW10 as usize {
            return Err(ManifestError::quantity(text, "value is out of range"));
        }
        let mantissa: u128 = if significant.is_empty() {
            0
        } else {
            significant
                .parse()
                .map_err(|_| ManifestError::quantity(text, "value is out of range"))?
        };

        let mut exponent = -(fraction.len() as i32);
        let mut multiplier: u128 = 1;

        if let Some(exp) = caps.get(5) {
            let exp: i32 = exp
                .as_str()
                .parse()
                .map_err(|_| ManifestError::quantity(text, "exponent is out of range"))?;
            exponent = exponent
                .checked_add(exp)
                .ok_or_else(|| ManifestError::quantity(text, "exponent is out of range"))?;
        }

        if let Some(suffix) = caps.get(6) {
            let (exp, mult) = suffix_scale(suffix.as_str());
            exponent = exponent.saturating_add(exp);
            multiplier = mult;
        }

        Ok(Self {
            text: text.to_string(),
            mantissa,
            exponent,
            multiplier,
        })
    }

    /// Value in thousandths, rounded up to the next whole unit.
    pub fn milli_value(&self) -> ManifestResult<u64> {
        self.scaled(3)
    }

    /// Value in whole units, rounded up.
    pub fn value(&self) -> ManifestResult<u64> {
        self.scaled(0)
    }

    fn scaled(&self, extra_exponent: i32) -> ManifestResult<u64> {
        let out_of_range = || ManifestError::quantity(&self.text, "value is out of range");

        let base = self
            .mantissa
            .checked_mul(self.multiplier)
            .ok_or_else(out_of_range)?;
        let exponent = self.exponent.saturating_add(extra_exponent);

        let result = if base == 0 {
            0
        } else if exponent >= 0 {
            let exponent = exponent as u32;
            if exponent > MAX_POW10 {
                return Err(out_of_range());
            }
            base.checked_mul(10u128.pow(exponent))
                .ok_or_else(out_of_range)?
        } else {
            let exponent = exponent.unsigned_abs();
            if exponent > MAX_POW10 {
                1
            } else {
                let divisor = 10u128.pow(exponent);
                base / divisor + u128::from(base % divisor != 0)
            }
        };

        u64::try_from(result).map_err(|_| out_of_range())
    }
}

/// Decimal exponent and binary multiplier for a quantity suffix
fn suffix_scale(suffix: &str) -> (i32, u128) {
    match suffix {
        "n" => (-9, 1),
        "u" => (-6, 1),
        "m" => (-3, 1),
        "k" | "K" => (3, 1),
        "M" => (6, 1),
        "G" => (9, 1),
        "T" => (12, 1),
        "P" => (15, 1),
        "E" => (18, 1),
        "Ki" => (0, 1 << 10),
        "Mi" => (0, 1 << 20),
        "Gi" => (0, 1 << 30),
        "Ti" => (0, 1 << 40),
        "Pi" => (0, 1 << 50),
        "Ei" => (0, 1 << 60),
        _ => (0, 1),
    }
}

/// Normalizes a CPU quantity to milli-CPU units; absent values count as 0.
///
/// # Examples
/// - `"500m"` -> 500
/// - `"2"` -> 2000
/// - `"0.25"` -> 250
pub fn normalize_cpu(value: Option<&str>) -> ManifestResult<u64> {
    match value {
        None => Ok(0),
        Some(text) => Quantity::parse(text)?.milli_value(),
    }
}

/// Normalizes a memory quantity to whole mebibytes, truncating any remainder;
/// absent values count as 0.
///
/// # Examples
/// - `"128Mi"` -> 128
/// - `"1Gi"` -> 1024
/// - `"1G"` -> 953
pub fn normalize_memory(value: Option<&str>) -> ManifestResult<u64> {
    match value {
        None => Ok(0),
        Some(text) => Ok(normalize_bytes(text)? / BYTES_PER_MIB),
    }
}

/// Normalizes a byte quantity to bytes, rounding up to a whole byte.
pub fn normalize_bytes(value: &str) -> ManifestResult<u64> {
    Quantity::parse(value)?.value()
}

/// Renders a byte count with the largest binary suffix that divides it exactly.
///
/// # Examples
/// - 6442450944 -> "6Gi"
/// - 1536 -> "1536"
pub fn format_bytes(bytes: u64) -> String {
    const SUFFIXES: [(&str, u64); 6] = [
        ("Ei", 1 << 60),
        ("Pi", 1 << 50),
        ("Ti", 1 << 40),
        ("Gi", 1 << 30),
        ("Mi", 1 << 20),
        ("Ki", 1 << 10),
    ];

    if bytes == 0 {
        return "0".to_string();
    }

    SUFFIXES
        .iter()
        .find(|(_, unit)| bytes % unit == 0)
        .map(|(suffix, unit)| format!("{}{}", bytes / unit, suffix))
        .unwrap_or_else(|| bytes.to_string())
}
