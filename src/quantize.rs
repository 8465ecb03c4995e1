/*
Remapping Quantizer
===================

A quantizer snaps a continuous reading onto a small set of allowed values.
Here the lattice is a table of 16 output tones and 17 boundaries:

    thresholds:  t0    t1    t2   ...   t15   t16
                 |-----|-----|--- ... ---|-----|
    tone:          0     1         ...     15

Tone `i` owns the half-open interval [t(i), t(i+1)). Readings below t0 clamp
to tone 0 and readings at or above t16 clamp to tone 15, so every input maps
to some tone and the adjacent intervals never overlap or leave gaps.

The boundaries must be strictly increasing, which `QuantizationTable::new`
enforces. Lookup is a linear scan; with 16 entries that beats a binary search
in practice and keeps the code obvious.
*/

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Number of output tones in a table.
pub const TONE_COUNT: usize = 16;

/// Number of interval boundaries (one more than tones).
pub const THRESHOLD_COUNT: usize = TONE_COUNT + 1;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTable", into = "RawTable"))]
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizationTable {
    remaps: [f32; TONE_COUNT],
    thresholds: [f32; THRESHOLD_COUNT],
}

impl QuantizationTable {
    /// Build a table, rejecting non-finite or non-increasing boundaries.
    pub fn new(remaps: [f32; TONE_COUNT], thresholds: [f32; THRESHOLD_COUNT]) -> Result<Self> {
        for (index, threshold) in thresholds.iter().enumerate() {
            if !threshold.is_finite() {
                return Err(Error::NonFiniteThreshold { index });
            }
        }

        for (index, pair) in thresholds.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(Error::NonIncreasingThresholds {
                    index,
                    lower: pair[0],
                    upper: pair[1],
                });
            }
        }

        Ok(Self { remaps, thresholds })
    }

    pub fn remaps(&self) -> &[f32; TONE_COUNT] {
        &self.remaps
    }

    pub fn thresholds(&self) -> &[f32; THRESHOLD_COUNT] {
        &self.thresholds
    }
}

impl Default for QuantizationTable {
    /// Tones 0..=15 over frequency boundaries from 220 Hz to 630 Hz.
    fn default() -> Self {
        Self {
            remaps: [
                0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0,
                15.0,
            ],
            thresholds: [
                220.0, 240.0, 270.0, 290.0, 320.0, 340.0, 380.0, 390.0, 460.0, 480.0, 500.0,
                530.0, 550.0, 585.0, 600.0, 610.0, 630.0,
            ],
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawTable {
    remaps: [f32; TONE_COUNT],
    thresholds: [f32; THRESHOLD_COUNT],
}

#[cfg(feature = "serde")]
impl TryFrom<RawTable> for QuantizationTable {
    type Error = Error;

    fn try_from(raw: RawTable) -> Result<Self> {
        QuantizationTable::new(raw.remaps, raw.thresholds)
    }
}

#[cfg(feature = "serde")]
impl From<QuantizationTable> for RawTable {
    fn from(table: QuantizationTable) -> Self {
        Self {
            remaps: table.remaps,
            thresholds: table.thresholds,
        }
    }
}

pub struct Quantizer {
    table: QuantizationTable,
}

impl Quantizer {
    pub fn new(table: QuantizationTable) -> Self {
        Self { table }
    }

    /// Tone value for `input`.
    #[inline]
    pub fn remap(&self, input: f32) -> f32 {
        self.table.remaps[self.find_mapping(input)]
    }

    /// Index of the interval containing `input`, clamped to the table ends.
    /// NaN maps to 0.
    pub fn find_mapping(&self, input: f32) -> usize {
        let thresholds = &self.table.thresholds;

        if input.is_nan() || input < thresholds[0] {
            return 0;
        }
        if input >= thresholds[THRESHOLD_COUNT - 1] {
            return TONE_COUNT - 1;
        }

        thresholds
            .windows(2)
            .position(|bounds| input >= bounds[0] && input < bounds[1])
            .unwrap_or(TONE_COUNT - 1)
    }

    pub fn table(&self) -> &QuantizationTable {
        &self.table
    }
}

impl Default for Quantizer {
    fn default() -> Self {
        Self::new(QuantizationTable::default())
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn table_round_trips_through_json() {
        let table = QuantizationTable::default();
        let json = serde_json::to_string(&table).unwrap();
        let parsed: QuantizationTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }

    #[test]
    fn non_increasing_table_is_rejected() {
        let table = QuantizationTable::default();
        let mut thresholds = *table.thresholds();
        thresholds[5] = thresholds[4];

        let json = serde_json::json!({
            "remaps": table.remaps(),
            "thresholds": thresholds,
        })
        .to_string();

        let err = serde_json::from_str::<QuantizationTable>(&json).unwrap_err();
        assert!(err.to_string().contains("strictly increasing"), "{err}");
    }
}
