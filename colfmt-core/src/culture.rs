//! Culture-specific number conventions
//!
//! Only the handful of cultures the custom formats need. Each one fixes a
//! currency symbol and a group separator; a negative amount is always
//! written with the sign ahead of the symbol (`-£1,235`).

use crate::number::{group_digits, Number};
use serde::Serialize;

/// Number formatting conventions of a named culture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Culture {
    pub name: &'static str,
    pub currency_symbol: &'static str,
    pub group_separator: char,
}

impl Culture {
    pub const EN_GB: Culture = Culture {
        name: "en-GB",
        currency_symbol: "£",
        group_separator: ',',
    };

    /// Half-width yen sign (U+00A5), as the Windows NLS culture data
    /// renders it. ICU-based runtimes use the full-width `￥` (U+FFE5).
    pub const JA_JP: Culture = Culture {
        name: "ja-JP",
        currency_symbol: "¥",
        group_separator: ',',
    };

    pub const INVARIANT: Culture = Culture {
        name: "invariant",
        currency_symbol: "¤",
        group_separator: ',',
    };

    /// Whole-unit currency, e.g. `£1,235` for 1234.5 under en-GB
    pub fn format_currency_whole(&self, amount: &Number) -> String {
        let (negative, grouped) = self.whole_digits(amount, 1);
        if negative {
            format!("-{}{}", self.currency_symbol, grouped)
        } else {
            format!("{}{}", self.currency_symbol, grouped)
        }
    }

    /// Whole number with group separators and at least `min_digits`
    /// integer digits, e.g. `05` or `1,234,567`
    pub fn format_grouped_whole(&self, amount: &Number, min_digits: usize) -> String {
        let (negative, grouped) = self.whole_digits(amount, min_digits);
        if negative {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }

    /// Sign and grouped magnitude of the amount rounded half away from zero.
    /// A result of zero is never negative.
    fn whole_digits(&self, amount: &Number, min_digits: usize) -> (bool, String) {
        let rounded = amount.round_half_away();
        let negative = rounded < dashu_int::IBig::ZERO;
        let magnitude = if negative { -rounded } else { rounded };
        (negative, group_digits(&magnitude.to_string(), self.group_separator, min_digits))
    }
}
