//! Locale-aware currency formatting
//!
//! A `CurrencyFormatter` pairs a locale with a currency and turns a decimal
//! major-unit value into display text such as `$1,730.00` or `1.730,00 €`.
//! The locale only selects separators and symbol placement; the number of
//! fraction digits always comes from the currency.

use rust_decimal::{Decimal, RoundingStrategy};
use unic_langid::{langid, LanguageIdentifier};

use crate::error::CoreError;
use crate::money::{Currency, Money, MoneyError};

/// Where the currency symbol sits relative to the number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `$1,730.00`
    Prefix,
    /// `1.730,00 €`
    Suffix,
}

/// Separator and symbol conventions of a locale
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberConventions {
    pub grouping_separator: char,
    pub decimal_separator: char,
    pub symbol_position: SymbolPosition,
}

impl NumberConventions {
    /// Conventions used by English and East-Asian locales
    pub const ENGLISH: Self = Self {
        grouping_separator: ',',
        decimal_separator: '.',
        symbol_position: SymbolPosition::Prefix,
    };

    /// Conventions used by most continental European locales
    pub const CONTINENTAL: Self = Self {
        grouping_separator: '.',
        decimal_separator: ',',
        symbol_position: SymbolPosition::Suffix,
    };

    /// French groups with a narrow no-break space
    pub const FRENCH: Self = Self {
        grouping_separator: '\u{202f}',
        decimal_separator: ',',
        symbol_position: SymbolPosition::Suffix,
    };

    /// Picks conventions from the language subtag, falling back to English
    pub fn for_locale(locale: &LanguageIdentifier) -> Self {
        match locale.language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" => Self::CONTINENTAL,
            "fr" => Self::FRENCH,
            _ => Self::ENGLISH,
        }
    }
}

/// Formats decimal amounts as currency text for one locale
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormatter {
    locale: LanguageIdentifier,
    currency: Currency,
    conventions: NumberConventions,
}

impl CurrencyFormatter {
    /// Creates a formatter for the given locale and currency
    pub fn new(locale: LanguageIdentifier, currency: Currency) -> Self {
        let conventions = NumberConventions::for_locale(&locale);
        Self {
            locale,
            currency,
            conventions,
        }
    }

    /// Creates a formatter from a BCP 47 tag such as `"de-DE"`
    pub fn from_tag(tag: &str, currency: Currency) -> Result<Self, CoreError> {
        let locale: LanguageIdentifier = tag
            .parse()
            .map_err(|e| CoreError::configuration(format!("Invalid locale '{}': {}", tag, e)))?;
        Ok(Self::new(locale, currency))
    }

    /// US English with US dollars
    pub fn us_dollars() -> Self {
        Self::new(langid!("en-US"), Currency::USD)
    }

    /// Returns the locale
    pub fn locale(&self) -> &LanguageIdentifier {
        &self.locale
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the separator conventions in use
    pub fn conventions(&self) -> NumberConventions {
        self.conventions
    }

    /// Formats a major-unit amount
    pub fn format(&self, amount: Decimal) -> String {
        let dp = self.currency.decimal_places();
        let rounded = amount.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.dp$}", rounded.abs(), dp = dp as usize);

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut number = group_digits(whole, self.conventions.grouping_separator);
        if let Some(fraction) = fraction {
            number.push(self.conventions.decimal_separator);
            number.push_str(fraction);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        let symbol = self.currency.symbol();

        match self.conventions.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{}", sign, symbol, number),
            SymbolPosition::Suffix => format!("{}{} {}", sign, number, symbol),
        }
    }

    /// Formats a money value, rejecting amounts in a different currency
    pub fn format_money(&self, money: &Money) -> Result<String, MoneyError> {
        if money.currency() != self.currency {
            return Err(MoneyError::CurrencyMismatch(
                self.currency.to_string(),
                money.currency().to_string(),
            ));
        }
        Ok(self.format(money.amount()))
    }
}

impl Default for CurrencyFormatter {
    fn default() -> Self {
        Self::us_dollars()
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3 * separator.len_utf8());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
