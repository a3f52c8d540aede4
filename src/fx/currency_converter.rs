use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

/// Converts currency amounts to their USD equivalent using a fixed rate table.
///
/// An unknown currency falls back to a rate of 1.0 rather than erroring, so
/// callers never have to handle a conversion failure.
pub struct CurrencyConverter {
    rates: HashMap<String, Decimal>,
}

impl CurrencyConverter {
    /// Creates a converter backed by the built-in currency table.
    pub fn new() -> Self {
        let rates = HashMap::from([
            ("USD".to_string(), dec!(1.00)),
            ("EUR".to_string(), dec!(1.09)),
            ("PLN".to_string(), dec!(0.25)),
            ("RUB".to_string(), dec!(0.011)),
        ]);
        Self { rates }
    }

    /// Creates a converter from a caller-supplied currency -> USD rate table.
    pub fn with_rates(rates: HashMap<String, Decimal>) -> Self {
        Self { rates }
    }

    /// USD rate for a currency; unknown codes resolve to 1.0.
    pub fn rate(&self, currency: &str) -> Decimal {
        self.rates.get(currency).copied().unwrap_or(Decimal::ONE)
    }

    /// Converts an amount denominated in `currency` to USD.
    pub fn to_usd(&self, amount: Decimal, currency: &str) -> Decimal {
        amount * self.rate(currency)
    }
}

impl Default for CurrencyConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usd_is_identity() {
        let converter = CurrencyConverter::new();
        assert_eq!(converter.to_usd(dec!(2500), "USD"), dec!(2500));
    }

    #[test]
    fn test_known_currency_conversion() {
        let converter = CurrencyConverter::new();
        assert_eq!(converter.to_usd(dec!(1000), "EUR"), dec!(1090.00));
        assert_eq!(converter.to_usd(dec!(20000), "PLN"), dec!(5000.00));
    }

    #[test]
    fn test_unknown_currency_falls_back_to_one() {
        let converter = CurrencyConverter::new();
        assert_eq!(converter.rate("XYZ"), Decimal::ONE);
        assert_eq!(converter.to_usd(dec!(42), "XYZ"), dec!(42));
    }

    #[test]
    fn test_custom_rate_table() {
        let converter = CurrencyConverter::with_rates(HashMap::from([(
            "GBP".to_string(),
            dec!(1.27),
        )]));
        assert_eq!(converter.to_usd(dec!(100), "GBP"), dec!(127.00));
        // The custom table replaces the built-in one entirely.
        assert_eq!(converter.rate("EUR"), Decimal::ONE);
    }
}
