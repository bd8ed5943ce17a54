//! Tests for the currency registry and fee floors.

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::currencies::{
        amount_without_currency, currency_codes, is_fee_ok, supported_currencies, Currency,
        MIN_FEE_BEAM, SYMBOL_BTC,
    };
    use crate::errors::Error;

    // ==================== Registry Tests ====================

    #[test]
    fn test_supported_currencies_order() {
        assert_eq!(
            supported_currencies(),
            [Currency::Beam, Currency::Btc, Currency::Ltc, Currency::Qtum]
        );
        assert_eq!(currency_codes(), ["BEAM", "BTC", "LTC", "QTUM"]);
    }

    #[test]
    fn test_codes_match_display() {
        for currency in supported_currencies() {
            assert_eq!(currency.to_string(), currency.code());
        }
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Currency::Beam.symbol(), '\u{EAFB}');
        assert_eq!(Currency::Btc.symbol(), SYMBOL_BTC);
        assert_eq!(Currency::Ltc.symbol(), '\u{0141}');
        assert_eq!(Currency::Qtum.symbol(), '\u{EAFD}');
    }

    #[test]
    fn test_as_str_lowercase() {
        assert_eq!(Currency::Beam.as_str(), "beam");
        assert_eq!(Currency::Qtum.as_str(), "qtum");
    }

    // ==================== Parsing Tests ====================

    #[test]
    fn test_from_str_codes() {
        assert_eq!(Currency::from_str("BEAM").unwrap(), Currency::Beam);
        assert_eq!(Currency::from_str("btc").unwrap(), Currency::Btc);
        assert_eq!(Currency::from_str("Ltc").unwrap(), Currency::Ltc);
    }

    #[test]
    fn test_from_str_unknown_code() {
        let err = Currency::from_str("DOGE").unwrap_err();
        assert!(matches!(err, Error::UnsupportedCurrency(code) if code == "DOGE"));
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Currency::Beam).unwrap(), "\"BEAM\"");
        assert_eq!(
            serde_json::from_str::<Currency>("\"QTUM\"").unwrap(),
            Currency::Qtum
        );
    }

    // ==================== Amount String Tests ====================

    #[test]
    fn test_amount_without_currency() {
        assert_eq!(amount_without_currency("12.5 BEAM"), "12.5");
        assert_eq!(amount_without_currency("0.00000001 BTC"), "0.00000001");
    }

    #[test]
    fn test_amount_without_currency_no_suffix() {
        assert_eq!(amount_without_currency("12.5"), "12.5");
        assert_eq!(amount_without_currency(""), "");
    }

    // ==================== Fee Tests ====================

    #[test]
    fn test_fee_floor_boundaries() {
        assert!(is_fee_ok(MIN_FEE_BEAM, Currency::Beam));
        assert!(!is_fee_ok(MIN_FEE_BEAM - 1, Currency::Beam));
        assert!(is_fee_ok(1_000, Currency::Btc));
        assert!(!is_fee_ok(999, Currency::Qtum));
    }

    #[test]
    fn test_default_fee_meets_floor() {
        for currency in supported_currencies() {
            assert!(is_fee_ok(currency.default_fee(), currency));
        }
    }

    #[test]
    fn test_fee_rate_labels() {
        assert_eq!(Currency::Beam.fee_rate_label(), "GROTH");
        assert_eq!(Currency::Btc.fee_rate_label(), "sat/kB");
    }
}
