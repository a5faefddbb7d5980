//! Parsing of unit symbols and measures like "5 km" or "-40°F"

use measures_core::ConversionError;
use crate::{Measure, Unit};
use crate::units::UNITS;

/// Look up a standard unit by symbol or alias
pub fn parse_unit(s: &str) -> Result<Unit, ConversionError> {
    let s = s.trim();
    UNITS.get(s)
        .cloned()
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

/// Parse a conversion string like "km->NM", "°C → °F" or "ft to m"
pub fn parse_conversion(s: &str) -> Result<(Unit, Unit), ConversionError> {
    let parts: Vec<&str> = if s.contains("->") {
        s.split("->").collect()
    } else if s.contains('→') {
        s.split('→').collect()
    } else if s.contains(" to ") {
        s.split(" to ").collect()
    } else if s.contains(" in ") {
        s.split(" in ").collect()
    } else {
        return Err(ConversionError::InvalidMeasure(
            format!("invalid conversion format: {}, expected 'unit1->unit2'", s)
        ));
    };

    if parts.len() != 2 {
        return Err(ConversionError::InvalidMeasure(
            format!("invalid conversion format: {}, expected 'unit1->unit2'", s)
        ));
    }

    Ok((parse_unit(parts[0])?, parse_unit(parts[1])?))
}

/// Parse a measure like "5 m", "1.5e3m" or "-40°F"
pub fn parse_measure(s: &str) -> Result<Measure, ConversionError> {
    let s = s.trim();

    // The number is the longest leading run of numeric characters
    let split_pos = s.char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')))
        .map(|(i, _)| i)
        .unwrap_or(s.len());

    let num_str = &s[..split_pos];
    let unit_str = s[split_pos..].trim();

    if num_str.is_empty() {
        return Err(ConversionError::InvalidMeasure(format!("no number found in: {}", s)));
    }
    if unit_str.is_empty() {
        return Err(ConversionError::InvalidMeasure(format!("no unit found in: {}", s)));
    }

    let quantity: f64 = num_str.parse()
        .map_err(|_| ConversionError::InvalidMeasure(format!("invalid number: {}", num_str)))?;

    Ok(Measure::new(quantity, parse_unit(unit_str)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;

    #[test]
    fn test_parse_simple_unit() {
        assert_eq!(parse_unit("m").unwrap(), *METRE);
        assert_eq!(parse_unit(" km ").unwrap(), *KILOMETRE);
    }

    #[test]
    fn test_alias_lookup() {
        assert_eq!(parse_unit("meter").unwrap(), *METRE);
        assert_eq!(parse_unit("nmi").unwrap(), *NAUTICAL_MILE);
        assert_eq!(parse_unit("fahrenheit").unwrap(), *DEGREES_FAHRENHEIT);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(
            parse_unit("furlong"),
            Err(ConversionError::UnknownUnit("furlong".to_string()))
        );
    }

    #[test]
    fn test_parse_conversion() {
        let (from, to) = parse_conversion("km->NM").unwrap();
        assert_eq!(from, *KILOMETRE);
        assert_eq!(to, *NAUTICAL_MILE);

        let (from, to) = parse_conversion("C→F").unwrap();
        assert_eq!(from, *DEGREES_CELSIUS);
        assert_eq!(to, *DEGREES_FAHRENHEIT);

        let (from, to) = parse_conversion("feet to metres").unwrap();
        assert_eq!(from, *FOOT);
        assert_eq!(to, *METRE);

        assert!(parse_conversion("km").is_err());
        assert!(parse_conversion("km->m->cm").is_err());
    }

    #[test]
    fn test_parse_measure() {
        let m = parse_measure("5 m").unwrap();
        assert_eq!(m.quantity(), 5.0);
        assert_eq!(m.unit(), &*METRE);

        let m = parse_measure("100lb").unwrap();
        assert_eq!(m.quantity(), 100.0);
        assert_eq!(m.unit(), &*POUND);

        let m = parse_measure("-40°F").unwrap();
        assert_eq!(m.quantity(), -40.0);
        assert_eq!(m.unit(), &*DEGREES_FAHRENHEIT);

        let m = parse_measure("1.5e3 m").unwrap();
        assert_eq!(m.quantity(), 1500.0);
    }

    #[test]
    fn test_parse_measure_errors() {
        assert!(matches!(parse_measure("km"), Err(ConversionError::InvalidMeasure(_))));
        assert!(matches!(parse_measure("42"), Err(ConversionError::InvalidMeasure(_))));
        assert!(matches!(parse_measure("1.2.3 m"), Err(ConversionError::InvalidMeasure(_))));
        assert!(matches!(parse_measure("3 parsecs"), Err(ConversionError::UnknownUnit(_))));
    }
}
