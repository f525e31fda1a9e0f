use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating equipment serial numbers
    /// Uppercase alphanumeric with hyphen separators
    /// - Valid: "CNC-2024-0042", "PUMP7", "A-1"
    /// - Invalid: "-CNC", "cnc-1", "CNC--1", "CNC 1"
    pub static ref SERIAL_NUMBER_REGEX: Regex = Regex::new(r"^[A-Z0-9]+(?:-[A-Z0-9]+)*$").unwrap();

    /// Regex for validating work center codes
    /// Lowercase alphanumeric with hyphens
    /// - Valid: "assembly-line-1", "paintshop", "wc-07"
    /// - Invalid: "-wc", "wc-", "wc--1", "WC", "wc_1"
    pub static ref WORK_CENTER_CODE_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_number_regex_valid() {
        assert!(SERIAL_NUMBER_REGEX.is_match("CNC-2024-0042"));
        assert!(SERIAL_NUMBER_REGEX.is_match("PUMP7"));
        assert!(SERIAL_NUMBER_REGEX.is_match("A-1"));
        assert!(SERIAL_NUMBER_REGEX.is_match("X"));
    }

    #[test]
    fn test_serial_number_regex_invalid() {
        assert!(!SERIAL_NUMBER_REGEX.is_match("-CNC")); // starts with hyphen
        assert!(!SERIAL_NUMBER_REGEX.is_match("CNC-")); // ends with hyphen
        assert!(!SERIAL_NUMBER_REGEX.is_match("CNC--1")); // double hyphen
        assert!(!SERIAL_NUMBER_REGEX.is_match("cnc-1")); // lowercase
        assert!(!SERIAL_NUMBER_REGEX.is_match("CNC 1")); // space
        assert!(!SERIAL_NUMBER_REGEX.is_match("")); // empty
    }

    #[test]
    fn test_work_center_code_regex_valid() {
        assert!(WORK_CENTER_CODE_REGEX.is_match("assembly-line-1"));
        assert!(WORK_CENTER_CODE_REGEX.is_match("paintshop"));
        assert!(WORK_CENTER_CODE_REGEX.is_match("wc-07"));
    }

    #[test]
    fn test_work_center_code_regex_invalid() {
        assert!(!WORK_CENTER_CODE_REGEX.is_match("-wc"));
        assert!(!WORK_CENTER_CODE_REGEX.is_match("wc-"));
        assert!(!WORK_CENTER_CODE_REGEX.is_match("wc--1"));
        assert!(!WORK_CENTER_CODE_REGEX.is_match("WC"));
        assert!(!WORK_CENTER_CODE_REGEX.is_match("wc_1"));
    }
}
