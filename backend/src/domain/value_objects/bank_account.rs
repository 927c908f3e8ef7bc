use serde::{Deserialize, Serialize};

/// Gift account shown on the public invitation page.
///
/// The BIN is only shape-checked here; whether it belongs to a known bank
/// is decided against the bank directory when the host saves the wedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankAccount {
    bin: String,
    number: String,
    holder: String,
}

impl BankAccount {
    pub fn new(bin: String, number: String, holder: String) -> Result<Self, String> {
        if bin.len() != 6 || !bin.chars().all(|c| c.is_ascii_digit()) {
            return Err("Bank BIN must be exactly 6 digits".to_string());
        }
        let number = number.replace(' ', "");
        if number.len() < 6 || number.len() > 19 {
            return Err("Account number must be between 6 and 19 digits".to_string());
        }
        if !number.chars().all(|c| c.is_ascii_digit()) {
            return Err("Account number may only contain digits".to_string());
        }
        let holder = holder.trim().to_string();
        if holder.is_empty() {
            return Err("Account holder cannot be empty".to_string());
        }
        Ok(Self { bin, number, holder })
    }

    pub fn bin(&self) -> &str {
        &self.bin
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn holder(&self) -> &str {
        &self.holder
    }

    /// Account number in display form, digits grouped by four:
    /// `9704221101234567` renders as `9704 2211 0123 4567`.
    pub fn grouped_number(&self) -> String {
        let digits: Vec<char> = self.number.chars().collect();
        digits
            .chunks(4)
            .map(|chunk| chunk.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_grouped_number_full_groups() {
        let acc = BankAccount::new(
            "970436".to_string(),
            "9704221101234567".to_string(),
            "NGUYEN VAN AN".to_string(),
        )
        .unwrap();
        assert_eq!(acc.grouped_number(), "9704 2211 0123 4567");
    }

    #[test]
    fn test_grouped_number_partial_tail() {
        let acc = BankAccount::new(
            "970436".to_string(),
            "123456789".to_string(),
            "NGUYEN VAN AN".to_string(),
        )
        .unwrap();
        assert_eq!(acc.grouped_number(), "1234 5678 9");
    }

    #[test]
    fn test_spaces_in_number_are_normalized() {
        let acc = BankAccount::new(
            "970436".to_string(),
            "1234 5678 90".to_string(),
            "NGUYEN VAN AN".to_string(),
        )
        .unwrap();
        assert_eq!(acc.number(), "1234567890");
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(BankAccount::new("9704".into(), "123456".into(), "A".into()).is_err());
        assert!(BankAccount::new("970436".into(), "12345".into(), "A".into()).is_err());
        assert!(BankAccount::new("970436".into(), "12a456".into(), "A".into()).is_err());
        assert!(BankAccount::new("970436".into(), "123456".into(), "   ".into()).is_err());
    }

    proptest! {
        #[test]
        fn grouping_preserves_digits(number in "[0-9]{6,19}") {
            let acc = BankAccount::new(
                "970436".to_string(),
                number.clone(),
                "NGUYEN VAN AN".to_string(),
            )
            .unwrap();
            let grouped = acc.grouped_number();
            let ungrouped: String = grouped.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(ungrouped, number);
            for group in grouped.split(' ') {
                prop_assert!(group.len() <= 4 && !group.is_empty());
            }
        }
    }
}
