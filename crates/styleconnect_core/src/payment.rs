//! crates/styleconnect_core/src/payment.rs
//!
//! Shape checks for the payment part of the booking form. Nothing is charged and no
//! checksum is applied; the checks only catch obviously malformed input.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::PaymentMethod;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub name: String,
    pub expiry: String,
    pub cvc: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    pub method: PaymentMethod,
    pub card: Option<CardDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaymentError {
    #[error("Please fill in all payment details")]
    MissingDetails,
    #[error("Please enter a valid 16-digit card number")]
    CardNumber,
    #[error("Please enter a valid expiry date (MM/YY)")]
    Expiry,
    #[error("Please enter a valid 3-digit CVC")]
    Cvc,
}

lazy_static! {
    static ref CARD_NUMBER_RE: Regex = Regex::new(r"^\d{16}$").unwrap();
    static ref EXPIRY_RE: Regex = Regex::new(r"^(0[1-9]|1[0-2])/\d{2}$").unwrap();
    static ref CVC_RE: Regex = Regex::new(r"^\d{3}$").unwrap();
}

impl CardDetails {
    pub fn validate(&self) -> Result<(), PaymentError> {
        if [&self.number, &self.name, &self.expiry, &self.cvc]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(PaymentError::MissingDetails);
        }

        let digits: String = self.number.chars().filter(|c| !c.is_whitespace()).collect();
        if !CARD_NUMBER_RE.is_match(&digits) {
            return Err(PaymentError::CardNumber);
        }
        if !EXPIRY_RE.is_match(&self.expiry) {
            return Err(PaymentError::Expiry);
        }
        if !CVC_RE.is_match(&self.cvc) {
            return Err(PaymentError::Cvc);
        }
        Ok(())
    }
}

impl PaymentDetails {
    pub fn paypal() -> Self {
        Self {
            method: PaymentMethod::PayPal,
            card: None,
        }
    }

    pub fn card(card: CardDetails) -> Self {
        Self {
            method: PaymentMethod::CreditCard,
            card: Some(card),
        }
    }

    /// PayPal needs no further input; cards must pass `CardDetails::validate`.
    pub fn validate(&self) -> Result<(), PaymentError> {
        match self.method {
            PaymentMethod::PayPal => Ok(()),
            PaymentMethod::CreditCard => self
                .card
                .as_ref()
                .ok_or(PaymentError::MissingDetails)?
                .validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardDetails {
        CardDetails {
            number: "4242 4242 4242 4242".into(),
            name: "Jane Doe".into(),
            expiry: "09/27".into(),
            cvc: "123".into(),
        }
    }

    #[test]
    fn accepts_spaced_card_number() {
        assert_eq!(PaymentDetails::card(card()).validate(), Ok(()));
    }

    #[test]
    fn paypal_needs_no_card() {
        assert_eq!(PaymentDetails::paypal().validate(), Ok(()));
    }

    #[test]
    fn missing_card_or_blank_field_is_missing_details() {
        let no_card = PaymentDetails {
            method: PaymentMethod::CreditCard,
            card: None,
        };
        assert_eq!(no_card.validate(), Err(PaymentError::MissingDetails));

        let blank_name = CardDetails {
            name: " ".into(),
            ..card()
        };
        assert_eq!(blank_name.validate(), Err(PaymentError::MissingDetails));
    }

    #[test]
    fn rejects_malformed_fields() {
        let short = CardDetails {
            number: "4242 4242 4242".into(),
            ..card()
        };
        assert_eq!(short.validate(), Err(PaymentError::CardNumber));

        let letters = CardDetails {
            number: "4242 4242 4242 424x".into(),
            ..card()
        };
        assert_eq!(letters.validate(), Err(PaymentError::CardNumber));

        for expiry in ["9/27", "13/27", "0927", "09-27"] {
            let bad = CardDetails {
                expiry: expiry.into(),
                ..card()
            };
            assert_eq!(bad.validate(), Err(PaymentError::Expiry), "{expiry}");
        }

        let cvc = CardDetails {
            cvc: "12a".into(),
            ..card()
        };
        assert_eq!(cvc.validate(), Err(PaymentError::Cvc));
    }

    #[test]
    fn no_checksum_is_applied() {
        let arbitrary = CardDetails {
            number: "1234567812345678".into(),
            ..card()
        };
        assert_eq!(arbitrary.validate(), Ok(()));
    }
}
