//! Brazilian taxpayer documents
//!
//! CPF (individuals, 11 digits) and CNPJ (companies, 14 digits) both end in
//! two verifier digits. Formatting characters are ignored, so
//! `"891.595.290-16"` and `"89159529016"` are the same document.

use std::fmt;
use std::str::FromStr;

use super::string::text;
use crate::error::{CheckError, Result};
use crate::value::Value;

const CPF_WEIGHTS: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Document kinds accepted by [`is_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Document {
    /// Cadastro de Pessoas Físicas.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica.
    Cnpj,
}

impl Document {
    /// Upper-case tag, `"CPF"` or `"CNPJ"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Document::Cpf => "CPF",
            Document::Cnpj => "CNPJ",
        }
    }

    /// Weight table for the second verifier digit. The first verifier uses
    /// the same table without its leading weight.
    fn weights(self) -> &'static [u32] {
        match self {
            Document::Cpf => &CPF_WEIGHTS,
            Document::Cnpj => &CNPJ_WEIGHTS,
        }
    }

    fn len(self) -> usize {
        self.weights().len() + 1
    }

    /// Checksum validation of already-extracted digits.
    fn verify(self, digits: &[u32]) -> bool {
        if digits.len() != self.len() || digits.iter().all(|d| *d == digits[0]) {
            return false;
        }
        let weights = self.weights();
        let body = digits.len() - 2;
        let first = verifier(&digits[..body], &weights[1..]);
        let second = verifier(&digits[..=body], weights);
        first == digits[body] && second == digits[body + 1]
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Document {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "CPF" => Ok(Document::Cpf),
            "CNPJ" => Ok(Document::Cnpj),
            other => Err(CheckError::parse("document type", other)),
        }
    }
}

fn verifier(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

fn digits_of(value: impl Into<Value>) -> Result<Vec<u32>> {
    Ok(text(value)?.chars().filter_map(|c| c.to_digit(10)).collect())
}

/// A valid CPF number, with or without punctuation.
///
/// # Example
///
/// ```rust
/// use plumbline::is_cpf;
///
/// assert!(is_cpf("12101721007").unwrap());
/// assert!(is_cpf("891.595.290-16").unwrap());
/// assert!(!is_cpf("11111111111").unwrap());
/// assert!(!is_cpf("Not a CPF").unwrap());
/// ```
pub fn is_cpf(value: impl Into<Value>) -> Result<bool> {
    is_document(Document::Cpf, value)
}

/// A valid CNPJ number, with or without punctuation.
///
/// ```rust
/// use plumbline::is_cnpj;
///
/// assert!(is_cnpj("57309623000168").unwrap());
/// assert!(is_cnpj("47.263.759/0001-20").unwrap());
/// assert!(!is_cnpj("11.111.111/1111-11").unwrap());
/// ```
pub fn is_cnpj(value: impl Into<Value>) -> Result<bool> {
    is_document(Document::Cnpj, value)
}

/// Either a valid CPF or a valid CNPJ.
pub fn is_cpf_or_cnpj(value: impl Into<Value>) -> Result<bool> {
    let digits = digits_of(value)?;
    Ok(Document::Cpf.verify(&digits) || Document::Cnpj.verify(&digits))
}

/// Validate `value` as the given document kind.
///
/// ```rust
/// use plumbline::{is_document, Document};
///
/// let kind: Document = "CNPJ".parse().unwrap();
/// assert!(is_document(kind, "57.309.623/0001-68").unwrap());
/// assert!(!is_document(Document::Cpf, "57.309.623/0001-68").unwrap());
/// ```
pub fn is_document(document: Document, value: impl Into<Value>) -> Result<bool> {
    Ok(document.verify(&digits_of(value)?))
}
