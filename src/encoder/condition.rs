// Fri Jan 16 2026 - Alex

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    EQ,
    NE,
    CS,
    CC,
    MI,
    PL,
    VS,
    VC,
    HI,
    LS,
    GE,
    LT,
    GT,
    LE,
    AL,
    NV,
}

impl Condition {
    pub const ALL: [Condition; 16] = [
        Condition::EQ,
        Condition::NE,
        Condition::CS,
        Condition::CC,
        Condition::MI,
        Condition::PL,
        Condition::VS,
        Condition::VC,
        Condition::HI,
        Condition::LS,
        Condition::GE,
        Condition::LT,
        Condition::GT,
        Condition::LE,
        Condition::AL,
        Condition::NV,
    ];

    /// Value of the 5-bit condition field in bits 4-0 of B.<cond>.
    pub fn to_code(self) -> u8 {
        match self {
            Condition::EQ => 0b00000,
            Condition::NE => 0b00001,
            Condition::CS => 0b00010,
            Condition::CC => 0b00011,
            Condition::MI => 0b00100,
            Condition::PL => 0b00101,
            Condition::VS => 0b00110,
            Condition::VC => 0b00111,
            Condition::HI => 0b01000,
            Condition::LS => 0b01001,
            Condition::GE => 0b01010,
            Condition::LT => 0b01011,
            Condition::GT => 0b01100,
            Condition::LE => 0b01101,
            Condition::AL => 0b11110,
            Condition::NV => 0b11111,
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            Condition::EQ => "eq",
            Condition::NE => "ne",
            Condition::CS => "cs",
            Condition::CC => "cc",
            Condition::MI => "mi",
            Condition::PL => "pl",
            Condition::VS => "vs",
            Condition::VC => "vc",
            Condition::HI => "hi",
            Condition::LS => "ls",
            Condition::GE => "ge",
            Condition::LT => "lt",
            Condition::GT => "gt",
            Condition::LE => "le",
            Condition::AL => "al",
            Condition::NV => "nv",
        }
    }

    pub fn alternate_mnemonic(self) -> &'static str {
        match self {
            Condition::CS => "hs",
            Condition::CC => "lo",
            _ => self.mnemonic(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mnemonic())
    }
}

pub fn parse_condition(s: &str) -> Option<Condition> {
    match s.to_lowercase().as_str() {
        "eq" => Some(Condition::EQ),
        "ne" => Some(Condition::NE),
        "cs" | "hs" => Some(Condition::CS),
        "cc" | "lo" => Some(Condition::CC),
        "mi" => Some(Condition::MI),
        "pl" => Some(Condition::PL),
        "vs" => Some(Condition::VS),
        "vc" => Some(Condition::VC),
        "hi" => Some(Condition::HI),
        "ls" => Some(Condition::LS),
        "ge" => Some(Condition::GE),
        "lt" => Some(Condition::LT),
        "gt" => Some(Condition::GT),
        "le" => Some(Condition::LE),
        "al" => Some(Condition::AL),
        "nv" => Some(Condition::NV),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_condition_codes() {
        assert_eq!(Condition::EQ.to_code(), 0b00000);
        assert_eq!(Condition::NE.to_code(), 0b00001);
        assert_eq!(Condition::LE.to_code(), 0b01101);
        assert_eq!(Condition::AL.to_code(), 0b11110);
        assert_eq!(Condition::NV.to_code(), 0b11111);
    }

    #[test]
    fn test_codes_fit_field() {
        for cond in Condition::ALL {
            assert!(cond.to_code() <= 0b11111);
        }
    }

    #[test]
    fn test_parse_synonyms() {
        assert_eq!(parse_condition("hs"), Some(Condition::CS));
        assert_eq!(parse_condition("cs"), Some(Condition::CS));
        assert_eq!(parse_condition("lo"), Some(Condition::CC));
        assert_eq!(parse_condition("cc"), Some(Condition::CC));
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(parse_condition("EQ"), Some(Condition::EQ));
        assert_eq!(parse_condition("Ne"), Some(Condition::NE));
        assert_eq!(parse_condition("gT"), Some(Condition::GT));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_condition("xx"), None);
        assert_eq!(parse_condition(""), None);
    }

    #[test]
    fn test_alternate_mnemonic() {
        assert_eq!(Condition::CS.alternate_mnemonic(), "hs");
        assert_eq!(Condition::CC.alternate_mnemonic(), "lo");
        assert_eq!(Condition::EQ.alternate_mnemonic(), "eq");
    }
}
