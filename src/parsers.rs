#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use num_bigint::BigInt;

peg::parser! {
    /// grammars for the slash-delimited numeric inputs (fractions and dates).
    pub grammar parser() for str {
        /// matches any number of whitespace characters
        rule whitespace() = quiet!{[' ' | '\t' | '\n' | '\r']*}

        /// matches a decimal integer of any width with an optional sign,
        /// padded by whitespace
        rule integer() -> BigInt
            = whitespace() sign:$(['+' | '-']?) digits:$(['0'..='9']+) whitespace()
            {?
                digits
                    .parse::<BigInt>()
                    .map(|n| if sign == "-" { -n } else { n })
                    .or(Err("integer"))
            }

        /// parses a single integer, as written in one token
        pub rule int() -> BigInt
            = integer()

        /// parses `numerator/denominator`
        pub rule fraction() -> (BigInt, BigInt)
            = n:integer() "/" d:integer() { (n, d) }

        /// parses `month/day/year`; anything after a fourth `/` is ignored
        pub rule slash_date() -> (BigInt, BigInt, BigInt)
            = m:integer() "/" d:integer() "/" y:integer() ("/" [_]*)? { (m, d, y) }
    }
}
