//! Serialization of BigInt and BigFloat.
//! Serialization to a string uses decimal radix.

use crate::int::BigInt;
use crate::num::BigFloat;
use serde::{Serialize, Serializer};

#[cfg(not(feature = "std"))]
use alloc::string::ToString;

impl Serialize for BigInt {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl Serialize for BigFloat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::to_string;

    use crate::int::BigInt;
    use crate::num::BigFloat;

    #[test]
    fn to_json() {
        assert_eq!(to_string(&BigFloat::new(1)).unwrap(), "\"0.0\"");
        assert_eq!(
            to_string(&BigFloat::from_f64(-0.3125, 2).unwrap()).unwrap(),
            "\"-0.3125\""
        );
        assert_eq!(
            to_string(&BigInt::from(-12345678901234567890i128)).unwrap(),
            "\"-12345678901234567890\""
        );
    }
}
