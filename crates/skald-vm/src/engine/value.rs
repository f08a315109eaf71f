//! Stack and variable slot values.

use super::error::ErrorKind;

/// A value in a stack or variable slot.
///
/// This wraps a `u64` and provides methods for manipulating and retrieving
/// its value under the interpretations instructions use: unsigned, signed
/// two's-complement, or boolean. The slot itself carries no type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Value(u64);

macro_rules! as_method {
    ($(($method_name:ident $type:ident))*) => {
        $(#[doc = concat!("Get this value as a `", stringify!($type), "`.")]
        pub fn $method_name(&self) -> $type {
            self.0 as $type
        })*
    };
}

macro_rules! from_method {
    ($(($method_name:ident $type:ident))*) => {
        $(#[doc = concat!("Create a `Value` from a `", stringify!($type), "`.")]
        pub fn $method_name(val: $type) -> Self {
            Self(val as u64)
        })*
    };
}

// A `Value` can be regarded as signed or unsigned depending on the
// instruction; operations where the distinction matters are inherent
// methods suffixed `_signed`/`_unsigned`. Operations that are bitwise
// identical either way keep their plain names, which collide with trait
// methods from `std::ops`; clippy complains about that by default.
#[allow(clippy::should_implement_trait)]
impl Value {
    as_method! {
        (as_u8 u8)
        (as_i8 i8)
        (as_u16 u16)
        (as_i16 i16)
        (as_u32 u32)
        (as_i32 i32)
        (as_u64 u64)
        (as_i64 i64)
    }

    from_method! {
        (from_u8 u8)
        (from_i8 i8)
        (from_u16 u16)
        (from_i16 i16)
        (from_u32 u32)
        (from_i32 i32)
        (from_u64 u64)
        (from_i64 i64)
    }

    /// Whether this value is truthy (any nonzero bit pattern).
    pub fn is_truthy(&self) -> bool {
        self.0 != 0
    }

    /// Add two values as integers, wrapping on overflow.
    pub fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }

    /// Subtract two values as integers, wrapping on underflow.
    pub fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }

    /// Multiply two values as integers, wrapping on overflow.
    ///
    /// The low 64 bits of the product are the same for the signed and
    /// unsigned interpretations, so one method serves both.
    pub fn mul(self, rhs: Self) -> Self {
        Self(self.0.wrapping_mul(rhs.0))
    }

    /// Divide two values as unsigned integers, truncating.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DivideByZero`] if `rhs` is zero.
    pub fn div_unsigned(self, rhs: Self) -> Result<Self, ErrorKind> {
        if rhs.0 == 0 {
            return Err(ErrorKind::DivideByZero);
        }
        Ok(Self(self.0 / rhs.0))
    }

    /// Divide two values as signed integers, truncating toward zero.
    ///
    /// Dividing the signed minimum by −1 wraps to the signed minimum
    /// instead of trapping.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DivideByZero`] if `rhs` is zero.
    pub fn div_signed(self, rhs: Self) -> Result<Self, ErrorKind> {
        if rhs.0 == 0 {
            return Err(ErrorKind::DivideByZero);
        }
        Ok(Self::from_i64(self.as_i64().wrapping_div(rhs.as_i64())))
    }

    /// Take the remainder of two values as unsigned integers.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DivideByZero`] if `rhs` is zero.
    pub fn rem_unsigned(self, rhs: Self) -> Result<Self, ErrorKind> {
        if rhs.0 == 0 {
            return Err(ErrorKind::DivideByZero);
        }
        Ok(Self(self.0 % rhs.0))
    }

    /// Check if `self` is greater than `rhs`, as unsigned integers.
    ///
    /// Returns a value of 1 for true, and 0 for false.
    pub fn greater_unsigned(self, rhs: Self) -> Self {
        Self((self.0 > rhs.0) as u64)
    }

    /// Check if `self` is greater than `rhs`, as signed integers.
    ///
    /// Returns a value of 1 for true, and 0 for false.
    pub fn greater_signed(self, rhs: Self) -> Self {
        Self((self.as_i64() > rhs.as_i64()) as u64)
    }

    /// Check if `self` is less than `rhs`, as unsigned integers.
    ///
    /// Returns a value of 1 for true, and 0 for false.
    pub fn less_unsigned(self, rhs: Self) -> Self {
        Self((self.0 < rhs.0) as u64)
    }

    /// Check if `self` is less than `rhs`, as signed integers.
    ///
    /// Returns a value of 1 for true, and 0 for false.
    pub fn less_signed(self, rhs: Self) -> Self {
        Self((self.as_i64() < rhs.as_i64()) as u64)
    }

    /// Check if `self` is greater than or equal to `rhs`, as unsigned
    /// integers.
    ///
    /// Returns a value of 1 for true, and 0 for false.
    pub fn greater_or_eq_unsigned(self, rhs: Self) -> Self {
        Self((self.0 >= rhs.0) as u64)
    }

    /// Check if `self` is greater than or equal to `rhs`, as signed
    /// integers.
    ///
    /// Returns a value of 1 for true, and 0 for false.
    pub fn greater_or_eq_signed(self, rhs: Self) -> Self {
        Self((self.as_i64() >= rhs.as_i64()) as u64)
    }

    /// Check if `self` is less than or equal to `rhs`, as unsigned
    /// integers.
    ///
    /// Returns a value of 1 for true, and 0 for false.
    pub fn less_or_eq_unsigned(self, rhs: Self) -> Self {
        Self((self.0 <= rhs.0) as u64)
    }

    /// Check if `self` is less than or equal to `rhs`, as signed integers.
    ///
    /// Returns a value of 1 for true, and 0 for false.
    pub fn less_or_eq_signed(self, rhs: Self) -> Self {
        Self((self.as_i64() <= rhs.as_i64()) as u64)
    }

    /// Check if `self` is bitwise equal to `rhs`.
    ///
    /// Returns a value of 1 for true, and 0 for false.
    pub fn eq(self, rhs: Self) -> Self {
        Self((self.0 == rhs.0) as u64)
    }

    /// Compute the bitwise AND of two values.
    pub fn and(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    /// Compute the bitwise OR of two values.
    pub fn or(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    /// Compute the bitwise XOR of two values.
    pub fn xor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }

    /// Get the logical negation of a value.
    ///
    /// Returns a value of 1 if `self` is 0, and a value of 0 otherwise.
    pub fn not(self) -> Self {
        Self((self.0 == 0) as u64)
    }

    /// Compute the bitwise NOT of a value.
    pub fn inv(self) -> Self {
        Self(!self.0)
    }
}
