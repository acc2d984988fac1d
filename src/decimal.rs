use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Write as _};
use core::iter::{Product, Sum};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::DecimalError;

/// Arbitrary-precision signed decimal number.
///
/// The value is `sign * mantissa * 10^exponent`, where the mantissa is a
/// base-10 digit sequence stored least-significant first. Every public
/// operation leaves the value in canonical form: no trailing or leading zero
/// digits, and exactly one representation for zero. Because of that,
/// structural equality (`==`) is value equality, and `Hash` agrees with it.
///
/// Heap storage grows with the number of significant digits; the type is
/// `Clone`, not `Copy`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    /// true = non-negative. Canonical zero always has `sign == true`.
    sign: bool,
    /// Digit values 0..=9, least-significant first. Empty means zero.
    digits: Vec<u8>,
    /// Base-10 exponent applied to the digit sequence.
    exponent: i64,
}

// ============================================================================
// Constants
// ============================================================================

impl Decimal {
    /// Zero
    pub const ZERO: Self = Self {
        sign: true,
        digits: Vec::new(),
        exponent: 0,
    };

    /// Extra fractional digits generated past the larger operand's digit
    /// count before a non-terminating division is truncated.
    pub const DIVISION_PRECISION: usize = 20;

    /// One (1)
    #[inline]
    pub fn one() -> Self {
        Self {
            sign: true,
            digits: vec![1],
            exponent: 0,
        }
    }
}

// ============================================================================
// Constructors and Accessors
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl Decimal {
    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    /// Check if value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign && !self.digits.is_empty()
    }

    /// Check if value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        out.sign = true;
        out
    }

    /// Number of significant digits stored.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }
}

// ============================================================================
// Normalization
// ============================================================================

impl Decimal {
    /// Restores canonical form after a mutation.
    ///
    /// Digits are stored least-significant first, so zeros at the back of the
    /// vector are non-significant and zeros at the front shift the exponent.
    fn normalize(&mut self) {
        while matches!(self.digits.last(), Some(0)) {
            self.digits.pop();
        }
        if self.digits.is_empty() {
            self.sign = true;
            self.exponent = 0;
            return;
        }
        let leading = self.digits.iter().take_while(|&&d| d == 0).count();
        if leading > 0 {
            self.digits.drain(..leading);
            self.exponent += leading as i64;
        }
    }

    /// Shifts the digit sequence so the value is expressed at a smaller
    /// exponent, padding the least-significant end with zeros.
    fn align_down_to(&mut self, target: i64) {
        if self.exponent > target {
            let shift = (self.exponent - target) as usize;
            self.digits.splice(0..0, core::iter::repeat(0).take(shift));
            self.exponent = target;
        }
    }

    /// The magnitude with `sign` and `exponent` reset, used as a scratch
    /// operand by multiplication, division and modulo.
    fn magnitude(&self) -> Self {
        Self {
            sign: true,
            digits: self.digits.clone(),
            exponent: self.exponent,
        }
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl Decimal {
    /// Parses a decimal literal into a `Decimal`.
    ///
    /// Accepts an optional `+`/`-` sign, an optional `.` fractional
    /// separator and an optional `e`/`E` exponent suffix:
    /// `"123"`, `"-123.45"`, `".5e1"`, `"1.7E+10"`.
    ///
    /// # Errors
    /// Returns `DecimalError::InvalidFormat` carrying the offending input on
    /// empty input, a sign with no digits, a decimal point inside the
    /// exponent, a non-integer exponent, or any non-digit character in the
    /// numeric body.
    pub fn from_str_exact(s: &str) -> crate::Result<Self> {
        let invalid = || DecimalError::InvalidFormat(String::from(s));

        if s.is_empty() {
            return Err(invalid());
        }
        let (sign, body) = match s.as_bytes()[0] {
            b'+' => (true, &s[1..]),
            b'-' => (false, &s[1..]),
            _ => (true, s),
        };
        if body.is_empty() {
            return Err(invalid());
        }

        let point = body.find('.');
        let marker = body.find(|c| c == 'e' || c == 'E');
        if let (Some(p), Some(m)) = (point, marker) {
            // A decimal point inside the exponent is malformed.
            if p > m {
                return Err(invalid());
            }
        }

        let mut exponent: i64 = 0;
        let body = match marker {
            Some(m) => {
                exponent = body[m + 1..].parse().map_err(|_| invalid())?;
                &body[..m]
            }
            None => body,
        };

        let mantissa = match point {
            Some(p) => {
                // Trailing fractional zeros carry no information; dropping
                // them first keeps the exponent fold minimal.
                let trimmed = body.trim_end_matches('0');
                let fraction_len = (trimmed.len() - p - 1) as i64;
                exponent = exponent.checked_sub(fraction_len).ok_or_else(invalid)?;
                let mut joined = String::with_capacity(trimmed.len() - 1);
                joined.push_str(&trimmed[..p]);
                joined.push_str(&trimmed[p + 1..]);
                joined
            }
            None => String::from(body),
        };
        if mantissa.is_empty() {
            return Err(invalid());
        }

        let mut digits = Vec::with_capacity(mantissa.len());
        for c in mantissa.chars().rev() {
            let d = c.to_digit(10).ok_or_else(invalid)?;
            digits.push(d as u8);
        }

        let mut out = Self {
            sign,
            digits,
            exponent,
        };
        out.normalize();
        Ok(out)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_exact(s)
    }
}

// ============================================================================
// Floating-Point Construction
// ============================================================================

impl Decimal {
    /// Converts a float by rendering it in scientific notation with
    /// `precision` digits after the point, then parsing the result. The
    /// conversion is inherently lossy and bounded by `precision`.
    ///
    /// # Errors
    /// Returns `DecimalError::InvalidFormat` for non-finite values.
    pub fn from_f64_with_precision(value: f64, precision: usize) -> crate::Result<Self> {
        Self::from_str_exact(&format!("{:.*e}", precision, value))
    }
}

impl TryFrom<f64> for Decimal {
    type Error = DecimalError;

    fn try_from(value: f64) -> crate::Result<Self> {
        Self::from_f64_with_precision(value, 15)
    }
}

impl TryFrom<f32> for Decimal {
    type Error = DecimalError;

    fn try_from(value: f32) -> crate::Result<Self> {
        Self::from_f64_with_precision(f64::from(value), 7)
    }
}

// ============================================================================
// Integer Construction
// ============================================================================

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        let mut out = Self {
            sign: value >= 0,
            digits: Vec::new(),
            exponent: 0,
        };
        let mut v = value;
        while v != 0 {
            // Per-digit unsigned_abs so i64::MIN converts without overflow.
            out.digits.push((v % 10).unsigned_abs() as u8);
            v /= 10;
        }
        out.normalize();
        out
    }
}

impl From<u64> for Decimal {
    fn from(value: u64) -> Self {
        let mut out = Self {
            sign: true,
            digits: Vec::new(),
            exponent: 0,
        };
        let mut v = value;
        while v != 0 {
            out.digits.push((v % 10) as u8);
            v /= 10;
        }
        out.normalize();
        out
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from(i64::from(value))
            }
        }
    )*};
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for Decimal {
            #[inline]
            fn from(value: $t) -> Self {
                Self::from(u64::from(value))
            }
        }
    )*};
}

impl_from_signed!(i8, i16, i32);
impl_from_unsigned!(u8, u16, u32);

// ============================================================================
// Native-Type Conversions
// ============================================================================

impl Decimal {
    /// Converts to an `i64`, truncating any fractional digits toward zero.
    ///
    /// # Errors
    /// Returns `DecimalError::Overflow` (non-negative) or
    /// `DecimalError::Underflow` (negative) when the integer part does not
    /// fit in an `i64`.
    pub fn to_i64(&self) -> crate::Result<i64> {
        let range_error = || {
            if self.sign {
                DecimalError::Overflow
            } else {
                DecimalError::Underflow
            }
        };
        // More than 19 occupied integer positions can never fit.
        if self.digits.len() as i64 + self.exponent > 19 {
            return Err(range_error());
        }
        let mut result: i64 = 0;
        let mut pos = self.exponent;
        for &d in &self.digits {
            if pos >= 0 && d != 0 {
                let term = i64::from(d) * 10i64.pow(pos as u32);
                result = if self.sign {
                    result.checked_add(term).ok_or_else(range_error)?
                } else {
                    result.checked_sub(term).ok_or_else(range_error)?
                };
            }
            pos += 1;
        }
        Ok(result)
    }

    /// Converts to an `f64` by summing `digit * 10^position` terms.
    ///
    /// Lossy: precision beyond what `f64` can hold is dropped silently.
    pub fn to_f64(&self) -> f64 {
        fn pow10(exp: i64) -> f64 {
            let mut result = 1.0f64;
            if exp >= 0 {
                for _ in 0..exp.min(400) {
                    result *= 10.0;
                }
            } else {
                for _ in 0..(-exp).min(400) {
                    result /= 10.0;
                }
            }
            result
        }

        let mut result = 0.0f64;
        let mut pos = self.exponent;
        for &d in &self.digits {
            if d != 0 {
                result += f64::from(d) * pow10(pos);
            }
            pos += 1;
        }
        if self.sign {
            result
        } else {
            -result
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Decimal {
    /// Compares absolute values, ignoring sign.
    ///
    /// The most significant occupied position is `digits.len() + exponent`;
    /// only when positions tie is a digit-by-digit comparison needed. Zero
    /// stores no digits and its nominal position of 0 would misorder it
    /// against pure fractions, so it is handled up front.
    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        match (self.digits.is_empty(), other.digits.is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => {}
        }
        let lhs_pos = self.digits.len() as i64 + self.exponent;
        let rhs_pos = other.digits.len() as i64 + other.exponent;
        lhs_pos
            .cmp(&rhs_pos)
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.cmp_magnitude(other),
            (false, false) => self.cmp_magnitude(other).reverse(),
        }
    }
}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// ============================================================================
// Addition and Subtraction
// ============================================================================

impl Decimal {
    /// `|self| += |rhs|`, keeping `self`'s sign.
    fn add_magnitudes(&mut self, rhs: &Self) {
        self.align_down_to(rhs.exponent);
        let align = (rhs.exponent - self.exponent) as usize;
        let needed = align + rhs.digits.len();
        if self.digits.len() < needed {
            self.digits.resize(needed, 0);
        }
        let mut carry = 0u8;
        for (i, &d) in rhs.digits.iter().enumerate() {
            let sum = self.digits[align + i] + d + carry;
            self.digits[align + i] = sum % 10;
            carry = sum / 10;
        }
        let mut i = align + rhs.digits.len();
        while carry > 0 && i < self.digits.len() {
            let sum = self.digits[i] + carry;
            self.digits[i] = sum % 10;
            carry = sum / 10;
            i += 1;
        }
        if carry > 0 {
            self.digits.push(carry);
        }
        self.normalize();
    }

    /// `|self| -= |rhs|`, keeping `self`'s sign while `|self| > |rhs|` and
    /// flipping it when the magnitudes swap.
    fn sub_magnitudes(&mut self, rhs: &Self) {
        match self.cmp_magnitude(rhs) {
            Ordering::Equal => {
                self.digits.clear();
            }
            Ordering::Greater => {
                self.align_down_to(rhs.exponent);
                let align = (rhs.exponent - self.exponent) as usize;
                let mut borrow = 0u8;
                for (i, &d) in rhs.digits.iter().enumerate() {
                    let sub = d + borrow;
                    let slot = &mut self.digits[align + i];
                    if *slot < sub {
                        *slot = *slot + 10 - sub;
                        borrow = 1;
                    } else {
                        *slot -= sub;
                        borrow = 0;
                    }
                }
                let mut i = align + rhs.digits.len();
                while borrow > 0 {
                    match self.digits.get_mut(i) {
                        Some(slot) if *slot == 0 => *slot = 9,
                        Some(slot) => {
                            *slot -= 1;
                            borrow = 0;
                        }
                        // The magnitude pre-check guarantees the minuend is
                        // larger; running out of digits here is a defect.
                        None => unreachable!("borrow ran past the most significant digit"),
                    }
                    i += 1;
                }
            }
            Ordering::Less => {
                // Subtracting the larger magnitude from the smaller would
                // underflow; compute the swapped difference and flip its sign.
                let mut swapped = Self {
                    sign: self.sign,
                    digits: rhs.digits.clone(),
                    exponent: rhs.exponent,
                };
                swapped.sub_magnitudes(self);
                swapped.sign = !self.sign;
                *self = swapped;
                return;
            }
        }
        self.normalize();
    }

    /// In-place add one.
    pub fn increment(&mut self) {
        *self += Self::one();
    }

    /// In-place subtract one.
    pub fn decrement(&mut self) {
        *self -= Self::one();
    }
}

impl AddAssign for Decimal {
    fn add_assign(&mut self, rhs: Self) {
        if self.sign == rhs.sign {
            self.add_magnitudes(&rhs);
        } else {
            self.sub_magnitudes(&rhs);
        }
    }
}

impl SubAssign for Decimal {
    fn sub_assign(&mut self, rhs: Self) {
        if self.sign == rhs.sign {
            self.sub_magnitudes(&rhs);
        } else {
            self.add_magnitudes(&rhs);
        }
    }
}

impl Add for Decimal {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl Sub for Decimal {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Neg for Decimal {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        if !self.digits.is_empty() {
            self.sign = !self.sign;
        }
        self
    }
}

// ============================================================================
// Multiplication
// ============================================================================

impl Decimal {
    /// Multiplies a magnitude by a single digit, propagating the carry.
    fn single_digit_multiply(bd: &Self, digit: u8) -> Self {
        let mut out = Self {
            sign: true,
            digits: bd.digits.clone(),
            exponent: 0,
        };
        let mut carry = 0u32;
        for d in &mut out.digits {
            let elem = u32::from(*d) * u32::from(digit) + carry;
            *d = (elem % 10) as u8;
            carry = elem / 10;
        }
        while carry > 0 {
            out.digits.push((carry % 10) as u8);
            carry /= 10;
        }
        out.normalize();
        out
    }
}

impl MulAssign for Decimal {
    /// Schoolbook multiplication: one partial product per multiplier digit,
    /// accumulated through the addition path.
    fn mul_assign(&mut self, rhs: Self) {
        let sign = self.sign == rhs.sign;
        let exponent = self.exponent + rhs.exponent;
        if self.digits.is_empty() || rhs.digits.is_empty() {
            *self = Self::ZERO;
            return;
        }
        // Fewer partial products when the shorter operand drives the loop.
        let (multiplicand, multiplier) = if self.digits.len() > rhs.digits.len() {
            (&*self, &rhs)
        } else {
            (&rhs, &*self)
        };
        let mut total = Self::ZERO;
        for (i, &d) in multiplier.digits.iter().enumerate() {
            let mut row = Self::single_digit_multiply(multiplicand, d);
            row.exponent += i as i64;
            total += row;
        }
        total.sign = sign;
        total.exponent += exponent;
        total.normalize();
        *self = total;
    }
}

impl Mul for Decimal {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

// ============================================================================
// Division and Modulo
// ============================================================================

impl Decimal {
    /// One long-division step: the largest `q` with `q * divisor <= remainder`
    /// found by repeated subtraction, and the reduced remainder.
    ///
    /// Both operands must be non-negative.
    fn div_step(remainder: &Self, divisor: &Self) -> (u64, Self) {
        let mut stepped = divisor.clone();
        let mut q = 0u64;
        while stepped <= *remainder {
            stepped += divisor.clone();
            q += 1;
        }
        if q == 0 {
            return (0, remainder.clone());
        }
        stepped -= divisor.clone(); // now exactly q * divisor
        let mut reduced = remainder.clone();
        reduced -= stepped;
        (q, reduced)
    }

    /// Division with the default truncation budget.
    ///
    /// # Errors
    /// Returns `DecimalError::DivisionByZero` for a zero divisor.
    pub fn checked_div(&self, divisor: &Self) -> crate::Result<Self> {
        self.div_with_precision(divisor, Self::DIVISION_PRECISION)
    }

    /// Long division, truncated after `extra_digits` fractional digits past
    /// the larger operand's digit count when the quotient does not terminate.
    ///
    /// This is by far the slowest operation: every quotient digit is found by
    /// repeated subtraction of the divisor.
    ///
    /// # Errors
    /// Returns `DecimalError::DivisionByZero` for a zero divisor.
    pub fn div_with_precision(&self, divisor: &Self, extra_digits: usize) -> crate::Result<Self> {
        if divisor.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let sign = self.sign == divisor.sign;
        // The divisor's exponent folds into the result up front, leaving an
        // integer divisor mantissa for the subtraction loop.
        let exponent_offset = self.exponent - divisor.exponent;
        let mut divisor = divisor.magnitude();
        divisor.exponent = 0;
        let max_digits = self.digits.len().max(divisor.digits.len()) + extra_digits;

        let mut result = Self::ZERO;
        let mut remainder = Self::ZERO;
        let mut position = self.digits.len() as i64 - 1;
        for &digit in self.digits.iter().rev() {
            remainder = remainder * Self::from(10u8) + Self::from(digit);
            let (q, reduced) = Self::div_step(&remainder, &divisor);
            remainder = reduced;
            if q > 0 {
                let mut quotient_digit = Self::from(q);
                quotient_digit.exponent = position;
                result += quotient_digit;
            }
            position -= 1;
        }
        // Keep producing fractional digits until the division terminates or
        // the precision budget runs out.
        while result.digits.len() < max_digits && !remainder.is_zero() {
            remainder = remainder * Self::from(10u8);
            let (q, reduced) = Self::div_step(&remainder, &divisor);
            remainder = reduced;
            if q > 0 {
                let mut quotient_digit = Self::from(q);
                quotient_digit.exponent = position;
                result += quotient_digit;
            }
            position -= 1;
        }

        result.exponent += exponent_offset;
        result.sign = sign;
        result.normalize();
        Ok(result)
    }

    /// Remainder with the receiver's sign and magnitude smaller than the
    /// divisor's, consistent with division truncating toward zero.
    ///
    /// # Errors
    /// Returns `DecimalError::DivisionByZero` for a zero divisor.
    pub fn checked_rem(&self, divisor: &Self) -> crate::Result<Self> {
        if divisor.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let mut divisor = divisor.magnitude();
        match self.cmp_magnitude(&divisor) {
            Ordering::Less => return Ok(self.clone()),
            Ordering::Equal => return Ok(Self::ZERO),
            Ordering::Greater => {}
        }

        // Bring the dividend to exponent zero; a positive exponent becomes
        // explicit zero digits, a negative one scales the divisor up instead
        // and is restored on the result afterwards.
        let mut dividend = self.magnitude();
        let mut exponent_change = 0i64;
        if dividend.exponent > 0 {
            let shift = dividend.exponent as usize;
            dividend.digits.splice(0..0, core::iter::repeat(0).take(shift));
        } else {
            exponent_change = -dividend.exponent;
            divisor.exponent += exponent_change;
        }
        dividend.exponent = 0;

        let mut remainder = Self::ZERO;
        for &digit in dividend.digits.iter().rev() {
            remainder = remainder * Self::from(10u8) + Self::from(digit);
            let (_, reduced) = Self::div_step(&remainder, &divisor);
            remainder = reduced;
        }

        remainder.exponent -= exponent_change;
        remainder.sign = self.sign;
        remainder.normalize();
        Ok(remainder)
    }
}

impl Div for Decimal {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.checked_div(&rhs).expect("attempt to divide by zero")
    }
}

impl DivAssign for Decimal {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.checked_div(&rhs).expect("attempt to divide by zero");
    }
}

impl Rem for Decimal {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.checked_rem(&rhs)
            .expect("attempt to calculate the remainder with a divisor of zero")
    }
}

impl RemAssign for Decimal {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self
            .checked_rem(&rhs)
            .expect("attempt to calculate the remainder with a divisor of zero");
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Display for Decimal {
    /// Canonical literal form: the shortest text that parses back to the
    /// exact same value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("0");
        }
        let offset = usize::from(!self.sign);
        let mut out = String::with_capacity(self.digits.len() + 8);
        if !self.sign {
            out.push('-');
        }
        for &d in self.digits.iter().rev() {
            out.push(char::from(b'0' + d));
        }
        let len = self.digits.len() as u64;
        if self.exponent < 0 {
            let point_pos = self.exponent.unsigned_abs();
            if point_pos == len {
                out.insert_str(offset, "0.");
            } else if point_pos > len {
                // Too few digits to embed the point: fall back to one digit
                // before the point plus a negative exponent suffix.
                if offset + 1 != out.len() {
                    out.insert(offset + 1, '.');
                }
                write!(out, "e-{}", point_pos - len + 1)?;
            } else {
                out.insert(offset + (len - point_pos) as usize, '.');
            }
        } else if self.exponent > 0 {
            write!(out, "e+{}", self.exponent)?;
        }
        f.write_str(&out)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            // {:#?} shows raw internals
            f.debug_struct("Decimal")
                .field("sign", &self.sign)
                .field("digits", &self.digits)
                .field("exponent", &self.exponent)
                .finish()
        } else {
            // {:?} shows the canonical literal
            write!(f, "Decimal({})", self)
        }
    }
}

// ============================================================================
// Iterator Trait Implementations
// ============================================================================

impl Sum for Decimal {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Decimal> for Decimal {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x.clone())
    }
}

impl Product for Decimal {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a> Product<&'a Decimal> for Decimal {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x.clone())
    }
}

// ============================================================================
// Serde Support
// ============================================================================

#[cfg(feature = "serde")]
impl Serialize for Decimal {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            // JSON, TOML, etc. - use the canonical literal
            serializer.collect_str(self)
        } else {
            // Bincode, MessagePack, etc. - serialize the raw parts
            (self.sign, self.exponent, &self.digits).serialize(serializer)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            let s = String::deserialize(deserializer)?;
            Self::from_str_exact(&s).map_err(de::Error::custom)
        } else {
            let (sign, exponent, digits) = <(bool, i64, Vec<u8>)>::deserialize(deserializer)?;
            if digits.iter().any(|&d| d > 9) {
                return Err(de::Error::custom("decimal digit out of range"));
            }
            let mut out = Self {
                sign,
                digits,
                exponent,
            };
            out.normalize();
            Ok(out)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
