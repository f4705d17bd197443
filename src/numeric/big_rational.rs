// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::ToPrimitive;
use rug::Rational;

use crate::numeric::scalar::Scalar;

/// Arbitrary-precision rational coordinate (backed by GMP via `rug`).
#[derive(Clone, Debug)]
pub struct BigRational(pub Rational);

impl BigRational {
    pub fn new<T: Into<Rational>>(value: T) -> Self {
        BigRational(value.into())
    }

    /// Rational from an integer numerator/denominator pair.
    pub fn from_ratio(num: i64, den: i64) -> Self {
        BigRational(Rational::from((num, den)))
    }
}

impl<'a, 'b> Add<&'b BigRational> for &'a BigRational {
    type Output = BigRational;

    fn add(self, rhs: &'b BigRational) -> BigRational {
        // in-place API on rug::Rational: result = self + rhs
        let mut result = self.0.clone();
        result += &rhs.0;
        BigRational(result)
    }
}

impl<'a, 'b> Sub<&'b BigRational> for &'a BigRational {
    type Output = BigRational;

    fn sub(self, rhs: &'b BigRational) -> BigRational {
        // in-place API on rug::Rational: result = self - rhs
        let mut result = self.0.clone();
        result -= &rhs.0;
        BigRational(result)
    }
}

impl<'a, 'b> Mul<&'b BigRational> for &'a BigRational {
    type Output = BigRational;

    fn mul(self, rhs: &'b BigRational) -> BigRational {
        // in-place API on rug::Rational: result = self * rhs
        let mut result = self.0.clone();
        result *= &rhs.0;
        BigRational(result)
    }
}

impl Add for BigRational {
    type Output = BigRational;
    fn add(self, rhs: BigRational) -> BigRational {
        &self + &rhs
    }
}

impl Sub for BigRational {
    type Output = BigRational;
    fn sub(self, rhs: BigRational) -> BigRational {
        &self - &rhs
    }
}

impl Mul for BigRational {
    type Output = BigRational;
    fn mul(self, rhs: BigRational) -> BigRational {
        &self * &rhs
    }
}

impl Neg for BigRational {
    type Output = BigRational;
    fn neg(self) -> BigRational {
        BigRational(-self.0)
    }
}

impl PartialEq for BigRational {
    fn eq(&self, other: &BigRational) -> bool {
        self.0 == other.0
    }
}

impl Eq for BigRational {}

impl PartialOrd for BigRational {
    fn partial_cmp(&self, other: &BigRational) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl From<i32> for BigRational {
    fn from(value: i32) -> Self {
        BigRational(Rational::from(value))
    }
}

impl From<i64> for BigRational {
    fn from(value: i64) -> Self {
        BigRational(Rational::from(value))
    }
}

impl ToPrimitive for BigRational {
    fn to_i64(&self) -> Option<i64> {
        if self.0.is_integer() {
            self.0.numer().to_i64()
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.0.is_integer() {
            self.0.numer().to_u64()
        } else {
            None
        }
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl Scalar for BigRational {
    fn zero() -> Self {
        BigRational(Rational::new())
    }

    fn sign(&self) -> i8 {
        match self.0.cmp0() {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}
