// src/nn/losses/args.rs
// Dynamically typed argument values for configuring options by name,
// as a scripting binding does when it forwards keyword arguments.

use crate::error::{OptionsError, Result};
use crate::nn::losses::reduction::{KLDivReduction, Reduction, ReductionMode};
use crate::tensor::Tensor;
use std::fmt;

// Largest magnitude an i64 can have and still convert to f64 without rounding.
const MAX_EXACT_INT: i64 = 1 << 53;

/// A keyword-argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    Tensor(Tensor),
    /// Absent value; clears optional fields such as `weight`.
    None,
}

impl ArgValue {
    fn type_name(&self) -> &'static str {
        match self {
            ArgValue::Int(_) => "int",
            ArgValue::Float(_) => "float",
            ArgValue::Bool(_) => "bool",
            ArgValue::Str(_) => "str",
            ArgValue::Tensor(_) => "Tensor",
            ArgValue::None => "None",
        }
    }

    fn mismatch(&self, argument: &str, expected: &str) -> OptionsError {
        OptionsError::invalid_argument(
            argument,
            self,
            format!("expected {expected}, got {}", self.type_name()),
        )
    }

    /// Reads a float argument. Integers are promoted when `f64` holds them
    /// exactly, i.e. within `±2^53`.
    pub fn to_float(&self, argument: &str) -> Result<f64> {
        match self {
            ArgValue::Float(v) => Ok(*v),
            ArgValue::Int(v) if (-MAX_EXACT_INT..=MAX_EXACT_INT).contains(v) => Ok(*v as f64),
            ArgValue::Int(_) => Err(OptionsError::invalid_argument(
                argument,
                self,
                "integer is not exactly representable as float",
            )),
            other => Err(other.mismatch(argument, "float")),
        }
    }

    pub fn to_int(&self, argument: &str) -> Result<i64> {
        match self {
            ArgValue::Int(v) => Ok(*v),
            other => Err(other.mismatch(argument, "int")),
        }
    }

    pub fn to_bool(&self, argument: &str) -> Result<bool> {
        match self {
            ArgValue::Bool(v) => Ok(*v),
            other => Err(other.mismatch(argument, "bool")),
        }
    }

    /// Reads an optional tensor; `None` means unset.
    pub fn to_optional_tensor(&self, argument: &str) -> Result<Option<Tensor>> {
        match self {
            ArgValue::Tensor(t) => Ok(Some(t.clone())),
            ArgValue::None => Ok(None),
            other => Err(other.mismatch(argument, "Tensor or None")),
        }
    }

    /// Parses a reduction name into the reduction type `R`.
    pub fn to_reduction<R: ReductionMode>(&self, argument: &str) -> Result<R> {
        match self {
            ArgValue::Str(name) => name.parse::<R>().map_err(|e| e.with_argument(argument)),
            other => Err(other.mismatch(argument, "str")),
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Int(v) => write!(f, "{v}"),
            ArgValue::Float(v) => write!(f, "{v:?}"),
            ArgValue::Bool(v) => write!(f, "{v}"),
            ArgValue::Str(v) => write!(f, "{v:?}"),
            ArgValue::Tensor(t) => write!(f, "{t}"),
            ArgValue::None => f.write_str("None"),
        }
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        ArgValue::Int(v)
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        ArgValue::Float(v)
    }
}

impl From<bool> for ArgValue {
    fn from(v: bool) -> Self {
        ArgValue::Bool(v)
    }
}

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::Str(v.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(v: String) -> Self {
        ArgValue::Str(v)
    }
}

impl From<Tensor> for ArgValue {
    fn from(v: Tensor) -> Self {
        ArgValue::Tensor(v)
    }
}

impl From<Option<Tensor>> for ArgValue {
    fn from(v: Option<Tensor>) -> Self {
        v.map_or(ArgValue::None, ArgValue::Tensor)
    }
}

impl From<Reduction> for ArgValue {
    fn from(reduction: Reduction) -> Self {
        ArgValue::Str(reduction.to_string())
    }
}

impl From<KLDivReduction> for ArgValue {
    fn from(reduction: KLDivReduction) -> Self {
        ArgValue::Str(reduction.to_string())
    }
}

/// A field type that can live in a loss option record.
///
/// `View` is what the record's accessor hands out: plain values for scalars,
/// a borrowed handle for the optional weight tensor.
pub trait OptionField: Sized {
    type View<'a>
    where
        Self: 'a;

    fn view(&self) -> Self::View<'_>;

    fn to_arg(&self) -> ArgValue;

    fn from_arg(value: &ArgValue, argument: &str) -> Result<Self>;
}

impl OptionField for f64 {
    type View<'a> = f64;

    fn view(&self) -> f64 {
        *self
    }

    fn to_arg(&self) -> ArgValue {
        ArgValue::Float(*self)
    }

    fn from_arg(value: &ArgValue, argument: &str) -> Result<Self> {
        value.to_float(argument)
    }
}

impl OptionField for i64 {
    type View<'a> = i64;

    fn view(&self) -> i64 {
        *self
    }

    fn to_arg(&self) -> ArgValue {
        ArgValue::Int(*self)
    }

    fn from_arg(value: &ArgValue, argument: &str) -> Result<Self> {
        value.to_int(argument)
    }
}

impl OptionField for bool {
    type View<'a> = bool;

    fn view(&self) -> bool {
        *self
    }

    fn to_arg(&self) -> ArgValue {
        ArgValue::Bool(*self)
    }

    fn from_arg(value: &ArgValue, argument: &str) -> Result<Self> {
        value.to_bool(argument)
    }
}

impl OptionField for Option<Tensor> {
    type View<'a> = Option<&'a Tensor>;

    fn view(&self) -> Option<&Tensor> {
        self.as_ref()
    }

    fn to_arg(&self) -> ArgValue {
        self.clone().into()
    }

    fn from_arg(value: &ArgValue, argument: &str) -> Result<Self> {
        value.to_optional_tensor(argument)
    }
}

impl OptionField for Reduction {
    type View<'a> = Reduction;

    fn view(&self) -> Reduction {
        *self
    }

    fn to_arg(&self) -> ArgValue {
        (*self).into()
    }

    fn from_arg(value: &ArgValue, argument: &str) -> Result<Self> {
        value.to_reduction(argument)
    }
}

impl OptionField for KLDivReduction {
    type View<'a> = KLDivReduction;

    fn view(&self) -> KLDivReduction {
        *self
    }

    fn to_arg(&self) -> ArgValue {
        (*self).into()
    }

    fn from_arg(value: &ArgValue, argument: &str) -> Result<Self> {
        value.to_reduction(argument)
    }
}
