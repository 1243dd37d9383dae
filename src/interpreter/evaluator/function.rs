use std::f64::consts::{E, PI};

use crate::config::AngleMode;

/// How a builtin interacts with the configured [`AngleMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Angle {
    /// The function is not affected by the angle mode.
    Plain,
    /// The argument is an angle; it is converted to radians first.
    Input,
    /// The result is an angle; it is converted from radians afterwards.
    Output,
}

/// Defines builtin functions by generating the `Function` enum and its lookup
/// table.
///
/// Each entry provides:
/// - a string name, as typed by the user,
/// - the enum variant it resolves to,
/// - how the function treats angles,
/// - the native `f64 -> f64` implementation.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $variant:ident {
                angle: $angle:ident,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// A builtin unary function, resolved from its name at tokenization
        /// time.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum Function {
            $(
                #[doc = concat!("`", $name, "`")]
                $variant,
            )*
        }

        static BUILTIN_TABLE: &[(&str, Function)] = &[
            $(
                ($name, Function::$variant),
            )*
        ];

        /// Names of all builtin functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];

        impl Function {
            /// Returns the name the function is written with.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)*
                }
            }

            const fn angle(self) -> Angle {
                match self {
                    $(Self::$variant => Angle::$angle,)*
                }
            }

            fn native(self) -> fn(f64) -> f64 {
                match self {
                    $(Self::$variant => $func,)*
                }
            }
        }
    };
}

builtin_functions! {
    "sin"   => Sin   { angle: Input, func: f64::sin },
    "cos"   => Cos   { angle: Input, func: f64::cos },
    "tan"   => Tan   { angle: Input, func: f64::tan },
    "sinh"  => Sinh  { angle: Input, func: f64::sinh },
    "cosh"  => Cosh  { angle: Input, func: f64::cosh },
    "tanh"  => Tanh  { angle: Input, func: f64::tanh },
    "asin"  => Asin  { angle: Output, func: f64::asin },
    "acos"  => Acos  { angle: Output, func: f64::acos },
    "atan"  => Atan  { angle: Output, func: f64::atan },
    "asinh" => Asinh { angle: Output, func: f64::asinh },
    "acosh" => Acosh { angle: Output, func: f64::acosh },
    "atanh" => Atanh { angle: Output, func: f64::atanh },
    "log"   => Log   { angle: Plain, func: f64::log10 },
    "ln"    => Ln    { angle: Plain, func: f64::ln },
    "exp"   => Exp   { angle: Plain, func: f64::exp },
    "round" => Round { angle: Plain, func: f64::round },
    "ceil"  => Ceil  { angle: Plain, func: f64::ceil },
    "floor" => Floor { angle: Plain, func: f64::floor },
    "sqrt"  => Sqrt  { angle: Plain, func: f64::sqrt },
    "abs"   => Abs   { angle: Plain, func: f64::abs },
    "sgn"   => Sgn   { angle: Plain, func: sign },
}

/// Named constants, substituted by their value while tokenizing.
static SYMBOL_TABLE: &[(&str, f64)] = &[("pi", PI), ("e", E)];

impl Function {
    /// Resolves a lower-case name into a builtin function.
    ///
    /// # Example
    /// ```
    /// use calc::interpreter::evaluator::function::Function;
    ///
    /// assert_eq!(Function::from_name("sqrt"), Some(Function::Sqrt));
    /// assert_eq!(Function::from_name("pi"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_TABLE.iter()
                     .find(|(candidate, _)| *candidate == name)
                     .map(|(_, function)| *function)
    }

    /// Applies the function to `x`.
    ///
    /// In [`AngleMode::Degrees`] the argument of `sin`, `cos`, `tan` and their
    /// hyperbolic counterparts is converted from degrees to radians, and the
    /// result of the inverse functions is converted from radians to degrees.
    ///
    /// # Example
    /// ```
    /// use calc::{config::AngleMode, interpreter::evaluator::function::Function};
    ///
    /// assert!((Function::Sin.apply(90.0, AngleMode::Degrees) - 1.0).abs() < 1e-12);
    /// assert!((Function::Acos.apply(0.0, AngleMode::Degrees) - 90.0).abs() < 1e-12);
    /// assert!((Function::Log.apply(1000.0, AngleMode::Degrees) - 3.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn apply(self, x: f64, mode: AngleMode) -> f64 {
        let native = self.native();
        match (mode, self.angle()) {
            (AngleMode::Degrees, Angle::Input) => native(x.to_radians()),
            (AngleMode::Degrees, Angle::Output) => native(x).to_degrees(),
            _ => native(x),
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the value of a named constant such as `pi`.
///
/// # Example
/// ```
/// use calc::interpreter::evaluator::function::lookup_symbol;
///
/// assert_eq!(lookup_symbol("pi"), Some(std::f64::consts::PI));
/// assert_eq!(lookup_symbol("tau"), None);
/// ```
#[must_use]
pub fn lookup_symbol(name: &str) -> Option<f64> {
    SYMBOL_TABLE.iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|(_, value)| *value)
}

/// `-1`, `0` or `1` depending on the sign of `x`. NaN maps to `0`.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
