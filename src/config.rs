/// Unit used by the trigonometric builtins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Arguments and results are radians.
    #[default]
    Radians,
    /// Forward trigonometric functions take degrees and inverse ones return
    /// degrees.
    Degrees,
}

/// Settings consumed by the evaluator and by the output renderer.
///
/// The value is built once (usually from command-line flags) and handed to
/// [`Context::new`](crate::interpreter::evaluator::core::Context::new); nothing
/// reads configuration from global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    /// Unit conversion applied at the boundary of trigonometric functions.
    pub angle_mode: AngleMode,
    /// Separate the results of consecutive expressions with newlines instead
    /// of spaces.
    pub newline:    bool,
}

impl Config {
    /// Returns the string placed between the results of two expressions.
    ///
    /// # Example
    /// ```
    /// use calc::Config;
    ///
    /// assert_eq!(Config::default().separator(), " ");
    /// assert_eq!(Config { newline: true, ..Config::default() }.separator(), "\n");
    /// ```
    #[must_use]
    pub const fn separator(&self) -> &'static str {
        if self.newline { "\n" } else { " " }
    }

    /// Returns `true` when trigonometric functions work in degrees.
    #[must_use]
    pub const fn uses_degrees(&self) -> bool {
        matches!(self.angle_mode, AngleMode::Degrees)
    }
}
