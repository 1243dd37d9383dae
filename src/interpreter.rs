/// The evaluator module applies operators and functions to values.
///
/// The evaluator pops the operands an operator or function needs from the
/// value stack, computes the result and pushes it back. It also owns the
/// evaluation context shared by the expressions of a batch.
///
/// # Responsibilities
/// - Implements every operator and builtin function.
/// - Converts angles when degree mode is active.
/// - Reports domain errors such as the factorial of a fraction.
pub mod evaluator;
/// The lexer module scans raw characters into lexemes.
///
/// This is the first stage of interpretation: a `logos` scanner that
/// recognises numeric literals, letter runs, operator characters, parentheses
/// and commas, and skips whitespace.
///
/// # Responsibilities
/// - Reads numeric literals greedily, including scientific notation.
/// - Reports malformed and oversized literals and unknown characters.
pub mod lexer;
/// The registry module stores completed results for `$n` back-references.
pub mod registry;
/// The shunting-yard module drives evaluation.
///
/// It maintains the operator and value stacks, resolves precedence and
/// associativity, and asks the evaluator to reduce operators as soon as the
/// rules allow.
///
/// # Responsibilities
/// - Orders reductions by precedence and associativity.
/// - Matches parentheses.
/// - Checks that each sub-expression leaves exactly one value.
pub mod shunting_yard;
/// The token module defines classified tokens and the operator table.
pub mod token;
/// The tokenizer module classifies lexemes into tokens.
///
/// # Responsibilities
/// - Resolves names into builtin functions or symbol values.
/// - Distinguishes prefix `+`/`-` from their binary forms.
/// - Attaches columns to tokens and errors.
pub mod tokenizer;
