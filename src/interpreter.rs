/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the tree produced by the parser, keeps the stack of
/// lexical scopes, and dispatches calls to host functions.
///
/// # Responsibilities
/// - Evaluates statements and expressions to numbers and booleans.
/// - Pushes a scope for every nested block and pops it on every exit path.
/// - Reports runtime errors such as unknown names or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line it starts on. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into line-tagged tokens.
/// - Prefers two-character operators over their one-character prefixes.
/// - Reports lexical errors for invalid characters and malformed numbers.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one function per grammar rule. Binary
/// levels are parsed iteratively and fold to the left.
///
/// # Responsibilities
/// - Converts tokens into a [`Block`](crate::ast::Block) of statements.
/// - Enforces operator precedence and associativity.
/// - Reports syntax errors with the line of the offending token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// A value is either a number or a boolean. The module also holds the
/// truthiness rule and the conversion from source literals.
pub mod value;
