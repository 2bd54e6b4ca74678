/// One arithmetic derivation of a value from a subset of the source numbers.
///
/// Addition and multiplication chains are kept flat (n-ary) rather than as
/// nested binary nodes, so an associative chain has a single representation
/// and re-parenthesizations of it cannot arise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    Number(i64),
    Sum(Vec<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Product(Vec<Expression>),
    Div(Box<Expression>, Box<Expression>),
}
