use crate::expression::{Expression, ExpressionError};

fn num(n: i64) -> Expression {
    Expression::Number(n)
}

#[test]
fn renders_flat_chains_without_parens() {
    let sum = Expression::Sum(vec![num(1), num(2), num(3)]);
    assert_eq!(sum.to_string(), "1 + 2 + 3");

    let product = Expression::Product(vec![num(2), num(5)]);
    assert_eq!(product.to_string(), "2 * 5");
}

#[test]
fn product_parenthesizes_sum_and_difference_factors() {
    let expr = Expression::Product(vec![
        Expression::Sum(vec![num(1), num(2)]),
        Expression::Sub(Box::new(num(5)), Box::new(num(3))),
    ]);
    assert_eq!(expr.to_string(), "(1 + 2) * (5 - 3)");
}

#[test]
fn difference_parenthesizes_sum_on_the_right_only() {
    let left_sum = Expression::Sub(
        Box::new(Expression::Sum(vec![num(5), num(3)])),
        Box::new(num(2)),
    );
    assert_eq!(left_sum.to_string(), "5 + 3 - 2");

    let right_sum = Expression::Sub(
        Box::new(num(9)),
        Box::new(Expression::Sum(vec![num(1), num(2)])),
    );
    assert_eq!(right_sum.to_string(), "9 - (1 + 2)");

    // A product on the right of `-` binds tighter and stays bare.
    let right_product = Expression::Sub(
        Box::new(Expression::Product(vec![num(6), num(7)])),
        Box::new(num(5)),
    );
    assert_eq!(right_product.to_string(), "6 * 7 - 5");
}

#[test]
fn quotient_parenthesizes_product_on_the_right_only() {
    let left_product = Expression::Div(
        Box::new(Expression::Product(vec![num(6), num(4)])),
        Box::new(num(2)),
    );
    assert_eq!(left_product.to_string(), "6 * 4 / 2");

    let right_product = Expression::Div(
        Box::new(num(24)),
        Box::new(Expression::Product(vec![num(2), num(3)])),
    );
    assert_eq!(right_product.to_string(), "24 / (2 * 3)");
}

#[test]
fn mixed_chain_renders_like_the_classic_solution() {
    // (4 / 4 + 100) * 50 / 10
    let expr = Expression::Div(
        Box::new(Expression::Product(vec![
            Expression::Sum(vec![
                Expression::Div(Box::new(num(4)), Box::new(num(4))),
                num(100),
            ]),
            num(50),
        ])),
        Box::new(num(10)),
    );
    assert_eq!(expr.to_string(), "(4 / 4 + 100) * 50 / 10");
    assert_eq!(expr.evaluate(), Ok(505));
}

#[test]
fn evaluates_chains_and_differences() {
    let expr = Expression::Sub(
        Box::new(Expression::Product(vec![num(6), num(7)])),
        Box::new(num(5)),
    );
    assert_eq!(expr.evaluate(), Ok(37));

    let sum = Expression::Sum(vec![num(1), num(2), num(3), num(4)]);
    assert_eq!(sum.evaluate(), Ok(10));
}

#[test]
fn division_errors_are_reported() {
    let by_zero = Expression::Div(Box::new(num(5)), Box::new(num(0)));
    assert_eq!(by_zero.evaluate(), Err(ExpressionError::DivisionByZero));

    let inexact = Expression::Div(Box::new(num(7)), Box::new(num(2)));
    assert_eq!(
        inexact.evaluate(),
        Err(ExpressionError::InexactDivision {
            dividend: 7,
            divisor: 2
        })
    );
}

#[test]
fn overflow_is_an_error_not_a_wrap() {
    let expr = Expression::Product(vec![num(i64::MAX), num(2)]);
    assert_eq!(expr.evaluate(), Err(ExpressionError::Overflow));
}
