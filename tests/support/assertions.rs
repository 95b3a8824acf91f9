use rust_decimal::Decimal;

/// Assert that `actual` reads as `expected` when quoted to as many decimals
/// as `expected` carries, the way the desk prints rates.
pub fn assert_quoted_as(actual: Decimal, expected: Decimal) {
    let quoted = actual.round_dp(expected.scale());
    assert_eq!(
        quoted, expected,
        "rate {actual} quotes as {quoted} at {} dp, expected {expected}",
        expected.scale()
    );
}
