use crate::domain::model::{NumberAnalysis, NumberProperty};

/// Trial division up to and including the integer square root.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }

    let n = n as u64;
    let mut divisor = 2u64;
    // divisor <= n / divisor 等價於 divisor^2 <= n，且不會溢位
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Sum of proper divisors equals `n`. Only positive integers qualify.
pub fn is_perfect(n: i64) -> bool {
    if n <= 1 {
        // 1 沒有真因數，總和為 0
        return false;
    }

    let n = n as u64;
    let mut sum = 1u64;
    let mut divisor = 2u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            sum += divisor;
            let paired = n / divisor;
            if paired != divisor {
                sum += paired;
            }
            if sum > n {
                return false;
            }
        }
        divisor += 1;
    }
    sum == n
}

fn digits(n: i64) -> impl Iterator<Item = u32> {
    n.unsigned_abs()
        .to_string()
        .into_bytes()
        .into_iter()
        .map(|b| u32::from(b - b'0'))
}

/// Checked on `|n|`, so the sign never matters.
pub fn is_armstrong(n: i64) -> bool {
    let magnitude = n.unsigned_abs();
    let power = digits(n).count() as u32;

    // 19 位數時 9^19 * 19 超過 u64，因此用 u128 累加
    let total: u128 = digits(n).map(|d| u128::from(d).pow(power)).sum();
    total == u128::from(magnitude)
}

pub fn digit_sum(n: i64) -> u32 {
    digits(n).sum()
}

pub fn parity(n: i64) -> NumberProperty {
    if n % 2 == 0 {
        NumberProperty::Even
    } else {
        NumberProperty::Odd
    }
}

/// Runs every predicate against the truncated integer part.
pub fn analyze(n: i64) -> NumberAnalysis {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(n) {
        properties.push(NumberProperty::Armstrong);
    }
    properties.push(parity(n));

    NumberAnalysis {
        is_prime: is_prime(n),
        is_perfect: is_perfect(n),
        properties,
        digit_sum: digit_sum(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        let primes = [2, 3, 5, 7, 11, 13, 97, 7919, 1_000_000_007];
        for p in primes {
            assert!(is_prime(p), "{} should be prime", p);
        }

        let composites = [4, 9, 15, 25, 49, 7917, 1_000_000_008];
        for c in composites {
            assert!(!is_prime(c), "{} should not be prime", c);
        }
    }

    #[test]
    fn test_small_and_negative_numbers_are_not_prime() {
        for n in [-17, -2, -1, 0, 1] {
            assert!(!is_prime(n));
        }
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_is_perfect() {
        for n in [6, 28, 496, 8128, 33_550_336] {
            assert!(is_perfect(n), "{} should be perfect", n);
        }
        for n in [-28, -6, 0, 1, 2, 12, 27, 29, 495] {
            assert!(!is_perfect(n), "{} should not be perfect", n);
        }
    }

    #[test]
    fn test_is_armstrong() {
        for n in [0, 1, 9, 153, 370, 371, 407, 1634, 9474] {
            assert!(is_armstrong(n), "{} should be armstrong", n);
        }
        for n in [10, 100, 154, 9475] {
            assert!(!is_armstrong(n), "{} should not be armstrong", n);
        }
    }

    #[test]
    fn test_armstrong_ignores_sign() {
        assert!(is_armstrong(-153));
        assert!(!is_armstrong(-17));
    }

    #[test]
    fn test_armstrong_handles_extreme_values() {
        assert!(!is_armstrong(i64::MAX));
        assert!(!is_armstrong(i64::MIN));
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(153), 9);
        assert_eq!(digit_sum(-17), 8);
        assert_eq!(digit_sum(i64::MIN), 89);
    }

    #[test]
    fn test_parity_on_negative_numbers() {
        assert_eq!(parity(-17), NumberProperty::Odd);
        assert_eq!(parity(-6), NumberProperty::Even);
        assert_eq!(parity(0), NumberProperty::Even);
    }

    #[test]
    fn test_analyze_orders_armstrong_first() {
        let analysis = analyze(153);
        assert_eq!(
            analysis.properties,
            vec![NumberProperty::Armstrong, NumberProperty::Odd]
        );
        assert!(!analysis.is_prime);
        assert_eq!(analysis.digit_sum, 9);

        let analysis = analyze(-17);
        assert_eq!(analysis.properties, vec![NumberProperty::Odd]);
        assert_eq!(analysis.digit_sum, 8);
        assert!(!analysis.is_prime);
        assert!(!analysis.is_perfect);
    }
}
