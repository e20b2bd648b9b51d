use crate::core::predicates;
use crate::domain::model::{ClassificationResult, NumberValue, ParsedNumber};
use crate::domain::ports::FactProvider;
use crate::utils::error::{ClassifierError, Result};
use std::sync::Arc;

// 2^63，i64::MAX as f64 會被進位到這個值
const I64_UPPER_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Parses the raw `number` parameter.
///
/// Integers keep their integer form; anything else must be a finite float
/// whose truncated value fits in `i64`.
pub fn parse_number(raw: &str) -> Result<ParsedNumber> {
    let trimmed = raw.trim();
    let malformed = || ClassifierError::MalformedNumber {
        raw: raw.to_string(),
    };

    if let Ok(integer) = trimmed.parse::<i64>() {
        return Ok(ParsedNumber {
            value: NumberValue::Integer(integer),
            integer,
        });
    }

    let float = trimmed.parse::<f64>().map_err(|_| malformed())?;
    if !float.is_finite() {
        return Err(malformed());
    }

    let truncated = float.trunc();
    if truncated < -I64_UPPER_BOUND || truncated >= I64_UPPER_BOUND {
        return Err(malformed());
    }

    Ok(ParsedNumber {
        value: NumberValue::Float(float),
        integer: truncated as i64,
    })
}

/// Stateless request handler; the only collaborator is the fact provider.
#[derive(Clone)]
pub struct NumberClassifier {
    facts: Arc<dyn FactProvider>,
}

impl NumberClassifier {
    pub fn new(facts: Arc<dyn FactProvider>) -> Self {
        Self { facts }
    }

    pub async fn classify(&self, raw: Option<&str>) -> Result<ClassificationResult> {
        let raw = raw.ok_or(ClassifierError::MissingParameter)?;
        let parsed = parse_number(raw)?;

        let integer = parsed.integer;
        // 試除法最多 O(√n) 次，放到 blocking 執行緒池避免卡住 async worker
        let (analysis, fun_fact) = tokio::join!(
            tokio::task::spawn_blocking(move || predicates::analyze(integer)),
            self.facts.lookup(integer)
        );
        let analysis = analysis.map_err(|e| ClassifierError::ServerError {
            message: format!("classification task for {} failed: {}", integer, e),
        })?;

        tracing::debug!(
            "Classified {} (prime={}, perfect={}, digit_sum={}, fallback_fact={})",
            parsed.integer,
            analysis.is_prime,
            analysis.is_perfect,
            analysis.digit_sum,
            fun_fact.is_fallback()
        );

        Ok(ClassificationResult::new(parsed, analysis, fun_fact))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FunFact, NumberProperty};
    use async_trait::async_trait;

    struct FixedFacts;

    #[async_trait]
    impl FactProvider for FixedFacts {
        async fn lookup(&self, number: i64) -> FunFact {
            if number == 6 {
                FunFact::Fetched("6 is the smallest perfect number.".to_string())
            } else {
                FunFact::Fallback(number)
            }
        }
    }

    fn classifier() -> NumberClassifier {
        NumberClassifier::new(Arc::new(FixedFacts))
    }

    #[test]
    fn test_parse_integer_keeps_integer_value() {
        let parsed = parse_number("28").unwrap();
        assert_eq!(parsed.value, NumberValue::Integer(28));
        assert_eq!(parsed.integer, 28);

        let parsed = parse_number(" -17 ").unwrap();
        assert_eq!(parsed.value, NumberValue::Integer(-17));
    }

    #[test]
    fn test_parse_float_truncates_toward_zero() {
        let parsed = parse_number("6.7").unwrap();
        assert_eq!(parsed.value, NumberValue::Float(6.7));
        assert_eq!(parsed.integer, 6);

        let parsed = parse_number("-6.7").unwrap();
        assert_eq!(parsed.integer, -6);

        let parsed = parse_number("1e3").unwrap();
        assert_eq!(parsed.integer, 1000);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for raw in ["abc", "", "12abc", "inf", "-Infinity", "NaN", "1e300", "1_000"] {
            match parse_number(raw) {
                Err(ClassifierError::MalformedNumber { raw: echoed }) => assert_eq!(echoed, raw),
                other => panic!("expected malformed error for {:?}, got {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_classify_missing_parameter() {
        let result = tokio_test::block_on(classifier().classify(None));
        assert!(matches!(result, Err(ClassifierError::MissingParameter)));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 1)]
    async fn test_large_prime_does_not_block_other_requests() {
        let classifier = classifier();

        // √(10^17) 約 3 億次試除
        let slow_classifier = classifier.clone();
        let slow = tokio::spawn(async move {
            slow_classifier
                .classify(Some("100000000000000003"))
                .await
                .map(|result| result.digit_sum)
        });
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let quick = tokio::spawn(async move { classifier.classify(Some("28")).await });
        let result = tokio::time::timeout(std::time::Duration::from_secs(2), quick)
            .await
            .expect("second request should finish while the large prime is analysed")
            .unwrap()
            .unwrap();

        assert!(result.is_perfect);
        assert!(!slow.is_finished());
        assert_eq!(slow.await.unwrap().unwrap(), 4);
    }

    #[tokio::test]
    async fn test_classify_perfect_number_with_fact() {
        let result = classifier().classify(Some("6")).await.unwrap();

        assert_eq!(result.number, NumberValue::Integer(6));
        assert!(!result.is_prime);
        assert!(result.is_perfect);
        assert_eq!(
            result.properties,
            vec![NumberProperty::Armstrong, NumberProperty::Even]
        );
        assert_eq!(result.digit_sum, 6);
        assert_eq!(result.fun_fact, "6 is the smallest perfect number.");
    }

    #[tokio::test]
    async fn test_classify_negative_number_uses_fallback() {
        let result = classifier().classify(Some("-17")).await.unwrap();

        assert!(!result.is_prime);
        assert_eq!(result.properties, vec![NumberProperty::Odd]);
        assert_eq!(result.digit_sum, 8);
        assert_eq!(result.fun_fact, "No fun fact available for -17.");
    }

    #[tokio::test]
    async fn test_classify_is_idempotent() {
        let classifier = classifier();
        let first = classifier.classify(Some("153")).await.unwrap();
        let second = classifier.classify(Some("153")).await.unwrap();
        assert_eq!(first, second);
    }
}
