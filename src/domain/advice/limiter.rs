//! Truncation of advice lists

/// Trims an advice list to a requested amount
pub trait AdviceLimiter: Send + Sync {
    fn limit_to(&self, advices: &[String], amount: i64) -> Vec<String>;
}

/// Returns a fresh copy of the first `amount` advices.
///
/// A negative amount means "no limit": the whole list is returned. The RPC
/// boundary rejects negative amounts before they get here.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAdviceLimiter;

impl AdviceLimiter for SimpleAdviceLimiter {
    fn limit_to(&self, advices: &[String], amount: i64) -> Vec<String> {
        let Ok(amount) = usize::try_from(amount) else {
            return advices.to_vec();
        };

        advices.iter().take(amount).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advices() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn test_limit_to_prefix() {
        let source = advices();

        assert_eq!(SimpleAdviceLimiter.limit_to(&source, 2), vec!["a", "b"]);
        assert_eq!(SimpleAdviceLimiter.limit_to(&source, 0), Vec::<String>::new());
        assert_eq!(source, advices());
    }

    #[test]
    fn test_limit_to_exact_length_is_identity() {
        let source = advices();
        assert_eq!(SimpleAdviceLimiter.limit_to(&source, 3), source);
    }

    #[test]
    fn test_amount_larger_than_list() {
        assert_eq!(SimpleAdviceLimiter.limit_to(&advices(), 50), advices());
        assert!(SimpleAdviceLimiter.limit_to(&[], 5).is_empty());
    }

    #[test]
    fn test_negative_amount_returns_original_list() {
        assert_eq!(SimpleAdviceLimiter.limit_to(&advices(), -1), advices());
        assert_eq!(SimpleAdviceLimiter.limit_to(&advices(), i64::MIN), advices());
    }

    #[test]
    fn test_prefix_length_is_min_of_amount_and_len() {
        let source = advices();

        for amount in 0..=6i64 {
            let limited = SimpleAdviceLimiter.limit_to(&source, amount);
            let expected = (amount as usize).min(source.len());

            assert_eq!(limited.len(), expected);
            assert_eq!(limited[..], source[..expected]);
        }
    }
}
