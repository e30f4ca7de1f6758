//! Advice service - entry point of the `GiveMeAdvice` RPC method

use std::sync::Arc;

use tracing::debug;

use crate::domain::advice::{AdviceArgs, AdviceGetter, AdviceReply};
use crate::domain::DomainError;

/// Validates call arguments and dispatches to the getter
pub struct AdviceService {
    getter: Arc<dyn AdviceGetter>,
}

impl AdviceService {
    pub fn new(getter: Arc<dyn AdviceGetter>) -> Self {
        Self { getter }
    }

    /// Returns advices for `args.topic`, truncated to `args.amount` when given.
    ///
    /// A negative amount is rejected before any lookup.
    pub async fn give_me_advice(&self, args: AdviceArgs) -> Result<AdviceReply, DomainError> {
        if args.topic.is_empty() {
            return Err(DomainError::validation("Topic must not be empty"));
        }

        debug!(topic = %args.topic, amount = ?args.amount, "Giving advice");

        let advices = match args.amount {
            None => self.getter.get_advices_for(&args.topic).await?,
            Some(amount) if amount >= 0 => {
                self.getter
                    .get_advices_limited_for(&args.topic, amount)
                    .await?
            }
            Some(_) => {
                return Err(DomainError::validation(
                    "Cannot accept an amount that is less than 0",
                ))
            }
        };

        Ok(AdviceReply {
            advice_list: advices,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advice::MockAdviceGetter;

    fn advices() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[tokio::test]
    async fn test_absent_amount_is_unlimited() {
        let mut getter = MockAdviceGetter::new();
        getter
            .expect_get_advices_for()
            .withf(|topic| topic == "love")
            .times(1)
            .returning(|_| Ok(advices()));
        getter.expect_get_advices_limited_for().never();

        let service = AdviceService::new(Arc::new(getter));
        let reply = service.give_me_advice(AdviceArgs::new("love")).await.unwrap();

        assert_eq!(reply.advice_list, advices());
    }

    #[tokio::test]
    async fn test_non_negative_amount_is_limited() {
        let mut getter = MockAdviceGetter::new();
        getter.expect_get_advices_for().never();
        getter
            .expect_get_advices_limited_for()
            .withf(|topic, amount| topic == "love" && *amount == 0)
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let service = AdviceService::new(Arc::new(getter));
        let reply = service
            .give_me_advice(AdviceArgs::new("love").with_amount(0))
            .await
            .unwrap();

        assert!(reply.advice_list.is_empty());
    }

    #[tokio::test]
    async fn test_negative_amount_is_rejected_before_lookup() {
        let mut getter = MockAdviceGetter::new();
        getter.expect_get_advices_for().never();
        getter.expect_get_advices_limited_for().never();

        let service = AdviceService::new(Arc::new(getter));
        let result = service
            .give_me_advice(AdviceArgs::new("love").with_amount(-1))
            .await;

        match result {
            Err(DomainError::Validation { message }) => {
                assert_eq!(message, "Cannot accept an amount that is less than 0")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_topic_is_rejected() {
        let mut getter = MockAdviceGetter::new();
        getter.expect_get_advices_for().never();

        let service = AdviceService::new(Arc::new(getter));
        let result = service.give_me_advice(AdviceArgs::new("")).await;

        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_getter_errors_propagate() {
        let mut getter = MockAdviceGetter::new();
        getter
            .expect_get_advices_for()
            .returning(|_| Err(DomainError::upstream("Request failed")));

        let service = AdviceService::new(Arc::new(getter));
        let result = service.give_me_advice(AdviceArgs::new("love")).await;

        assert!(matches!(result, Err(DomainError::Upstream { .. })));
    }
}
