//! Retrieval of advice texts from the upstream

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::advice::{AdviceMapping, AdviceQuery, AdviceRetriever, UpstreamResponse};
use crate::domain::DomainError;

/// Composes a query and a mapping; "not found" is an empty list
pub struct SimpleAdviceRetriever {
    query: Arc<dyn AdviceQuery>,
    mapping: Arc<dyn AdviceMapping>,
}

impl SimpleAdviceRetriever {
    pub fn new(query: Arc<dyn AdviceQuery>, mapping: Arc<dyn AdviceMapping>) -> Self {
        Self { query, mapping }
    }
}

#[async_trait]
impl AdviceRetriever for SimpleAdviceRetriever {
    async fn retrieve_for_topic(&self, topic: &str) -> Result<Vec<String>, DomainError> {
        match self.query.get_by_topic(topic).await? {
            UpstreamResponse::NotFound(error) => {
                info!(
                    topic = %topic,
                    message = %error.message.text,
                    "Unable to find any advice for topic"
                );
                Ok(Vec::new())
            }
            UpstreamResponse::Found(result) => Ok(self.mapping.map(result)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::advice::{
        Message, MockAdviceQuery, QueryResult, SimpleAdviceMapping, Slip, SlipError,
    };

    fn retriever_with(query: MockAdviceQuery) -> SimpleAdviceRetriever {
        SimpleAdviceRetriever::new(Arc::new(query), Arc::new(SimpleAdviceMapping))
    }

    fn found(advices: &[&str]) -> UpstreamResponse {
        UpstreamResponse::Found(QueryResult {
            results_amount: advices.len().to_string(),
            query: "t".to_string(),
            slips: advices
                .iter()
                .enumerate()
                .map(|(i, advice)| Slip {
                    id: i as i64,
                    advice: advice.to_string(),
                    date: String::new(),
                })
                .collect(),
        })
    }

    #[tokio::test]
    async fn test_found_is_mapped() {
        let mut query = MockAdviceQuery::new();
        query
            .expect_get_by_topic()
            .withf(|topic| topic == "t")
            .times(1)
            .returning(|_| Ok(found(&["a", "b", "c"])));

        let advices = retriever_with(query).retrieve_for_topic("t").await.unwrap();
        assert_eq!(advices, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_not_found_is_empty_list() {
        let mut query = MockAdviceQuery::new();
        query.expect_get_by_topic().times(1).returning(|_| {
            Ok(UpstreamResponse::NotFound(SlipError {
                message: Message {
                    message_type: "error".to_string(),
                    text: "not found".to_string(),
                },
            }))
        });

        let advices = retriever_with(query).retrieve_for_topic("xyzzy").await.unwrap();
        assert!(advices.is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let mut query = MockAdviceQuery::new();
        query
            .expect_get_by_topic()
            .times(1)
            .returning(|_| Err(DomainError::upstream("Request failed: connection reset")));

        let result = retriever_with(query).retrieve_for_topic("t").await;

        match result {
            Err(DomainError::Upstream { message }) => {
                assert_eq!(message, "Request failed: connection reset")
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }
}
