//! Arguments and reply of the advice RPC method

use serde::{Deserialize, Serialize};

/// Arguments of `GiveMeAdvice`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceArgs {
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

impl AdviceArgs {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            amount: None,
        }
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// Reply of `GiveMeAdvice`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceReply {
    pub advice_list: Vec<String>,
}
