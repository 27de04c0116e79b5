//! Card request/response shapes.

use explore_core::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRequest {
    pub object_name: String,
    pub object_category: String,
    pub age: u8,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CardRequest {
    pub fn validate(&self) -> Result<()> {
        if self.object_name.trim().is_empty() {
            return Err(Error::validation("objectName is required"));
        }
        if self.object_category.trim().is_empty() {
            return Err(Error::validation("objectCategory is required"));
        }
        if !(3..=18).contains(&self.age) {
            return Err(Error::validation("age must be between 3 and 18"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Science,
    Poetry,
    English,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub title: String,
    pub content: serde_json::Value,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ScienceContent {
    pub name: String,
    pub explanation: String,
    pub facts: Vec<String>,
    #[serde(rename = "funFact")]
    pub fun_fact: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PoetryContent {
    pub poem: String,
    #[serde(rename = "poemSource")]
    pub poem_source: String,
    pub explanation: String,
    pub context: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EnglishContent {
    pub keywords: Vec<String>,
    pub expressions: Vec<String>,
    pub pronunciation: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CardsResponse {
    pub cards: [Card; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_object_name() {
        let req = CardRequest {
            object_name: "".to_string(),
            object_category: "自然类".to_string(),
            age: 8,
            keywords: vec![],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_age() {
        let req = CardRequest {
            object_name: "银杏".to_string(),
            object_category: "自然类".to_string(),
            age: 2,
            keywords: vec![],
        };
        assert!(req.validate().is_err());
        let req = CardRequest { age: 19, ..req };
        assert!(req.validate().is_err());
    }

    #[test]
    fn accepts_valid_request() {
        let req = CardRequest {
            object_name: "银杏".to_string(),
            object_category: "自然类".to_string(),
            age: 10,
            keywords: vec![],
        };
        assert!(req.validate().is_ok());
    }
}
