//! Pulls a JSON object out of a model's free-form reply. Models wrap JSON
//! in prose or code fences more often than not, so every LLM-refinement
//! path in this crate extracts the first `{` through the last `}` before
//! attempting to parse.

use serde::de::DeserializeOwned;

pub fn extract<T: DeserializeOwned>(text: &str) -> Option<T> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize, PartialEq, Debug)]
    struct Sample {
        a: u32,
    }

    #[test]
    fn extracts_json_wrapped_in_prose() {
        let text = "here you go:\n```json\n{\"a\": 1}\n```\nhope that helps";
        assert_eq!(extract::<Sample>(text), Some(Sample { a: 1 }));
    }

    #[test]
    fn returns_none_when_no_braces() {
        assert_eq!(extract::<Sample>("no json here"), None);
    }

    #[test]
    fn returns_none_on_malformed_json() {
        assert_eq!(extract::<Sample>("{not valid}"), None);
    }
}
