//! Narrow seams for the two non-text input modalities. Neither talks to a
//! real external service — the spec keeps both out of scope and asks for a
//! deterministic stand-in, the same way `MockAdapter` stands in for a real
//! model.

#[async_trait::async_trait]
pub trait VoiceTranscriber: Send + Sync {
    async fn transcribe(&self, audio: &str) -> String;
}

pub struct MockVoiceTranscriber;

#[async_trait::async_trait]
impl VoiceTranscriber for MockVoiceTranscriber {
    async fn transcribe(&self, audio: &str) -> String {
        let digest = audio.chars().take(8).collect::<String>();
        format!("（语音转写）{digest}")
    }
}

#[async_trait::async_trait]
pub trait ImageUploader: Send + Sync {
    async fn upload(&self, image: &str) -> String;
}

pub struct MockImageUploader;

#[async_trait::async_trait]
impl ImageUploader for MockImageUploader {
    async fn upload(&self, image: &str) -> String {
        let looks_inline = image.starts_with("data:") || is_probably_base64(image);
        if looks_inline {
            let hash = simple_hash(image);
            format!("https://static.example.invalid/uploads/{hash}.jpg")
        } else {
            image.to_string()
        }
    }
}

fn is_probably_base64(s: &str) -> bool {
    s.len() > 64
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '='))
}

fn simple_hash(s: &str) -> u64 {
    let mut hash: u64 = 1469598103934665603;
    for byte in s.bytes() {
        hash ^= byte as u64;
        hash = hash.wrapping_mul(1099511628211);
    }
    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn transcriber_prefixes_a_marker() {
        let out = MockVoiceTranscriber.transcribe("base64audio...").await;
        assert!(out.starts_with("（语音转写）"));
    }

    #[tokio::test]
    async fn uploader_passes_through_existing_urls() {
        let out = MockImageUploader
            .upload("https://example.com/photo.jpg")
            .await;
        assert_eq!(out, "https://example.com/photo.jpg");
    }

    #[tokio::test]
    async fn uploader_rehosts_data_urls() {
        let inline = format!("data:image/png;base64,{}", "A".repeat(100));
        let out = MockImageUploader.upload(&inline).await;
        assert!(out.starts_with("https://static.example.invalid/uploads/"));
    }
}
