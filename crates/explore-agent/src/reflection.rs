//! Rule-based reading of the child's last message: is this something they
//! found interesting, or are they confused by it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectionSignal {
    Interested,
    Confused,
}

const CONFUSION_MARKERS: &[&str] = &["不懂", "太难", "不明白"];

/// Inspect the child's latest message and classify it. Interest is simply
/// the absence of confusion; the rule path never reports a wish to pause.
pub fn detect(text: &str) -> ReflectionSignal {
    if CONFUSION_MARKERS.iter().any(|m| text.contains(m)) {
        ReflectionSignal::Confused
    } else {
        ReflectionSignal::Interested
    }
}
