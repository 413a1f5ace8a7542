use crate::types::BannerKind;

/// A transient status message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: BannerKind::Error,
        }
    }

    pub fn class_name(&self) -> String {
        format!("message {}", self.kind.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_names() {
        assert_eq!(Banner::success("ok").class_name(), "message success");
        assert_eq!(Banner::error("bad").class_name(), "message error");
    }
}
