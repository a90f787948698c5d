use std::path::PathBuf;

/// Default SVG source.
pub const DEFAULT_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/0/02/Stack_Overflow_logo.svg";

/// Default PNG destination.
pub const DEFAULT_OUTPUT: &str = "stack.png";

/// Source and destination of a conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterOptions {
    pub url: String,
    pub output: PathBuf,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl RasterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[inline]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = RasterOptions::default();
        assert!(opts.url.ends_with("Stack_Overflow_logo.svg"));
        assert_eq!(opts.output, PathBuf::from("stack.png"));
        assert_eq!(RasterOptions::new().with_output("a.png").output, PathBuf::from("a.png"));
    }
}
