use super::types::{ConversionRequest, Notice};

pub const MISSING_KEY_MESSAGE: &str =
    "Please configure an API key (api_key in the secrets file, or --api-key).";
pub const MISSING_CODE_MESSAGE: &str = "Please paste some pandas code first.";

/// Decide whether a conversion may be sent to the model, returning the key to use.
///
/// The key is checked before the input, so an unconfigured deployment always
/// reports the configuration problem first.
pub fn validate<'a>(
    api_key: Option<&'a str>,
    request: &ConversionRequest,
) -> Result<&'a str, Notice> {
    let Some(api_key) = api_key.filter(|key| !key.trim().is_empty()) else {
        return Err(Notice::error(MISSING_KEY_MESSAGE));
    };

    if request.pandas_code.trim().is_empty() {
        return Err(Notice::warning(MISSING_CODE_MESSAGE));
    }

    Ok(api_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::types::NoticeLevel;

    #[test]
    fn test_missing_key_is_an_error() {
        let request = ConversionRequest::new("df.head()", None);
        let notice = validate(None, &request).unwrap_err();

        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, MISSING_KEY_MESSAGE);
    }

    #[test]
    fn test_blank_key_is_an_error() {
        let request = ConversionRequest::new("df.head()", None);
        let notice = validate(Some("   "), &request).unwrap_err();

        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_missing_code_is_a_warning() {
        let request = ConversionRequest::new("", None);
        let notice = validate(Some("gsk_test"), &request).unwrap_err();

        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, MISSING_CODE_MESSAGE);
    }

    #[test]
    fn test_whitespace_code_is_a_warning() {
        let request = ConversionRequest::new(" \n\t", None);

        assert_eq!(
            validate(Some("gsk_test"), &request).unwrap_err().level,
            NoticeLevel::Warning
        );
    }

    #[test]
    fn test_key_checked_before_code() {
        let request = ConversionRequest::new("", None);

        assert_eq!(
            validate(None, &request).unwrap_err().level,
            NoticeLevel::Error
        );
    }

    #[test]
    fn test_valid_request_passes() {
        let request = ConversionRequest::new("df.head()", Some("Add a chart".to_string()));
        assert_eq!(validate(Some("gsk_test"), &request), Ok("gsk_test"));
    }
}
