//! Content rules for user-submitted posts.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::ValidationError;

/// One or more emoji code points: pictographs plus the components used to
/// build sequences (ZWJ, variation selectors, skin tones, keycaps, flags).
static EMOJI_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\p{Extended_Pictographic}|\p{Emoji_Component})+$")
        .expect("emoji pattern is valid")
});

/// Longest post content, counted in UTF-16 code units so the limit matches
/// what browser clients measure with `String.length`.
pub const MAX_CONTENT_UTF16_UNITS: usize = 255;

pub fn is_emoji_only(value: &str) -> bool {
    EMOJI_ONLY.is_match(value)
}

/// `validator` hook for fields that may only contain emoji.
pub fn validate_emoji_only(value: &str) -> Result<(), ValidationError> {
    if is_emoji_only(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("emoji");
        err.message = Some("content must contain only emoji".into());
        Err(err)
    }
}

/// `validator` hook for post content: 1 to 255 UTF-16 code units, emoji only.
pub fn validate_post_content(value: &str) -> Result<(), ValidationError> {
    let units = value.encode_utf16().count();
    if !(1..=MAX_CONTENT_UTF16_UNITS).contains(&units) {
        let mut err = ValidationError::new("length");
        err.message = Some("content must be between 1 and 255 characters".into());
        err.add_param("max".into(), &MAX_CONTENT_UTF16_UNITS);
        err.add_param("actual".into(), &units);
        return Err(err);
    }

    validate_emoji_only(value)
}
