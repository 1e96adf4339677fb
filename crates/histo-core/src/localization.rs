//! Localized display strings

use std::borrow::Cow;

/// Keys for the strings the engine shows to users
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalizedText {
    /// Y legend and tooltip caption in frequency mode
    Frequency,
    /// Y legend and tooltip caption in density mode
    Density,
    /// Tooltip caption for the bin range
    TooltipRange,
}

/// Resolves display strings for the host's locale
pub trait Localizer {
    /// Text for the given key
    fn text(&self, key: LocalizedText) -> Cow<'static, str>;
}

/// English strings
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLocalizer;

impl Localizer for EnglishLocalizer {
    fn text(&self, key: LocalizedText) -> Cow<'static, str> {
        match key {
            LocalizedText::Frequency => Cow::Borrowed("Frequency"),
            LocalizedText::Density => Cow::Borrowed("Density"),
            LocalizedText::TooltipRange => Cow::Borrowed("Range"),
        }
    }
}
