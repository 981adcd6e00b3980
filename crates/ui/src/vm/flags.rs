use quiz_core::model::Country;

/// Regional-indicator emoji for each country in the pool. The desktop
/// build ships no image assets, the system emoji font draws the flags.
#[must_use]
pub fn flag_glyph(country: Country) -> &'static str {
    match country {
        Country::Estonia => "🇪🇪",
        Country::France => "🇫🇷",
        Country::Germany => "🇩🇪",
        Country::Ireland => "🇮🇪",
        Country::Italy => "🇮🇹",
        Country::Monaco => "🇲🇨",
        Country::Nigeria => "🇳🇬",
        Country::Poland => "🇵🇱",
        Country::Spain => "🇪🇸",
        Country::UnitedKingdom => "🇬🇧",
        Country::Ukraine => "🇺🇦",
        Country::UnitedStates => "🇺🇸",
    }
}
