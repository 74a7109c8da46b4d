//! Template preview rendering.
//!
//! Message templates carry the literal placeholders `{Имя}` and
//! `{Дата_фотосессии}`. Rendering substitutes a fixed example name and the
//! deal's shoot date; each substitution replaces only the first occurrence
//! of its placeholder, so a template repeating a placeholder stays
//! partially substituted.

use chrono::NaiveDate;

/// Placeholder for the customer's name.
pub const NAME_PLACEHOLDER: &str = "{Имя}";

/// Placeholder for the shoot date.
pub const SHOOT_DATE_PLACEHOLDER: &str = "{Дата_фотосессии}";

/// Example name shown in previews.
pub const PREVIEW_EXAMPLE_NAME: &str = "Иван";

/// Renders a template preview for a deal shot on `shoot_date`.
///
/// Pure and deterministic: the same template and date always produce the
/// same text.
pub fn render_preview(text: &str, shoot_date: NaiveDate) -> String {
    text.replacen(NAME_PLACEHOLDER, PREVIEW_EXAMPLE_NAME, 1)
        .replacen(SHOOT_DATE_PLACEHOLDER, &format_date_ru(shoot_date), 1)
}

/// Formats a date in the `dd.mm.yyyy` notation used for customer-facing
/// text.
pub fn format_date_ru(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
