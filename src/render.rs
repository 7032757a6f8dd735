//! HTML page rendering.

use chrono::NaiveDate;

use crate::culture::Culture;
use crate::localizer::StringLocalizer;
use crate::negotiate::RequestCultures;

/// The sample values shown on the page.
const SAMPLE_NUMBER: f64 = 1_234_567.89;
const SAMPLE_CURRENCY: f64 = 42.0;

/// Builds the demo page for the negotiated cultures.
///
/// Labels go through the localizer against the UI culture; the date, number,
/// and currency values follow the formatting culture's conventions. The table
/// labels "Current Culture" and "Current UI Culture" have no catalog entries
/// in any culture, so they render as their English key text everywhere.
#[must_use]
pub fn render_page(
    localizer: &StringLocalizer,
    cultures: &RequestCultures,
    today: NaiveDate,
) -> String {
    // Negotiation only yields supported cultures; anything else gets the
    // invariant conventions.
    let culture = Culture::find(&cultures.culture).unwrap_or_else(Culture::invariant);
    let ui_culture = Culture::find(&cultures.ui_culture).unwrap_or_else(Culture::invariant);

    let label = |key: &str| localizer.lookup(&cultures.ui_culture, key);

    format!(
        "<html><body>\
         <h2>{hello}!</h2>\
         <table border=\"1\" cellpadding=\"5\" style=\"border-collapse:collapse;\">\
         <tr><td>{culture_label}</td><td>{culture_name}</td></tr>\
         <tr><td>{ui_culture_label}</td><td>{ui_culture_name}</td></tr>\
         <tr><td>{date_label}</td><td>{date}</td></tr>\
         <tr><td>{number_label}</td><td>{number}</td></tr>\
         <tr><td>{currency_label}</td><td>{currency}</td></tr>\
         </table>\
         <h2>{goodbye}</h2>\
         </body></html>",
        hello = label("Hello"),
        culture_label = label("Current Culture"),
        culture_name = culture.english_name(),
        ui_culture_label = label("Current UI Culture"),
        ui_culture_name = ui_culture.english_name(),
        date_label = label("The Current Date"),
        date = culture.long_date(today),
        number_label = label("A Formatted Number"),
        number = culture.decimal(SAMPLE_NUMBER),
        currency_label = label("A Currency Value"),
        currency = culture.currency(SAMPLE_CURRENCY),
        goodbye = label("Goodbye"),
    )
}
