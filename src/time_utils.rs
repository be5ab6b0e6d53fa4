use js_sys::Date;
use wasm_bindgen::JsValue;

/// Locale-aware label for a bill's introduction date.
///
/// Unparseable input falls back to the raw string instead of failing the
/// whole list render.
pub fn format_introduced_date(raw: &str) -> String {
    let date = Date::new(&JsValue::from_str(raw));
    if date.get_time().is_nan() {
        return raw.to_string();
    }
    date.to_locale_date_string("en-CA", &JsValue::UNDEFINED).into()
}
