use crate::state::PageView;

/// Formats the prediction page into a human-readable string
pub fn format_page(view: &PageView) -> String {
    if !view.container_visible {
        return "No prediction requested yet.".to_string();
    }

    let mut output = String::new();
    if view.loader_visible {
        output.push_str("Loading prediction...\n");
    }
    if let Some(error) = &view.error {
        output.push_str(error);
        output.push('\n');
    }
    if let Some(content) = &view.content {
        output.push_str(&format!(
            "Air Quality Prediction\n{}\n  AQI: {}\n  Category: {}\n  Color: {}\n  Health Advice: {}\n  Image: {}\n",
            content.city_label,
            content.aqi_text,
            content.category_text,
            content.accent_color,
            content.advice_text,
            content.image_src
        ));
    }
    output
}
