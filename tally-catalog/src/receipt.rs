use crate::pricing::Estimate;
use crate::product::Category;

/// Render an estimate as the customer-facing receipt text.
///
/// Assumes a well-formed estimate; nothing is validated here.
pub fn format_estimate(estimate: &Estimate) -> String {
    let mut lines = Vec::with_capacity(Category::ALL.len() + 4);

    lines.push(format!("Estimate Number: {}", estimate.estimate_number));

    for category in Category::ALL {
        let label = estimate.components.get(category);
        let price = estimate.price_of(category);
        let line = match category {
            Category::UsbPorts => format!("{}: {} ports - ${}", category.display_name(), label, price),
            _ => format!("{}: {} - ${}", category.display_name(), label, price),
        };
        lines.push(line);
    }

    lines.push("---".to_string());
    lines.push(format!("Subtotal: ${}", estimate.subtotal));
    lines.push(format!(
        "Total (with {}% markup): ${}",
        markup_percent(estimate.markup_rate),
        estimate.total_with_markup
    ));

    lines.join("\n")
}

fn markup_percent(markup_rate: f64) -> i64 {
    ((markup_rate - 1.0) * 100.0).round() as i64
}
