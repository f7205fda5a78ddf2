//! HTML rendering.

use std::fmt::Write;

use house_price_protocols::{Condition, Location};

use crate::error::DashboardError;
use crate::form::{BATHROOMS_RANGE, BEDROOMS_RANGE, PredictionForm, SQFT_RANGE, YEAR_BUILT_RANGE};
use crate::view::{PredictionView, format_currency};

/// Result of one submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Prediction(PredictionView),
    /// The API answered with a non-success status.
    ApiError { status: u16, body: String },
    /// The API answered 200 with a body that is not JSON.
    Malformed(String),
    /// The call never produced a response.
    Unreachable { url: String, detail: String },
    /// The form was rejected before any call was made.
    InvalidInput(String),
}

impl From<DashboardError> for Outcome {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Unreachable { url, message } => Outcome::Unreachable {
                url,
                detail: message,
            },
            other => Outcome::InvalidInput(other.to_string()),
        }
    }
}

/// Render the full page: form, optional outcome, footer.
pub fn render_page(predict_url: &str, form: &PredictionForm, outcome: Option<&Outcome>) -> String {
    let mut body = String::new();
    body.push_str("<h1>&#127968; House Price Predictor</h1>\n");
    let _ = writeln!(
        body,
        "<p class=\"caption\">Using API at: {}</p>",
        escape_html(predict_url)
    );
    body.push_str(&render_form(form));

    if let Some(outcome) = outcome {
        body.push_str("<section id=\"outcome\">\n");
        body.push_str(&render_outcome(outcome));
        body.push_str("</section>\n");
    }

    body.push_str(FOOTER);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>House Price Predictor</title>
    <link rel="stylesheet" href="style.css">
</head>
<body>
<main>
{}</main>
</body>
</html>
"#,
        body
    )
}

const FOOTER: &str = r#"<footer>
    <hr>
    <p>This is a personal project built for learning and experimentation.<br>
    Predictions are for demonstration purposes only and should not be used for real estate decisions.</p>
</footer>
"#;

fn render_form(form: &PredictionForm) -> String {
    let mut html = String::from("<form method=\"post\" action=\"/\" id=\"predict-form\">\n");
    html.push_str("<div class=\"columns\">\n<div class=\"column\">\n");
    html.push_str(&number_input("sqft", "Square Footage", form.sqft, SQFT_RANGE, 50.0));
    html.push_str(&number_input(
        "bedrooms",
        "Bedrooms",
        form.bedrooms as f64,
        (BEDROOMS_RANGE.0 as f64, BEDROOMS_RANGE.1 as f64),
        1.0,
    ));
    html.push_str(&number_input("bathrooms", "Bathrooms", form.bathrooms, BATHROOMS_RANGE, 0.5));
    html.push_str("</div>\n<div class=\"column\">\n");
    html.push_str(&select(
        "location",
        "Area",
        Location::ALL.iter().map(|l| l.as_str()),
        form.location.as_str(),
    ));
    html.push_str(&number_input(
        "year_built",
        "Year Built",
        form.year_built as f64,
        (YEAR_BUILT_RANGE.0 as f64, YEAR_BUILT_RANGE.1 as f64),
        1.0,
    ));
    html.push_str(&select(
        "condition",
        "Condition",
        Condition::ALL.iter().map(|c| c.as_str()),
        form.condition.as_str(),
    ));
    html.push_str("</div>\n</div>\n<button type=\"submit\">Predict</button>\n</form>\n");
    html
}

fn number_input(name: &str, label: &str, value: f64, (min, max): (f64, f64), step: f64) -> String {
    format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"number\" id=\"{name}\" name=\"{name}\" value=\"{value}\" min=\"{min}\" max=\"{max}\" step=\"{step}\" required>\n"
    )
}

fn select<'a>(
    name: &str,
    label: &str,
    options: impl Iterator<Item = &'a str>,
    selected: &str,
) -> String {
    let mut html = format!("<label for=\"{name}\">{label}</label>\n<select id=\"{name}\" name=\"{name}\">\n");
    for option in options {
        let marker = if option == selected { " selected" } else { "" };
        let _ = writeln!(html, "<option value=\"{option}\"{marker}>{option}</option>");
    }
    html.push_str("</select>\n");
    html
}

fn render_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Unreachable { url, detail } => format!(
            "<div class=\"error\">Could not reach API at {}<br><br>{}</div>\n",
            escape_html(url),
            escape_html(detail)
        ),
        Outcome::ApiError { status, body } => format!(
            "<div class=\"error\">API error {}:<pre>{}</pre></div>\n",
            status,
            escape_html(body)
        ),
        Outcome::InvalidInput(message) => {
            format!("<div class=\"error\">{}</div>\n", escape_html(message))
        }
        Outcome::Malformed(body) => format!(
            "<h2>Prediction</h2>\n<div class=\"warning\">The API response was not valid JSON.</div>\n\
             <details><summary>Raw response</summary><pre>{}</pre></details>\n",
            escape_html(body)
        ),
        Outcome::Prediction(view) => render_prediction(view),
    }
}

fn render_prediction(view: &PredictionView) -> String {
    let mut html = String::from("<h2>Prediction</h2>\n");

    if let Some(price) = view.price {
        let _ = writeln!(
            html,
            "<div class=\"success\">Estimated price: {}</div>",
            format_currency(price)
        );
    }

    for warning in &view.warnings {
        let _ = writeln!(html, "<div class=\"warning\">{}</div>", escape_html(warning));
    }

    if let Some((low, high)) = view.confidence_interval {
        let _ = writeln!(
            html,
            "<p><strong>95% Confidence Interval:</strong> {} &ndash; {}</p>",
            format_currency(low),
            format_currency(high)
        );
    }

    if let Some(time) = &view.prediction_time {
        let _ = writeln!(
            html,
            "<p class=\"caption\">Prediction time: {}</p>",
            escape_html(time)
        );
    }

    if !view.importances.is_empty() {
        html.push_str(&render_importances(&view.importances));
    }

    let _ = writeln!(
        html,
        "<details><summary>Raw response</summary><pre>{}</pre></details>",
        escape_html(&view.raw)
    );
    html
}

fn render_importances(importances: &[(String, f64)]) -> String {
    let max = importances
        .iter()
        .map(|(_, w)| w.abs())
        .fold(0.0_f64, f64::max);

    let mut html = String::from("<h4>Feature Importance</h4>\n<ul class=\"bars\">\n");
    for (name, weight) in importances {
        let width = if max > 0.0 { weight.abs() / max * 100.0 } else { 0.0 };
        let class = if *weight < 0.0 { "bar negative" } else { "bar positive" };
        let _ = writeln!(
            html,
            "<li><span class=\"name\">{}</span><span class=\"{}\" style=\"width: {:.1}%\"></span><span class=\"value\">{:+.4}</span></li>",
            escape_html(name),
            class,
            width,
            weight
        );
    }
    html.push_str("</ul>\n");
    html
}

/// Escape text for inclusion in HTML element content or attribute values.
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
