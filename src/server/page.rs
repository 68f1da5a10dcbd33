use crate::engine::recommend::{Recommendation, RecommendationRecord};

pub const TITLE: &str = "Symptom-Based Medicine Recommendation System";
pub const INTRO: &str =
    "Input your symptoms below to get medicine recommendations or a suggestion to consult a doctor.";
pub const SUCCESS: &str = "Here are the recommended medicines based on your symptoms:";

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem}\
.warning{background:#fff4e5;border-left:4px solid #f0a020;padding:.75rem}\
.success{background:#e8f6ec;border-left:4px solid #2e9e50;padding:.75rem}\
input[type=text]{width:100%;padding:.5rem;box-sizing:border-box}";

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Full page: the symptom form, plus the outcome when a query was made.
pub fn render(symptoms: &str, outcome: Option<&Recommendation>) -> String {
    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{TITLE}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>{TITLE}</h1>\n<p>{INTRO}</p>\n\
         <form method=\"get\" action=\"/\">\n\
         <label for=\"symptoms\">Enter your symptoms:</label>\n\
         <input type=\"text\" id=\"symptoms\" name=\"symptoms\" value=\"{}\" autofocus>\n\
         </form>\n",
        escape(symptoms)
    );

    match outcome {
        Some(Recommendation::Advisory(advisory)) => {
            html.push_str(&format!("<div class=\"warning\">{}</div>\n", escape(advisory.message())));
        }
        Some(Recommendation::Medicines(records)) => {
            html.push_str(&format!("<div class=\"success\">{SUCCESS}</div>\n"));
            for record in records {
                render_record(&mut html, record);
            }
        }
        None => {}
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_record(html: &mut String, record: &RecommendationRecord) {
    html.push_str(&format!(
        "<section class=\"medicine\">\n\
         <p><strong>Medicine Name</strong>: {}</p>\n\
         <p><strong>Uses</strong>: {}</p>\n\
         <p><strong>Side Effects</strong>: {}</p>\n\
         <p><strong>Manufacturer</strong>: {}</p>\n\
         <p><strong>Accuracy</strong>: {}</p>\n\
         <hr>\n</section>\n",
        escape(&record.name),
        escape(&record.uses),
        escape(&record.side_effects),
        escape(&record.manufacturer),
        escape(&record.accuracy),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::recommend::Advisory;

    fn record(name: &str) -> RecommendationRecord {
        RecommendationRecord {
            name: name.to_string(),
            uses: "fever".to_string(),
            side_effects: "rash".to_string(),
            manufacturer: "Acme".to_string(),
            similarity: 0.875,
            accuracy: "87.50%".to_string(),
        }
    }

    #[test]
    fn form_only_without_outcome() {
        let html = render("", None);
        assert!(html.contains(TITLE));
        assert!(html.contains("Enter your symptoms:"));
        assert!(!html.contains("class=\"warning\""));
        assert!(!html.contains("class=\"success\""));
    }

    #[test]
    fn advisory_is_a_warning() {
        let html = render("???", Some(&Recommendation::Advisory(Advisory::SevereOrUnclear)));
        assert!(html.contains("<div class=\"warning\">Your symptoms seem severe or unclear. Please consult a doctor.</div>"));
    }

    #[test]
    fn records_render_in_order_with_separators() {
        let outcome = Recommendation::Medicines(vec![record("Alpha"), record("Beta")]);
        let html = render("fever", Some(&outcome));
        assert!(html.contains(SUCCESS));
        let alpha = html.find("Alpha").unwrap();
        let beta = html.find("Beta").unwrap();
        assert!(alpha < beta);
        assert_eq!(html.matches("<hr>").count(), 2);
        assert!(html.contains("<strong>Accuracy</strong>: 87.50%"));
    }

    #[test]
    fn user_text_is_escaped() {
        let html = render("<script>\"x\"</script>", Some(&Recommendation::Medicines(vec![record("A&B")])));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;&quot;x&quot;&lt;/script&gt;"));
        assert!(html.contains("A&amp;B"));
    }

    #[test]
    fn outcome_sits_between_form_and_closing_tags() {
        let html = render("fever", Some(&Recommendation::Advisory(Advisory::LowAccuracy)));
        let form_end = html.find("</form>").unwrap();
        let warning = html.find("class=\"warning\"").unwrap();
        assert!(form_end < warning);
        assert!(html.ends_with("</body>\n</html>\n"));
        assert_eq!(html.matches("class=\"warning\"").count(), 1);
    }
}
