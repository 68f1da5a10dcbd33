use actix_web::http::header::ContentType;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::recommend::{Recommendation, RecommendationRecord, Recommender};

pub mod page;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    symptoms: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SymptomsRequest {
    symptoms: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    advisory: Option<&'static str>,
    medicines: Vec<RecommendationRecord>,
}

impl From<Recommendation> for RecommendResponse {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::Medicines(medicines) => RecommendResponse {
                advisory: None,
                medicines,
            },
            Recommendation::Advisory(advisory) => RecommendResponse {
                advisory: Some(advisory.message()),
                medicines: Vec::new(),
            },
        }
    }
}

#[get("/")]
async fn index(query: web::Query<PageQuery>, recommender: web::Data<Recommender>) -> impl Responder {
    let symptoms = query.symptoms.as_deref().unwrap_or("");
    let outcome = if symptoms.is_empty() {
        None
    } else {
        debug!(symptoms, "page query");
        Some(recommender.recommend(symptoms))
    };

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page::render(symptoms, outcome.as_ref()))
}

#[post("/recommend")]
async fn recommend(request: web::Json<SymptomsRequest>, recommender: web::Data<Recommender>) -> impl Responder {
    debug!(symptoms = %request.symptoms, "api query");
    let response = RecommendResponse::from(recommender.recommend(&request.symptoms));
    HttpResponse::Ok().json(response)
}

#[get("/stats")]
async fn stats(recommender: web::Data<Recommender>) -> impl Responder {
    let stats = serde_json::json!({
        "medicine_count": recommender.medicines().len(),
        "vocabulary_size": recommender.tfidf().vocabulary_size(),
    });
    HttpResponse::Ok().json(stats)
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(recommend).service(stats);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use actix_web::{test, App};
    use serde_json::{json, Value};
    use tracing_subscriber::fmt::MakeWriter;

    use crate::document::parser::Medicine;
    use crate::preprocessing::tokenizer::english_stop_words;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn data() -> web::Data<Recommender> {
        let medicines = [("Febrex", "fever"), ("Ascoril", "cough and cold"), ("Paracip", "fever and pain relief")]
            .into_iter()
            .map(|(name, uses)| Medicine {
                name: name.to_string(),
                uses: uses.to_string(),
                side_effects: "drowsiness".to_string(),
                manufacturer: "Acme".to_string(),
            })
            .collect();
        web::Data::new(Recommender::new(medicines, english_stop_words()).unwrap())
    }

    #[actix_web::test]
    async fn page_without_symptoms_shows_form() {
        let app = test::init_service(App::new().app_data(data()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(page::TITLE));
        assert!(!html.contains(page::SUCCESS));
    }

    #[actix_web::test]
    async fn page_with_symptoms_lists_medicines() {
        let app = test::init_service(App::new().app_data(data()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/?symptoms=Cough+and+cold").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = std::str::from_utf8(&body).unwrap();
        assert!(html.contains(page::SUCCESS));
        assert!(html.contains("Ascoril"));
        assert!(html.contains("100.00%"));
    }

    #[actix_web::test]
    async fn api_returns_advisory_for_empty_symptoms() {
        let app = test::init_service(App::new().app_data(data()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(json!({ "symptoms": "" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!({
                "advisory": "Your symptoms seem severe or unclear. Please consult a doctor.",
                "medicines": []
            })
        );
    }

    #[actix_web::test]
    async fn api_returns_records() {
        let app = test::init_service(App::new().app_data(data()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(json!({ "symptoms": "fever" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["advisory"], Value::Null);
        assert_eq!(body["medicines"][0]["name"], "Febrex");
        assert_eq!(body["medicines"][0]["accuracy"], "100.00%");
        assert!(body["medicines"][0].get("similarity").is_none());
    }

    #[actix_web::test]
    async fn stats_reports_catalog_and_vocabulary() {
        let app = test::init_service(App::new().app_data(data()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/stats").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "medicine_count": 3, "vocabulary_size": 5 }));
    }

    #[actix_web::test]
    async fn symptoms_stay_out_of_info_logs() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(logs.clone())
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = test::init_service(App::new().app_data(data()).configure(configure)).await;
        let req = test::TestRequest::get().uri("/?symptoms=persistent+wheezing").to_request();
        test::call_and_read_body(&app, req).await;
        let req = test::TestRequest::post()
            .uri("/recommend")
            .set_json(json!({ "symptoms": "persistent wheezing" }))
            .to_request();
        test::call_and_read_body(&app, req).await;

        let captured = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(!captured.contains("wheezing"));
    }
}
