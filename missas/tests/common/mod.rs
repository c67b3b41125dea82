// Common test utilities for integration tests
use std::sync::Once;

use missas::config::DioceseConfig;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static INIT: Once = Once::new();

/// Initialize tracing subscriber once for tests
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

pub const SEARCH_PATH: &str = "/wp-content/plugins/hmissa/actions.php";

pub fn diocese_config(server: &MockServer) -> DioceseConfig {
    DioceseConfig {
        endpoint: format!("{}{}", server.uri(), SEARCH_PATH),
        timeout_secs: 5,
        user_agent: "missas-tests".to_string(),
    }
}

/// A results page with one row per `(name, neighborhood, city, start)`.
pub fn results_page(rows: &[(&str, &str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(name, neighborhood, city, start)| {
            format!(
                "<tr><td><a href=\"#\">{name}</a><span class=\"obs\">Rua {name}, 1<br/>obs</span></td>\
                 <td>{neighborhood}</td><td>{city}</td><td>{start}</td></tr>"
            )
        })
        .collect();
    format!("<html><body><table class=\"resultados\"><tbody>{body}</tbody></table></body></html>")
}

/// Answers any search that has no more specific mock with an empty table.
pub async fn mount_empty_default(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string(results_page(&[])))
        .with_priority(10)
        .mount(server)
        .await;
}

/// Serves `page` for searches whose `HorarioInicio` is `hhmm` (`HH:MM`).
pub async fn mount_slot(server: &MockServer, hhmm: &str, page: String) {
    Mock::given(method("POST"))
        .and(path(SEARCH_PATH))
        .and(body_string_contains(slot_param(hhmm)))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .with_priority(1)
        .mount(server)
        .await;
}

pub fn slot_param(hhmm: &str) -> String {
    format!("HorarioInicio={}", hhmm.replace(':', "%3A"))
}

// Re-export commonly used crates for convenience
pub use wiremock;
