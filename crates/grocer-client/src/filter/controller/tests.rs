use super::*;
use serde_json::json;

#[derive(Clone, Default)]
struct FakeSource {
    calls: Arc<Mutex<Vec<FilterQuery>>>,
}

#[async_trait]
impl ResultSource for FakeSource {
    type Item = String;

    async fn fetch(&self, query: &FilterQuery) -> Result<Vec<String>, ClientError> {
        self.calls.lock().push(query.clone());
        let delay = match query.category_id.as_str() {
            "slow" => 200,
            _ => 10,
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if query.category_id == "broken" {
            return Err(ClientError::from_status(500, json!({"error": "catalog unavailable"})));
        }
        Ok(vec![format!("{}:{}", query.category_id, query.search_text)])
    }
}

#[derive(Clone, Default)]
struct FakeNavigator {
    writes: Arc<Mutex<Vec<String>>>,
}

impl Navigator for FakeNavigator {
    fn replace_query(&self, query: &str) {
        self.writes.lock().push(query.to_string());
    }
}

fn controller() -> (CatalogController<FakeSource, FakeNavigator>, FakeSource, FakeNavigator) {
    let source = FakeSource::default();
    let navigator = FakeNavigator::default();
    (CatalogController::new(source.clone(), navigator.clone()), source, navigator)
}

async fn settle() {
    tokio::time::sleep(Duration::from_millis(500)).await;
}

#[tokio::test(start_paused = true)]
async fn test_typing_burst_fetches_once() {
    let (controller, source, navigator) = controller();
    controller.url_changed("");
    settle().await;

    for text in ["m", "mi", "mil", "milk"] {
        controller.edit_search_text(text);
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    settle().await;

    let calls = source.calls.lock().clone();
    assert_eq!(calls, vec![FilterQuery::default(), FilterQuery::new("milk", "")]);
    assert_eq!(*navigator.writes.lock(), vec!["q=milk".to_string()]);
    assert_eq!(controller.view().results, vec![":milk".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_last_effective_filter_wins() {
    let (controller, source, _) = controller();
    controller.url_changed("");
    settle().await;

    controller.select_category("slow");
    controller.select_category("fast");
    settle().await;

    assert_eq!(source.calls.lock().len(), 3);
    let view = controller.view();
    assert_eq!(view.results, vec!["fast:".to_string()]);
    assert!(!view.loading);
}

#[tokio::test(start_paused = true)]
async fn test_echoed_write_triggers_nothing() {
    let (controller, source, navigator) = controller();
    controller.url_changed("");
    controller.select_category("dairy");
    settle().await;

    let written = navigator.writes.lock()[0].clone();
    controller.url_changed(&written);
    settle().await;

    assert_eq!(source.calls.lock().len(), 2);
    assert_eq!(navigator.writes.lock().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_error_becomes_message() {
    let (controller, _, _) = controller();
    controller.url_changed("categoryId=broken");
    settle().await;

    let view = controller.view();
    assert_eq!(view.error.as_deref(), Some("catalog unavailable"));
    assert!(view.results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_unmount_ignores_late_results() {
    let (controller, _, navigator) = controller();
    controller.url_changed("");
    settle().await;

    controller.select_category("slow");
    controller.edit_search_text("milk");
    controller.unmount();
    settle().await;

    assert_eq!(controller.view().results, vec![":".to_string()]);
    // The debounce never fired, so only the category write happened
    assert_eq!(*navigator.writes.lock(), vec!["categoryId=slow".to_string()]);
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_loading_then_results() {
    let (controller, _, _) = controller();
    let mut view = controller.subscribe();

    controller.url_changed("q=eggs");
    assert!(view.borrow_and_update().loading);

    settle().await;
    let latest = view.borrow_and_update().clone();
    assert!(!latest.loading);
    assert_eq!(latest.results, vec![":eggs".to_string()]);
}
