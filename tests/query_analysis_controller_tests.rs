// tests/query_analysis_controller_tests.rs
use std::sync::{Arc, Mutex};

use litreview::application::client::{AnalysisOutcome, QueryAnalysisController, SearchController};
use litreview::application::error::ApplicationError;
use litreview::application::ports::{
    LiteratureApiPort, NotificationSinkPort, notifications::{Notice, NoticeLevel},
};

mod support;

use support::{CapturingNotifier, ScriptedApi, analysis_dto};

struct Fixture {
    controller: Arc<QueryAnalysisController>,
    api: Arc<ScriptedApi>,
    notifier: Arc<CapturingNotifier>,
    confirmed: Arc<Mutex<Vec<String>>>,
}

fn fixture() -> Fixture {
    let api = Arc::new(ScriptedApi::new());
    let notifier = Arc::new(CapturingNotifier::new());
    let confirmed = Arc::new(Mutex::new(Vec::new()));
    let api_port: Arc<LiteratureApiPort> = api.clone();
    let notifier_port: Arc<NotificationSinkPort> = notifier.clone();
    let sink = Arc::clone(&confirmed);
    let controller = Arc::new(QueryAnalysisController::new(
        api_port,
        notifier_port,
        move |query: &str| sink.lock().unwrap().push(query.to_string()),
    ));
    Fixture {
        controller,
        api,
        notifier,
        confirmed,
    }
}

#[tokio::test]
async fn blank_query_is_rejected_locally() {
    let f = fixture();

    assert_eq!(f.controller.analyze("  ").await, AnalysisOutcome::Rejected);

    assert_eq!(f.api.analyze_calls(), 0);
    assert_eq!(
        f.notifier.notices(),
        vec![Notice::warning("Please enter a query first")]
    );
    assert!(f.controller.analysis().is_none());
    assert!(!f.controller.is_loading());
}

#[tokio::test]
async fn first_candidate_is_selected_by_default() {
    let f = fixture();
    f.api.push_analysis(Ok(analysis_dto(&["q1", "q2"])));

    let outcome = f.controller.analyze("cancer biomarkers").await;

    assert_eq!(
        outcome,
        AnalysisOutcome::Completed {
            selected: "q1".into()
        }
    );
    assert_eq!(f.api.analyze_requests()[0].query, "cancer biomarkers");
    assert_eq!(f.controller.selected_query().as_deref(), Some("q1"));
    let analysis = f.controller.analysis().expect("analysis stored");
    assert_eq!(analysis.pubmed_queries(), ["q1", "q2"]);
    assert_eq!(analysis.mesh_terms().len(), 2);
    assert!(f.notifier.notices().is_empty());
    assert!(!f.controller.is_loading());
}

#[tokio::test]
async fn confirming_a_changed_selection_invokes_the_callback() {
    let f = fixture();
    f.api.push_analysis(Ok(analysis_dto(&["q1", "q2"])));
    f.controller.analyze("cancer biomarkers").await;

    f.controller.select_query("q2").unwrap();
    let confirmed = f.controller.confirm_selection();

    assert_eq!(confirmed.as_deref(), Some("q2"));
    assert_eq!(*f.confirmed.lock().unwrap(), vec!["q2".to_string()]);
}

#[tokio::test]
async fn confirm_without_analysis_is_a_no_op() {
    let f = fixture();

    assert_eq!(f.controller.confirm_selection(), None);
    assert!(f.confirmed.lock().unwrap().is_empty());
}

#[tokio::test]
async fn selecting_an_unknown_candidate_is_rejected() {
    let f = fixture();
    f.api.push_analysis(Ok(analysis_dto(&["q1", "q2"])));
    f.controller.analyze("cancer biomarkers").await;

    let err = f.controller.select_query("something else").unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)));
    assert_eq!(f.controller.selected_query().as_deref(), Some("q1"));
}

#[tokio::test]
async fn empty_candidate_list_is_reported_and_previous_analysis_kept() {
    let f = fixture();
    f.api.push_analysis(Ok(analysis_dto(&["q1", "q2"])));
    f.api.push_analysis(Ok(analysis_dto(&[])));

    f.controller.analyze("cancer biomarkers").await;
    f.controller.select_query("q2").unwrap();
    let outcome = f.controller.analyze("another question").await;

    assert_eq!(outcome, AnalysisOutcome::Failed);
    assert_eq!(f.notifier.levels(), vec![NoticeLevel::Error]);
    assert_eq!(
        f.notifier.last().map(|n| n.title),
        Some("Error analyzing query".to_string())
    );
    assert_eq!(f.controller.selected_query().as_deref(), Some("q2"));
    assert_eq!(
        f.controller.analysis().unwrap().pubmed_queries(),
        ["q1", "q2"]
    );
}

#[tokio::test]
async fn blank_first_candidate_is_not_skipped_over() {
    let f = fixture();
    f.api.push_analysis(Ok(analysis_dto(&["", "q2"])));

    let outcome = f.controller.analyze("cancer biomarkers").await;

    assert_eq!(outcome, AnalysisOutcome::Failed);
    assert_eq!(f.notifier.levels(), vec![NoticeLevel::Error]);
    assert!(f.controller.analysis().is_none());
    assert_eq!(f.controller.selected_query(), None);
}

#[tokio::test]
async fn transport_failure_notifies_with_message() {
    let f = fixture();
    f.api.push_analysis(Err(ApplicationError::transport(
        "request failed with status code 502: upstream failure",
    )));

    assert_eq!(
        f.controller.analyze("asthma in children").await,
        AnalysisOutcome::Failed
    );
    assert_eq!(
        f.notifier.notices(),
        vec![Notice::error(
            "Error analyzing query",
            "request failed with status code 502: upstream failure"
        )]
    );
    assert!(f.controller.analysis().is_none());
    assert!(!f.controller.is_loading());
}

#[tokio::test]
async fn newer_analysis_wins_over_a_late_response() {
    let f = fixture();
    let slow = f.api.push_analysis_gated(Ok(analysis_dto(&["old"])));
    f.api.push_analysis(Ok(analysis_dto(&["new"])));

    let first = tokio::spawn({
        let controller = Arc::clone(&f.controller);
        async move { controller.analyze("first").await }
    });
    while f.api.analyze_calls() < 1 {
        tokio::task::yield_now().await;
    }
    assert!(f.controller.is_loading());

    f.controller.analyze("second").await;
    slow.send(()).unwrap();

    assert_eq!(first.await.unwrap(), AnalysisOutcome::Superseded);
    assert_eq!(f.controller.selected_query().as_deref(), Some("new"));
    assert!(!f.controller.is_loading());
}

#[tokio::test]
async fn confirmed_query_populates_the_search_form() {
    let api = Arc::new(ScriptedApi::new());
    let notifier = Arc::new(CapturingNotifier::new());
    let api_port: Arc<LiteratureApiPort> = api.clone();
    let notifier_port: Arc<NotificationSinkPort> = notifier.clone();

    let search = Arc::new(SearchController::new(
        api_port.clone(),
        notifier_port.clone(),
    ));
    let form = Arc::clone(&search);
    let analysis = QueryAnalysisController::new(api_port, notifier_port, move |query: &str| {
        form.set_query(query)
    });

    api.push_analysis(Ok(analysis_dto(&["\"Neoplasms\"[Mesh] AND biomarkers", "q2"])));
    analysis.analyze("cancer biomarkers").await;
    analysis.confirm_selection();

    assert_eq!(search.query(), "\"Neoplasms\"[Mesh] AND biomarkers");
}
