//! Text-search fallback strategy

mod common;

use business_finder::business_search::web::{WebSearchStrategy, parse_result_lines};
use business_finder::{BrowserError, WaitPolicy};
use common::{FakeLauncher, FakeSite, Failure, fixture, test_config};

#[test]
fn search_page_text_yields_phone_lines_only() {
    let records = parse_result_lines(&fixture("web_search_body.txt"), 20);

    let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Sweet Crumb Bakery", "Bread by Us", "Art-Is-In Bakery"]);

    let phones: Vec<_> = records.iter().map(|r| r.phone.as_deref()).collect();
    assert_eq!(
        phones,
        vec![
            Some("(613) 555-0100"),
            Some("(613) 555-0101"),
            Some("(613) 555-0102"),
        ]
    );

    assert_eq!(records[0].rating, Some(4.6));
    assert_eq!(records[0].reviews_count, Some(212));
    assert_eq!(records[1].rating, Some(4.8));
    assert_eq!(records[2].rating, None);
    assert!(records.iter().all(|r| r.website.is_none() && r.address.is_none()));
}

#[tokio::test]
async fn run_reads_rendered_page() {
    let launcher = FakeLauncher::new(FakeSite::without_feed().body(&fixture("web_search_body.txt")));

    let records = WebSearchStrategy::new(test_config())
        .run(&launcher.page(), "bakery in Ottawa", 2)
        .await
        .unwrap();

    assert_eq!(records.len(), 2);
    let activity = launcher.activity.lock().unwrap();
    assert_eq!(
        activity.navigations,
        vec![(
            "https://www.google.com/search?q=bakery+in+Ottawa".to_string(),
            WaitPolicy::Load
        )]
    );
}

#[tokio::test]
async fn blank_page_yields_nothing() {
    let launcher = FakeLauncher::new(FakeSite::without_feed());

    let records = WebSearchStrategy::new(test_config())
        .run(&launcher.page(), "bakery in Ottawa", 5)
        .await
        .unwrap();

    assert!(records.is_empty());
}

#[tokio::test]
async fn navigation_failure_is_returned() {
    let mut site = FakeSite::without_feed();
    site.web_failure = Some(Failure::Disconnected);
    let launcher = FakeLauncher::new(site);

    let err = WebSearchStrategy::new(test_config())
        .run(&launcher.page(), "bakery in Ottawa", 5)
        .await
        .unwrap_err();

    assert!(matches!(err, BrowserError::Disconnected(_)));
}
