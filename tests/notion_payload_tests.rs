use chrono::NaiveDate;
use rworktime::core::recorder::RecordRequest;
use rworktime::store::notion::{PageProperties, QueryResponse};
use serde_json::json;

#[test]
fn test_page_properties_mapping() {
    let date = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
    let mut req = RecordRequest::new(date, "10:00", "20:00");
    req.content = Some("refactoring".to_string());
    let entry = req.build_entry().unwrap();

    let value = serde_json::to_value(PageProperties::from_entry(&entry)).unwrap();
    let text = |s: &str| json!({ "rich_text": [ { "text": { "content": s } } ] });

    assert_eq!(
        value,
        json!({
            "date": text("2024/11/01"),
            "start_time": text("10:00"),
            "end_time": text("20:00"),
            "rest": text("01:00"),
            "work_time": text("09:00"),
            "content": text("refactoring"),
        })
    );
}

#[test]
fn test_query_response_to_rows() {
    let body = json!({
        "object": "list",
        "results": [
            {
                "object": "page",
                "properties": {
                    "Name": { "id": "title", "type": "title", "title": [] },
                    "date": { "type": "rich_text", "rich_text": [
                        { "type": "text", "text": { "content": "2024/11/01", "link": null }, "plain_text": "2024/11/01" }
                    ] },
                    "start_time": { "type": "rich_text", "rich_text": [
                        { "type": "text", "text": { "content": "10:00" }, "plain_text": "10:00" }
                    ] },
                    "end_time": { "type": "rich_text", "rich_text": [
                        { "type": "text", "text": { "content": "20:00" }, "plain_text": "20:00" }
                    ] },
                    "rest": { "type": "rich_text", "rich_text": [] },
                    "work_time": { "type": "rich_text", "rich_text": [
                        { "type": "mention", "plain_text": "09:00" }
                    ] }
                }
            }
        ],
        "has_more": true,
        "next_cursor": "abc"
    });

    let resp: QueryResponse = serde_json::from_value(body).unwrap();
    assert!(resp.has_more);
    assert_eq!(resp.next_cursor.as_deref(), Some("abc"));

    let row = resp.results[0].to_row();
    assert_eq!(row.date.as_deref(), Some("2024/11/01"));
    assert_eq!(row.end_time.as_deref(), Some("20:00"));
    assert_eq!(row.rest, None);
    assert_eq!(row.work_time.as_deref(), Some("09:00"));
    assert_eq!(row.content, None);
    assert!(!row.is_complete());
}
