use chatlet_core::models::message::{Message, Sender, format_timestamp};
use chatlet_core::models::props::WidgetProps;

fn utc(hour: i8, minute: i8, second: i8) -> jiff::Zoned {
    jiff::civil::date(2024, 6, 1)
        .at(hour, minute, second, 0)
        .to_zoned(jiff::tz::TimeZone::UTC)
        .unwrap()
}

#[test]
fn timestamp_is_zero_padded_24_hour() {
    let morning = utc(7, 5, 59);
    assert_eq!(format_timestamp(&morning), "07:05");

    let evening = utc(23, 41, 0);
    assert_eq!(format_timestamp(&evening), "23:41");
}

#[test]
fn now_constructors_produce_display_timestamps() {
    let message = Message::user("hello");
    assert_eq!(message.sender, Sender::User);
    assert!(message.is_user());
    assert_eq!(message.timestamp.len(), 5);
    assert_eq!(message.timestamp.as_bytes()[2], b':');

    let reply = Message::bot("hi");
    assert_eq!(reply.sender, Sender::Bot);
    assert!(!reply.is_user());
}

#[test]
fn props_deserialize_from_host_json() {
    let props: WidgetProps = serde_json::from_str(
        r#"{"title":"Chat","description":"Ask us anything","fileUrl":"https://example.com/faq.txt"}"#,
    )
    .unwrap();
    assert_eq!(
        props,
        WidgetProps::new("Chat", "Ask us anything").with_file_url("https://example.com/faq.txt")
    );
}

#[test]
fn props_file_url_is_optional() {
    let props: WidgetProps =
        serde_json::from_str(r#"{"title":"Chat","description":"Help"}"#).unwrap();
    assert_eq!(props.file_url, None);
}
