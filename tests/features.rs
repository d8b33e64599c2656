//! Per-feature marshaling and decoding, driven through the portal facade.

mod support;

use serde_json::json;

use support::{bundle, RecordingTransport};
use wicket::account::UserInformation;
use wicket::email::ComposeEmail;
use wicket::file_chooser::{FileFilter, OpenFile, SaveFile};
use wicket::print::{PreparePrint, Print};
use wicket::screenshot::Color;
use wicket::{Portal, PortalError};

#[tokio::test]
async fn pick_color_returns_a_color() {
    let transport =
        RecordingTransport::new().reply_with(0, bundle(&[("color", json!([0.1, 0.2, 0.3]))]));
    let portal = Portal::new(transport.clone());

    let color = portal.pick_color(None, None).await.unwrap();
    assert_eq!(
        color,
        Color {
            red: 0.1,
            green: 0.2,
            blue: 0.3
        }
    );

    let state = transport.state.lock();
    assert_eq!(state.dispatched[0].method, "PickColor");
    assert_eq!(
        state.dispatched[0].interface,
        "org.freedesktop.portal.Screenshot"
    );
}

#[tokio::test]
async fn pick_color_without_color_field_is_malformed() {
    let transport = RecordingTransport::new().reply_with(0, Default::default());
    let portal = Portal::new(transport);

    let err = portal.pick_color(None, None).await.unwrap_err();
    assert!(matches!(err, PortalError::MalformedResponse("color")));
}

#[tokio::test]
async fn open_file_marshals_filters_and_decodes_uris() {
    let transport = RecordingTransport::new().reply_with(
        0,
        bundle(&[
            ("uris", json!(["file:///doc/a.txt"])),
            ("choices", json!([["encoding", "utf8"]])),
        ]),
    );
    let portal = Portal::new(transport.clone());

    let mut request = OpenFile::new("Open document");
    request.modal = true;
    request.filters = vec![FileFilter::new("Text").glob("*.txt")];

    let picked = portal.open_file(None, request, None).await.unwrap();
    assert_eq!(picked.uris, vec!["file:///doc/a.txt"]);
    assert_eq!(
        picked.choices,
        vec![("encoding".to_string(), "utf8".to_string())]
    );

    let state = transport.state.lock();
    let call = &state.dispatched[0];
    assert_eq!(call.method, "OpenFile");
    assert_eq!(call.options["title"], json!("Open document"));
    assert_eq!(call.options["filters"], json!([["Text", [[0, "*.txt"]]]]));
}

#[tokio::test]
async fn save_file_decodes_single_uri() {
    let transport =
        RecordingTransport::new().reply_with(0, bundle(&[("uris", json!(["file:///doc/b.txt"]))]));
    let portal = Portal::new(transport.clone());

    let mut request = SaveFile::new("Save document");
    request.current_name = Some("b.txt".to_string());

    let saved = portal.save_file(None, request, None).await.unwrap();
    assert_eq!(saved.uris, vec!["file:///doc/b.txt"]);
    assert_eq!(
        transport.state.lock().dispatched[0].options["current_name"],
        json!("b.txt")
    );
}

#[tokio::test]
async fn compose_email_resolves_to_unit() {
    let transport = RecordingTransport::new().reply_with(0, Default::default());
    let portal = Portal::new(transport.clone());

    portal
        .compose_email(
            None,
            ComposeEmail::new()
                .address("peer@example.org")
                .subject("status"),
            None,
        )
        .await
        .unwrap();

    let state = transport.state.lock();
    let call = &state.dispatched[0];
    assert_eq!(call.interface, "org.freedesktop.portal.Email");
    assert_eq!(call.options["address"], json!("peer@example.org"));
}

#[tokio::test]
async fn user_information_decodes_identity() {
    let transport = RecordingTransport::new().reply_with(
        0,
        bundle(&[("id", json!("mika")), ("name", json!("Mika Example"))]),
    );
    let portal = Portal::new(transport.clone());

    let info = portal
        .user_information(None, UserInformation::new("verify your account"), None)
        .await
        .unwrap();
    assert_eq!(info.id, "mika");
    assert_eq!(info.name, "Mika Example");
    assert!(info.image.is_none());

    assert_eq!(
        transport.state.lock().dispatched[0].options["reason"],
        json!("verify your account")
    );
}

#[tokio::test]
async fn prepare_print_token_feeds_print() {
    let transport = RecordingTransport::new().reply_with(0, bundle(&[("token", json!(99))]));
    let portal = Portal::new(transport.clone());

    let prepared = portal
        .prepare_print(None, PreparePrint::new("Report"), None)
        .await
        .unwrap();
    assert_eq!(prepared.token, 99);

    portal
        .print(None, Print::new("Report").with_token(prepared.token), None)
        .await
        .unwrap();

    let state = transport.state.lock();
    assert_eq!(state.dispatched[1].method, "Print");
    assert_eq!(state.dispatched[1].options["token"], json!(99));
}

#[tokio::test]
async fn every_dispatch_carries_a_handle_token() {
    let transport = RecordingTransport::new().reply_with(0, bundle(&[("token", json!(1))]));
    let portal = Portal::new(transport.clone());

    portal
        .prepare_print(None, PreparePrint::new("x"), None)
        .await
        .unwrap();

    let state = transport.state.lock();
    assert!(state.dispatched[0].options["handle_token"]
        .as_str()
        .unwrap()
        .starts_with("wicket"));
}
