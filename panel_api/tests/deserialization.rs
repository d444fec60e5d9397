use panel_api::types::{
    AdminUser, Agent, Envelope, FileType, MediaItem, MetaData, RawPayload, Status,
};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn classify(name: &str) -> RawPayload {
    let value: serde_json::Value = serde_json::from_str(&load_fixture(name)).unwrap();
    RawPayload::classify(value)
}

#[test]
fn canonical_fixture_is_recognized() {
    match classify("media_canonical.json") {
        RawPayload::Canonical {
            meta,
            data,
            pagination,
        } => {
            let meta: MetaData = serde_json::from_value(meta).unwrap();
            assert_eq!(meta.status, Status::Success);
            assert_eq!(meta.app_status_code, 200);
            assert_eq!(data.len(), 2);
            assert_eq!(pagination["count"], 45);
        }
        other => panic!("unexpected shape {}", other.shape()),
    }
}

#[test]
fn meta_only_fixture_is_recognized() {
    assert_eq!(classify("media_meta_only.json").shape(), "meta-only");
}

#[test]
fn bare_fixture_is_recognized() {
    assert_eq!(classify("admins_bare.json").shape(), "bare-paginated");
}

#[test]
fn offset_fixture_is_recognized() {
    match classify("agents_offset.json") {
        RawPayload::OffsetList {
            results,
            count,
            next,
            previous,
        } => {
            assert_eq!(results.len(), 3);
            assert_eq!(count, 100);
            assert!(next.unwrap().contains("offset=48"));
            assert!(previous.unwrap().contains("offset=0"));
        }
        other => panic!("unexpected shape {}", other.shape()),
    }
}

#[test]
fn error_body_is_not_a_list() {
    assert_eq!(classify("error_404.json").shape(), "unrecognized");
}

#[test]
fn deserialize_media_items() {
    let json = load_fixture("media_canonical.json");
    let resp: Envelope<Vec<MediaItem>> = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.data.len(), 2);

    let lobby = &resp.data[0];
    assert_eq!(lobby.id, 7);
    assert_eq!(lobby.file_type, Some(FileType::Image));
    assert_eq!(lobby.file_size, Some(245760));
    assert_eq!(lobby.extra["uploaded_by"], 3);

    let brochure = &resp.data[1];
    assert_eq!(brochure.file_type, Some(FileType::Document));
    assert_eq!(brochure.alt_text, None);
}

#[test]
fn unknown_file_type_is_other() {
    let item: MediaItem =
        serde_json::from_str(r#"{"id": 1, "file_type": "spreadsheet"}"#).unwrap();
    assert_eq!(item.file_type, Some(FileType::Other));
}

#[test]
fn deserialize_agents() {
    let value: serde_json::Value =
        serde_json::from_str(&load_fixture("agents_offset.json")).unwrap();
    let agents: Vec<Agent> = serde_json::from_value(value["results"].clone()).unwrap();
    assert_eq!(agents[0].name.as_deref(), Some("Dana Whitfield"));
    assert_eq!(agents[0].agency, Some(2));
    assert_eq!(agents[2].status.as_deref(), Some("inactive"));
}

#[test]
fn admin_display_name() {
    let value: serde_json::Value =
        serde_json::from_str(&load_fixture("admins_bare.json")).unwrap();
    let admins: Vec<AdminUser> = serde_json::from_value(value["data"].clone()).unwrap();
    assert_eq!(admins[0].display_name(), "Ada Stone");
    assert_eq!(admins[1].display_name(), "editor");
}

#[test]
fn envelope_serializes_wire_keys() {
    let envelope: Envelope<Vec<MediaItem>> =
        Envelope::new(MetaData::error("boom", 503), Vec::new(), None);
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["metaData"]["status"], "error");
    assert_eq!(json["metaData"]["AppStatusCode"], 503);
    assert!(json["metaData"]["timestamp"].is_string());
    assert!(json.get("pagination").is_none());
}

#[test]
fn partial_meta_data_gets_defaults() {
    let meta: MetaData = serde_json::from_str(r#"{"message": "ok"}"#).unwrap();
    assert_eq!(meta.status, Status::Success);
    assert_eq!(meta.app_status_code, 200);
}
