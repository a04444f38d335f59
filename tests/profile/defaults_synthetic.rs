use crate::common::{bio_page, client_for, mock_profile_page, setup_server};
use ezbio_rs::profile::{Features, Presence, ProfileMedia, Theme};
use serde_json::{Value, json};

#[tokio::test]
async fn sparse_bio_gets_documented_defaults() {
    let server = setup_server();
    let mock = mock_profile_page(
        &server,
        "alice",
        bio_page(r#"{"name":"alice","views":42,"socials":[{"name":"x","url":"http://x"}]}"#),
    );
    let client = client_for(&server);

    let p = ezbio_rs::profile::load_profile(&client, "alice")
        .await
        .unwrap();
    mock.assert();

    assert_eq!(p.name, "alice");
    assert_eq!(p.views, 42);
    assert_eq!(p.description, "");
    assert_eq!(p.title, "");
    assert!(p.ranks.is_empty());
    assert_eq!(p.presence, Presence::default());
    assert_eq!(p.profile, ProfileMedia::default());
    assert_eq!(p.socials.len(), 1);
    assert_eq!(p.socials[0].url, "http://x");
    assert!(p.custom_links.is_empty());
    assert!(p.songs.is_empty());
    assert_eq!(p.theme, Theme::default());
    assert_eq!(p.features, Features::default());
}

#[tokio::test]
async fn empty_bio_name_falls_back_to_username() {
    let server = setup_server();
    let _mock = mock_profile_page(&server, "quiet", bio_page("{}"));
    let client = client_for(&server);

    let p = ezbio_rs::profile::load_profile(&client, "quiet")
        .await
        .unwrap();
    assert_eq!(p.username, "quiet");
    assert_eq!(p.name, "quiet");
    assert_eq!(p.views, 0);
    assert_eq!(p.presence.status, "offline");
}

/// Every subset of top-level bio keys yields the same fixed output shape.
#[tokio::test]
async fn output_shape_is_fixed_for_any_subset() {
    let full = json!({
        "name": "N",
        "views": 1,
        "description": "d",
        "title": "t",
        "ranks": ["r"],
        "bio_presence": {"status": "online"},
        "pfp": {"url": "p"},
        "banner": {"url": "b"},
        "background": {"url": "g", "type": "image"},
        "socials": [{"name": "s", "url": "u"}],
        "customLinks": [{"name": "c", "url": "u", "icon": "i"}],
        "songs": [{"name": "m", "url": "u"}],
        "primarycolor": "#1",
        "glow": true
    });
    let keys: Vec<String> = full.as_object().unwrap().keys().cloned().collect();

    let server = setup_server();
    let client = client_for(&server);

    let shape = |v: &Value| -> Vec<String> {
        let mut out = Vec::new();
        collect_paths("", v, &mut out);
        out
    };

    let mut expected: Option<Vec<String>> = None;
    // Drop one key at a time, plus the empty and full records.
    let mut subsets: Vec<Vec<&String>> = vec![Vec::new(), keys.iter().collect()];
    for skip in &keys {
        subsets.push(keys.iter().filter(|k| *k != skip).collect());
    }

    for (i, subset) in subsets.iter().enumerate() {
        let mut bio = serde_json::Map::new();
        for k in subset {
            bio.insert((*k).clone(), full[k.as_str()].clone());
        }
        let user = format!("u{i}");
        let mock = mock_profile_page(&server, &user, bio_page(&Value::Object(bio).to_string()));

        let out = ezbio_rs::profile::extract(&client, &user).await;
        mock.assert();

        let v = serde_json::to_value(&out).unwrap();
        assert!(v.get("error").is_none(), "unexpected error: {v}");
        let s = shape(&v);
        match &expected {
            Some(e) => assert_eq!(&s, e, "shape differs for subset {subset:?}"),
            None => expected = Some(s),
        }
    }
}

/// Object key paths; array contents are skipped since their length varies.
fn collect_paths(prefix: &str, v: &Value, out: &mut Vec<String>) {
    if let Value::Object(map) = v {
        for (k, child) in map {
            let path = format!("{prefix}/{k}");
            out.push(path.clone());
            if k != "platform" {
                collect_paths(&path, child, out);
            }
        }
    }
}
