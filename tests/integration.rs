// SPDX-License-Identifier: MPL-2.0
use keepsake::app::persisted_state::ViewedStore;
use keepsake::catalog::{Catalog, MemoryId, CATALOG_FILE};
use keepsake::config;
use keepsake::gallery::{Effect, Gallery};
use keepsake::i18n::I18n;
use keepsake::ui::{final_reveal, memory_viewer};
use keepsake::video_player::{PlaybackEvent, PlaybackMessage, VideoSource};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn id(raw: u32) -> MemoryId {
    MemoryId::new(raw).expect("positive id")
}

fn gallery_in(data_dir: &Path, catalog: Catalog) -> Gallery {
    Gallery::new(
        catalog,
        ViewedStore::at(data_dir.to_path_buf()),
        data_dir.join("media"),
        memory_viewer::PlaybackPolicy::default(),
    )
}

#[test]
fn viewing_every_memory_unlocks_the_final_card() {
    let dir = tempdir().expect("create temp dir");
    let mut gallery = gallery_in(dir.path(), Catalog::builtin());
    assert_eq!(gallery.load_viewed_state(), Effect::None);

    for raw in 1..=5 {
        assert_eq!(gallery.open(id(raw)), Effect::None);
        gallery.dismiss_top_overlay();
    }
    assert_eq!(gallery.progress().viewed, 5);
    assert_eq!(gallery.progress().display_percent(), 83);
    assert!(!gallery.reveal().is_visible());

    let effect = gallery.open(id(6));
    assert!(matches!(effect, Effect::ScheduleRevealAnimation(_)));
    assert_eq!(gallery.progress().display_percent(), 100);
    assert!(gallery.reveal().is_visible());
    assert!(!gallery.reveal().is_animated());
    assert!(gallery.is_consistent());

    if let Effect::ScheduleRevealAnimation(generation) = effect {
        gallery.handle_reveal(final_reveal::Message::Animate(generation));
    }
    assert!(gallery.reveal().is_animated());
}

#[test]
fn reopening_a_viewed_memory_changes_nothing() {
    let dir = tempdir().expect("create temp dir");
    let mut gallery = gallery_in(dir.path(), Catalog::builtin());

    let _ = gallery.open(id(3));
    gallery.dismiss_top_overlay();
    let before = gallery.progress();

    assert_eq!(gallery.open(id(3)), Effect::None);
    assert_eq!(gallery.progress(), before);
    assert_eq!(gallery.viewed().len(), 1);
    assert!(gallery.viewer().is_open());
}

#[test]
fn viewed_memories_survive_a_restart() {
    let dir = tempdir().expect("create temp dir");
    {
        let mut gallery = gallery_in(dir.path(), Catalog::builtin());
        let _ = gallery.open(id(2));
        let _ = gallery.open(id(4));
    }

    let mut restarted = gallery_in(dir.path(), Catalog::builtin());
    let _ = restarted.load_viewed_state();
    let viewed: Vec<u32> = restarted.viewed().iter().map(MemoryId::get).collect();
    assert_eq!(viewed, vec![2, 4]);
    assert!(restarted.catalog().get(id(2)).expect("record").is_viewed());
    assert!(!restarted.catalog().get(id(1)).expect("record").is_viewed());
    assert!(restarted.is_consistent());
}

#[test]
fn reset_forgets_viewed_memories_on_disk() {
    let dir = tempdir().expect("create temp dir");
    let mut gallery = gallery_in(dir.path(), Catalog::builtin());
    for raw in 1..=6 {
        let _ = gallery.open(id(raw));
    }
    gallery.dismiss_top_overlay();
    assert!(gallery.reveal().is_visible());

    let _ = gallery.reset_viewed_state();
    assert_eq!(gallery.progress().viewed, 0);
    assert!(!gallery.reveal().is_visible());

    let mut restarted = gallery_in(dir.path(), Catalog::builtin());
    let _ = restarted.load_viewed_state();
    assert!(restarted.viewed().is_empty());
}

#[test]
fn corrupt_state_file_starts_fresh() {
    let dir = tempdir().expect("create temp dir");
    let store = ViewedStore::at(dir.path().to_path_buf());
    let path = store.state_file_path().expect("state path");
    fs::write(&path, b"definitely not cbor").expect("write state");

    let mut gallery = gallery_in(dir.path(), Catalog::builtin());
    let _ = gallery.load_viewed_state();
    assert!(gallery.viewed().is_empty());
    assert_eq!(gallery.progress().total, 6);
}

#[test]
fn unknown_memory_is_ignored() {
    let dir = tempdir().expect("create temp dir");
    let mut gallery = gallery_in(dir.path(), Catalog::builtin());

    assert_eq!(gallery.open(id(42)), Effect::None);
    assert!(!gallery.viewer().is_open());
    assert_eq!(gallery.progress().viewed, 0);
    assert!(ViewedStore::at(dir.path().to_path_buf())
        .state_file_path()
        .is_some_and(|path| !path.exists()));
}

#[test]
fn closing_the_viewer_works_from_any_phase() {
    let dir = tempdir().expect("create temp dir");
    let mut gallery = gallery_in(dir.path(), Catalog::builtin());

    // Closing while nothing is open is a no-op
    let _ = gallery.handle_viewer(memory_viewer::Message::Close);
    assert!(!gallery.viewer().is_open());

    let _ = gallery.open(id(1));
    assert_eq!(gallery.viewer().phase(), memory_viewer::Phase::Loading);
    let _ = gallery.handle_viewer(memory_viewer::Message::Close);
    assert_eq!(gallery.viewer().phase(), memory_viewer::Phase::Closed);

    let _ = gallery.open(id(1));
    let _ = gallery.handle_viewer(memory_viewer::Message::BackdropClicked);
    assert!(!gallery.background_scroll_locked());
}

#[test]
fn escape_closes_the_viewer_before_the_letter() {
    let dir = tempdir().expect("create temp dir");
    let mut gallery = gallery_in(dir.path(), Catalog::builtin());
    for raw in 1..=6 {
        let _ = gallery.open(id(raw));
    }
    gallery.dismiss_top_overlay();

    gallery.handle_reveal(final_reveal::Message::OpenLetter);
    let _ = gallery.open(id(2));
    assert!(gallery.background_scroll_locked());

    assert!(gallery.dismiss_top_overlay());
    assert!(!gallery.viewer().is_open());
    assert!(gallery.reveal().is_letter_open());

    assert!(gallery.dismiss_top_overlay());
    assert!(!gallery.reveal().is_letter_open());
    assert!(!gallery.dismiss_top_overlay());
}

#[test]
fn catalog_file_in_media_dir_replaces_builtin_memories() {
    let dir = tempdir().expect("create temp dir");
    fs::write(
        dir.path().join(CATALOG_FILE),
        r#"
            letter = "See you at the lake."

            [[memories]]
            id = 10
            title = "Lake"
            note = "Cold water, warm sun."
            video = "lake.mp4"
            icon = "sun"

            [[memories]]
            id = 4
            title = "Train"
            note = "The night train north."
            date = "June 1, 2024"
            video = "https://example.com/train.mp4"
        "#,
    )
    .expect("write catalog");

    let (catalog, warning) = Catalog::load_from_dir(dir.path());
    assert!(warning.is_none());
    assert_eq!(catalog.letter(), Some("See you at the lake."));

    let mut gallery = gallery_in(dir.path(), catalog);
    let _ = gallery.open(id(4));
    gallery.dismiss_top_overlay();
    let effect = gallery.open(id(10));
    assert!(matches!(effect, Effect::ScheduleRevealAnimation(_)));
    assert_eq!(gallery.progress().total, 2);
}

#[test]
fn viewed_ids_missing_from_a_new_catalog_are_dropped() {
    let dir = tempdir().expect("create temp dir");
    {
        let mut gallery = gallery_in(dir.path(), Catalog::builtin());
        let _ = gallery.open(id(5));
        let _ = gallery.open(id(6));
    }

    let smaller = Catalog::from_toml_str(
        r#"
            [[memories]]
            id = 5
            title = "Only one"
            note = "n"
            video = "v.mp4"
        "#,
    )
    .expect("valid catalog");
    let mut gallery = gallery_in(dir.path(), smaller);
    let effect = gallery.load_viewed_state();

    assert!(matches!(effect, Effect::ScheduleRevealAnimation(_)));
    assert_eq!(gallery.viewed().len(), 1);
    assert!(gallery.is_consistent());
}

#[test]
fn language_follows_saved_config() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("settings.toml");

    fs::write(&path, "[general]\nlanguage = \"en-US\"\n").expect("write config");
    let loaded = config::load_from_path(&path).expect("load config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    fs::write(&path, "[general]\nlanguage = \"fr\"\n").expect("write config");
    let loaded = config::load_from_path(&path).expect("load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("letter-title"), "Une lettre pour toi");

    // The command line wins over the saved language
    let cli = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(cli.tr("letter-title"), "A letter for you");
}

#[test]
fn failed_memory_retries_the_fallback_once() {
    let dir = tempdir().expect("create temp dir");
    let policy = memory_viewer::PlaybackPolicy {
        autoplay: true,
        fallback: Some(VideoSource::Url("https://example.com/fallback.mp4".into())),
    };
    let mut gallery = Gallery::new(
        Catalog::builtin(),
        ViewedStore::at(dir.path().to_path_buf()),
        dir.path().join("media"),
        policy,
    );
    let _ = gallery.open(id(1));

    let fail = |gallery: &mut Gallery| {
        let (session, _) = gallery.viewer().playback_session().expect("active session");
        gallery.handle_viewer(memory_viewer::Message::Playback(PlaybackEvent {
            session,
            message: PlaybackMessage::Error("Video file not found: video1.mp4".into()),
        }))
    };

    assert_eq!(fail(&mut gallery), memory_viewer::Effect::FallbackStarted);
    assert!(gallery.viewer().is_retrying());
    assert!(gallery.viewer().shows_spinner());

    assert_eq!(fail(&mut gallery), memory_viewer::Effect::None);
    assert_eq!(gallery.viewer().phase(), memory_viewer::Phase::Error);
    assert!(!gallery.viewer().is_retrying());
    assert!(gallery.viewer().fallback_used());

    // Still counted as viewed even though nothing played
    assert!(gallery.viewed().contains(id(1)));
}
