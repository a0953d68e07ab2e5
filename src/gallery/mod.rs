// SPDX-License-Identifier: MPL-2.0
//! Gallery controller: the single owner of the catalog, the viewed set and
//! the overlay states.
//!
//! Every mutation of a record's `viewed` flag goes through here together with
//! the matching change to the [`ViewedSet`], followed by a save and a progress
//! recomputation, all within one call. Callers never observe the flag and the
//! set disagreeing.

mod viewed_set;

pub use viewed_set::ViewedSet;

use crate::app::persisted_state::ViewedStore;
use crate::catalog::{Catalog, MemoryId};
use crate::ui::final_reveal;
use crate::ui::gallery::Entrance;
use crate::ui::memory_viewer::{self, PlaybackPolicy};
use std::path::PathBuf;

/// Viewed count over catalog size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub viewed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion in the 0–100 range; an empty catalog is 0%.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * self.viewed as f32 / self.total as f32
    }

    /// Percentage rounded for display (5 of 6 shows as 83).
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn display_percent(self) -> u32 {
        self.percentage().round() as u32
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.total > 0 && self.viewed == self.total
    }
}

/// Work the controller needs the runtime to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Send `final_reveal::Message::Animate(generation)` after the reveal delay.
    ScheduleRevealAnimation(u64),
    /// Send `gallery::Message::CardEntered(generation)` after one entrance step.
    ScheduleCardEntrance(u64),
}

#[derive(Debug)]
pub struct Gallery {
    catalog: Catalog,
    viewed: ViewedSet,
    store: ViewedStore,
    media_dir: PathBuf,
    viewer: memory_viewer::State,
    reveal: final_reveal::State,
    entrance: Entrance,
    progress: Progress,
}

impl Gallery {
    /// Creates a controller with nothing viewed yet. Call
    /// [`load_viewed_state`](Self::load_viewed_state) to restore the last session.
    #[must_use]
    pub fn new(
        catalog: Catalog,
        store: ViewedStore,
        media_dir: PathBuf,
        policy: PlaybackPolicy,
    ) -> Self {
        let progress = Progress {
            viewed: 0,
            total: catalog.len(),
        };
        Self {
            catalog,
            viewed: ViewedSet::new(),
            store,
            media_dir,
            viewer: memory_viewer::State::new(policy),
            reveal: final_reveal::State::default(),
            entrance: Entrance::default(),
            progress,
        }
    }

    /// Restores the persisted viewed set onto the catalog.
    ///
    /// Missing or unreadable state yields an empty set; ids no longer in the
    /// catalog are dropped.
    pub fn load_viewed_state(&mut self) -> Effect {
        let (mut viewed, warning) = self.store.load();
        if let Some(key) = warning {
            tracing::warn!(warning = %key, "viewed state could not be restored");
        }

        let dropped = viewed.retain_known(&self.catalog);
        if dropped > 0 {
            tracing::info!(dropped, "ignoring viewed ids missing from the catalog");
        }

        for record in self.catalog.iter_mut() {
            record.set_viewed(viewed.contains(record.id));
        }
        self.viewed = viewed;
        tracing::debug!(viewed = self.viewed.len(), "viewed state loaded");

        self.update_progress()
    }

    /// Writes the viewed set; failures are logged, never returned.
    pub fn save_viewed_state(&self) {
        if let Some(key) = self.store.save(&self.viewed) {
            tracing::warn!(warning = %key, "viewed state not saved");
        }
    }

    /// Forgets every viewed memory, on disk and in memory.
    pub fn reset_viewed_state(&mut self) -> Effect {
        self.viewed.clear();
        if let Some(key) = self.store.clear() {
            tracing::warn!(warning = %key, "viewed state file not removed");
        }
        for record in self.catalog.iter_mut() {
            record.set_viewed(false);
        }
        tracing::info!("viewed state reset");

        self.update_progress()
    }

    /// Opens the viewer on `id`, marking it viewed the first time.
    ///
    /// Unknown ids are logged and change nothing.
    pub fn open(&mut self, id: MemoryId) -> Effect {
        let Some(record) = self.catalog.get_mut(id) else {
            tracing::error!(memory = %id, "cannot open unknown memory");
            return Effect::None;
        };

        let source = record.video.resolve(&self.media_dir);
        self.viewer.open(record, source);

        if record.is_viewed() {
            return Effect::None;
        }
        record.set_viewed(true);
        self.viewed.insert(id);
        self.save_viewed_state();
        self.update_progress()
    }

    /// Recomputes progress and shows or hides the final card.
    pub fn update_progress(&mut self) -> Effect {
        self.progress = Progress {
            viewed: self.viewed.len(),
            total: self.catalog.len(),
        };

        if self.progress.is_complete() {
            match self.reveal.show() {
                Some(generation) => Effect::ScheduleRevealAnimation(generation),
                None => Effect::None,
            }
        } else {
            self.reveal.hide();
            Effect::None
        }
    }

    /// Hides every card and schedules the first entrance step.
    pub fn start_card_entrance(&mut self) -> Effect {
        if self.catalog.is_empty() {
            return Effect::None;
        }
        Effect::ScheduleCardEntrance(self.entrance.restart())
    }

    pub fn handle_card_entered(&mut self, generation: u64) -> Effect {
        if self.entrance.advance(generation, self.catalog.len()) {
            Effect::ScheduleCardEntrance(generation)
        } else {
            Effect::None
        }
    }

    pub fn handle_viewer(&mut self, message: memory_viewer::Message) -> memory_viewer::Effect {
        self.viewer.handle(message)
    }

    pub fn handle_reveal(&mut self, message: final_reveal::Message) {
        self.reveal.handle(message);
    }

    /// Escape handling: closes the viewer if open, else the letter.
    /// Returns whether anything was dismissed.
    pub fn dismiss_top_overlay(&mut self) -> bool {
        if self.viewer.is_open() {
            self.viewer.close();
            true
        } else if self.reveal.is_letter_open() {
            self.reveal.close_letter();
            true
        } else {
            false
        }
    }

    /// The grid must not scroll while an overlay covers it.
    #[must_use]
    pub fn background_scroll_locked(&self) -> bool {
        self.viewer.is_open() || self.reveal.is_letter_open()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn viewed(&self) -> &ViewedSet {
        &self.viewed
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    #[must_use]
    pub fn viewer(&self) -> &memory_viewer::State {
        &self.viewer
    }

    #[must_use]
    pub fn reveal(&self) -> &final_reveal::State {
        &self.reveal
    }

    #[must_use]
    pub fn entrance(&self) -> &Entrance {
        &self.entrance
    }

    /// Every record's flag matches set membership.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.catalog
            .iter()
            .all(|record| record.is_viewed() == self.viewed.contains(record.id))
            && self.viewed.iter().all(|id| self.catalog.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn id(raw: u32) -> MemoryId {
        MemoryId::new(raw).unwrap()
    }

    fn gallery(dir: &TempDir) -> Gallery {
        Gallery::new(
            Catalog::builtin(),
            ViewedStore::at(dir.path().to_path_buf()),
            dir.path().join("media"),
            PlaybackPolicy::default(),
        )
    }

    #[test]
    fn progress_math() {
        let progress = Progress { viewed: 5, total: 6 };
        assert!((progress.percentage() - 83.333).abs() < 0.01);
        assert_eq!(progress.display_percent(), 83);
        assert!(!progress.is_complete());

        assert_eq!(Progress { viewed: 0, total: 0 }.percentage(), 0.0);
        assert!(!Progress { viewed: 0, total: 0 }.is_complete());
        assert!(Progress { viewed: 6, total: 6 }.is_complete());
    }

    #[test]
    fn first_open_marks_viewed_and_persists() {
        let dir = tempdir().unwrap();
        let mut gallery = gallery(&dir);

        gallery.open(id(3));
        assert!(gallery.catalog().get(id(3)).unwrap().is_viewed());
        assert!(gallery.viewed().contains(id(3)));
        assert_eq!(gallery.progress().viewed, 1);
        assert!(gallery.viewer().is_open());
        assert!(gallery.background_scroll_locked());

        let (persisted, _) = ViewedStore::at(dir.path().to_path_buf()).load();
        assert!(persisted.contains(id(3)));
    }

    #[test]
    fn failed_save_still_marks_viewed() {
        let dir = tempdir().unwrap();
        // A regular file where the state directory should be
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"x").unwrap();
        let mut gallery = Gallery::new(
            Catalog::builtin(),
            ViewedStore::at(blocker.clone()),
            dir.path().join("media"),
            PlaybackPolicy::default(),
        );

        gallery.open(id(2));
        assert!(gallery.catalog().get(id(2)).unwrap().is_viewed());
        assert!(gallery.viewed().contains(id(2)));
        assert_eq!(gallery.progress().viewed, 1);
        assert!(gallery.viewer().is_open());
        assert!(gallery.is_consistent());

        let store = ViewedStore::at(blocker);
        assert_eq!(
            store.save(gallery.viewed()).as_deref(),
            Some("notification-state-dir-error")
        );
        assert!(store.load().0.is_empty());
    }

    #[test]
    fn card_entrance_steps_through_every_card() {
        let dir = tempdir().unwrap();
        let mut gallery = gallery(&dir);
        let total = gallery.catalog().len();

        let Effect::ScheduleCardEntrance(generation) = gallery.start_card_entrance() else {
            panic!("entrance should be scheduled");
        };
        assert!(!gallery.entrance().is_entered(0));

        let mut steps = 1;
        while gallery.handle_card_entered(generation) == Effect::ScheduleCardEntrance(generation) {
            steps += 1;
        }
        assert_eq!(steps, total);
        assert!((0..total).all(|position| gallery.entrance().is_entered(position)));

        // Restarting hides the cards again and strands the old generation
        let Effect::ScheduleCardEntrance(next) = gallery.start_card_entrance() else {
            panic!("entrance should be scheduled");
        };
        assert_ne!(next, generation);
        assert_eq!(gallery.handle_card_entered(generation), Effect::None);
        assert!(!gallery.entrance().is_entered(0));
    }

    #[test]
    fn repeated_open_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut gallery = gallery(&dir);

        gallery.open(id(2));
        gallery.dismiss_top_overlay();
        gallery.open(id(2));
        assert_eq!(gallery.viewed().len(), 1);
        assert_eq!(gallery.progress().viewed, 1);
        assert!(gallery.is_consistent());
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let dir = tempdir().unwrap();
        let mut gallery = gallery(&dir);

        assert_eq!(gallery.open(id(99)), Effect::None);
        assert!(gallery.viewed().is_empty());
        assert!(!gallery.viewer().is_open());
        assert!(!gallery.background_scroll_locked());
    }

    #[test]
    fn last_open_schedules_reveal() {
        let dir = tempdir().unwrap();
        let mut gallery = gallery(&dir);

        for raw in 1..=5 {
            assert_eq!(gallery.open(id(raw)), Effect::None);
        }
        assert_eq!(gallery.progress().display_percent(), 83);
        assert!(!gallery.reveal().is_visible());

        let effect = gallery.open(id(6));
        assert!(matches!(effect, Effect::ScheduleRevealAnimation(_)));
        assert_eq!(gallery.progress().display_percent(), 100);
        assert!(gallery.reveal().is_visible());

        if let Effect::ScheduleRevealAnimation(generation) = effect {
            gallery.handle_reveal(final_reveal::Message::Animate(generation));
        }
        assert!(gallery.reveal().is_animated());
    }

    #[test]
    fn reset_clears_everything() {
        let dir = tempdir().unwrap();
        let mut gallery = gallery(&dir);
        for raw in 1..=6 {
            gallery.open(id(raw));
        }
        gallery.dismiss_top_overlay();

        gallery.reset_viewed_state();
        assert!(gallery.viewed().is_empty());
        assert!(gallery.catalog().iter().all(|record| !record.is_viewed()));
        assert_eq!(gallery.progress().percentage(), 0.0);
        assert!(!gallery.reveal().is_visible());

        let mut reloaded = self::gallery(&dir);
        reloaded.load_viewed_state();
        assert!(reloaded.viewed().is_empty());
    }

    #[test]
    fn escape_closes_viewer_before_letter() {
        let dir = tempdir().unwrap();
        let mut gallery = gallery(&dir);
        for raw in 1..=6 {
            gallery.open(id(raw));
        }
        gallery.dismiss_top_overlay();
        gallery.handle_reveal(final_reveal::Message::OpenLetter);
        gallery.open(id(1));

        assert!(gallery.dismiss_top_overlay());
        assert!(!gallery.viewer().is_open());
        assert!(gallery.reveal().is_letter_open());

        assert!(gallery.dismiss_top_overlay());
        assert!(!gallery.reveal().is_letter_open());
        assert!(!gallery.background_scroll_locked());

        assert!(!gallery.dismiss_top_overlay());
    }

    #[test]
    fn load_applies_flags_and_drops_unknown_ids() {
        let dir = tempdir().unwrap();
        let store = ViewedStore::at(dir.path().to_path_buf());
        let stored: ViewedSet = [id(1), id(4), id(42)].into_iter().collect();
        assert!(store.save(&stored).is_none());

        let mut gallery = gallery(&dir);
        gallery.load_viewed_state();
        assert_eq!(gallery.viewed().len(), 2);
        assert!(gallery.catalog().get(id(4)).unwrap().is_viewed());
        assert!(!gallery.catalog().get(id(2)).unwrap().is_viewed());
        assert!(gallery.is_consistent());
        assert_eq!(gallery.progress(), Progress { viewed: 2, total: 6 });
    }

    #[test]
    fn viewer_uses_media_dir_for_relative_videos() {
        let dir = tempdir().unwrap();
        let mut gallery = gallery(&dir);
        gallery.open(id(1));
        let (_, source) = gallery.viewer().playback_session().unwrap();
        assert_eq!(
            source,
            &crate::video_player::VideoSource::File(dir.path().join("media").join("video1.mp4"))
        );
    }
}
