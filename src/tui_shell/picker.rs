//! Overlay list for track/exercise selection.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::widgets::ListState;

use crate::model::ExerciseInfo;

use super::{App, apply_selection};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PickerKind {
    Track,
    Exercise,
}

pub(super) struct PickerItem {
    pub(super) slug: String,
    pub(super) line: String,
}

pub(super) struct Picker {
    pub(super) title: String,
    pub(super) kind: PickerKind,
    pub(super) items: Vec<PickerItem>,
    pub(super) state: ListState,
}

impl Picker {
    pub(super) fn tracks(tracks: Vec<String>) -> Self {
        let items = tracks
            .into_iter()
            .map(|slug| PickerItem {
                line: slug.clone(),
                slug,
            })
            .collect();
        Self::new("pick a track".to_string(), PickerKind::Track, items)
    }

    pub(super) fn exercises(track: &str, exercises: Vec<(String, ExerciseInfo)>) -> Self {
        let items = exercises
            .into_iter()
            .map(|(label, info)| PickerItem {
                line: format!("{label}  [{}]  {}", info.difficulty.label(), info.blurb),
                slug: info.slug,
            })
            .collect();
        Self::new(format!("pick a {track} exercise"), PickerKind::Exercise, items)
    }

    fn new(title: String, kind: PickerKind, items: Vec<PickerItem>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            title,
            kind,
            items,
            state,
        }
    }

    fn step(&mut self, delta: isize) {
        if self.items.is_empty() {
            return;
        }
        let len = self.items.len() as isize;
        let cur = self.state.selected().unwrap_or(0) as isize;
        let next = (cur + delta).rem_euclid(len);
        self.state.select(Some(next as usize));
    }
}

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    let Some(mut picker) = app.picker.take() else {
        return;
    };

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            // dismissed; nothing selected
        }
        KeyCode::Up | KeyCode::Char('k') => {
            picker.step(-1);
            app.picker = Some(picker);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            picker.step(1);
            app.picker = Some(picker);
        }
        KeyCode::Enter => {
            if let Some(i) = picker.state.selected()
                && let Some(item) = picker.items.get(i)
            {
                let slug = item.slug.clone();
                apply_selection(app, picker.kind, &slug);
            }
        }
        _ => app.picker = Some(picker),
    }
}
