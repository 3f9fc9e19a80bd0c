//! Property tests for dashboard transitions
//!
//! These tests check the camera bounds and the involution/restore properties
//! across arbitrary action sequences.

use fra_atlas_core::models::view_state::{MAX_ZOOM, MIN_ZOOM};
use fra_atlas_core::models::ViewStatePatch;
use fra_atlas_core::{Action, DashboardState};
use proptest::prelude::*;

const LAYER_IDS: [&str; 6] = ["satellite", "forest", "boundaries", "settlements", "terrain", "rivers"];
const STATE_IDS: [&str; 5] = ["madhya-pradesh", "tripura", "odisha", "telangana", "kerala"];

fn camera_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::ZoomIn),
        Just(Action::ZoomOut),
        Just(Action::Toggle3d),
        Just(Action::SelectLocation),
        (-180.0f64..180.0, -90.0f64..90.0, -50.0f64..50.0, -360.0f64..360.0).prop_map(
            |(lon, lat, zoom, bearing)| Action::SetView(ViewStatePatch {
                longitude: Some(lon),
                latitude: Some(lat),
                zoom: Some(zoom),
                bearing: Some(bearing),
                ..Default::default()
            })
        ),
        prop::sample::select(STATE_IDS.to_vec()).prop_map(|id| Action::ChangeState(id.to_string())),
    ]
}

proptest! {
    #[test]
    fn zoom_stays_within_bounds(actions in prop::collection::vec(camera_action(), 0..60)) {
        let mut state = DashboardState::default();
        for action in actions {
            let _ = state.apply(action);
            prop_assert!(state.view.zoom >= MIN_ZOOM && state.view.zoom <= MAX_ZOOM);
        }
    }

    #[test]
    fn reset_view_restores_selected_state_camera(
        actions in prop::collection::vec(camera_action(), 0..40)
    ) {
        let mut state = DashboardState::default();
        for action in actions {
            let _ = state.apply(action);
        }

        state.reset_view().unwrap();

        let record = state.selected_record().unwrap();
        prop_assert_eq!(state.view.center(), record.center);
        prop_assert_eq!(state.view.zoom, 7.0);
        prop_assert_eq!(state.view.pitch, 0.0);
        prop_assert_eq!(state.view.bearing, 0.0);
    }

    #[test]
    fn toggle_3d_twice_is_identity(actions in prop::collection::vec(camera_action(), 0..30)) {
        let mut state = DashboardState::default();
        for action in actions {
            let _ = state.apply(action);
        }
        let pitch = state.view.pitch;

        state.apply(Action::Toggle3d).unwrap();
        state.apply(Action::Toggle3d).unwrap();

        prop_assert_eq!(state.view.pitch, pitch);
    }

    #[test]
    fn toggle_layer_twice_is_identity(id in prop::sample::select(LAYER_IDS.to_vec())) {
        let mut state = DashboardState::default();
        let before = state.layers.clone();

        let first = state.apply(Action::ToggleLayer(id.to_string()));
        let second = state.apply(Action::ToggleLayer(id.to_string()));

        prop_assert_eq!(first.is_ok(), second.is_ok());
        prop_assert_eq!(&state.layers, &before);
    }

    #[test]
    fn unknown_state_leaves_everything_untouched(actions in prop::collection::vec(camera_action(), 0..20)) {
        let mut state = DashboardState::default();
        for action in actions {
            let _ = state.apply(action);
        }
        let before = state.clone();

        prop_assert!(state.apply(Action::ChangeState("atlantis".to_string())).is_err());
        prop_assert_eq!(state, before);
    }
}

#[test]
fn change_state_to_tripura_keeps_tilt() {
    let mut state = DashboardState::default();
    state.apply(Action::ChangeState("tripura".into())).unwrap();

    assert_eq!(state.view.longitude, 91.9882);
    assert_eq!(state.view.latitude, 23.9408);
    assert_eq!(state.view.zoom, 7.0);
    assert_eq!(state.view.pitch, 0.0);
    assert_eq!(state.view.bearing, 0.0);
}

#[test]
fn history_after_mixed_submissions() {
    let mut state = DashboardState::default();
    for query in ["a", "b", "a", "c", "d", "e"] {
        state.apply(Action::SubmitQuery(query.into())).unwrap();
    }
    assert_eq!(state.search.history().to_vec(), ["e", "d", "c", "a", "b"]);
}
