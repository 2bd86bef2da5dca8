//! # Page Lifecycle Integration Test
//!
//! Mounts the page on headless surfaces and checks that everything taken on
//! mount is given back on unmount, and that the theme survives a reload.
//!
//! Run with: cargo test -p gst_desk --test page_lifecycle

use std::sync::Arc;

use gst_desk::ui::{
    DeviceProfile, FollowerState, ResultsSection, ThemeIcon, ThemeMode, ThemePreference,
};
use gst_desk::{
    HeadlessSurface, MemoryThemePersistence, Page, PageConfig, ThemeStore, TARGET_FRAME_TIME,
};
use gst_shared::{ElementInfo, ElementKind, PointerEvent, PointerEventKind};

fn page_on(profile: DeviceProfile) -> Page {
    Page::new(&PageConfig::default(), HeadlessSurface::new(profile)).unwrap()
}

fn page_sharing(store: &Arc<ThemeStore>) -> Page {
    let surface = HeadlessSurface::desktop();
    Page::with_theme_store(&PageConfig::default(), surface, Arc::clone(store)).unwrap()
}

fn dt() -> f32 {
    TARGET_FRAME_TIME.as_secs_f32()
}

#[test]
fn unmount_restores_cursor_once_and_cancels_frame() {
    let mut page = page_on(DeviceProfile::DESKTOP);
    let state = page.mount(Box::new(MemoryThemePersistence::default())).unwrap();
    assert_eq!(state, FollowerState::Active);
    assert!(page.surface().cursor_hidden());
    for kind in PointerEventKind::ALL {
        assert!(page.surface().listens_to(kind), "no listener for {kind:?}");
    }

    page.pointer_sender().send(PointerEvent::moved(40.0, 40.0));
    for _ in 0..10 {
        assert!(page.tick(dt()).is_some());
    }
    assert_eq!(page.surface().pending_frames().len(), 1);

    assert!(page.unmount());
    assert!(!page.unmount());

    let surface = page.surface();
    assert!(!surface.cursor_hidden());
    assert_eq!(surface.cursor_restores(), 1);
    assert_eq!(surface.frames_cancelled(), 1);
    assert!(surface.pending_frames().is_empty());
    assert_eq!(surface.listener_count(), 0);

    // Nothing is scheduled any more, so later ticks draw nothing.
    assert!(page.tick(dt()).is_none());
}

#[test]
fn touch_only_device_never_activates() {
    let mut page = page_on(DeviceProfile::TOUCH_ONLY);
    let state = page.mount(Box::new(MemoryThemePersistence::default())).unwrap();
    assert_eq!(state, FollowerState::Inactive);

    page.pointer_sender().send(PointerEvent::moved(10.0, 10.0));
    assert!(page.tick(dt()).is_none());
    assert!(page.view().cursor.is_none());

    let surface = page.surface();
    assert!(!surface.cursor_hidden());
    assert_eq!(surface.frames_requested(), 0);
    assert_eq!(surface.listener_count(), 0);

    assert!(page.unmount());
    assert_eq!(page.surface().cursor_restores(), 0);
}

#[test]
fn hybrid_device_runs_the_follower() {
    let mut page = page_on(DeviceProfile::HYBRID);
    let state = page.mount(Box::new(MemoryThemePersistence::default())).unwrap();
    assert_eq!(state, FollowerState::Active);
}

#[test]
fn hovering_a_button_grows_the_outline() {
    let mut page = page_on(DeviceProfile::DESKTOP);
    page.mount(Box::new(MemoryThemePersistence::default())).unwrap();

    page.pointer_sender().send(PointerEvent::Over {
        target: ElementInfo::of(ElementKind::Button),
    });
    for _ in 0..20 {
        page.tick(dt());
    }
    let cursor = page.view().cursor.unwrap();
    assert!((cursor.outline_scale - 1.5).abs() < f32::EPSILON);
}

#[test]
fn theme_toggle_persists_across_reload() {
    let storage = MemoryThemePersistence::default();

    let mut page = page_on(DeviceProfile::DESKTOP);
    assert_eq!(page.view().theme_icon, ThemeIcon::Sun);
    assert_eq!(page.click_theme_toggle(), None);

    page.mount(Box::new(storage.clone())).unwrap();
    assert_eq!(page.theme().mode(), ThemeMode::Light);
    assert_eq!(page.view().theme_icon, ThemeIcon::Moon);

    assert_eq!(page.click_theme_toggle(), Some(ThemeMode::Dark));
    assert_eq!(page.view().theme_icon, ThemeIcon::Sun);
    assert_eq!(storage.stored(), Some(ThemePreference::Dark));
    page.unmount();

    let mut reloaded = page_on(DeviceProfile::DESKTOP);
    reloaded.mount(Box::new(storage)).unwrap();
    assert_eq!(reloaded.theme().mode(), ThemeMode::Dark);
    assert_eq!(reloaded.view().palette, gst_desk::ui::Palette::DARK);
}

#[test]
fn shared_theme_store_is_seen_by_every_page() {
    let store = ThemeStore::shared(ThemePreference::System, ThemeMode::Dark);
    let first = page_sharing(&store);
    let second = page_sharing(&store);

    store.set_preference(ThemePreference::Light);
    assert_eq!(first.theme().mode(), ThemeMode::Light);
    assert_eq!(second.theme().mode(), ThemeMode::Light);
}

#[test]
fn overfilled_bus_still_delivers_the_final_leave() {
    let mut page = page_on(DeviceProfile::DESKTOP);
    page.mount(Box::new(MemoryThemePersistence::default())).unwrap();

    let pointer = page.pointer_sender();
    for i in 0..300 {
        assert!(pointer.send(PointerEvent::moved(f64::from(i), 0.0)));
    }
    assert!(pointer.send(PointerEvent::Leave));

    let frame = page.tick(dt()).unwrap();
    assert!(!frame.visible);
    assert_eq!(frame.dot.x, 299.0);
}

#[test]
fn unmounting_one_page_keeps_the_other_persisting() {
    let store = ThemeStore::shared(ThemePreference::Light, ThemeMode::Light);
    let storage = MemoryThemePersistence::default();

    let mut first = page_sharing(&store);
    let mut second = page_sharing(&store);
    first.mount(Box::new(storage.clone())).unwrap();
    second.mount(Box::new(storage.clone())).unwrap();

    assert!(first.unmount());
    assert!(store.is_initialised());

    assert_eq!(second.click_theme_toggle(), Some(ThemeMode::Dark));
    assert_eq!(storage.stored(), Some(ThemePreference::Dark));

    assert!(second.unmount());
    assert!(!store.is_initialised());
    assert_eq!(storage.stored(), Some(ThemePreference::Dark));
}

#[test]
fn form_results_flow_into_the_page_view() {
    let mut page = page_on(DeviceProfile::DESKTOP);
    page.form_mut().set_amount("500");
    assert!(page.form_mut().select_preset(5.0));

    match page.view().calculator.results {
        ResultsSection::Breakdown(results) => {
            assert_eq!(results.tax_label, "GST (5%)");
            assert_eq!(results.tax, "₹25.00");
            assert_eq!(results.total, "₹525.00");
        }
        other => panic!("expected breakdown, got {other:?}"),
    }

    page.form_mut().reset();
    assert_eq!(page.view().calculator.results, ResultsSection::Hidden);
    assert!((page.form().current_rate() - 18.0).abs() < f64::EPSILON);
}
